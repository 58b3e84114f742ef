#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod clean;
pub use clean::{CleanReport, clean_table, validate_schema};

mod rank;
pub use rank::RankScorer;

mod zscore;
pub use zscore::{ZScoreConfig, ZScoreOutput, ZScoreScorer};

mod select;
pub use select::sort_indices;

mod pipeline;
pub use pipeline::{DEFAULT_TOP_N, ScreenOutcome, Screener, ScreenerConfig};

mod error;
pub use error::EngineError;
