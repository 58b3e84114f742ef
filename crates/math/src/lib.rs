#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod rank;
pub use rank::{RankDirection, fractional_rank};

mod zscore;
pub use zscore::{is_degenerate, mean, sample_std, zscore};

mod winsorize;
pub use winsorize::winsorize;

mod error;
pub use error::MathError;
