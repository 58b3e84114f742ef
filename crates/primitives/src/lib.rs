#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod symbol;
pub use symbol::Symbol;

mod polarity;
pub use polarity::{Polarity, PolarityRegistry};

mod table;
pub use table::{FactorTable, SYMBOL_COL};

mod scores;
pub use scores::{RANK_SCORE_COL, RANK_SUFFIX, RankedTable, Z_SCORE_COL, Z_SUFFIX, ZScoredTable};
