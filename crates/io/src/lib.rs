#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod csv;
pub use csv::{ranked_frame, read_factor_table, read_symbol_list, write_csv, zscored_frame};

mod exclude;
pub use exclude::remove_symbols;

mod error;
pub use error::IoError;
