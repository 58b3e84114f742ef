//! # screener
//!
//! A multi-factor equity screening and ranking engine.
//!
//! This crate provides a unified interface to the screener ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Trait abstractions
//! - `math`: Cross-sectional statistics
//! - `engine`: Scoring methodologies and the screening pipeline
//! - `io`: CSV input and export adapters
//! - `cli`: The `screen` and `fetch` binaries
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use screener::engine::Screener;
//! use screener::primitives::PolarityRegistry;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // screener = { version = "0.1", default-features = false, features = ["engine"] }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/screener-rs/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use screener_primitives as primitives;

#[cfg(feature = "traits")]
#[doc(inline)]
pub use screener_traits as traits;

#[cfg(feature = "math")]
#[doc(inline)]
pub use screener_math as math;

#[cfg(feature = "engine")]
#[doc(inline)]
pub use screener_engine as engine;

#[cfg(feature = "io")]
#[doc(inline)]
pub use screener_io as io;
