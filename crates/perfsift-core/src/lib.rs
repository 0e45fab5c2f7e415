//! Core types for robust performance measurement analysis
//!
//! This crate provides the foundation the rest of the workspace builds on:
//!
//! - [`aggregate`] - median and mean/stddev over short run series, each
//!   with the two selectable outlier-stripping policies (strip-max and
//!   strip-first)
//! - [`Record`] / [`Template`] - the insertion-ordered result rows every
//!   analyser emits and the shared identifying-field template they start
//!   from
//! - [`Error`] / [`Result`] - the unified error type for all perfsift
//!   crates
//!
//! # Example
//!
//! ```rust
//! use perfsift_core::{aggregate, Strip};
//!
//! // A short talos-style series: first run carries warm-up bias,
//! // one run is an outlier.
//! let runs = [180.0, 102.0, 99.0, 101.0, 143.0, 97.0];
//!
//! // Legacy scoring drops the single slowest run.
//! let legacy = aggregate::mean_stddev(&runs, Strip::MAX).unwrap();
//!
//! // Refined scoring drops the cold-start run instead.
//! let refined = aggregate::median(&runs, Strip::FIRST).unwrap();
//!
//! assert!(legacy.value < 180.0);
//! assert_eq!(refined, 101.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod record;

pub use aggregate::{mean_stddev, median, Estimate, Strip};
pub use error::{Error, Result};
pub use record::{Record, Template};
