//! Measurement suite model
//!
//! One performance-test run produces a [`TestSuite`]: a set of named
//! [`TestComponent`] run series, tagged single-series ("ts") or
//! multi-series ("tp"). Suites are built once per input document, read-only
//! afterwards, and derive their legacy and refined suite-level scores on
//! demand through the aggregation functions in `perfsift-core`.
//!
//! # Example
//!
//! ```rust
//! use perfsift_model::{SuiteFormat, TestSuite};
//!
//! let suite = TestSuite::parse(
//!     SuiteFormat::SingleSeries,
//!     [("ts", "10.0,20.0,30.0")],
//! )
//! .unwrap();
//!
//! // Legacy score strips the slowest run, refined keeps everything.
//! assert_eq!(suite.old_average().unwrap().value, 15.0);
//! assert_eq!(suite.new_average().unwrap().value, 20.0);
//! ```

mod component;
mod suite;

pub use component::TestComponent;
pub use suite::{SuiteFormat, TestSuite};
