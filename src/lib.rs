//! Robust summarization of noisy performance-test runs and sample-size
//! power simulation.
//!
//! Performance counters are collected as short, noisy series: a handful of
//! repetitions per component, polluted by a single slow outlier run or by
//! cold-cache bias in the first run. This workspace turns those series into
//! outlier-resistant point estimates and, separately, answers the question
//! "how many repetitions do I need before a regression of a given size is
//! detectable?" by resampling a historical population at candidate sample
//! sizes and scoring each size's statistical power.
//!
//! # Crates
//!
//! - [`perfsift_core`] - stripping-aware aggregation functions, the shared
//!   error type, and the ordered `Record`/`Template` result model
//! - [`perfsift_model`] - `TestComponent` and `TestSuite`, with the
//!   two-tier legacy/refined suite score derivation
//! - [`perfsift_analyser`] - the pluggable result-shaping analysers and
//!   their closed name registry
//! - [`perfsift_simulate`] - the Monte-Carlo sample-size simulation engine
//!
//! # Example
//!
//! ```rust
//! use perfsift::{analyser, SuiteFormat, Template, TestSuite};
//!
//! let suite = TestSuite::parse(
//!     SuiteFormat::MultiSeries,
//!     [("tsvg_hixie", "102.0,98.5,97.9,131.2"), ("tsvg_composite", "45.1,44.8,46.0,44.9")],
//! )
//! .unwrap();
//!
//! let mut template = Template::new();
//! template.set("revision", "a8c3f0d21b44");
//! template.set("machine", "talos-r3-xp-041");
//!
//! let mut build = analyser::from_name("build").unwrap();
//! build.parse_data(&suite, &template).unwrap();
//! assert_eq!(build.results().len(), 1);
//! ```

pub use perfsift_analyser as analyser;
pub use perfsift_core::{aggregate, Error, Estimate, Record, Result, Strip, Template};
pub use perfsift_model::{SuiteFormat, TestComponent, TestSuite};
pub use perfsift_simulate as simulate;
pub use perfsift_simulate::{run_simulations, Simulation, SimulationReport};
