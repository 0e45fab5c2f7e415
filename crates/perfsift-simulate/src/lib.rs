//! Monte-Carlo sample-size power simulation
//!
//! How many repetitions does a performance test need before a regression
//! of a given size is reliably detectable? This crate answers that
//! empirically: it resamples a historical population of real observations
//! at candidate sample sizes and scores each size with one-sample t-tests
//! against the population mean and against threshold-shifted reference
//! means.
//!
//! Three output collections are produced per sweep, each a delimited
//! table under its own header set:
//!
//! - per-sample point estimates ([`SampleEstimate`])
//! - per-sample hypothesis outcomes ([`HypothesisOutcome`])
//! - per-size aggregate detection power ([`DetectionPower`])
//!
//! # Example
//!
//! ```rust
//! use perfsift_simulate::run_simulations;
//! use rand::thread_rng;
//!
//! // A noisy historical population of timing observations.
//! let population: Vec<i64> = (0..80).map(|i| 430 + (i * 13) % 17).collect();
//!
//! let report =
//!     run_simulations(&population, 50, 3..=6, 0.02, &mut thread_rng()).unwrap();
//!
//! assert_eq!(report.power.len(), 4);
//! for power in &report.power {
//!     for ratio in [power.less_ratio, power.more_ratio, power.same_ratio] {
//!         assert!(ratio.is_nan() || (0.0..=1.0).contains(&ratio));
//!     }
//! }
//! ```

mod population;
mod simulation;
mod ttest;

pub use population::read_population;
pub use simulation::{
    run_simulations, DetectionPower, HypothesisOutcome, SampleEstimate, Simulation,
    SimulationReport, SENTINEL_P, SIGNIFICANCE,
};
pub use ttest::t_test_one_sample;
