//! Result-shaping analysers over measurement suites
//!
//! An analyser is a stateful accumulator implementing the [`Analyser`]
//! contract: it consumes one [`TestSuite`](perfsift_model::TestSuite) at a
//! time together with a shared field
//! [`Template`](perfsift_core::Template), and buffers zero or more
//! flattened [`Record`](perfsift_core::Record)s. Downstream table writers
//! drain the buffer through [`Analyser::results`] and
//! [`Analyser::flush`].
//!
//! The family is a closed set selected by name through [`from_name`]:
//!
//! | Name | Shape |
//! |------|-------|
//! | `build` | one record per suite (legacy + refined scores) |
//! | `comp` | one record per component (summary columns) |
//! | `comp_wide` | `comp` plus raw per-run columns |
//! | `run` | one record per individual run |
//! | `run_diff` | one record per run, as difference from the previous run |
//!
//! # Example
//!
//! ```rust
//! use perfsift_analyser::from_name;
//! use perfsift_core::Template;
//! use perfsift_model::{SuiteFormat, TestSuite};
//!
//! let suite = TestSuite::parse(
//!     SuiteFormat::MultiSeries,
//!     [("tsvg_hixie", "102.0,98.5,97.9")],
//! )
//! .unwrap();
//!
//! let mut analyser = from_name("run").unwrap();
//! analyser.parse_data(&suite, &Template::new()).unwrap();
//! assert_eq!(analyser.results().len(), 3);
//! ```

mod build;
mod component;
mod run;
mod traits;

pub use build::BuildAnalyser;
pub use component::ComponentAnalyser;
pub use run::{RunAnalyser, RunDifferenceAnalyser};
pub use traits::{Analyser, DataKind};

use perfsift_core::{Error, Result};
use tracing::debug;

/// The closed set of analyser names [`from_name`] accepts.
pub const ANALYSER_NAMES: &[&str] = &["build", "comp", "comp_wide", "run", "run_diff"];

/// Construct an analyser by registry name. Unknown names are a
/// configuration error, rejected before any computation starts.
pub fn from_name(name: &str) -> Result<Box<dyn Analyser>> {
    let analyser: Box<dyn Analyser> = match name {
        "build" => Box::new(BuildAnalyser::new()),
        "comp" => Box::new(ComponentAnalyser::new()),
        "comp_wide" => Box::new(ComponentAnalyser::wide()),
        "run" => Box::new(RunAnalyser::new()),
        "run_diff" => Box::new(RunDifferenceAnalyser::new()),
        other => return Err(Error::UnknownAnalyser(other.to_string())),
    };
    debug!(name, suffix = analyser.result_suffix(), "constructed analyser");
    Ok(analyser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_name() {
        for name in ANALYSER_NAMES {
            let analyser = from_name(name).unwrap();
            assert!(!analyser.headers().is_empty());
            assert_eq!(analyser.results().len(), 0);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        match from_name("corrupt") {
            Err(Error::UnknownAnalyser(name)) => assert_eq!(name, "corrupt"),
            other => panic!("expected UnknownAnalyser, got {other:?}"),
        }
    }

    #[test]
    fn test_suffixes_are_distinct_per_name() {
        assert_eq!(from_name("build").unwrap().result_suffix(), "build");
        assert_eq!(from_name("run").unwrap().result_suffix(), "run");
        assert_eq!(from_name("run_diff").unwrap().result_suffix(), "run_diff");
        // Both component configurations group under the same suffix
        assert_eq!(from_name("comp_wide").unwrap().result_suffix(), "comp");
    }
}
