//! The common analyser contract

use perfsift_core::{Record, Result, Template};
use perfsift_model::TestSuite;

/// The closed set of input document kinds a caller can route.
///
/// Measurement suites carry `TestRuns`. Raw build logs (`BuildLogs`) are
/// consumed only by log scanners that live outside this crate; the variant
/// exists so callers can route every document kind through one dispatch
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    TestRuns,
    BuildLogs,
}

impl DataKind {
    /// The wire tag for this document kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TestRuns => "testruns",
            Self::BuildLogs => "logs",
        }
    }
}

/// A stateful accumulator that reshapes measurement suites into flattened
/// result records.
///
/// One suite is fully routed through every active analyser before the next
/// is read; each analyser owns its buffer exclusively. A failed
/// [`parse_data`](Analyser::parse_data) call leaves the buffer exactly as
/// it was, so one malformed suite never corrupts the records of the
/// others.
pub trait Analyser: std::fmt::Debug {
    /// Consume one suite, appending zero or more records built from the
    /// template.
    fn parse_data(&mut self, suite: &TestSuite, template: &Template) -> Result<()>;

    /// The ordered analyser-specific field names. Every buffered record
    /// holds a value for each name; downstream table writers prepend the
    /// template's own field names.
    fn headers(&self) -> Vec<String>;

    /// Naming tag used to group this analyser's output.
    fn result_suffix(&self) -> &'static str;

    /// The document kinds this analyser accepts.
    fn handled_kinds(&self) -> &'static [DataKind];

    /// Read-only snapshot of the buffered records.
    fn results(&self) -> &[Record];

    /// Clear the buffer and rewind any per-pass counters, so replaying an
    /// identical input sequence reproduces identical records. Safe at any
    /// time; required between independent output passes. Session-scoped
    /// state such as wide header widening survives a flush.
    fn flush(&mut self);
}
