//! Whole-suite score analyser

use crate::traits::{Analyser, DataKind};
use perfsift_core::{Record, Result, Template};
use perfsift_model::TestSuite;

/// Emits one record per suite carrying the legacy and refined suite scores
/// with their standard deviations.
#[derive(Debug, Default)]
pub struct BuildAnalyser {
    results: Vec<Record>,
}

impl BuildAnalyser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyser for BuildAnalyser {
    fn parse_data(&mut self, suite: &TestSuite, template: &Template) -> Result<()> {
        let old = suite.old_average()?;
        let new = suite.new_average()?;

        let mut record = template.instantiate();
        record.set("old_average", old.value);
        record.set("old_stddev", old.stddev);
        record.set("new_average", new.value);
        record.set("new_stddev", new.stddev);
        self.results.push(record);
        Ok(())
    }

    fn headers(&self) -> Vec<String> {
        ["old_average", "old_stddev", "new_average", "new_stddev"]
            .map(String::from)
            .to_vec()
    }

    fn result_suffix(&self) -> &'static str {
        "build"
    }

    fn handled_kinds(&self) -> &'static [DataKind] {
        &[DataKind::TestRuns]
    }

    fn results(&self) -> &[Record] {
        &self.results
    }

    fn flush(&mut self) {
        self.results.clear();
    }
}
