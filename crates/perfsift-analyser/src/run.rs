//! Per-run analysers
//!
//! Timing counters carry no meaningful sub-unit precision, so both
//! analysers here truncate to whole integers.

use crate::traits::{Analyser, DataKind};
use perfsift_core::{Record, Result, Template};
use perfsift_model::TestSuite;

const RUN_HEADERS: [&str; 4] = ["test_name", "index", "run_num", "value"];

fn run_record(template: &Template, name: &str, index: u64, num: usize, value: i64) -> Record {
    let mut record = template.instantiate();
    record.set("test_name", name);
    record.set("index", index);
    record.set("run_num", num as u64);
    record.set("value", value);
    record
}

/// Emits one record per individual run: the owning component, the suite
/// index, the run position, and the value truncated to an integer.
///
/// The suite index is this instance's own counter, incremented once per
/// suite and independent of any other analyser's counter.
#[derive(Debug, Default)]
pub struct RunAnalyser {
    index: u64,
    results: Vec<Record>,
}

impl RunAnalyser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyser for RunAnalyser {
    fn parse_data(&mut self, suite: &TestSuite, template: &Template) -> Result<()> {
        for (name, component) in suite.components() {
            for (num, value) in component.values().iter().enumerate() {
                self.results
                    .push(run_record(template, name, self.index, num, value.trunc() as i64));
            }
        }
        self.index += 1;
        Ok(())
    }

    fn headers(&self) -> Vec<String> {
        RUN_HEADERS.map(String::from).to_vec()
    }

    fn result_suffix(&self) -> &'static str {
        "run"
    }

    fn handled_kinds(&self) -> &'static [DataKind] {
        &[DataKind::TestRuns]
    }

    fn results(&self) -> &[Record] {
        &self.results
    }

    fn flush(&mut self) {
        self.results.clear();
        self.index = 0;
    }
}

/// Like [`RunAnalyser`], but the emitted value is the integer difference
/// from the immediately preceding run in the same component. The first
/// run's previous value is defined as zero, so the first difference is the
/// run value itself.
#[derive(Debug, Default)]
pub struct RunDifferenceAnalyser {
    index: u64,
    results: Vec<Record>,
}

impl RunDifferenceAnalyser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyser for RunDifferenceAnalyser {
    fn parse_data(&mut self, suite: &TestSuite, template: &Template) -> Result<()> {
        for (name, component) in suite.components() {
            let mut previous = 0i64;
            for (num, value) in component.values().iter().enumerate() {
                let truncated = value.trunc() as i64;
                self.results.push(run_record(
                    template,
                    name,
                    self.index,
                    num,
                    truncated - previous,
                ));
                previous = truncated;
            }
        }
        self.index += 1;
        Ok(())
    }

    fn headers(&self) -> Vec<String> {
        RUN_HEADERS.map(String::from).to_vec()
    }

    fn result_suffix(&self) -> &'static str {
        "run_diff"
    }

    fn handled_kinds(&self) -> &'static [DataKind] {
        &[DataKind::TestRuns]
    }

    fn results(&self) -> &[Record] {
        &self.results
    }

    fn flush(&mut self) {
        self.results.clear();
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfsift_model::SuiteFormat;

    fn values_of(analyser: &dyn Analyser) -> Vec<i64> {
        analyser
            .results()
            .iter()
            .map(|r| r.get("value").unwrap().as_i64().unwrap())
            .collect()
    }

    #[test]
    fn test_run_values_truncate() {
        let suite =
            TestSuite::parse(SuiteFormat::MultiSeries, [("a", "5.9,8.2,-3.7")]).unwrap();
        let mut analyser = RunAnalyser::new();
        analyser.parse_data(&suite, &Template::new()).unwrap();

        // Truncation toward zero, not rounding
        assert_eq!(values_of(&analyser), vec![5, 8, -3]);
        let positions: Vec<u64> = analyser
            .results()
            .iter()
            .map(|r| r.get("run_num").unwrap().as_u64().unwrap())
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_run_differences_start_from_zero() {
        let suite =
            TestSuite::parse(SuiteFormat::MultiSeries, [("a", "5.0,8.0,8.0,3.0")]).unwrap();
        let mut analyser = RunDifferenceAnalyser::new();
        analyser.parse_data(&suite, &Template::new()).unwrap();

        assert_eq!(values_of(&analyser), vec![5, 3, 0, -5]);
    }

    #[test]
    fn test_difference_baseline_resets_per_component() {
        let suite = TestSuite::parse(
            SuiteFormat::MultiSeries,
            [("a", "10.0,12.0"), ("b", "7.0,6.0")],
        )
        .unwrap();
        let mut analyser = RunDifferenceAnalyser::new();
        analyser.parse_data(&suite, &Template::new()).unwrap();

        // Component b starts from zero again, not from a's last run
        assert_eq!(values_of(&analyser), vec![10, 2, 7, -1]);
    }

    #[test]
    fn test_counters_are_instance_scoped() {
        let suite = TestSuite::parse(SuiteFormat::MultiSeries, [("a", "1.0,2.0")]).unwrap();

        let mut runs = RunAnalyser::new();
        let mut diffs = RunDifferenceAnalyser::new();
        runs.parse_data(&suite, &Template::new()).unwrap();
        runs.parse_data(&suite, &Template::new()).unwrap();
        diffs.parse_data(&suite, &Template::new()).unwrap();

        let last_run_index = runs.results().last().unwrap().get("index").unwrap();
        let last_diff_index = diffs.results().last().unwrap().get("index").unwrap();
        assert_eq!(last_run_index.as_u64().unwrap(), 1);
        assert_eq!(last_diff_index.as_u64().unwrap(), 0);
    }
}
