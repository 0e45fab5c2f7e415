//! Per-component analyser

use crate::traits::{Analyser, DataKind};
use perfsift_core::{aggregate, Record, Result, Strip, Template};
use perfsift_model::TestSuite;

const BASE_HEADERS: [&str; 10] = [
    "test_name",
    "index",
    "test_runs",
    "first",
    "min",
    "max",
    "old_median",
    "new_median",
    "new_average",
    "new_stddev",
];

/// Emits one record per component per suite: the raw first/min/max values,
/// the legacy (strip-max) and refined (strip-first) medians, the refined
/// mean with its standard deviation, the run count, and a suite index
/// shared by all component records of the same suite.
///
/// The wide configuration additionally carries the raw runs as `test_0`,
/// `test_1`, ... columns. Because suites differ in run count, the wide
/// header list tracks the maximum run count seen so far in this session
/// and only ever widens.
#[derive(Debug, Default)]
pub struct ComponentAnalyser {
    wide: bool,
    index: u64,
    max_runs: usize,
    results: Vec<Record>,
}

impl ComponentAnalyser {
    /// Summary columns only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary columns plus raw per-run columns.
    pub fn wide() -> Self {
        Self {
            wide: true,
            ..Self::default()
        }
    }
}

impl Analyser for ComponentAnalyser {
    fn parse_data(&mut self, suite: &TestSuite, template: &Template) -> Result<()> {
        // Stage the whole suite before touching the buffer so a failing
        // component leaves previously-parsed suites intact.
        let mut staged = Vec::with_capacity(suite.len());
        let mut widest = 0;
        for (name, component) in suite.components() {
            let refined = aggregate::mean_stddev(component.values(), Strip::FIRST)?;

            let mut record = template.instantiate();
            record.set("test_name", name);
            record.set("index", self.index);
            record.set("test_runs", component.runs() as u64);
            record.set("first", component.first());
            record.set("min", component.min());
            record.set("max", component.max());
            record.set("old_median", aggregate::median(component.values(), Strip::MAX)?);
            record.set("new_median", aggregate::median(component.values(), Strip::FIRST)?);
            record.set("new_average", refined.value);
            record.set("new_stddev", refined.stddev);
            if self.wide {
                for (num, value) in component.values().iter().enumerate() {
                    record.set(format!("test_{num}"), *value);
                }
            }
            widest = widest.max(component.runs());
            staged.push(record);
        }

        self.max_runs = self.max_runs.max(widest);
        self.index += 1;
        self.results.extend(staged);
        Ok(())
    }

    fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = BASE_HEADERS.map(String::from).to_vec();
        if self.wide {
            headers.extend((0..self.max_runs).map(|num| format!("test_{num}")));
        }
        headers
    }

    fn result_suffix(&self) -> &'static str {
        "comp"
    }

    fn handled_kinds(&self) -> &'static [DataKind] {
        &[DataKind::TestRuns]
    }

    fn results(&self) -> &[Record] {
        &self.results
    }

    fn flush(&mut self) {
        self.results.clear();
        // The suite index restarts per output pass; the widened header set
        // is session-scoped and survives.
        self.index = 0;
    }
}
