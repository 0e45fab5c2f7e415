//! Behaviour of the analyser pipeline as a downstream driver sees it:
//! several analysers fed the same suite stream, buffers drained between
//! output passes.

use perfsift_analyser::{from_name, Analyser, DataKind, ANALYSER_NAMES};
use perfsift_core::Template;
use perfsift_model::{SuiteFormat, TestSuite};

fn suites() -> Vec<TestSuite> {
    vec![
        TestSuite::parse(
            SuiteFormat::MultiSeries,
            [("tsvg_hixie", "102.0,98.5,97.9,131.2"), ("tsvg_composite", "45.1,44.8,46.0")],
        )
        .unwrap(),
        TestSuite::parse(SuiteFormat::MultiSeries, [("tsvg_hixie", "99.0,101.5,100.2")])
            .unwrap(),
    ]
}

fn template() -> Template {
    Template::new()
        .with("revision", "a8c3f0d21b44")
        .with("machine", "talos-r3-xp-041")
        .with("starttime", 1_312_531_200u64)
}

fn serialized(analyser: &dyn Analyser) -> String {
    serde_json::to_string(analyser.results()).unwrap()
}

#[test]
fn test_every_analyser_fills_its_declared_headers() {
    for name in ANALYSER_NAMES {
        let mut analyser = from_name(name).unwrap();
        for suite in &suites() {
            analyser.parse_data(suite, &template()).unwrap();
        }
        assert!(!analyser.results().is_empty(), "{name} buffered nothing");

        // Every record holds a value for every declared header plus the
        // template fields, so table output can never misalign columns.
        let headers = analyser.headers();
        for record in analyser.results() {
            for field in template().field_names() {
                assert!(record.contains(field), "{name} record missing {field}");
            }
            for header in &headers {
                // Wide run columns cover the widest component seen; shorter
                // components legitimately leave trailing columns unset for
                // the downstream writer's not-applicable marker.
                let is_run_column = header
                    .strip_prefix("test_")
                    .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()));
                if is_run_column {
                    continue;
                }
                assert!(record.contains(header), "{name} record missing {header}");
            }
        }
    }
}

#[test]
fn test_flush_then_replay_reproduces_identical_output() {
    for name in ANALYSER_NAMES {
        let mut analyser = from_name(name).unwrap();
        for suite in &suites() {
            analyser.parse_data(suite, &template()).unwrap();
        }
        let first_pass = serialized(analyser.as_ref());

        analyser.flush();
        assert!(analyser.results().is_empty());

        for suite in &suites() {
            analyser.parse_data(suite, &template()).unwrap();
        }
        assert_eq!(
            first_pass,
            serialized(analyser.as_ref()),
            "{name} replay diverged"
        );
    }
}

#[test]
fn test_flush_rewinds_the_suite_index() {
    let mut analyser = from_name("comp").unwrap();
    let all = suites();

    analyser.parse_data(&all[0], &template()).unwrap();
    analyser.flush();
    analyser.parse_data(&all[1], &template()).unwrap();

    assert_eq!(analyser.results().len(), 1);
    let index = analyser.results()[0].get("index").unwrap().as_u64().unwrap();
    assert_eq!(index, 0);
}

#[test]
fn test_all_measurement_analysers_route_testruns_only() {
    for name in ANALYSER_NAMES {
        let analyser = from_name(name).unwrap();
        assert_eq!(analyser.handled_kinds(), &[DataKind::TestRuns]);
    }
}

#[test]
fn test_independent_analysers_do_not_share_counters() {
    let mut comp = from_name("comp").unwrap();
    let mut runs = from_name("run").unwrap();
    let all = suites();

    // comp sees both suites, run only the second
    comp.parse_data(&all[0], &template()).unwrap();
    comp.parse_data(&all[1], &template()).unwrap();
    runs.parse_data(&all[1], &template()).unwrap();

    let comp_index = comp.results().last().unwrap().get("index").unwrap().as_u64();
    let run_index = runs.results().last().unwrap().get("index").unwrap().as_u64();
    assert_eq!(comp_index, Some(1));
    assert_eq!(run_index, Some(0));
}
