//! End-to-end simulation sweeps as a caller drives them: population read
//! from line-oriented input, sweep over a size range, three writable
//! output collections.

use perfsift_simulate::{
    read_population, run_simulations, DetectionPower, HypothesisOutcome, SampleEstimate,
    SENTINEL_P,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_population_to_power_sweep() {
    let input = (0..50)
        .map(|i| (500 + (i * 29) % 40).to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let population = read_population(input.as_bytes()).unwrap();
    assert_eq!(population.len(), 50);

    let mut rng = StdRng::seed_from_u64(1312);
    let report = run_simulations(&population, 30, 3..=8, 0.02, &mut rng).unwrap();

    // One power row per candidate size, every repetition recorded
    assert_eq!(report.power.len(), 6);
    assert_eq!(report.estimates.len(), 6 * 30);
    assert_eq!(report.outcomes.len(), 6 * 30);

    // Outcomes and estimates line up by size and per-size index
    for (estimate, outcome) in report.estimates.iter().zip(&report.outcomes) {
        assert_eq!(estimate.sample_size, outcome.sample_size);
        assert_eq!(estimate.index, outcome.index);
    }

    for power in &report.power {
        for ratio in [power.less_ratio, power.more_ratio, power.same_ratio] {
            assert!(ratio.is_nan() || (0.0..=1.0).contains(&ratio));
        }
    }
}

#[test]
fn test_sentinel_outcomes_are_excluded_not_counted_against() {
    // A two-value population at small sample sizes degenerates often;
    // every sentinel outcome must vanish from the denominators rather
    // than drag a ratio toward zero.
    let population = vec![100, 100, 100, 100, 200];
    let mut rng = StdRng::seed_from_u64(77);
    let report = run_simulations(&population, 50, [2usize], 0.05, &mut rng).unwrap();

    let testable = report.outcomes.iter().filter(|o| o.is_testable()).count();
    let sentinels = report
        .outcomes
        .iter()
        .filter(|o| o.same_stat == SENTINEL_P)
        .count();
    assert_eq!(testable + sentinels, 50);

    let power = &report.power[0];
    if testable == 0 {
        assert!(power.same_ratio.is_nan());
    } else {
        let same_passed = report
            .outcomes
            .iter()
            .filter(|o| o.is_testable() && o.same)
            .count();
        let expected = same_passed as f64 / testable as f64;
        assert!((power.same_ratio - expected).abs() < 1e-12);
    }
}

#[test]
fn test_output_collections_serialize_under_their_headers() {
    let population: Vec<i64> = (0..20).map(|i| 40 + i % 7).collect();
    let mut rng = StdRng::seed_from_u64(9);
    let report = run_simulations(&population, 5, [4usize], 0.05, &mut rng).unwrap();

    for estimate in &report.estimates {
        let record = estimate.to_record();
        let names: Vec<String> = record.field_names().map(String::from).collect();
        assert_eq!(names, SampleEstimate::HEADERS);
    }
    for outcome in &report.outcomes {
        let record = outcome.to_record();
        let names: Vec<String> = record.field_names().map(String::from).collect();
        assert_eq!(names, HypothesisOutcome::HEADERS);
    }
    for power in &report.power {
        let record = power.to_record();
        let names: Vec<String> = record.field_names().map(String::from).collect();
        assert_eq!(names, DetectionPower::HEADERS);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    // Power ratios stay in [0, 1] whenever they are defined, whatever the
    // population looks like.
    #[test]
    fn prop_power_ratios_bounded(
        values in prop::collection::vec(0..1000i64, 4..24),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let report = run_simulations(&values, 8, [3usize], 0.02, &mut rng).unwrap();
        let power = &report.power[0];
        for ratio in [power.less_ratio, power.more_ratio, power.same_ratio] {
            prop_assert!(ratio.is_nan() || (0.0..=1.0).contains(&ratio));
        }
    }
}
