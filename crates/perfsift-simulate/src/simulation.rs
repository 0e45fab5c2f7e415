//! Sample-size power simulation
//!
//! One [`Simulation`] repeatedly draws samples of a fixed size, with
//! replacement, from a historical population and asks three questions of
//! each sample: does it look like the population it came from ("same"),
//! and would a shift of the configured threshold below or above the
//! population mean have been detected ("less"/"more")? The per-size
//! pass ratios over many repetitions characterize the detection power a
//! given sample size buys.

use crate::ttest::t_test_one_sample;
use perfsift_core::{aggregate, Error, Record, Result, Strip};
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

/// Fixed significance level for all three hypothesis tests.
pub const SIGNIFICANCE: f64 = 0.05;

/// P-value recorded for a degenerate (all-identical) sample. Sentinel
/// outcomes are excluded from every power-ratio denominator.
pub const SENTINEL_P: f64 = -1.0;

/// Point estimates of one drawn sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleEstimate {
    pub sample_size: usize,
    pub index: u64,
    pub mean: f64,
    pub median: f64,
}

impl SampleEstimate {
    pub const HEADERS: &'static [&'static str] = &["sample_size", "index", "mean", "median"];

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.set("sample_size", self.sample_size as u64);
        record.set("index", self.index);
        record.set("mean", self.mean);
        record.set("median", self.median);
        record
    }
}

/// Hypothesis-test outcomes of one drawn sample.
///
/// `same` passes when the sample is statistically indistinguishable from
/// the population mean (p > 0.05); `less` and `more` pass when the
/// threshold-shifted reference value is rejected (p < 0.05), i.e. the
/// injected shift would have been detected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HypothesisOutcome {
    pub sample_size: usize,
    pub index: u64,
    pub same: bool,
    pub same_stat: f64,
    pub less: bool,
    pub less_stat: f64,
    pub more: bool,
    pub more_stat: f64,
}

impl HypothesisOutcome {
    pub const HEADERS: &'static [&'static str] = &[
        "sample_size",
        "index",
        "same",
        "same_stat",
        "less",
        "less_stat",
        "more",
        "more_stat",
    ];

    /// Whether this outcome entered the power denominators, i.e. the
    /// sample was testable at all.
    pub fn is_testable(&self) -> bool {
        self.same_stat != SENTINEL_P
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.set("sample_size", self.sample_size as u64);
        record.set("index", self.index);
        record.set("same", self.same);
        record.set("same_stat", self.same_stat);
        record.set("less", self.less);
        record.set("less_stat", self.less_stat);
        record.set("more", self.more);
        record.set("more_stat", self.more_stat);
        record
    }
}

/// Aggregate pass ratios for one sample size, over testable repetitions
/// only.
///
/// Each ratio divides passes by the count of non-sentinel trials; when no
/// trial was testable (a zero-variance population degenerates every
/// sample) the ratio is `NaN`, never silently zero. `NaN` serializes as
/// null in [`to_record`](Self::to_record).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionPower {
    pub sample_size: usize,
    pub less_ratio: f64,
    pub more_ratio: f64,
    pub same_ratio: f64,
}

impl DetectionPower {
    pub const HEADERS: &'static [&'static str] =
        &["sample_size", "less_ratio", "more_ratio", "same_ratio"];

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.set("sample_size", self.sample_size as u64);
        record.set("less_ratio", self.less_ratio);
        record.set("more_ratio", self.more_ratio);
        record.set("same_ratio", self.same_ratio);
        record
    }
}

/// A sample-size simulation over one historical population.
#[derive(Debug, Clone)]
pub struct Simulation {
    population: Vec<i64>,
    popmean: f64,
    sample_size: usize,
    threshold: f64,
    index: u64,
    estimates: Vec<SampleEstimate>,
    outcomes: Vec<HypothesisOutcome>,
}

impl Simulation {
    /// Configure a simulation. Rejected before any computation: an empty
    /// population, a sample size outside `[1, population length]`, and a
    /// non-finite or non-positive threshold fraction.
    pub fn new(population: Vec<i64>, sample_size: usize, threshold: f64) -> Result<Self> {
        if population.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if sample_size < 1 || sample_size > population.len() {
            return Err(Error::out_of_range(
                "sample size",
                sample_size,
                &format!("[1, {}]", population.len()),
            ));
        }
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "detection threshold {threshold} must be a positive fraction"
            )));
        }

        let popmean = population.iter().sum::<i64>() as f64 / population.len() as f64;
        Ok(Self {
            population,
            popmean,
            sample_size,
            threshold,
            index: 0,
            estimates: Vec::new(),
            outcomes: Vec::new(),
        })
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Mean of the full historical population.
    pub fn population_mean(&self) -> f64 {
        self.popmean
    }

    /// Per-sample point estimates recorded so far.
    pub fn estimates(&self) -> &[SampleEstimate] {
        &self.estimates
    }

    /// Per-sample hypothesis outcomes recorded so far.
    pub fn outcomes(&self) -> &[HypothesisOutcome] {
        &self.outcomes
    }

    /// The shifted reference means the "less" and "more" tests run
    /// against: the threshold fraction applied below and above the
    /// population mean, truncated to a whole unit, but always at least one
    /// unit away from the mean.
    fn shifted_references(&self) -> (f64, f64) {
        let lower = f64::min(
            (self.popmean * (1.0 - self.threshold)).trunc(),
            self.popmean - 1.0,
        );
        let upper = f64::max(
            (self.popmean * (1.0 + self.threshold)).trunc(),
            self.popmean + 1.0,
        );
        (lower, upper)
    }

    /// Score one drawn sample: record its point estimates, then the three
    /// hypothesis outcomes. A degenerate sample (every value identical)
    /// is not testable and records the sentinel p-values instead.
    fn analyse_sample(&mut self, sample: &[i64]) -> Result<()> {
        let values: Vec<f64> = sample.iter().map(|&v| v as f64).collect();
        self.estimates.push(SampleEstimate {
            sample_size: self.sample_size,
            index: self.index,
            mean: aggregate::mean_stddev(&values, Strip::NONE)?.value,
            median: aggregate::median(&values, Strip::NONE)?,
        });

        let degenerate = sample.iter().all(|&v| v == sample[0]);
        let outcome = if degenerate {
            HypothesisOutcome {
                sample_size: self.sample_size,
                index: self.index,
                same: false,
                same_stat: SENTINEL_P,
                less: false,
                less_stat: SENTINEL_P,
                more: false,
                more_stat: SENTINEL_P,
            }
        } else {
            let (lower, upper) = self.shifted_references();
            let (_, same_stat) = t_test_one_sample(&values, self.popmean)?;
            let (_, less_stat) = t_test_one_sample(&values, lower)?;
            let (_, more_stat) = t_test_one_sample(&values, upper)?;
            HypothesisOutcome {
                sample_size: self.sample_size,
                index: self.index,
                same: same_stat > SIGNIFICANCE,
                same_stat,
                less: less_stat < SIGNIFICANCE,
                less_stat,
                more: more_stat < SIGNIFICANCE,
                more_stat,
            }
        };
        self.outcomes.push(outcome);
        Ok(())
    }

    /// Aggregate the recorded outcomes into per-size pass ratios,
    /// counting only testable trials in each denominator.
    fn detection_power(&self) -> DetectionPower {
        let valid = self.outcomes.iter().filter(|o| o.is_testable()).count() as f64;
        let passed = |pick: fn(&HypothesisOutcome) -> bool| {
            self.outcomes
                .iter()
                .filter(|o| o.is_testable() && pick(o))
                .count() as f64
        };
        DetectionPower {
            sample_size: self.sample_size,
            less_ratio: passed(|o| o.less) / valid,
            more_ratio: passed(|o| o.more) / valid,
            same_ratio: passed(|o| o.same) / valid,
        }
    }

    /// Run the simulation: draw `repetitions` samples of the configured
    /// size uniformly at random with replacement, score each, and return
    /// the aggregate detection power for this sample size.
    #[instrument(skip(self, rng), fields(sample_size = self.sample_size))]
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        repetitions: usize,
        rng: &mut R,
    ) -> Result<DetectionPower> {
        if repetitions == 0 {
            return Err(Error::InvalidParameter(
                "repetitions must be at least 1".to_string(),
            ));
        }
        info!(
            sample_size = self.sample_size,
            repetitions, "simulating sample size"
        );
        let mut sample = Vec::with_capacity(self.sample_size);
        for _ in 0..repetitions {
            sample.clear();
            for _ in 0..self.sample_size {
                let pick = rng.gen_range(0..self.population.len());
                sample.push(self.population[pick]);
            }
            self.analyse_sample(&sample)?;
            self.index += 1;
        }
        Ok(self.detection_power())
    }
}

/// All output of a simulation sweep over several sample sizes: the
/// per-sample point estimates, the per-sample hypothesis outcomes, and
/// the per-size detection power rows, each independently writable as a
/// delimited table under its own header set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationReport {
    pub estimates: Vec<SampleEstimate>,
    pub outcomes: Vec<HypothesisOutcome>,
    pub power: Vec<DetectionPower>,
}

/// Run one [`Simulation`] per candidate sample size against the same
/// population and concatenate the outputs.
pub fn run_simulations<I, R>(
    population: &[i64],
    repetitions: usize,
    sample_sizes: I,
    threshold: f64,
    rng: &mut R,
) -> Result<SimulationReport>
where
    I: IntoIterator<Item = usize>,
    R: Rng + ?Sized,
{
    let mut report = SimulationReport::default();
    for size in sample_sizes {
        let mut simulation = Simulation::new(population.to_vec(), size, threshold)?;
        let power = simulation.run(repetitions, rng)?;
        report.estimates.extend_from_slice(simulation.estimates());
        report.outcomes.extend_from_slice(simulation.outcomes());
        report.power.push(power);
    }
    Ok(report)
}
