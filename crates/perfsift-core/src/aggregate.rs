//! Outlier-stripping aggregation over short measurement series
//!
//! Performance counters arrive as short, noisy run series. Two independent
//! stripping policies reduce the noise before aggregating:
//!
//! - **strip-max** discards one instance of the largest value, the
//!   presumed-outlier slow run used by the legacy scoring.
//! - **strip-first** discards the first-collected value, which carries
//!   cold-cache/warm-up bias, used by the refined scoring.
//!
//! The policies are not interchangeable and are selectable per call. The
//! order of operations is fixed: strip-first acts on the series in
//! collection order, then the series is sorted, then strip-max drops the
//! last (largest) element.

use crate::error::{Error, Result};
use serde::Serialize;

/// Outlier-stripping policy applied before aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strip {
    /// Drop one instance of the largest value (after sorting).
    pub max: bool,
    /// Drop the first-collected value (before sorting).
    pub first: bool,
}

impl Strip {
    /// Keep every observation.
    pub const NONE: Self = Self {
        max: false,
        first: false,
    };

    /// Drop the single largest observation.
    pub const MAX: Self = Self {
        max: true,
        first: false,
    };

    /// Drop the first-collected observation.
    pub const FIRST: Self = Self {
        max: false,
        first: true,
    };

    /// Smallest series length that survives this policy.
    pub fn min_len(&self) -> usize {
        1 + usize::from(self.max) + usize::from(self.first)
    }
}

/// A point estimate together with the spread of the observations around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// The aggregated value.
    pub value: f64,
    /// Population standard deviation of the surviving observations.
    pub stddev: f64,
}

/// Apply the strip policy and return the surviving values sorted ascending.
///
/// Errors if stripping leaves nothing to aggregate.
fn surviving(values: &[f64], strip: Strip) -> Result<Vec<f64>> {
    let rest = if strip.first {
        values.get(1..).unwrap_or_default()
    } else {
        values
    };
    let mut sorted = rest.to_vec();
    sorted.sort_by(f64::total_cmp);
    if strip.max {
        sorted.pop();
    }
    if sorted.is_empty() {
        return Err(Error::empty_after_strip(strip.min_len(), values.len()));
    }
    Ok(sorted)
}

/// Median of the series after applying the strip policy.
///
/// Odd surviving count returns the middle element; even count returns the
/// arithmetic mean of the two middle elements.
pub fn median(values: &[f64], strip: Strip) -> Result<f64> {
    let sorted = surviving(values, strip)?;
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Arithmetic mean and population standard deviation (divide by N) of the
/// series after applying the strip policy.
pub fn mean_stddev(values: &[f64], strip: Strip) -> Result<Estimate> {
    let kept = surviving(values, strip)?;
    let n = kept.len() as f64;
    let mean = kept.iter().sum::<f64>() / n;
    let variance = kept.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    Ok(Estimate {
        value: mean,
        stddev: variance.sqrt(),
    })
}
