//! One named sub-test's ordered run series

use perfsift_core::{Error, Result};

/// An immutable ordered sequence of observations for one test component,
/// with its minimum and maximum captured at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TestComponent {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl TestComponent {
    /// Wrap an already-parsed run series. The series must hold at least one
    /// finite observation.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "observation {bad} is not finite"
            )));
        }
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self { values, min, max })
    }

    /// Parse a comma-separated run series, e.g. `"102.0,98.5,97.9"`. Any
    /// token that does not parse as a finite number fails the whole series.
    pub fn parse(series: &str) -> Result<Self> {
        let values = series
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| Error::non_numeric(token))
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::new(values)
    }

    /// The run series, in collection order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The first-collected observation.
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of runs in the series.
    pub fn runs(&self) -> usize {
        self.values.len()
    }
}
