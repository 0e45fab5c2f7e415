//! One-sample Student's t-test

use perfsift_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided one-sample t-test of `sample` against the hypothesized mean
/// `popmean`. Returns the t statistic and its two-sided p-value under a
/// Student's t distribution with n - 1 degrees of freedom.
///
/// The sample standard deviation uses the n - 1 divisor. A sample with
/// fewer than two observations or zero variance is untestable and is an
/// error; callers screening degenerate samples never reach either case.
pub fn t_test_one_sample(sample: &[f64], popmean: f64) -> Result<(f64, f64)> {
    let n = sample.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }
    let nf = n as f64;
    let mean = sample.iter().sum::<f64>() / nf;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    if variance <= 0.0 {
        return Err(Error::Computation(
            "sample variance is zero, t statistic undefined".to_string(),
        ));
    }

    let t = (mean - popmean) / (variance / nf).sqrt();
    let t_dist = StudentsT::new(0.0, 1.0, nf - 1.0)
        .map_err(|e| Error::Computation(format!("failed to create t-distribution: {e}")))?;
    let p = 2.0 * t_dist.cdf(-t.abs());
    Ok((t, p))
}
