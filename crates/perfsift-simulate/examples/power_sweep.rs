//! Sweep candidate sample sizes over a synthetic noisy population and
//! print the resulting detection-power table.
//!
//! Run with `RUST_LOG=info` to watch per-size progress.

use perfsift_simulate::run_simulations;
use rand::thread_rng;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A bimodal-ish timing population: mostly steady with occasional
    // slow outliers, the shape talos counters tend to have.
    let population: Vec<i64> = (0..400)
        .map(|i| {
            let base = 430 + (i * 13) % 11;
            if i % 17 == 0 {
                base + 60
            } else {
                base
            }
        })
        .collect();

    let report = run_simulations(&population, 1000, 3..=20, 0.01, &mut thread_rng())
        .expect("simulation sweep failed");

    println!("{:>11}  {:>10}  {:>10}  {:>10}", "sample_size", "less", "more", "same");
    for power in &report.power {
        println!(
            "{:>11}  {:>10.3}  {:>10.3}  {:>10.3}",
            power.sample_size, power.less_ratio, power.more_ratio, power.same_ratio
        );
    }
}
