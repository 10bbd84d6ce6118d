//! Compare a simulated source estimate against two reconstructions.
//!
//! ```bash
//! cargo run --example compare_estimates --release
//! ```

use stcmetrics::{evaluate_metric, evaluate_metric_by_name, Metric, SourceSpace, StcData};

const N_LOCATIONS: usize = 40;
const N_TIMES: usize = 120;
const TSTEP: f64 = 0.001;

/// Gaussian burst centred on the epoch.
fn burst(t: usize) -> f64 {
    let x = (t as f64 - N_TIMES as f64 / 2.0) / 10.0;
    (-x * x).exp()
}

/// Activity at `peak`, spatially blurred with width `spread` and scaled by `gain`.
fn estimate(peak: usize, spread: f64, gain: f64) -> StcData {
    let mut data = vec![0.0; N_LOCATIONS * N_TIMES];
    for loc in 0..N_LOCATIONS {
        let d = loc as f64 - peak as f64;
        let weight = if spread == 0.0 {
            if loc == peak { 1.0 } else { 0.0 }
        } else {
            (-(d * d) / (2.0 * spread * spread)).exp()
        };
        for t in 0..N_TIMES {
            data[loc * N_TIMES + t] = gain * weight * burst(t);
        }
    }
    StcData::with_regular_times(data, N_LOCATIONS, -0.05, TSTEP)
        .expect("demo estimate has a consistent shape")
}

fn main() {
    let simulated = estimate(20, 0.0, 1e-8);
    let good = estimate(20, 1.5, 0.7e-8);
    let mislocalized = estimate(28, 1.5, 0.7e-8);

    println!("{:<14} {:>12} {:>10}", "estimate", "rms", "cosine");
    for (name, est) in [("good", &good), ("mislocalized", &mislocalized)] {
        let rms = evaluate_metric(&simulated, est, Metric::Rms, None).expect("compatible");
        let cos = evaluate_metric(&simulated, est, Metric::Cosine, None).expect("compatible");
        println!("{:<14} {:>12.3e} {:>10.4}", name, rms, cos);
    }

    // Scaling both estimates leaves cosine unchanged and scales rms.
    let k = 3.0;
    let rms = evaluate_metric(&simulated, &good, Metric::Rms, None).expect("compatible");
    let rms_k = evaluate_metric(&simulated.scaled(k), &good.scaled(k), Metric::Rms, None)
        .expect("compatible");
    println!("\nrms scaled by {}: {:.3e} -> {:.3e}", k, rms, rms_k);

    // Geometry metrics need a source space and are not available yet.
    let src = SourceSpace::new(
        (0..N_LOCATIONS)
            .map(|i| [0.0, i as f64 * 0.005, 0.06])
            .collect(),
    );
    for name in ["distance_err", "weighted_distance_err", "corr"] {
        match evaluate_metric_by_name(&simulated, &good, name, Some(&src)) {
            Ok(score) => println!("{}: {}", name, score),
            Err(e) => println!("{}: {}", name, e),
        }
    }
}
