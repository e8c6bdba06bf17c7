//! Custom Tuning Example
//!
//! Compares the default VOC tuning with a fast-learning variant on the same
//! step change, and shows how invalid tuning is rejected.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_custom_tuning
//! ```

use gasguard_core::{AlgorithmType, ConfigError, GasIndexAlgorithm, TuningParameters};

fn main() {
    println!("GasGuard Custom Tuning Example");
    println!("==============================\n");

    let fast = TuningParameters::for_algorithm(AlgorithmType::Voc)
        .with_learning_time_offset_hours(1.0)
        .with_learning_time_gain_hours(1.0)
        .with_gating_max_duration_minutes(10.0);

    let mut default_voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    let mut fast_voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    if let Err(e) = fast_voc.set_tuning_parameters(fast) {
        println!("Unexpected rejection: {}", e);
        return;
    }

    // Three hours of clean air, then the baseline shifts for good
    for t in 0..7 * 3600 {
        let raw = if t < 3 * 3600 { 20_000 } else { 20_600 };
        let slow_index = default_voc.process(raw);
        let fast_index = fast_voc.process(raw);
        if t >= 3 * 3600 && (t - 3 * 3600) % 1800 == 0 {
            println!(
                "  +{:>3} min  default {:>3}  fast {:>3}",
                (t - 3 * 3600) / 60,
                slow_index,
                fast_index
            );
        }
    }

    println!("\nRejected configurations:");
    let attempts = [
        fast.with_gain_factor(0.0),
        fast.with_std_initial(-1.0),
        fast.with_index_offset(f32::NAN),
    ];
    for params in attempts {
        match fast_voc.set_tuning_parameters(params) {
            Ok(()) => println!("  accepted {:?}", params),
            Err(ConfigError::OutOfRange { parameter, value, min, max }) => {
                println!("  {} = {} not in [{}, {}]", parameter, value, min, max)
            }
            Err(e) => println!("  {}", e),
        }
    }
    println!("Active tuning unchanged: {}", fast_voc.tuning_parameters() == fast);
}
