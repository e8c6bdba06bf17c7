//! State Persistence Example
//!
//! Saves the learned baseline before a simulated power cycle and restores
//! it afterwards, so the device does not have to relearn its air.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_state_persistence --features serde
//! ```

use gasguard_core::{AlgorithmType, EstimatorState, GasIndexAlgorithm};

fn main() {
    println!("GasGuard State Persistence Example");
    println!("==================================\n");

    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    for _ in 0..3 * 3600 {
        voc.process(25_000);
    }

    let saved = voc.states();
    println!("Before power-down: {:?}", saved);

    // Any serde format works; JSON keeps it readable
    let stored = match serde_json::to_string(&saved) {
        Ok(json) => json,
        Err(e) => {
            println!("Could not encode state: {}", e);
            return;
        }
    };
    println!("Stored record: {}\n", stored);

    let loaded: EstimatorState = match serde_json::from_str(&stored) {
        Ok(state) => state,
        Err(e) => {
            println!("Could not decode state: {}", e);
            return;
        }
    };

    let mut restored = GasIndexAlgorithm::new(AlgorithmType::Voc);
    let mut amnesiac = GasIndexAlgorithm::new(AlgorithmType::Voc);
    if let Err(e) = restored.set_states(loaded) {
        println!("Rejected stored state: {}", e);
        return;
    }

    // Air is already worse than before the power cycle
    println!("After power-up, air at 30000 ticks:");
    for t in 0..120 {
        let with_state = restored.process(30_000);
        let without_state = amnesiac.process(30_000);
        if t % 15 == 0 || t == 45 {
            println!(
                "  t={:>3}s  restored {:>3}  fresh {:>3}",
                t, with_state, without_state
            );
        }
    }

    // Firmware that only stores two numbers can use from_mean_std
    let compact = EstimatorState::from_mean_std(saved.mean(), saved.std);
    println!("\nCompact restore: mean {:.1}, std {:.1}", compact.mean(), compact.std);
}
