//! Basic Gas Index Example
//!
//! Feeds a simulated VOC sensor through one hour of clean air, a cooking
//! event and the recovery afterwards, printing the index once a minute.
//!
//! ## What You'll Learn
//!
//! - Creating an algorithm instance
//! - Handling the blackout window (index 0)
//! - What the index does during and after a VOC event
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_index
//! ```

use gasguard_core::{AlgorithmType, GasIndexAlgorithm, INDEX_UNINITIALIZED};

/// Raw VOC ticks at second `t`: clean air with a 10 minute event at 60 min
fn simulated_raw(t: u32) -> u16 {
    let wobble = ((t * 7919) % 41) as u16;
    let event = if (3600..4200).contains(&t) { 6_000 } else { 0 };
    26_000 + wobble + event
}

fn main() {
    println!("GasGuard Basic Index Example");
    println!("============================\n");

    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    println!(
        "Sampling every {}s, first {} samples are blackout\n",
        voc.sampling_interval(),
        voc.blackout_samples()
    );

    for t in 0..2 * 3600 {
        let raw = simulated_raw(t);
        let index = voc.process(raw);

        if t % 60 != 0 {
            continue;
        }
        if index == INDEX_UNINITIALIZED {
            println!("  {:>4} min  raw {:>5}  (warming up)", t / 60, raw);
        } else {
            println!("  {:>4} min  raw {:>5}  VOC index {:>3}", t / 60, raw, index);
        }
    }

    println!("\nBaseline learned: {:.1} ticks above window minimum", voc.states().mean());
}
