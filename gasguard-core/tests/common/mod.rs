//! Common test utilities for integration tests
//!
//! This module provides:
//! - Deterministic raw-tick generators (noise, steps, spikes, drift)
//! - Helpers that drive an algorithm through a signal and collect outputs
//! - Assertion helpers for index bounds and convergence

#![allow(dead_code)]

use gasguard_core::{AlgorithmType, GasIndexAlgorithm, TuningParameters, INDEX_MAX};

pub mod generators;

pub use generators::TestRng;

/// Run every tick through the algorithm and collect the indices
pub fn run(algorithm: &mut GasIndexAlgorithm, signal: &[u16]) -> Vec<u16> {
    signal.iter().map(|&raw| algorithm.process(raw)).collect()
}

/// Feed the same tick `count` times, returning the last index
pub fn hold(algorithm: &mut GasIndexAlgorithm, raw: u16, count: usize) -> u16 {
    let mut index = 0;
    for _ in 0..count {
        index = algorithm.process(raw);
    }
    index
}

/// Consume the blackout window so the next output is valid
pub fn skip_blackout(algorithm: &mut GasIndexAlgorithm, raw: u16) {
    while algorithm.is_blackout() {
        assert_eq!(algorithm.process(raw), 0);
    }
}

/// Algorithm with default tuning apart from the learning and gating times
pub fn with_times(
    algorithm_type: AlgorithmType,
    learning_hours: f32,
    gating_max_minutes: f32,
) -> GasIndexAlgorithm {
    let mut algorithm = GasIndexAlgorithm::new(algorithm_type);
    let tuning = TuningParameters::for_algorithm(algorithm_type)
        .with_learning_time_offset_hours(learning_hours)
        .with_learning_time_gain_hours(learning_hours)
        .with_gating_max_duration_minutes(gating_max_minutes);
    algorithm
        .set_tuning_parameters(tuning)
        .expect("tuning within range");
    algorithm
}

/// Every index is on the 0-500 scale
pub fn assert_in_range(indices: &[u16]) {
    for (i, &index) in indices.iter().enumerate() {
        assert!(index <= INDEX_MAX, "index {} at sample {} above 500", index, i);
    }
}

/// Every index is at least `min` and at most `max`
pub fn assert_between(indices: &[u16], min: u16, max: u16) {
    for (i, &index) in indices.iter().enumerate() {
        assert!(
            (min..=max).contains(&index),
            "index {} at sample {} outside [{}, {}]",
            index,
            i,
            min,
            max
        );
    }
}

/// `actual` is within `tolerance` of `expected`
pub fn assert_near(actual: u16, expected: u16, tolerance: u16) {
    assert!(
        actual.abs_diff(expected) <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
