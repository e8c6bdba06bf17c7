//! Save/restore of learned state across power cycles

mod common;

use common::{generators, TestRng};
use gasguard_core::{AlgorithmType, EstimatorState, GasIndexAlgorithm};

#[test]
fn restore_in_place_is_invisible() {
    let mut rng = TestRng::new(21);
    let warm_up = generators::noisy(&mut rng, 24_000.0, 25.0, 2000);
    let scenario = generators::spike(24_000, 29_000, 300, 60, 1500);

    let mut untouched = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::run(&mut untouched, &warm_up);
    let mut restored = untouched.clone();

    let state = restored.states();
    restored.set_states(state).unwrap();

    assert_eq!(
        common::run(&mut untouched, &scenario),
        common::run(&mut restored, &scenario)
    );
    assert_eq!(untouched.states(), restored.states());
}

#[test]
fn power_cycle_keeps_baseline() {
    let mut before = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::hold(&mut before, 25_000, 3 * 3600);
    let saved = before.states();

    // Fresh boot: restored baseline, fresh blackout
    let mut after = GasIndexAlgorithm::new(AlgorithmType::Voc);
    after.set_states(saved).unwrap();
    assert_eq!(after.states(), saved);
    common::skip_blackout(&mut after, 30_000);

    // An elevated reading right after boot is measured against the old
    // baseline instead of becoming the new one
    let restored = after.process(30_000);
    let mut amnesiac = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::skip_blackout(&mut amnesiac, 30_000);
    let fresh = amnesiac.process(30_000);

    assert!(restored > 150, "restored instance read {}", restored);
    common::assert_near(fresh, 100, 1);
}

#[test]
fn restore_from_mean_and_std() {
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    // 25000 ticks sit 5000 above the VOC window minimum
    voc.set_states(EstimatorState::from_mean_std(5_000.0, 40.0)).unwrap();
    common::skip_blackout(&mut voc, 25_000);
    common::assert_near(voc.process(25_000), 100, 1);

    let mut nox = GasIndexAlgorithm::new(AlgorithmType::Nox);
    nox.set_states(EstimatorState::from_mean_std(6_000.0, 40.0)).unwrap();
    common::skip_blackout(&mut nox, 16_000);
    common::assert_near(nox.process(16_000), 1, 1);
}

#[test]
fn corrupt_state_is_rejected() {
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::hold(&mut voc, 25_000, 600);
    let good = voc.states();

    let mut corrupt = good;
    corrupt.residual = f32::INFINITY;
    assert!(voc.set_states(corrupt).is_err());

    let mut corrupt = good;
    corrupt.std = -1.0;
    assert!(voc.set_states(corrupt).is_err());

    let mut corrupt = good;
    corrupt.uptime = -5.0;
    assert!(voc.set_states(corrupt).is_err());

    assert_eq!(voc.states(), good);
}

#[cfg(feature = "serde")]
mod serialization {
    use super::*;
    use gasguard_core::TuningParameters;

    #[test]
    fn state_round_trips_through_json() {
        let mut rng = TestRng::new(4);
        let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
        common::run(&mut voc, &generators::noisy(&mut rng, 26_000.0, 40.0, 5000));

        let saved = voc.states();
        let json = serde_json::to_string(&saved).unwrap();
        let loaded: EstimatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, saved);

        let mut resumed = GasIndexAlgorithm::new(AlgorithmType::Voc);
        resumed.set_states(loaded).unwrap();
        assert_eq!(resumed.states(), saved);
    }

    #[test]
    fn configuration_round_trips_through_json() {
        let tuning = TuningParameters::for_algorithm(AlgorithmType::Nox)
            .with_gating_max_duration_minutes(90.0)
            .with_gain_factor(180.5);
        let json = serde_json::to_string(&tuning).unwrap();
        assert!(json.contains("gating_max_duration_minutes"));
        let loaded: TuningParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, tuning);

        let json = serde_json::to_string(&AlgorithmType::Nox).unwrap();
        let loaded: AlgorithmType = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, AlgorithmType::Nox);
    }
}
