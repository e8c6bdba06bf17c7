//! End-to-end behavior of the gas index algorithm
//!
//! Drives complete algorithm instances through realistic raw-tick
//! scenarios and checks the observable index: blackout, convergence to the
//! baseline index, step and spike response, gating release and interval
//! independence.

mod common;

use common::{generators, TestRng};
use gasguard_core::{AlgorithmType, GasIndexAlgorithm, TuningParameters};

#[test]
fn indoor_air_scenario() {
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);

    let clean = common::run(&mut voc, &generators::constant(20_000, 245));
    assert!(clean[..45].iter().all(|&index| index == 0));
    assert!(clean[45] > 0);
    common::assert_near(*clean.last().unwrap(), 100, 5);

    let event = common::run(&mut voc, &generators::constant(40_000, 50));
    assert!(event[0] > 100, "step not visible immediately: {}", event[0]);
    assert!(event[1] > event[0]);
    assert!(*event.iter().max().unwrap() > 400);
    common::assert_in_range(&event);

    let recovery = common::run(&mut voc, &generators::constant(20_000, 600));
    common::assert_in_range(&recovery);
    assert!(recovery[0] > 300);
    common::assert_between(&recovery[300..], 95, 105);
}

#[test]
fn constant_signal_settles_on_offset() {
    for raw in [1, 15_000, 20_000, 30_000, 64_999, 65_535] {
        let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
        let indices = common::run(&mut voc, &generators::constant(raw, 3000));
        common::assert_between(&indices[45..], 98, 102);

        let mut nox = GasIndexAlgorithm::new(AlgorithmType::Nox);
        let indices = common::run(&mut nox, &generators::constant(raw, 3000));
        common::assert_between(&indices[45..], 1, 2);
    }
}

#[test]
fn custom_offset_is_the_baseline() {
    for offset in [1.0, 42.0, 250.0] {
        let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
        voc.set_tuning_parameters(TuningParameters::default().with_index_offset(offset))
            .unwrap();
        let index = common::hold(&mut voc, 27_000, 600);
        common::assert_near(index, offset as u16, 1);
    }
}

#[test]
fn noise_is_smoothed() {
    let mut rng = TestRng::new(7);
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    let indices = common::run(&mut voc, &generators::noisy(&mut rng, 25_000.0, 30.0, 7200));
    common::assert_between(&indices[600..], 95, 106);

    let mut rng = TestRng::new(7);
    let mut nox = GasIndexAlgorithm::new(AlgorithmType::Nox);
    let indices = common::run(&mut nox, &generators::noisy(&mut rng, 15_000.0, 30.0, 7200));
    common::assert_between(&indices[600..], 1, 3);
}

#[test]
fn spike_does_not_move_baseline() {
    let mut rng = TestRng::new(11);
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::run(&mut voc, &generators::noisy(&mut rng, 20_000.0, 20.0, 4 * 3600));
    let baseline = voc.states().mean();

    let spike = common::run(&mut voc, &generators::constant(24_000, 20));
    assert!(spike[0] > 105);
    assert!(*spike.iter().max().unwrap() > 250);
    assert!((voc.states().mean() - baseline).abs() < 1.0);

    let after = common::run(&mut voc, &generators::noisy(&mut rng, 20_000.0, 20.0, 600));
    common::assert_between(&after[300..], 97, 105);
}

#[test]
fn gating_release_absorbs_step() {
    let run_step = |gating_max_minutes: f32| {
        let mut rng = TestRng::new(3);
        let mut voc = common::with_times(AlgorithmType::Voc, 1.0, gating_max_minutes);
        common::run(&mut voc, &generators::noisy(&mut rng, 20_000.0, 20.0, 3 * 3600));
        common::run(&mut voc, &generators::noisy(&mut rng, 20_600.0, 20.0, 4 * 3600))
    };

    let released = run_step(10.0);
    let held = run_step(3000.0);

    // Both see the step immediately
    assert!(released[0] > 100);
    assert!(released[599] > 400);
    assert!(held[599] > 400);

    // Only the short gating limit lets the baseline catch up
    assert!(released[3599] < 220, "released at 1h: {}", released[3599]);
    assert!(released[4 * 3600 - 1] < 120);
    assert!(held[3599] > 400);
    assert!(held[4 * 3600 - 1] > 400);
}

#[test]
fn default_gating_limit_absorbs_step() {
    let mut rng = TestRng::new(13);
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::run(&mut voc, &generators::noisy(&mut rng, 20_000.0, 20.0, 4 * 3600));
    let indices = common::run(&mut voc, &generators::noisy(&mut rng, 20_600.0, 20.0, 8 * 3600));

    // Gated for the first 3 h, then re-learned within the 45 min release
    assert!(indices[3599] > 400, "at 1h: {}", indices[3599]);
    assert!(indices[2 * 3600 - 1] > 400, "at 2h: {}", indices[2 * 3600 - 1]);
    common::assert_between(&indices[4 * 3600..], 95, 110);
}

#[test]
fn downward_drift_is_tracked() {
    let mut rng = TestRng::new(9);
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    let signal = generators::drift(&mut rng, 20_000.0, -200.0, 1.0, 6 * 3600);
    let indices = common::run(&mut voc, &signal);
    common::assert_between(&indices[3600..], 95, 105);
}

#[test]
fn nox_event_rises_and_recovers() {
    let mut rng = TestRng::new(5);
    let mut nox = GasIndexAlgorithm::new(AlgorithmType::Nox);
    common::run(&mut nox, &generators::noisy(&mut rng, 16_000.0, 10.0, 3600));

    let event = common::run(&mut nox, &generators::constant(19_000, 120));
    assert!(*event.iter().max().unwrap() > 10);
    common::assert_in_range(&event);

    let index = common::hold(&mut nox, 16_000, 1200);
    assert!(index <= 3, "NOx did not recover: {}", index);
}

#[test]
fn sampling_interval_is_real_time() {
    let signal_at = |t: f32| if t < 1800.0 { 25_000 } else { 25_500 };

    let mut finals = Vec::new();
    for interval in [1.0, 2.0, 5.0] {
        let mut voc = GasIndexAlgorithm::with_sampling_interval(AlgorithmType::Voc, interval)
            .unwrap();
        let signal = generators::resample(signal_at, interval, 7200.0);
        let indices = common::run(&mut voc, &signal);

        let step_at = (1800.0 / interval) as usize;
        let peak = *indices[step_at..step_at + (120.0 / interval) as usize]
            .iter()
            .max()
            .unwrap();
        assert!(peak > 150, "interval {}s peaked at {}", interval, peak);
        finals.push(*indices.last().unwrap());
    }

    for index in finals {
        common::assert_near(index, 100, 2);
    }
}

#[test]
fn reset_matches_fresh_instance() {
    let signal = generators::step(22_000, 30_000, 500, 1500);

    let mut used = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::run(&mut used, &generators::constant(35_000, 2000));
    used.reset();

    let mut fresh = GasIndexAlgorithm::new(AlgorithmType::Voc);
    assert_eq!(common::run(&mut used, &signal), common::run(&mut fresh, &signal));
}

#[test]
fn fault_ticks_are_bridged() {
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::skip_blackout(&mut voc, 25_000);
    common::hold(&mut voc, 25_000, 600);
    let state = voc.states();

    let mut signal = generators::constant(25_000, 100);
    for tick in signal.iter_mut().step_by(3) {
        *tick = 0;
    }
    signal[50] = 65_000;
    let indices = common::run(&mut voc, &signal);
    common::assert_between(&indices, 99, 101);
    assert_eq!(voc.states().mean(), state.mean());
}

#[test]
fn reconfiguring_keeps_learned_state() {
    let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
    common::hold(&mut voc, 28_000, 1000);
    let state = voc.states();

    voc.set_sampling_interval(2.0).unwrap();
    voc.set_tuning_parameters(TuningParameters::default().with_gain_factor(300.0))
        .unwrap();
    assert_eq!(voc.states(), state);
    assert_eq!(voc.sample_count(), 1000);
    assert!(!voc.is_blackout());
    common::assert_near(voc.process(28_000), 100, 1);
}
