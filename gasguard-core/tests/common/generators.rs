//! Deterministic raw-tick generators
//!
//! Every generator is driven by [`TestRng`], a fixed-seed LCG, so a failing
//! scenario replays bit for bit. Ticks are clamped into the `u16` range the
//! sensor produces.

/// Linear congruential generator, same constants as Numerical Recipes
#[derive(Debug, Clone)]
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Uniform in `[0, 1)`
    pub fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Approximately Gaussian (Irwin-Hall with 12 terms)
    pub fn gaussian(&mut self, std_dev: f32) -> f32 {
        let sum: f32 = (0..12).map(|_| self.next_f32()).sum();
        (sum - 6.0) * std_dev
    }
}

fn to_tick(value: f32) -> u16 {
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

/// Flat signal
pub fn constant(raw: u16, count: usize) -> Vec<u16> {
    vec![raw; count]
}

/// Gaussian noise around a fixed level
pub fn noisy(rng: &mut TestRng, base: f32, std_dev: f32, count: usize) -> Vec<u16> {
    (0..count).map(|_| to_tick(base + rng.gaussian(std_dev))).collect()
}

/// Abrupt change from `before` to `after` at sample `at`
pub fn step(before: u16, after: u16, at: usize, count: usize) -> Vec<u16> {
    (0..count).map(|i| if i < at { before } else { after }).collect()
}

/// Short excursion to `level` on an otherwise flat signal
pub fn spike(base: u16, level: u16, start: usize, length: usize, count: usize) -> Vec<u16> {
    (0..count)
        .map(|i| if i >= start && i < start + length { level } else { base })
        .collect()
}

/// Slow linear baseline drift with noise, e.g. a sensor ageing or a
/// humidity swing
pub fn drift(
    rng: &mut TestRng,
    start: f32,
    ticks_per_hour: f32,
    sampling_interval: f32,
    count: usize,
) -> Vec<u16> {
    (0..count)
        .map(|i| {
            let hours = i as f32 * sampling_interval / 3600.0;
            to_tick(start + ticks_per_hour * hours + rng.gaussian(10.0))
        })
        .collect()
}

/// Same real-time signal resampled at a different interval
pub fn resample(signal_at: impl Fn(f32) -> u16, sampling_interval: f32, duration_s: f32) -> Vec<u16> {
    let count = (duration_s / sampling_interval) as usize;
    (0..count)
        .map(|i| signal_at(i as f32 * sampling_interval))
        .collect()
}
