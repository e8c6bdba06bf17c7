//! Adaptive Mean/Variance Estimator
//!
//! ## Overview
//!
//! Tracks the baseline (mean) and spread (standard deviation) of a raw gas
//! signal online, with no training phase and a fixed handful of floats of
//! state. The index is computed relative to this baseline, so the estimator
//! decides what "normal air" looks like for each individual sensor.
//!
//! ## Update Rule
//!
//! Each sample updates both moments with exponential forgetting:
//!
//! ```text
//! delta  = x - mean
//! var'   = (1 - γv) · (std² + γv · delta²)
//! mean'  = mean + γm · delta
//! γ      = w · dt / (tau + dt)
//! ```
//!
//! `tau` is given in real seconds so instances sampled at different rates
//! learn at the same real-time speed. `w` is the gating weight below.
//!
//! ## Warm-up
//!
//! A fresh VOC estimator knows nothing about its sensor. It starts with a
//! short mean time constant that fades into the steady-state one:
//!
//! ```text
//! tau_mean = min(tau_steady, tau_initial / phase(uptime))
//! ```
//!
//! `phase` is a logistic step from 1 to 0 around the warm-up duration, so
//! the hand-off is a continuous blend rather than a mode switch. Variance
//! gets its own fast window that opens only after the mean has settled, so
//! the initial convergence of the mean does not inflate the spread.
//!
//! NOx estimators skip warm-up: NOx baselines are stable from the first
//! sample on.
//!
//! ## Gating
//!
//! A pollution event should not become the new baseline. Learning is
//! weighted by a logistic gate of the standardized deviation: samples far
//! above the baseline barely move it. Samples below the baseline are never
//! gated, since cleaner air is exactly what the baseline should track.
//!
//! A gate that never opens would freeze the baseline forever after a real
//! step change. A gating-duration accumulator fills while gated and drains
//! slowly otherwise. Once it exceeds `gating_max_duration_minutes` the gate
//! is released for a release window and then re-engages. Opening the gate
//! alone is not enough against a 12 h steady-state time constant, so the
//! release also arms a short mean time constant that fades out over the
//! window:
//!
//! ```text
//! tau_mean = min(tau_steady, TAU_RELEASE_MEAN_S / (remaining / window))
//! ```
//!
//! ## Numerical Notes
//!
//! - Mean is kept as `offset + residual`. The residual is folded into the
//!   offset when it reaches ±100 ticks, which keeps f32 increments of
//!   `1e-5 · delta` from vanishing against a 5-digit baseline.
//! - Standard deviation is floored at [`STD_FLOOR`] and always widened by a
//!   per-type bonus before dividing, so standardizing never divides by zero.
//! - Sigmoid exponent arguments are clamped to ±50.

use crate::algorithm::AlgorithmType;
use crate::constants::algorithm::{
    GATING_MAX_RATIO, GATING_RELEASE_NOX_S, GATING_RELEASE_VOC_S, GATING_THRESHOLD_NOX,
    GATING_THRESHOLD_VOC, GATING_TRANSITION_NOX, GATING_TRANSITION_VOC, INIT_DURATION_MEAN_VOC,
    INIT_DURATION_VARIANCE_VOC, INIT_TRANSITION, MEAN_RECENTER_THRESHOLD, PERSISTENCE_UPTIME_S,
    SIGMOID_EXP_LIMIT, STD_BONUS_NOX, STD_BONUS_VOC, STD_FLOOR, TAU_INITIAL_MEAN_VOC,
    TAU_INITIAL_VARIANCE, TAU_RELEASE_MEAN_S, UPTIME_LIMIT_S,
};
use crate::constants::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::errors::{ConfigError, ConfigResult};
use crate::tuning::TuningParameters;

/// Persistable snapshot of a [`MeanVarianceEstimator`]
///
/// Plain numbers, nothing hidden. Storing this record and handing it back
/// through [`MeanVarianceEstimator::set_state`] resumes learning exactly
/// where it stopped.
///
/// All values live in the estimator's input domain. When the estimator is
/// driven by [`GasIndexAlgorithm`](crate::GasIndexAlgorithm) that is the raw
/// tick minus the type's window minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorState {
    /// Coarse part of the mean
    pub offset: f32,
    /// Fine part of the mean, kept within ±100 of zero
    pub residual: f32,
    /// Learned standard deviation
    pub std: f32,
    /// Seconds of learning so far, saturating. Zero means "never seeded".
    pub uptime: f32,
    /// Seconds since the gate was last released, saturating
    pub uptime_gating: f32,
    /// Accumulated gating time in minutes
    pub gating_duration_minutes: f32,
    /// Seconds left in the fast-absorption window armed by a gating release
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_remaining_s: f32,
}

impl EstimatorState {
    /// State from the two numbers most firmware persists.
    ///
    /// Uptime is set past every warm-up window, so a restored estimator
    /// continues in steady state.
    pub fn from_mean_std(mean: f32, std: f32) -> Self {
        Self {
            offset: mean,
            residual: 0.0,
            std,
            uptime: PERSISTENCE_UPTIME_S,
            uptime_gating: 0.0,
            gating_duration_minutes: 0.0,
            release_remaining_s: 0.0,
        }
    }

    /// Fresh, unseeded state
    pub fn initial(std_initial: f32) -> Self {
        Self {
            offset: 0.0,
            residual: 0.0,
            std: std_initial,
            uptime: 0.0,
            uptime_gating: 0.0,
            gating_duration_minutes: 0.0,
            release_remaining_s: 0.0,
        }
    }

    /// Learned mean
    pub fn mean(&self) -> f32 {
        self.offset + self.residual
    }

    /// Reject records that could not have come from a running estimator
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("offset", self.offset),
            ("residual", self.residual),
            ("std", self.std),
            ("uptime", self.uptime),
            ("uptime_gating", self.uptime_gating),
            ("gating_duration_minutes", self.gating_duration_minutes),
            ("release_remaining_s", self.release_remaining_s),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::InvalidState { field });
            }
        }
        if self.std <= 0.0 {
            return Err(ConfigError::InvalidState { field: "std" });
        }
        let counters = [
            ("uptime", self.uptime),
            ("uptime_gating", self.uptime_gating),
            ("gating_duration_minutes", self.gating_duration_minutes),
            ("release_remaining_s", self.release_remaining_s),
        ];
        for (field, value) in counters {
            if value < 0.0 {
                return Err(ConfigError::InvalidState { field });
            }
        }
        Ok(())
    }
}

/// Fast-start schedule used by VOC estimators
#[derive(Debug, Clone, Copy, PartialEq)]
struct WarmUp {
    tau_mean_s: f32,
    mean_duration_s: f32,
    variance_duration_s: f32,
}

/// Constants derived from tuning parameters and the sampling interval
///
/// Recomputed whenever either changes. Holds no learned state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    sampling_interval: f32,
    std_initial: f32,
    tau_mean_s: f32,
    tau_variance_s: f32,
    warm_up: Option<WarmUp>,
    std_bonus: f32,
    gating_threshold: f32,
    gating_transition: f32,
    gating_release_s: f32,
    gating_max_duration_minutes: f32,
}

impl EstimatorConfig {
    /// Derive estimator constants.
    ///
    /// Inputs are expected to be validated already; see
    /// [`TuningParameters::validate`].
    pub fn new(
        algorithm_type: AlgorithmType,
        tuning: &TuningParameters,
        sampling_interval: f32,
    ) -> Self {
        let (std_bonus, gating_threshold, gating_transition, gating_release_s) =
            match algorithm_type {
                AlgorithmType::Voc => (
                    STD_BONUS_VOC,
                    GATING_THRESHOLD_VOC,
                    GATING_TRANSITION_VOC,
                    GATING_RELEASE_VOC_S,
                ),
                AlgorithmType::Nox => (
                    STD_BONUS_NOX,
                    GATING_THRESHOLD_NOX,
                    GATING_TRANSITION_NOX,
                    GATING_RELEASE_NOX_S,
                ),
            };
        let warm_up = if algorithm_type.uses_warm_up() {
            Some(WarmUp {
                tau_mean_s: TAU_INITIAL_MEAN_VOC,
                mean_duration_s: INIT_DURATION_MEAN_VOC,
                variance_duration_s: INIT_DURATION_VARIANCE_VOC,
            })
        } else {
            None
        };

        Self {
            sampling_interval,
            std_initial: tuning.std_initial,
            tau_mean_s: tuning.learning_time_offset_hours * SECONDS_PER_HOUR,
            tau_variance_s: tuning.learning_time_gain_hours * SECONDS_PER_HOUR,
            warm_up,
            std_bonus,
            gating_threshold,
            gating_transition,
            gating_release_s,
            gating_max_duration_minutes: tuning.gating_max_duration_minutes,
        }
    }

    /// Seconds between samples
    pub fn sampling_interval(&self) -> f32 {
        self.sampling_interval
    }

    /// Whether this configuration runs the fast-start schedule
    pub fn has_warm_up(&self) -> bool {
        self.warm_up.is_some()
    }
}

/// Online mean/variance estimator with warm-up and gating
#[derive(Debug, Clone)]
pub struct MeanVarianceEstimator {
    config: EstimatorConfig,
    state: EstimatorState,
}

impl MeanVarianceEstimator {
    /// Create an unseeded estimator
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            state: EstimatorState::initial(config.std_initial),
        }
    }

    /// Forget everything learned, keep the configuration
    pub fn reset(&mut self) {
        self.state = EstimatorState::initial(self.config.std_initial);
    }

    /// Swap in new derived constants without touching learned state
    pub fn reconfigure(&mut self, config: EstimatorConfig) {
        self.config = config;
    }

    /// Feed one sample, returning the updated `(mean, std)`.
    ///
    /// The first sample seeds the mean. Non-finite samples are ignored.
    pub fn update(&mut self, sample: f32) -> (f32, f32) {
        if !sample.is_finite() {
            return (self.mean(), self.std());
        }

        let dt = self.config.sampling_interval;

        if !self.is_initialized() {
            self.state.offset = sample;
            self.state.residual = 0.0;
            self.state.uptime = dt.min(UPTIME_LIMIT_S);
            return (self.mean(), self.std());
        }

        if libm::fabsf(self.state.residual) >= MEAN_RECENTER_THRESHOLD {
            self.state.offset += self.state.residual;
            self.state.residual = 0.0;
        }

        let delta = (sample - self.state.offset) - self.state.residual;
        let standardized = delta / self.spread();

        self.advance_uptime(dt);

        let (gamma_mean, gamma_variance) = self.learning_rates();
        let weight = self.gating_weight(standardized);
        self.track_gating(weight, dt);

        let gamma_mean = weight * gamma_mean;
        let gamma_variance = weight * gamma_variance;

        let std = self.state.std;
        let variance = (1.0 - gamma_variance) * (std * std + gamma_variance * delta * delta);
        self.state.std = libm::sqrtf(variance).max(STD_FLOOR);
        self.state.residual += gamma_mean * delta;

        (self.mean(), self.std())
    }

    /// Deviation of `sample` from the learned mean, in units of the spread
    pub fn standardize(&self, sample: f32) -> f32 {
        (sample - self.mean()) / self.spread()
    }

    /// Learned mean
    pub fn mean(&self) -> f32 {
        self.state.mean()
    }

    /// Learned standard deviation
    pub fn std(&self) -> f32 {
        self.state.std
    }

    /// True once the first sample has seeded the mean
    pub fn is_initialized(&self) -> bool {
        self.state.uptime > 0.0
    }

    /// Snapshot for persistence
    pub fn state(&self) -> EstimatorState {
        self.state
    }

    /// Restore a snapshot taken with [`state`](Self::state)
    pub fn set_state(&mut self, state: EstimatorState) {
        self.state = state;
    }

    /// Learned std widened by the per-type bonus
    fn spread(&self) -> f32 {
        self.state.std.max(STD_FLOOR) + self.config.std_bonus
    }

    fn advance_uptime(&mut self, dt: f32) {
        let limit = UPTIME_LIMIT_S - dt;
        if self.state.uptime < limit {
            self.state.uptime += dt;
        }
        if self.state.uptime_gating < limit {
            self.state.uptime_gating += dt;
        }
        self.state.release_remaining_s = (self.state.release_remaining_s - dt).max(0.0);
    }

    /// Ungated `(γ_mean, γ_variance)` for the current uptime
    fn learning_rates(&self) -> (f32, f32) {
        let dt = self.config.sampling_interval;
        let mut tau_mean = self.config.tau_mean_s;
        let mut tau_variance = self.config.tau_variance_s;

        if let Some(warm_up) = self.config.warm_up {
            let uptime = self.state.uptime;
            let mean_phase = sigmoid(uptime, warm_up.mean_duration_s, INIT_TRANSITION);
            let variance_phase = sigmoid(uptime, warm_up.variance_duration_s, INIT_TRANSITION);

            if mean_phase > 0.0 {
                tau_mean = tau_mean.min(warm_up.tau_mean_s / mean_phase);
            }
            // Variance learns fast only once the mean has settled
            let variance_window = variance_phase - mean_phase;
            if variance_window > 0.0 {
                tau_variance = tau_variance.min(TAU_INITIAL_VARIANCE / variance_window);
            }
        }

        let release_phase = self.state.release_remaining_s / self.config.gating_release_s;
        if release_phase > 0.0 {
            tau_mean = tau_mean.min(TAU_RELEASE_MEAN_S / release_phase);
        }

        (dt / (tau_mean + dt), dt / (tau_variance + dt))
    }

    /// Learning weight in `[0, 1]` for a sample at `standardized` deviation
    fn gating_weight(&self, standardized: f32) -> f32 {
        let gate = sigmoid(
            standardized,
            self.config.gating_threshold,
            self.config.gating_transition,
        );
        let release = sigmoid(
            self.state.uptime_gating,
            self.config.gating_release_s,
            INIT_TRANSITION,
        );
        1.0 - (1.0 - release) * (1.0 - gate)
    }

    fn track_gating(&mut self, weight: f32, dt: f32) {
        let gated = (1.0 - weight) * (1.0 + GATING_MAX_RATIO) - GATING_MAX_RATIO;
        let duration = self.state.gating_duration_minutes + dt / SECONDS_PER_MINUTE * gated;
        self.state.gating_duration_minutes = duration.max(0.0);

        if self.state.gating_duration_minutes > self.config.gating_max_duration_minutes {
            if self.state.uptime_gating > 0.0 {
                gas_debug!(
                    "gating released after {} min",
                    self.state.gating_duration_minutes
                );
            }
            self.state.uptime_gating = 0.0;
            self.state.release_remaining_s = self.config.gating_release_s;
        }
    }
}

/// Falling logistic step: ≈1 well below `x0`, ≈0 well above it
fn sigmoid(x: f32, x0: f32, k: f32) -> f32 {
    let exponent = k * (x - x0);
    if exponent < -SIGMOID_EXP_LIMIT {
        1.0
    } else if exponent > SIGMOID_EXP_LIMIT {
        0.0
    } else {
        1.0 / (1.0 + libm::expf(exponent))
    }
}
