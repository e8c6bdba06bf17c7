//! Gas Index Algorithm
//!
//! ## Overview
//!
//! [`GasIndexAlgorithm`] turns one raw sensor tick per sampling interval
//! into an index on the 0-500 scale. It owns every piece of state involved
//! and performs no I/O, no timing and no allocation:
//!
//! ```text
//! raw ──► condition ──► estimator.update ──► standardize ──► scaler ──► low-pass ──► index
//!            │                  ▲
//!            └── held value ────┘  (reused when the tick is a fault)
//! ```
//!
//! ## Output Contract
//!
//! - `0` means "no valid reading yet". It is returned for the blackout
//!   window after construction or [`reset`](GasIndexAlgorithm::reset) and
//!   never afterwards.
//! - Every later output is in `1..=500`.
//! - A signal sitting on the learned baseline reads `index_offset`
//!   (100 for VOC, 1 for NOx with default tuning). Higher means more gas.
//!
//! ## Raw Conditioning
//!
//! Ticks of `0` or `>= 65000` are sensor faults and replaced by the last
//! valid conditioned value. Valid ticks are clamped into a 32767-tick window
//! above the type minimum (20000 VOC, 10000 NOx) and shifted down by it.
//!
//! ## Configuration
//!
//! Tuning parameters and the sampling interval can change at any time.
//! Derived constants are recomputed immediately, learned state is kept, and
//! an invalid value is rejected with the previous configuration left in
//! place.
//!
//! ## Persistence
//!
//! ```rust
//! use gasguard_core::{AlgorithmType, GasIndexAlgorithm};
//!
//! let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
//! for _ in 0..600 {
//!     voc.process(30_000);
//! }
//!
//! // Before power-down
//! let saved = voc.states();
//!
//! // After power-up
//! let mut restored = GasIndexAlgorithm::new(AlgorithmType::Voc);
//! restored.set_states(saved).unwrap();
//! assert_eq!(restored.states(), saved);
//! ```

use crate::constants::algorithm::{
    INDEX_FLOOR, INDEX_MAX, INDEX_UNINITIALIZED, INITIAL_BLACKOUT_S, NOX_RAW_MINIMUM,
    RAW_FAULT_THRESHOLD, RAW_WINDOW_WIDTH, VOC_RAW_MINIMUM,
};
use crate::constants::time::DEFAULT_SAMPLING_INTERVAL_S;
use crate::errors::{ConfigError, ConfigResult};
use crate::estimator::{EstimatorConfig, EstimatorState, MeanVarianceEstimator};
use crate::lowpass::AdaptiveLowpass;
use crate::scaler::SigmoidScaler;
use crate::tuning::TuningParameters;

/// Target gas class of an algorithm instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlgorithmType {
    /// Volatile organic compounds
    #[default]
    Voc,
    /// Nitrogen oxides
    Nox,
}

impl AlgorithmType {
    /// Lower edge of the raw tick window
    pub const fn raw_minimum(self) -> i32 {
        match self {
            Self::Voc => VOC_RAW_MINIMUM,
            Self::Nox => NOX_RAW_MINIMUM,
        }
    }

    /// Whether the estimator starts with a fast-learning warm-up
    pub const fn uses_warm_up(self) -> bool {
        matches!(self, Self::Voc)
    }
}

/// Stateful raw-tick to gas-index transform
#[derive(Debug, Clone)]
pub struct GasIndexAlgorithm {
    algorithm_type: AlgorithmType,
    tuning: TuningParameters,
    sampling_interval: f32,
    blackout_samples: u32,
    sample_count: u32,
    /// Last valid conditioned tick, `None` until one arrives
    conditioned: Option<f32>,
    estimator: MeanVarianceEstimator,
    scaler: SigmoidScaler,
    lowpass: AdaptiveLowpass,
}

impl GasIndexAlgorithm {
    /// Create an instance sampled once per second with preset tuning
    pub fn new(algorithm_type: AlgorithmType) -> Self {
        Self::build(algorithm_type, DEFAULT_SAMPLING_INTERVAL_S)
    }

    /// Create an instance for a custom sampling interval in seconds
    pub fn with_sampling_interval(
        algorithm_type: AlgorithmType,
        sampling_interval: f32,
    ) -> ConfigResult<Self> {
        check_sampling_interval(sampling_interval)?;
        Ok(Self::build(algorithm_type, sampling_interval))
    }

    fn build(algorithm_type: AlgorithmType, sampling_interval: f32) -> Self {
        let tuning = TuningParameters::for_algorithm(algorithm_type);
        let config = EstimatorConfig::new(algorithm_type, &tuning, sampling_interval);

        gas_debug!(
            "gas index init: {:?} every {}s",
            algorithm_type,
            sampling_interval
        );

        Self {
            algorithm_type,
            tuning,
            sampling_interval,
            blackout_samples: blackout_samples_for(sampling_interval),
            sample_count: 0,
            conditioned: None,
            estimator: MeanVarianceEstimator::new(config),
            scaler: SigmoidScaler::for_algorithm(algorithm_type),
            lowpass: AdaptiveLowpass::new(sampling_interval),
        }
    }

    /// Clear everything learned. Tuning and interval are kept.
    pub fn reset(&mut self) {
        self.sample_count = 0;
        self.conditioned = None;
        self.estimator.reset();
        self.lowpass.reset();
        gas_debug!("gas index reset: {:?}", self.algorithm_type);
    }

    /// Active tuning parameters
    pub fn tuning_parameters(&self) -> TuningParameters {
        self.tuning
    }

    /// Replace the tuning parameters.
    ///
    /// On error nothing changes. `std_initial` only matters for the next
    /// [`reset`](Self::reset); everything else applies to the next sample.
    pub fn set_tuning_parameters(&mut self, tuning: TuningParameters) -> ConfigResult<()> {
        if let Err(err) = tuning.validate() {
            gas_warn!("rejected tuning parameters: {:?}", err);
            return Err(err);
        }
        self.tuning = tuning;
        self.reconfigure();
        Ok(())
    }

    /// Seconds between consecutive `process` calls
    pub fn sampling_interval(&self) -> f32 {
        self.sampling_interval
    }

    /// Change the sampling interval, keeping learned state.
    ///
    /// The blackout length is recomputed but the sample count is kept.
    pub fn set_sampling_interval(&mut self, sampling_interval: f32) -> ConfigResult<()> {
        if let Err(err) = check_sampling_interval(sampling_interval) {
            gas_warn!("rejected sampling interval: {:?}", err);
            return Err(err);
        }
        self.sampling_interval = sampling_interval;
        self.blackout_samples = blackout_samples_for(sampling_interval);
        self.lowpass.set_sampling_interval(sampling_interval);
        self.reconfigure();
        Ok(())
    }

    /// Snapshot of the learned baseline for persistence
    pub fn states(&self) -> EstimatorState {
        self.estimator.state()
    }

    /// Resume from a snapshot taken with [`states`](Self::states) or built
    /// with [`EstimatorState::from_mean_std`].
    ///
    /// Blackout still applies. If no valid tick has been seen yet the
    /// restored mean stands in for one, so fault ticks right after power-up
    /// read as the baseline.
    pub fn set_states(&mut self, state: EstimatorState) -> ConfigResult<()> {
        if let Err(err) = state.validate() {
            gas_warn!("rejected estimator state: {:?}", err);
            return Err(err);
        }
        self.estimator.set_state(state);
        if self.conditioned.is_none() && self.estimator.is_initialized() {
            self.conditioned = Some(state.mean());
        }
        gas_debug!("estimator state restored: mean {} std {}", state.mean(), state.std);
        Ok(())
    }

    /// Process one raw tick and return the gas index.
    ///
    /// Returns [`INDEX_UNINITIALIZED`] during blackout, otherwise `1..=500`.
    pub fn process(&mut self, raw: u16) -> u16 {
        if self.sample_count < self.blackout_samples {
            self.sample_count += 1;
            return INDEX_UNINITIALIZED;
        }
        self.sample_count = self.sample_count.saturating_add(1);

        if raw > 0 && raw < RAW_FAULT_THRESHOLD {
            let minimum = self.algorithm_type.raw_minimum();
            let windowed = i32::from(raw).clamp(minimum + 1, minimum + RAW_WINDOW_WIDTH);
            self.conditioned = Some((windowed - minimum) as f32);
        }

        let index = match self.conditioned {
            Some(sample) => {
                self.estimator.update(sample);
                let standardized = self.estimator.standardize(sample);
                self.scaler
                    .apply(standardized, self.tuning.index_offset, self.tuning.gain_factor)
            }
            None => self.tuning.index_offset,
        };

        let filtered = self.lowpass.process(index).max(INDEX_FLOOR);
        // Float to int casts saturate
        ((filtered + 0.5) as u16).min(INDEX_MAX)
    }

    /// Gas class this instance tracks
    pub fn algorithm_type(&self) -> AlgorithmType {
        self.algorithm_type
    }

    /// Number of leading samples reported as [`INDEX_UNINITIALIZED`]
    pub fn blackout_samples(&self) -> u32 {
        self.blackout_samples
    }

    /// Samples processed since construction or reset, saturating
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// True while `process` still returns [`INDEX_UNINITIALIZED`]
    pub fn is_blackout(&self) -> bool {
        self.sample_count < self.blackout_samples
    }

    fn reconfigure(&mut self) {
        let config = EstimatorConfig::new(self.algorithm_type, &self.tuning, self.sampling_interval);
        self.estimator.reconfigure(config);
    }
}

fn check_sampling_interval(value: f32) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSamplingInterval { value })
    }
}

/// Samples covering the blackout window, at least one
fn blackout_samples_for(sampling_interval: f32) -> u32 {
    (libm::ceilf(INITIAL_BLACKOUT_S / sampling_interval) as u32).max(1)
}
