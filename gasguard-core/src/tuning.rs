//! Tuning Parameters
//!
//! Caller-adjustable constants controlling learning speed and output scaling.
//! A plain value record: build one from a preset, adjust it with the `with_*`
//! setters and hand it to
//! [`GasIndexAlgorithm::set_tuning_parameters`](crate::GasIndexAlgorithm::set_tuning_parameters),
//! which validates it before anything changes.
//!
//! ## Accepted Ranges
//!
//! | field | min | max | unit |
//! |---|---|---|---|
//! | `index_offset` | 1 | 250 | index |
//! | `learning_time_offset_hours` | 1 | 1000 | hours |
//! | `learning_time_gain_hours` | 1 | 1000 | hours |
//! | `gating_max_duration_minutes` | 0 | 3000 | minutes |
//! | `std_initial` | 10 | 5000 | raw ticks |
//! | `gain_factor` | 1 | 1000 | - |
//!
//! ```rust
//! use gasguard_core::{AlgorithmType, TuningParameters};
//!
//! // Faster baseline tracking for a demo unit
//! let params = TuningParameters::for_algorithm(AlgorithmType::Voc)
//!     .with_learning_time_offset_hours(1.0)
//!     .with_gating_max_duration_minutes(30.0);
//! assert!(params.validate().is_ok());
//! ```

use crate::algorithm::AlgorithmType;
use crate::constants::algorithm::{
    GATING_NOX_MAX_DURATION_MINUTES, GATING_VOC_MAX_DURATION_MINUTES, INDEX_GAIN,
    NOX_INDEX_OFFSET_DEFAULT, STD_INITIAL, TAU_MEAN_HOURS, TAU_VARIANCE_HOURS,
    VOC_INDEX_OFFSET_DEFAULT,
};
use crate::constants::tuning::{
    GAIN_FACTOR_MAX, GAIN_FACTOR_MIN, GATING_MAX_DURATION_MINUTES_MAX,
    GATING_MAX_DURATION_MINUTES_MIN, INDEX_OFFSET_MAX, INDEX_OFFSET_MIN, LEARNING_TIME_HOURS_MAX,
    LEARNING_TIME_HOURS_MIN, STD_INITIAL_MAX, STD_INITIAL_MIN,
};
use crate::errors::{ConfigError, ConfigResult};

/// Tuning parameters of a gas index algorithm
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TuningParameters {
    /// Index reported when the raw signal sits on the learned baseline
    pub index_offset: f32,
    /// Time constant of the baseline (mean) estimate in hours
    pub learning_time_offset_hours: f32,
    /// Time constant of the spread (std) estimate in hours
    pub learning_time_gain_hours: f32,
    /// Longest stretch of gated learning before the gate is released, in
    /// minutes. Zero disables gating.
    pub gating_max_duration_minutes: f32,
    /// Standard deviation assumed before anything is learned (raw ticks).
    /// Takes effect at the next reset.
    pub std_initial: f32,
    /// Gain applied to the standardized deviation before scaling
    pub gain_factor: f32,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self::for_algorithm(AlgorithmType::Voc)
    }
}

impl TuningParameters {
    /// Preset for the given algorithm type
    pub const fn for_algorithm(algorithm_type: AlgorithmType) -> Self {
        let (index_offset, gating_max_duration_minutes) = match algorithm_type {
            AlgorithmType::Voc => (VOC_INDEX_OFFSET_DEFAULT, GATING_VOC_MAX_DURATION_MINUTES),
            AlgorithmType::Nox => (NOX_INDEX_OFFSET_DEFAULT, GATING_NOX_MAX_DURATION_MINUTES),
        };

        Self {
            index_offset,
            learning_time_offset_hours: TAU_MEAN_HOURS,
            learning_time_gain_hours: TAU_VARIANCE_HOURS,
            gating_max_duration_minutes,
            std_initial: STD_INITIAL,
            gain_factor: INDEX_GAIN,
        }
    }

    /// Set the baseline index
    pub fn with_index_offset(mut self, index_offset: f32) -> Self {
        self.index_offset = index_offset;
        self
    }

    /// Set the mean learning time
    pub fn with_learning_time_offset_hours(mut self, hours: f32) -> Self {
        self.learning_time_offset_hours = hours;
        self
    }

    /// Set the std learning time
    pub fn with_learning_time_gain_hours(mut self, hours: f32) -> Self {
        self.learning_time_gain_hours = hours;
        self
    }

    /// Set the gating limit
    pub fn with_gating_max_duration_minutes(mut self, minutes: f32) -> Self {
        self.gating_max_duration_minutes = minutes;
        self
    }

    /// Set the initial std
    pub fn with_std_initial(mut self, std_initial: f32) -> Self {
        self.std_initial = std_initial;
        self
    }

    /// Set the gain
    pub fn with_gain_factor(mut self, gain_factor: f32) -> Self {
        self.gain_factor = gain_factor;
        self
    }

    /// Check every field against its accepted range.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported.
    pub fn validate(&self) -> ConfigResult<()> {
        check_range("index_offset", self.index_offset, INDEX_OFFSET_MIN, INDEX_OFFSET_MAX)?;
        check_range(
            "learning_time_offset_hours",
            self.learning_time_offset_hours,
            LEARNING_TIME_HOURS_MIN,
            LEARNING_TIME_HOURS_MAX,
        )?;
        check_range(
            "learning_time_gain_hours",
            self.learning_time_gain_hours,
            LEARNING_TIME_HOURS_MIN,
            LEARNING_TIME_HOURS_MAX,
        )?;
        check_range(
            "gating_max_duration_minutes",
            self.gating_max_duration_minutes,
            GATING_MAX_DURATION_MINUTES_MIN,
            GATING_MAX_DURATION_MINUTES_MAX,
        )?;
        check_range("std_initial", self.std_initial, STD_INITIAL_MIN, STD_INITIAL_MAX)?;
        check_range("gain_factor", self.gain_factor, GAIN_FACTOR_MIN, GAIN_FACTOR_MAX)?;
        Ok(())
    }
}

/// Check if a finite value is within the specified range
fn check_range(parameter: &'static str, value: f32, min: f32, max: f32) -> ConfigResult<()> {
    if !value.is_finite() {
        Err(ConfigError::NotFinite { parameter })
    } else if value < min || value > max {
        Err(ConfigError::OutOfRange {
            parameter,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}
