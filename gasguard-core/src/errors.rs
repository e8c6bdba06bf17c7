//! Error Types for Gas Index Configuration
//!
//! ## Design Philosophy
//!
//! GasGuard's error system is designed with embedded firmware in mind:
//!
//! 1. **Small Size**: Each error variant is kept minimal since errors are
//!    returned from setters that may run inside a sensor task.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, only
//!    `&'static str` for parameter names.
//!
//! 3. **Copy Semantics**: Errors implement Copy so they can be stored or
//!    forwarded to a status register without ownership juggling.
//!
//! 4. **Local and Recoverable**: Every error is reported by the call that
//!    caused it. The previous configuration stays active and the caller may
//!    simply retry with corrected values.
//!
//! ## Error Categories
//!
//! Only configuration can fail:
//! - `InvalidSamplingInterval`: interval is zero, negative, NaN or infinite
//! - `OutOfRange`: a tuning parameter is outside its accepted range
//! - `NotFinite`: a tuning parameter is NaN or infinite
//! - `InvalidState`: a restored estimator state holds impossible values
//!
//! Processing a raw tick never fails. Once an algorithm instance exists,
//! `process` always returns an index in `0..=500`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use gasguard_core::{AlgorithmType, ConfigError, GasIndexAlgorithm, TuningParameters};
//!
//! let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
//! let params = TuningParameters::for_algorithm(AlgorithmType::Voc).with_gain_factor(0.0);
//!
//! match voc.set_tuning_parameters(params) {
//!     Ok(()) => {}
//!     Err(ConfigError::OutOfRange { parameter, .. }) => {
//!         // Previous tuning is still active
//!         assert_eq!(parameter, "gain_factor");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Sampling interval must be a finite number of seconds above zero
    #[error("Invalid sampling interval {value}s: must be finite and > 0")]
    InvalidSamplingInterval {
        /// The rejected interval in seconds
        value: f32,
    },

    /// Tuning parameter outside its accepted range
    #[error("Tuning parameter {parameter}={value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field
        parameter: &'static str,
        /// The rejected value
        value: f32,
        /// Smallest accepted value
        min: f32,
        /// Largest accepted value
        max: f32,
    },

    /// Tuning parameter is NaN or infinite
    #[error("Tuning parameter {parameter} is not a finite number")]
    NotFinite {
        /// Name of the offending field
        parameter: &'static str,
    },

    /// Restored estimator state is corrupt
    #[error("Invalid estimator state: field {field}")]
    InvalidState {
        /// Name of the offending state field
        field: &'static str,
    },
}

impl ConfigError {
    /// Name of the parameter that caused the error
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidSamplingInterval { .. } => "sampling_interval",
            Self::OutOfRange { parameter, .. } | Self::NotFinite { parameter } => parameter,
            Self::InvalidState { field } => field,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidSamplingInterval { value } =>
                defmt::write!(fmt, "Invalid sampling interval {}s", value),
            Self::OutOfRange { parameter, value, min, max } =>
                defmt::write!(fmt, "{}={} outside [{}, {}]", parameter, value, min, max),
            Self::NotFinite { parameter } =>
                defmt::write!(fmt, "{} not finite", parameter),
            Self::InvalidState { field } =>
                defmt::write!(fmt, "invalid state field {}", field),
        }
    }
}
