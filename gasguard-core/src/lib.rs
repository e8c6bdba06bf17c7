//! Gas index algorithm for metal-oxide gas sensors
//!
//! Turns raw VOC/NOx sensor ticks into a 0-500 index where 100 (VOC) or 1
//! (NOx) is the sensor's own learned baseline. Designed for the same edge
//! devices that poll the sensor.
//!
//! Key constraints:
//! - No heap allocation, no I/O, no internal timing
//! - `process` never fails and always returns `0..=500`
//! - Learned state fits in a few floats and can be persisted
//!
//! ```
//! use gasguard_core::{AlgorithmType, GasIndexAlgorithm, INDEX_UNINITIALIZED};
//!
//! let mut voc = GasIndexAlgorithm::new(AlgorithmType::Voc);
//!
//! // One call per sampling interval
//! let index = voc.process(27_000);
//! if index == INDEX_UNINITIALIZED {
//!     // Sensor still settling, nothing to show yet
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod algorithm;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod lowpass;
pub mod scaler;
pub mod transport;
pub mod tuning;

// Public API
pub use algorithm::{AlgorithmType, GasIndexAlgorithm};
pub use constants::{INDEX_MAX, INDEX_UNINITIALIZED};
pub use errors::{ConfigError, ConfigResult};
pub use estimator::{EstimatorState, MeanVarianceEstimator};
pub use scaler::SigmoidScaler;
pub use transport::{Compensation, GasIndexPair, GasIndices, RawSignals, SensorTransport};
pub use tuning::TuningParameters;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
