//! Tuning Parameter Ranges
//!
//! Bounds accepted by `TuningParameters::validate`. Values outside these
//! ranges are rejected with `ConfigError::OutOfRange` and the previously
//! active parameters stay in place.

/// Smallest index reported for the learned baseline.
pub const INDEX_OFFSET_MIN: f32 = 1.0;
/// Largest index reported for the learned baseline.
pub const INDEX_OFFSET_MAX: f32 = 250.0;

/// Shortest learning time constant (hours).
pub const LEARNING_TIME_HOURS_MIN: f32 = 1.0;
/// Longest learning time constant (hours).
pub const LEARNING_TIME_HOURS_MAX: f32 = 1000.0;

/// Gating may be disabled entirely with a zero duration (minutes).
pub const GATING_MAX_DURATION_MINUTES_MIN: f32 = 0.0;
/// Longest time the estimator may stay gated before it is released (minutes).
pub const GATING_MAX_DURATION_MINUTES_MAX: f32 = 3000.0;

/// Smallest initial standard deviation (raw ticks).
pub const STD_INITIAL_MIN: f32 = 10.0;
/// Largest initial standard deviation (raw ticks).
pub const STD_INITIAL_MAX: f32 = 5000.0;

/// Smallest gain applied to the standardized deviation.
pub const GAIN_FACTOR_MIN: f32 = 1.0;
/// Largest gain applied to the standardized deviation.
pub const GAIN_FACTOR_MAX: f32 = 1000.0;
