//! Gas Index Algorithm Constants
//!
//! Numeric constants of the gas index algorithm, grouped by the stage that
//! uses them. VOC and NOx presets sit side by side.
//!
//! ## Signal Path
//!
//! ```text
//! raw tick ──► window/clamp ──► mean/variance estimator ──► standardize
//!                                                               │
//!            index ◄── round ◄── adaptive low-pass ◄── sigmoid scaler
//! ```

use super::time::SECONDS_PER_HOUR;

// ===== OUTPUT =====

/// Index reported while the output is not valid yet.
pub const INDEX_UNINITIALIZED: u16 = 0;

/// Upper bound of the index scale.
pub const INDEX_MAX: u16 = 500;

/// Upper asymptote of the scaling sigmoid.
pub const SIGMOID_L: f32 = 500.0;

/// Smallest filtered index before rounding, so a valid output is at least 1.
pub const INDEX_FLOOR: f32 = 0.5;

/// Initial blackout (seconds).
///
/// Outputs during the first 45 seconds after init/reset are reported as
/// [`INDEX_UNINITIALIZED`]. The sensor heater is still settling and the
/// estimator has not seen a usable sample.
pub const INITIAL_BLACKOUT_S: f32 = 45.0;

// ===== INDEX SCALING =====

/// Default gain applied to the standardized deviation.
pub const INDEX_GAIN: f32 = 230.0;

/// Baseline index for VOC. 100 means "typical indoor air".
pub const VOC_INDEX_OFFSET_DEFAULT: f32 = 100.0;

/// Baseline index for NOx. NOx is absent most of the time, so the baseline
/// sits at the bottom of the scale.
pub const NOX_INDEX_OFFSET_DEFAULT: f32 = 1.0;

/// Slope of the VOC scaling sigmoid (per scaled deviation unit).
pub const SIGMOID_K_VOC: f32 = -0.0065;

/// Midpoint of the VOC scaling sigmoid.
pub const SIGMOID_X0_VOC: f32 = 213.0;

/// Slope of the NOx scaling sigmoid (per scaled deviation unit).
pub const SIGMOID_K_NOX: f32 = -0.0101;

/// Midpoint of the NOx scaling sigmoid.
pub const SIGMOID_X0_NOX: f32 = 614.0;

/// Exponent arguments beyond this magnitude saturate the sigmoids.
pub const SIGMOID_EXP_LIMIT: f32 = 50.0;

// ===== RAW SIGNAL WINDOW =====

/// Ticks at or above this value are sensor faults and are ignored.
pub const RAW_FAULT_THRESHOLD: u16 = 65_000;

/// Width of the usable window above the type minimum (ticks).
pub const RAW_WINDOW_WIDTH: i32 = 32_767;

/// Lower edge of the VOC raw window (ticks).
pub const VOC_RAW_MINIMUM: i32 = 20_000;

/// Lower edge of the NOx raw window (ticks).
pub const NOX_RAW_MINIMUM: i32 = 10_000;

// ===== MEAN / VARIANCE ESTIMATOR =====

/// Default initial standard deviation (ticks).
pub const STD_INITIAL: f32 = 50.0;

/// Standard deviation never drops below this value (ticks).
pub const STD_FLOOR: f32 = 1.0e-3;

/// Spread added to the learned VOC std when standardizing (ticks).
///
/// Keeps a quiet sensor from turning tiny fluctuations into large index
/// swings.
pub const STD_BONUS_VOC: f32 = 220.0;

/// Spread added to the learned NOx std when standardizing (ticks).
///
/// NOx events are rare and large, so the spread is dominated by this term.
pub const STD_BONUS_NOX: f32 = 2000.0;

/// Default steady-state mean learning time (hours).
pub const TAU_MEAN_HOURS: f32 = 12.0;

/// Default steady-state variance learning time (hours).
pub const TAU_VARIANCE_HOURS: f32 = 12.0;

/// VOC mean time constant at the start of warm-up (seconds).
pub const TAU_INITIAL_MEAN_VOC: f32 = 20.0;

/// Variance time constant during the variance warm-up window (seconds).
pub const TAU_INITIAL_VARIANCE: f32 = 2500.0;

/// Uptime at which the VOC mean warm-up hands off (seconds).
pub const INIT_DURATION_MEAN_VOC: f32 = SECONDS_PER_HOUR * 0.75;

/// Uptime at which the VOC variance warm-up hands off (seconds).
pub const INIT_DURATION_VARIANCE_VOC: f32 = SECONDS_PER_HOUR * 1.45;

/// Steepness of the warm-up hand-off (per second).
pub const INIT_TRANSITION: f32 = 0.01;

/// Residual mean magnitude at which it is folded into the offset (ticks).
pub const MEAN_RECENTER_THRESHOLD: f32 = 100.0;

/// Uptime counters stop here (seconds).
pub const UPTIME_LIMIT_S: f32 = 32_767.0;

/// Uptime assigned to states restored from a bare mean/std pair (seconds).
///
/// Past every warm-up window, so a restored estimator resumes in steady
/// state.
pub const PERSISTENCE_UPTIME_S: f32 = 3.0 * SECONDS_PER_HOUR;

// ===== GATING =====

/// Standardized deviation at which VOC learning is half-gated.
pub const GATING_THRESHOLD_VOC: f32 = 1.43;

/// Standardized deviation at which NOx learning is half-gated.
pub const GATING_THRESHOLD_NOX: f32 = 1.48;

/// Steepness of the VOC gate (per standardized deviation unit).
pub const GATING_TRANSITION_VOC: f32 = 14.6;

/// Steepness of the NOx gate (per standardized deviation unit).
pub const GATING_TRANSITION_NOX: f32 = 5.9;

/// Default VOC gating limit (minutes).
pub const GATING_VOC_MAX_DURATION_MINUTES: f32 = 60.0 * 3.0;

/// Default NOx gating limit (minutes).
pub const GATING_NOX_MAX_DURATION_MINUTES: f32 = 60.0 * 12.0;

/// Rate at which the gating duration drains while not gated, relative to
/// the rate it fills while fully gated.
pub const GATING_MAX_RATIO: f32 = 0.3;

/// Length of the VOC window with gating released (seconds).
pub const GATING_RELEASE_VOC_S: f32 = SECONDS_PER_HOUR * 0.75;

/// Length of the NOx window with gating released (seconds).
pub const GATING_RELEASE_NOX_S: f32 = SECONDS_PER_HOUR * 4.75;

/// Mean time constant at the start of a gating release (seconds). It fades
/// back to the steady-state one as the release window runs out.
pub const TAU_RELEASE_MEAN_S: f32 = 300.0;

// ===== ADAPTIVE LOW-PASS =====

/// Fast output filter time constant (seconds).
pub const LP_TAU_FAST: f32 = 20.0;

/// Slow output filter time constant (seconds).
pub const LP_TAU_SLOW: f32 = 500.0;

/// How strongly fast/slow disagreement shortens the output time constant.
pub const LP_ALPHA: f32 = -0.2;
