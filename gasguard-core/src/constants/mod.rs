//! Constants for GasGuard Core
//!
//! This module provides centralized, documented constants used throughout
//! the gas index algorithm. All numeric values are defined here with their
//! units and purpose.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Time**: Unit conversions and the default sampling interval
//! - **Algorithm**: Sigmoid, estimator, gating and filter constants, with
//!   VOC and NOx presets
//! - **Tuning**: Accepted range for each caller-adjustable tuning parameter
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name (`_S`, `_MINUTES`, `_HOURS`)
//! 3. Keep VOC and NOx variants next to each other

/// Time unit conversions and sampling defaults.
pub mod time;

/// Gas index algorithm constants and per-type presets.
pub mod algorithm;

/// Accepted ranges for tuning parameters.
pub mod tuning;

// Re-export commonly used constants for convenience
pub use time::{SECONDS_PER_MINUTE, SECONDS_PER_HOUR, DEFAULT_SAMPLING_INTERVAL_S};

pub use algorithm::{
    INITIAL_BLACKOUT_S, INDEX_MAX, INDEX_UNINITIALIZED,
    VOC_INDEX_OFFSET_DEFAULT, NOX_INDEX_OFFSET_DEFAULT,
};
