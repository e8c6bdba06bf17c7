//! Adaptive Output Low-Pass
//!
//! Smooths the scaled index before it is rounded. A single fixed time
//! constant forces a choice between a calm display and a fast reaction to
//! real events. This filter adapts instead:
//!
//! ```text
//! fast  = EMA(x, 20 s)
//! slow  = EMA(x, 500 s)
//! tau   = 480 · exp(-0.2 · |fast - slow|) + 20
//! out   = EMA(x, tau)
//! ```
//!
//! While the index is steady `fast` and `slow` agree and the output uses the
//! 500 s constant, flattening noise. A real step pulls the two apart and the
//! output time constant collapses towards 20 s within a few samples.

use crate::constants::algorithm::{LP_ALPHA, LP_TAU_FAST, LP_TAU_SLOW};

/// Adaptive exponential smoother for the index output
#[derive(Debug, Clone)]
pub struct AdaptiveLowpass {
    alpha_fast: f32,
    alpha_slow: f32,
    sampling_interval: f32,
    fast: f32,
    slow: f32,
    output: f32,
    initialized: bool,
}

impl AdaptiveLowpass {
    /// Create a filter for samples `sampling_interval` seconds apart
    pub fn new(sampling_interval: f32) -> Self {
        let mut filter = Self {
            alpha_fast: 0.0,
            alpha_slow: 0.0,
            sampling_interval,
            fast: 0.0,
            slow: 0.0,
            output: 0.0,
            initialized: false,
        };
        filter.set_sampling_interval(sampling_interval);
        filter
    }

    /// Recompute the smoothing factors, keeping the filter state
    pub fn set_sampling_interval(&mut self, sampling_interval: f32) {
        self.sampling_interval = sampling_interval;
        self.alpha_fast = sampling_interval / (LP_TAU_FAST + sampling_interval);
        self.alpha_slow = sampling_interval / (LP_TAU_SLOW + sampling_interval);
    }

    /// Forget the filter state. The next sample primes all three stages.
    pub fn reset(&mut self) {
        self.fast = 0.0;
        self.slow = 0.0;
        self.output = 0.0;
        self.initialized = false;
    }

    /// Whether a sample has been seen since creation or reset
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Filter one sample
    pub fn process(&mut self, sample: f32) -> f32 {
        if !self.initialized {
            self.fast = sample;
            self.slow = sample;
            self.output = sample;
            self.initialized = true;
        }

        self.fast += self.alpha_fast * (sample - self.fast);
        self.slow += self.alpha_slow * (sample - self.slow);

        let disagreement = libm::fabsf(self.fast - self.slow);
        let tau = (LP_TAU_SLOW - LP_TAU_FAST) * libm::expf(LP_ALPHA * disagreement) + LP_TAU_FAST;
        let alpha = self.sampling_interval / (tau + self.sampling_interval);

        self.output += alpha * (sample - self.output);
        self.output
    }
}
