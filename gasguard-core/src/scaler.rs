//! Sigmoid index scaler
//!
//! Maps a standardized deviation (how far the raw signal sits from the
//! learned baseline, in units of the learned spread) onto the 0-500 index.
//!
//! ```text
//! index
//!  500 ┤                          ╭──────────
//!      │                       ╭──╯
//!      │                    ╭──╯
//!  off ┼──────────────────●╯                 ● deviation 0 maps to the offset
//!      │            ╭────╯
//!    0 ┼────────────╯
//!      └──────────────────┼──────────────────► deviation
//!                         0
//! ```
//!
//! The curve is monotone, continuous and saturating. Both halves are built
//! from the same logistic `L / (1 + e^x)`, normalised by its value at zero
//! deviation:
//!
//! ```text
//! above: (L + s) / (1 + e^x) - s      s chosen so deviation 0 → offset
//! below: offset · (1 + e^-k·x0) / (1 + e^x)
//! ```
//!
//! Both halves evaluate to exactly `offset` at zero for any offset in
//! `1..=250`. Exponent arguments are clamped so extreme inputs saturate
//! instead of overflowing.

use crate::algorithm::AlgorithmType;
use crate::constants::algorithm::{
    SIGMOID_EXP_LIMIT, SIGMOID_K_NOX, SIGMOID_K_VOC, SIGMOID_L, SIGMOID_X0_NOX, SIGMOID_X0_VOC,
};

/// Stateless scaling curve for one algorithm type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidScaler {
    k: f32,
    x0: f32,
}

impl SigmoidScaler {
    /// Curve tuned for the given algorithm type
    pub const fn for_algorithm(algorithm_type: AlgorithmType) -> Self {
        match algorithm_type {
            AlgorithmType::Voc => Self {
                k: SIGMOID_K_VOC,
                x0: SIGMOID_X0_VOC,
            },
            AlgorithmType::Nox => Self {
                k: SIGMOID_K_NOX,
                x0: SIGMOID_X0_NOX,
            },
        }
    }

    /// Scale a standardized deviation to an index in `[0, 500]`.
    ///
    /// `gain_factor` stretches the deviation before it enters the curve;
    /// `index_offset` is the index reported for a deviation of zero.
    pub fn apply(&self, standardized: f32, index_offset: f32, gain_factor: f32) -> f32 {
        let sample = gain_factor * standardized;
        let x = self.k * (sample - self.x0);

        let index = if x < -SIGMOID_EXP_LIMIT {
            SIGMOID_L
        } else if x > SIGMOID_EXP_LIMIT {
            0.0
        } else if sample >= 0.0 {
            let shift = self.shift(index_offset);
            (SIGMOID_L + shift) / (1.0 + libm::expf(x)) - shift
        } else {
            index_offset * self.denominator_at_zero() / (1.0 + libm::expf(x))
        };

        // NaN falls through both comparisons and lands on 0
        if index > SIGMOID_L {
            SIGMOID_L
        } else if index >= 0.0 {
            index
        } else {
            0.0
        }
    }

    /// `1 + e^x` evaluated at zero deviation
    fn denominator_at_zero(&self) -> f32 {
        1.0 + libm::expf(-self.k * self.x0)
    }

    /// Vertical shift that moves the upper half's value at zero onto the offset
    fn shift(&self, index_offset: f32) -> f32 {
        let at_zero = self.denominator_at_zero();
        (SIGMOID_L - index_offset * at_zero) / (at_zero - 1.0)
    }
}
