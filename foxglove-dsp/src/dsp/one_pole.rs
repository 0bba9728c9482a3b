//! One-pole Q1.31 low-pass section.
//!
//! ```text
//! y[n] = ff * x[n] + fb * y[n-1]        ff + fb == 2^31 (exactly 1.0)
//! ```
//!
//! The state is kept as a Q1.31 word (the sample in the top 16 bits), so
//! the recursion carries 16 extra fractional bits and low cutoffs do not
//! stall on truncation. Because the two coefficients sum to exactly one,
//! the DC gain is unity and the output can never leave the input's range.

use libm::powf;

use super::helpers::{sample_operand, Q31_ONE};
use super::intrinsics::{mul_32x16b, multiply_accumulate_32x32_rshift32_rounded};

/// `e^-1`: the decay reached after one time constant.
const INV_E: f32 = 0.367_879_44;

/// Compute `(feedback, feedforward)` in Q1.31 for a cutoff.
///
/// `feedback = e^(-1 / tau)` with `tau = fs / (2π·fc)` samples, and
/// `feedforward = 2^31 - feedback`. Both are kept strictly inside
/// `(0, 2^31)` so they stay representable as positive `i32`.
pub fn coefficients(cutoff_hz: f32, sample_rate: f32) -> (i32, i32) {
    let tau = sample_rate / (cutoff_hz * 2.0 * core::f32::consts::PI);
    let decay = powf(INV_E, 1.0 / tau);
    let feedback = ((Q31_ONE as f32) * decay) as u32;
    let feedback = feedback.clamp(1, Q31_ONE - 1);
    let feedforward = Q31_ONE - feedback;
    (feedback as i32, feedforward as i32)
}

/// Low-pass state and coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct OnePole {
    feedback: i32,
    feedforward: i32,
    /// Last output, Q1.31.
    state: i32,
    /// Cutoff the coefficients were designed for.
    cutoff_hz: f32,
    sample_rate: f32,
}

impl OnePole {
    pub fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        let (feedback, feedforward) = coefficients(cutoff_hz, sample_rate);
        OnePole {
            feedback,
            feedforward,
            state: 0,
            cutoff_hz,
            sample_rate,
        }
    }

    /// Redesign the coefficients if `cutoff_hz` differs from the last one.
    ///
    /// Returns `true` when the coefficients changed.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) -> bool {
        if cutoff_hz == self.cutoff_hz {
            return false;
        }
        let (feedback, feedforward) = coefficients(cutoff_hz, self.sample_rate);
        self.feedback = feedback;
        self.feedforward = feedforward;
        self.cutoff_hz = cutoff_hz;
        true
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn feedback(&self) -> i32 {
        self.feedback
    }

    pub fn feedforward(&self) -> i32 {
        self.feedforward
    }

    /// Return the filter to rest.
    pub fn reset(&mut self) {
        self.state = 0;
    }

    /// Filter one sample.
    #[inline(always)]
    pub fn tick(&mut self, x: i16) -> i16 {
        // ff·x lands at half of Q1.31 scale, as does the SMMLAR term
        let ff_term = mul_32x16b(self.feedforward, sample_operand(x));
        let half = multiply_accumulate_32x32_rshift32_rounded(ff_term, self.feedback, self.state);
        self.state = half.saturating_mul(2);
        (self.state >> 16) as i16
    }
}
