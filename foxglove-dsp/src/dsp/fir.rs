//! Direct-form FIR convolution over a circular sample history.
//!
//! ## Tap format
//!
//! Taps are Q1.31 values that have been divided by the kernel length
//! before storage, so `tap = h · 2^31 / LEN` for a response `h` in
//! `[-1, 1]`. With every `|h| <= 1` the sum of all `|tap|` is at most
//! `2^31`, and a full-scale input accumulates to at most `2^30` through
//! `SMLAWB`. After the loop the accumulator is shifted left once to undo
//! the Q1.31 scaling, left by `log2(LEN)` to undo the division, and right
//! by 16 back to sample scale, in 64-bit arithmetic. The result is then
//! saturated, never wrapped.

use super::helpers::{sample_operand, SaturationCounter};
use super::intrinsics::multiply_accumulate_32x16b;

/// Pre-scaled impulse response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirKernel<const LEN: usize> {
    taps: [i32; LEN],
}

impl<const LEN: usize> FirKernel<LEN> {
    /// `log2(LEN)`: the headroom taken out of the taps.
    pub const LEN_LOG2: u32 = LEN.trailing_zeros();

    const VALID: () = {
        assert!(LEN >= 2 && LEN.is_power_of_two(), "kernel length must be a power of two");
        assert!(LEN <= 1 << 16, "kernel too long for 16-bit headroom");
    };

    /// Wrap taps that are already Q1.31 divided by `LEN`.
    ///
    /// # Panics
    ///
    /// If the taps could overflow the accumulator on a full-scale input.
    /// Kernels are `static`, so this is a compile-time error in practice.
    pub const fn from_q31_scaled(taps: [i32; LEN]) -> Self {
        let () = Self::VALID;
        assert!(Self::fits_headroom(&taps), "kernel taps exceed accumulator headroom");
        FirKernel { taps }
    }

    /// Sum of `|tap|` within `2^31`, so a full-scale input keeps the
    /// accumulator within `2^30` plus one LSB of rounding per tap.
    pub const fn fits_headroom(taps: &[i32; LEN]) -> bool {
        let mut sum_abs: u64 = 0;
        let mut i = 0;
        while i < LEN {
            sum_abs += taps[i].unsigned_abs() as u64;
            i += 1;
        }
        sum_abs <= 1 << 31
    }

    /// Build from a Q15 response (`32767` ≈ 1.0 per tap).
    pub const fn from_q15(response: [i16; LEN]) -> Self {
        let () = Self::VALID;
        let mut taps = [0i32; LEN];
        let mut i = 0;
        while i < LEN {
            taps[i] = ((response[i] as i32) << 16) >> Self::LEN_LOG2;
            i += 1;
        }
        assert!(Self::fits_headroom(&taps), "kernel taps exceed accumulator headroom");
        FirKernel { taps }
    }

    pub fn taps(&self) -> &[i32; LEN] {
        &self.taps
    }
}

/// Convolution state for one kernel.
#[derive(Debug, Clone)]
pub struct FirConvolver<const LEN: usize> {
    kernel: &'static FirKernel<LEN>,
    history: [i16; LEN],
    /// Slot the next input sample is written to.
    head: usize,
    saturation: SaturationCounter,
}

impl<const LEN: usize> FirConvolver<LEN> {
    pub const fn new(kernel: &'static FirKernel<LEN>) -> Self {
        FirConvolver {
            kernel,
            history: [0; LEN],
            head: 0,
            saturation: SaturationCounter::new(),
        }
    }

    pub fn kernel(&self) -> &'static FirKernel<LEN> {
        self.kernel
    }

    /// Silence the history and clear the saturation count.
    pub fn reset(&mut self) {
        self.history = [0; LEN];
        self.head = 0;
        self.saturation.reset();
    }

    /// Samples clamped since the last reset.
    pub fn saturation_count(&self) -> u32 {
        self.saturation.count()
    }

    /// Convolve one sample.
    #[inline]
    pub fn tick(&mut self, x: i16) -> i16 {
        self.history[self.head] = x;

        // taps walk forward in time while the history walks backward
        let mut acc = 0i32;
        let mut idx = self.head;
        for &tap in self.kernel.taps.iter() {
            acc = multiply_accumulate_32x16b(acc, tap, sample_operand(self.history[idx]));
            idx = if idx == 0 { LEN - 1 } else { idx - 1 };
        }

        self.head = (self.head + 1) & (LEN - 1);

        let wide = ((acc as i64) << (1 + FirKernel::<LEN>::LEN_LOG2)) >> 16;
        self.saturation.saturate_wide(wide)
    }
}
