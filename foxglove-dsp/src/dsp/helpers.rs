//! Fixed-point conversions and saturation bookkeeping.

use super::intrinsics::saturate16;

/// 1.0 in Q1.31 as an unsigned word (`2^31`, one past `i32::MAX`).
pub const Q31_ONE: u32 = 1 << 31;

/// Convert `x` in `[0.0, 1.0)` to Q1.31, clamping to the representable range.
#[inline]
pub fn q31_from_unit(x: f32) -> i32 {
    let scaled = x as f64 * Q31_ONE as f64;
    if scaled >= i32::MAX as f64 {
        i32::MAX
    } else if scaled <= 0.0 {
        0
    } else {
        scaled as i32
    }
}

/// Pass a sample to the DSP wrappers as a bottom-halfword operand.
#[inline(always)]
pub fn sample_operand(sample: i16) -> u32 {
    sample as u16 as u32
}

/// Counts samples that had to be clamped to the 16-bit output range.
///
/// Clamping is intended behaviour in the effects; the count only exists so
/// tests and diagnostics can see it happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturationCounter {
    count: u32,
}

impl SaturationCounter {
    pub const fn new() -> Self {
        SaturationCounter { count: 0 }
    }

    /// Narrow `val` to `i16`, counting it if it was out of range.
    #[inline(always)]
    pub fn saturate(&mut self, val: i32) -> i16 {
        let out = saturate16(val);
        if out as i32 != val {
            self.count = self.count.wrapping_add(1);
        }
        out
    }

    /// Narrow an `i64` intermediate to `i16`.
    #[inline(always)]
    pub fn saturate_wide(&mut self, val: i64) -> i16 {
        if val > i16::MAX as i64 {
            self.count = self.count.wrapping_add(1);
            i16::MAX
        } else if val < i16::MIN as i64 {
            self.count = self.count.wrapping_add(1);
            i16::MIN
        } else {
            val as i16
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q31_from_unit_endpoints() {
        assert_eq!(q31_from_unit(0.0), 0);
        assert_eq!(q31_from_unit(0.5), 1 << 30);
        assert_eq!(q31_from_unit(1.0), i32::MAX);
        assert_eq!(q31_from_unit(-0.25), 0);
    }

    #[test]
    fn sample_operand_keeps_bit_pattern() {
        assert_eq!(sample_operand(-1), 0xFFFF);
        assert_eq!(sample_operand(0x1234), 0x1234);
    }

    #[test]
    fn counter_only_counts_clamped_samples() {
        let mut sat = SaturationCounter::new();
        assert_eq!(sat.saturate(100), 100);
        assert_eq!(sat.saturate(-32768), -32768);
        assert_eq!(sat.count(), 0);

        assert_eq!(sat.saturate(40_000), 32767);
        assert_eq!(sat.saturate_wide(-1 << 40), -32768);
        assert_eq!(sat.count(), 2);

        sat.reset();
        assert_eq!(sat.count(), 0);
    }
}
