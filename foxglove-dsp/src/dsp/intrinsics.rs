//! Cortex-M7 DSP instruction wrappers with pure-Rust fallbacks.
//!
//! On `thumbv7em` targets with the DSP extension each wrapper is a single
//! instruction. Host builds (tests) use bit-exact integer equivalents, so
//! numeric tests on the host describe what the pedal computes.
//!
//! | Wrapper | Instruction | Result |
//! |---------|-------------|--------|
//! | [`saturate16`] | `SSAT #16` | clamp to `i16` |
//! | [`mul_32x16b`] | `SMULWB` | `(a * b[15:0]) >> 16` |
//! | [`mul_32x32_rshift32`] | `SMMUL` | `(a * b) >> 32` |
//! | [`multiply_accumulate_32x32_rshift32_rounded`] | `SMMLAR` | `sum + round((a * b) >> 32)` |
//! | [`multiply_accumulate_32x16b`] | `SMLAWB` | `sum + (a * b[15:0]) >> 16` |

/// Saturate an `i32` to `i16` range (`-32768..=32767`).
#[inline(always)]
pub fn saturate16(val: i32) -> i16 {
    #[cfg(all(target_arch = "arm", target_feature = "dsp"))]
    {
        let out: i32;
        // SAFETY: SSAT only reads and writes the named registers.
        unsafe {
            core::arch::asm!(
                "ssat {out}, #16, {val}",
                out = out(reg) out,
                val = in(reg) val,
                options(pure, nomem, nostack),
            );
        }
        out as i16
    }
    #[cfg(not(all(target_arch = "arm", target_feature = "dsp")))]
    {
        val.clamp(i16::MIN as i32, i16::MAX as i32) as i16
    }
}

/// Multiply a Q1.31 word by a sample in the bottom halfword, keep bits 47..16.
///
/// Computes `(a * b[15:0]) >> 16`. Maps to ARM `SMULWB`.
#[inline(always)]
pub fn mul_32x16b(a: i32, b: u32) -> i32 {
    #[cfg(all(target_arch = "arm", target_feature = "dsp"))]
    {
        let out: i32;
        // SAFETY: register-only arithmetic.
        unsafe {
            core::arch::asm!(
                "smulwb {out}, {a}, {b}",
                out = out(reg) out,
                a = in(reg) a,
                b = in(reg) b,
                options(pure, nomem, nostack),
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "arm", target_feature = "dsp")))]
    {
        ((a as i64 * (b as i16 as i64)) >> 16) as i32
    }
}

/// Multiply two 32-bit values, return the upper 32 bits (truncated).
///
/// Maps to ARM `SMMUL`.
#[inline(always)]
pub fn mul_32x32_rshift32(a: i32, b: i32) -> i32 {
    #[cfg(all(target_arch = "arm", target_feature = "dsp"))]
    {
        let out: i32;
        // SAFETY: register-only arithmetic.
        unsafe {
            core::arch::asm!(
                "smmul {out}, {a}, {b}",
                out = out(reg) out,
                a = in(reg) a,
                b = in(reg) b,
                options(pure, nomem, nostack),
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "arm", target_feature = "dsp")))]
    {
        ((a as i64 * b as i64) >> 32) as i32
    }
}

/// `sum + ((a * b + 0x8000_0000) >> 32)`. Maps to ARM `SMMLAR`.
///
/// The addition wraps like the hardware instruction does; callers keep
/// `sum` and the product small enough that it never has to.
#[inline(always)]
pub fn multiply_accumulate_32x32_rshift32_rounded(sum: i32, a: i32, b: i32) -> i32 {
    #[cfg(all(target_arch = "arm", target_feature = "dsp"))]
    {
        let out: i32;
        // SAFETY: register-only arithmetic.
        unsafe {
            core::arch::asm!(
                "smmlar {out}, {a}, {b}, {sum}",
                out = out(reg) out,
                a = in(reg) a,
                b = in(reg) b,
                sum = in(reg) sum,
                options(pure, nomem, nostack),
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "arm", target_feature = "dsp")))]
    {
        let product = ((a as i64 * b as i64 + 0x8000_0000i64) >> 32) as i32;
        sum.wrapping_add(product)
    }
}

/// `sum + ((a * b[15:0]) >> 16)`. Maps to ARM `SMLAWB`.
#[inline(always)]
pub fn multiply_accumulate_32x16b(sum: i32, a: i32, b: u32) -> i32 {
    #[cfg(all(target_arch = "arm", target_feature = "dsp"))]
    {
        let out: i32;
        // SAFETY: register-only arithmetic.
        unsafe {
            core::arch::asm!(
                "smlawb {out}, {a}, {b}, {sum}",
                out = out(reg) out,
                a = in(reg) a,
                b = in(reg) b,
                sum = in(reg) sum,
                options(pure, nomem, nostack),
            );
        }
        out
    }
    #[cfg(not(all(target_arch = "arm", target_feature = "dsp")))]
    {
        sum.wrapping_add(((a as i64 * (b as i16 as i64)) >> 16) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate16_clamps_both_ends() {
        assert_eq!(saturate16(0), 0);
        assert_eq!(saturate16(32767), 32767);
        assert_eq!(saturate16(32768), 32767);
        assert_eq!(saturate16(-32768), -32768);
        assert_eq!(saturate16(-32769), -32768);
        assert_eq!(saturate16(i32::MAX), 32767);
        assert_eq!(saturate16(i32::MIN), -32768);
    }

    #[test]
    fn mul_32x16b_uses_bottom_halfword_only() {
        // 0.5 in Q1.31 times 1000
        assert_eq!(mul_32x16b(0x4000_0000, 1000), 1000 << 14);
        // top halfword ignored, bottom is -2
        assert_eq!(mul_32x16b(0x10000, 0xABCD_FFFE), -2);
    }

    #[test]
    fn mul_32x32_rshift32_truncates_toward_minus_infinity() {
        assert_eq!(mul_32x32_rshift32(0x4000_0000, 0x4000_0000), 0x1000_0000);
        assert_eq!(mul_32x32_rshift32(-1, 1), -1);
    }

    #[test]
    fn rounded_accumulate_rounds_half_up() {
        // 0x8000_0000 / 2^32 = 0.5 rounds up to 1
        assert_eq!(multiply_accumulate_32x32_rshift32_rounded(10, 0x4000_0000, 2), 11);
        assert_eq!(
            multiply_accumulate_32x32_rshift32_rounded(100, 0x4000_0000, 0x4000_0000),
            100 + 0x1000_0000
        );
    }

    #[test]
    fn accumulate_32x16b_sign_extends_sample() {
        assert_eq!(multiply_accumulate_32x16b(10, 0x10000, 3), 13);
        assert_eq!(
            multiply_accumulate_32x16b(10, 0x10000, (-3i16) as u16 as u32),
            7
        );
    }
}
