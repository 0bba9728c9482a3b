//! Cascaded integrator-comb rate converters.
//!
//! Used around nonlinear stages to run them at `2^RATE_LOG2` times the audio
//! rate. All registers use wrapping two's-complement arithmetic: the
//! integrators are allowed to overflow freely, and the combs undo it as long
//! as the true output fits in 32 bits, which the width check below enforces.
//!
//! ```text
//! interpolator:  x ─►[comb]×K ─►↑R (zero-stuff) ─►[integrator]×K ─► >> (K-1)·r
//! decimator:     x ─►[integrator]×K ─►↓R (keep last) ─►[comb]×K ─► >> K·r
//! ```
//!
//! With differential delay 1 the DC gain of a `K`-stage filter at rate
//! change `R = 2^r` is `R^K`. Zero-stuffing divides the interpolator's
//! gain by `R`. The rescale shifts are derived from those two facts so a
//! change of order or rate cannot leave a stale constant behind.

/// `log2` of the worst-case (DC) gain of a `K`-stage CIC at rate `2^r`.
pub const fn cic_gain_log2(order: usize, rate_log2: u32) -> u32 {
    order as u32 * rate_log2
}

/// Headroom needed for a 16-bit signal through the given CIC.
const fn fits_in_register(order: usize, rate_log2: u32) -> bool {
    16 + cic_gain_log2(order, rate_log2) <= 31
}

/// Comb-first, zero-stuffing, integrator-last interpolator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CicInterpolator<const ORDER: usize, const RATE_LOG2: u32> {
    /// Previous input of each comb.
    comb_delay: [i32; ORDER],
    integrators: [i32; ORDER],
}

impl<const ORDER: usize, const RATE_LOG2: u32> CicInterpolator<ORDER, RATE_LOG2> {
    /// Output samples per input sample.
    pub const RATE: usize = 1 << RATE_LOG2;

    /// Right shift that restores unity DC gain: `log2(R^K / R)`.
    pub const SHIFT: u32 = cic_gain_log2(ORDER, RATE_LOG2) - RATE_LOG2;

    const VALID: () = {
        assert!(ORDER > 0, "CIC needs at least one stage");
        assert!(fits_in_register(ORDER, RATE_LOG2), "CIC gain overflows 32-bit registers");
    };

    pub const fn new() -> Self {
        let () = Self::VALID;
        CicInterpolator {
            comb_delay: [0; ORDER],
            integrators: [0; ORDER],
        }
    }

    pub fn reset(&mut self) {
        self.comb_delay = [0; ORDER];
        self.integrators = [0; ORDER];
    }

    /// Expand one input sample into `RATE` output samples, passed to `emit`
    /// in time order. Outputs stay within the 16-bit input range.
    #[inline]
    pub fn interpolate(&mut self, x: i16, mut emit: impl FnMut(i32)) {
        let mut v = x as i32;
        for prev in self.comb_delay.iter_mut() {
            let diff = v.wrapping_sub(*prev);
            *prev = v;
            v = diff;
        }

        for phase in 0..Self::RATE {
            let mut acc = if phase == 0 { v } else { 0 };
            for integrator in self.integrators.iter_mut() {
                *integrator = integrator.wrapping_add(acc);
                acc = *integrator;
            }
            emit(acc >> Self::SHIFT);
        }
    }
}

impl<const ORDER: usize, const RATE_LOG2: u32> Default for CicInterpolator<ORDER, RATE_LOG2> {
    fn default() -> Self {
        Self::new()
    }
}

/// Integrator-first, keep-last-of-`R`, comb-last decimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CicDecimator<const ORDER: usize, const RATE_LOG2: u32> {
    integrators: [i32; ORDER],
    comb_delay: [i32; ORDER],
    /// Position within the current group of `RATE` input samples.
    phase: usize,
}

impl<const ORDER: usize, const RATE_LOG2: u32> CicDecimator<ORDER, RATE_LOG2> {
    /// Input samples per output sample.
    pub const RATE: usize = 1 << RATE_LOG2;

    /// Right shift that restores unity DC gain: `log2(R^K)`.
    pub const SHIFT: u32 = cic_gain_log2(ORDER, RATE_LOG2);

    const VALID: () = {
        assert!(ORDER > 0, "CIC needs at least one stage");
        assert!(fits_in_register(ORDER, RATE_LOG2), "CIC gain overflows 32-bit registers");
    };

    pub const fn new() -> Self {
        let () = Self::VALID;
        CicDecimator {
            integrators: [0; ORDER],
            comb_delay: [0; ORDER],
            phase: 0,
        }
    }

    pub fn reset(&mut self) {
        self.integrators = [0; ORDER];
        self.comb_delay = [0; ORDER];
        self.phase = 0;
    }

    /// Feed one oversampled sample. Every `RATE`-th call returns the
    /// rescaled base-rate output.
    #[inline]
    pub fn push(&mut self, x: i32) -> Option<i32> {
        let mut acc = x;
        for integrator in self.integrators.iter_mut() {
            *integrator = integrator.wrapping_add(acc);
            acc = *integrator;
        }

        self.phase += 1;
        if self.phase < Self::RATE {
            return None;
        }
        self.phase = 0;

        let mut v = acc;
        for prev in self.comb_delay.iter_mut() {
            let diff = v.wrapping_sub(*prev);
            *prev = v;
            v = diff;
        }
        Some(v >> Self::SHIFT)
    }
}

impl<const ORDER: usize, const RATE_LOG2: u32> Default for CicDecimator<ORDER, RATE_LOG2> {
    fn default() -> Self {
        Self::new()
    }
}
