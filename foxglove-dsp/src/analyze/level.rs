//! Input level meter.
//!
//! Peak detector with instant attack and exponential release, compared
//! against four thresholds to light a segment display. Each segment has a
//! hysteresis band so it does not flicker when the level sits on a
//! threshold.

use crate::block::AudioBlock;
use crate::dsp::intrinsics::mul_32x32_rshift32;

/// Number of display segments.
pub const LEVEL_SEGMENTS: usize = 4;

/// Segment thresholds as fractions of full scale, loudest first.
pub const LEVEL_THRESHOLDS: [f32; LEVEL_SEGMENTS] = [0.9, 0.45, 0.225, 0.1125];

/// Total width of each hysteresis band (half above, half below).
pub const LEVEL_HYSTERESIS: f32 = 0.025;

/// Release time constant in seconds.
pub const LEVEL_DECAY_SECS: f32 = 0.2;

fn q31_fraction(x: f32) -> i32 {
    (x as f64 * i32::MAX as f64) as i32
}

/// Peak meter state. Levels are Q1.31 fractions of full scale.
#[derive(Debug, Clone)]
pub struct LevelMeter {
    peak: i32,
    /// Per-sample release factor.
    decay: i32,
    high: [i32; LEVEL_SEGMENTS],
    low: [i32; LEVEL_SEGMENTS],
    lit: [bool; LEVEL_SEGMENTS],
}

impl LevelMeter {
    pub fn new(sample_rate: f32) -> Self {
        let tau_samples = LEVEL_DECAY_SECS as f64 * sample_rate as f64;
        let per_sample = libm::exp(-1.0 / tau_samples);
        let decay = (per_sample * (1u64 << 31) as f64).min(i32::MAX as f64) as i32;

        LevelMeter {
            peak: 0,
            decay,
            high: LEVEL_THRESHOLDS.map(|t| q31_fraction(t + LEVEL_HYSTERESIS / 2.0)),
            low: LEVEL_THRESHOLDS.map(|t| q31_fraction(t - LEVEL_HYSTERESIS / 2.0)),
            lit: [false; LEVEL_SEGMENTS],
        }
    }

    /// Track one block and refresh the segment states.
    pub fn update(&mut self, block: &AudioBlock) {
        let mut peak = self.peak;
        for &sample in block.iter() {
            let magnitude = ((sample.unsigned_abs() as u32) << 16).min(i32::MAX as u32) as i32;
            if magnitude > peak {
                peak = magnitude;
            }
            peak = mul_32x32_rshift32(peak, self.decay) << 1;
        }
        self.peak = peak;

        for i in 0..LEVEL_SEGMENTS {
            if peak > self.high[i] {
                self.lit[i] = true;
            } else if peak < self.low[i] {
                self.lit[i] = false;
            }
        }
    }

    /// Which segments are lit, loudest first.
    pub fn segments(&self) -> [bool; LEVEL_SEGMENTS] {
        self.lit
    }

    /// Current peak as a fraction of full scale.
    pub fn level(&self) -> f32 {
        self.peak as f32 / i32::MAX as f32
    }

    pub fn decay_factor(&self) -> i32 {
        self.decay
    }

    pub fn reset(&mut self) {
        self.peak = 0;
        self.lit = [false; LEVEL_SEGMENTS];
    }
}
