//! Oversampled diode-clipping overdrive.
//!
//! The clipper is run at 8x the audio rate so the harmonics it creates are
//! mostly removed by the decimator instead of folding back as aliases.
//!
//! ```text
//! x ─► CIC ↑8 ─► drive ─► diode clip ─► CIC ↓8 ─► saturate ─► y
//! ```

use crate::block::AudioBlock;
use crate::dsp::cic::{CicDecimator, CicInterpolator};
use crate::dsp::helpers::SaturationCounter;
use crate::effect::{icons, AudioEffect, EffectIdentity, EffectParam, Rgb};
use crate::error::ParamError;

pub static IDENTITY: EffectIdentity = EffectIdentity {
    name: "Overdrive",
    icon: &icons::OVERDRIVE,
    theme: Rgb::RED,
};

/// CIC stages on each side of the clipper.
pub const CIC_ORDER: usize = 3;

/// `log2` of the oversampling factor.
pub const OVERSAMPLE_LOG2: u32 = 3;

/// Drive of 1.0 in Q15.
const UNITY_DRIVE: i32 = 1 << 15;

/// End of the linear (2x) region: one third of full scale.
const KNEE_LOW: i32 = 10922;

/// Start of the hard-clipped region: two thirds of full scale.
const KNEE_HIGH: i32 = 21845;

/// Piecewise diode approximation, odd-symmetric.
///
/// | `|x|` | output |
/// |-------|--------|
/// | `< 1/3` | `2x` |
/// | `< 2/3` | `-3x² + 4x - 1/3` |
/// | otherwise | full scale |
#[inline(always)]
pub fn diode_clip(x: i32) -> i32 {
    let mag = x.saturating_abs();
    let shaped = if mag < KNEE_LOW {
        2 * mag
    } else if mag < KNEE_HIGH {
        (-10921 + 4 * mag - 3 * mag * mag / 32768).min(i16::MAX as i32)
    } else {
        i16::MAX as i32
    };
    if x < 0 {
        -shaped
    } else {
        shaped
    }
}

/// Apply a Q15 drive factor.
#[inline(always)]
fn apply_drive(x: i32, drive: i32) -> i32 {
    ((x as i64 * drive as i64) >> 15) as i32
}

fn drive_from_gain(gain: f32) -> i32 {
    (libm::roundf(gain * UNITY_DRIVE as f32) as i32).clamp(0, UNITY_DRIVE)
}

#[derive(Debug)]
pub struct Overdrive {
    params: [EffectParam; 1],
    up: CicInterpolator<CIC_ORDER, OVERSAMPLE_LOG2>,
    down: CicDecimator<CIC_ORDER, OVERSAMPLE_LOG2>,
    /// Gain the cached drive was computed from.
    gain: f32,
    drive: i32,
    /// Largest magnitude seen after the interpolator and after the decimator.
    stage_peaks: (i32, i32),
    saturation: SaturationCounter,
}

impl Overdrive {
    pub fn new() -> Result<Self, ParamError> {
        let gain = EffectParam::logarithmic("Gain", 0.01, 1.0, 100, 1.0)?;
        Ok(Self::with_param(gain))
    }

    fn with_param(gain: EffectParam) -> Self {
        let value = gain.value();
        Overdrive {
            params: [gain],
            up: CicInterpolator::new(),
            down: CicDecimator::new(),
            gain: value,
            drive: drive_from_gain(value),
            stage_peaks: (0, 0),
            saturation: SaturationCounter::new(),
        }
    }

    /// Current pre-clip drive in Q15.
    pub fn drive(&self) -> i32 {
        self.drive
    }

    /// Peak magnitudes since the last `connect`: `(oversampled, decimated)`.
    pub fn stage_peaks(&self) -> (i32, i32) {
        self.stage_peaks
    }

    fn clear(&mut self) {
        self.up.reset();
        self.down.reset();
        self.stage_peaks = (0, 0);
        self.saturation.reset();
    }
}

impl AudioEffect for Overdrive {
    fn identity(&self) -> &'static EffectIdentity {
        &IDENTITY
    }

    fn connect(&mut self) {
        self.clear();
    }

    fn disconnect(&mut self) {
        self.clear();
    }

    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        let gain = self.params[0].value();
        if gain != self.gain {
            self.gain = gain;
            self.drive = drive_from_gain(gain);
        }
        let drive = self.drive;
        let (mut fast_peak, mut slow_peak) = self.stage_peaks;

        for (y, &x) in output.iter_mut().zip(input.iter()) {
            let mut decimated = 0;
            let down = &mut self.down;
            self.up.interpolate(x, |fast| {
                fast_peak = fast_peak.max(fast.saturating_abs());
                let clipped = diode_clip(apply_drive(fast, drive));
                if let Some(v) = down.push(clipped) {
                    decimated = v;
                }
            });
            slow_peak = slow_peak.max(decimated.saturating_abs());
            *y = self.saturation.saturate(decimated);
        }
        self.stage_peaks = (fast_peak, slow_peak);
    }

    fn clone_prototype(&self) -> Self {
        Self::with_param(self.params[0].fresh())
    }

    fn params(&self) -> &[EffectParam] {
        &self.params
    }

    fn saturation_count(&self) -> u32 {
        self.saturation.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SILENT_BLOCK;
    use crate::constants::AUDIO_BLOCK_SAMPLES;

    fn settle(fx: &mut Overdrive, level: i16) -> AudioBlock {
        let input = [level; AUDIO_BLOCK_SAMPLES];
        let mut out = SILENT_BLOCK;
        for _ in 0..3 {
            fx.process(&input, &mut out);
        }
        out
    }

    #[test]
    fn clip_curve_shape() {
        assert_eq!(diode_clip(0), 0);
        assert_eq!(diode_clip(100), 200);
        assert_eq!(diode_clip(-100), -200);
        assert_eq!(diode_clip(30_000), 32767);
        assert_eq!(diode_clip(-30_000), -32767);
        // the quadratic meets the linear segment at the lower knee
        assert!((diode_clip(KNEE_LOW) - 2 * KNEE_LOW).abs() <= 3);
        // and the rail at the upper one, without crossing it
        assert!((diode_clip(KNEE_HIGH - 1) - 32767).abs() <= 4);
        for x in (KNEE_LOW..KNEE_HIGH).step_by(7) {
            assert!(diode_clip(x) <= i16::MAX as i32);
            assert!(diode_clip(x + 1) >= diode_clip(x));
        }
        assert_eq!(diode_clip(i32::MIN), -32767);
    }

    #[test]
    fn small_dc_gets_doubled() {
        let mut fx = Overdrive::new().unwrap();
        fx.connect();
        let out = settle(&mut fx, 100);
        assert!(out.iter().skip(16).all(|&s| s == 200));
    }

    #[test]
    fn large_dc_sits_on_the_rail() {
        let mut fx = Overdrive::new().unwrap();
        fx.connect();
        let out = settle(&mut fx, 30_000);
        assert_eq!(out[AUDIO_BLOCK_SAMPLES - 1], 32767);

        let mut fx = Overdrive::new().unwrap();
        fx.connect();
        let out = settle(&mut fx, -30_000);
        assert_eq!(out[AUDIO_BLOCK_SAMPLES - 1], -32767);
    }

    #[test]
    fn response_is_odd_symmetric() {
        let positive: AudioBlock = core::array::from_fn(|i| {
            (4000.0 * libm::sinf(2.0 * core::f32::consts::PI * i as f32 / 32.0)) as i16
        });
        let negative: AudioBlock = core::array::from_fn(|i| -positive[i]);

        let mut a = Overdrive::new().unwrap();
        let mut b = Overdrive::new().unwrap();
        a.connect();
        b.connect();
        let mut out_a = SILENT_BLOCK;
        let mut out_b = SILENT_BLOCK;
        a.process(&positive, &mut out_a);
        b.process(&negative, &mut out_b);
        for i in 0..AUDIO_BLOCK_SAMPLES {
            assert!((out_a[i] as i32 + out_b[i] as i32).abs() <= 4, "sample {i}");
        }
    }

    #[test]
    fn rescale_shifts_match_the_gain_bound() {
        // (2^r)^k = 512 at the decimator, divided by 2^r after zero-stuffing
        assert_eq!(CicDecimator::<CIC_ORDER, OVERSAMPLE_LOG2>::SHIFT, 9);
        assert_eq!(CicInterpolator::<CIC_ORDER, OVERSAMPLE_LOG2>::SHIFT, 6);
        assert_eq!(
            1u32 << CicDecimator::<CIC_ORDER, OVERSAMPLE_LOG2>::SHIFT,
            (1u32 << OVERSAMPLE_LOG2).pow(CIC_ORDER as u32)
        );
    }

    #[test]
    fn full_scale_sine_stays_in_range_at_every_stage() {
        let mut fx = Overdrive::new().unwrap();
        fx.connect();
        let mut out = SILENT_BLOCK;
        for n in 0..8 {
            let input: AudioBlock = core::array::from_fn(|i| {
                let step = (n * AUDIO_BLOCK_SAMPLES + i) % 48;
                let phase = 2.0 * core::f32::consts::PI * step as f32 / 48.0;
                (32767.0 * libm::sinf(phase)) as i16
            });
            fx.process(&input, &mut out);
        }
        let (fast, slow) = fx.stage_peaks();
        assert!(fast <= 32768, "oversampled peak {fast}");
        assert!(slow <= 32767, "decimated peak {slow}");
        assert!(slow > 32000);
        assert_eq!(fx.saturation_count(), 0);
    }

    #[test]
    fn gain_scales_the_drive() {
        let mut fx = Overdrive::new().unwrap();
        fx.connect();
        assert_eq!(fx.drive(), UNITY_DRIVE);

        fx.params()[0].set_position(0).unwrap();
        let out = settle(&mut fx, 10_000);
        assert_eq!(fx.drive(), 328);
        // 10000 * 0.01 = 100, doubled by the clipper
        assert_eq!(out[AUDIO_BLOCK_SAMPLES - 1], 200);
    }

    #[test]
    fn silence_after_connect() {
        let mut fx = Overdrive::new().unwrap();
        fx.connect();
        settle(&mut fx, 20_000);
        fx.disconnect();
        fx.connect();
        let out = settle(&mut fx, 0);
        assert_eq!(out, SILENT_BLOCK);

        let mut copy = fx.clone_prototype();
        copy.connect();
        let mut out = [5i16; AUDIO_BLOCK_SAMPLES];
        copy.process(&SILENT_BLOCK, &mut out);
        assert_eq!(out, SILENT_BLOCK);
    }
}
