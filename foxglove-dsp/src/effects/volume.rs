//! Fixed-point volume: a Q1.31 gain applied with one 32x16 multiply per
//! sample.

use crate::block::AudioBlock;
use crate::dsp::helpers::{q31_from_unit, sample_operand, SaturationCounter};
use crate::dsp::intrinsics::mul_32x16b;
use crate::effect::{icons, AudioEffect, EffectIdentity, EffectParam, Rgb};
use crate::error::ParamError;

pub static IDENTITY: EffectIdentity = EffectIdentity {
    name: "Fixed Pt. Vol",
    icon: &icons::VOLUME,
    theme: Rgb::GREEN,
};

#[derive(Debug)]
pub struct FixedPointVolume {
    params: [EffectParam; 1],
    /// Volume the cached gain was computed from.
    volume: f32,
    gain_q31: i32,
    saturation: SaturationCounter,
}

impl FixedPointVolume {
    pub fn new() -> Result<Self, ParamError> {
        let volume = EffectParam::logarithmic("Volume", 0.01, 1.0, 100, 1.0)?;
        Ok(Self::with_param(volume))
    }

    fn with_param(volume: EffectParam) -> Self {
        let value = volume.value();
        FixedPointVolume {
            params: [volume],
            volume: value,
            gain_q31: q31_from_unit(value),
            saturation: SaturationCounter::new(),
        }
    }

    pub fn gain_q31(&self) -> i32 {
        self.gain_q31
    }
}

impl AudioEffect for FixedPointVolume {
    fn identity(&self) -> &'static EffectIdentity {
        &IDENTITY
    }

    fn connect(&mut self) {
        self.saturation.reset();
    }

    fn disconnect(&mut self) {
        self.saturation.reset();
    }

    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        let volume = self.params[0].value();
        if volume != self.volume {
            self.volume = volume;
            self.gain_q31 = q31_from_unit(volume);
        }

        for (y, &x) in output.iter_mut().zip(input.iter()) {
            // (Q1.31 * Q15) >> 16 leaves the product one bit short of Q15
            let scaled = mul_32x16b(self.gain_q31, sample_operand(x)) >> 15;
            *y = self.saturation.saturate(scaled);
        }
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
