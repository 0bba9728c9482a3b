//! One-pole low-pass and high-pass effects.
//!
//! Both run the same [`OnePole`] core. The high-pass output is the input
//! minus the low-pass output of the same sample, so `LP + HP == input`.

use crate::block::AudioBlock;
use crate::constants::AUDIO_SAMPLE_RATE;
use crate::dsp::helpers::SaturationCounter;
use crate::dsp::one_pole::OnePole;
use crate::effect::{icons, AudioEffect, EffectIdentity, EffectParam, Rgb};
use crate::error::ParamError;

pub static LOW_PASS_IDENTITY: EffectIdentity = EffectIdentity {
    name: "IIR Low-pass",
    icon: &icons::IIR_LOW_PASS,
    theme: Rgb::YELLOW,
};

pub static HIGH_PASS_IDENTITY: EffectIdentity = EffectIdentity {
    name: "IIR High-pass",
    icon: &icons::IIR_HIGH_PASS,
    theme: Rgb::PURPLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
}

#[derive(Debug)]
pub struct IirFilter {
    mode: FilterMode,
    params: [EffectParam; 1],
    core: OnePole,
    saturation: SaturationCounter,
}

impl IirFilter {
    pub fn low_pass() -> Result<Self, ParamError> {
        let cutoff = EffectParam::logarithmic("Cutoff", 500.0, 10_000.0, 40, 1000.0)?;
        Ok(Self::with_param(FilterMode::LowPass, cutoff))
    }

    pub fn high_pass() -> Result<Self, ParamError> {
        let cutoff = EffectParam::logarithmic("Cutoff", 100.0, 5000.0, 60, 1000.0)?;
        Ok(Self::with_param(FilterMode::HighPass, cutoff))
    }

    fn with_param(mode: FilterMode, cutoff: EffectParam) -> Self {
        let core = OnePole::new(cutoff.value(), AUDIO_SAMPLE_RATE);
        IirFilter {
            mode,
            params: [cutoff],
            core,
            saturation: SaturationCounter::new(),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Cutoff the coefficients currently implement.
    pub fn designed_cutoff(&self) -> f32 {
        self.core.cutoff()
    }

    fn clear(&mut self) {
        self.core.reset();
        self.saturation.reset();
    }
}

impl AudioEffect for IirFilter {
    fn identity(&self) -> &'static EffectIdentity {
        match self.mode {
            FilterMode::LowPass => &LOW_PASS_IDENTITY,
            FilterMode::HighPass => &HIGH_PASS_IDENTITY,
        }
    }

    fn connect(&mut self) {
        self.clear();
    }

    fn disconnect(&mut self) {
        self.clear();
    }

    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        // redesign only when the knob moved
        self.core.set_cutoff(self.params[0].value());

        match self.mode {
            FilterMode::LowPass => {
                for (y, &x) in output.iter_mut().zip(input.iter()) {
                    *y = self.core.tick(x);
                }
            }
            FilterMode::HighPass => {
                for (y, &x) in output.iter_mut().zip(input.iter()) {
                    let low = self.core.tick(x);
                    *y = self.saturation.saturate(x as i32 - low as i32);
                }
            }
        }
    }

    fn clone_prototype(&self) -> Self {
        Self::with_param(self.mode, self.params[0].fresh())
    }

    fn params(&self) -> &[EffectParam] {
        &self.params
    }

    fn saturation_count(&self) -> u32 {
        self.saturation.count()
    }
}
