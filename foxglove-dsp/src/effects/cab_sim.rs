//! Speaker cabinet simulation by direct FIR convolution with a measured
//! impulse response.

use crate::block::AudioBlock;
use crate::dsp::fir::{FirConvolver, FirKernel};
use crate::effect::{icons, AudioEffect, EffectIdentity, Rgb};

use super::kernels::{CAB_KERNEL_LEN, FENDER_TWIN_REVERB};

pub static IDENTITY: EffectIdentity = EffectIdentity {
    name: "Cab Sim",
    icon: &icons::CAB_SIM,
    theme: Rgb::ORANGE,
};

pub struct CabSim {
    fir: FirConvolver<CAB_KERNEL_LEN>,
}

impl CabSim {
    /// Cab sim over the built-in Fender Twin Reverb response.
    pub fn new() -> Self {
        Self::with_kernel(&FENDER_TWIN_REVERB)
    }

    pub const fn with_kernel(kernel: &'static FirKernel<CAB_KERNEL_LEN>) -> Self {
        CabSim {
            fir: FirConvolver::new(kernel),
        }
    }
}

impl Default for CabSim {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEffect for CabSim {
    fn identity(&self) -> &'static EffectIdentity {
        &IDENTITY
    }

    fn connect(&mut self) {
        self.fir.reset();
    }

    fn disconnect(&mut self) {
        self.fir.reset();
    }

    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        for (y, &x) in output.iter_mut().zip(input.iter()) {
            *y = self.fir.tick(x);
        }
    }

    fn clone_prototype(&self) -> Self {
        Self::with_kernel(self.fir.kernel())
    }

    fn saturation_count(&self) -> u32 {
        self.fir.saturation_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SILENT_BLOCK;
    use crate::constants::AUDIO_BLOCK_SAMPLES;

    const fn alternating_response() -> [i16; CAB_KERNEL_LEN] {
        let mut h = [0i16; CAB_KERNEL_LEN];
        let mut i = 0;
        while i < CAB_KERNEL_LEN {
            h[i] = if i % 2 == 0 { i16::MAX } else { -i16::MAX };
            i += 1;
        }
        h
    }

    static ALTERNATING: FirKernel<CAB_KERNEL_LEN> = FirKernel::from_q15(alternating_response());

    /// Output for a 1-LSB impulse: tap times 1, through the Q1.31 and
    /// length rescale, floored to whole LSBs.
    fn unit_impulse_output(tap: i32) -> i16 {
        ((((tap >> 16) as i64) << (1 + FirKernel::<CAB_KERNEL_LEN>::LEN_LOG2)) >> 16) as i16
    }

    #[test]
    fn unit_impulse_reproduces_the_kernel() {
        let mut fx = CabSim::new();
        fx.connect();
        let mut impulse = SILENT_BLOCK;
        impulse[0] = 1;

        let taps = FENDER_TWIN_REVERB.taps();
        let mut out = SILENT_BLOCK;
        for block in 0..2 {
            fx.process(&impulse, &mut out);
            impulse = SILENT_BLOCK;
            for j in 0..AUDIO_BLOCK_SAMPLES {
                let tap = block * AUDIO_BLOCK_SAMPLES + j;
                assert_eq!(out[j], unit_impulse_output(taps[tap]), "tap {tap}");
            }
        }
    }

    #[test]
    fn scaled_impulse_reproduces_the_kernel() {
        let mut fx = CabSim::new();
        fx.connect();
        let mut impulse = SILENT_BLOCK;
        impulse[0] = 1 << 14;

        let taps = FENDER_TWIN_REVERB.taps();
        let mut out = SILENT_BLOCK;
        fx.process(&impulse, &mut out);
        for j in 0..AUDIO_BLOCK_SAMPLES {
            assert_eq!(out[j] as i32, taps[j] >> 9, "tap {j}");
        }
        fx.process(&SILENT_BLOCK, &mut out);
        for j in 0..AUDIO_BLOCK_SAMPLES {
            let tap = AUDIO_BLOCK_SAMPLES + j;
            assert_eq!(out[j] as i32, taps[tap] >> 9, "tap {tap}");
        }
        // kernel length is two blocks; the tail is silent after that
        fx.process(&SILENT_BLOCK, &mut out);
        assert_eq!(out, SILENT_BLOCK);
    }

    #[test]
    fn reconnect_forgets_history() {
        let mut fx = CabSim::new();
        fx.connect();
        let mut out = SILENT_BLOCK;
        fx.process(&[12_000; AUDIO_BLOCK_SAMPLES], &mut out);
        fx.disconnect();
        fx.connect();
        fx.process(&SILENT_BLOCK, &mut out);
        assert_eq!(out, SILENT_BLOCK);
        assert_eq!(fx.saturation_count(), 0);
    }

    #[test]
    fn connect_clears_saturation_count() {
        let mut fx = CabSim::with_kernel(&ALTERNATING);
        fx.connect();
        let loud: AudioBlock =
            core::array::from_fn(|i| if i % 2 == 0 { i16::MAX } else { -i16::MAX });
        let mut out = SILENT_BLOCK;
        fx.process(&loud, &mut out);
        assert!(fx.saturation_count() > 0);

        fx.connect();
        assert_eq!(fx.saturation_count(), 0);
    }

    #[test]
    fn clone_shares_the_kernel() {
        let fx = CabSim::new();
        let copy = fx.clone_prototype();
        assert!(core::ptr::eq(copy.fir.kernel(), &FENDER_TWIN_REVERB));
        assert_eq!(copy.identity().theme, Rgb::ORANGE);
    }
}
