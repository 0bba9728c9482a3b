//! DMA-driven ADC input.
//!
//! A periodic timer triggers one 12-bit conversion per sample and the DMA
//! engine streams the results into a double-buffered region of raw `u16`
//! readings. [`AudioInputAdc::get_block`] copies out whichever half the
//! engine is *not* currently writing and converts it to signed 16-bit audio.
//!
//! ## Architecture
//!
//! ```text
//! PIT ──trigger──► ADC2 ──► ADC_ETC ──DMA──► ┌────────────┬────────────┐
//!                                            │ front 128  │ back 128   │ u16 raw
//!                                            └────────────┴────────────┘
//!                                                    │ get_block()
//!                                                    ▼
//!                                   invalidate ► copy ► (raw << 4) - 32768
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut input = AudioInputAdc::new(adc_dma, NoCache);
//! input.init(&AudioConfig::new())?;
//! input.start()?;
//!
//! // once per audio cycle:
//! let mut block = SILENT_BLOCK;
//! input.get_block(&mut block);
//! ```

use crate::block::{AudioBlock, BlockSource};
use crate::config::AudioConfig;
use crate::constants::{ADC_BITS, ADC_PROMOTE_SHIFT, AUDIO_BLOCK_SAMPLES};
use crate::control::{AdapterState, AudioPeripheral};
use crate::error::HardwareError;

use super::dma::{CacheMaintenance, DmaChannel, DmaHalf, DmaRegion};

const ADC_MASK: u16 = ((1u32 << ADC_BITS) - 1) as u16;

/// Nominal mid-scale of the promoted reading.
const DC_OFFSET: i32 = 32768;

/// Convert one raw ADC reading to a signed sample.
///
/// Bits above the converter resolution are ignored.
#[inline(always)]
pub fn adc_to_sample(raw: u16) -> i16 {
    let promoted = ((raw & ADC_MASK) as i32) << ADC_PROMOTE_SHIFT;
    (promoted - DC_OFFSET) as i16
}

/// Input adapter over a double-buffered ADC DMA region.
pub struct AudioInputAdc<D: DmaChannel, C: CacheMaintenance> {
    region: DmaRegion<u16, AUDIO_BLOCK_SAMPLES>,
    channel: D,
    cache: C,
    state: AdapterState,
}

impl<D: DmaChannel, C: CacheMaintenance> AudioInputAdc<D, C> {
    pub const fn new(channel: D, cache: C) -> Self {
        AudioInputAdc {
            // mid-scale reads back as silence
            region: DmaRegion::new(1 << (ADC_BITS - 1)),
            channel,
            cache,
            state: AdapterState::Idle,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    /// Half the engine is writing right now.
    pub fn engine_half(&self) -> DmaHalf {
        DmaHalf::containing(self.channel.position(), AUDIO_BLOCK_SAMPLES)
    }

    /// Copy the most recently completed half into `block`.
    ///
    /// Bounded time, no blocking: one invalidate and `N` conversions.
    pub fn get_block(&mut self, block: &mut AudioBlock) {
        let half = self.engine_half().other();
        let raw = self.region.claim_for_read(half, &mut self.cache);
        for (sample, &reading) in block.iter_mut().zip(raw.iter()) {
            *sample = adc_to_sample(reading);
        }
    }

    #[cfg(test)]
    pub(crate) fn channel_mut(&mut self) -> &mut D {
        &mut self.channel
    }

    #[cfg(test)]
    pub(crate) fn region_mut(&mut self) -> &mut DmaRegion<u16, AUDIO_BLOCK_SAMPLES> {
        &mut self.region
    }
}

impl<D: DmaChannel, C: CacheMaintenance> BlockSource for AudioInputAdc<D, C> {
    fn get_block(&mut self, block: &mut AudioBlock) {
        AudioInputAdc::get_block(self, block)
    }
}

impl<D: DmaChannel, C: CacheMaintenance> AudioPeripheral for AudioInputAdc<D, C> {
    type Error = HardwareError;

    fn init(&mut self, config: &AudioConfig) -> Result<(), Self::Error> {
        if let Err(error) = config.validate() {
            log::error!("ADC input: {}", error);
            return Err(error.into());
        }
        let base = self.region.base_address();
        let words = self.region.len();
        self.channel.configure(base, words, config)?;
        self.state = AdapterState::Initialized;
        log::info!(
            "ADC input: {} Hz, {}-bit, timer divider {}",
            config.sample_rate_hz,
            ADC_BITS,
            config.adc_sampling_divider()
        );
        Ok(())
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.state == AdapterState::Idle {
            return Err(HardwareError::NotInitialized);
        }
        self.channel.enable()?;
        self.state = AdapterState::Running;
        log::info!("ADC input: started");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SILENT_BLOCK;
    use crate::io::dma::{NoCache, RecordingCache};
    use crate::io::sim::SimChannel;

    #[test]
    fn conversion_centres_on_mid_scale() {
        assert_eq!(adc_to_sample(0), -32768);
        assert_eq!(adc_to_sample(2048), 0);
        assert_eq!(adc_to_sample(4095), 32752);
        // high garbage bits are ignored
        assert_eq!(adc_to_sample(0xF000 | 2048), 0);
    }

    #[test]
    fn fresh_region_reads_silence() {
        let mut input = AudioInputAdc::new(SimChannel::new(), NoCache);
        let mut block = [123i16; AUDIO_BLOCK_SAMPLES];
        input.get_block(&mut block);
        assert_eq!(block, SILENT_BLOCK);
    }

    #[test]
    fn reads_the_half_the_engine_is_not_writing() {
        let mut input = AudioInputAdc::new(SimChannel::new(), NoCache);
        input.region_mut().engine_half_mut(DmaHalf::Front).fill(2048 + 100);
        input.region_mut().engine_half_mut(DmaHalf::Back).fill(2048 - 100);

        // engine inside the front half: back half is complete
        input.channel_mut().set_position(10);
        let mut block = SILENT_BLOCK;
        input.get_block(&mut block);
        assert!(block.iter().all(|&s| s == -1600));

        // engine inside the back half: front half is complete
        input.channel_mut().set_position(AUDIO_BLOCK_SAMPLES + 3);
        input.get_block(&mut block);
        assert!(block.iter().all(|&s| s == 1600));
    }

    #[test]
    fn invalidates_before_reading() {
        let mut input = AudioInputAdc::new(SimChannel::new(), RecordingCache::default());
        let back = input.region_mut().half_address(DmaHalf::Back);
        let mut block = SILENT_BLOCK;
        input.get_block(&mut block);
        assert_eq!(input.cache.invalidate_count, 1);
        assert_eq!(input.cache.invalidated[0], (back, AUDIO_BLOCK_SAMPLES * 2));
        assert_eq!(input.cache.flush_count, 0);
    }

    #[test]
    fn start_requires_init() {
        let mut input = AudioInputAdc::new(SimChannel::new(), NoCache);
        assert_eq!(input.start(), Err(HardwareError::NotInitialized));

        input.init(&AudioConfig::new()).unwrap();
        assert_eq!(input.state(), AdapterState::Initialized);
        assert_eq!(input.channel_mut().configured_words(), 2 * AUDIO_BLOCK_SAMPLES);
        input.start().unwrap();
        assert_eq!(input.state(), AdapterState::Running);
        assert!(input.channel_mut().is_enabled());
    }

    #[test]
    fn calibration_failure_surfaces_from_init() {
        let mut channel = SimChannel::new();
        channel.fail_configure_with(HardwareError::CalibrationFailed);
        let mut input = AudioInputAdc::new(channel, NoCache);
        assert_eq!(
            input.init(&AudioConfig::new()),
            Err(HardwareError::CalibrationFailed)
        );
        assert_eq!(input.state(), AdapterState::Idle);
    }

    #[test]
    fn invalid_config_is_rejected_before_hardware() {
        let mut input = AudioInputAdc::new(SimChannel::new(), NoCache);
        let config = AudioConfig {
            mqs_oversample: 16,
            ..AudioConfig::new()
        };
        assert!(matches!(
            input.init(&config),
            Err(HardwareError::Config(_))
        ));
        assert_eq!(input.channel_mut().configured_words(), 0);
    }
}
