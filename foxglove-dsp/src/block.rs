//! The unit of work for every stage: one block of signed 16-bit samples.
//!
//! Blocks are plain arrays owned by the cycle driver and reused every cycle,
//! so nothing on the audio path allocates or reference-counts.

use crate::constants::AUDIO_BLOCK_SAMPLES;

/// One block of audio.
pub type AudioBlock = [i16; AUDIO_BLOCK_SAMPLES];

/// A block of silence.
pub const SILENT_BLOCK: AudioBlock = [0; AUDIO_BLOCK_SAMPLES];

/// Anything the audio cycle can pull a block from.
pub trait BlockSource {
    /// Fill `block` with the most recent complete input. Must not block.
    fn get_block(&mut self, block: &mut AudioBlock);
}

/// Anything the audio cycle can push a finished block to.
pub trait BlockSink {
    /// Hand `block` over for playback. Must not block.
    fn put_block(&mut self, block: &AudioBlock);
}

/// Duration of one block in seconds at `sample_rate` (the real-time deadline).
pub fn block_period_secs(sample_rate: f32) -> f32 {
    AUDIO_BLOCK_SAMPLES as f32 / sample_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AUDIO_SAMPLE_RATE;

    #[test]
    fn block_period_at_48k() {
        let period = block_period_secs(AUDIO_SAMPLE_RATE);
        assert!((period - 0.002_666_67).abs() < 1e-6);
    }
}
