//! DMA-driven MQS output.
//!
//! The medium-quality-sound block turns a stream of 32-bit words into a PWM
//! carrier. [`AudioOutputMqs`] keeps a double-buffered region of those words:
//! the engine drains one half while software fills the other.
//!
//! ## Architecture
//!
//! ```text
//! audio cycle                     DMA region (align 32)               SAI3 ► MQS
//! ┌───────────┐  put_block   ┌──────────────┬──────────────┐
//! │ AudioBlock├────────────► │ front 128×u32│ back 128×u32 │ ───DMA───► TDR
//! └───────────┘  (flush)     └──────────────┴──────────────┘
//!                                  ▲ half-complete / complete IRQ
//!                                  └── isr(): toggle write half, raise cycle
//! ```
//!
//! The half software writes is tracked by a flag the interrupt toggles. The
//! engine's read pointer is never sampled to decide it: by the time the copy
//! finishes the pointer may have crossed the midpoint.
//!
//! That flag, the underrun counter and the completion callback live in an
//! [`MqsCompletion`], a `static` the interrupt reaches through `&self`. The
//! adapter itself belongs to the audio cycle and only borrows it.
//!
//! ```ignore
//! static CYCLE: Continuation = Continuation::new();
//! static MQS_DONE: MqsCompletion = MqsCompletion::new();
//!
//! let mqs = AudioOutputMqs::new(&MQS_DONE, channel, cache);
//!
//! // DMA completion IRQ
//! MQS_DONE.isr(DmaEvent::HalfComplete, &CYCLE);
//! ```
//!
//! ## Underruns
//!
//! If no block arrives between two completion events the engine replays the
//! stale half. That is counted ([`underrun_count`](AudioOutputMqs::underrun_count))
//! and otherwise tolerated.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::block::{AudioBlock, BlockSink};
use crate::config::AudioConfig;
use crate::constants::AUDIO_BLOCK_SAMPLES;
use crate::control::{AdapterState, AudioPeripheral};
use crate::error::HardwareError;

use super::continuation::Continuation;
use super::dma::{CacheMaintenance, DmaChannel, DmaHalf, DmaRegion};

/// Which completion interrupt fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmaEvent {
    /// Engine finished the front half and moved on to the back.
    HalfComplete,
    /// Engine finished the back half and wrapped to the front.
    Complete,
}

impl DmaEvent {
    /// Half that just became free for software.
    pub const fn freed_half(self) -> DmaHalf {
        match self {
            DmaEvent::HalfComplete => DmaHalf::Front,
            DmaEvent::Complete => DmaHalf::Back,
        }
    }
}

/// Convert one sample to the word the MQS transmitter expects.
///
/// The sample is sign-extended; the transmitter takes the top 16 bits.
#[inline(always)]
pub fn sample_to_word(sample: i16) -> u32 {
    sample as i32 as u32
}

/// Completion-interrupt side of the output.
///
/// Every field is atomic or fixed before the interrupt is enabled, so the
/// interrupt and the audio cycle share it without a lock.
#[derive(Debug)]
pub struct MqsCompletion {
    /// Half `put_block` writes next. The engine drains the other one.
    write_half: AtomicU8,
    /// A block landed in `write_half` since the last completion event.
    filled: AtomicBool,
    /// At least one completion event has been seen.
    primed: AtomicBool,
    underruns: AtomicU32,
    callback: Option<fn(DmaHalf)>,
}

impl MqsCompletion {
    pub const fn new() -> Self {
        MqsCompletion {
            // the engine starts on the front half
            write_half: AtomicU8::new(DmaHalf::Back.to_bits()),
            filled: AtomicBool::new(false),
            primed: AtomicBool::new(false),
            underruns: AtomicU32::new(0),
            callback: None,
        }
    }

    /// [`new`](Self::new) with a completion callback, for `static` use.
    pub const fn with_callback(mut self, callback: fn(DmaHalf)) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Register a function called from the completion interrupt with the half
    /// that just became free. Replaces any earlier registration.
    ///
    /// The callback runs at interrupt priority and must not block.
    pub fn set_completion_callback(&mut self, callback: fn(DmaHalf)) {
        self.callback = Some(callback);
    }

    /// Half the next `put_block` will write.
    pub fn write_half(&self) -> DmaHalf {
        DmaHalf::from_bits(self.write_half.load(Ordering::Acquire))
    }

    /// Half the engine is draining, as far as software knows.
    pub fn hardware_half(&self) -> DmaHalf {
        self.write_half().other()
    }

    /// Completion events that found no fresh block waiting.
    pub fn underrun_count(&self) -> u32 {
        self.underruns.load(Ordering::Relaxed)
    }

    /// Completion interrupt body.
    ///
    /// Accounts for an underrun if the half the engine just moved into was
    /// never refilled, retargets `put_block` at the freed half, raises the
    /// audio cycle and then runs the registered callback.
    pub fn isr<const Q: usize>(&self, event: DmaEvent, continuation: &Continuation<Q>) {
        let filled = self.filled.swap(false, Ordering::AcqRel);
        let primed = self.primed.swap(true, Ordering::AcqRel);
        if primed && !filled {
            self.underruns.fetch_add(1, Ordering::Relaxed);
        }

        let freed = event.freed_half();
        self.write_half.store(freed.to_bits(), Ordering::Release);
        continuation.raise(freed);

        if let Some(callback) = self.callback {
            callback(freed);
        }
    }

    fn mark_filled(&self) {
        self.filled.store(true, Ordering::Release);
    }
}

impl Default for MqsCompletion {
    fn default() -> Self {
        Self::new()
    }
}

/// Output adapter over a double-buffered MQS DMA region.
pub struct AudioOutputMqs<'a, D: DmaChannel, C: CacheMaintenance> {
    region: DmaRegion<u32, AUDIO_BLOCK_SAMPLES>,
    channel: D,
    cache: C,
    state: AdapterState,
    completion: &'a MqsCompletion,
}

impl<'a, D: DmaChannel, C: CacheMaintenance> AudioOutputMqs<'a, D, C> {
    pub const fn new(completion: &'a MqsCompletion, channel: D, cache: C) -> Self {
        AudioOutputMqs {
            region: DmaRegion::new(0),
            channel,
            cache,
            state: AdapterState::Idle,
            completion,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    /// Interrupt-side state this adapter writes against.
    pub fn completion(&self) -> &'a MqsCompletion {
        self.completion
    }

    pub fn hardware_half(&self) -> DmaHalf {
        self.completion.hardware_half()
    }

    pub fn write_half(&self) -> DmaHalf {
        self.completion.write_half()
    }

    pub fn underrun_count(&self) -> u32 {
        self.completion.underrun_count()
    }

    /// Copy `block` into the software-owned half and hand it to the engine.
    ///
    /// Bounded time: `N` word writes and one flush when the claim drops.
    pub fn put_block(&mut self, block: &AudioBlock) {
        let half = self.completion.write_half();
        let mut words = self.region.claim_for_write(half, &mut self.cache);
        for (word, &sample) in words.iter_mut().zip(block.iter()) {
            *word = sample_to_word(sample);
        }
        drop(words);
        self.completion.mark_filled();
    }

    #[cfg(test)]
    pub(crate) fn region(&self) -> &DmaRegion<u32, AUDIO_BLOCK_SAMPLES> {
        &self.region
    }

    #[cfg(test)]
    pub(crate) fn channel_mut(&mut self) -> &mut D {
        &mut self.channel
    }
}

impl<D: DmaChannel, C: CacheMaintenance> BlockSink for AudioOutputMqs<'_, D, C> {
    fn put_block(&mut self, block: &AudioBlock) {
        AudioOutputMqs::put_block(self, block)
    }
}

impl<D: DmaChannel, C: CacheMaintenance> AudioPeripheral for AudioOutputMqs<'_, D, C> {
    type Error = HardwareError;

    fn init(&mut self, config: &AudioConfig) -> Result<(), Self::Error> {
        if let Err(error) = config.validate() {
            log::error!("MQS output: {}", error);
            return Err(error.into());
        }
        let base = self.region.base_address();
        let words = self.region.len();
        self.channel.configure(base, words, config)?;
        self.state = AdapterState::Initialized;
        log::info!(
            "MQS output: {} Hz, {}x oversample, PWM {} Hz, MQS clock {} Hz",
            config.sample_rate_hz,
            config.mqs_oversample,
            config.mqs_pwm_hz(),
            config.mqs_input_hz()
        );
        Ok(())
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        if self.state == AdapterState::Idle {
            return Err(HardwareError::NotInitialized);
        }
        self.channel.enable()?;
        self.state = AdapterState::Running;
        log::info!("MQS output: started");
        Ok(())
    }
}
