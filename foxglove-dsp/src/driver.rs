//! The audio cycle: input block → level meter → effect chain → output block.
//!
//! ```text
//! DMA IRQ ──raise──► Continuation ──service──► AudioCycleDriver::run_cycle
//!                                               ├─ input.get_block()
//!                                               ├─ meter.update()
//!                                               ├─ chain.process()
//!                                               └─ output.put_block()
//! ```
//!
//! One cycle runs per completion event, to completion, in event order. A
//! cycle that has not finished when the next event arrives is an overrun,
//! counted by the [`Continuation`].

use crate::analyze::LevelMeter;
use crate::block::{AudioBlock, BlockSink, BlockSource, SILENT_BLOCK};
use crate::chain::EffectChain;
use crate::io::Continuation;

/// Owns the adapters and the working blocks for one audio path.
pub struct AudioCycleDriver<I: BlockSource, O: BlockSink> {
    input: I,
    output: O,
    input_block: AudioBlock,
    output_block: AudioBlock,
    scratch: AudioBlock,
    meter: LevelMeter,
    cycles: u32,
}

impl<I: BlockSource, O: BlockSink> AudioCycleDriver<I, O> {
    pub fn new(input: I, output: O, sample_rate: f32) -> Self {
        AudioCycleDriver {
            input,
            output,
            input_block: SILENT_BLOCK,
            output_block: SILENT_BLOCK,
            scratch: SILENT_BLOCK,
            meter: LevelMeter::new(sample_rate),
            cycles: 0,
        }
    }

    /// One full cycle. Bounded time; never blocks.
    pub fn run_cycle<const M: usize>(&mut self, chain: &mut EffectChain<M>) {
        self.input.get_block(&mut self.input_block);
        self.meter.update(&self.input_block);
        chain.process(&self.input_block, &mut self.output_block, &mut self.scratch);
        self.output.put_block(&self.output_block);
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Audio task body: one cycle per pending completion event.
    ///
    /// The freed half is not passed on: the output tracks its own write
    /// half, retargeted by the same interrupt that raised the event.
    pub fn service<const M: usize, const Q: usize>(
        &mut self,
        continuation: &Continuation<Q>,
        chain: &mut EffectChain<M>,
    ) -> usize {
        continuation.service(|_half| self.run_cycle(chain))
    }

    /// Cycles completed since start-up.
    pub fn cycle_count(&self) -> u32 {
        self.cycles
    }

    pub fn meter(&self) -> &LevelMeter {
        &self.meter
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
