//! Hardware-facing audio I/O.
//!
//! Both adapters sit on a double-buffered DMA region and never block: the
//! engine owns one half, software owns the other, and ownership flips on
//! each completion interrupt.
//!
//! ## Components
//!
//! | Type | Direction | Description |
//! |------|-----------|-------------|
//! | [`AudioInputAdc`] | in | Timer-triggered 12-bit ADC, `get_block()` |
//! | [`AudioOutputMqs`] | out | MQS PWM output, `put_block()` |
//! | [`MqsCompletion`] | IRQ | MQS completion ISR, write half, underruns |
//! | [`Continuation`] | IRQ → task | Pends the audio cycle at low priority |
//!
//! ## Utilities
//!
//! - [`dma`]: region halves, ownership claims, cache maintenance
//! - [`continuation`]: event queue, [`CycleGate`], overrun counter

pub mod dma;
pub mod continuation;
pub mod input_adc;
pub mod output_mqs;

#[cfg(test)]
pub(crate) mod sim;

pub use continuation::{Continuation, CycleGate};
pub use dma::{CacheMaintenance, DmaChannel, DmaHalf, DmaRegion, NoCache};
pub use input_adc::AudioInputAdc;
pub use output_mqs::{AudioOutputMqs, DmaEvent, MqsCompletion};
