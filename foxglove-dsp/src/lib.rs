//! # foxglove-dsp
//!
//! The real-time core of a Teensy 4.x (i.MX RT1062, Cortex-M7) guitar pedal,
//! `no_std` and allocation-free. A 12-bit ADC feeds a chain of fixed-point
//! effects that drains into the MQS PWM output, one 128-sample block per
//! DMA half.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Memory | [`block`] | The `[i16; 128]` block and the source/sink seams |
//! | I/O | [`io`] | ADC input, MQS output, DMA halves, IRQ → task hand-off |
//! | Trait | [`effect`] / [`control`] | `AudioEffect` and `AudioPeripheral` |
//! | DSP | [`dsp`] / [`effects`] | Q1.31 math, filters, overdrive, cab sim |
//! | Chain | [`catalog`] / [`chain`] | Prototype table, slot replacement |
//! | Cycle | [`driver`] / [`analyze`] | One block per event, input level meter |
//!
//! ## Quick start
//!
//! ```ignore
//! use foxglove_dsp::chain::ChainManager;
//! use foxglove_dsp::catalog::Catalog;
//! use foxglove_dsp::driver::AudioCycleDriver;
//! use foxglove_dsp::io::{AudioInputAdc, AudioOutputMqs, Continuation, DmaEvent, MqsCompletion};
//!
//! static CYCLE: Continuation = Continuation::new();
//! static MQS_DONE: MqsCompletion = MqsCompletion::new();
//!
//! let adc = AudioInputAdc::new(adc_channel, adc_cache);
//! let mqs = AudioOutputMqs::new(&MQS_DONE, mqs_channel, mqs_cache);
//! let mut manager: ChainManager = ChainManager::new(Catalog::standard()?);
//! let mut driver = AudioCycleDriver::new(adc, mqs, config.sample_rate_hz as f32);
//!
//! // DMA completion IRQ:
//! MQS_DONE.isr(DmaEvent::HalfComplete, &CYCLE);
//!
//! // Low-priority audio task:
//! driver.service(&CYCLE, manager.chain_mut());
//!
//! // UI: swap slot 2 to the overdrive
//! manager.replace(&CYCLE, 2, 4)?;
//! ```
//!
//! ## Audio parameters
//!
//! - **Block size:** 128 samples ([`constants::AUDIO_BLOCK_SAMPLES`])
//! - **Sample rate:** 48 kHz ([`constants::AUDIO_SAMPLE_RATE`])
//! - **Sample format:** `i16` (signed 16-bit)
//! - **Chain:** 4 slots ([`constants::NUM_EFFECT_SLOTS`])

#![no_std]

pub mod constants;
pub mod config;
pub mod error;
pub mod block;
pub mod control;
pub mod io;
pub mod dsp;
pub mod effect;
pub mod effects;
pub mod catalog;
pub mod chain;
pub mod analyze;
pub mod driver;

pub use config::AudioConfig;
pub use error::{ChainError, ConfigError, HardwareError, ParamError};
