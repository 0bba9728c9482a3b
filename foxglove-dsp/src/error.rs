//! Error types for the configuration and control surfaces.
//!
//! Nothing on the real-time path returns these; they are produced at the
//! call boundary (UI requests, start-up) and handed back to the caller.

use thiserror::Error;

/// Rejected chain manipulation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// Slot index past the end of the chain.
    #[error("slot {index} out of range (chain has {slots} slots)")]
    SlotOutOfRange { index: usize, slots: usize },

    /// Prototype index past the end of the catalog.
    #[error("prototype {index} out of range (catalog has {available} entries)")]
    PrototypeOutOfRange { index: usize, available: usize },
}

/// Invalid effect parameter definition or position.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("parameter `{label}`: minimum {min} is not below maximum {max}")]
    EmptyRange { label: &'static str, min: f32, max: f32 },

    #[error("parameter `{label}`: step {step} must be positive")]
    InvalidStep { label: &'static str, step: f32 },

    #[error("parameter `{label}`: needs at least 2 points, got {points}")]
    TooFewPoints { label: &'static str, points: u32 },

    #[error("parameter `{label}`: logarithmic bounds must be positive")]
    NonPositiveLogBound { label: &'static str },

    #[error("parameter `{label}`: default {default} outside [{min}, {max}]")]
    DefaultOutOfRange {
        label: &'static str,
        default: f32,
        min: f32,
        max: f32,
    },

    #[error("parameter `{label}`: no choices given")]
    NoChoices { label: &'static str },

    #[error("parameter `{label}`: position {position} past maximum {max}")]
    PositionOutOfRange {
        label: &'static str,
        position: u32,
        max: u32,
    },
}

/// Inconsistent clocking or interrupt configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sample rate {0} Hz does not divide the 24 MHz timer clock")]
    SampleRate(u32),

    #[error("MQS oversample rate must be 32 or 64, got {0}")]
    MqsOversample(u32),

    #[error("MQS PWM frequency {pwm_hz} Hz is not a multiple of the sample rate")]
    PwmNotMultiple { pwm_hz: u32 },

    #[error("MQS input clock {0} Hz exceeds 66.5 MHz")]
    MqsClockTooHigh(u32),

    #[error("audio PLL divider {0} outside 27..=54")]
    PllDivider(u32),

    #[error("audio PLL numerator {num} must be below denominator {den}")]
    PllFraction { num: u32, den: u32 },

    #[error("{clock} clock {clock_hz} Hz does not match MQS clock {mqs_hz} Hz")]
    ClockMismatch {
        clock: &'static str,
        clock_hz: u32,
        mqs_hz: u32,
    },

    #[error("{0} clock does not fit in 32 bits")]
    ClockOverflow(&'static str),

    #[error("DMA interrupt priority {dma} must be more urgent than audio priority {audio}")]
    Priority { dma: u8, audio: u8 },
}

/// Peripheral bring-up failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    #[error("ADC calibration failed")]
    CalibrationFailed,

    #[error("timed out waiting for {0}")]
    Timeout(&'static str),

    #[error("adapter used before init()")]
    NotInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
