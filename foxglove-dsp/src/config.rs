//! Clock-tree and interrupt configuration.
//!
//! The hardware runs the ADC trigger timer off a 24 MHz reference and clocks
//! the MQS output through the audio PLL, SAI3 and I2S3 dividers. Every ratio
//! in that chain has to land on the audio sample rate, so the relations are
//! checked once at start-up by [`AudioConfig::validate`].
//!
//! ```text
//! 24 MHz ──PLL (DIVSEL + NUM/DEN)──► ÷PRESC_1 ÷PRESC_2 ──► SAI3 ──► MQS
//!                                                      └──► ÷I2S3_PRESC ──► bit clock
//! 24 MHz ──÷ADC divider──► PIT ──► ADC trigger (fs)
//! ```

use crate::constants::AUDIO_SAMPLE_RATE_HZ;
use crate::error::ConfigError;

/// Reference clock feeding the PLL and the periodic timer.
pub const REFERENCE_CLOCK_HZ: u32 = 24_000_000;

/// Highest clock the MQS block accepts.
pub const MQS_MAX_CLOCK_HZ: u32 = 66_500_000;

/// Bit clock cycles per MQS left+right frame.
pub const BIT_CLOCKS_PER_FRAME: u32 = 32;

/// Audio clocking and interrupt priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioConfig {
    pub sample_rate_hz: u32,
    /// PWM carrier as a multiple of the sample rate.
    pub mqs_pwm_ratio: u32,
    /// 32 or 64.
    pub mqs_oversample: u32,
    pub pll_div_select: u32,
    pub pll_num: u32,
    pub pll_den: u32,
    pub sai3_prescaler_1: u32,
    pub sai3_prescaler_2: u32,
    pub i2s3_prescaler: u32,
    /// NVIC priority of the DMA completion interrupt (lower is more urgent).
    pub dma_irq_priority: u8,
    /// NVIC priority of the software interrupt running the audio cycle.
    pub audio_irq_priority: u8,
}

impl AudioConfig {
    /// 48 kHz, 64x MQS oversampling on an 8x PWM carrier.
    pub const fn new() -> Self {
        AudioConfig {
            sample_rate_hz: AUDIO_SAMPLE_RATE_HZ,
            mqs_pwm_ratio: 8,
            mqs_oversample: 64,
            pll_div_select: 32,
            pll_num: 768,
            pll_den: 1000,
            sai3_prescaler_1: 4,
            sai3_prescaler_2: 8,
            i2s3_prescaler: 16,
            dma_irq_priority: 10,
            audio_irq_priority: 20,
        }
    }

    /// Audio PLL output frequency in Hz.
    pub fn pll_output_hz(&self) -> u32 {
        let fractional =
            (REFERENCE_CLOCK_HZ as u64 * self.pll_num as u64) / self.pll_den.max(1) as u64;
        let hz = REFERENCE_CLOCK_HZ as u64 * self.pll_div_select as u64 + fractional;
        hz.min(u32::MAX as u64) as u32
    }

    /// SAI3 root clock in Hz.
    pub fn sai3_clock_hz(&self) -> u32 {
        let divider = self.sai3_prescaler_1.saturating_mul(self.sai3_prescaler_2);
        self.pll_output_hz() / divider.max(1)
    }

    /// Clock the MQS block needs for the configured oversampling.
    ///
    /// Saturates at `u32::MAX`; [`validate`](Self::validate) rejects such
    /// configurations.
    pub fn mqs_input_hz(&self) -> u32 {
        self.checked_mqs_input_hz().unwrap_or(u32::MAX)
    }

    pub fn mqs_pwm_hz(&self) -> u32 {
        self.sample_rate_hz.saturating_mul(self.mqs_pwm_ratio)
    }

    /// Clock the I2S3 divider chain delivers for one frame per sample.
    pub fn i2s3_input_hz(&self) -> u32 {
        self.checked_i2s3_input_hz().unwrap_or(u32::MAX)
    }

    /// Periodic timer reload that triggers one ADC conversion per sample.
    pub fn adc_sampling_divider(&self) -> u32 {
        REFERENCE_CLOCK_HZ / self.sample_rate_hz.max(1)
    }

    fn checked_mqs_input_hz(&self) -> Option<u32> {
        self.sample_rate_hz
            .checked_mul(self.mqs_pwm_ratio)?
            .checked_mul(self.mqs_oversample)
    }

    fn checked_i2s3_input_hz(&self) -> Option<u32> {
        self.sample_rate_hz
            .checked_mul(BIT_CLOCKS_PER_FRAME)?
            .checked_mul(self.i2s3_prescaler)
    }

    /// Check every ratio in the clock tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz == 0 || REFERENCE_CLOCK_HZ % self.sample_rate_hz != 0 {
            return Err(ConfigError::SampleRate(self.sample_rate_hz));
        }
        if self.mqs_oversample != 32 && self.mqs_oversample != 64 {
            return Err(ConfigError::MqsOversample(self.mqs_oversample));
        }
        if self.mqs_pwm_ratio == 0 {
            return Err(ConfigError::PwmNotMultiple {
                pwm_hz: self.mqs_pwm_hz(),
            });
        }
        if !(27..=54).contains(&self.pll_div_select) {
            return Err(ConfigError::PllDivider(self.pll_div_select));
        }
        if self.pll_den == 0 || self.pll_num >= self.pll_den {
            return Err(ConfigError::PllFraction {
                num: self.pll_num,
                den: self.pll_den,
            });
        }
        let mqs_hz = self
            .checked_mqs_input_hz()
            .ok_or(ConfigError::ClockOverflow("MQS input"))?;
        if mqs_hz >= MQS_MAX_CLOCK_HZ {
            return Err(ConfigError::MqsClockTooHigh(mqs_hz));
        }
        let i2s_hz = self
            .checked_i2s3_input_hz()
            .ok_or(ConfigError::ClockOverflow("I2S3 input"))?;
        if i2s_hz != mqs_hz {
            return Err(ConfigError::ClockMismatch {
                clock: "I2S3",
                clock_hz: i2s_hz,
                mqs_hz,
            });
        }
        let sai3_hz = self.sai3_clock_hz();
        if sai3_hz != mqs_hz {
            return Err(ConfigError::ClockMismatch {
                clock: "SAI3",
                clock_hz: sai3_hz,
                mqs_hz,
            });
        }
        if self.dma_irq_priority >= self.audio_irq_priority {
            return Err(ConfigError::Priority {
                dma: self.dma_irq_priority,
                audio: self.audio_irq_priority,
            });
        }
        Ok(())
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self::new()
    }
}
