use crate::config::AudioConfig;

/// Lifecycle of a hardware adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Idle,
    Initialized,
    Running,
}

/// Trait for audio peripherals brought up once at start-up (ADC input, MQS output).
pub trait AudioPeripheral {
    /// Error type for bring-up operations.
    type Error;

    /// Configure clocks, triggers and the DMA descriptors. Does not start transfers.
    fn init(&mut self, config: &AudioConfig) -> Result<(), Self::Error>;

    /// Start transfers. Fails if called before [`init`](Self::init).
    fn start(&mut self) -> Result<(), Self::Error>;
}
