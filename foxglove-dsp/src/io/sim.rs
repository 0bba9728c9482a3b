//! Host stand-in for a DMA channel, used by the adapter tests.

use crate::config::AudioConfig;
use crate::error::HardwareError;

use super::dma::DmaChannel;

/// A channel whose position is set by the test instead of by hardware.
#[derive(Debug, Default)]
pub(crate) struct SimChannel {
    position: usize,
    words: usize,
    enabled: bool,
    configure_error: Option<HardwareError>,
}

impl SimChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Make the next `configure` fail, as a timed-out or uncalibrated
    /// peripheral would.
    pub fn fail_configure_with(&mut self, error: HardwareError) {
        self.configure_error = Some(error);
    }

    pub fn configured_words(&self) -> usize {
        self.words
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl DmaChannel for SimChannel {
    fn configure(
        &mut self,
        _base: usize,
        words: usize,
        _config: &AudioConfig,
    ) -> Result<(), HardwareError> {
        if let Some(error) = self.configure_error.take() {
            return Err(error);
        }
        self.words = words;
        Ok(())
    }

    fn enable(&mut self) -> Result<(), HardwareError> {
        self.enabled = true;
        Ok(())
    }

    fn position(&self) -> usize {
        self.position
    }
}
