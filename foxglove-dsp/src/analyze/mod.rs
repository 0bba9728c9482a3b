//! Signal analysis on the audio path.
//!
//! | Analyzer | Output |
//! |----------|--------|
//! | [`LevelMeter`] | four-segment input level display |

pub mod level;

pub use level::LevelMeter;
