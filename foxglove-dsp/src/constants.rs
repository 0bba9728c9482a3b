/// Number of 16-bit samples per audio block.
pub const AUDIO_BLOCK_SAMPLES: usize = 128;

/// Audio sample rate in Hz (ADC trigger timer and MQS frame clock).
pub const AUDIO_SAMPLE_RATE_HZ: u32 = 48_000;

/// Audio sample rate as `f32`, for coefficient design.
pub const AUDIO_SAMPLE_RATE: f32 = AUDIO_SAMPLE_RATE_HZ as f32;

/// Number of effect slots in the chain (one per effect encoder).
pub const NUM_EFFECT_SLOTS: usize = 4;

/// Native resolution of the input ADC in bits.
pub const ADC_BITS: u32 = 12;

/// Left shift that promotes an ADC reading to the full 16-bit range.
pub const ADC_PROMOTE_SHIFT: u32 = 16 - ADC_BITS;

/// Data cache line size of the Cortex-M7 in bytes.
pub const CACHE_LINE_BYTES: usize = 32;

/// Effect icon width in pixels.
pub const EFFECT_ICON_WIDTH: usize = 27;

/// Effect icon height in pixels.
pub const EFFECT_ICON_HEIGHT: usize = 41;

/// Size of one XBM effect icon in bytes.
pub const EFFECT_ICON_BYTES: usize = (EFFECT_ICON_WIDTH + 7) / 8 * EFFECT_ICON_HEIGHT;

const _: () = assert!(AUDIO_BLOCK_SAMPLES % 16 == 0, "block size must be a multiple of 16");
const _: () = assert!(ADC_BITS <= 16);
