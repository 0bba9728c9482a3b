//! 27x41 XBM bitmaps for the effect identities.
//!
//! Rows are LSB-first, padded to 4 bytes (32 px), 41 rows.

use crate::effect::EffectIcon;

pub static PASSTHROUGH: EffectIcon = [
    0xFC, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x06,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0xF8, 0x00, 0x04, 0x01, 0xFC, 0x01, 0x04, 0x01, 0x8C, 0x01, 0x04,
    0x01, 0x8C, 0x01, 0x04, 0x01, 0x0C, 0x03, 0x04, 0x01, 0x0C, 0x03, 0x04,
    0x01, 0x18, 0x03, 0x04, 0x01, 0x18, 0x07, 0x04, 0x01, 0x38, 0x06, 0x04,
    0x0F, 0x30, 0x86, 0x07, 0x11, 0x30, 0x5C, 0x04, 0xF1, 0x61, 0x78, 0x04,
    0xF1, 0x61, 0x60, 0x04, 0x0F, 0x63, 0x80, 0x07, 0x01, 0xC3, 0x00, 0x04,
    0x01, 0xC3, 0x00, 0x04, 0x01, 0xC3, 0x00, 0x04, 0x01, 0xC6, 0x00, 0x04,
    0x01, 0xC6, 0x00, 0x04, 0x01, 0xFE, 0x00, 0x04, 0x01, 0x7C, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02,
    0x06, 0x00, 0x00, 0x03, 0xFC, 0xFF, 0xFF, 0x00,
];

pub static PARAM_TEST: EffectIcon = [
    0xF8, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03, 0x22, 0x20, 0x20, 0x02,
    0xF9, 0xF8, 0xF8, 0x04, 0x99, 0x99, 0xCC, 0x04, 0x8D, 0x8D, 0x8D, 0x05,
    0x8D, 0x89, 0x8D, 0x04, 0xD9, 0xF9, 0xD8, 0x04, 0x71, 0x70, 0x78, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x07, 0x07, 0x04, 0x81, 0x8F, 0x0F, 0x04,
    0xC1, 0xD8, 0x18, 0x04, 0xC1, 0xD8, 0x18, 0x04, 0x81, 0x8C, 0x09, 0x04,
    0x81, 0x8F, 0x0F, 0x04, 0x01, 0x02, 0x04, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x0F, 0x00, 0x80, 0x07, 0x31, 0x00, 0x60, 0x04, 0xF1, 0x01, 0x7C, 0x04,
    0xF1, 0x03, 0x6E, 0x04, 0x0F, 0x07, 0x87, 0x07, 0x01, 0x0E, 0x03, 0x04,
    0x01, 0x8C, 0x01, 0x04, 0x01, 0xFC, 0x01, 0x04, 0x01, 0xF8, 0x00, 0x04,
    0x01, 0x20, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02,
    0x06, 0x00, 0x00, 0x03, 0xFC, 0xFF, 0xFF, 0x00,
];

pub static IIR_LOW_PASS: EffectIcon = [
    0xF8, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03, 0x02, 0x00, 0x00, 0x02,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x31, 0x00, 0x00, 0x04, 0x11, 0x04, 0x00, 0x04, 0xD1, 0xFF, 0x01, 0x04,
    0x11, 0xC2, 0x03, 0x04, 0x11, 0x00, 0x02, 0x04, 0x19, 0x80, 0x0E, 0x04,
    0x19, 0x00, 0x1C, 0x04, 0x11, 0x00, 0x30, 0x04, 0x31, 0x80, 0x60, 0x04,
    0x11, 0x00, 0x20, 0x04, 0x11, 0x80, 0x00, 0x04, 0x11, 0x80, 0x00, 0x04,
    0x11, 0x00, 0x00, 0x04, 0x79, 0x84, 0x01, 0x04, 0xF9, 0xFF, 0xFF, 0x04,
    0x39, 0x82, 0x10, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x71, 0xE6, 0x0F, 0x04, 0x31, 0xE6, 0x1F, 0x04,
    0x61, 0x66, 0x38, 0x04, 0x71, 0x67, 0x38, 0x04, 0x61, 0xE6, 0x1D, 0x04,
    0x31, 0xE6, 0x0F, 0x04, 0x61, 0x66, 0x0E, 0x04, 0x61, 0x66, 0x1C, 0x04,
    0x71, 0x66, 0x18, 0x04, 0x71, 0x66, 0x38, 0x04, 0x01, 0x46, 0x10, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02,
    0x06, 0x00, 0x00, 0x03, 0xFC, 0xFF, 0xFF, 0x00,
];

pub static IIR_HIGH_PASS: EffectIcon = [
    0xFC, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x06,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x11, 0x00, 0x00, 0x04,
    0x11, 0x00, 0x00, 0x04, 0x11, 0x00, 0x00, 0x04, 0x11, 0xC0, 0xFF, 0x04,
    0x11, 0xE0, 0x00, 0x04, 0x11, 0x70, 0x00, 0x04, 0x11, 0xB8, 0x00, 0x04,
    0x11, 0x1C, 0x00, 0x04, 0x11, 0x0E, 0x00, 0x04, 0x11, 0x87, 0x00, 0x04,
    0x91, 0x03, 0x00, 0x04, 0xD1, 0x81, 0x00, 0x04, 0xD1, 0x00, 0x00, 0x04,
    0x11, 0x00, 0x00, 0x04, 0x11, 0x80, 0x00, 0x04, 0xF9, 0xFF, 0xFF, 0x04,
    0x11, 0x00, 0x00, 0x04, 0x11, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x71, 0xE6, 0x0F, 0x04, 0x71, 0xE6, 0x1F, 0x04,
    0x71, 0x66, 0x38, 0x04, 0x71, 0x66, 0x38, 0x04, 0x71, 0xE6, 0x1F, 0x04,
    0x71, 0xE6, 0x0F, 0x04, 0x71, 0x66, 0x0E, 0x04, 0x71, 0x66, 0x1C, 0x04,
    0x71, 0x66, 0x18, 0x04, 0x71, 0x66, 0x38, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02,
    0x06, 0x00, 0x00, 0x03, 0xFC, 0xFF, 0xFF, 0x00,
];

pub static OVERDRIVE: EffectIcon = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03,
    0x03, 0x00, 0x00, 0x06, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0xE1, 0x87, 0x3F, 0x04, 0x71, 0x8E, 0x79, 0x04,
    0x39, 0x8C, 0x61, 0x04, 0x19, 0x9C, 0x61, 0x04, 0x19, 0x98, 0x61, 0x04,
    0x19, 0x98, 0x61, 0x04, 0x19, 0x9C, 0x61, 0x04, 0x39, 0x8C, 0x61, 0x04,
    0xF1, 0x8F, 0x7F, 0x04, 0xE1, 0x87, 0x1F, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02, 0x06, 0x00, 0x00, 0x03,
    0xFC, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Speaker cabinet with two drivers.
pub static CAB_SIM: EffectIcon = [
    0xFC, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03, 0x03, 0x00, 0x00, 0x06,
    0x01, 0x00, 0x00, 0x04, 0xF9, 0xFF, 0xFF, 0x04, 0x09, 0x00, 0x80, 0x04,
    0xE9, 0xEE, 0xB6, 0x04, 0xA9, 0xAA, 0xB6, 0x04, 0xE9, 0xEE, 0x80, 0x04,
    0x09, 0x40, 0x80, 0x04, 0x09, 0x88, 0x80, 0x04, 0x09, 0x04, 0x81, 0x04,
    0x09, 0x72, 0x82, 0x04, 0x09, 0x88, 0x80, 0x04, 0x09, 0x88, 0x80, 0x04,
    0x09, 0x88, 0x80, 0x04, 0x09, 0x72, 0x82, 0x04, 0x09, 0x04, 0x81, 0x04,
    0x09, 0x88, 0x80, 0x04, 0x09, 0x00, 0x80, 0x04, 0xF9, 0xFF, 0xFF, 0x04,
    0xE1, 0x00, 0x38, 0x04, 0xF9, 0xFF, 0xFF, 0x04, 0x09, 0x00, 0x80, 0x04,
    0x09, 0x00, 0x80, 0x04, 0x09, 0x88, 0x80, 0x04, 0x09, 0x04, 0x81, 0x04,
    0x09, 0x72, 0x82, 0x04, 0x09, 0x88, 0x80, 0x04, 0x09, 0x88, 0x80, 0x04,
    0x09, 0x88, 0x80, 0x04, 0x09, 0x72, 0x82, 0x04, 0x09, 0x04, 0x81, 0x04,
    0x09, 0x88, 0x80, 0x04, 0x09, 0x00, 0x80, 0x04, 0x09, 0x00, 0x80, 0x04,
    0xF9, 0xFF, 0xFF, 0x04, 0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02,
    0x06, 0x00, 0x00, 0x03, 0xFC, 0xFF, 0xFF, 0x00,
];

pub static VOLUME: EffectIcon = [
    0xF8, 0xFF, 0xFF, 0x01, 0x06, 0x00, 0x00, 0x03, 0x02, 0x00, 0x00, 0x02,
    0x01, 0x00, 0x00, 0x04, 0x01, 0x60, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04,
    0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04, 0x01, 0xFC, 0x00, 0x04,
    0x01, 0xEC, 0x03, 0x04, 0x01, 0x86, 0x03, 0x04, 0x01, 0x06, 0x03, 0x04,
    0x01, 0x07, 0x06, 0x04, 0x01, 0x06, 0x03, 0x04, 0x01, 0x06, 0x03, 0x04,
    0x01, 0xDE, 0x03, 0x04, 0x01, 0xF8, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04,
    0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04,
    0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04,
    0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04,
    0x01, 0x70, 0x00, 0x04, 0x01, 0x70, 0x00, 0x04, 0x01, 0x00, 0x00, 0x04,
    0xE1, 0x01, 0x00, 0x04, 0x21, 0x00, 0x00, 0x04, 0x21, 0xAA, 0x1B, 0x04,
    0xE1, 0xAA, 0x28, 0x04, 0x21, 0x92, 0x29, 0x04, 0x21, 0xAA, 0x28, 0x04,
    0x21, 0xAA, 0x1B, 0x04, 0x01, 0x00, 0x00, 0x04, 0x03, 0x00, 0x00, 0x02,
    0x06, 0x00, 0x00, 0x03, 0xFC, 0xFF, 0xFF, 0x00,
];
