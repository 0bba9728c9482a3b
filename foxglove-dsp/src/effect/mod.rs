//! The effect interface shared by every chain slot.
//!
//! An effect is a block processor with a lifecycle:
//!
//! ```text
//! prototype ──clone_prototype()──► instance ──connect()──► process()* ──disconnect()
//! ```
//!
//! Prototypes live in the catalog and are never processed. Instances are
//! fresh clones: parameters at their defaults, filter state cleared.
//! `connect` and `disconnect` both return the instance to that zero state,
//! so a slot that is reconnected starts from silence.

pub mod icons;
pub mod param;

use crate::block::AudioBlock;
use crate::constants::EFFECT_ICON_BYTES;

pub use param::{EffectParam, ParamKind};

/// Monochrome XBM icon, 27x41 pixels.
pub type EffectIcon = [u8; EFFECT_ICON_BYTES];

/// Theme colour shown on the UI while an effect is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const PURPLE: Rgb = Rgb::new(64, 0, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 64, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const OFF: Rgb = Rgb::new(0, 0, 0);
}

/// Static description of an effect kind. Shared by a prototype and every
/// instance cloned from it.
#[derive(Debug)]
pub struct EffectIdentity {
    pub name: &'static str,
    pub icon: &'static EffectIcon,
    pub theme: Rgb,
}

/// A block processor that can sit in a chain slot.
pub trait AudioEffect {
    /// Name, icon and theme colour.
    fn identity(&self) -> &'static EffectIdentity;

    /// Prepare for processing. Clears all internal state.
    fn connect(&mut self);

    /// Release the slot. Clears all internal state.
    fn disconnect(&mut self);

    /// Process exactly one block. Bounded time, no blocking, no allocation.
    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock);

    /// A fresh instance of the same kind: default parameters, cleared state.
    fn clone_prototype(&self) -> Self
    where
        Self: Sized;

    /// User-editable parameters, in display order.
    fn params(&self) -> &[EffectParam] {
        &[]
    }

    /// Samples clipped to full scale since the last `connect`.
    fn saturation_count(&self) -> u32 {
        0
    }
}
