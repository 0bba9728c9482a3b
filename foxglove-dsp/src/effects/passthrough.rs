//! Copies input to output. Fills empty slots.

use crate::block::AudioBlock;
use crate::effect::{icons, AudioEffect, EffectIdentity, Rgb};

pub static IDENTITY: EffectIdentity = EffectIdentity {
    name: "Default Passthrough",
    icon: &icons::PASSTHROUGH,
    theme: Rgb::WHITE,
};

#[derive(Debug, Default)]
pub struct Passthrough;

impl Passthrough {
    pub const fn new() -> Self {
        Passthrough
    }
}

impl AudioEffect for Passthrough {
    fn identity(&self) -> &'static EffectIdentity {
        &IDENTITY
    }

    fn connect(&mut self) {}

    fn disconnect(&mut self) {}

    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        output.copy_from_slice(input);
    }

    fn clone_prototype(&self) -> Self {
        Passthrough
    }
}
