//! Passthrough carrying one parameter of each kind, for exercising the
//! parameter editor.

use crate::block::AudioBlock;
use crate::effect::{icons, AudioEffect, EffectIdentity, EffectParam, Rgb};
use crate::error::ParamError;

pub static IDENTITY: EffectIdentity = EffectIdentity {
    name: "Passthrough Param",
    icon: &icons::PARAM_TEST,
    theme: Rgb::RED,
};

static TYPES: [&str; 5] = ["Type 1", "Type 2", "Type 3", "Type 4", "Type 5"];

#[derive(Debug)]
pub struct ParamTest {
    params: [EffectParam; 3],
}

impl ParamTest {
    pub fn new() -> Result<Self, ParamError> {
        Ok(ParamTest {
            params: [
                EffectParam::linear("Lin Param", -10.0, 10.0, 0.5, 1.0)?,
                EffectParam::logarithmic("Log Param", 10.0, 1000.0, 100, 100.0)?,
                EffectParam::choice("Sel Param", &TYPES, "Type 2")?,
            ],
        })
    }
}

impl AudioEffect for ParamTest {
    fn identity(&self) -> &'static EffectIdentity {
        &IDENTITY
    }

    fn connect(&mut self) {}

    fn disconnect(&mut self) {}

    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        output.copy_from_slice(input);
    }

    fn clone_prototype(&self) -> Self {
        ParamTest {
            params: [self.params[0].fresh(), self.params[1].fresh(), self.params[2].fresh()],
        }
    }

    fn params(&self) -> &[EffectParam] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_three_parameters_at_defaults() {
        let fx = ParamTest::new().unwrap();
        let labels: [&str; 3] = core::array::from_fn(|i| fx.params()[i].label());
        assert_eq!(labels, ["Lin Param", "Log Param", "Sel Param"]);
        assert!((fx.params()[0].value() - 1.0).abs() < 1e-5);
        assert_eq!(fx.params()[2].selected_choice(), Some("Type 2"));
    }

    #[test]
    fn clone_resets_edited_parameters() {
        let fx = ParamTest::new().unwrap();
        fx.params()[2].set_position(4).unwrap();
        let copy = fx.clone_prototype();
        assert_eq!(copy.params()[2].selected_choice(), Some("Type 2"));
        assert_eq!(fx.params()[2].selected_choice(), Some("Type 5"));
    }
}
