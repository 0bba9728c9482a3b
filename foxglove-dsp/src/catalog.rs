//! The fixed set of effect prototypes.
//!
//! Chain slots hold a [`ChainEffect`], a closed enum over every effect the
//! pedal ships. Dispatch is a `match`, so there are no trait objects and no
//! heap: a slot is exactly as large as the largest effect.
//!
//! | # | Name | Theme |
//! |---|------|-------|
//! | 0 | Default Passthrough | white |
//! | 1 | Passthrough Param | red |
//! | 2 | IIR Low-pass | yellow |
//! | 3 | IIR High-pass | purple |
//! | 4 | Overdrive | red |
//! | 5 | Cab Sim | orange |
//! | 6 | Fixed Pt. Vol | green |

use crate::block::AudioBlock;
use crate::effect::{AudioEffect, EffectIdentity, EffectParam};
use crate::effects::{CabSim, FixedPointVolume, IirFilter, Overdrive, ParamTest, Passthrough};
use crate::error::ParamError;

/// Number of prototypes in [`Catalog::standard`].
pub const CATALOG_LEN: usize = 7;

/// Any effect that can occupy a chain slot.
pub enum ChainEffect {
    Passthrough(Passthrough),
    ParamTest(ParamTest),
    Iir(IirFilter),
    Overdrive(Overdrive),
    CabSim(CabSim),
    Volume(FixedPointVolume),
    #[cfg(test)]
    Probe(probe::Probe),
}

/// Run `$body` with `$fx` bound to the inner effect, whatever the variant.
macro_rules! with_effect {
    ($effect:expr, $fx:ident => $body:expr) => {
        match $effect {
            ChainEffect::Passthrough($fx) => $body,
            ChainEffect::ParamTest($fx) => $body,
            ChainEffect::Iir($fx) => $body,
            ChainEffect::Overdrive($fx) => $body,
            ChainEffect::CabSim($fx) => $body,
            ChainEffect::Volume($fx) => $body,
            #[cfg(test)]
            ChainEffect::Probe($fx) => $body,
        }
    };
}

impl AudioEffect for ChainEffect {
    fn identity(&self) -> &'static EffectIdentity {
        with_effect!(self, fx => fx.identity())
    }

    fn connect(&mut self) {
        with_effect!(self, fx => fx.connect())
    }

    fn disconnect(&mut self) {
        with_effect!(self, fx => fx.disconnect())
    }

    #[inline]
    fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
        with_effect!(self, fx => fx.process(input, output))
    }

    fn clone_prototype(&self) -> Self {
        match self {
            ChainEffect::Passthrough(fx) => ChainEffect::Passthrough(fx.clone_prototype()),
            ChainEffect::ParamTest(fx) => ChainEffect::ParamTest(fx.clone_prototype()),
            ChainEffect::Iir(fx) => ChainEffect::Iir(fx.clone_prototype()),
            ChainEffect::Overdrive(fx) => ChainEffect::Overdrive(fx.clone_prototype()),
            ChainEffect::CabSim(fx) => ChainEffect::CabSim(fx.clone_prototype()),
            ChainEffect::Volume(fx) => ChainEffect::Volume(fx.clone_prototype()),
            #[cfg(test)]
            ChainEffect::Probe(fx) => ChainEffect::Probe(fx.clone_prototype()),
        }
    }

    fn params(&self) -> &[EffectParam] {
        with_effect!(self, fx => fx.params())
    }

    fn saturation_count(&self) -> u32 {
        with_effect!(self, fx => fx.saturation_count())
    }
}

impl ChainEffect {
    pub fn name(&self) -> &'static str {
        self.identity().name
    }
}

/// Prototypes the chain manager clones from. Never processed directly.
pub struct Catalog {
    prototypes: [ChainEffect; CATALOG_LEN],
}

impl Catalog {
    /// The pedal's shipped effects, in menu order.
    pub fn standard() -> Result<Self, ParamError> {
        let catalog = Catalog {
            prototypes: [
                ChainEffect::Passthrough(Passthrough::new()),
                ChainEffect::ParamTest(ParamTest::new()?),
                ChainEffect::Iir(IirFilter::low_pass()?),
                ChainEffect::Iir(IirFilter::high_pass()?),
                ChainEffect::Overdrive(Overdrive::new()?),
                ChainEffect::CabSim(CabSim::new()),
                ChainEffect::Volume(FixedPointVolume::new()?),
            ],
        };
        log::info!("effect catalog: {} prototypes", CATALOG_LEN);
        for (index, prototype) in catalog.prototypes.iter().enumerate() {
            log::debug!(
                "  [{}] {} ({} params)",
                index,
                prototype.name(),
                prototype.params().len()
            );
        }
        Ok(catalog)
    }

    pub const fn len(&self) -> usize {
        CATALOG_LEN
    }

    pub fn get(&self, index: usize) -> Option<&ChainEffect> {
        self.prototypes.get(index)
    }

    /// Prototype that fills a slot nobody has chosen yet.
    pub fn default_prototype(&self) -> &ChainEffect {
        &self.prototypes[0]
    }

    /// Display names, in catalog order.
    pub fn names(&self) -> [&'static str; CATALOG_LEN] {
        core::array::from_fn(|i| self.prototypes[i].name())
    }

    #[cfg(test)]
    pub(crate) fn with_prototype(mut self, index: usize, prototype: ChainEffect) -> Self {
        self.prototypes[index] = prototype;
        self
    }
}

/// An instrumented effect for lifecycle tests.
#[cfg(test)]
pub(crate) mod probe {
    use core::sync::atomic::{AtomicI32, AtomicU32, Ordering};

    use crate::block::AudioBlock;
    use crate::effect::{icons, AudioEffect, EffectIdentity, Rgb};

    pub static IDENTITY: EffectIdentity = EffectIdentity {
        name: "Probe",
        icon: &icons::PASSTHROUGH,
        theme: Rgb::CYAN,
    };

    /// Lifecycle counters shared by a prototype and all its clones.
    #[derive(Debug, Default)]
    pub struct ProbeLog {
        pub connects: AtomicU32,
        pub disconnects: AtomicU32,
        pub clones: AtomicU32,
        pub blocks: AtomicU32,
        /// Net live instances: connects minus disconnects.
        pub live: AtomicI32,
    }

    impl ProbeLog {
        pub const fn new() -> Self {
            ProbeLog {
                connects: AtomicU32::new(0),
                disconnects: AtomicU32::new(0),
                clones: AtomicU32::new(0),
                blocks: AtomicU32::new(0),
                live: AtomicI32::new(0),
            }
        }

        pub fn connects(&self) -> u32 {
            self.connects.load(Ordering::Relaxed)
        }

        pub fn disconnects(&self) -> u32 {
            self.disconnects.load(Ordering::Relaxed)
        }

        pub fn clones(&self) -> u32 {
            self.clones.load(Ordering::Relaxed)
        }

        pub fn blocks(&self) -> u32 {
            self.blocks.load(Ordering::Relaxed)
        }

        pub fn live(&self) -> i32 {
            self.live.load(Ordering::Relaxed)
        }
    }

    /// Outputs `2x + offset`, so chained probes reveal their order.
    pub struct Probe {
        log: &'static ProbeLog,
        offset: i16,
    }

    impl Probe {
        pub const fn new(log: &'static ProbeLog, offset: i16) -> Self {
            Probe { log, offset }
        }
    }

    impl AudioEffect for Probe {
        fn identity(&self) -> &'static EffectIdentity {
            &IDENTITY
        }

        fn connect(&mut self) {
            self.log.connects.fetch_add(1, Ordering::Relaxed);
            self.log.live.fetch_add(1, Ordering::Relaxed);
        }

        fn disconnect(&mut self) {
            self.log.disconnects.fetch_add(1, Ordering::Relaxed);
            self.log.live.fetch_sub(1, Ordering::Relaxed);
        }

        fn process(&mut self, input: &AudioBlock, output: &mut AudioBlock) {
            self.log.blocks.fetch_add(1, Ordering::Relaxed);
            for (y, &x) in output.iter_mut().zip(input.iter()) {
                *y = x.wrapping_mul(2).wrapping_add(self.offset);
            }
        }

        fn clone_prototype(&self) -> Self {
            self.log.clones.fetch_add(1, Ordering::Relaxed);
            Probe::new(self.log, self.offset)
        }
    }
}
