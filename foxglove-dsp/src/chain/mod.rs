//! The effect chain and the manager that swaps effects in and out of it.
//!
//! ```text
//! input ─► [slot 0] ─► [slot 1] ─► … ─► [slot M-1] ─► output
//! ```
//!
//! Every slot always holds a connected effect. [`ChainManager::replace`] is
//! the only way to change one, and it does so with the audio cycle held off
//! through a [`CycleGate`], so a cycle never sees a slot mid-swap.
//!
//! # Replacement sequence
//!
//! 1. validate both indices (reject without side effects)
//! 2. `gate.suspend()`
//! 3. `disconnect()` the outgoing effect
//! 4. clone the prototype and `connect()` the clone
//! 5. store it, dropping the outgoing effect
//! 6. `gate.resume()`

use crate::block::AudioBlock;
use crate::catalog::{Catalog, ChainEffect, CATALOG_LEN};
use crate::constants::NUM_EFFECT_SLOTS;
use crate::effect::AudioEffect;
use crate::error::ChainError;
use crate::io::CycleGate;

/// `M` effects run in series.
pub struct EffectChain<const M: usize = NUM_EFFECT_SLOTS> {
    slots: [ChainEffect; M],
}

impl<const M: usize> EffectChain<M> {
    /// Wrap already-connected effects.
    pub fn new(slots: [ChainEffect; M]) -> Self {
        EffectChain { slots }
    }

    pub const fn len(&self) -> usize {
        M
    }

    pub fn slot(&self, index: usize) -> Option<&ChainEffect> {
        self.slots.get(index)
    }

    /// Run one block through every slot in order.
    ///
    /// Blocks ping-pong between `output` and `scratch`, arranged so the last
    /// slot writes `output`. With no slots the input is copied through.
    pub fn process(
        &mut self,
        input: &AudioBlock,
        output: &mut AudioBlock,
        scratch: &mut AudioBlock,
    ) {
        if M == 0 {
            output.copy_from_slice(input);
            return;
        }
        for (i, effect) in self.slots.iter_mut().enumerate() {
            let into_output = (M - i) % 2 == 1;
            match (i, into_output) {
                (0, true) => effect.process(input, output),
                (0, false) => effect.process(input, scratch),
                (_, true) => effect.process(scratch, output),
                (_, false) => effect.process(output, scratch),
            }
        }
    }

    /// Clipped samples across all slots since each was connected.
    pub fn saturation_count(&self) -> u32 {
        self.slots
            .iter()
            .fold(0u32, |sum, fx| sum.wrapping_add(fx.saturation_count()))
    }
}

/// Owns the catalog and the chain; the UI's handle on both.
pub struct ChainManager<const M: usize = NUM_EFFECT_SLOTS> {
    catalog: Catalog,
    chain: EffectChain<M>,
}

impl<const M: usize> ChainManager<M> {
    /// Fill every slot with a connected clone of the catalog's first entry.
    pub fn new(catalog: Catalog) -> Self {
        let slots = core::array::from_fn(|_| {
            let mut effect = catalog.default_prototype().clone_prototype();
            effect.connect();
            effect
        });
        log::info!(
            "effect chain: {} slots of '{}'",
            M,
            catalog.default_prototype().name()
        );
        ChainManager {
            catalog,
            chain: EffectChain::new(slots),
        }
    }

    /// Put a fresh clone of prototype `prototype` into slot `slot`.
    ///
    /// Out-of-range indices leave the chain untouched and never touch the
    /// gate.
    pub fn replace<G: CycleGate>(
        &mut self,
        gate: &G,
        slot: usize,
        prototype: usize,
    ) -> Result<(), ChainError> {
        if slot >= M {
            log::warn!("replace: slot {} out of range ({} slots)", slot, M);
            return Err(ChainError::SlotOutOfRange { index: slot, slots: M });
        }
        let Some(source) = self.catalog.get(prototype) else {
            log::warn!(
                "replace: prototype {} out of range ({} available)",
                prototype,
                CATALOG_LEN
            );
            return Err(ChainError::PrototypeOutOfRange {
                index: prototype,
                available: CATALOG_LEN,
            });
        };

        gate.suspend();
        let outgoing = &mut self.chain.slots[slot];
        outgoing.disconnect();
        let mut incoming = source.clone_prototype();
        incoming.connect();
        *outgoing = incoming;
        gate.resume();

        log::info!("slot {} -> '{}'", slot, source.name());
        Ok(())
    }

    /// Effect currently in `slot`.
    pub fn get_active(&self, slot: usize) -> Result<&ChainEffect, ChainError> {
        self.chain
            .slot(slot)
            .ok_or(ChainError::SlotOutOfRange { index: slot, slots: M })
    }

    /// Names of every prototype, in catalog order.
    pub fn get_catalog_names(&self) -> [&'static str; CATALOG_LEN] {
        self.catalog.names()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The chain, for the audio cycle.
    pub fn chain_mut(&mut self) -> &mut EffectChain<M> {
        &mut self.chain
    }
}
