//! Double-buffered DMA regions and their cache discipline.
//!
//! A [`DmaRegion`] is split into a front and a back half. At any moment the
//! DMA engine owns one half and software owns the other. The engine bypasses
//! the data cache, so software must:
//!
//! - invalidate a half before reading what the engine wrote into it, and
//! - flush a half after writing it, before the engine reads it.
//!
//! The region's memory is private. The only way to touch a half is to claim
//! it: [`DmaRegion::claim_for_read`] invalidates before handing out the
//! slice, and [`DmaRegion::claim_for_write`] returns a [`WriteClaim`] that
//! flushes when it is dropped, which is the hand-back to the engine.
//!
//! ```text
//!            ┌──────────── DmaRegion (align 32) ────────────┐
//!            │  front: [T; HALF]      │  back: [T; HALF]    │
//!            └────────────────────────┴─────────────────────┘
//!   engine ►  owns one half           software claims the other
//! ```

use core::mem::size_of;
use core::ops::{Deref, DerefMut};

use crate::config::AudioConfig;
use crate::constants::CACHE_LINE_BYTES;
use crate::error::HardwareError;

/// One half of a double-buffered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmaHalf {
    Front,
    Back,
}

impl DmaHalf {
    /// The opposite half.
    pub const fn other(self) -> Self {
        match self {
            DmaHalf::Front => DmaHalf::Back,
            DmaHalf::Back => DmaHalf::Front,
        }
    }

    /// Half that contains word `position` of a region with `half_len` words
    /// per half. Positions past the end wrap, as the engine does.
    pub const fn containing(position: usize, half_len: usize) -> Self {
        if position % (2 * half_len) < half_len {
            DmaHalf::Front
        } else {
            DmaHalf::Back
        }
    }

    pub(crate) const fn to_bits(self) -> u8 {
        match self {
            DmaHalf::Front => 0,
            DmaHalf::Back => 1,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        if bits == 0 {
            DmaHalf::Front
        } else {
            DmaHalf::Back
        }
    }
}

/// Data-cache maintenance by address range.
///
/// On the Cortex-M7 these map to `DCIMVAC` / `DCCIMVAC` loops over the
/// range; on the host they are no-ops or recorders.
pub trait CacheMaintenance {
    /// Discard cached lines so the next read comes from RAM.
    fn invalidate(&mut self, addr: usize, len: usize);

    /// Write dirty lines back to RAM and discard them.
    fn flush(&mut self, addr: usize, len: usize);
}

/// Cache maintenance for uncached memory and host builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl CacheMaintenance for NoCache {
    fn invalidate(&mut self, _addr: usize, _len: usize) {}
    fn flush(&mut self, _addr: usize, _len: usize) {}
}

/// The hardware transfer engine feeding or draining a region.
///
/// Implementations own the peripheral bring-up (timers, triggers, clocks)
/// for their side of the audio path.
pub trait DmaChannel {
    /// Program the engine to cycle over `words` elements starting at `base`,
    /// paced at the configured sample rate.
    fn configure(
        &mut self,
        base: usize,
        words: usize,
        config: &AudioConfig,
    ) -> Result<(), HardwareError>;

    /// Start transfers.
    fn enable(&mut self) -> Result<(), HardwareError>;

    /// Element index inside the region the engine will transfer next.
    fn position(&self) -> usize;
}

/// Cache-line aligned double buffer of `2 * HALF` elements.
#[repr(C, align(32))]
pub struct DmaRegion<T: Copy, const HALF: usize> {
    front: [T; HALF],
    back: [T; HALF],
}

impl<T: Copy, const HALF: usize> DmaRegion<T, HALF> {
    /// Bytes per half; each half must cover whole cache lines.
    pub const HALF_BYTES: usize = HALF * size_of::<T>();

    const VALID: () = assert!(
        HALF > 0 && Self::HALF_BYTES % CACHE_LINE_BYTES == 0,
        "each half must cover whole cache lines"
    );

    pub const fn new(fill: T) -> Self {
        let () = Self::VALID;
        DmaRegion {
            front: [fill; HALF],
            back: [fill; HALF],
        }
    }

    /// Elements in the whole region.
    pub const fn len(&self) -> usize {
        2 * HALF
    }

    /// Address of the first element, for programming the engine.
    pub fn base_address(&self) -> usize {
        self.front.as_ptr() as usize
    }

    /// Address of the first element of `half`.
    pub fn half_address(&self, half: DmaHalf) -> usize {
        match half {
            DmaHalf::Front => self.front.as_ptr() as usize,
            DmaHalf::Back => self.back.as_ptr() as usize,
        }
    }

    /// Take `half` for reading after invalidating it.
    pub fn claim_for_read<C: CacheMaintenance>(&self, half: DmaHalf, cache: &mut C) -> &[T; HALF] {
        cache.invalidate(self.half_address(half), Self::HALF_BYTES);
        match half {
            DmaHalf::Front => &self.front,
            DmaHalf::Back => &self.back,
        }
    }

    /// Take `half` for writing. The claim flushes the half when dropped.
    pub fn claim_for_write<'a, C: CacheMaintenance>(
        &'a mut self,
        half: DmaHalf,
        cache: &'a mut C,
    ) -> WriteClaim<'a, T, C, HALF> {
        let words = match half {
            DmaHalf::Front => &mut self.front,
            DmaHalf::Back => &mut self.back,
        };
        WriteClaim { words, cache }
    }

    /// Direct access for a simulated engine.
    #[cfg(test)]
    pub(crate) fn engine_half(&self, half: DmaHalf) -> &[T; HALF] {
        match half {
            DmaHalf::Front => &self.front,
            DmaHalf::Back => &self.back,
        }
    }

    /// Direct access for a simulated engine.
    #[cfg(test)]
    pub(crate) fn engine_half_mut(&mut self, half: DmaHalf) -> &mut [T; HALF] {
        match half {
            DmaHalf::Front => &mut self.front,
            DmaHalf::Back => &mut self.back,
        }
    }
}

/// Software ownership of one half for writing.
///
/// Dropping the claim flushes the half so the engine sees the new data.
pub struct WriteClaim<'a, T: Copy, C: CacheMaintenance, const HALF: usize> {
    words: &'a mut [T; HALF],
    cache: &'a mut C,
}

impl<T: Copy, C: CacheMaintenance, const HALF: usize> Deref for WriteClaim<'_, T, C, HALF> {
    type Target = [T; HALF];

    fn deref(&self) -> &Self::Target {
        self.words
    }
}

impl<T: Copy, C: CacheMaintenance, const HALF: usize> DerefMut for WriteClaim<'_, T, C, HALF> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.words
    }
}

impl<T: Copy, C: CacheMaintenance, const HALF: usize> Drop for WriteClaim<'_, T, C, HALF> {
    fn drop(&mut self) {
        let addr = self.words.as_ptr() as usize;
        self.cache.flush(addr, HALF * size_of::<T>());
    }
}

/// Cache recorder for tests: remembers every maintenance call.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCache {
    pub invalidated: [(usize, usize); 16],
    pub flushed: [(usize, usize); 16],
    pub invalidate_count: usize,
    pub flush_count: usize,
}

#[cfg(test)]
impl CacheMaintenance for RecordingCache {
    fn invalidate(&mut self, addr: usize, len: usize) {
        self.invalidated[self.invalidate_count % 16] = (addr, len);
        self.invalidate_count += 1;
    }

    fn flush(&mut self, addr: usize, len: usize) {
        self.flushed[self.flush_count % 16] = (addr, len);
        self.flush_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_alternate() {
        assert_eq!(DmaHalf::Front.other(), DmaHalf::Back);
        assert_eq!(DmaHalf::Back.other(), DmaHalf::Front);
        assert_eq!(DmaHalf::from_bits(DmaHalf::Back.to_bits()), DmaHalf::Back);
    }

    #[test]
    fn containing_splits_at_midpoint() {
        assert_eq!(DmaHalf::containing(0, 128), DmaHalf::Front);
        assert_eq!(DmaHalf::containing(127, 128), DmaHalf::Front);
        assert_eq!(DmaHalf::containing(128, 128), DmaHalf::Back);
        assert_eq!(DmaHalf::containing(255, 128), DmaHalf::Back);
        assert_eq!(DmaHalf::containing(256, 128), DmaHalf::Front);
    }

    #[test]
    fn region_is_cache_aligned_and_contiguous() {
        let region: DmaRegion<u16, 128> = DmaRegion::new(0);
        assert_eq!(region.base_address() % CACHE_LINE_BYTES, 0);
        assert_eq!(
            region.half_address(DmaHalf::Back) - region.half_address(DmaHalf::Front),
            256
        );
        assert_eq!(region.len(), 256);
    }

    #[test]
    fn read_claim_invalidates_exactly_its_half() {
        let region: DmaRegion<u32, 128> = DmaRegion::new(7);
        let mut cache = RecordingCache::default();
        let words = region.claim_for_read(DmaHalf::Back, &mut cache);
        assert_eq!(words[0], 7);
        assert_eq!(cache.invalidate_count, 1);
        assert_eq!(cache.flush_count, 0);
        assert_eq!(
            cache.invalidated[0],
            (region.half_address(DmaHalf::Back), 512)
        );
    }

    #[test]
    fn write_claim_flushes_on_release() {
        let mut region: DmaRegion<u32, 128> = DmaRegion::new(0);
        let front = region.half_address(DmaHalf::Front);
        let mut cache = RecordingCache::default();
        {
            let mut claim = region.claim_for_write(DmaHalf::Front, &mut cache);
            claim[3] = 0xAB;
        }
        assert_eq!(cache.flush_count, 1);
        assert_eq!(cache.flushed[0], (front, 512));
        assert_eq!(region.engine_half(DmaHalf::Front)[3], 0xAB);
        assert_eq!(region.engine_half(DmaHalf::Back)[3], 0);
    }
}
