//! Hand-off from the DMA interrupt to the low-priority audio cycle.
//!
//! The DMA completion interrupt only records which half became free and
//! pends the audio task ([`Continuation::raise`]). The audio task drains the
//! recorded events one cycle at a time, in order ([`Continuation::service`]).
//!
//! ```text
//! DMA IRQ (prio 10)          pending events (FIFO)          audio task (prio 20)
//! ┌──────────────┐  raise   ┌───┬───┬───┐   service   ┌──────────────────────┐
//! │ half done    ├────────► │ F │ B │   ├───────────► │ input → chain → out  │
//! └──────────────┘          └───┴───┴───┘             └──────────────────────┘
//! ```
//!
//! # Contract
//!
//! - Only the interrupt calls [`raise`](Continuation::raise) (producer).
//! - Only the audio task calls [`service`](Continuation::service) (consumer).
//! - [`suspend`](Continuation::suspend) / [`resume`](Continuation::resume)
//!   gate the consumer only; events raised while suspended stay queued and
//!   run, in order, after `resume`.
//!
//! On hardware the pending state also sets the software interrupt's NVIC
//! pending bit, and suspension masks that interrupt. Masking does not clear
//! the bit, which is why nothing is lost across a suspension window.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, AtomicUsize, Ordering};

use super::dma::DmaHalf;

/// Something that can hold off the audio cycle for a short critical section.
pub trait CycleGate {
    /// Stop new audio cycles from starting. A cycle already running finishes
    /// first, since the caller runs at a lower priority than the cycle.
    fn suspend(&self);

    /// Allow audio cycles again; anything pending runs next.
    fn resume(&self);
}

/// Single-producer single-consumer queue of completion events plus the
/// gate and overrun accounting for the audio task.
///
/// Usable capacity is `N - 1` events.
pub struct Continuation<const N: usize = 4> {
    events: [AtomicU8; N],
    /// Next slot to write (interrupt side).
    head: AtomicUsize,
    /// Next slot to read (audio task side).
    tail: AtomicUsize,
    enabled: AtomicBool,
    /// A cycle is executing right now.
    busy: AtomicBool,
    overruns: AtomicU32,
    dropped: AtomicU32,
}

impl<const N: usize> Continuation<N> {
    pub const fn new() -> Self {
        assert!(N >= 2, "continuation needs at least one usable slot");
        Continuation {
            events: [const { AtomicU8::new(0) }; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            enabled: AtomicBool::new(true),
            busy: AtomicBool::new(false),
            overruns: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Interrupt top half: record that `half` is free and pend the cycle.
    ///
    /// If the previous cycle has not finished (still running, or still
    /// waiting to run) this is an overrun. If the queue is full the event is
    /// dropped and counted.
    pub fn raise(&self, half: DmaHalf) {
        if self.busy.load(Ordering::Acquire) || self.has_pending() {
            self.overruns.fetch_add(1, Ordering::Relaxed);
        }

        let head = self.head.load(Ordering::Relaxed);
        let next_head = (head + 1) % N;
        if next_head == self.tail.load(Ordering::Acquire) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.events[head].store(half.to_bits(), Ordering::Relaxed);
        // publish the slot before the index
        self.head.store(next_head, Ordering::Release);
    }

    /// Audio task body: run `cycle` once per pending event, oldest first.
    ///
    /// Stops early if the gate is closed. Returns the number of cycles run.
    pub fn service(&self, mut cycle: impl FnMut(DmaHalf)) -> usize {
        let mut ran = 0;
        while self.enabled.load(Ordering::Acquire) {
            let tail = self.tail.load(Ordering::Relaxed);
            if tail == self.head.load(Ordering::Acquire) {
                break;
            }
            let half = DmaHalf::from_bits(self.events[tail].load(Ordering::Relaxed));

            self.busy.store(true, Ordering::Release);
            self.tail.store((tail + 1) % N, Ordering::Release);
            cycle(half);
            self.busy.store(false, Ordering::Release);
            ran += 1;
        }
        ran
    }

    /// Events waiting for a cycle.
    pub fn pending(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        (head + N - tail) % N
    }

    pub fn has_pending(&self) -> bool {
        self.pending() != 0
    }

    pub fn is_suspended(&self) -> bool {
        !self.enabled.load(Ordering::Acquire)
    }

    /// Cycles that did not finish before the next completion event.
    pub fn overrun_count(&self) -> u32 {
        self.overruns.load(Ordering::Relaxed)
    }

    /// Events lost because the queue was full.
    pub fn dropped_count(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<const N: usize> CycleGate for Continuation<N> {
    fn suspend(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    fn resume(&self) {
        self.enabled.store(true, Ordering::Release);
    }
}

impl<const N: usize> Default for Continuation<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_run_in_fifo_order() {
        let cont: Continuation<4> = Continuation::new();
        cont.raise(DmaHalf::Front);
        cont.raise(DmaHalf::Back);
        assert_eq!(cont.pending(), 2);

        let mut seen = [None; 4];
        let mut n = 0;
        let ran = cont.service(|half| {
            seen[n] = Some(half);
            n += 1;
        });
        assert_eq!(ran, 2);
        assert_eq!(seen[0], Some(DmaHalf::Front));
        assert_eq!(seen[1], Some(DmaHalf::Back));
        assert!(!cont.has_pending());
    }

    #[test]
    fn on_time_cycles_are_not_overruns() {
        let cont: Continuation<4> = Continuation::new();
        for i in 0..10 {
            let half = if i % 2 == 0 { DmaHalf::Front } else { DmaHalf::Back };
            cont.raise(half);
            assert_eq!(cont.service(|_| {}), 1);
        }
        assert_eq!(cont.overrun_count(), 0);
    }

    #[test]
    fn event_during_cycle_counts_overrun() {
        let cont: Continuation<4> = Continuation::new();
        cont.raise(DmaHalf::Front);
        let mut raised = false;
        let ran = cont.service(|_| {
            if !raised {
                // next completion arrives before this cycle returns
                cont.raise(DmaHalf::Back);
                raised = true;
            }
        });
        assert_eq!(ran, 2);
        assert_eq!(cont.overrun_count(), 1);
    }

    #[test]
    fn unserviced_event_counts_overrun() {
        let cont: Continuation<4> = Continuation::new();
        cont.raise(DmaHalf::Front);
        cont.raise(DmaHalf::Back);
        assert_eq!(cont.overrun_count(), 1);
    }

    #[test]
    fn suspension_defers_without_losing_events() {
        let cont: Continuation<4> = Continuation::new();
        cont.suspend();
        cont.raise(DmaHalf::Front);
        assert_eq!(cont.service(|_| {}), 0);
        assert!(cont.is_suspended());
        assert_eq!(cont.pending(), 1);

        cont.resume();
        assert_eq!(cont.service(|_| {}), 1);
        assert_eq!(cont.pending(), 0);
    }

    #[test]
    fn full_queue_drops_newest() {
        let cont: Continuation<3> = Continuation::new();
        cont.raise(DmaHalf::Front);
        cont.raise(DmaHalf::Back);
        cont.raise(DmaHalf::Front);
        assert_eq!(cont.pending(), 2);
        assert_eq!(cont.dropped_count(), 1);

        let mut first = None;
        cont.service(|half| {
            if first.is_none() {
                first = Some(half);
            }
        });
        assert_eq!(first, Some(DmaHalf::Front));
    }
}
