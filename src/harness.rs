//! Simulated allocation failures.
//!
//! Every node and every value buffer the queue allocates first asks
//! [`check_alloc`]. With the `alloc_fault` feature enabled, tests can make
//! those requests fail, either at a fixed point in the allocation sequence or
//! at random with a given probability. Fault state is per thread.

use crate::error::{QueueError, Result};

#[cfg(feature = "alloc_fault")]
mod fault {
    use std::cell::Cell;

    use rand::{thread_rng, Rng};

    thread_local! {
        // (allocations to let through, allocations to fail afterwards)
        static FAIL_AFTER: Cell<(usize, usize)> = Cell::new((0, 0));
        static FAIL_PERCENT: Cell<u32> = Cell::new(0);
    }

    /// Let the next `skip` allocations on this thread succeed, then fail `count` of them.
    pub fn fail_after(skip: usize, count: usize) {
        FAIL_AFTER.with(|after| after.set((skip, count)));
    }

    /// Make the next `count` allocations on this thread fail.
    pub fn fail_next(count: usize) {
        fail_after(0, count);
    }

    /// Make every allocation on this thread fail with probability `percent`%.
    pub fn fail_percent(percent: u32) {
        FAIL_PERCENT.with(|p| p.set(percent.min(100)));
    }

    pub fn reset() {
        fail_after(0, 0);
        fail_percent(0);
    }

    pub(super) fn should_fail() -> bool {
        let forced = FAIL_AFTER.with(|after| match after.get() {
            (_, 0) => false,
            (0, count) => {
                after.set((0, count - 1));
                true
            }
            (skip, count) => {
                after.set((skip - 1, count));
                false
            }
        });

        if forced {
            return true;
        }

        let percent = FAIL_PERCENT.with(Cell::get);
        percent > 0 && thread_rng().gen_range(0..100u32) < percent
    }
}

#[cfg(not(feature = "alloc_fault"))]
mod fault {
    pub(super) fn should_fail() -> bool {
        false
    }
}

#[cfg(feature = "alloc_fault")]
pub use fault::{fail_after, fail_next, fail_percent, reset};

pub(crate) fn check_alloc(len: usize) -> Result<()> {
    if fault::should_fail() {
        return Err(QueueError::Alloc { len });
    }

    Ok(())
}
