//! Time sources for the game loop, in microseconds since the loop started.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

pub trait Clock {
    fn now_us(&self) -> u64;
}

/// Monotonic wall clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_us(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to
///
/// Clones share the same time, so an input source can advance the clock the
/// loop reads from.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_us: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_us)),
        }
    }

    pub fn set(&self, now_us: u64) {
        self.now.set(now_us);
    }

    pub fn advance(&self, delta_us: u64) {
        self.now.set(self.now.get().saturating_add(delta_us));
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now.get()
    }
}
