// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame clock abstraction.
//!
//! Spins are driven by timestamps, so the animation loop only needs "now" and
//! "wait a frame". [`FakeClock`] lets tests run a whole spin without waiting.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Clock trait for time abstraction
pub trait Clock: Send + Sync {
    /// Milliseconds on a monotonic timeline
    fn now_millis(&self) -> u64;

    /// Wait for a duration
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Monotonic clock measuring from its creation
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Manually driven clock for tests
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_millis: Arc<AtomicU64>,

    /// Whether `sleep` advances time instead of waiting
    auto_advance: bool,
}

impl FakeClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
            auto_advance: true,
        }
    }

    /// Clone sharing the same time but with auto-advance disabled
    pub fn without_auto_advance(&self) -> Self {
        Self {
            current_millis: Arc::clone(&self.current_millis),
            auto_advance: false,
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.current_millis.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        if self.auto_advance {
            self.advance_ms(duration.as_millis() as u64);
        }
        Box::pin(async {})
    }
}

/// Clock handle that can be either real or fake
#[derive(Clone, Debug)]
pub enum ClockHandle {
    System(SystemClock),
    Fake(FakeClock),
}

impl ClockHandle {
    pub fn system() -> Self {
        Self::System(SystemClock::new())
    }

    pub fn fake_at(millis: u64) -> Self {
        Self::Fake(FakeClock::new(millis))
    }

    /// Get as fake clock for manipulation (returns None for system clock)
    pub fn as_fake(&self) -> Option<&FakeClock> {
        match self {
            Self::Fake(f) => Some(f),
            Self::System(_) => None,
        }
    }
}

impl Clock for ClockHandle {
    fn now_millis(&self) -> u64 {
        match self {
            Self::System(c) => c.now_millis(),
            Self::Fake(c) => c.now_millis(),
        }
    }

    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        match self {
            Self::System(c) => c.sleep(duration),
            Self::Fake(c) => c.sleep(duration),
        }
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
