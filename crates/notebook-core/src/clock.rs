//! Wall-clock source for task ids and timestamps.

/// Millisecond clock
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Real time via chrono (uses `Date.now()` on wasm32)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}
