//! Elapsed-time source for the latency metric.

use std::time::Instant;

/// Milliseconds elapsed since the run started, floored.
pub trait Clock {
    fn elapsed_ms(&self) -> u64;
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start_now() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that always reports the same latency. Used to make output
/// byte-reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn elapsed_ms(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_constant() {
        let clock = FixedClock(17);
        assert_eq!(clock.elapsed_ms(), 17);
        assert_eq!(clock.elapsed_ms(), 17);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::start_now();
        let a = clock.elapsed_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let b = clock.elapsed_ms();
        assert!(b >= a + 5, "expected at least 5ms between {a} and {b}");
    }
}
