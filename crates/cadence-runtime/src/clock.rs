//! Clock sources feeding the loop scheduler

use std::collections::VecDeque;

use instant::Instant;

/// A source of timestamps in seconds.
///
/// Readings are expected to be non-decreasing. The scheduler still guards
/// against a reading that goes backwards by treating the delta as zero.
pub trait Clock {
    /// Current timestamp in seconds
    fn now(&mut self) -> f64;
}

/// Monotonic wall clock, in seconds since the clock was created.
///
/// Backed by `instant::Instant`, so it is unaffected by system clock
/// adjustments and also works on wasm targets.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Replays a fixed sequence of frame deltas.
///
/// The first reading returns the start time; each later reading advances by
/// the next delta. Once the deltas run out, time stands still. Deltas are
/// not validated, so a negative delta can be used to simulate a clock that
/// jumps backwards.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    current: f64,
    deltas: VecDeque<f64>,
    started: bool,
}

impl ScriptedClock {
    /// Clock starting at zero
    pub fn new(deltas: impl IntoIterator<Item = f64>) -> Self {
        Self::starting_at(0.0, deltas)
    }

    pub fn starting_at(start: f64, deltas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            current: start,
            deltas: deltas.into_iter().collect(),
            started: false,
        }
    }

    /// Number of deltas not yet consumed
    pub fn remaining(&self) -> usize {
        self.deltas.len()
    }
}

impl Clock for ScriptedClock {
    fn now(&mut self) -> f64 {
        if !self.started {
            self.started = true;
            return self.current;
        }
        if let Some(delta) = self.deltas.pop_front() {
            self.current += delta;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_non_decreasing() {
        let mut clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn test_scripted_first_reading_is_start() {
        let mut clock = ScriptedClock::starting_at(5.0, [0.5, 0.25]);
        assert_eq!(clock.now(), 5.0);
        assert_eq!(clock.remaining(), 2);
        assert_eq!(clock.now(), 5.5);
        assert_eq!(clock.now(), 5.75);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn test_scripted_stands_still_when_exhausted() {
        let mut clock = ScriptedClock::new([1.0]);
        clock.now();
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.now(), 1.0);
    }

    #[test]
    fn test_scripted_allows_backwards_jump() {
        let mut clock = ScriptedClock::new([1.0, -0.5]);
        clock.now();
        assert_eq!(clock.now(), 1.0);
        assert_eq!(clock.now(), 0.5);
    }
}
