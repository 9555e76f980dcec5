//! Presentation sink and a headless host

use std::time::Duration;

use cadence_core::{CadenceError, Result};
use instant::Instant;

use crate::event_queue::{EventQueue, EventSource};

/// Shows the frame the game just rendered.
///
/// Called once per loop iteration, after `render`. This is the only call in
/// the loop allowed to block, e.g. to wait for vertical sync.
pub trait Present {
    fn present(&mut self) -> Result<()>;
}

/// A host with no window: events come from an in-memory queue and
/// presenting only counts frames, optionally pacing them to a refresh rate.
#[derive(Debug)]
pub struct HeadlessHost<E> {
    events: EventQueue<E>,
    frames_presented: u64,
    frame_interval: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl<E> Default for HeadlessHost<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> HeadlessHost<E> {
    /// Host that presents as fast as the loop runs
    pub fn new() -> Self {
        Self {
            events: EventQueue::new(),
            frames_presented: 0,
            frame_interval: None,
            next_deadline: None,
        }
    }

    /// Host whose `present` blocks until the next refresh at `hz`, the way a
    /// vsync'd swap chain would.
    pub fn with_refresh_rate(hz: f64) -> Result<Self> {
        if !hz.is_finite() || hz <= 0.0 {
            return Err(CadenceError::ConfigError(format!(
                "refresh rate must be a positive number of Hz, got {hz}"
            )));
        }
        let interval = Duration::try_from_secs_f64(1.0 / hz).map_err(|e| {
            CadenceError::ConfigError(format!("refresh rate {hz} Hz is too low: {e}"))
        })?;
        Ok(Self {
            frame_interval: Some(interval),
            ..Self::new()
        })
    }

    /// Queue an event for the next poll
    pub fn push_event(&mut self, event: E) {
        self.events.push(event);
    }

    pub fn events_mut(&mut self) -> &mut EventQueue<E> {
        &mut self.events
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn wait_for_refresh(&mut self, interval: Duration) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + interval);
        } else {
            // Missed the refresh; resync instead of trying to catch up
            self.next_deadline = Some(now + interval);
        }
    }
}

impl<E> EventSource for HeadlessHost<E> {
    type Event = E;

    fn poll_event(&mut self) -> Option<E> {
        self.events.poll_event()
    }
}

impl<E> Present for HeadlessHost<E> {
    fn present(&mut self) -> Result<()> {
        if let Some(interval) = self.frame_interval {
            self.wait_for_refresh(interval);
        }
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaced_present_counts_frames() {
        let mut host: HeadlessHost<()> = HeadlessHost::new();
        for _ in 0..3 {
            host.present().unwrap();
        }
        assert_eq!(host.frames_presented(), 3);
    }

    #[test]
    fn test_events_poll_in_order() {
        let mut host = HeadlessHost::new();
        host.push_event(1);
        host.events_mut().push(2);
        assert_eq!(host.poll_event(), Some(1));
        assert_eq!(host.poll_event(), Some(2));
        assert_eq!(host.poll_event(), None);
    }

    #[test]
    fn test_paced_present_blocks_between_frames() {
        let mut host: HeadlessHost<()> = HeadlessHost::with_refresh_rate(100.0).unwrap();
        let start = Instant::now();
        // First present does not wait; the next two wait ~10ms each
        for _ in 0..3 {
            host.present().unwrap();
        }
        assert!(start.elapsed() >= Duration::from_millis(19));
        assert_eq!(host.frames_presented(), 3);
    }

    #[test]
    fn test_rejects_invalid_refresh_rate() {
        assert!(HeadlessHost::<()>::with_refresh_rate(0.0).is_err());
        assert!(HeadlessHost::<()>::with_refresh_rate(-60.0).is_err());
        assert!(HeadlessHost::<()>::with_refresh_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_refresh_rate_with_unrepresentable_interval() {
        let err = HeadlessHost::<()>::with_refresh_rate(1e-20).unwrap_err();
        assert!(matches!(err, CadenceError::ConfigError(_)));
        assert!(err.to_string().contains("too low"));
    }
}
