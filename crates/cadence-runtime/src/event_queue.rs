//! Event sources and a FIFO event queue

use std::collections::VecDeque;

/// Non-blocking source of pending input events.
///
/// `poll_event` returns `None` once nothing more is pending for this frame;
/// that is the normal end-of-poll signal, not an error.
pub trait EventSource {
    type Event;

    fn poll_event(&mut self) -> Option<Self::Event>;
}

/// A simple event queue that producers push to and the loop drains in
/// arrival order
#[derive(Debug, Clone)]
pub struct EventQueue<E> {
    events: VecDeque<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Push an event onto the back of the queue
    pub fn push(&mut self, event: E) {
        self.events.push_back(event);
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<E> Extend<E> for EventQueue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl<E> FromIterator<E> for EventQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<E> EventSource for EventQueue<E> {
    type Event = E;

    fn poll_event(&mut self) -> Option<E> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_poll() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.push("jump");
        queue.push("fire");

        assert_eq!(queue.len(), 2);
        assert!(!queue.is_empty());

        assert_eq!(queue.poll_event(), Some("jump"));
        assert_eq!(queue.poll_event(), Some("fire"));
        assert_eq!(queue.poll_event(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_exhausted_queue_keeps_returning_none() {
        let mut queue: EventQueue<u32> = EventQueue::new();
        assert_eq!(queue.poll_event(), None);
        assert_eq!(queue.poll_event(), None);

        queue.push(7);
        assert_eq!(queue.poll_event(), Some(7));
        assert_eq!(queue.poll_event(), None);
    }

    #[test]
    fn test_collect_and_extend_preserve_order() {
        let mut queue: EventQueue<char> = ['a', 'b'].into_iter().collect();
        queue.extend(['c', 'd']);

        let drained: Vec<char> = std::iter::from_fn(|| queue.poll_event()).collect();
        assert_eq!(drained, vec!['a', 'b', 'c', 'd']);
    }
}
