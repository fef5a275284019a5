//! Event sources
//!
//! The run loop pulls terminal events through [`EventSource`] so tests can
//! substitute a scripted sequence for the real terminal.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::time::Duration;

pub trait EventSource {
    /// Wait up to `timeout` for the next event
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Events from the controlling terminal
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// A fixed sequence of events, followed by Ctrl+Q so the loop ends
pub struct ScriptedEvents {
    events: VecDeque<Event>,
    finished: bool,
}

impl ScriptedEvents {
    pub fn new<I: IntoIterator<Item = Event>>(events: I) -> Self {
        Self {
            events: events.into_iter().collect(),
            finished: false,
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if let Some(event) = self.events.pop_front() {
            return Ok(Some(event));
        }
        if self.finished {
            return Ok(None);
        }
        self.finished = true;
        Ok(Some(Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_events_end_with_quit() {
        let mut source = ScriptedEvents::new(vec![Event::Paste("/tmp/a.txt".to_string())]);
        let timeout = Duration::from_millis(0);

        assert_eq!(
            source.poll_event(timeout).unwrap(),
            Some(Event::Paste("/tmp/a.txt".to_string()))
        );
        assert!(matches!(
            source.poll_event(timeout).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }))
        ));
        assert_eq!(source.poll_event(timeout).unwrap(), None);
    }
}
