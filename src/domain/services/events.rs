#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

fn key_event(input: Input) -> Event {
    match input {
        Input { key: Key::Up, .. } => return Event::UIScrollUp(),
        Input { key: Key::Down, .. } => return Event::UIScrollDown(),
        Input {
            key: Key::PageUp, ..
        }
        | Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        } => return Event::UIScrollPageUp(),
        Input {
            key: Key::PageDown, ..
        }
        | Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        } => return Event::UIScrollPageDown(),
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => return Event::KeyboardCTRLC(),
        // Alt+Enter falls through to the textarea as a newline.
        Input {
            key: Key::Enter,
            alt: false,
            ..
        } => return Event::KeyboardEnter(),
        input => return Event::KeyboardCharInput(input),
    }
}

/// Maps a terminal event to an app event. Mouse events other than the wheel
/// are dropped.
fn terminal_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(keyevent) => return Some(key_event(keyevent.into())),
        CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
        CrosstermEvent::Resize(_, _) => return Some(Event::UIResize()),
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => return Some(Event::UIScrollUp()),
            MouseEventKind::ScrollDown => return Some(Event::UIScrollDown()),
            _ => return None,
        },
        _ => return None,
    }
}

pub struct EventsService {
    terminal_events: EventStream,
    backend_events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(backend_events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            terminal_events: EventStream::new(),
            backend_events,
        };
    }

    /// Waits for the next backend response or terminal event.
    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.backend_events.recv() => event,
                event = self.terminal_events.next() => match event {
                    Some(Ok(event)) => terminal_event(event),
                    Some(Err(_)) | None => None,
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
