use crossterm::event;
use nte_keymap::{conversion, key::Key};

use crate::error::AppError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Key(Key),
    Resize(u16, u16),
    Ignored,
}

/// Blocking source of input events. An `Err` is a terminal reported failure and
/// ends the session.
pub trait EventSource {
    fn next_event(&mut self) -> Result<Event, AppError>;
}

#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Event, AppError> {
        let event = event::read().map_err(AppError::TerminalEventFailed)?;
        Ok(to_event(&event))
    }
}

fn to_event(event: &event::Event) -> Event {
    match event {
        event::Event::Key(key) => match conversion::to_key(key) {
            Some(key) => Event::Key(key),
            None => Event::Ignored,
        },
        event::Event::Resize(x, y) => Event::Resize(*x, *y),
        _ => Event::Ignored,
    }
}
