use nte_keymap::{message::KeymapMessage, MessageResolver};
use ratatui::prelude::Rect;

use crate::{
    action::Action,
    event::Event,
    model::{Model, SessionState},
};

mod buffer;
pub mod viewport;

#[tracing::instrument(skip(model, resolver))]
pub fn update_model(model: &mut Model, resolver: &MessageResolver, event: Event) -> Vec<Action> {
    match model.state {
        SessionState::ConfirmingExit => confirm_exit(model, resolver, event),
        SessionState::Running => match event {
            Event::Key(key) => match resolver.resolve(&key) {
                Some(message) => update_with_keymap_message(model, message),
                None => {
                    tracing::trace!("ignoring unbound key: {}", key);
                    Vec::new()
                }
            },
            Event::Resize(x, y) => {
                viewport::set_size(model, Rect::new(0, 0, x, y));
                Vec::new()
            }
            Event::Ignored => Vec::new(),
        },
        SessionState::Terminated => {
            tracing::warn!("received event after termination: {:?}", event);
            Vec::new()
        }
    }
}

fn confirm_exit(model: &mut Model, resolver: &MessageResolver, event: Event) -> Vec<Action> {
    model.state = match &event {
        Event::Key(key) if resolver.resolve(key) == Some(KeymapMessage::ConfirmQuit) => {
            SessionState::Terminated
        }
        Event::Resize(x, y) => {
            viewport::set_size(model, Rect::new(0, 0, *x, *y));
            SessionState::Running
        }
        Event::Key(_) | Event::Ignored => SessionState::Running,
    };

    tracing::debug!("exit prompt answered with {:?}: {:?}", event, model.state);

    Vec::new()
}

fn update_with_keymap_message(model: &mut Model, message: KeymapMessage) -> Vec<Action> {
    match message {
        KeymapMessage::Buffer(message) => {
            buffer::update(model, &message);
            Vec::new()
        }
        KeymapMessage::ConfirmQuit => {
            model.state = SessionState::ConfirmingExit;
            Vec::new()
        }
        KeymapMessage::Quit => {
            model.state = SessionState::Terminated;
            Vec::new()
        }
        KeymapMessage::Save => vec![Action::Save],
    }
}
