use nte_keymap::MessageResolver;
use ratatui::backend::Backend;

use crate::{
    error::AppError,
    model::{Model, SessionState},
    terminal::TerminalWrapper,
};

mod commandline;
mod statusline;

pub fn render_model<B: Backend>(
    terminal: &mut TerminalWrapper<B>,
    model: &Model,
    resolver: &MessageResolver,
) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = model.layout.clone();

        statusline::view(model, frame, layout.statusline);
        nte_buffer::view(&model.viewport, &model.buffer, frame, layout.buffer);

        if model.state == SessionState::ConfirmingExit {
            commandline::view(model, resolver, frame);
        }
    })
}
