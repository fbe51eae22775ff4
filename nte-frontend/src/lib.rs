use error::AppError;
use event::{CrosstermEventSource, EventSource};
use model::{Model, SessionState};
use nte_keymap::MessageResolver;
use ratatui::backend::Backend;
use settings::Settings;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
pub mod event;
pub mod file;
mod layout;
pub mod model;
pub mod settings;
pub mod terminal;
mod update;
mod view;

pub fn run(settings: Settings, lines: Vec<String>) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut events = CrosstermEventSource;
    let mut model = Model::new(settings, lines);

    let result = run_session(&mut terminal, &mut events, &mut model);
    let shutdown = terminal.shutdown();

    result.and(shutdown)
}

/// Drives render, wait for event, update and action execution until the session
/// terminates. Errors from the event source, the terminal or a save end the loop.
pub fn run_session<B: Backend, E: EventSource>(
    terminal: &mut TerminalWrapper<B>,
    events: &mut E,
    model: &mut Model,
) -> Result<(), AppError> {
    tracing::debug!("starting session for {:?}", model.settings.path);

    let resolver = MessageResolver::new(model.settings.keymap.clone());
    update::viewport::set_size(model, terminal.size()?);

    while model.state != SessionState::Terminated {
        render_model(terminal, model, &resolver)?;

        let event = match events.next_event() {
            Ok(it) => it,
            Err(err) => {
                tracing::error!("reading event failed: {:?}", err);
                return Err(err);
            }
        };

        let actions = update_model(model, &resolver, event);
        action::exec(model, actions)?;
    }

    tracing::debug!("session terminated, modified: {}", model.modified);

    Ok(())
}
