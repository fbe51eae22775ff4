use nte_buffer::model::{viewport::ViewPort, TextBuffer};

use crate::{layout::AppLayout, settings::Settings};

#[derive(Debug)]
pub struct Model {
    pub buffer: TextBuffer,
    pub layout: AppLayout,
    pub modified: bool,
    pub settings: Settings,
    pub state: SessionState,
    pub viewport: ViewPort,
}

impl Model {
    pub fn new(settings: Settings, lines: Vec<String>) -> Self {
        Self {
            buffer: TextBuffer::from_lines(lines),
            layout: AppLayout::default(),
            modified: false,
            settings,
            state: SessionState::default(),
            viewport: ViewPort::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SessionState {
    /// Waiting for the single event that answers the exit prompt.
    ConfirmingExit,
    #[default]
    Running,
    Terminated,
}
