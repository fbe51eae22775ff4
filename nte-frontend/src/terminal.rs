use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Frame, Terminal,
};

use crate::error::AppError;

/// Owns the terminal for the length of a session. Raw mode and the alternate
/// screen are released on `shutdown` or, on early returns, on drop.
pub struct TerminalWrapper<B: Backend> {
    inner: Option<Terminal<B>>,
    raw_mode: bool,
}

impl TerminalWrapper<CrosstermBackend<BufWriter<Stderr>>> {
    pub fn start() -> Result<Self, AppError> {
        stderr()
            .execute(EnterAlternateScreen)
            .map_err(AppError::TerminalOperationFailed)?;

        let mut result = Self {
            inner: None,
            raw_mode: true,
        };

        terminal::enable_raw_mode().map_err(AppError::TerminalOperationFailed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))
            .map_err(AppError::TerminalOperationFailed)?;
        terminal.clear().map_err(AppError::TerminalOperationFailed)?;

        result.inner = Some(terminal);

        Ok(result)
    }
}

impl<B: Backend> TerminalWrapper<B> {
    /// Wraps a backend without touching the tty, used for rendering off screen.
    pub fn headless(backend: B) -> Result<Self, AppError> {
        let terminal = Terminal::new(backend).map_err(AppError::TerminalOperationFailed)?;

        Ok(Self {
            inner: Some(terminal),
            raw_mode: false,
        })
    }

    pub fn backend(&self) -> Option<&B> {
        self.inner.as_ref().map(Terminal::backend)
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        self.inner = None;

        if self.raw_mode {
            self.raw_mode = false;
            stop()
        } else {
            Ok(())
        }
    }

    pub fn size(&self) -> Result<Rect, AppError> {
        if let Some(term) = &self.inner {
            let size = term.size().map_err(AppError::TerminalOperationFailed)?;
            Ok(Rect::new(0, 0, size.width, size.height))
        } else {
            Err(AppError::TerminalNotInitialized)
        }
    }

    pub fn draw(&mut self, layout: impl FnOnce(&mut Frame<'_>)) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            if let Err(err) = term.draw(layout) {
                return Err(AppError::TerminalOperationFailed(err));
            }

            Ok(())
        } else {
            Err(AppError::TerminalNotInitialized)
        }
    }
}

impl<B: Backend> Drop for TerminalWrapper<B> {
    fn drop(&mut self) {
        if self.raw_mode {
            self.inner = None;
            if let Err(error) = stop() {
                tracing::error!("restoring terminal failed: {:?}", error);
            }
        }
    }
}

fn stop() -> Result<(), AppError> {
    terminal::disable_raw_mode().map_err(AppError::TerminalOperationFailed)?;
    stderr()
        .execute(LeaveAlternateScreen)
        .map_err(AppError::TerminalOperationFailed)?;

    Ok(())
}
