use std::io;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use super::Theme;

#[derive(Debug, Error)]
pub enum TerminalSessionError {
	#[error("enable raw mode failed")]
	EnableRawMode {
		#[source]
		source: io::Error,
	},
	#[error("enter alternate screen failed")]
	EnterAlternateScreen {
		#[source]
		source: io::Error,
	},
	#[error("create terminal backend failed")]
	CreateTerminal {
		#[source]
		source: io::Error,
	},
	#[error("terminal draw failed")]
	Draw {
		#[source]
		source: io::Error,
	},
	#[error("read terminal event failed")]
	ReadEvent {
		#[source]
		source: io::Error,
	},
	#[error("query terminal size failed")]
	Size {
		#[source]
		source: io::Error,
	},
}

/// Restores the terminal on every exit path, including panics and early returns.
struct TerminalModeGuard;

impl Drop for TerminalModeGuard {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
		let mut stdout = io::stdout();
		let _ = execute!(stdout, Show, LeaveAlternateScreen);
	}
}

/// Render context for the whole program run.
///
/// Created once at startup and handed to every screen; dropping it leaves
/// the alternate screen, turns raw mode off and shows the cursor again.
pub struct TerminalSession {
	terminal:    Terminal<CrosstermBackend<io::Stdout>>,
	theme:       Theme,
	_mode_guard: TerminalModeGuard,
}

impl TerminalSession {
	pub fn enter(title: &str) -> Result<Self, TerminalSessionError> {
		enable_raw_mode().map_err(|source| TerminalSessionError::EnableRawMode { source })?;
		let mode_guard = TerminalModeGuard;
		let mut stdout = io::stdout();
		execute!(stdout, EnterAlternateScreen, SetTitle(title))
			.map_err(|source| TerminalSessionError::EnterAlternateScreen { source })?;
		let backend = CrosstermBackend::new(stdout);
		let terminal =
			Terminal::new(backend).map_err(|source| TerminalSessionError::CreateTerminal { source })?;
		Ok(Self { terminal, theme: Theme::default(), _mode_guard: mode_guard })
	}

	/// Draws one frame. The terminal cursor is shown only when `render` places it.
	pub fn draw(
		&mut self,
		render: impl FnOnce(&mut ratatui::Frame<'_>, &Theme),
	) -> Result<(), TerminalSessionError> {
		let theme = &self.theme;
		self.terminal.draw(|frame| render(frame, theme)).map_err(|source| TerminalSessionError::Draw { source })?;
		Ok(())
	}

	/// Blocks until the next key press or resize.
	pub fn next_event(&mut self) -> Result<Event, TerminalSessionError> {
		loop {
			let event = event::read().map_err(|source| TerminalSessionError::ReadEvent { source })?;
			match &event {
				Event::Key(key) if key.kind == KeyEventKind::Release => continue,
				Event::Key(_) | Event::Resize(..) => return Ok(event),
				_ => continue,
			}
		}
	}

	pub fn size(&self) -> Result<(u16, u16), TerminalSessionError> {
		terminal::size().map_err(|source| TerminalSessionError::Size { source })
	}
}
