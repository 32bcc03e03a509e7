mod editor_view;
mod menu;
mod message_box;
mod prompt;
mod reader;
mod terminal_session;
mod text;
mod theme;

use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

pub use editor_view::{EditorWidget, run_editor};
pub use menu::{MenuState, MenuWidget, choose};
pub use message_box::{MessageBoxWidget, show_message};
pub use prompt::{PromptState, PromptWidget, ask};
pub use reader::{ReaderState, ReaderWidget, show_reader};
pub use terminal_session::{TerminalSession, TerminalSessionError};
pub use theme::Theme;

/// Bordered box with the title set into the top edge.
fn dialog_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
	let block = Block::default().borders(Borders::ALL);
	if title.is_empty() {
		return block;
	}
	block.title(Span::styled(format!(" {} ", title.trim()), theme.title))
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
