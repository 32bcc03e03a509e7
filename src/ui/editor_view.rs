use std::ops::ControlFlow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};
use tracing::info;

use super::text::{clip_to_width, display_width_of_char_prefix};
use super::{TerminalSession, TerminalSessionError, Theme, dialog_block};
use crate::state::{EditSession, EditorGeometry, SessionButton, SessionMode};

const EDITING_HINT: &str = "ENTER: Save | ESC: Cancel | Ctrl-J: New line | TAB: Buttons";
const BUTTON_HINT: &str = "LEFT/RIGHT: Switch | ENTER: Select | ESC: Back to editing";
const CANCEL_BUTTON_OFFSET: u16 = 10;

pub struct EditorWidget<'a> {
	path:    &'a str,
	session: &'a EditSession,
	theme:   &'a Theme,
}

impl<'a> EditorWidget<'a> {
	pub fn new(path: &'a str, session: &'a EditSession, theme: &'a Theme) -> Self {
		Self { path, session, theme }
	}

	/// Terminal cursor for the text area; `None` while the buttons hold focus.
	pub fn cursor_position(&self, area: Rect) -> Option<Position> {
		if self.session.mode() != SessionMode::Editing {
			return None;
		}
		let window = self.session.geometry().window.intersection(area);
		if window.width < 4 || window.height < 4 {
			return None;
		}
		let cursor = self.session.cursor();
		let row_offset = cursor.row.checked_sub(self.session.viewport().scroll())?;
		let line = self.session.buffer().lines().get(cursor.row)?;
		let col_offset = display_width_of_char_prefix(line, cursor.col) as u16;
		let x = (window.x + 2).saturating_add(col_offset).min(window.x + window.width - 3);
		let y = window.y + 2 + row_offset as u16;
		Some(Position::new(x, y))
	}

	fn button(&self, label: &str, button: SessionButton) -> Span<'static> {
		let style = if self.session.mode() == SessionMode::ButtonFocus(button) {
			self.theme.highlight
		} else {
			Style::default()
		};
		Span::styled(format!("[{}]", label), style)
	}
}

impl Widget for EditorWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let geometry = self.session.geometry();
		let window = geometry.window.intersection(area);
		if window.width < 4 || window.height < 4 {
			return;
		}
		Clear.render(window, buf);
		let title = format!("Editing: {}", self.path);
		dialog_block(&title, self.theme).render(window, buf);

		let buffer = self.session.buffer();
		let rows = self.session.viewport().visible_rows(buffer.line_count());
		let text_width = geometry.max_width();
		let lines = buffer.lines()[rows].iter().map(|line| Line::raw(clip_to_width(line, text_width))).collect::<Vec<_>>();
		let text_rect = Rect {
			x:      window.x + 2,
			y:      window.y + 2,
			width:  window.width - 2,
			height: geometry.visible_height().min(window.height.saturating_sub(2) as usize) as u16,
		};
		Paragraph::new(lines).render(text_rect, buf);

		let button_y = window.y + window.height - 3;
		let save_rect = Rect { x: window.x + 2, y: button_y, width: CANCEL_BUTTON_OFFSET, height: 1 };
		Paragraph::new(Line::from(self.button("Save", SessionButton::Save))).render(save_rect, buf);
		let cancel_rect = Rect {
			x:     (window.x + 2 + CANCEL_BUTTON_OFFSET).min(window.x + window.width - 1),
			width: window.width.saturating_sub(3 + CANCEL_BUTTON_OFFSET),
			..save_rect
		};
		Paragraph::new(Line::from(self.button("Cancel", SessionButton::Cancel))).render(cancel_rect, buf);

		let hint = match self.session.mode() {
			SessionMode::Editing => EDITING_HINT,
			SessionMode::ButtonFocus(_) => BUTTON_HINT,
		};
		let hint_rect = Rect { x: window.x + 2, y: window.y + window.height - 2, width: window.width - 3, height: 1 };
		Paragraph::new(Line::from(Span::styled(hint, self.theme.info))).render(hint_rect, buf);
	}
}

/// Runs one edit session over `content`.
///
/// Returns the flattened buffer on save and `None` on cancel.
pub fn run_editor(
	session: &mut TerminalSession,
	path: &str,
	content: &str,
) -> Result<Option<String>, TerminalSessionError> {
	let (width, height) = session.size()?;
	let mut edit = EditSession::new(content, EditorGeometry::from_terminal(width, height));
	loop {
		session.draw(|frame, theme| {
			let widget = EditorWidget::new(path, &edit, theme);
			let cursor = widget.cursor_position(frame.area());
			frame.render_widget(widget, frame.area());
			if let Some(cursor) = cursor {
				frame.set_cursor_position(cursor);
			}
		})?;
		let event = session.next_event()?;
		if let ControlFlow::Break(exit) = edit.handle_event(&event) {
			info!(?exit, path, "edit session finished");
			return Ok(edit.finish(exit));
		}
	}
}
