use std::ops::ControlFlow;

use crossterm::event::{Event, KeyCode};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use super::text::clip_to_width;
use super::{TerminalSession, TerminalSessionError, Theme, dialog_block};
use crate::codec::unescape_from_wire;
use crate::state::{EditorGeometry, Viewport, wrap};

const HINT: &str = "Use UP/DOWN to scroll, ENTER/ESC to close";

/// Read-only view over wrapped file content.
#[derive(Debug, Clone)]
pub struct ReaderState {
	content:  String,
	lines:    Vec<String>,
	viewport: Viewport,
	geometry: EditorGeometry,
}

impl ReaderState {
	/// `content` is wire text; escaped newline markers become real breaks.
	pub fn new(content: &str, geometry: EditorGeometry) -> Self {
		let content = unescape_from_wire(content);
		let lines = wrap(&content, geometry.max_width());
		Self { content, lines, viewport: Viewport::new(geometry.visible_height()), geometry }
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn scroll(&self) -> usize {
		self.viewport.scroll()
	}

	pub fn handle_event(&mut self, event: &Event) -> ControlFlow<()> {
		match event {
			Event::Resize(width, height) => self.resize(EditorGeometry::from_terminal(*width, *height)),
			Event::Key(key) => match key.code {
				KeyCode::Enter | KeyCode::Esc => return ControlFlow::Break(()),
				KeyCode::Up => self.viewport.scroll_by(-1, self.lines.len()),
				KeyCode::Down => self.viewport.scroll_by(1, self.lines.len()),
				_ => {}
			},
			_ => {}
		}
		ControlFlow::Continue(())
	}

	/// Unlike the editor, the viewer owns no edits and simply re-wraps.
	fn resize(&mut self, geometry: EditorGeometry) {
		self.geometry = geometry;
		self.lines = wrap(&self.content, geometry.max_width());
		let top = self.viewport.scroll();
		self.viewport = Viewport::new(geometry.visible_height());
		self.viewport.scroll_by(top as isize, self.lines.len());
	}
}

pub struct ReaderWidget<'a> {
	path:  &'a str,
	state: &'a ReaderState,
	theme: &'a Theme,
}

impl<'a> ReaderWidget<'a> {
	pub fn new(path: &'a str, state: &'a ReaderState, theme: &'a Theme) -> Self {
		Self { path, state, theme }
	}
}

impl Widget for ReaderWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let window = self.state.geometry.window.intersection(area);
		if window.width < 4 || window.height < 4 {
			return;
		}
		Clear.render(window, buf);
		let title = format!("Reading: {} (Read-Only)", self.path);
		dialog_block(&title, self.theme).render(window, buf);

		let text_width = self.state.geometry.max_width();
		let rows = self.state.viewport.visible_rows(self.state.lines.len());
		let lines = self.state.lines[rows].iter().map(|line| Line::raw(clip_to_width(line, text_width))).collect::<Vec<_>>();
		let text_rect = Rect {
			x:      window.x + 2,
			y:      window.y + 2,
			width:  window.width - 2,
			height: window.height.saturating_sub(6),
		};
		Paragraph::new(lines).render(text_rect, buf);

		let button_rect = Rect { x: window.x + 2, y: window.y + window.height - 3, width: window.width - 3, height: 1 };
		Paragraph::new(Line::from(Span::styled("[Close]", self.theme.highlight))).render(button_rect, buf);
		let hint_rect = Rect { y: window.y + window.height - 2, ..button_rect };
		Paragraph::new(Line::from(Span::styled(HINT, self.theme.info))).render(hint_rect, buf);
	}
}

/// Shows `content` read-only until Enter or Esc.
pub fn show_reader(session: &mut TerminalSession, path: &str, content: &str) -> Result<(), TerminalSessionError> {
	let (width, height) = session.size()?;
	let mut state = ReaderState::new(content, EditorGeometry::from_terminal(width, height));
	loop {
		session.draw(|frame, theme| {
			frame.render_widget(ReaderWidget::new(path, &state, theme), frame.area());
		})?;
		if state.handle_event(&session.next_event()?).is_break() {
			return Ok(());
		}
	}
}
