use std::ops::ControlFlow;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Widget};

use super::text::{clip_to_width, display_width_of_char_prefix};
use super::{TerminalSession, TerminalSessionError, Theme, centered_rect, dialog_block};

const PROMPT_HEIGHT: u16 = 5;

/// Single-line text entry; `hidden` masks the echo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptState {
	value:  String,
	hidden: bool,
}

impl PromptState {
	pub fn new(hidden: bool) -> Self {
		Self { value: String::new(), hidden }
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	/// Enter accepts the trimmed value; Esc accepts an empty one.
	pub fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow<String> {
		match key.code {
			KeyCode::Enter => return ControlFlow::Break(self.value.trim().to_string()),
			KeyCode::Esc => return ControlFlow::Break(String::new()),
			KeyCode::Backspace => {
				self.value.pop();
			}
			KeyCode::Char(ch)
				if !ch.is_control() && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
			{
				self.value.push(ch);
			}
			_ => {}
		}
		ControlFlow::Continue(())
	}

	fn display(&self) -> String {
		if self.hidden { "*".repeat(self.value.chars().count()) } else { self.value.clone() }
	}
}

pub struct PromptWidget<'a> {
	prompt: &'a str,
	state:  &'a PromptState,
	theme:  &'a Theme,
}

impl<'a> PromptWidget<'a> {
	pub fn new(prompt: &'a str, state: &'a PromptState, theme: &'a Theme) -> Self {
		Self { prompt, state, theme }
	}

	fn dialog_rect(area: Rect) -> Rect {
		let width = 100u16.min(40u16.max(area.width.saturating_sub(6)));
		centered_rect(area, width, PROMPT_HEIGHT)
	}

	/// Where the terminal cursor sits: right after the echoed text.
	pub fn cursor_position(&self, area: Rect) -> Position {
		let rect = Self::dialog_rect(area);
		let text_width = rect.width.saturating_sub(4) as usize;
		let display = self.state.display();
		let offset = display_width_of_char_prefix(&display, display.chars().count()).min(text_width);
		Position::new(rect.x.saturating_add(2).saturating_add(offset as u16), rect.y.saturating_add(2))
	}
}

impl Widget for PromptWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let rect = Self::dialog_rect(area);
		Clear.render(rect, buf);
		dialog_block(self.prompt, self.theme).render(rect, buf);

		let text_width = rect.width.saturating_sub(4);
		let input_rect = Rect { x: rect.x.saturating_add(2), y: rect.y.saturating_add(2), width: text_width, height: 1 };
		Paragraph::new(Line::raw(clip_to_width(&self.state.display(), text_width as usize))).render(input_rect, buf);
	}
}

/// Asks for one line of input. Esc yields an empty string.
pub fn ask(session: &mut TerminalSession, prompt: &str, hidden: bool) -> Result<String, TerminalSessionError> {
	let mut state = PromptState::new(hidden);
	loop {
		session.draw(|frame, theme| {
			let widget = PromptWidget::new(prompt, &state, theme);
			let cursor = widget.cursor_position(frame.area());
			frame.render_widget(widget, frame.area());
			frame.set_cursor_position(cursor);
		})?;
		if let Event::Key(key) = session.next_event()?
			&& let ControlFlow::Break(value) = state.handle_key(&key)
		{
			return Ok(value);
		}
	}
}
