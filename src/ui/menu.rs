use std::ops::ControlFlow;

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::text::clip_to_width;
use super::{TerminalSession, TerminalSessionError, Theme, dialog_block};

/// Cursor over a fixed list of entries; Up/Down wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
	selected: usize,
	len:      usize,
}

impl MenuState {
	pub fn new(len: usize) -> Self {
		Self { selected: 0, len: len.max(1) }
	}

	pub fn selected(&self) -> usize {
		self.selected
	}

	pub fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow<usize> {
		match key.code {
			KeyCode::Up => self.selected = (self.selected + self.len - 1) % self.len,
			KeyCode::Down => self.selected = (self.selected + 1) % self.len,
			KeyCode::Enter => return ControlFlow::Break(self.selected),
			_ => {}
		}
		ControlFlow::Continue(())
	}
}

pub struct MenuWidget<'a> {
	title:   &'a str,
	options: &'a [&'a str],
	state:   MenuState,
	theme:   &'a Theme,
}

impl<'a> MenuWidget<'a> {
	pub fn new(title: &'a str, options: &'a [&'a str], state: MenuState, theme: &'a Theme) -> Self {
		Self { title, options, state, theme }
	}
}

impl Widget for MenuWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		dialog_block(self.title, self.theme).render(area, buf);

		let list_rect = Rect {
			x:      area.x.saturating_add(4),
			y:      area.y.saturating_add(2),
			width:  area.width.saturating_sub(8),
			height: area.height.saturating_sub(3),
		};
		let lines = self
			.options
			.iter()
			.enumerate()
			.map(|(idx, option)| {
				let text = clip_to_width(option, list_rect.width as usize);
				if idx == self.state.selected() {
					Line::from(Span::styled(format!("> {}", text), self.theme.highlight))
				} else {
					Line::raw(format!("  {}", text))
				}
			})
			.collect::<Vec<_>>();
		Paragraph::new(lines).render(list_rect, buf);
	}
}

/// Lets the user pick one of `options`; returns its index.
pub fn choose(session: &mut TerminalSession, title: &str, options: &[&str]) -> Result<usize, TerminalSessionError> {
	let mut state = MenuState::new(options.len());
	loop {
		session.draw(|frame, theme| {
			frame.render_widget(MenuWidget::new(title, options, state, theme), frame.area());
		})?;
		if let Event::Key(key) = session.next_event()?
			&& let ControlFlow::Break(index) = state.handle_key(&key)
		{
			return Ok(index);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::ops::ControlFlow;

	use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::MenuState;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn selection_wraps_in_both_directions() {
		let mut state = MenuState::new(3);
		state.handle_key(&key(KeyCode::Up));
		assert_eq!(state.selected(), 2);
		state.handle_key(&key(KeyCode::Down));
		assert_eq!(state.selected(), 0);
		state.handle_key(&key(KeyCode::Down));
		assert_eq!(state.handle_key(&key(KeyCode::Enter)), ControlFlow::Break(1));
	}

	#[test]
	fn other_keys_do_nothing() {
		let mut state = MenuState::new(3);
		assert_eq!(state.handle_key(&key(KeyCode::Char('q'))), ControlFlow::Continue(()));
		assert_eq!(state.selected(), 0);
	}
}
