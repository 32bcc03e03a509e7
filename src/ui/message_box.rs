use crossterm::event::Event;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use super::text::clip_to_width;
use super::{TerminalSession, TerminalSessionError, Theme, centered_rect, dialog_block};
use crate::codec::unescape_from_wire;

const FOOTER: &str = "Press any key to continue...";

/// Centered modal with a title, a multi-line body and a continue hint.
pub struct MessageBoxWidget<'a> {
	title: &'a str,
	body:  &'a str,
	theme: &'a Theme,
}

impl<'a> MessageBoxWidget<'a> {
	pub fn new(title: &'a str, body: &'a str, theme: &'a Theme) -> Self {
		Self { title, body, theme }
	}

	fn dialog_rect(area: Rect) -> Rect {
		let height = 20u16.min(8u16.max(area.height.saturating_sub(4)));
		let width = 100u16.min(40u16.max(area.width.saturating_sub(6)));
		centered_rect(area, width, height)
	}
}

impl Widget for MessageBoxWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let rect = Self::dialog_rect(area);
		Clear.render(rect, buf);
		dialog_block(self.title, self.theme).render(rect, buf);

		let text_width = rect.width.saturating_sub(4) as usize;
		let body_rows = rect.height.saturating_sub(4) as usize;
		let body = unescape_from_wire(self.body);
		let lines = body
			.split('\n')
			.take(body_rows)
			.map(|line| Line::raw(clip_to_width(line, text_width)))
			.collect::<Vec<_>>();
		let body_rect = Rect {
			x:      rect.x.saturating_add(2),
			y:      rect.y.saturating_add(2),
			width:  rect.width.saturating_sub(4),
			height: body_rows as u16,
		};
		Paragraph::new(lines).render(body_rect, buf);

		if rect.height >= 3 {
			let footer_rect = Rect {
				x:      rect.x.saturating_add(2),
				y:      rect.y + rect.height - 2,
				width:  rect.width.saturating_sub(4),
				height: 1,
			};
			Paragraph::new(Line::from(Span::styled(FOOTER, self.theme.info))).render(footer_rect, buf);
		}
	}
}

/// Shows a modal message and waits for any key.
pub fn show_message(
	session: &mut TerminalSession,
	title: &str,
	body: &str,
) -> Result<(), TerminalSessionError> {
	loop {
		session.draw(|frame, theme| {
			frame.render_widget(MessageBoxWidget::new(title, body, theme), frame.area());
		})?;
		if let Event::Key(_) = session.next_event()? {
			return Ok(());
		}
	}
}
