use ratatui::style::{Color, Modifier, Style};

/// Styles shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub highlight: Style,
	pub title:     Style,
	pub info:      Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			highlight: Style::default().fg(Color::Black).bg(Color::Cyan),
			title:     Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			info:      Style::default().fg(Color::Green),
		}
	}
}
