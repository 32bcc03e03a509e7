use ratatui::layout::Rect;

const WINDOW_ORIGIN: u16 = 2;
const MAX_WINDOW_WIDTH: u16 = 120;
const MIN_WINDOW_HEIGHT: u16 = 12;
/// Border, padding and the button/hint rows around the text area.
const TEXT_MARGIN: u16 = 6;

/// Placement of the editor and viewer window for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorGeometry {
	pub window: Rect,
}

impl EditorGeometry {
	pub fn from_terminal(width: u16, height: u16) -> Self {
		let window_height = height.saturating_sub(4).min(MIN_WINDOW_HEIGHT.max(height.saturating_sub(6)));
		let window_width = MAX_WINDOW_WIDTH.min(width.saturating_sub(4));
		Self { window: Rect::new(WINDOW_ORIGIN, WINDOW_ORIGIN, window_width, window_height) }
	}

	/// Characters per display line.
	pub fn max_width(&self) -> usize {
		self.window.width.saturating_sub(TEXT_MARGIN).max(1) as usize
	}

	/// Rows of text shown at once.
	pub fn visible_height(&self) -> usize {
		self.window.height.saturating_sub(TEXT_MARGIN).max(1) as usize
	}
}
