use super::WrappedBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
	pub row: usize,
	pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Left,
	Right,
	Up,
	Down,
}

impl CursorState {
	/// Moves one step; horizontal moves cross line boundaries so wrapped
	/// fragments read as one continuous document.
	pub fn moved(self, direction: Direction, buffer: &WrappedBuffer) -> Self {
		let Self { row, col } = self;
		match direction {
			Direction::Left if col > 0 => Self { row, col: col - 1 },
			Direction::Left if row > 0 => Self { row: row - 1, col: buffer.line_len(row - 1) },
			Direction::Right if col < buffer.line_len(row) => Self { row, col: col + 1 },
			Direction::Right if row + 1 < buffer.line_count() => Self { row: row + 1, col: 0 },
			Direction::Up if row > 0 => Self { row: row - 1, col: col.min(buffer.line_len(row - 1)) },
			Direction::Down if row + 1 < buffer.line_count() => {
				Self { row: row + 1, col: col.min(buffer.line_len(row + 1)) }
			}
			_ => self,
		}
	}

	pub fn is_within(&self, buffer: &WrappedBuffer) -> bool {
		self.row < buffer.line_count() && self.col <= buffer.line_len(self.row)
	}
}

/// Vertical window over the buffer's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	scroll:         usize,
	visible_height: usize,
}

impl Viewport {
	pub fn new(visible_height: usize) -> Self {
		Self { scroll: 0, visible_height: visible_height.max(1) }
	}

	pub fn scroll(&self) -> usize {
		self.scroll
	}

	pub fn visible_height(&self) -> usize {
		self.visible_height
	}

	pub fn contains(&self, row: usize) -> bool {
		self.scroll <= row && row < self.scroll + self.visible_height
	}

	/// Visible row range for a buffer of `line_count` rows.
	pub fn visible_rows(&self, line_count: usize) -> std::ops::Range<usize> {
		let start = self.scroll.min(line_count);
		start..(self.scroll + self.visible_height).min(line_count)
	}

	/// Scrolls just enough to show `row`. A one-row step past either edge
	/// moves the window by exactly one row.
	pub fn follow(&mut self, row: usize, line_count: usize) {
		if row < self.scroll {
			self.scroll = row;
		} else if row >= self.scroll + self.visible_height {
			self.scroll = row + 1 - self.visible_height;
		}
		self.scroll = self.scroll.min(self.max_scroll(line_count));
	}

	/// Applies a new height, then clamps the offset into
	/// `[0, max(0, line_count - visible_height)]` and brings `row` back into view.
	pub fn resize(&mut self, visible_height: usize, row: usize, line_count: usize) {
		self.visible_height = visible_height.max(1);
		self.scroll = self.scroll.min(self.max_scroll(line_count));
		self.follow(row, line_count);
	}

	/// Moves the window without a cursor, as the read-only viewer does.
	pub fn scroll_by(&mut self, delta: isize, line_count: usize) {
		self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll(line_count));
	}

	fn max_scroll(&self, line_count: usize) -> usize {
		line_count.saturating_sub(self.visible_height)
	}
}
