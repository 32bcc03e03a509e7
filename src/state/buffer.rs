use super::CursorState;

/// Hard-wraps `raw_text` into display lines of at most `max_width` characters.
///
/// Explicit `\n` breaks are honored first; every segment is then cut into
/// fixed-size chunks with no word boundary search. Empty segments survive as
/// empty lines, so empty input yields a single empty line.
pub fn wrap(raw_text: &str, max_width: usize) -> Vec<String> {
	let max_width = max_width.max(1);
	let mut lines = Vec::new();
	for segment in raw_text.split('\n') {
		if segment.is_empty() {
			lines.push(String::new());
			continue;
		}
		let chars = segment.chars().collect::<Vec<_>>();
		lines.extend(chars.chunks(max_width).map(|chunk| chunk.iter().collect::<String>()));
	}
	lines
}

/// Editable content as fixed-width display lines.
///
/// Positions are character indices. Every method expects a position that is
/// valid for the current lines; the edit session only issues such calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedBuffer {
	lines:     Vec<String>,
	max_width: usize,
}

impl WrappedBuffer {
	pub fn new(raw_text: &str, max_width: usize) -> Self {
		let max_width = max_width.max(1);
		Self { lines: wrap(raw_text, max_width), max_width }
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn line_count(&self) -> usize {
		self.lines.len()
	}

	pub fn line_len(&self, row: usize) -> usize {
		self.lines.get(row).map(|line| line.chars().count()).unwrap_or(0)
	}

	pub fn max_width(&self) -> usize {
		self.max_width
	}

	/// Changes the width used by later overflow splits. Existing lines keep
	/// their boundaries.
	pub fn set_max_width(&mut self, max_width: usize) {
		self.max_width = max_width.max(1);
	}

	/// Inserts `ch` before `at` and returns the new cursor.
	///
	/// Once the line reaches `max_width` it is split at the new cursor
	/// position, never further right than `max_width`, and the cursor moves to
	/// the new line below.
	pub fn insert_char(&mut self, at: CursorState, ch: char) -> CursorState {
		let line = &mut self.lines[at.row];
		let byte = byte_index(line, at.col);
		line.insert(byte, ch);

		let cursor = CursorState { row: at.row, col: at.col + 1 };
		if line.chars().count() < self.max_width {
			return cursor;
		}

		let split_col = cursor.col.min(self.max_width);
		self.split_line(at.row, split_col);
		CursorState { row: at.row + 1, col: cursor.col - split_col }
	}

	/// Breaks `lines[row]` at `col`; the tail becomes a new line below.
	pub fn split_line(&mut self, row: usize, col: usize) -> CursorState {
		let line = &mut self.lines[row];
		let byte = byte_index(line, col);
		let tail = line.split_off(byte);
		self.lines.insert(row + 1, tail);
		CursorState { row: row + 1, col: 0 }
	}

	/// Appends `lines[row]` to the previous line and removes it.
	///
	/// A merged line longer than `max_width` is hard-split again in place; the
	/// cursor lands on the join point either way.
	pub fn merge_up(&mut self, row: usize) -> CursorState {
		debug_assert!(row > 0, "merge_up requires a previous line");
		let target = row - 1;
		let previous_len = self.line_len(target);
		let line = self.lines.remove(row);
		self.lines[target].push_str(&line);

		if self.line_len(target) <= self.max_width {
			return CursorState { row: target, col: previous_len };
		}
		let chunks = wrap(&self.lines[target], self.max_width);
		let mut cursor = CursorState { row: target, col: previous_len };
		let mut remaining = previous_len;
		for (offset, chunk) in chunks.iter().enumerate() {
			let len = chunk.chars().count();
			if remaining <= len {
				cursor = CursorState { row: target + offset, col: remaining };
				break;
			}
			remaining -= len;
		}
		self.lines.splice(target..=target, chunks);
		cursor
	}

	/// Removes the character immediately before `col`.
	pub fn delete_char(&mut self, row: usize, col: usize) -> CursorState {
		debug_assert!(col > 0, "delete_char requires a character before the cursor");
		let line = &mut self.lines[row];
		let byte = byte_index(line, col - 1);
		line.remove(byte);
		CursorState { row, col: col - 1 }
	}

	/// Joins all lines with no separator.
	///
	/// Wrapped continuations and explicit breaks are indistinguishable here,
	/// so line structure is lost on save.
	pub fn flatten(&self) -> String {
		self.lines.concat()
	}
}

fn byte_index(line: &str, col: usize) -> usize {
	line.char_indices().nth(col).map(|(idx, _)| idx).unwrap_or(line.len())
}
