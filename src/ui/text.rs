use unicode_width::UnicodeWidthChar;

pub(super) fn display_width_of_char_prefix(line: &str, char_count: usize) -> usize {
	line.chars().take(char_count).map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0)).sum()
}

/// Leading part of `line` that fits in `max_cols` terminal columns.
///
/// Control characters are dropped so they cannot move the terminal cursor.
pub(super) fn clip_to_width(line: &str, max_cols: usize) -> String {
	let mut out = String::new();
	let mut used = 0usize;
	for ch in line.chars().filter(|ch| !ch.is_control()) {
		let width = UnicodeWidthChar::width(ch).unwrap_or(0);
		if used + width > max_cols {
			break;
		}
		used += width;
		out.push(ch);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::{clip_to_width, display_width_of_char_prefix};

	#[test]
	fn display_width_prefix_counts_wide_chars() {
		assert_eq!(display_width_of_char_prefix("a界b", 2), 3);
		assert_eq!(display_width_of_char_prefix("abc", 10), 3);
	}

	#[test]
	fn clip_stops_before_overflowing_wide_char() {
		assert_eq!(clip_to_width("ab界c", 3), "ab");
		assert_eq!(clip_to_width("ab界c", 4), "ab界");
		assert_eq!(clip_to_width("abc", 0), "");
	}

	#[test]
	fn clip_drops_control_characters() {
		assert_eq!(clip_to_width("a\tb\rc", 10), "abc");
	}
}
