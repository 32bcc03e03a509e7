use proptest::prelude::*;

use super::common::{at, lines_of, text_strategy};
use crate::state::{WrappedBuffer, wrap};

#[test]
fn wrap_should_hard_split_at_width() {
	assert_eq!(wrap("abcdef", 3), vec!["abc", "def"]);
	assert_eq!(wrap("abcdefg", 3), vec!["abc", "def", "g"]);
	assert_eq!(wrap("ab", 3), vec!["ab"]);
}

#[test]
fn wrap_should_keep_explicit_breaks_and_empty_segments() {
	assert_eq!(wrap("", 4), vec![""]);
	assert_eq!(wrap("a\n\nb", 4), vec!["a", "", "b"]);
	assert_eq!(wrap("abcde\nxy\n", 2), vec!["ab", "cd", "e", "xy", ""]);
}

#[test]
fn wrap_should_not_look_for_word_boundaries() {
	assert_eq!(wrap("hello world", 4), vec!["hell", "o wo", "rld"]);
}

#[test]
fn wrap_should_count_characters_not_bytes() {
	assert_eq!(wrap("äöüß", 2), vec!["äö", "üß"]);
}

proptest! {
	#[test]
	fn wrap_should_be_deterministic_and_bounded(text in text_strategy(), width in 1usize..10) {
		let first = wrap(&text, width);
		prop_assert_eq!(&first, &wrap(&text, width));
		prop_assert!(first.iter().all(|line| line.chars().count() <= width), "{:?} at {}", first, width);
		prop_assert!(first.len() > text.matches('\n').count());
	}

	#[test]
	fn flatten_drops_exactly_the_line_breaks(text in text_strategy(), width in 1usize..10) {
		let buffer = WrappedBuffer::new(&text, width);
		prop_assert_eq!(buffer.flatten(), text.replace('\n', ""));
	}
}

#[test]
fn wrap_then_flatten_loses_line_breaks() {
	let text = "ab\ncd";
	let buffer = WrappedBuffer::new(text, 10);
	assert_eq!(buffer.flatten(), "abcd");
	assert_ne!(buffer.flatten(), text);
}

#[test]
fn flatten_of_text_without_breaks_restores_it() {
	let buffer = WrappedBuffer::new("abcdefgh", 3);
	assert_eq!(buffer.flatten(), "abcdefgh");
}

#[test]
fn insert_past_full_line_splits_exactly_at_max_width() {
	let mut buffer = WrappedBuffer::new("abcdef", 3);
	assert_eq!(lines_of(&buffer), vec!["abc", "def"]);

	let cursor = buffer.insert_char(at(0, 3), 'X');

	assert_eq!(lines_of(&buffer), vec!["abc", "X", "def"]);
	assert_eq!(cursor, at(1, 1));
	assert!(buffer.lines().iter().all(|line| line.chars().count() <= 3));
}

#[test]
fn insert_reaching_max_width_at_line_end_opens_new_line() {
	let mut buffer = WrappedBuffer::new("ab", 3);
	let cursor = buffer.insert_char(at(0, 2), 'c');
	assert_eq!(lines_of(&buffer), vec!["abc", ""]);
	assert_eq!(cursor, at(1, 0));
}

#[test]
fn insert_reaching_max_width_mid_line_splits_at_cursor() {
	let mut buffer = WrappedBuffer::new("abcd", 5);
	let cursor = buffer.insert_char(at(0, 1), 'X');
	assert_eq!(lines_of(&buffer), vec!["aX", "bcd"]);
	assert_eq!(cursor, at(1, 0));
}

#[test]
fn insert_below_max_width_stays_on_line() {
	let mut buffer = WrappedBuffer::new("ac", 5);
	let cursor = buffer.insert_char(at(0, 1), 'b');
	assert_eq!(lines_of(&buffer), vec!["abc"]);
	assert_eq!(cursor, at(0, 2));
}

#[test]
fn split_line_moves_tail_below() {
	let mut buffer = WrappedBuffer::new("hello", 10);
	let cursor = buffer.split_line(0, 2);
	assert_eq!(lines_of(&buffer), vec!["he", "llo"]);
	assert_eq!(cursor, at(1, 0));

	let cursor = buffer.split_line(1, 3);
	assert_eq!(lines_of(&buffer), vec!["he", "llo", ""]);
	assert_eq!(cursor, at(2, 0));
}

#[test]
fn merge_up_joins_with_previous_line() {
	let mut buffer = WrappedBuffer::new("foo\nbar", 10);
	let cursor = buffer.merge_up(1);
	assert_eq!(lines_of(&buffer), vec!["foobar"]);
	assert_eq!(cursor, at(0, 3));
}

#[test]
fn merge_up_resplits_overflowing_line() {
	let mut buffer = WrappedBuffer::new("abc\ndef", 3);
	let cursor = buffer.merge_up(1);
	assert_eq!(lines_of(&buffer), vec!["abc", "def"]);
	assert_eq!(cursor, at(0, 3));

	let mut buffer = WrappedBuffer::new("ab\ncde", 3);
	let cursor = buffer.merge_up(1);
	assert_eq!(lines_of(&buffer), vec!["abc", "de"]);
	assert_eq!(cursor, at(0, 2));
}

#[test]
fn merge_up_after_narrowing_places_cursor_on_join_point() {
	let mut buffer = WrappedBuffer::new("abcde\nf", 5);
	buffer.set_max_width(2);
	let cursor = buffer.merge_up(1);
	assert_eq!(lines_of(&buffer), vec!["ab", "cd", "ef"]);
	assert_eq!(cursor, at(2, 1));
}

#[test]
fn delete_char_removes_character_before_col() {
	let mut buffer = WrappedBuffer::new("aüc", 10);
	let cursor = buffer.delete_char(0, 2);
	assert_eq!(lines_of(&buffer), vec!["ac"]);
	assert_eq!(cursor, at(0, 1));
}

#[test]
fn set_max_width_does_not_rewrap_existing_lines() {
	let mut buffer = WrappedBuffer::new("abcdef", 6);
	buffer.set_max_width(2);
	assert_eq!(lines_of(&buffer), vec!["abcdef"]);
	assert_eq!(buffer.max_width(), 2);
}
