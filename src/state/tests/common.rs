use proptest::prelude::*;
use ratatui::layout::Rect;

use crate::action::EditorAction;
use crate::state::{CursorState, Direction, EditSession, EditorGeometry, WrappedBuffer};

/// Geometry whose text area is exactly `max_width` x `visible_height`.
pub(super) fn geometry(max_width: u16, visible_height: u16) -> EditorGeometry {
	EditorGeometry { window: Rect::new(2, 2, max_width + 6, visible_height + 6) }
}

pub(super) fn test_session(content: &str, max_width: u16, visible_height: u16) -> EditSession {
	EditSession::new(content, geometry(max_width, visible_height))
}

pub(super) fn lines_of(buffer: &WrappedBuffer) -> Vec<&str> {
	buffer.lines().iter().map(String::as_str).collect()
}

pub(super) fn at(row: usize, col: usize) -> CursorState {
	CursorState { row, col }
}

pub(super) fn assert_session_invariants(session: &EditSession) {
	let buffer = session.buffer();
	let cursor = session.cursor();
	assert!(buffer.line_count() >= 1, "buffer must keep at least one line");
	assert!(cursor.is_within(buffer), "cursor {:?} escaped buffer {:?}", cursor, buffer.lines());
	assert!(
		session.viewport().contains(cursor.row),
		"cursor row {} outside viewport {:?}",
		cursor.row,
		session.viewport()
	);
}

/// Text with explicit breaks, multi-byte characters and blanks.
pub(super) fn text_strategy() -> impl Strategy<Value = String> {
	prop::collection::vec(prop_oneof![4 => prop::char::range('a', 'z'), 1 => Just('\n'), 1 => Just(' '), 1 => Just('é')], 0..60)
		.prop_map(|chars| chars.into_iter().collect())
}

/// Editing actions that never end the session.
pub(super) fn editing_action() -> impl Strategy<Value = EditorAction> {
	prop_oneof![
		4 => prop::char::range('a', 'z').prop_map(EditorAction::InsertChar),
		1 => Just(EditorAction::InsertChar('é')),
		1 => Just(EditorAction::BreakLine),
		2 => Just(EditorAction::Backspace),
		1 => Just(EditorAction::Move(Direction::Left)),
		1 => Just(EditorAction::Move(Direction::Right)),
		1 => Just(EditorAction::Move(Direction::Up)),
		1 => Just(EditorAction::Move(Direction::Down)),
	]
}

/// [`editing_action`] plus terminal resizes, including degenerate sizes.
pub(super) fn editing_or_resize_action() -> impl Strategy<Value = EditorAction> {
	prop_oneof![
		8 => editing_action(),
		1 => (0u16..40, 0u16..30).prop_map(|(width, height)| EditorAction::ViewportResized { width, height }),
	]
}
