use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::EditorAction;
use crate::state::{Direction, SessionButton, SessionMode};

/// Key table for free editing.
pub fn editing_action(key: &KeyEvent) -> Option<EditorAction> {
	if let Some(action) = interrupt_action(key) {
		return Some(action);
	}
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	match key.code {
		KeyCode::Char('j') if ctrl => Some(EditorAction::BreakLine),
		KeyCode::Char('h') if ctrl => Some(EditorAction::Backspace),
		KeyCode::Char(ch) if is_printable(ch, key.modifiers) => Some(EditorAction::InsertChar(ch)),
		KeyCode::Backspace => Some(EditorAction::Backspace),
		KeyCode::Left => Some(EditorAction::Move(Direction::Left)),
		KeyCode::Right => Some(EditorAction::Move(Direction::Right)),
		KeyCode::Up => Some(EditorAction::Move(Direction::Up)),
		KeyCode::Down => Some(EditorAction::Move(Direction::Down)),
		KeyCode::Tab => Some(EditorAction::FocusButtons),
		KeyCode::Enter => Some(EditorAction::Confirm),
		KeyCode::Esc => Some(EditorAction::Cancel),
		_ => None,
	}
}

/// Key table while the Save/Cancel buttons hold focus.
pub fn button_focus_action(key: &KeyEvent) -> Option<EditorAction> {
	if let Some(action) = interrupt_action(key) {
		return Some(action);
	}
	match key.code {
		KeyCode::Left => Some(EditorAction::SelectButton(SessionButton::Save)),
		KeyCode::Right => Some(EditorAction::SelectButton(SessionButton::Cancel)),
		KeyCode::Enter => Some(EditorAction::Confirm),
		KeyCode::Tab | KeyCode::Esc => Some(EditorAction::FocusEditor),
		_ => None,
	}
}

/// Routes a terminal event through the table owned by `mode`.
pub fn session_action(mode: SessionMode, event: &Event) -> Option<EditorAction> {
	match event {
		Event::Resize(width, height) => Some(EditorAction::ViewportResized { width: *width, height: *height }),
		Event::Key(key) if key.kind != KeyEventKind::Release => match mode {
			SessionMode::Editing => editing_action(key),
			SessionMode::ButtonFocus(_) => button_focus_action(key),
		},
		_ => None,
	}
}

fn interrupt_action(key: &KeyEvent) -> Option<EditorAction> {
	(key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')).then_some(EditorAction::Cancel)
}

fn is_printable(ch: char, modifiers: KeyModifiers) -> bool {
	!ch.is_control() && modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

#[cfg(test)]
mod tests {
	use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

	use super::{button_focus_action, editing_action, session_action};
	use crate::action::EditorAction;
	use crate::state::{Direction, SessionButton, SessionMode};

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	#[test]
	fn editing_table_maps_key_classes() {
		let cases = [
			(key(KeyCode::Char('a')), Some(EditorAction::InsertChar('a'))),
			(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT), Some(EditorAction::InsertChar('A'))),
			(ctrl('j'), Some(EditorAction::BreakLine)),
			(key(KeyCode::Backspace), Some(EditorAction::Backspace)),
			(ctrl('h'), Some(EditorAction::Backspace)),
			(key(KeyCode::Left), Some(EditorAction::Move(Direction::Left))),
			(key(KeyCode::Down), Some(EditorAction::Move(Direction::Down))),
			(key(KeyCode::Tab), Some(EditorAction::FocusButtons)),
			(key(KeyCode::Enter), Some(EditorAction::Confirm)),
			(key(KeyCode::Esc), Some(EditorAction::Cancel)),
			(ctrl('c'), Some(EditorAction::Cancel)),
			(ctrl('x'), None),
			(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), None),
			(key(KeyCode::F(1)), None),
		];

		for (event, expected) in cases {
			assert_eq!(editing_action(&event), expected, "{:?}", event);
		}
	}

	#[test]
	fn button_table_maps_key_classes() {
		let cases = [
			(key(KeyCode::Left), Some(EditorAction::SelectButton(SessionButton::Save))),
			(key(KeyCode::Right), Some(EditorAction::SelectButton(SessionButton::Cancel))),
			(key(KeyCode::Enter), Some(EditorAction::Confirm)),
			(key(KeyCode::Tab), Some(EditorAction::FocusEditor)),
			(key(KeyCode::Esc), Some(EditorAction::FocusEditor)),
			(ctrl('c'), Some(EditorAction::Cancel)),
			(key(KeyCode::Char('a')), None),
			(key(KeyCode::Up), None),
		];

		for (event, expected) in cases {
			assert_eq!(button_focus_action(&event), expected, "{:?}", event);
		}
	}

	#[test]
	fn session_action_routes_by_mode_and_ignores_release() {
		let typed = Event::Key(key(KeyCode::Char('q')));
		assert_eq!(session_action(SessionMode::Editing, &typed), Some(EditorAction::InsertChar('q')));
		assert_eq!(session_action(SessionMode::ButtonFocus(SessionButton::Save), &typed), None);

		let release = Event::Key(KeyEvent {
			code:      KeyCode::Char('q'),
			modifiers: KeyModifiers::NONE,
			kind:      KeyEventKind::Release,
			state:     KeyEventState::NONE,
		});
		assert_eq!(session_action(SessionMode::Editing, &release), None);

		assert_eq!(
			session_action(SessionMode::ButtonFocus(SessionButton::Cancel), &Event::Resize(90, 30)),
			Some(EditorAction::ViewportResized { width: 90, height: 30 })
		);
	}
}
