use crate::state::{Direction, SessionButton};

/// What one input event asks the edit session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
	InsertChar(char),
	BreakLine,
	Backspace,
	Move(Direction),
	FocusButtons,
	FocusEditor,
	SelectButton(SessionButton),
	Confirm,
	Cancel,
	ViewportResized { width: u16, height: u16 },
}
