use std::ops::ControlFlow;

use crossterm::event::Event;
use tracing::{debug, info};

use super::{CursorState, Direction, EditorGeometry, Viewport, WrappedBuffer};
use crate::action::EditorAction;
use crate::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionButton {
	Save,
	Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
	Editing,
	ButtonFocus(SessionButton),
}

/// Terminal state reached by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
	Saved,
	Cancelled,
}

/// One interactive edit of one document.
///
/// The session owns its buffer outright; [`EditSession::finish`] consumes it
/// and hands back only the flattened text.
#[derive(Debug)]
pub struct EditSession {
	buffer:   WrappedBuffer,
	cursor:   CursorState,
	viewport: Viewport,
	geometry: EditorGeometry,
	mode:     SessionMode,
}

impl EditSession {
	pub fn new(content: &str, geometry: EditorGeometry) -> Self {
		let buffer = WrappedBuffer::new(content, geometry.max_width());
		info!(lines = buffer.line_count(), max_width = buffer.max_width(), "edit session started");
		Self {
			buffer,
			cursor: CursorState::default(),
			viewport: Viewport::new(geometry.visible_height()),
			geometry,
			mode: SessionMode::Editing,
		}
	}

	pub fn buffer(&self) -> &WrappedBuffer {
		&self.buffer
	}

	pub fn cursor(&self) -> CursorState {
		self.cursor
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn geometry(&self) -> EditorGeometry {
		self.geometry
	}

	pub fn mode(&self) -> SessionMode {
		self.mode
	}

	pub fn handle_event(&mut self, event: &Event) -> ControlFlow<SessionExit> {
		match input::session_action(self.mode, event) {
			Some(action) => self.apply(action),
			None => ControlFlow::Continue(()),
		}
	}

	pub fn apply(&mut self, action: EditorAction) -> ControlFlow<SessionExit> {
		debug!(?action, mode = ?self.mode, "apply editor action");
		match (self.mode, action) {
			(_, EditorAction::ViewportResized { width, height }) => {
				self.resize(EditorGeometry::from_terminal(width, height));
			}
			(_, EditorAction::Cancel) => return ControlFlow::Break(SessionExit::Cancelled),
			(SessionMode::Editing, EditorAction::InsertChar(ch)) => {
				self.cursor = self.buffer.insert_char(self.cursor, ch);
				self.follow_cursor();
			}
			(SessionMode::Editing, EditorAction::BreakLine) => {
				self.cursor = self.buffer.split_line(self.cursor.row, self.cursor.col);
				self.follow_cursor();
			}
			(SessionMode::Editing, EditorAction::Backspace) => self.backspace(),
			(SessionMode::Editing, EditorAction::Move(direction)) => self.move_cursor(direction),
			(SessionMode::Editing, EditorAction::FocusButtons) => {
				self.mode = SessionMode::ButtonFocus(SessionButton::Save);
			}
			(SessionMode::Editing, EditorAction::Confirm) => return ControlFlow::Break(SessionExit::Saved),
			(SessionMode::ButtonFocus(_), EditorAction::SelectButton(button)) => {
				self.mode = SessionMode::ButtonFocus(button);
			}
			(SessionMode::ButtonFocus(_), EditorAction::FocusEditor) => self.mode = SessionMode::Editing,
			(SessionMode::ButtonFocus(SessionButton::Save), EditorAction::Confirm) => {
				return ControlFlow::Break(SessionExit::Saved);
			}
			(SessionMode::ButtonFocus(SessionButton::Cancel), EditorAction::Confirm) => {
				return ControlFlow::Break(SessionExit::Cancelled);
			}
			_ => {}
		}
		ControlFlow::Continue(())
	}

	/// Ends the session: `Saved` yields the flattened buffer, `Cancelled` yields nothing.
	pub fn finish(self, exit: SessionExit) -> Option<String> {
		match exit {
			SessionExit::Saved => Some(self.buffer.flatten()),
			SessionExit::Cancelled => None,
		}
	}

	pub fn move_cursor(&mut self, direction: Direction) {
		self.cursor = self.cursor.moved(direction, &self.buffer);
		self.follow_cursor();
	}

	/// New window geometry. Lines keep their current boundaries; only later
	/// overflow splits use the new width.
	pub fn resize(&mut self, geometry: EditorGeometry) {
		self.geometry = geometry;
		self.buffer.set_max_width(geometry.max_width());
		self.viewport.resize(geometry.visible_height(), self.cursor.row, self.buffer.line_count());
	}

	fn backspace(&mut self) {
		let CursorState { row, col } = self.cursor;
		if col > 0 {
			self.cursor = self.buffer.delete_char(row, col);
		} else if row > 0 {
			self.cursor = self.buffer.merge_up(row);
		}
		self.follow_cursor();
	}

	fn follow_cursor(&mut self) {
		debug_assert!(self.cursor.is_within(&self.buffer), "cursor {:?} outside buffer", self.cursor);
		self.viewport.follow(self.cursor.row, self.buffer.line_count());
	}
}
