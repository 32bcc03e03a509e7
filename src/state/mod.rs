mod buffer;
mod cursor;
mod geometry;
mod session;

pub use buffer::{WrappedBuffer, wrap};
pub use cursor::{CursorState, Direction, Viewport};
pub use geometry::EditorGeometry;
pub use session::{EditSession, SessionButton, SessionExit, SessionMode};

#[cfg(test)]
mod tests;
