use tracing::{info, warn};

use crate::codec::unescape_from_wire;
use crate::protocol::{Command, file_path};
use crate::transport::{Response, Transport, TransportError};

const COMMAND_PREVIEW_CHARS: usize = 100;

/// A message for the user: what happened and the details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub title: String,
	pub body:  String,
}

impl Notice {
	pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self { title: title.into(), body: body.into() }
	}

	pub fn transport_failure(err: TransportError) -> Self {
		Self::new("Connection error", format!("{:#}", anyhow::Error::from(err)))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
	ListUsers,
	CreateUser,
	DeleteUser,
	ListFiles,
	CreateFile,
	ReadFile,
	EditFile,
	DeleteFile,
	CreateDirectory,
	DeleteDirectory,
	RenameFile,
	TruncateFile,
	SetPermission,
	ViewMetadata,
	SessionInfo,
	Logout,
}

impl MenuEntry {
	pub const ALL: [Self; 16] = [
		Self::ListUsers,
		Self::CreateUser,
		Self::DeleteUser,
		Self::ListFiles,
		Self::CreateFile,
		Self::ReadFile,
		Self::EditFile,
		Self::DeleteFile,
		Self::CreateDirectory,
		Self::DeleteDirectory,
		Self::RenameFile,
		Self::TruncateFile,
		Self::SetPermission,
		Self::ViewMetadata,
		Self::SessionInfo,
		Self::Logout,
	];

	pub fn label(self) -> &'static str {
		match self {
			Self::ListUsers => "List Users",
			Self::CreateUser => "Create User",
			Self::DeleteUser => "Delete User",
			Self::ListFiles => "List Files",
			Self::CreateFile => "Create File",
			Self::ReadFile => "Read File",
			Self::EditFile => "Edit File",
			Self::DeleteFile => "Delete File",
			Self::CreateDirectory => "Create Directory",
			Self::DeleteDirectory => "Delete Directory",
			Self::RenameFile => "Rename File",
			Self::TruncateFile => "Truncate File",
			Self::SetPermission => "Set Permission",
			Self::ViewMetadata => "View Metadata",
			Self::SessionInfo => "Session Info",
			Self::Logout => "Logout",
		}
	}
}

/// Sends one command and turns the reply into a notice titled `title`.
pub fn request<T: Transport + ?Sized>(transport: &mut T, title: &str, command: &Command) -> Notice {
	present_reply(title, transport.send(&command.to_string()))
}

pub fn present_reply(title: &str, reply: Result<Response, TransportError>) -> Notice {
	match reply {
		Ok(Response::Error { message }) => Notice::new("Error", message),
		Ok(response) => match response.data() {
			Some(data) => Notice::new(title, data),
			None => Notice::new(title, "Success"),
		},
		Err(err) => Notice::transport_failure(err),
	}
}

pub fn list_files<T: Transport + ?Sized>(transport: &mut T, dir: &str) -> Notice {
	let title = format!("Files in {}", dir);
	match transport.send(&Command::ListDir { dir: dir.to_string() }.to_string()) {
		Ok(Response::Success { data }) => {
			let listing = data.filter(|data| !data.is_empty()).unwrap_or_else(|| "No files".to_string());
			Notice::new(title, listing)
		}
		other => present_reply(&title, other),
	}
}

pub fn login<T: Transport + ?Sized>(transport: &mut T, username: &str, password: &str) -> Result<Notice, Notice> {
	let command = Command::Login { username: username.to_string(), password: password.to_string() };
	match transport.send(&command.to_string()) {
		Ok(Response::Success { .. }) => {
			info!(username, "login succeeded");
			Ok(Notice::new("Login Successful", format!("Welcome {}!", username)))
		}
		Ok(Response::Error { message }) => {
			warn!(username, "login rejected: {}", message);
			Err(Notice::new("Authentication failed", message))
		}
		Err(err) => Err(Notice::transport_failure(err)),
	}
}

pub fn logout<T: Transport + ?Sized>(transport: &mut T) -> Notice {
	match transport.send(&Command::Logout.to_string()) {
		Ok(response) => Notice::new("Logout", response.error_message().unwrap_or("Logged out")),
		Err(err) => Notice::transport_failure(err),
	}
}

/// Renames or moves a file; source and target may live in different directories.
pub fn rename_file<T: Transport + ?Sized>(
	transport: &mut T,
	(old_dir, old_name): (&str, &str),
	(new_dir, new_name): (&str, &str),
) -> Notice {
	let command = Command::RenameFile { from: file_path(old_dir, old_name), to: file_path(new_dir, new_name) };
	request(transport, "Rename File", &command)
}

/// Fetches `path` for the read-only viewer; the content stays in wire form.
pub fn read_for_view<T: Transport + ?Sized>(transport: &mut T, path: &str) -> Result<String, Notice> {
	match transport.send(&Command::ReadFile { path: path.to_string() }.to_string()) {
		Ok(Response::Success { data }) => Ok(data.unwrap_or_default()),
		reply => Err(present_reply("Read File", reply)),
	}
}

/// Content fetched for the editor, or a warning when the file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
	Loaded(String),
	Unreadable(Notice),
}

impl LoadOutcome {
	/// Editor start content; an unreadable file starts empty.
	pub fn content(&self) -> &str {
		match self {
			Self::Loaded(content) => content,
			Self::Unreadable(_) => "",
		}
	}
}

/// Reads `path` and unescapes it for the editor.
pub fn load_for_edit<T: Transport + ?Sized>(transport: &mut T, path: &str) -> LoadOutcome {
	let reason = match transport.send(&Command::ReadFile { path: path.to_string() }.to_string()) {
		Ok(Response::Success { data }) => {
			return LoadOutcome::Loaded(unescape_from_wire(data.as_deref().unwrap_or_default()));
		}
		Ok(Response::Error { message }) => message,
		Err(err) => format!("{:#}", anyhow::Error::from(err)),
	};
	warn!(path, "read for edit failed: {}", reason);
	LoadOutcome::Unreadable(Notice::new(
		"Warning",
		format!("Could not read file: {}\nStarting with empty content.", reason),
	))
}

/// Replaces `path` with `content`: an unconditional delete, then a create.
///
/// The delete reply is ignored, so only the create outcome is reported. A
/// failure between the two leaves the remote file missing.
pub fn save_edited<T: Transport + ?Sized>(transport: &mut T, path: &str, content: &str) -> Notice {
	match transport.send(&Command::DeleteFile { path: path.to_string() }.to_string()) {
		Ok(Response::Error { message }) => info!(path, "delete before save reported: {}", message),
		Err(err) => warn!(path, "delete before save failed: {}", err),
		Ok(Response::Success { .. }) => {}
	}

	let command = Command::CreateFile { path: path.to_string(), content: content.to_string() }.to_string();
	match transport.send(&command) {
		Ok(Response::Success { .. }) => {
			info!(path, bytes = content.len(), "file saved");
			Notice::new("Success", format!("File saved: {}\n\nContent has been updated successfully!", path))
		}
		Ok(Response::Error { message }) => {
			let preview = command.chars().take(COMMAND_PREVIEW_CHARS).collect::<String>();
			Notice::new("Error", format!("Could not save file:\n{}\n\nCommand: {}...", message, preview))
		}
		Err(err) => Notice::transport_failure(err),
	}
}

/// Creates a new file holding `content`.
pub fn create_with_content<T: Transport + ?Sized>(transport: &mut T, path: &str, content: &str) -> Notice {
	let command = Command::CreateFile { path: path.to_string(), content: content.to_string() };
	match transport.send(&command.to_string()) {
		Ok(response) if response.is_success() => Notice::new("Success", format!("File created: {}", path)),
		other => present_reply("Create File", other),
	}
}

pub fn edit_cancelled() -> Notice {
	Notice::new("Cancelled", "Edit cancelled. No changes were saved.")
}
