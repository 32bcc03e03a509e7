use std::fmt;

use crate::codec::escape_for_transmission;

/// One request line understood by the storage service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Login { username: String, password: String },
	Logout,
	ListUsers,
	CreateUser { username: String, password: String },
	DeleteUser { username: String },
	ListDir { dir: String },
	CreateFile { path: String, content: String },
	ReadFile { path: String },
	DeleteFile { path: String },
	CreateDir { dir: String },
	DeleteDir { dir: String },
	RenameFile { from: String, to: String },
	TruncateFile { path: String, size: String },
	SetPermissions { path: String, permissions: String },
	GetMetadata { path: String },
	GetSessionInfo,
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Login { username, password } => write!(f, "login {} {}", username, password),
			Self::Logout => f.write_str("logout"),
			Self::ListUsers => f.write_str("list_users"),
			Self::CreateUser { username, password } => write!(f, "create_user {} {} normal", username, password),
			Self::DeleteUser { username } => write!(f, "delete_user {}", username),
			Self::ListDir { dir } => write!(f, "dir_list {}", dir),
			Self::CreateFile { path, content } => {
				write!(f, "create_file {} \"{}\"", path, escape_for_transmission(content))
			}
			Self::ReadFile { path } => write!(f, "read_file {}", path),
			Self::DeleteFile { path } => write!(f, "delete_file {}", path),
			Self::CreateDir { dir } => write!(f, "create_dir {}", dir),
			Self::DeleteDir { dir } => write!(f, "delete_dir {}", dir),
			Self::RenameFile { from, to } => write!(f, "rename_file {} {}", from, to),
			Self::TruncateFile { path, size } => write!(f, "truncate_file {} {}", path, size),
			Self::SetPermissions { path, permissions } => write!(f, "set_permissions {} {}", path, permissions),
			Self::GetMetadata { path } => write!(f, "get_metadata {}", path),
			Self::GetSessionInfo => f.write_str("get_session_info"),
		}
	}
}

/// Normalizes a user-entered directory into an absolute service path.
pub fn normalize_path(path: &str) -> String {
	let trimmed = path.trim();
	if trimmed.is_empty() {
		return "/".to_string();
	}

	let mut normalized = String::with_capacity(trimmed.len() + 1);
	if !trimmed.starts_with('/') {
		normalized.push('/');
	}
	for ch in trimmed.chars() {
		if ch == '/' && normalized.ends_with('/') {
			continue;
		}
		normalized.push(ch);
	}
	normalized
}

/// Joins a directory and a file name the way the service expects.
///
/// The directory is normalized; the file name is taken verbatim.
pub fn file_path(dir: &str, file_name: &str) -> String {
	let dir = normalize_path(dir);
	if dir.ends_with('/') {
		format!("{}{}", dir, file_name)
	} else {
		format!("{}/{}", dir, file_name)
	}
}
