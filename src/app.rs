use std::ops::ControlFlow;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::flows::{self, LoadOutcome, MenuEntry, Notice};
use crate::protocol::{Command, file_path, normalize_path};
use crate::transport::{TcpTransport, Transport};
use crate::ui::{TerminalSession, ask, choose, run_editor, show_message, show_reader};

const WINDOW_TITLE: &str = "FileVerse";

/// One interactive client: a terminal and a connection to the service.
pub struct App<T> {
	terminal:  TerminalSession,
	transport: T,
}

impl App<TcpTransport> {
	/// Connects, logs in and serves the menu until logout.
	pub fn run(config: &ClientConfig) -> Result<()> {
		let mut terminal = TerminalSession::enter(WINDOW_TITLE).context("enter terminal failed")?;
		let server = &config.server;
		let transport = match TcpTransport::connect(&server.host, server.port) {
			Ok(transport) => transport,
			Err(err) => {
				let reason = format!("{:#}", anyhow::Error::from(err));
				error!("connection failed: {}", reason);
				let body = format!("Failed to connect to server {}:{} - {}", server.host, server.port, reason);
				show_message(&mut terminal, "Connection failed", &body)?;
				return Ok(());
			}
		};
		App { terminal, transport }.serve()
	}
}

impl<T: Transport> App<T> {
	fn serve(mut self) -> Result<()> {
		let Some(username) = self.login()? else {
			info!("login abandoned");
			return Ok(());
		};
		self.menu(&username)
	}

	/// Empty username and password quit; a rejected login asks again.
	fn login(&mut self) -> Result<Option<String>> {
		loop {
			let username = ask(&mut self.terminal, "Username:", false)?;
			let password = ask(&mut self.terminal, "Password:", true)?;
			if username.is_empty() && password.is_empty() {
				return Ok(None);
			}
			match flows::login(&mut self.transport, &username, &password) {
				Ok(welcome) => {
					self.notify(&welcome)?;
					return Ok(Some(username));
				}
				Err(failure) => self.notify(&failure)?,
			}
		}
	}

	fn menu(&mut self, username: &str) -> Result<()> {
		let title = format!("User: {} - FileVerse Menu", username);
		let labels = MenuEntry::ALL.map(MenuEntry::label);
		loop {
			let index = choose(&mut self.terminal, &title, &labels)?;
			let Some(&entry) = MenuEntry::ALL.get(index) else {
				continue;
			};
			info!(entry = entry.label(), "menu entry selected");
			if self.dispatch(entry)?.is_break() {
				return Ok(());
			}
		}
	}

	fn dispatch(&mut self, entry: MenuEntry) -> Result<ControlFlow<()>> {
		let title = entry.label();
		let notice = match entry {
			MenuEntry::ListUsers => flows::request(&mut self.transport, title, &Command::ListUsers),
			MenuEntry::CreateUser => {
				let Some(username) = self.ask_required("New username:", false)? else {
					return Ok(ControlFlow::Continue(()));
				};
				let Some(password) = self.ask_required("Password:", true)? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::request(&mut self.transport, title, &Command::CreateUser { username, password })
			}
			MenuEntry::DeleteUser => {
				let Some(username) = self.ask_required("Username to delete:", false)? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::request(&mut self.transport, title, &Command::DeleteUser { username })
			}
			MenuEntry::ListFiles => {
				let dir = self.ask_dir()?;
				flows::list_files(&mut self.transport, &dir)
			}
			MenuEntry::CreateFile => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				match run_editor(&mut self.terminal, &path, "")? {
					Some(content) => flows::create_with_content(&mut self.transport, &path, &content),
					None => flows::edit_cancelled(),
				}
			}
			MenuEntry::ReadFile => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				match flows::read_for_view(&mut self.transport, &path) {
					Ok(content) => {
						show_reader(&mut self.terminal, &path, &content)?;
						return Ok(ControlFlow::Continue(()));
					}
					Err(failure) => failure,
				}
			}
			MenuEntry::EditFile => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				let loaded = flows::load_for_edit(&mut self.transport, &path);
				if let LoadOutcome::Unreadable(warning) = &loaded {
					self.notify(warning)?;
				}
				match run_editor(&mut self.terminal, &path, loaded.content())? {
					Some(content) => flows::save_edited(&mut self.transport, &path, &content),
					None => flows::edit_cancelled(),
				}
			}
			MenuEntry::DeleteFile => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::request(&mut self.transport, title, &Command::DeleteFile { path })
			}
			MenuEntry::CreateDirectory => {
				let dir = self.ask_dir()?;
				flows::request(&mut self.transport, title, &Command::CreateDir { dir })
			}
			MenuEntry::DeleteDirectory => {
				let dir = self.ask_dir()?;
				flows::request(&mut self.transport, title, &Command::DeleteDir { dir })
			}
			MenuEntry::RenameFile => {
				let old_dir = self.ask_dir_titled("Current directory:")?;
				let Some(old_name) = self.ask_required("Current file name:", false)? else {
					return Ok(ControlFlow::Continue(()));
				};
				let new_dir = self.ask_dir_titled("New directory:")?;
				let Some(new_name) = self.ask_required("New file name:", false)? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::rename_file(&mut self.transport, (&old_dir, &old_name), (&new_dir, &new_name))
			}
			MenuEntry::TruncateFile => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				let Some(size) = self.ask_required("New size (bytes):", false)? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::request(&mut self.transport, title, &Command::TruncateFile { path, size })
			}
			MenuEntry::SetPermission => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				let Some(permissions) = self.ask_required("Permissions (e.g. 644):", false)? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::request(&mut self.transport, title, &Command::SetPermissions { path, permissions })
			}
			MenuEntry::ViewMetadata => {
				let Some(path) = self.ask_file_path()? else {
					return Ok(ControlFlow::Continue(()));
				};
				flows::request(&mut self.transport, title, &Command::GetMetadata { path })
			}
			MenuEntry::SessionInfo => flows::request(&mut self.transport, title, &Command::GetSessionInfo),
			MenuEntry::Logout => {
				let farewell = flows::logout(&mut self.transport);
				self.notify(&farewell)?;
				return Ok(ControlFlow::Break(()));
			}
		};
		self.notify(&notice)?;
		Ok(ControlFlow::Continue(()))
	}

	fn notify(&mut self, notice: &Notice) -> Result<()> {
		show_message(&mut self.terminal, &notice.title, &notice.body)?;
		Ok(())
	}

	/// `None` when the user leaves the prompt empty.
	fn ask_required(&mut self, prompt: &str, hidden: bool) -> Result<Option<String>> {
		let value = ask(&mut self.terminal, prompt, hidden)?;
		Ok((!value.is_empty()).then_some(value))
	}

	fn ask_dir(&mut self) -> Result<String> {
		self.ask_dir_titled("Directory path:")
	}

	/// An empty answer means the root directory.
	fn ask_dir_titled(&mut self, prompt: &str) -> Result<String> {
		Ok(normalize_path(&ask(&mut self.terminal, prompt, false)?))
	}

	fn ask_file_path(&mut self) -> Result<Option<String>> {
		let dir = self.ask_dir()?;
		let name = self.ask_required("File name:", false)?;
		Ok(name.map(|name| file_path(&dir, &name)))
	}
}
