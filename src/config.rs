use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("read config file {} failed", path.display())]
	Read {
		path:   PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parse config file {} failed", path.display())]
	Parse {
		path:   PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self { host: "localhost".to_string(), port: 8080 }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	pub filter:    String,
	/// Overrides the platform log directory.
	pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self { filter: "info".to_string(), directory: None }
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	pub server:  ServerConfig,
	pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
	pub host:       Option<String>,
	pub port:       Option<u16>,
	pub log_filter: Option<String>,
}

impl ClientConfig {
	pub fn from_toml_str(path: &Path, text: &str) -> Result<Self, ConfigError> {
		toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
	}

	/// Loads `explicit` when given; otherwise the default location if a file
	/// exists there, else built-in defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
		let path = match explicit {
			Some(path) => path.to_path_buf(),
			None => match default_config_path() {
				Some(path) if path.is_file() => path,
				_ => return Ok(Self::default()),
			},
		};
		let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path: path.clone(), source })?;
		let config = Self::from_toml_str(&path, &text)?;
		info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
		if let Some(host) = overrides.host {
			self.server.host = host;
		}
		if let Some(port) = overrides.port {
			self.server.port = port;
		}
		if let Some(filter) = overrides.log_filter {
			self.logging.filter = filter;
		}
		self
	}
}

fn default_config_path() -> Option<PathBuf> {
	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
	Some(config_home.join("fileverse").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use std::path::{Path, PathBuf};

	use super::{ClientConfig, ConfigError, ConfigOverrides};

	fn parse(text: &str) -> Result<ClientConfig, ConfigError> {
		ClientConfig::from_toml_str(Path::new("test.toml"), text)
	}

	#[test]
	fn empty_file_uses_defaults() {
		let config = parse("").unwrap();
		assert_eq!(config, ClientConfig::default());
		assert_eq!(config.server.host, "localhost");
		assert_eq!(config.server.port, 8080);
		assert_eq!(config.logging.filter, "info");
	}

	#[test]
	fn partial_sections_and_unknown_keys() {
		let config = parse(
			r#"
			theme = "dark"

			[server]
			port = 9000

			[logging]
			directory = "/tmp/fv-logs"
			"#,
		)
		.unwrap();
		assert_eq!(config.server.host, "localhost");
		assert_eq!(config.server.port, 9000);
		assert_eq!(config.logging.filter, "info");
		assert_eq!(config.logging.directory, Some(PathBuf::from("/tmp/fv-logs")));
	}

	#[test]
	fn invalid_port_is_rejected() {
		assert!(matches!(parse("[server]\nport = \"eighty\"\n"), Err(ConfigError::Parse { .. })));
	}

	#[test]
	fn command_line_wins() {
		let config = parse("[server]\nhost = \"files.local\"\nport = 9000\n").unwrap().apply_overrides(ConfigOverrides {
			host:       None,
			port:       Some(7000),
			log_filter: Some("fileverse=debug".to_string()),
		});
		assert_eq!(config.server.host, "files.local");
		assert_eq!(config.server.port, 7000);
		assert_eq!(config.logging.filter, "fileverse=debug");
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let missing = std::env::temp_dir().join("fileverse-config-that-does-not-exist.toml");
		assert!(matches!(ClientConfig::load(Some(&missing)), Err(ConfigError::Read { .. })));
	}
}
