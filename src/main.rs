use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fileverse::app::App;
use fileverse::config::{ClientConfig, ConfigOverrides};
use fileverse::logging;
use tracing::info;

/// Terminal client for a FileVerse storage server.
#[derive(Parser, Debug)]
#[command(name = "fileverse", version, about)]
struct Cli {
	/// Server host name or address.
	#[arg(long)]
	host:       Option<String>,
	/// Server port.
	#[arg(long)]
	port:       Option<u16>,
	/// Configuration file; defaults to the user config directory.
	#[arg(long = "config")]
	config:     Option<PathBuf>,
	/// Log filter, e.g. `info` or `fileverse=debug`. `RUST_LOG` takes precedence.
	#[arg(long)]
	log_filter: Option<String>,
}

fn main() {
	if let Err(err) = run() {
		eprintln!("{:#}", err);
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();
	let config = ClientConfig::load(cli.config.as_deref())
		.context("load configuration failed")?
		.apply_overrides(ConfigOverrides { host: cli.host, port: cli.port, log_filter: cli.log_filter });
	let log_file = logging::init_logging(&config.logging).context("initialize logging failed")?;
	info!(log_file = %log_file.display(), host = %config.server.host, port = config.server.port, "starting");
	App::run(&config).context("run app failed")
}
