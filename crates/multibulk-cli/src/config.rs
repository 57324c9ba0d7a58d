//! Command-line configuration for the `multibulk` binary.

use clap::Parser;
use clap::ValueEnum;

/// How the encoded frame is written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
	/// Exact frame bytes, ready to pipe into a socket
	#[default]
	Raw,
	/// CR, LF and non-printable bytes escaped, newline terminated
	Escaped,
}

/// Frame a command and its arguments as a RESP Multi-Bulk request
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Command name followed by its arguments, encoded as UTF-8
	#[arg(required = true, num_args = 1..)]
	pub args: Vec<String>,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Raw)]
	pub format: OutputFormat,

	/// Log level (trace, debug, info, warn, error)
	#[arg(
		short,
		long,
		default_value = "warn",
		value_parser = telemetry::logger::validate_level
	)]
	pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
	pub args: Vec<String>,
	pub format: OutputFormat,
	pub log_level: String,
}

impl From<Cli> for CliConfig {
	fn from(cli: Cli) -> Self {
		Self {
			args: cli.args,
			format: cli.format,
			log_level: cli.log_level,
		}
	}
}
