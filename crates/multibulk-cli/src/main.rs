mod config;

use std::io::Write;

use bytes::Bytes;
use clap::Parser;
use log::debug;
use log::info;
use log::warn;
use multibulk::CommandBuilder;

use crate::config::Cli;
use crate::config::CliConfig;
use crate::config::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let config = CliConfig::from(Cli::parse());
	telemetry::init(&config.log_level);

	let frame = encode(&config.args)?;
	info!("Encoded {} input arguments into {} bytes", config.args.len(), frame.len());

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(&render(&frame, config.format))?;
	stdout.flush()?;
	Ok(())
}

fn encode(args: &[String]) -> Result<Bytes, multibulk::FrameError> {
	let mut cmd = CommandBuilder::new();
	for (position, arg) in args.iter().enumerate() {
		if arg.is_empty() {
			warn!("Argument {} is empty and will be dropped from the command", position);
		}
		cmd.append_str(arg)?;
	}

	let frame = cmd.build();
	debug!("{}", cmd);
	Ok(frame)
}

fn render(frame: &Bytes, format: OutputFormat) -> Vec<u8> {
	match format {
		OutputFormat::Raw => frame.to_vec(),
		OutputFormat::Escaped => {
			let mut out = multibulk::escape(frame).into_bytes();
			out.push(b'\n');
			out
		}
	}
}
