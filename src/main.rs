mod cli;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

// Re-export from lib for internal use
use morse_transcoder::{error, Console, Transcoder};

use crate::error::TranscoderError;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morse_transcoder=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            tracing::debug!("Argument parsing failed: {}", e);
            println!("{}", cli::unrecognized());
            return Ok(ExitCode::FAILURE);
        }
    };

    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(e @ TranscoderError::Usage { .. }) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let transcoder = Transcoder::default();
    let mut console = Console::stdio();
    cli::run(mode, &transcoder, &mut console)?;

    Ok(ExitCode::SUCCESS)
}
