mod cli;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.cmd.take() else {
        return match cli.print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                ExitCode::FAILURE
            },
        };
    };

    let result = command.run().await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// Install the fmt subscriber on stderr (stdout carries the declarations).
///
/// `--verbose` forces `DEBUG`; otherwise `LOG_LEVEL` (any `tracing::Level`
/// name, case-insensitive) picks the level.
fn init_logging(verbose: bool) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let parsed_env_level = env_level.as_deref()
        .map(|raw| raw.trim().parse::<tracing::Level>());

    let log_level = match (verbose, &parsed_env_level) {
        (true, _) => tracing::Level::DEBUG,
        (false, Some(Ok(level))) => *level,
        (false, Some(Err(_)) | None) => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let (Some(raw), Some(Err(e))) = (env_level, parsed_env_level) {
        log::warn!("Ignoring invalid `LOG_LEVEL` value `{raw}`: {e}");
    }
}
