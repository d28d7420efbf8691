mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else if let Err(e) = cli.run_default().await {
        eprintln!("{e:#}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

/// Picks the log level from `--verbose`, then `LOG_LEVEL`, then the default.
fn setup_logger(cli: &Cli) {
    let (log_level, env_warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(raw) => match parse_log_level(&raw) {
                    Some(level) => (level, None),
                    None => (
                        DEFAULT_LOG_LEVEL,
                        Some(format!(
                            "Ignoring unrecognized `LOG_LEVEL` value `{}`",
                            raw.trim(),
                        )),
                    ),
                },
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(warning) = env_warning {
        log::warn!("{warning}");
    }
}

pub(crate) fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("verbose") {
        Some(tracing::Level::DEBUG)
    } else {
        raw.parse().ok()
    }
}

#[cfg(test)]
mod tests;
