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

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
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
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let mut invalid_env_level = None;
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(raw) => match raw.trim() {
                "VERBOSE" | "verbose" => tracing::Level::DEBUG,
                level => level.parse::<tracing::Level>().unwrap_or_else(|_| {
                    invalid_env_level = Some(raw.clone());
                    DEFAULT_LOG_LEVEL
                }),
            },
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    // stdout is reserved for rendered IR.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(raw) = invalid_env_level {
        log::warn!("Ignoring invalid `LOG_LEVEL` environment variable value: `{raw}`");
    }
}
