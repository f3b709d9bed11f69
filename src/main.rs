//! Skillio CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use skillio::cli::{Cli, CommandDispatcher, CommandResult};
use skillio::shell::is_ci;
use skillio::ui::{create_ui, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("skillio=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skillio=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Skillio starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let colors = should_use_colors(cli.no_color);
    let mut ui = create_ui(!is_ci(), output_mode, colors);

    let result = CommandDispatcher::from_env(&cli)
        .and_then(|dispatcher| dispatcher.dispatch(&cli, ui.as_mut()));

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(CommandResult::from_error_kind(e.kind()).exit_code as u8)
        }
    }
}
