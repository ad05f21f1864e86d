use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use json_typeddict::cli::CommandLineInterface;

fn main() -> ExitCode {
    // diagnostics go to stderr so stdout stays clean for generated code
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let command_line_interface = CommandLineInterface::load();
    match command_line_interface.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
