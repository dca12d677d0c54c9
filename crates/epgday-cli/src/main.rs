use std::process::ExitCode;

use clap::Parser;

mod cli;
mod error;
mod explain_cmd;
mod group_cmd;
mod shared;

use cli::{Cli, Commands};
use error::{CliResult, output_format_hint, parse_output_format, render_error};
use explain_cmd::run_explain;
use group_cmd::{run_days, run_group};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    tracing::debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Group(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_group(args, output_format))
        }
        Commands::Days(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_days(args, output_format))
        }
        Commands::Explain(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_explain(args, output_format))
        }
    }
}

fn dispatch<F>(requested: &str, run: F) -> ExitCode
where
    F: FnOnce(error::OutputFormat) -> CliResult<ExitCode>,
{
    let fallback = output_format_hint(requested);
    let output_format = match parse_output_format(requested) {
        Ok(format) => format,
        Err(err) => return render_error(&err, fallback),
    };

    match run(output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
