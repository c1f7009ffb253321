//! ncpack - packages the New Commanders mod into a distributable zip.

mod cli;
mod commands;
mod error;
mod output;
mod progress;
mod prompt;

use clap::Parser;
use console::Term;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version arrive here too and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let term = Term::stdout();
    let interactive = formatter.is_interactive() && !cli.no_wait;

    match commands::pack::execute(&cli, &*formatter) {
        Ok(()) => {
            if interactive {
                prompt::wait_for_key(&term, Some(prompt::PRESS_ANY_KEY));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            formatter.format_error(&err);
            if formatter.is_interactive() {
                let _ = term.write_line(error::EXIT_NOTICE);
            }
            if interactive {
                prompt::wait_for_key(&term, None);
            }
            ExitCode::FAILURE
        }
    }
}
