use clap::Parser;
use slcsp::Error;
use slcsp::cli::args::{Args, is_usage_error};
use slcsp::cli::commands;
use slcsp::constants::exit_codes;
use std::process;

fn main() {
    // Parse command line arguments; --help and --version exit through clap
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) if !is_usage_error(&error) => error.exit(),
        Err(error) => fail(Error::from(error)),
    };

    match commands::run(args) {
        Ok(_summary) => {
            // Answers and summary have already been reported by the command
            process::exit(exit_codes::SUCCESS);
        }
        Err(error) => fail(error),
    }
}

/// Fatal condition: one-line explanation, distinct exit status
fn fail(error: Error) -> ! {
    eprintln!("Error: {}", error);
    process::exit(error.exit_code());
}
