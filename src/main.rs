//! Binary entrypoint for the `skymatch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match skymatch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
