use std::process::ExitCode;

use clap::Parser;
use docnav_cli::{Cli, run, write_output};

fn main() -> ExitCode {
    let result = run(Cli::parse()).and_then(|output| write_output(&mut std::io::stdout(), &output));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
