use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;

use bd::cli::{handle_invocation, parse_args, ParsedArgs};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let invocation = match parse_args(std::env::args())? {
        ParsedArgs::Run(invocation) => invocation,
        ParsedArgs::Info(text) => {
            print!("{}", text);
            return Ok(());
        }
    };

    handle_invocation(&invocation, Local::now().naive_local())?;

    Ok(())
}
