// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! permlint binary entry point.

use std::process::ExitCode;

use clap::Parser;

use permlint::cli::Cli;
use permlint::output::print_error;
use permlint::runner::run;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli, std::io::stdout().lock()).await {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}
