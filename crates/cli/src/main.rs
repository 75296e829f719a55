// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection wheel binary entry point.

use clap::Parser;
use tokio::io::BufReader;

use spinwheel::cli::Cli;
use spinwheel::output::print_error;
use spinwheel::runtime::RuntimeBuilder;
use spinwheel::time::ClockHandle;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut runtime = match RuntimeBuilder::new(cli)
        .with_clock(ClockHandle::system())
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = runtime.run(input, &mut stdout).await {
        print_error(e);
        std::process::exit(1);
    }
}
