// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pinwall CLI entrypoint.
//!
//! Every invocation loads the document named by `--data` (or `PINWALL_DATA`), applies one
//! command and writes the document back when the command changed it.

mod cli;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli_args = cli::Cli::parse();

    if let Err(err) = pinwall::logging::init_logging(
        cli_args.log_level.map(|level| level.as_str()),
        cli_args.log_format.map(|format| format.as_str()),
    ) {
        eprintln!("Warning: {err}");
    }

    let mut app = cli::PinwallApp::open(&cli_args);
    match app.run(cli_args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
