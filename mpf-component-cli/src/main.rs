// ============================================================================
// mpf-component-cli/src/main.rs
// ============================================================================
//
// ENTRY POINT: The `mpf-component` binary
//
// Parses arguments, sets up logging, dispatches to the selected command and
// maps failures to the process exit code.

use clap::Parser;
use mpf_component_cli::commands::{describe, run};
use mpf_component_cli::{Cli, Commands, logging};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args),
        Commands::Describe(args) => describe::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}
