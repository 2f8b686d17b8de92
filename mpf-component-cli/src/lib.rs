// ============================================================================
// mpf-component-cli/src/lib.rs
// ============================================================================
//
// MPF COMPONENT CLI: Library portion of the component runner
//
// Contains argument definitions, the example components and command logic.

pub mod cli;
pub mod commands;
pub mod components;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, DescribeArgs, MediaType, RunArgs};
pub use commands::run::{RunReport, run_job};
pub use components::{AudioVideoComponent, ExampleComponent, HelloWorldComponent};
pub use error::{CliError, CliResult};
