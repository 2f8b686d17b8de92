// ============================================================================
// mpf-component-cli/src/commands/mod.rs
// ============================================================================
//
// COMMANDS: Command implementations for the CLI
//
// Each submodule contains the implementation of a specific command.

/// Runs a single job against an example component.
pub mod run;

/// Lists the example components.
pub mod describe;
