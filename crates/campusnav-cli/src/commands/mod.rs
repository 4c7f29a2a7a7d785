// Module exports for CLI subcommands
//
// Each module handles one group of subcommands; main.rs parses arguments and
// dispatches to these handlers.

pub mod admin;
pub mod listing;
pub mod route;
