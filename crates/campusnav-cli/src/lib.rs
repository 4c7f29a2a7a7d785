//! campusnav CLI library.
//!
//! Output formatting shared by the `campusnav-cli` subcommands.

pub mod output;
