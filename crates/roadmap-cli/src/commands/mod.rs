// Module exports for CLI subcommands
//
// Each module handles one command; main.rs parses arguments and dispatches here.

pub mod route;
