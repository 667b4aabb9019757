pub mod commands;
pub mod output;
pub mod render;

pub use commands::{run, CliArgs, CliError, Command, USAGE};
