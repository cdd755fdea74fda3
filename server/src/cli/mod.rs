// server/src/cli/mod.rs

pub mod cli;
pub mod commands;
pub mod handlers;

pub use cli::{init_logging, run_cli, start_cli};
pub use commands::{CliArgs, HospitalCommand, RegisterArgs, UpdateArgs};
pub use handlers::handle_command;
