//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the crypto core.

pub mod context;
pub mod password;
pub mod seal;
pub mod status;

pub use context::CliContext;
pub use seal::{
    handle_demo_command, handle_open_command, handle_seal_command, DemoArgs, OpenArgs, SealArgs,
};
pub use status::{handle_config_command, handle_history_command, ConfigArgs, Toggle};
