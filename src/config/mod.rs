//! Configuration module for fragseal
//!
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SealPaths;
pub use settings::Settings;
