//! Test helpers shared across agentconf crates.

pub mod fixtures;
pub mod providers;
pub mod server;

pub use fixtures::{file_location, write_config};
pub use providers::{FailingProvider, StaticProvider};
pub use server::ConfigServer;
