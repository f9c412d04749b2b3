//! Terminal host for the feed dashboard.
//!
//! Owns everything `feed-core` leaves to the caller: executing HTTP requests,
//! persisting the display name on disk and talking to the user.

pub mod commands;
pub mod config;
pub mod prompt;
pub mod store;
pub mod transport;

pub use config::{Cli, Command};
pub use prompt::TerminalPrompt;
pub use store::FileStore;
pub use transport::UreqTransport;
