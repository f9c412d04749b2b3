//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use feed_core::PostId;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Parser)]
#[command(name = "feed", version, about = "Browse and manage the post feed")]
pub struct Cli {
    /// Base URL of the REST API, including the `/api` prefix
    #[arg(long, env = "FEED_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// File holding the persisted display name
    #[arg(long, env = "FEED_STATE_FILE", global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List posts, newest first
    List,
    /// Show one post with its comments
    Show { id: PostId },
    /// Publish a new post
    Post {
        /// Author; defaults to the saved display name and becomes the new one
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        content: String,
    },
    /// Replace the content of a post
    Edit {
        id: PostId,
        #[arg(long)]
        content: String,
    },
    /// Delete a post after confirmation
    Delete {
        id: PostId,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
    /// Like a post as the saved display name
    Like { id: PostId },
    /// Remove your like from a post
    Unlike { id: PostId },
    /// Comment on a post
    Comment {
        id: PostId,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        content: String,
    },
    /// Print or change the saved display name
    Whoami {
        #[arg(long)]
        set: Option<String>,
    },
}

impl Cli {
    pub fn state_path(&self) -> PathBuf {
        self.state_file.clone().unwrap_or_else(default_state_path)
    }

    /// Whether confirmations should be granted without asking.
    pub fn assume_yes(&self) -> bool {
        matches!(self.command, Command::Delete { yes: true, .. })
    }
}

fn default_state_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("feed-dashboard")
        .join("state.json")
}
