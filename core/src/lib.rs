//! Client core for the feed dashboard.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! `/api/posts` resource without touching the network (host-does-IO
//! pattern). On top of that sits `Dashboard`, the application state
//! container, which talks to the server through an injected `Transport`,
//! persists the display name through a `KeyValueStore` and asks the user
//! through a `UserPrompt`.
//!
//! # Design
//! - `PostClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `Dashboard` re-fetches the full list after every successful mutation
//!   instead of patching it locally.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod http;
pub mod messages;
pub mod prompt;
pub mod storage;
pub mod types;
pub mod view;

pub use api::PostApi;
pub use client::PostClient;
pub use dashboard::{Dashboard, FeedState, PostDetail};
pub use error::{ApiError, StoreError};
pub use form::{CommentForm, PostForm};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use prompt::UserPrompt;
pub use storage::{KeyValueStore, MemoryStore, Preferences, USER_NAME_KEY};
pub use types::{Comment, CommentId, CreateComment, CreatePost, LikeRequest, Post, PostId, UpdatePost};
