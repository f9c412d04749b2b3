//! Application state container.
//!
//! # Design
//! `Dashboard` owns the fetched post list, the loading/error flags and the
//! selected post id. It never patches the list locally: every successful
//! mutation is followed by a full `refresh()`, so the server stays the single
//! source of truth and the list is always exactly what the last `list()`
//! returned.
//!
//! Failures are split by kind. A failed refresh is kept in `FeedState::error`
//! so the feed can show it inline; a failed mutation is reported once through
//! `UserPrompt::alert` and leaves no trace in the state.

use tracing::{info, warn};

use crate::api::PostApi;
use crate::error::{ApiError, StoreError};
use crate::http::Transport;
use crate::messages;
use crate::prompt::UserPrompt;
use crate::storage::{KeyValueStore, Preferences};
use crate::types::{Comment, CreateComment, CreatePost, Post, PostId, UpdatePost};

/// Everything the feed view renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_id: Option<PostId>,
}

/// A post together with its comments, for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}

pub struct Dashboard<T, S, P> {
    api: PostApi<T>,
    prefs: Preferences<S>,
    prompt: P,
    state: FeedState,
}

impl<T: Transport, S: KeyValueStore, P: UserPrompt> Dashboard<T, S, P> {
    /// Builds the container and reads the persisted display name. No request
    /// is sent until the first `refresh()`; until then the feed is loading.
    pub fn new(api: PostApi<T>, store: S, prompt: P) -> Self {
        Self {
            api,
            prefs: Preferences::load(store),
            prompt,
            state: FeedState {
                is_loading: true,
                ..FeedState::default()
            },
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    pub fn api(&self) -> &PostApi<T> {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    pub fn user_name(&self) -> &str {
        self.prefs.user_name()
    }

    pub fn set_user_name(&mut self, name: &str) -> Result<(), StoreError> {
        self.prefs.set_user_name(name)
    }

    /// Re-fetches the whole list. Returns `true` when `posts` was replaced.
    ///
    /// `is_loading` stays set while `list()` blocks and is cleared on both
    /// outcomes. A synchronous caller sees the loading view only before the
    /// first refresh.
    pub fn refresh(&mut self) -> bool {
        self.state.is_loading = true;
        self.state.error = None;
        let refreshed = match self.api.list() {
            Ok(posts) => {
                self.state.posts = posts;
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to load posts");
                self.state.error = Some(messages::LOAD_POSTS_FAILED.to_string());
                false
            }
        };
        self.state.is_loading = false;
        refreshed
    }

    pub fn create(&mut self, input: &CreatePost) -> Option<Post> {
        match self.api.create(input) {
            Ok(post) => {
                info!(id = post.id, user = %post.user_name, "post created");
                self.refresh();
                Some(post)
            }
            Err(err) => {
                self.report(messages::CREATE_FAILED, &err);
                None
            }
        }
    }

    pub fn update(&mut self, id: PostId, input: &UpdatePost) -> Option<Post> {
        match self.api.update(id, input) {
            Ok(post) => {
                info!(id, "post updated");
                self.refresh();
                Some(post)
            }
            Err(err) => {
                self.report(messages::UPDATE_FAILED, &err);
                None
            }
        }
    }

    /// Deletes after an explicit confirmation. A declined confirmation sends
    /// nothing. Returns `true` when the server deleted the post.
    pub fn delete(&mut self, id: PostId) -> bool {
        if !self.prompt.confirm(messages::CONFIRM_DELETE) {
            return false;
        }
        match self.api.delete(id) {
            Ok(()) => {
                info!(id, "post deleted");
                if self.state.selected_id == Some(id) {
                    self.state.selected_id = None;
                }
                self.refresh();
                true
            }
            Err(err) => {
                warn!(id, error = %err, "failed to delete post");
                self.prompt.alert(messages::DELETE_FAILED);
                false
            }
        }
    }

    /// Likes a post as the current display name.
    pub fn like(&mut self, id: PostId) -> bool {
        let Some(user_name) = self.require_user_name() else {
            return false;
        };
        match self.api.like(id, &user_name) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report(messages::LIKE_FAILED, &err);
                false
            }
        }
    }

    pub fn unlike(&mut self, id: PostId) -> bool {
        let Some(user_name) = self.require_user_name() else {
            return false;
        };
        match self.api.unlike(id, &user_name) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report(messages::UNLIKE_FAILED, &err);
                false
            }
        }
    }

    /// Comments on the selected post. Without a selection nothing is sent.
    pub fn submit_comment(&mut self, input: &CreateComment) -> Option<Comment> {
        let post_id = self.state.selected_id?;
        match self.api.create_comment(post_id, input) {
            Ok(comment) => {
                info!(post_id, comment_id = comment.id, "comment added");
                self.refresh();
                Some(comment)
            }
            Err(err) => {
                self.report(messages::COMMENT_FAILED, &err);
                None
            }
        }
    }

    pub fn select(&mut self, id: PostId) {
        self.state.selected_id = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<PostId> {
        self.state.selected_id
    }

    /// Fetches the selected post and its comments. `Ok(None)` when nothing is
    /// selected.
    pub fn load_detail(&self) -> Result<Option<PostDetail>, ApiError> {
        let Some(id) = self.state.selected_id else {
            return Ok(None);
        };
        let post = self.api.get(id)?;
        let comments = self.api.comments(id)?;
        Ok(Some(PostDetail { post, comments }))
    }

    fn require_user_name(&mut self) -> Option<String> {
        let name = self.prefs.user_name().trim();
        if name.is_empty() {
            self.prompt.alert(messages::NAME_REQUIRED);
            return None;
        }
        Some(name.to_string())
    }

    fn report(&mut self, prefix: &str, err: &ApiError) {
        warn!(error = %err, "{prefix}");
        self.prompt.alert(&format!("{prefix}: {err}"));
    }
}
