//! Uncommitted form state for new posts and comments.
//!
//! `submit()` refuses blank fields and resets the form once it hands out a
//! payload.

use crate::types::{CreateComment, CreatePost};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub user_name: String,
    pub content: String,
}

impl PostForm {
    /// Starts with the author field pre-filled from the display name.
    pub fn prefilled(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            content: String::new(),
        }
    }

    pub fn submit(&mut self) -> Option<CreatePost> {
        if self.user_name.trim().is_empty() || self.content.trim().is_empty() {
            return None;
        }
        let taken = std::mem::take(self);
        Some(CreatePost {
            user_name: taken.user_name,
            content: taken.content,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub user_name: String,
    pub content: String,
}

impl CommentForm {
    pub fn prefilled(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            content: String::new(),
        }
    }

    pub fn submit(&mut self) -> Option<CreateComment> {
        if self.user_name.trim().is_empty() || self.content.trim().is_empty() {
            return None;
        }
        let taken = std::mem::take(self);
        Some(CreateComment {
            user_name: taken.user_name,
            content: taken.content,
        })
    }
}
