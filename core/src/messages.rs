//! User-facing strings.

pub const LOADING: &str = "Loading posts...";
pub const LOAD_POSTS_FAILED: &str = "Failed to load posts.";
pub const EMPTY_FEED: &str = "No posts yet.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";
pub const DELETE_FAILED: &str = "Failed to delete the post.";
pub const CREATE_FAILED: &str = "Failed to create post";
pub const UPDATE_FAILED: &str = "Failed to update post";
pub const COMMENT_FAILED: &str = "Failed to add comment";
pub const LIKE_FAILED: &str = "Failed to like post";
pub const UNLIKE_FAILED: &str = "Failed to remove like";
pub const NAME_REQUIRED: &str = "Set a display name first.";
pub const NO_COMMENTS: &str = "No comments yet.";
