//! Plain-text rendering of the feed, a post card and the detail view.
//!
//! Every function here is a pure function of its arguments.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::dashboard::{FeedState, PostDetail};
use crate::messages;
use crate::types::{Comment, Post};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn render_feed(state: &FeedState) -> String {
    if state.is_loading {
        return format!("{}\n", messages::LOADING);
    }
    if let Some(error) = &state.error {
        return format!("{error}\n");
    }
    if state.posts.is_empty() {
        return format!("{}\n", messages::EMPTY_FEED);
    }
    state
        .posts
        .iter()
        .map(|post| render_card(post, state.selected_id == Some(post.id)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One post. `selected` marks the card the detail view belongs to.
pub fn render_card(post: &Post, selected: bool) -> String {
    let marker = if selected { ">" } else { " " };
    let mut out = format!(
        "{marker} #{} {} · {}\n",
        post.id,
        post.user_name,
        timestamp(&post.created_at)
    );
    for line in post.content.lines() {
        let _ = writeln!(out, "    {line}");
    }
    let _ = writeln!(
        out,
        "    likes {}  comments {}",
        post.like_count, post.comment_count
    );
    out
}

pub fn render_detail(detail: &PostDetail) -> String {
    let mut out = render_card(&detail.post, true);
    out.push('\n');
    out.push_str(&render_comments(&detail.comments));
    out
}

pub fn render_comments(comments: &[Comment]) -> String {
    let mut out = String::from("Comments\n");
    if comments.is_empty() {
        let _ = writeln!(out, "  {}", messages::NO_COMMENTS);
        return out;
    }
    for comment in comments {
        let _ = writeln!(
            out,
            "  {} · {}",
            comment.user_name,
            timestamp(&comment.created_at)
        );
        for line in comment.content.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    out
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIME_FORMAT).to_string()
}
