//! Maps one CLI command onto the dashboard and prints the resulting view.

use std::io::Write;

use anyhow::{bail, Result};
use feed_core::{
    view, CommentForm, Dashboard, KeyValueStore, PostForm, PostId, Transport, UpdatePost,
    UserPrompt,
};

use crate::config::Command;

/// Runs `command`. `Ok(false)` means the operation failed and the user has
/// already been told through the prompt or the inline feed error.
pub fn run<T, S, P, W>(dash: &mut Dashboard<T, S, P>, command: Command, out: &mut W) -> Result<bool>
where
    T: Transport,
    S: KeyValueStore,
    P: UserPrompt,
    W: Write,
{
    match command {
        Command::List => {
            let ok = dash.refresh();
            write!(out, "{}", view::render_feed(dash.state()))?;
            Ok(ok)
        }
        Command::Show { id } => show(dash, id, out),
        Command::Post { user, content } => {
            let mut form = PostForm::prefilled(user.as_deref().unwrap_or(dash.user_name()));
            form.content = content;
            let Some(input) = form.submit() else {
                bail!("both an author (--user or a saved display name) and content are required");
            };
            if user.is_some() {
                dash.set_user_name(&input.user_name)?;
            }
            if dash.create(&input).is_none() {
                return Ok(false);
            }
            write!(out, "{}", view::render_feed(dash.state()))?;
            Ok(true)
        }
        Command::Edit { id, content } => {
            let input = UpdatePost {
                content: Some(content),
            };
            if dash.update(id, &input).is_none() {
                return Ok(false);
            }
            show(dash, id, out)
        }
        Command::Delete { id, .. } => {
            if !dash.delete(id) {
                return Ok(false);
            }
            write!(out, "{}", view::render_feed(dash.state()))?;
            Ok(true)
        }
        Command::Like { id } => {
            if !dash.like(id) {
                return Ok(false);
            }
            show(dash, id, out)
        }
        Command::Unlike { id } => {
            if !dash.unlike(id) {
                return Ok(false);
            }
            show(dash, id, out)
        }
        Command::Comment { id, user, content } => {
            let mut form = CommentForm::prefilled(user.as_deref().unwrap_or(dash.user_name()));
            form.content = content;
            let Some(input) = form.submit() else {
                bail!("both an author (--user or a saved display name) and content are required");
            };
            dash.select(id);
            if dash.submit_comment(&input).is_none() {
                return Ok(false);
            }
            show(dash, id, out)
        }
        Command::Whoami { set } => {
            if let Some(name) = set {
                dash.set_user_name(&name)?;
            }
            match dash.user_name() {
                "" => writeln!(out, "(no display name set)")?,
                name => writeln!(out, "{name}")?,
            }
            Ok(true)
        }
    }
}

fn show<T, S, P, W>(dash: &mut Dashboard<T, S, P>, id: PostId, out: &mut W) -> Result<bool>
where
    T: Transport,
    S: KeyValueStore,
    P: UserPrompt,
    W: Write,
{
    dash.select(id);
    let Some(detail) = dash.load_detail()? else {
        return Ok(false);
    };
    write!(out, "{}", view::render_detail(&detail))?;
    Ok(true)
}
