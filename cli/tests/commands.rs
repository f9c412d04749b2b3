//! Drives CLI commands against the live mock server.

use std::collections::VecDeque;
use std::fs;

use feed_cli::{commands, Command, FileStore, UreqTransport};
use feed_core::{Dashboard, KeyValueStore, MemoryStore, PostApi, PostClient, UserPrompt};
use tempfile::TempDir;

/// Answers confirmations from a queue; an exhausted queue cancels.
struct ScriptedPrompt {
    answers: VecDeque<bool>,
    alerts: Vec<String>,
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, _message: &str) -> bool {
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

type TestDashboard<S = MemoryStore> = Dashboard<UreqTransport, S, ScriptedPrompt>;

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

fn dashboard_with<S: KeyValueStore>(base_url: &str, store: S, answers: &[bool]) -> TestDashboard<S> {
    let prompt = ScriptedPrompt {
        answers: answers.iter().copied().collect(),
        alerts: Vec::new(),
    };
    Dashboard::new(
        PostApi::new(PostClient::new(base_url), UreqTransport::new()),
        store,
        prompt,
    )
}

fn dashboard(base_url: &str, answers: &[bool]) -> TestDashboard {
    dashboard_with(base_url, MemoryStore::new(), answers)
}

fn run<S: KeyValueStore>(dash: &mut TestDashboard<S>, command: Command) -> (bool, String) {
    let mut out = Vec::new();
    let ok = commands::run(dash, command, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

#[test]
fn empty_feed_prints_empty_state() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    let (ok, out) = run(&mut dash, Command::List);
    assert!(ok);
    assert_eq!(out, "No posts yet.\n");
}

#[test]
fn post_then_list_shows_new_post_and_saves_name() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    let (ok, out) = run(
        &mut dash,
        Command::Post {
            user: Some("alice".to_string()),
            content: "hi".to_string(),
        },
    );
    assert!(ok);
    assert!(out.contains("#1 alice"), "output was {out:?}");
    assert!(out.contains("    hi\n"));
    assert_eq!(dash.user_name(), "alice");

    // Second post reuses the saved display name.
    let (ok, out) = run(
        &mut dash,
        Command::Post {
            user: None,
            content: "again".to_string(),
        },
    );
    assert!(ok);
    assert!(out.contains("#2 alice"));
}

#[test]
fn post_without_any_author_is_rejected_locally() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    let err = commands::run(
        &mut dash,
        Command::Post {
            user: None,
            content: "hi".to_string(),
        },
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("author"));
}

#[test]
fn declined_delete_keeps_post() {
    let base = start_server();
    let mut dash = dashboard(&base, &[false]);
    run(
        &mut dash,
        Command::Post {
            user: Some("alice".to_string()),
            content: "keep me".to_string(),
        },
    );

    let (ok, _) = run(&mut dash, Command::Delete { id: 1, yes: false });
    assert!(!ok);
    let (_, out) = run(&mut dash, Command::List);
    assert!(out.contains("keep me"));
}

#[test]
fn confirmed_delete_removes_post() {
    let base = start_server();
    let mut dash = dashboard(&base, &[true]);
    run(
        &mut dash,
        Command::Post {
            user: Some("alice".to_string()),
            content: "bye".to_string(),
        },
    );

    let (ok, out) = run(&mut dash, Command::Delete { id: 1, yes: false });
    assert!(ok);
    assert_eq!(out, "No posts yet.\n");
}

#[test]
fn comment_and_like_show_in_detail() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    run(
        &mut dash,
        Command::Post {
            user: Some("alice".to_string()),
            content: "hello".to_string(),
        },
    );

    let (ok, out) = run(
        &mut dash,
        Command::Comment {
            id: 1,
            user: Some("bob".to_string()),
            content: "welcome".to_string(),
        },
    );
    assert!(ok);
    assert!(out.contains("bob · "));
    assert!(out.contains("    welcome\n"));

    let (ok, out) = run(&mut dash, Command::Like { id: 1 });
    assert!(ok);
    assert!(out.contains("likes 1  comments 1"), "output was {out:?}");

    let (ok, out) = run(&mut dash, Command::Unlike { id: 1 });
    assert!(ok);
    assert!(out.contains("likes 0  comments 1"));
}

#[test]
fn edit_replaces_content() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    run(
        &mut dash,
        Command::Post {
            user: Some("alice".to_string()),
            content: "typo".to_string(),
        },
    );
    let (ok, out) = run(
        &mut dash,
        Command::Edit {
            id: 1,
            content: "fixed".to_string(),
        },
    );
    assert!(ok);
    assert!(out.contains("fixed"));
    assert!(!out.contains("typo"));
}

#[test]
fn whoami_reports_and_sets_name() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    let (_, out) = run(&mut dash, Command::Whoami { set: None });
    assert_eq!(out, "(no display name set)\n");
    let (_, out) = run(
        &mut dash,
        Command::Whoami {
            set: Some("carol".to_string()),
        },
    );
    assert_eq!(out, "carol\n");
}

#[test]
fn edit_of_missing_post_fails_with_alert() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    let (ok, out) = run(
        &mut dash,
        Command::Edit {
            id: 42,
            content: "x".to_string(),
        },
    );
    assert!(!ok);
    assert!(out.is_empty());
}

#[test]
fn rejected_post_keeps_saved_name() {
    let base = start_server();
    let mut dash = dashboard(&base, &[]);
    dash.set_user_name("alice").unwrap();

    let err = commands::run(
        &mut dash,
        Command::Post {
            user: Some("bob".to_string()),
            content: "   ".to_string(),
        },
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("content"));
    assert_eq!(dash.user_name(), "alice");
}

#[test]
fn failed_delete_alerts_once() {
    let base = start_server();
    let mut dash = dashboard(&base, &[true]);
    let (ok, out) = run(&mut dash, Command::Delete { id: 9, yes: false });
    assert!(!ok);
    assert!(out.is_empty());
    assert_eq!(dash.prompt().alerts.len(), 1);
}

#[test]
fn truncated_state_file_still_lists_posts() {
    let base = start_server();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"userName":"al"#).unwrap();

    let store = FileStore::open(&path).unwrap();
    let mut dash = dashboard_with(&base, store, &[]);
    assert_eq!(dash.user_name(), "");

    let (ok, out) = run(
        &mut dash,
        Command::Post {
            user: Some("alice".to_string()),
            content: "still here".to_string(),
        },
    );
    assert!(ok);
    assert!(out.contains("still here"));

    let (ok, out) = run(&mut dash, Command::List);
    assert!(ok);
    assert!(out.contains("#1 alice"), "output was {out:?}");
    assert_eq!(
        FileStore::open(&path).unwrap().get(feed_core::USER_NAME_KEY).as_deref(),
        Some("alice")
    );
}
