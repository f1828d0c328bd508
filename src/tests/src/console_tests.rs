//! End-to-end tests of the console driving real commands.

use crate::mock::{context, write_config, Recorded};
use cli::opts::SUGGESTIONS;
use cli::CommandDispatcher;
use console::history::HISTORY_FILE;
use console::{Completions, Console, ConsoleError, LineReader, ReadEvent, Session};
use serde_json::json;
use std::collections::VecDeque;
use std::fs;
use tempfile::tempdir;
use tokio::runtime::Runtime;

/// Replays a fixed list of input events.
struct Script {
    events: VecDeque<ReadEvent>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            events: lines.iter().map(|l| ReadEvent::Line(l.to_string())).collect(),
        }
    }
}

impl LineReader for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadEvent, ConsoleError> {
        Ok(self.events.pop_front().unwrap_or(ReadEvent::Eof))
    }

    fn add_history(&mut self, _line: &str) {}
}

/// A scripted session runs every command, survives bad input and leaves
/// its lines in the history file.
#[test]
fn test_scripted_session() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let mut ctx = context(&write_config(dir.path()), &recorded, false);

    let session = Session::open(dir.path(), Completions::new(), rt.handle()).unwrap();
    ctx.enter_console(session.nonce(), session.signals());
    let dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    let script = Script::new(&[
        "maxBlock",
        "frobnicate",
        r#"callContract NewToken {"Name": "ibax token", "Amount": "100"}"#,
        r#"getList keys -w {"id": {"$gt": 2}"#,
        "console",
        "config",
        "exit",
        "keysCount",
    ]);
    Console::new(session, script, dispatcher).run();

    let calls = recorded.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "maxBlock");
    assert_eq!(
        calls[1],
        (
            "callContract".to_string(),
            json!(["NewToken", {"Name": "ibax token", "Amount": "100"}])
        )
    );

    let history = fs::read_to_string(dir.path().join(HISTORY_FILE)).unwrap();
    let lines: Vec<&str> = history.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "maxBlock");
    assert_eq!(lines[3], r#"getList keys -w {"id": {"$gt": 2}"#);
    assert!(!history.contains("exit"));
    assert!(!history.contains("keysCount"));
}

/// History written by one session is loaded by the next.
#[test]
fn test_history_survives_sessions() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let config = write_config(dir.path());

    for line in ["maxBlock", "keysCount"] {
        let mut ctx = context(&config, &recorded, false);
        let session = Session::open(dir.path(), Completions::new(), rt.handle()).unwrap();
        ctx.enter_console(session.nonce(), session.signals());
        let dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());
        Console::new(session, Script::new(&[line]), dispatcher).run();
    }

    let session = Session::open(dir.path(), Completions::new(), rt.handle()).unwrap();
    assert_eq!(session.history_entries(), vec!["maxBlock", "keysCount"]);
    session.close();
}

/// The registered suggestions complete the way the console offers them.
#[test]
fn test_suggestion_completion() {
    let completions = Completions::new();
    completions.register(SUGGESTIONS.iter().copied());

    assert_eq!(
        completions.complete("callutxo"),
        vec![
            "callUtxo Transfer",
            "callUtxo ContractToUTXO",
            "callUtxo UTXOToContract"
        ]
    );
    assert_eq!(completions.complete("getRow"), vec!["getRow --id"]);
    assert!(completions.complete("zzz").is_empty());
    assert_eq!(completions.complete("").len(), SUGGESTIONS.len());
}

/// The session nonce is never zero and differs between sessions.
#[test]
fn test_session_nonce() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let first = Session::open(dir.path(), Completions::new(), rt.handle()).unwrap();
    let second = Session::open(dir.path(), Completions::new(), rt.handle()).unwrap();
    assert_ne!(first.nonce().get(), 0);
    assert_ne!(first.nonce(), second.nonce());
    first.close();
    second.close();
}
