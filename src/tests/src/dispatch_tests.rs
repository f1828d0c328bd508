//! Tests for running console lines through the command tree.

use crate::mock::{args, context, write_config, write_config_with_account, Recorded};
use cli::{execute, CliError, Command, CommandDispatcher};
use console::signal;
use serde_json::json;
use std::num::NonZeroU64;
use tempfile::tempdir;
use tokio::runtime::Runtime;

/// Flags given on one line must not be seen by the next.
#[test]
fn test_flags_reset_between_lines() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let ctx = context(&write_config(dir.path()), &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("getList keys -c id,amount -l 5")).unwrap();
    dispatcher.run_line(&args("getList keys")).unwrap();

    let calls = recorded.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "getList");
    assert_eq!(
        calls[0].1,
        json!([{"name": "keys", "limit": 5, "columns": "id,amount"}])
    );
    assert_eq!(calls[1].1, json!([{"name": "keys"}]));
}

/// A required flag given on an earlier line does not satisfy a later one.
#[test]
fn test_required_flag_is_not_remembered() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let ctx = context(&write_config(dir.path()), &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("getRow keys --id 7")).unwrap();
    let err = dispatcher.run_line(&args("getRow keys")).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(recorded.calls().len(), 1);
    assert_eq!(recorded.calls()[0].1, json!(["keys", 7, "", ""]));
}

/// An unknown command is reported and the dispatcher keeps working.
#[test]
fn test_unknown_command_is_not_fatal() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let ctx = context(&write_config(dir.path()), &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    let err = dispatcher.run_line(&args("getNothing 1")).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));

    dispatcher.run_line(&args("maxBlock")).unwrap();
    assert_eq!(recorded.calls()[0], ("maxBlock".to_string(), json!([])));
}

/// Connection flags stay in effect until overridden.
#[test]
fn test_global_flags_are_sticky() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let ctx = context(&write_config(dir.path()), &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("--rpcPort 9000 maxBlock")).unwrap();
    dispatcher.run_line(&args("keysCount")).unwrap();
    assert_eq!(recorded.ports(), vec![9000]);
    assert_eq!(dispatcher.context().globals().rpc_port, Some(9000));

    dispatcher.run_line(&args("--rpcPort 9001 keysCount")).unwrap();
    assert_eq!(recorded.ports(), vec![9000, 9001]);
    assert_eq!(recorded.calls().len(), 3);
}

/// In console mode a failed login becomes a non-fatal signal and the
/// command itself succeeds without a second report.
#[test]
fn test_login_failure_in_console_is_signalled() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let mut ctx = context(&write_config(dir.path()), &recorded, true);
    let (signals, mut receiver) = signal::channel();
    ctx.enter_console(NonZeroU64::new(7).unwrap(), signals);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("getTable keys")).unwrap();

    let signal = receiver.try_recv().unwrap();
    assert!(!signal.fatal);
    assert!(signal.cause.starts_with("[login] Authorization failed"));
    assert!(receiver.try_recv().is_none());
    assert!(recorded.calls().is_empty());
}

/// In console mode a missing config is signalled as well.
#[test]
fn test_missing_config_in_console_is_signalled() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let mut ctx = context(&dir.path().join("absent.json"), &recorded, false);
    let (signals, mut receiver) = signal::channel();
    ctx.enter_console(NonZeroU64::new(7).unwrap(), signals);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("maxBlock")).unwrap();

    let signal = receiver.try_recv().unwrap();
    assert!(signal.cause.starts_with("loading config"));
    assert!(recorded.ports().is_empty());
}

/// Outside the console the same failure is an error.
#[test]
fn test_missing_config_one_shot_is_error() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let mut ctx = context(&dir.path().join("absent.json"), &recorded, false);

    let err = rt.block_on(execute(Command::MaxBlock, &mut ctx)).unwrap_err();
    assert!(matches!(err, CliError::LoadConfig { .. }));
}

/// Inline JSON typed without outer quotes reaches the node as an object.
#[test]
fn test_inline_json_contract_params() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let ctx = context(&write_config(dir.path()), &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher
        .run_line(&args(r#"callUtxo Transfer {"recipient": "0666-7782", "amount": "1"} 10"#))
        .unwrap();

    assert_eq!(
        recorded.calls()[0],
        (
            "callUtxo".to_string(),
            json!(["Transfer", {"recipient": "0666-7782", "amount": "1"}, "10"])
        )
    );
}

/// Logging in once serves every later command of the session.
#[test]
fn test_login_happens_once() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let ctx = context(&write_config(dir.path()), &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("getTable keys")).unwrap();
    dispatcher.run_line(&args("getContractInfo MainCondition")).unwrap();
    assert_eq!(recorded.ports().len(), 1);

    // refresh builds a new client
    dispatcher.run_line(&args("refresh")).unwrap();
    assert_eq!(recorded.ports().len(), 2);
}

/// Without an account argument the balance of the configured account is
/// queried.
#[test]
fn test_balance_uses_configured_account() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let config = write_config_with_account(dir.path(), Some("0666-7782-1236-7218-6540"));
    let ctx = context(&config, &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    dispatcher.run_line(&args("getBalance")).unwrap();
    dispatcher.run_line(&args("getBalance 1234-5678 2")).unwrap();

    let calls = recorded.calls();
    assert_eq!(
        calls[0],
        ("getBalance".to_string(), json!(["0666-7782-1236-7218-6540"]))
    );
    assert_eq!(calls[1].1, json!(["1234-5678", 2]));
}

/// With no account anywhere the command fails before reaching the node and
/// names the config file to edit.
#[test]
fn test_balance_without_account_names_config() {
    let rt = Runtime::new().unwrap();
    let dir = tempdir().unwrap();
    let recorded = Recorded::default();
    let config = write_config(dir.path());
    let ctx = context(&config, &recorded, false);
    let mut dispatcher = CommandDispatcher::new(ctx, rt.handle().clone());

    let err = dispatcher.run_line(&args("getBalance")).unwrap_err();
    match err {
        CliError::InvalidArgument { what, reason } => {
            assert_eq!(what, "account");
            assert!(reason.contains(config.to_str().unwrap()));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(recorded.calls().is_empty());

    // an explicit account still works
    dispatcher.run_line(&args("getBalance 1234-5678")).unwrap();
    assert_eq!(recorded.calls()[0].1, json!(["1234-5678"]));
}
