//! Interactive console for the IBAX RPC client.
//!
//! The console reads free-form lines, splits them into arguments with
//! [`tokenizer::split_line`] and hands them to a [`repl::Dispatch`]
//! implementation. Errors from background work arrive through the
//! [`signal`] queue.

pub mod completion;
pub mod editor;
pub mod errors;
pub mod history;
pub mod repl;
pub mod session;
pub mod signal;
pub mod tokenizer;

// Re-export commonly used types and functions
pub use completion::Completions;
pub use editor::EditorReader;
pub use errors::ConsoleError;
pub use history::History;
pub use repl::{is_exit, Console, Dispatch, ExitReason, LineReader, ReadEvent, State};
pub use session::Session;
pub use signal::{ErrorSignal, SignalSender};
pub use tokenizer::{split_line, tokenize};
