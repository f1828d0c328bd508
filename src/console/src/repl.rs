//! The read-tokenize-dispatch loop.

use crate::errors::ConsoleError;
use crate::session::Session;
use crate::tokenizer;
use tracing::{debug, info};

/// Prompt shown for each line.
pub const PROMPT: &str = ">";

/// What the line reader produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A line of input
    Line(String),
    /// The user abandoned the current line (Ctrl-C)
    Interrupted,
    /// No more input
    Eof,
}

/// Source of console input lines.
pub trait LineReader {
    /// Blocks until a line, an interrupt or end of input.
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent, ConsoleError>;

    /// Makes `line` available to history navigation.
    fn add_history(&mut self, line: &str);
}

/// Executes tokenized command lines.
pub trait Dispatch {
    /// Resolves and runs one command. Errors are reported by the console
    /// and never end the session.
    fn dispatch(&mut self, args: &[String]) -> anyhow::Result<()>;
}

/// Console loop states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Reading,
    Tokenizing(String),
    Dispatching(Vec<String>),
    Closing,
}

/// Why the console loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `exit`, end of input or a read error
    Normal,
    /// A background operation reported a fatal error
    Fatal,
}

/// Returns true for `exit`, ignoring surrounding whitespace and trailing
/// semicolons.
pub fn is_exit(line: &str) -> bool {
    line.trim().trim_end_matches(';').trim_end() == "exit"
}

/// An interactive console bound to a session.
pub struct Console<R, D> {
    session: Session,
    reader: R,
    dispatcher: D,
}

impl<R: LineReader, D: Dispatch> Console<R, D> {
    /// Creates a console. Earlier history entries are replayed into the
    /// reader.
    pub fn new(session: Session, mut reader: R, dispatcher: D) -> Self {
        for entry in session.history_entries() {
            reader.add_history(&entry);
        }
        Self {
            session,
            reader,
            dispatcher,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Advances the loop by one transition.
    pub fn step(&mut self, state: State) -> State {
        match state {
            State::Reading if self.session.is_fatal() => State::Closing,
            State::Reading => match self.reader.read_line(PROMPT) {
                Ok(ReadEvent::Line(line)) => {
                    if line.trim().is_empty() {
                        State::Reading
                    } else if is_exit(&line) {
                        info!("Exit");
                        State::Closing
                    } else {
                        State::Tokenizing(line)
                    }
                }
                Ok(ReadEvent::Interrupted) => State::Reading,
                Ok(ReadEvent::Eof) => {
                    println!("EOF");
                    State::Closing
                }
                Err(e) => {
                    println!("Error reading line: {}", e);
                    State::Closing
                }
            },
            State::Tokenizing(line) => {
                self.session.record(&line);
                self.reader.add_history(&line);
                match tokenizer::split_line(&line) {
                    Ok(args) => State::Dispatching(args),
                    Err(e) => {
                        println!("{}", e);
                        State::Reading
                    }
                }
            }
            State::Dispatching(args) => {
                debug!("Dispatching {:?}", args);
                if let Err(e) = self.dispatcher.dispatch(&args) {
                    println!("{}", e);
                }
                self.session.settle();
                if self.session.is_fatal() {
                    State::Closing
                } else {
                    State::Reading
                }
            }
            State::Closing => State::Closing,
        }
    }

    /// Runs until exit, end of input or a fatal error, then closes the
    /// session and releases the terminal.
    pub fn run(mut self) -> ExitReason {
        let mut state = State::Reading;
        while state != State::Closing {
            state = self.step(state);
        }
        let reason = if self.session.is_fatal() {
            ExitReason::Fatal
        } else {
            ExitReason::Normal
        };
        self.close();
        reason
    }

    /// Flushes history and releases the reader.
    pub fn close(self) {
        let Console { session, reader, .. } = self;
        session.close();
        drop(reader);
    }
}
