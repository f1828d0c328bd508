//! Terminal line editing backed by rustyline.

use crate::completion::Completions;
use crate::errors::ConsoleError;
use crate::repl::{LineReader, ReadEvent};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

/// Completes the line typed so far against the registered words.
pub struct ConsoleHelper {
    completions: Completions,
}

impl ConsoleHelper {
    pub fn new(completions: Completions) -> Self {
        Self { completions }
    }
}

impl Completer for ConsoleHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .completions
            .complete(&line[..pos])
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Highlighter for ConsoleHelper {}

impl Validator for ConsoleHelper {}

impl Helper for ConsoleHelper {}

/// Reads lines from the terminal.
pub struct EditorReader {
    editor: Editor<ConsoleHelper, DefaultHistory>,
}

impl EditorReader {
    pub fn new(completions: Completions) -> Result<Self, ConsoleError> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor =
            Editor::with_config(config).map_err(|e| ConsoleError::Editor(e.to_string()))?;
        editor.set_helper(Some(ConsoleHelper::new(completions)));
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent, ConsoleError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadEvent::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(e) => Err(ConsoleError::Editor(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            debug!("Failed to add history entry: {}", e);
        }
    }
}
