//! Persistent console input history.

use crate::errors::ConsoleError;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Name of the history file inside the history directory.
pub const HISTORY_FILE: &str = ".liner_history";

/// History shared between the console loop and the signal listener.
pub type SharedHistory = Arc<Mutex<History>>;

/// Lines entered during this and earlier sessions.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    entries: Vec<String>,
    flushed: bool,
}

impl History {
    /// Creates an empty history that will be written to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
            flushed: false,
        }
    }

    /// Loads earlier entries from `path`.
    ///
    /// A missing or unreadable file leaves the history empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let mut history = Self::new(path);
        match File::open(&history.path) {
            Ok(file) => {
                for line in BufReader::new(file).lines() {
                    match line {
                        Ok(line) if !line.is_empty() => history.entries.push(line),
                        Ok(_) => {}
                        Err(e) => {
                            warn!("Error reading history file {}: {}", history.path.display(), e);
                            break;
                        }
                    }
                }
                debug!("Loaded {} history entries", history.entries.len());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Error opening history file {}: {}", history.path.display(), e),
        }
        history
    }

    /// Appends a line.
    pub fn append<S: Into<String>>(&mut self, line: S) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the history file with the current entries.
    ///
    /// Only the first call in a session writes; later calls return
    /// `Ok(false)`.
    pub fn flush(&mut self) -> Result<bool, ConsoleError> {
        if self.flushed {
            return Ok(false);
        }
        self.flushed = true;

        let to_err = |source| ConsoleError::HistoryWrite {
            path: self.path.clone(),
            source,
        };
        let file = File::create(&self.path).map_err(to_err)?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(writer, "{}", entry).map_err(to_err)?;
        }
        writer.flush().map_err(to_err)?;

        debug!("Wrote {} history entries to {}", self.entries.len(), self.path.display());
        Ok(true)
    }

    /// Wraps the history for sharing with the signal listener.
    pub fn shared(self) -> SharedHistory {
        Arc::new(Mutex::new(self))
    }
}

/// Creates the history directory if it does not exist.
pub fn prepare_dir<P: AsRef<Path>>(dir: P) -> Result<PathBuf, ConsoleError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ConsoleError::HistoryDir {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(dir.join(HISTORY_FILE))
}
