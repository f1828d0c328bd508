//! Process-wide console state, created when the console starts.

use crate::completion::Completions;
use crate::errors::ConsoleError;
use crate::history::{self, History, SharedHistory};
use crate::signal::{self, SignalSender, SignalState};
use std::num::NonZeroU64;
use std::path::Path;
use std::sync::{Arc, PoisonError};
use std::thread;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Longest wait in [`Session::settle`].
const SETTLE_TIMEOUT: Duration = Duration::from_millis(500);

/// One interactive console session.
pub struct Session {
    nonce: NonZeroU64,
    completions: Completions,
    history: SharedHistory,
    signals: SignalSender,
    signal_state: Arc<SignalState>,
    listener: Option<JoinHandle<()>>,
}

impl Session {
    /// Opens a session storing history under `history_dir`.
    ///
    /// Fails if the directory cannot be created. The signal listener is
    /// spawned on `handle`.
    pub fn open<P: AsRef<Path>>(
        history_dir: P,
        completions: Completions,
        handle: &Handle,
    ) -> Result<Self, ConsoleError> {
        let history_path = history::prepare_dir(history_dir)?;
        let history = History::load(history_path).shared();

        let (signals, receiver) = signal::channel();
        let signal_state = receiver.state();
        let listener = signal::spawn_listener(handle, receiver, history.clone());

        let nonce = NonZeroU64::new(rand::random::<u64>() | 1).unwrap_or(NonZeroU64::MIN);
        debug!("Console session {} opened", nonce);

        Ok(Self {
            nonce,
            completions,
            history,
            signals,
            signal_state,
            listener: Some(listener),
        })
    }

    /// Marker that distinguishes a running console. Never zero.
    pub fn nonce(&self) -> NonZeroU64 {
        self.nonce
    }

    pub fn completions(&self) -> &Completions {
        &self.completions
    }

    /// A sender for background operations to report errors.
    pub fn signals(&self) -> SignalSender {
        self.signals.clone()
    }

    /// Whether the listener handled a fatal signal.
    pub fn is_fatal(&self) -> bool {
        self.signal_state.is_fatal()
    }

    /// Blocks until the listener has handled every queued signal, a fatal
    /// one arrived, or a short timeout passed. Called from the console thread
    /// after a command, so errors it raised are printed before the next
    /// prompt.
    pub fn settle(&self) {
        let start = Instant::now();
        while self.signal_state.pending() > 0 && !self.is_fatal() {
            if start.elapsed() >= SETTLE_TIMEOUT {
                debug!("{} signals still pending", self.signal_state.pending());
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    pub fn history(&self) -> SharedHistory {
        self.history.clone()
    }

    /// Snapshot of the current history entries.
    pub fn history_entries(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries()
            .to_vec()
    }

    pub(crate) fn record(&self, line: &str) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(line);
    }

    /// Flushes history and stops the signal listener.
    pub fn close(mut self) {
        if let Err(e) = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
        {
            error!("{}", e);
        }
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
        debug!("Console session {} closed", self.nonce);
    }
}
