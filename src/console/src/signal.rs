//! Error relay from background operations to the console.
//!
//! Producers such as login never block: when the queue is full the signal is
//! dropped. A single listener task prints each signal. On a fatal one it
//! flushes history and marks the queue state fatal so the console loop can
//! close the terminal and exit with status 1.

use crate::history::SharedHistory;
use colored::Colorize;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Capacity of the signal queue.
pub const SIGNAL_CAPACITY: usize = 3;

/// How long the listener waits after a fatal signal for the console loop to
/// close before it ends the process itself.
pub const FATAL_GRACE: Duration = Duration::from_secs(2);

/// An error reported by a background operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSignal {
    /// Description of the failure
    pub cause: String,
    /// Whether the process must terminate
    pub fatal: bool,
}

impl fmt::Display for ErrorSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

/// State shared by both halves of the queue.
#[derive(Debug, Default)]
pub struct SignalState {
    pending: AtomicUsize,
    fatal: AtomicBool,
}

impl SignalState {
    /// Signals queued but not yet handled by the listener.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Whether a fatal signal was handled.
    pub fn is_fatal(&self) -> bool {
        self.fatal.load(Ordering::Acquire)
    }

    fn handled(&self, signal: &ErrorSignal) {
        if signal.fatal {
            self.fatal.store(true, Ordering::Release);
        }
        self.pending.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Sending half of the signal queue.
#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: mpsc::Sender<ErrorSignal>,
    state: Arc<SignalState>,
}

impl SignalSender {
    /// Queues a signal without waiting. Returns `false` if it was dropped.
    pub fn send<E: fmt::Display>(&self, cause: E, fatal: bool) -> bool {
        let signal = ErrorSignal {
            cause: cause.to_string(),
            fatal,
        };
        // counted before the send so the listener never sees it uncounted
        self.state.pending.fetch_add(1, Ordering::AcqRel);
        let result = self.tx.try_send(signal);
        if result.is_err() {
            self.state.pending.fetch_sub(1, Ordering::AcqRel);
        }
        match result {
            Ok(()) => true,
            Err(TrySendError::Full(signal)) => {
                debug!("Signal queue full, dropping: {}", signal);
                false
            }
            Err(TrySendError::Closed(signal)) => {
                debug!("Signal listener gone, dropping: {}", signal);
                false
            }
        }
    }
}

/// Receiving half of the signal queue.
#[derive(Debug)]
pub struct SignalReceiver {
    rx: mpsc::Receiver<ErrorSignal>,
    state: Arc<SignalState>,
}

impl SignalReceiver {
    /// Waits for the next signal. `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<ErrorSignal> {
        self.rx.recv().await
    }

    /// Takes a queued signal without waiting.
    pub fn try_recv(&mut self) -> Option<ErrorSignal> {
        self.rx.try_recv().ok()
    }

    pub fn state(&self) -> Arc<SignalState> {
        self.state.clone()
    }
}

/// Creates a bounded signal queue of [`SIGNAL_CAPACITY`].
pub fn channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = mpsc::channel(SIGNAL_CAPACITY);
    let state = Arc::new(SignalState::default());
    (
        SignalSender {
            tx,
            state: state.clone(),
        },
        SignalReceiver { rx, state },
    )
}

/// Why the listener stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerExit {
    /// Every sender was dropped.
    Closed,
    /// A fatal signal arrived and history was flushed.
    Fatal,
}

/// Consumes signals until the queue closes or a fatal signal arrives.
///
/// History is flushed before the state is marked fatal, so a console that
/// sees the mark can close right away.
pub async fn listen(mut receiver: SignalReceiver, history: SharedHistory) -> ListenerExit {
    let state = receiver.state();
    while let Some(signal) = receiver.recv().await {
        println!("{}", signal.cause.red());
        if signal.fatal {
            {
                let mut history = history.lock().unwrap_or_else(PoisonError::into_inner);
                if let Err(e) = history.flush() {
                    error!("{}", e);
                }
            }
            state.handled(&signal);
            return ListenerExit::Fatal;
        }
        warn!("Continuing after error: {}", signal.cause);
        state.handled(&signal);
    }
    ListenerExit::Closed
}

/// Spawns the listener on `handle`.
///
/// After a fatal signal the console loop is expected to close the session,
/// which aborts this task. If it does not within [`FATAL_GRACE`], because it
/// is blocked on terminal input, the process exits with status 1.
pub fn spawn_listener(
    handle: &Handle,
    receiver: SignalReceiver,
    history: SharedHistory,
) -> JoinHandle<()> {
    handle.spawn(async move {
        if listen(receiver, history).await == ListenerExit::Fatal {
            tokio::time::sleep(FATAL_GRACE).await;
            error!("Console did not close after a fatal error");
            std::process::exit(1);
        }
    })
}
