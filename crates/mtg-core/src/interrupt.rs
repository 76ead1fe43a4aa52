//! Cooperative stop requests.
//!
//! Signal handlers only store a [`StopReason`] into a shared atomic; the
//! refresh loop checks it between ticks and performs teardown itself. Nothing
//! here touches the terminal.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Granularity of [`StopSignal::wait_timeout`].
const WAIT_SLICE: Duration = Duration::from_millis(20);

/// Why the loop was asked to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum StopReason {
    /// Ctrl+C: SIGINT, or the key press while the terminal is in raw mode.
    Interrupt = 1,
    /// SIGHUP: the controlling terminal went away.
    Hangup = 2,
    /// SIGTERM.
    Terminate = 3,
    /// Quit key (`q` / `Esc`).
    Quit = 4,
}

impl StopReason {
    fn from_raw(raw: usize) -> Option<Self> {
        match raw {
            1 => Some(Self::Interrupt),
            2 => Some(Self::Hangup),
            3 => Some(Self::Terminate),
            4 => Some(Self::Quit),
            _ => None,
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Interrupt => "interrupt",
            Self::Hangup => "hangup",
            Self::Terminate => "terminate",
            Self::Quit => "quit",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Error setting Ctrl+C handler")]
    CtrlC(#[from] ctrlc::Error),
    #[error("Error registering {signal} handler")]
    Register {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Shared stop flag. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    reason: Arc<AtomicUsize>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. The first reason recorded is kept.
    pub fn request(&self, reason: StopReason) {
        let _ = self.reason.compare_exchange(
            0,
            reason as usize,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }

    pub fn is_requested(&self) -> bool {
        self.reason.load(Ordering::SeqCst) != 0
    }

    pub fn reason(&self) -> Option<StopReason> {
        StopReason::from_raw(self.reason.load(Ordering::SeqCst))
    }

    /// Sleeps for up to `timeout`, returning early once a stop is requested.
    ///
    /// Returns `true` if a stop was requested.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_requested() {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            std::thread::sleep(remaining.min(WAIT_SLICE));
        }
    }
}

/// Routes SIGINT, SIGHUP and SIGTERM into `stop`.
///
/// Call once per process; the Ctrl+C handler can only be installed once.
///
/// # Errors
/// Returns an error if any handler cannot be registered.
pub fn install(stop: &StopSignal) -> Result<(), SignalError> {
    let on_ctrl_c = stop.clone();
    ctrlc::set_handler(move || on_ctrl_c.request(StopReason::Interrupt))?;

    #[cfg(unix)]
    {
        use signal_hook::consts::{SIGHUP, SIGTERM};

        // The handler only stores into the atomic, which is async-signal-safe.
        // A later signal overwrites the reason; either way the loop stops.
        for (signal, name, reason) in [
            (SIGHUP, "SIGHUP", StopReason::Hangup),
            (SIGTERM, "SIGTERM", StopReason::Terminate),
        ] {
            signal_hook::flag::register_usize(signal, Arc::clone(&stop.reason), reason as usize)
                .map_err(|source| SignalError::Register {
                    signal: name,
                    source,
                })?;
        }
    }

    tracing::debug!("stop signal handlers installed");
    Ok(())
}
