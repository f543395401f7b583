//! Per-platform terminal capabilities.
//!
//! [`Native`] names the implementation selected for the build target. Targets
//! without a resize signal do not implement [`ResizeSignal`], so
//! [`signal_number`] does not exist there.

use crate::{QueryError, TerminalSize};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use self::unix::{query_window_size_using_fd, query_window_size_using_raw_fd, Unix};
#[cfg(unix)]
pub type Native = Unix;

#[cfg(not(unix))]
mod unsupported;
#[cfg(not(unix))]
pub use self::unsupported::Unsupported;
#[cfg(not(unix))]
pub type Native = Unsupported;

/// A platform that defines a "terminal resized" signal.
pub trait ResizeSignal {
    const SIGNAL: crate::SignalNumber;
}

/// A platform able to report the size of the controlling terminal.
pub trait WindowSizeQuery {
    fn query_window_size() -> Result<TerminalSize, QueryError>;
}

/// Returns the signal raised when the controlling terminal is resized.
#[cfg(unix)]
pub fn signal_number() -> crate::SignalNumber {
    <Native as ResizeSignal>::SIGNAL
}

/// Returns the size of the terminal attached to standard input.
///
/// Fails with [`QueryError::QueryFailed`] when standard input is not a
/// terminal, and with [`QueryError::UnsupportedPlatform`] on targets without
/// terminal control.
pub fn query_window_size() -> Result<TerminalSize, QueryError> {
    <Native as WindowSizeQuery>::query_window_size()
}
