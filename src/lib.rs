//! Terminal window size and resize signal accessors.
//!
//! [`query_window_size`] asks the kernel for the geometry of the terminal on
//! standard input. [`signal_number`] reports the signal the kernel raises when
//! that geometry changes, so a caller can install its own handler and query
//! again. Nothing here installs handlers, polls or caches.

use std::fmt;

mod error;
#[cfg(unix)]
pub mod mode;
pub mod tty;

pub use crate::error::QueryError;
pub use crate::tty::query_window_size;
#[cfg(unix)]
pub use crate::tty::{query_window_size_using_fd, query_window_size_using_raw_fd, signal_number};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Width(pub u16);
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(pub u16);

/// Terminal geometry as reported by the kernel.
///
/// Zero `rows` or `cols` means the size is unknown. Pixel dimensions are zero
/// when the terminal driver does not report them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub rows: u16,
    pub cols: u16,
    pub pixel_width: u16,
    pub pixel_height: u16,
}

impl TerminalSize {
    pub fn is_known(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// Returns `None` when either character dimension is zero.
    pub fn dimensions(&self) -> Option<(Width, Height)> {
        if self.is_known() {
            Some((Width(self.cols), Height(self.rows)))
        } else {
            None
        }
    }
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Platform-defined identifier of the "terminal resized" signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignalNumber(std::os::raw::c_int);

impl SignalNumber {
    #[cfg_attr(not(unix), allow(dead_code))]
    pub(crate) const fn new(number: std::os::raw::c_int) -> Self {
        SignalNumber(number)
    }

    pub const fn as_raw(self) -> std::os::raw::c_int {
        self.0
    }
}

impl From<SignalNumber> for std::os::raw::c_int {
    fn from(signal: SignalNumber) -> Self {
        signal.0
    }
}

impl fmt::Display for SignalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(rows: u16, cols: u16) -> TerminalSize {
        TerminalSize {
            rows,
            cols,
            ..Default::default()
        }
    }

    #[test]
    fn terminal_size_known() {
        assert!(size(24, 80).is_known());
        assert_eq!(size(24, 80).dimensions(), Some((Width(80), Height(24))));
    }

    #[test]
    fn terminal_size_zero_rows_unknown() {
        assert!(!size(0, 80).is_known());
        assert_eq!(size(0, 80).dimensions(), None);
    }

    #[test]
    fn terminal_size_zero_cols_unknown() {
        assert!(!size(24, 0).is_known());
        assert_eq!(size(24, 0).dimensions(), None);
    }

    #[test]
    fn terminal_size_display() {
        assert_eq!(size(40, 120).to_string(), "120x40");
    }

    #[test]
    fn signal_number_into_raw() {
        let signal = SignalNumber::new(28);
        assert_eq!(signal.as_raw(), 28);
        assert_eq!(std::os::raw::c_int::from(signal), 28);
        assert_eq!(signal.to_string(), "28");
    }
}
