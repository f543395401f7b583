use std::io;
use std::os::unix::io::{AsFd, AsRawFd, RawFd};

use super::{ResizeSignal, WindowSizeQuery};
use crate::{QueryError, SignalNumber, TerminalSize};

/// Terminal capabilities of Unix-family targets.
#[derive(Clone, Copy, Debug)]
pub struct Unix;

impl ResizeSignal for Unix {
    const SIGNAL: SignalNumber = SignalNumber::new(libc::SIGWINCH);
}

impl WindowSizeQuery for Unix {
    fn query_window_size() -> Result<TerminalSize, QueryError> {
        query_window_size_using_fd(io::stdin())
    }
}

// We need to convert from c_int to c_ulong at least on DragonFly and FreeBSD.
#[cfg(any(target_os = "dragonfly", target_os = "freebsd"))]
fn ioctl_conv<T: Into<libc::c_ulong>>(v: T) -> libc::c_ulong {
    v.into()
}

// No-op on any other operating system.
#[cfg(not(any(target_os = "dragonfly", target_os = "freebsd")))]
fn ioctl_conv<T: Copy>(v: T) -> T {
    v
}

/// Returns the size of the terminal behind `fd`.
pub fn query_window_size_using_fd<F: AsFd>(fd: F) -> Result<TerminalSize, QueryError> {
    query_window_size_using_raw_fd(fd.as_fd().as_raw_fd())
}

/// Returns the size of the terminal behind the raw descriptor `fd`.
///
/// A closed or invalid descriptor yields `QueryFailed(EBADF)`.
pub fn query_window_size_using_raw_fd(fd: RawFd) -> Result<TerminalSize, QueryError> {
    let mut winsize = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // The kernel only writes into `winsize`, which outlives the call.
    let result = unsafe { libc::ioctl(fd, ioctl_conv(libc::TIOCGWINSZ), &mut winsize) };
    if result == -1 {
        let error = QueryError::last_os_error();
        tracing::debug!(fd, code = ?error.raw_os_error(), "window size query failed");
        return Err(error);
    }

    let size = TerminalSize {
        rows: winsize.ws_row,
        cols: winsize.ws_col,
        pixel_width: winsize.ws_xpixel,
        pixel_height: winsize.ws_ypixel,
    };
    tracing::trace!(fd, rows = size.rows, cols = size.cols, "window size query");
    Ok(size)
}
