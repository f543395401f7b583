use std::io;
use thiserror::Error;

/// Failure of a window size query.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The build target has no terminal-control interface.
    #[error("terminal size query is not supported on this platform")]
    UnsupportedPlatform,
    /// The device-control call failed; carries the OS error code.
    #[error("terminal size query failed: {}", os_error(.0))]
    QueryFailed(i32),
}

impl QueryError {
    #[cfg(unix)]
    pub(crate) fn last_os_error() -> Self {
        QueryError::QueryFailed(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// OS error code of a failed query, `None` for `UnsupportedPlatform`.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            QueryError::QueryFailed(code) => Some(*code),
            QueryError::UnsupportedPlatform => None,
        }
    }

    /// True when the queried descriptor is not a terminal device.
    pub fn is_not_a_terminal(&self) -> bool {
        #[cfg(unix)]
        {
            self.raw_os_error() == Some(libc::ENOTTY)
        }
        #[cfg(not(unix))]
        {
            false
        }
    }
}

impl From<QueryError> for io::Error {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::QueryFailed(code) => io::Error::from_raw_os_error(code),
            QueryError::UnsupportedPlatform => io::Error::new(io::ErrorKind::Unsupported, error),
        }
    }
}

fn os_error(code: &i32) -> io::Error {
    io::Error::from_raw_os_error(*code)
}
