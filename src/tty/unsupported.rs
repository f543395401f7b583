use super::WindowSizeQuery;
use crate::{QueryError, TerminalSize};

/// Stand-in for targets without POSIX terminal control.
///
/// There is no resize signal here, so this type does not implement
/// [`ResizeSignal`](super::ResizeSignal).
#[derive(Clone, Copy, Debug)]
pub struct Unsupported;

impl WindowSizeQuery for Unsupported {
    fn query_window_size() -> Result<TerminalSize, QueryError> {
        Err(QueryError::UnsupportedPlatform)
    }
}
