//! Non-canonical, no-echo input on a terminal descriptor.

use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::{AsRawFd, BorrowedFd};

const READ_TIMEOUT_IN_DECISECONDS: libc::cc_t = 5;

/// Guard that keeps a terminal in raw input mode.
///
/// Canonical line editing and echo are switched off on creation and reads
/// time out after half a second without input. The saved attributes are
/// applied again by [`restore`](RawInput::restore) or on drop.
pub struct RawInput<'fd> {
    fd: BorrowedFd<'fd>,
    saved: libc::termios,
    restored: bool,
}

impl RawInput<'static> {
    pub fn stdin() -> io::Result<Self> {
        // Descriptor 0 stays open for the lifetime of the process.
        let fd = unsafe { BorrowedFd::borrow_raw(libc::STDIN_FILENO) };
        RawInput::enable(fd)
    }
}

impl<'fd> RawInput<'fd> {
    pub fn enable(fd: BorrowedFd<'fd>) -> io::Result<Self> {
        let saved = get_attributes(fd)?;
        let mut raw = saved;
        raw.c_lflag &= !(libc::ICANON | libc::ECHO);
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = READ_TIMEOUT_IN_DECISECONDS;
        set_attributes(fd, &raw)?;
        tracing::debug!(fd = fd.as_raw_fd(), "raw input enabled");
        Ok(RawInput {
            fd,
            saved,
            restored: false,
        })
    }

    /// Reads a single byte. Returns `None` when no input arrived within the
    /// read timeout or at end of input.
    pub fn read_byte(&self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        loop {
            let count = unsafe {
                libc::read(
                    self.fd.as_raw_fd(),
                    &mut byte as *mut u8 as *mut libc::c_void,
                    1,
                )
            };
            match count {
                1 => return Ok(Some(byte)),
                0 => return Ok(None),
                _ => {
                    let error = io::Error::last_os_error();
                    if error.kind() != io::ErrorKind::Interrupted {
                        return Err(error);
                    }
                }
            }
        }
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        set_attributes(self.fd, &self.saved)
    }
}

impl Drop for RawInput<'_> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }

        if let Err(error) = set_attributes(self.fd, &self.saved) {
            tracing::warn!(fd = self.fd.as_raw_fd(), %error, "failed to restore terminal attributes");
        }
    }
}

fn get_attributes(fd: BorrowedFd<'_>) -> io::Result<libc::termios> {
    let mut attributes = MaybeUninit::<libc::termios>::uninit();
    if unsafe { libc::tcgetattr(fd.as_raw_fd(), attributes.as_mut_ptr()) } == -1 {
        return Err(io::Error::last_os_error());
    }

    // tcgetattr filled the structure.
    Ok(unsafe { attributes.assume_init() })
}

fn set_attributes(fd: BorrowedFd<'_>, attributes: &libc::termios) -> io::Result<()> {
    if unsafe { libc::tcsetattr(fd.as_raw_fd(), libc::TCSANOW, attributes) } == -1 {
        return Err(io::Error::last_os_error());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::io::AsFd;

    #[test]
    fn enable_on_regular_file_fails() {
        let dev_null = File::open("/dev/null").expect("Failed to open /dev/null.");
        let error = RawInput::enable(dev_null.as_fd()).err().unwrap();
        assert_eq!(error.raw_os_error(), Some(libc::ENOTTY));
    }
}
