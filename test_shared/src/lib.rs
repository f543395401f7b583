#![allow(dead_code)]

use nanoid;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn create_tmp_dir() -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(nanoid::simple());
    fs::create_dir(dir.clone()).expect("failed to create dir");
    dir
}

pub fn create_tmp_file(data: &str) -> PathBuf {
    let dir = create_tmp_dir();
    create_named_file(&dir, &nanoid::simple(), data)
}

pub fn create_named_file(dir: &Path, name: &str, data: &str) -> PathBuf {
    let mut file = dir.to_path_buf();
    file.push(name);
    fs::write(&file, data).expect("failed to write to file");
    file
}

pub fn remove_tmp_file(file: &Path) {
    fs::remove_dir_all(file.parent().unwrap()).expect("Failed to remove test directory.");
}

#[cfg(unix)]
pub use self::pty::{open_pty, Pty};

#[cfg(unix)]
mod pty {
    use std::ffi::CStr;
    use std::fs::{File, OpenOptions};
    use std::io;
    use std::os::unix::fs::OpenOptionsExt;
    use std::os::unix::io::{AsRawFd, FromRawFd};
    use std::path::PathBuf;

    /// Pseudo-terminal pair. Resizing goes through the master side, queries
    /// are made against the slave side.
    pub struct Pty {
        pub master: File,
        pub slave: File,
    }

    impl Pty {
        pub fn set_size(&self, rows: u16, cols: u16, pixel_width: u16, pixel_height: u16) {
            let winsize = libc::winsize {
                ws_row: rows,
                ws_col: cols,
                ws_xpixel: pixel_width,
                ws_ypixel: pixel_height,
            };
            let result =
                unsafe { libc::ioctl(self.master.as_raw_fd(), libc::TIOCSWINSZ as _, &winsize) };
            assert_eq!(
                result,
                0,
                "failed to resize pty: {}",
                io::Error::last_os_error()
            );
        }

        pub fn resize(&self, rows: u16, cols: u16) {
            self.set_size(rows, cols, 0, 0);
        }
    }

    pub fn open_pty(rows: u16, cols: u16) -> Pty {
        let fd = unsafe { libc::posix_openpt(libc::O_RDWR | libc::O_NOCTTY) };
        assert!(fd >= 0, "posix_openpt failed: {}", io::Error::last_os_error());
        let master = unsafe { File::from_raw_fd(fd) };
        assert_eq!(unsafe { libc::grantpt(fd) }, 0, "grantpt failed");
        assert_eq!(unsafe { libc::unlockpt(fd) }, 0, "unlockpt failed");

        let slave = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NOCTTY)
            .open(slave_path(&master))
            .expect("failed to open pty slave");

        let pty = Pty { master, slave };
        pty.resize(rows, cols);
        pty
    }

    #[cfg(target_os = "linux")]
    fn slave_path(master: &File) -> PathBuf {
        let mut buffer = [0 as libc::c_char; 128];
        let result =
            unsafe { libc::ptsname_r(master.as_raw_fd(), buffer.as_mut_ptr(), buffer.len()) };
        assert_eq!(result, 0, "ptsname_r failed");
        let name = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        PathBuf::from(name.to_str().expect("pty name is not utf-8"))
    }

    #[cfg(not(target_os = "linux"))]
    fn slave_path(master: &File) -> PathBuf {
        use std::sync::Mutex;

        // ptsname returns a shared static buffer.
        static PTSNAME: Mutex<()> = Mutex::new(());
        let _lock = PTSNAME.lock().unwrap();
        let name = unsafe { libc::ptsname(master.as_raw_fd()) };
        assert!(!name.is_null(), "ptsname failed");
        let name = unsafe { CStr::from_ptr(name) };
        PathBuf::from(name.to_str().expect("pty name is not utf-8"))
    }
}
