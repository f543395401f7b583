#![cfg(unix)]

use std::fs::File;

use ttygeom::tty::{Native, ResizeSignal};
use ttygeom::{query_window_size_using_fd, signal_number, QueryError, TerminalSize};

extern crate test_shared;

#[test]
fn signal_number_is_stable() {
    let first = signal_number();
    for _ in 0..16 {
        assert_eq!(signal_number(), first);
    }
    assert_eq!(first, <Native as ResizeSignal>::SIGNAL);
    assert_eq!(first.as_raw(), libc::SIGWINCH);
}

#[test]
fn query_pty() {
    let pty = test_shared::open_pty(24, 80);
    let size = query_window_size_using_fd(&pty.slave).unwrap();
    assert_eq!(size.rows, 24);
    assert_eq!(size.cols, 80);
    assert!(size.is_known());
}

#[test]
fn query_pty_pixels() {
    let pty = test_shared::open_pty(24, 80);
    pty.set_size(30, 100, 800, 600);
    assert_eq!(
        query_window_size_using_fd(&pty.slave).unwrap(),
        TerminalSize {
            rows: 30,
            cols: 100,
            pixel_width: 800,
            pixel_height: 600,
        }
    );
}

#[test]
fn query_pty_master() {
    let pty = test_shared::open_pty(50, 132);
    let size = query_window_size_using_fd(&pty.master).unwrap();
    assert_eq!(size.to_string(), "132x50");
}

#[test]
fn query_pty_after_resize() {
    let pty = test_shared::open_pty(24, 80);
    let first = query_window_size_using_fd(&pty.slave).unwrap();
    pty.resize(40, 120);
    let second = query_window_size_using_fd(&pty.slave).unwrap();
    assert_eq!((first.rows, first.cols), (24, 80));
    assert_eq!((second.rows, second.cols), (40, 120));
}

#[test]
fn query_pty_zero_size_is_reported_as_is() {
    let pty = test_shared::open_pty(0, 0);
    let size = query_window_size_using_fd(&pty.slave).unwrap();
    assert_eq!(size, TerminalSize::default());
    assert!(!size.is_known());
    assert_eq!(size.dimensions(), None);
}

#[test]
fn query_regular_file() {
    let path = test_shared::create_tmp_file("data");
    let file = File::open(&path).expect("Failed to open test file.");
    let result = query_window_size_using_fd(&file);
    assert_eq!(result, Err(QueryError::QueryFailed(libc::ENOTTY)));
    drop(file);
    test_shared::remove_tmp_file(&path);
}

#[test]
fn query_dev_null() {
    let dev_null = File::open("/dev/null").expect("Failed to open /dev/null.");
    let error = query_window_size_using_fd(&dev_null).unwrap_err();
    assert!(error.is_not_a_terminal());
    assert_eq!(error.raw_os_error(), Some(libc::ENOTTY));
}

#[test]
fn query_pty_from_many_threads() {
    let pty = test_shared::open_pty(24, 80);
    let sizes = [(24u16, 80u16), (40, 120)];

    crossbeam::thread::scope(|scope| {
        let slave = &pty.slave;
        let readers: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move |_| {
                    (0..200)
                        .map(|_| query_window_size_using_fd(slave).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for i in 0..50 {
            let (rows, cols) = sizes[i % 2];
            pty.resize(rows, cols);
        }

        for reader in readers {
            for size in reader.join().unwrap() {
                assert!(
                    sizes.contains(&(size.rows, size.cols)),
                    "torn size: {:?}",
                    size
                );
            }
        }
    })
    .unwrap();
}
