use crossbeam::channel::tick;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::{format_size, query};

const POLL_INTERVAL_IN_MILLIS: u64 = 100;

pub fn run(fd: Option<i32>, pixels: bool) -> Result<(), Box<dyn Error>> {
    let resized = Arc::new(AtomicBool::new(false));
    let signal = ttygeom::signal_number();
    let signal_id = signal_hook::flag::register(signal.as_raw(), Arc::clone(&resized))?;
    tracing::debug!(%signal, "resize handler registered");

    let main_cancellation_token = CancellationToken::new();
    let cancellation_token = main_cancellation_token.clone();

    ctrlc::set_handler(move || {
        cancellation_token.cancel();
    })?;

    let result = watch(fd, pixels, &resized, &main_cancellation_token);
    signal_hook::low_level::unregister(signal_id);
    result
}

fn watch(
    fd: Option<i32>,
    pixels: bool,
    resized: &AtomicBool,
    cancellation_token: &CancellationToken,
) -> Result<(), Box<dyn Error>> {
    let mut last_size = query(fd)?;
    println!("{}", format_size(&last_size, pixels));

    let ticker = tick(Duration::from_millis(POLL_INTERVAL_IN_MILLIS));
    while !cancellation_token.is_cancelled() {
        ticker.recv()?;
        if !resized.swap(false, Ordering::Relaxed) {
            continue;
        }

        let size = query(fd)?;
        tracing::debug!(%size, "terminal resized");
        if size != last_size {
            println!("{}", format_size(&size, pixels));
            last_size = size;
        }
    }

    Ok(())
}
