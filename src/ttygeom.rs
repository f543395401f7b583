use clap::{command, value_parser, Arg};
use std::io::{Error, ErrorKind};
use tracing_subscriber::filter::LevelFilter;

use ttygeom::{QueryError, TerminalSize};

#[cfg(unix)]
mod watch;

fn query(fd: Option<i32>) -> Result<TerminalSize, QueryError> {
    match fd {
        #[cfg(unix)]
        Some(fd) => ttygeom::query_window_size_using_raw_fd(fd),
        #[cfg(not(unix))]
        Some(_) => Err(QueryError::UnsupportedPlatform),
        None => ttygeom::query_window_size(),
    }
}

fn format_size(size: &TerminalSize, pixels: bool) -> String {
    if pixels {
        format!("{} ({}x{} px)", size, size.pixel_width, size.pixel_height)
    } else {
        size.to_string()
    }
}

fn run() -> Result<(), Box<dyn (::std::error::Error)>> {
    let matches = command!()
        .arg(
            Arg::new("fd")
                .long("fd")
                .value_name("descriptor")
                .value_parser(value_parser!(i32))
                .help("Query this file descriptor instead of standard input"),
        )
        .arg(
            Arg::new("pixels")
                .short('p')
                .long("pixels")
                .action(clap::ArgAction::SetTrue)
                .help("Also print the pixel size reported by the terminal"),
        )
        .arg(
            Arg::new("signal")
                .short('s')
                .long("signal")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("watch")
                .help("Print the terminal resize signal number and exit"),
        )
        .arg(
            Arg::new("watch")
                .short('w')
                .long("watch")
                .action(clap::ArgAction::SetTrue)
                .help("Print the size again after every resize until interrupted"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Log query details to stderr"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if matches.get_flag("verbose") {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    if matches.get_flag("signal") {
        #[cfg(unix)]
        {
            println!("{}", ttygeom::signal_number());
            return Ok(());
        }
        #[cfg(not(unix))]
        return Err(Box::new(Error::new(
            ErrorKind::Unsupported,
            "This platform has no terminal resize signal.",
        )));
    }

    let fd = matches.get_one::<i32>("fd").copied();
    let pixels = matches.get_flag("pixels");

    if matches.get_flag("watch") {
        #[cfg(unix)]
        return watch::run(fd, pixels);
        #[cfg(not(unix))]
        return Err(Box::new(Error::new(
            ErrorKind::Unsupported,
            "Watching for resizes is not supported on this platform.",
        )));
    }

    let size = query(fd)?;
    if !size.is_known() {
        return Err(Box::new(Error::new(
            ErrorKind::Other,
            "The terminal did not report its size.",
        )));
    }

    println!("{}", format_size(&size, pixels));
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        if let Some(clap_error) = error.downcast_ref::<clap::Error>() {
            eprint!("{}", clap_error); // `clap` errors already have newlines

            match clap_error.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // The exit code should not indicate an error for --help / --version
                    std::process::exit(0)
                }
                _ => (),
            }
        } else {
            eprintln!("{}", error);
        }

        std::process::exit(1);
    }
}
