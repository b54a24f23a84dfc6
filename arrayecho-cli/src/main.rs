//! arrayecho - read an integer array from standard input and echo it back
//!
//! No flags and no arguments; behavior is driven entirely by standard
//! input. Logging goes through the `log` facade and is enabled with
//! the usual `RUST_LOG` filter.

use std::io::{self, Write};
use std::process;

use arrayecho_core::{ArrayEchoService, Error};
use log::error;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = {
        let mut service = ArrayEchoService::new(stdin.lock(), stdout.lock());
        service.run()
    };
    if let Err(err) = result {
        report_failure(&err);
        process::exit(exit_code(&err));
    }
}

/// Prints the user-facing failure message
///
/// An invalid size is reported on stdout, where the prompts went;
/// everything else goes to stderr.
fn report_failure(err: &Error) {
    match err {
        Error::InvalidSize(reason) => {
            println!("Invalid size");
            // process::exit skips the exit-time flush of the stdout buffer
            let _ = io::stdout().flush();
            error!("invalid size: {}", reason);
        }
        other => {
            eprintln!("arrayecho: {}", other);
            error!("{}", other);
        }
    }
}

/// Maps each error to its distinguishing process exit code
fn exit_code(err: &Error) -> i32 {
    match err {
        Error::InvalidSize(_) => 1,
        Error::InsufficientInput { .. } | Error::MalformedToken(_) | Error::OutOfMemory(_) => 2,
        Error::Io(_) => 3,
    }
}
