//! # board CLI
//!
//! Thin presentation layer over the `boardapp` library. The binary only
//! invokes `cli::run()` and handles process termination; argument parsing,
//! controller wiring, and rendering live in `src/cli/`.
//!
//! The CLI is one possible front end. It collects raw strings, makes one
//! controller call per invocation, renders the outcome, and exits — all
//! business rules (validation, author defaulting, timestamps) live below
//! the controller boundary.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
