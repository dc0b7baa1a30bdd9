//! CLI behavior.
//!
//! - `setup`: argument parsing via clap
//! - `commands`: dispatch to controller operations
//! - `render`: terminal output for outcomes

mod commands;
mod render;
pub mod setup;

pub use commands::run;
