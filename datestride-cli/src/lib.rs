//! Command-line interface library for datestride
//!
//! Argument parsing, environment configuration and command dispatch for the
//! `datestride` binary.

pub mod cli;
pub mod completion;
pub mod dispatch;
pub mod help;
pub mod session;

pub use cli::Cli;
pub use dispatch::Dispatcher;
pub use session::Session;
