//! # covenant-cli — Operator CLI
//!
//! Subcommand handler modules for the `covenant` binary. Each module
//! owns its clap `Args` struct and a `run` function; `main.rs` only
//! parses and dispatches.

pub mod analyze;
pub mod regulations;
