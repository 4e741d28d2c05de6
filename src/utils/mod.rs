//! Utility functions and helpers for lingo-relay.
//!
//! # Submodules
//!
//! - `logging`: Opt-in tracing subscriber setup and log preview helpers.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
