//! # subprobe common
//!
//! Models, configuration and console macros shared by the probing engine
//! (`subprobe-core`) and the command line front end (`subprobe-cli`).
//!
//! * **[`network`]**: targets, probe requests/results and the discovered sets.
//! * **[`report`]**: the terminal [`report::ReconResult`] handed to the exporter.
//! * **[`config`]**: engine options and UI knobs.
//! * **[`wordlist`]**: built-in labels and paths, plus wordlist file loading.

pub mod config;
pub mod logging;
pub mod network;
pub mod report;
pub mod utils;
pub mod wordlist;

#[doc(hidden)]
pub use tracing as __tracing;
