//! Console event macros.
//!
//! Every macro emits a `tracing` event under its own target. The CLI formatter
//! maps the target (or the level, for plain events) to the line prefix, so the
//! engine never writes to the terminal directly.

/// `[+]` lines: a host came up, a phase finished, a file was written.
pub const SUCCESS_TARGET: &str = "subprobe::success";
/// `[!]` lines reporting an exposed endpoint.
pub const FOUND_TARGET: &str = "subprobe::found";
/// Unprefixed output (banner, headers, separators).
pub const PRINT_TARGET: &str = "subprobe::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: "subprobe::success", $($arg)+)
    };
}

#[macro_export]
macro_rules! found {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: "subprobe::found", $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: "subprobe::info", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__tracing::warn!(target: "subprobe::warn", $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__tracing::error!(target: "subprobe::error", $($arg)+)
    };
}
