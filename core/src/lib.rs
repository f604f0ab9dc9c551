//! # subprobe core
//!
//! The concurrent probing engine.
//!
//! * **[`scanner`]**: bounded fan-out of probes, and the two phases built on it.
//! * **[`recon`]**: the orchestrator sequencing both phases into a result.
//! * **[`network`]**: the reqwest-backed [`Prober`](subprobe_common::network::probe::Prober).
//! * **[`export`]**: JSON serialization of the final result.

pub mod export;
pub mod network;
pub mod recon;
pub mod scanner;

#[cfg(test)]
mod testing;
