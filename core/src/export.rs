//! # Result Export
//!
//! Serializes a [`ReconResult`] to the pretty-printed JSON document described
//! in [`subprobe_common::report`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use subprobe_common::report::ReconResult;

pub fn to_json(result: &ReconResult) -> anyhow::Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize recon result")
}

/// Writes the JSON document to `path`, replacing any existing file.
pub fn write_json(result: &ReconResult, path: &Path) -> anyhow::Result<()> {
    let file: File = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, result)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
