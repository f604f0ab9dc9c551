//! Cross-crate scenarios for the recon engine.

#[cfg(test)]
mod recon;
#[cfg(test)]
mod support;
