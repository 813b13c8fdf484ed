//! Guards the hand-scheduled Thumb burst against silently dropping out.
//!
//! The `Mmio::strobe_burst` override is gated by a `cfg(all(..))`. If any
//! predicate in that gate is not set by rustc for a family's target, the
//! override vanishes and the build still succeeds on the portable engine.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Source of the module carrying the override.
const IO_SOURCE: &str = include_str!("../../i8080-gpio16/src/io.rs");

/// Fail unless rustc enables every predicate of the override's gate for `target`.
pub fn check_target(target: &str) -> Result<()> {
    let gate = override_gate(IO_SOURCE)
        .context("Mmio::strobe_burst override has no cfg(all(..)) gate")?;

    let output = Command::new("rustc")
        .args(["--print", "cfg", "--target", target])
        .output()
        .with_context(|| format!("Failed to query cfg for {target}"))?;
    if !output.status.success() {
        bail!("rustc --print cfg failed for {target}");
    }

    let printed = String::from_utf8_lossy(&output.stdout);
    let missing = missing_predicates(&gate, &printed);
    if !missing.is_empty() {
        bail!(
            "Thumb burst would not be compiled for {target}: rustc does not set {}",
            missing.join(", ")
        );
    }

    Ok(())
}

/// Predicates of the first `#[cfg(all(..))]` inside `impl RegisterIo for Mmio`,
/// normalised to rustc's `key="value"` form.
pub fn override_gate(source: &str) -> Option<Vec<String>> {
    let (_, body) = source.split_once("impl RegisterIo for Mmio")?;
    let attr = body
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("#[cfg(all("))?;
    let inner = attr.strip_prefix("#[cfg(all(")?.strip_suffix("))]")?;

    Some(
        inner
            .split(',')
            .map(|p| p.split_whitespace().collect::<String>())
            .filter(|p| !p.is_empty())
            .collect(),
    )
}

pub fn missing_predicates<'a>(gate: &'a [String], printed_cfg: &str) -> Vec<&'a str> {
    gate.iter()
        .map(String::as_str)
        .filter(|p| !printed_cfg.lines().any(|line| line.trim() == *p))
        .collect()
}
