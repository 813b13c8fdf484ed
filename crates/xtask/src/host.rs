use crate::build::feature_list;
use crate::constants::{Family, DRIVER_PACKAGE};
use anyhow::{Context, Result};
use std::process::Command;

/// Host test run per family; the register layout is compiled in, so each
/// family needs its own pass.
pub fn test_driver(family: Family, features: Option<&str>) -> Result<()> {
    for &family in family.expand() {
        println!("Testing {} with {}...", DRIVER_PACKAGE, family.feature());

        let status = Command::new("cargo")
            .arg("test")
            .arg("--package")
            .arg(DRIVER_PACKAGE)
            .arg("--no-default-features")
            .arg("--features")
            .arg(feature_list(family, features))
            .status()
            .with_context(|| {
                format!("Failed to run tests for {}", family.feature())
            })?;

        if !status.success() {
            anyhow::bail!("Tests failed for {}", family.feature());
        }
    }

    Ok(())
}
