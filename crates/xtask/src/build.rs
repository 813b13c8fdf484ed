use crate::constants::{Family, DRIVER_PACKAGE};
use crate::fastpath;
use anyhow::{Context, Result};
use std::process::Command;

pub fn build_driver(
    family: Family,
    features: Option<&str>,
    release: bool,
) -> Result<()> {
    for &family in family.expand() {
        println!("Building {} for {}...", DRIVER_PACKAGE, family.target());
        build_for(family, features, release)?;
    }

    Ok(())
}

/// `--features` value: the family plus anything extra.
pub fn feature_list(family: Family, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => {
            format!("{},{}", family.feature(), extra)
        }
        _ => family.feature().to_string(),
    }
}

fn build_for(
    family: Family,
    features: Option<&str>,
    release: bool,
) -> Result<()> {
    fastpath::check_target(family.target())?;

    let mut cargo_build = Command::new("cargo");
    cargo_build
        .arg("build")
        .arg("--package")
        .arg(DRIVER_PACKAGE)
        .arg("--no-default-features")
        .arg("--features")
        .arg(feature_list(family, features))
        .arg("--target")
        .arg(family.target());

    if release {
        cargo_build.arg("--release");
    }

    let status = cargo_build
        .status()
        .with_context(|| format!("Failed to build for {}", family.target()))?;

    if !status.success() {
        anyhow::bail!("Build failed for {}", family.target());
    }

    Ok(())
}
