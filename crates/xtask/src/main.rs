mod build;
mod cli;
mod constants;
mod fastpath;
mod host;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build { family, features, release } => {
            build::build_driver(*family, features.as_deref(), *release)?;
            println!("Build complete!");
        }
        Commands::Test { family, features } => {
            host::test_driver(*family, features.as_deref())?;
            println!("All families passed!");
        }
    }

    Ok(())
}
