use clap::{Parser, Subcommand};

use crate::constants::Family;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cross-compile the driver for each family's Cortex-M target
    Build {
        #[arg(long, value_enum, default_value = "all")]
        family: Family,

        /// Extra features, e.g. `defmt,display-interface`
        #[arg(long)]
        features: Option<String>,

        #[arg(long)]
        release: bool,
    },
    /// Run the host test suite once per family
    Test {
        #[arg(long, value_enum, default_value = "all")]
        family: Family,

        /// Extra features, e.g. `display-interface`
        #[arg(long)]
        features: Option<String>,
    },
}
