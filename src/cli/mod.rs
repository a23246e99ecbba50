use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "palladio-tc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the base image and the per-Houdini-version image matrix
    Build {
        /// Repository root the Dockerfiles are resolved against
        #[arg(long, value_name = "DIRECTORY", default_value = ".")]
        root: PathBuf,

        /// Path to a config.toml overriding the built-in matrix
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the build plan without invoking the image engine
    Plan {
        /// Repository root the Dockerfiles are resolved against
        #[arg(long, value_name = "DIRECTORY", default_value = ".")]
        root: PathBuf,

        /// Path to a config.toml overriding the built-in matrix
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the Conan dependency requirements
    ///
    /// Honors PLD_CONAN_HOUDINI_VERSION, PLD_CONAN_SKIP_CESDK and
    /// PLD_CONAN_CESDK_VERSION.
    Deps {
        /// Path to a config.toml overriding the default versions
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Emit the requirements as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}
