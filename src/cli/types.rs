use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "banana")]
#[command(about = "A static site generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Output root (defaults to <source>/_build)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub destination: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the site
    #[command(alias = "b")]
    Build {
        /// Clean the output root before building
        #[arg(short, long, default_value_t = false)]
        clean: bool,

        /// Print debug output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,

        /// Only print errors
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
    },

    /// Build and serve the site
    #[command(alias = "s", alias = "server")]
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to serve on
        #[arg(short = 'P', long, value_name = "PORT", default_value = "4000")]
        port: u16,

        /// Clean the output root before building
        #[arg(short, long, default_value_t = false)]
        clean: bool,

        /// Watch for file changes and rebuild
        #[arg(short, long, default_value_t = false)]
        watch: bool,

        /// Launch the site in a browser
        #[arg(short, long, default_value_t = false)]
        open: bool,
    },

    /// Remove the output root
    Clean {},
}

impl Commands {
    /// Log level requested by command-specific flags, if any
    pub fn log_level(&self, debug: bool) -> log::LevelFilter {
        match self {
            Commands::Build { quiet: true, .. } => log::LevelFilter::Error,
            Commands::Build { verbose: true, .. } => log::LevelFilter::Debug,
            _ if debug => log::LevelFilter::Debug,
            _ => log::LevelFilter::Info,
        }
    }
}
