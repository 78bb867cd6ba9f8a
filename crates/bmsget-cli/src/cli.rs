//! CLI argument definitions for bmsget.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bmsget")]
#[command(about = "BMS chart fetcher and collection reconciler", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the ranking site for charts
    Search {
        /// Title search word
        word: String,
    },
    /// Search, pick a result, download and install it
    Download {
        /// Title search word
        word: String,
        /// Subdirectory of the songs directory to install into
        #[arg(short = 'd', long)]
        destdir: Option<String>,
    },
    /// Install a local archive or file into the songs directory
    Install {
        /// Archive or chart file to install
        path: PathBuf,
        /// Subdirectory of the songs directory to install into
        #[arg(short = 'd', long)]
        destdir: Option<String>,
    },
    /// Reconcile a song directory against the followed difficulty tables
    Amplify {
        /// Directory holding the song's charts
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}
