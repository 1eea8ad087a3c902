//! Command-line argument definitions for the ragmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the catalog and output paths, the
//! physics flag, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the ragmap graph renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML catalog; the built-in RAG landscape is used if absent
    #[arg(help = "Path to the catalog file")]
    pub catalog: Option<String>,

    /// Path to the output HTML file
    #[arg(short, long, default_value = "graph.html")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable physics for the initial render
    #[arg(long)]
    pub physics: bool,

    /// Write only the embeddable graph document, without the host page
    #[arg(long)]
    pub graph_only: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
