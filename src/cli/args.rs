//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Data-model dependency inspector: entity dependency trees and creation-order lists
#[derive(Parser, Debug)]
#[command(name = "modelhier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging, multiple occurrences increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show entity dependencies as a tree
    Tree {
        /// Directory containing model files
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// Only consider entities whose module contains this string
        #[arg(short, long)]
        module: Option<String>,
    },

    /// Print entities in creation order (dependencies first)
    List {
        /// Directory containing model files
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// Only consider entities whose module contains this string
        #[arg(short, long)]
        module: Option<String>,
    },

    /// List discovered entities and their direct dependencies
    Entities {
        /// Directory containing model files
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// Only consider entities whose module contains this string
        #[arg(short, long)]
        module: Option<String>,
    },
}
