//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// kitprops - derive qbs build properties from C/C++ toolchain kits
#[derive(Parser)]
#[command(name = "kitprops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the build properties derived from a kit
    Properties(PropertiesArgs),

    /// Inspect configured kits
    Kit(KitArgs),

    /// Show the import panel for a QML file
    Imports(ImportsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct PropertiesArgs {
    /// Kit to derive properties for (defaults to the configured default)
    #[arg(short, long)]
    pub kit: Option<String>,

    /// Read kits from this file instead of the global and project kit files
    #[arg(long)]
    pub kit_file: Option<PathBuf>,

    /// Extra base property, as KEY=VALUE (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Emit JSON instead of key/value lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct KitArgs {
    /// Read kits from this file instead of the global and project kit files
    #[arg(long, global = true)]
    pub kit_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: KitCommands,
}

#[derive(Subcommand)]
pub enum KitCommands {
    /// List configured kits
    List,

    /// Show one kit in detail
    Show(KitShowArgs),
}

#[derive(Args)]
pub struct KitShowArgs {
    /// Kit name
    pub name: String,
}

#[derive(Args)]
pub struct ImportsArgs {
    /// QML file to read imports from
    pub file: PathBuf,

    /// Remove the import at this row before printing (0-based)
    #[arg(long, value_name = "ROW")]
    pub remove: Option<usize>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
