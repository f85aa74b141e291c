pub mod build;
pub mod check;
pub mod completions;
pub mod init;

use clap::{Parser, Subcommand};

/// atomcss - Atomic CSS generator
#[derive(Parser, Debug)]
#[command(name = "atomcss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log engine decisions (same as ATOMCSS_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan sources and write the stylesheet
    Build(build::BuildArgs),

    /// Print the CSS generated for the given class names
    Check(check::CheckArgs),

    /// Initialize an atomcss project (generates atomcss.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
