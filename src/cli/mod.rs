pub mod build;
pub mod check;
pub mod completions;
pub mod init;

use clap::{Parser, Subcommand};

/// brev - Convert .brev notes to HTML
#[derive(Parser, Debug)]
#[command(name = "brev")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert notes to HTML or JSON
    Build(build::BuildArgs),

    /// Check notes without writing output
    Check(check::CheckArgs),

    /// Initialize a brev project (generates brev.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
