use clap::Parser;
use miette::Result;
use brev::cli::{Cli, Commands};
use brev::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => brev::cli::build::run(args, &printer)?,
        Commands::Check(args) => brev::cli::check::run(args, &printer)?,
        Commands::Init(args) => brev::cli::init::run(args, &printer)?,
        Commands::Completions(args) => brev::cli::completions::run(args)?,
    }

    Ok(())
}
