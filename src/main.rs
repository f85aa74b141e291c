use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use atomcss::cli::{Cli, Commands};
use atomcss::output::Printer;

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ATOMCSS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => atomcss::cli::build::run(args, &printer)?,
        Commands::Check(args) => atomcss::cli::check::run(args, &printer)?,
        Commands::Init(args) => atomcss::cli::init::run(args, &printer)?,
        Commands::Completions(args) => atomcss::cli::completions::run(args)?,
    }

    Ok(())
}
