use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod filter;
mod ids;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("samfilter=debug,info")
    } else {
        EnvFilter::new("samfilter=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(&cli)?;

    Ok(())
}
