use clap::Parser;
use tracing_subscriber::EnvFilter;

use fittrack_core::cli::{run, Cli};
use fittrack_core::metrics;

fn main() -> anyhow::Result<()> {
    // Logg til stderr; stdout er forbeholdt rapportene
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let result = run(&cli, &mut stdout.lock());

    if cli.metrics {
        eprint!("{}", metrics::render()?);
    }
    result
}
