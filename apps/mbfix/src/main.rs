//! mbfix CLI binary entry point.
//! Parses flags, builds the run configuration, and delegates to `run`.

use clap::Parser;
use mbfix::cli::Cli;
use mbfix::config::Config;
use mbfix::run;

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::new(level))
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = Config::from_cli(&cli);
    init_logging(cfg.log_level());
    tracing::debug!(?cfg, "resolved configuration");

    let outcome = run::run(&cfg)?;
    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
