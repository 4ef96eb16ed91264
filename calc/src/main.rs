use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use calc::repl;
use calc::Session;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

mod args;

use args::Cli;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let bound = cli.bound();
    tracing::debug!(%bound, demo = cli.demo, "starting session");

    let mut session = Session::new(bound);
    let stdout = io::stdout();
    if cli.demo {
        println!("MPCalc - demo mode ({bound})");
        repl::run_script(
            &mut session,
            repl::DEMO_SCRIPT,
            Duration::from_millis(300),
            stdout.lock(),
        )
        .context("failed to write demo output")?;
    } else {
        println!("MPCalc - {bound} precision");
        repl::run(&mut session, io::stdin().lock(), stdout.lock())
            .context("terminal I/O failed")?;
    }
    Ok(())
}
