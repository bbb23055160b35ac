//! ca-viewer binary
//!
//! Runs a rule on bit-strings typed at the prompt, or once with `--initial`.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ringca_cli::render::open_sink;
use ringca_cli::{
    describe, simulate, Cli, Session, ViewerConfig, IO_EXIT_CODE, VALIDATION_EXIT_CODE,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so rendered grids on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ca_viewer=info,ringca_cli=warn,ringca_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ViewerConfig::from(Cli::parse());

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(IO_EXIT_CODE)
        }
    }
}

fn run(config: &ViewerConfig) -> anyhow::Result<ExitCode> {
    let rule = match config.rule_table() {
        Ok(rule) => rule,
        Err(err) => return Ok(reject(&err)),
    };
    let generations = match config.generation_count() {
        Ok(n) => n,
        Err(err) => return Ok(reject(&err)),
    };

    tracing::info!(radius = rule.radius().value(), generations, "viewer configured");

    if let Some(initial) = &config.initial {
        let grid = match simulate(rule, initial, generations) {
            Ok(grid) => grid,
            Err(err) => return Ok(reject(&err)),
        };
        let mut sink = open_sink(config.output.as_deref()).with_context(|| match &config.output {
            Some(path) => format!("cannot create {}", path.display()),
            None => "cannot open stdout".to_string(),
        })?;
        config
            .format
            .renderer()
            .render(&grid, &mut sink)
            .context("failed to write grid")?;
        sink.flush().context("failed to write grid")?;
        return Ok(ExitCode::SUCCESS);
    }

    if config.output.is_some() {
        tracing::warn!("--output only applies with --initial; rendering to the terminal");
    }

    println!("Running CA = {rule}");
    println!("for {generations} generations...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Session::new(
        stdin.lock(),
        stdout.lock(),
        rule,
        generations,
        config.format.renderer(),
    )
    .run()
    .context("terminal I/O failed")?;

    tracing::info!(runs = summary.runs, "viewer closed");
    Ok(ExitCode::SUCCESS)
}

fn reject(err: &ringca_core::Error) -> ExitCode {
    tracing::debug!(kind = ?err.kind(), "validation failed");
    eprintln!("\n{}\n", describe(err));
    ExitCode::from(VALIDATION_EXIT_CODE)
}
