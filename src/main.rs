// fastscan - concurrent TCP connect scanner

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fastscan::cli::Args;
use fastscan::output::{self, LiveOutput, OutputFormat};
use fastscan::scanner::{run_scan, TcpProber};
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Exit status after a Ctrl-C, as shells report for SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            // clap renders its own "error:" prefix and styling.
            let _ = e.print();
            println!("{}", Args::command().render_help());
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = args
        .scan_config()
        .await
        .with_context(|| format!("cannot scan '{}'", args.target))?;

    let plain = args.output == OutputFormat::Plain;
    if plain {
        output::print_scan_header(&config);
    }

    let live = if plain {
        LiveOutput::stdout()
    } else {
        LiveOutput::stderr()
    };
    let live = if args.progress {
        live.with_progress(config.port_range.len().div_ceil(config.batch_size))
    } else {
        live
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, finishing in-flight probes");
            on_interrupt.cancel();
        }
    });

    let report = run_scan(&config, Arc::new(TcpProber), live.clone(), cancel.clone()).await;
    live.finish();

    if plain && !args.no_clear {
        output::clear_console();
    }
    output::print_results(&report, args.output).context("failed to write report")?;

    if cancel.is_cancelled() {
        output::print_warning("scan was interrupted before covering the full range");
        return Ok(ExitCode::from(EXIT_INTERRUPTED));
    }
    if report.interrupted {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
