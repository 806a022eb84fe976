// src/main.rs
// =============================================================================
// This is the entry point of the maps2waze binary.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the convert or serve subcommand
// 4. Exit with proper code (0 = all converted, 1 = some input failed, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::BufRead;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use cli::{Cli, Commands};
use maps2waze::server::{self, AppState};
use maps2waze::{convert, ErrorKind, FetchConfig, HttpFetcher};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    maps2waze::logging::init_logger(cli.verbose, cli.log_json);

    let config = FetchConfig {
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let fetcher = HttpFetcher::new(&config).context("failed to initialize HTTP fetcher")?;

    match cli.command {
        Commands::Convert { texts, json } => handle_convert(&fetcher, texts, json).await,
        Commands::Serve { host, port } => {
            let addr = SocketAddr::new(host, port);
            server::serve(addr, AppState::new(Arc::new(fetcher)))
                .await
                .with_context(|| format!("server on {addr} failed"))?;
            Ok(0)
        }
    }
}

// One record per input text in --json mode
#[derive(Debug, Serialize)]
struct ConversionRecord {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<ErrorKind>,
}

// Handles the 'convert' subcommand
//
// Inputs come from the arguments, or from stdin (one per non-empty line)
// when no arguments were given.
async fn handle_convert(fetcher: &HttpFetcher, texts: Vec<String>, json: bool) -> Result<i32> {
    let texts = if texts.is_empty() {
        read_stdin_lines()?
    } else {
        texts
    };

    let mut records = Vec::with_capacity(texts.len());
    for input in texts {
        let record = match convert(&input, fetcher).await {
            Ok(link) => ConversionRecord {
                input,
                link: Some(link.to_string()),
                error: None,
                kind: None,
            },
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), error = %e, "conversion failed");
                ConversionRecord {
                    input,
                    link: None,
                    error: Some(e.user_message().to_string()),
                    kind: Some(e.kind()),
                }
            }
        };
        records.push(record);
    }

    print_records(&records, json)?;

    let failed = records.iter().filter(|r| r.link.is_none()).count();
    if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn print_records(records: &[ConversionRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for record in records {
        match (&record.link, &record.error) {
            (Some(link), _) => println!("{link}"),
            (None, Some(error)) => eprintln!("error: {error}"),
            (None, None) => {}
        }
    }
    Ok(())
}
