use std::env;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use pagelens_core::{Analyzer, FetchConfig};

mod render;

const APP_NAME: &str = "pagelens";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug)]
struct CliOptions {
    url: String,
    mode: OutputMode,
    timeout: Option<Duration>,
}

#[derive(Debug)]
enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut url: Option<String> = None;
    let mut mode = OutputMode::Text;
    let mut timeout: Option<Duration> = None;
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }

        if matches!(arg.as_str(), "-j" | "--json") {
            mode = OutputMode::Json;
            i += 1;
            continue;
        }

        if let Some(value) = arg.strip_prefix("--timeout=") {
            if timeout.is_some() {
                return Err(anyhow!("--timeout specified multiple times"));
            }
            timeout = Some(parse_timeout(value)?);
            i += 1;
            continue;
        }

        if matches!(arg.as_str(), "-t" | "--timeout") {
            if timeout.is_some() {
                return Err(anyhow!("--timeout specified multiple times"));
            }
            let value = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("{arg} requires a value in seconds"))?;
            timeout = Some(parse_timeout(value)?);
            i += 2;
            continue;
        }

        if arg.starts_with('-') {
            return Err(anyhow!("unknown flag: {arg}"));
        }

        if url.is_none() {
            url = Some(arg.clone());
        } else {
            return Err(anyhow!("unexpected additional argument: {}", arg));
        }

        i += 1;
    }

    let url = url.ok_or_else(|| anyhow!("missing <url> argument"))?;

    Ok(CliCommand::Run(CliOptions { url, mode, timeout }))
}

fn parse_timeout(value: &str) -> Result<Duration> {
    let secs: u64 = value
        .parse()
        .with_context(|| format!("invalid timeout {value:?}, expected whole seconds"))?;
    if secs == 0 {
        return Err(anyhow!("timeout must be at least one second"));
    }
    Ok(Duration::from_secs(secs))
}

fn print_help() {
    println!("{APP_NAME} — Summarize the markup of a web page");
    println!("Usage: {APP_NAME} [OPTIONS] <URL>\n");
    println!("Options:");
    println!("  -j, --json              Print the report as JSON");
    println!("  -t, --timeout SECS      Fetch timeout in seconds (default 10)");
    println!("  -v, --version           Show version information");
    println!("  -h, --help              Show this help message");
    println!("\nSet RUST_LOG=debug for diagnostic output.");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw_args = env::args().skip(1).collect::<Vec<_>>();
    let options = match parse_arguments(&raw_args)? {
        CliCommand::Run(options) => options,
        CliCommand::Help => {
            print_help();
            return Ok(ExitCode::SUCCESS);
        }
        CliCommand::Version => {
            print_version();
            return Ok(ExitCode::SUCCESS);
        }
    };

    let mut config = FetchConfig::default();
    if let Some(timeout) = options.timeout {
        config = config.with_timeout(timeout);
    }

    let analyzer = Analyzer::new(&config).context("failed to create HTTP client")?;
    let report = analyzer.analyze(&options.url).await;

    match options.mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputMode::Text => print!("{}", render::render_report(&report)),
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
