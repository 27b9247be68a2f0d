mod actions;
mod config;
mod errors;
mod fs;
mod request;
mod response;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use crate::config::Config;
use crate::request::Request;
use crate::response::OutputMode;

/// Deletes one file from the data directory and reports the result as plain text.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the file to delete; read from FILENAME when omitted
    #[arg(long)]
    filename: Option<OsString>,

    /// Directory the filename is appended to
    #[arg(long)]
    data_dir: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Response framing
    #[arg(long, value_enum)]
    output: Option<OutputMode>,

    /// Log filter used when RUST_LOG is not set, e.g. "debug"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let under_cgi = env::var_os("GATEWAY_INTERFACE").is_some();
    let cli = parse_cli(env::args_os(), under_cgi);
    match run(cli, under_cgi) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

/// Under CGI the gateway may turn a query string into argv, so the command line
/// belongs to the client and is not read at all.
fn parse_cli<I, T>(args: I, under_cgi: bool) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if under_cgi {
        Cli::default()
    } else {
        Cli::parse_from(args)
    }
}

fn run(cli: Cli, under_cgi: bool) -> Result<bool> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));
    handle(&cli, &config, Request::from_env(), under_cgi, &mut io::stdout().lock())
}

/// Runs one delete request and writes its response. Returns whether the
/// request ended without a removal failure.
fn handle<W: Write>(
    cli: &Cli,
    config: &Config,
    env_request: Request,
    under_cgi: bool,
    out: &mut W,
) -> Result<bool> {
    let data_dir = data_dir(cli, config)?;
    let request = match &cli.filename {
        Some(name) => Request::new(name.clone()),
        None => env_request,
    };
    let mode = cli.output.unwrap_or(config.output).resolve(under_cgi);
    tracing::debug!(data_dir = %data_dir, filename = ?request.filename(), ?mode, "handling delete request");

    let result = actions::delete_file::execute(&data_dir, request.filename());
    response::write_response(out, mode, &result)?;
    Ok(result.is_ok())
}

fn data_dir(cli: &Cli, config: &Config) -> Result<String> {
    match &cli.data_dir {
        Some(dir) => fs::expand_home(dir),
        None => Ok(config.data_dir.clone()),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
