// src/cli.rs
use std::{fs, path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::options::ClientOptions;
use crate::record::TxRecord;
use crate::{Tx2Json, extract_fields_from_html};

/// Look up a V2EX Solana transaction and print it as JSON.
///
/// Configuration is read from flags, then the environment (a `.env` file in the
/// working directory is loaded first).
#[derive(Parser, Debug)]
#[command(name = "tx2json", version)]
pub struct Args {
    /// Transaction id (signature) to look up
    #[arg(required_unless_present = "html", conflicts_with = "html")]
    pub tx: Option<String>,

    /// Extract from a saved transaction page instead of fetching
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Site root
    #[arg(long, env = "BASE_URL")]
    pub base_url: Option<String>,

    /// Session cookie header value
    #[arg(long, env = "COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Request timeout in seconds, 0 for none
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Environment defaults with flags layered on top.
    pub fn client_options(&self) -> ClientOptions {
        let mut opts = ClientOptions::from_env();
        if let Some(base) = self.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
            opts.base_url = s!(base.trim());
        }
        if let Some(cookie) = &self.cookie {
            opts = opts.with_cookie(cookie.as_str());
        }
        match self.timeout {
            Some(0) => opts.timeout = None,
            Some(secs) => opts.timeout = Some(Duration::from_secs(secs)),
            None => {}
        }
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();

    let args = Args::parse();
    crate::logging::init(args.verbose);

    let record = lookup(&args)?;
    println!("{}", render(record.as_ref(), args.pretty)?);
    Ok(())
}

fn lookup(args: &Args) -> Result<Option<TxRecord>> {
    if let Some(path) = &args.html {
        let html = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        return Ok(extract_fields_from_html(&html));
    }

    let tx = args.tx.as_deref().unwrap_or_default().trim();
    if tx.is_empty() {
        log::warn!("No transaction id given");
        return Ok(None);
    }
    let opts = args.client_options();
    log::info!("Looking up {tx} on {}", opts.base_url);
    Ok(Tx2Json::new(opts).parse(tx))
}

/// JSON for the record, `null` when there is none.
fn render(record: Option<&TxRecord>, pretty: bool) -> Result<String> {
    match record {
        Some(rec) => Ok(rec.to_json(pretty)?),
        None => Ok(s!("null")),
    }
}
