// src/client.rs
use log::{debug, warn};

use crate::config::consts::*;
use crate::config::options::ClientOptions;
use crate::core::net::{FetchError, HttpReply, HttpTransport, Transport};
use crate::record::TxRecord;
use crate::specs::tx::extract_fields_from_html;

/// Fetches `{base}/solana/tx` for a transaction id and turns the page into a [`TxRecord`].
///
/// ```no_run
/// use tx2json::{ClientOptions, Tx2Json};
///
/// let client = Tx2Json::new(ClientOptions::from_env());
/// if let Some(rec) = client.parse("5xYz...") {
///     println!("{} → {:?}", rec.tx_hash, rec.amount);
/// }
/// ```
pub struct Tx2Json<T: Transport = HttpTransport> {
    base_url: String,
    cookie: Option<String>,
    transport: T,
}

impl Tx2Json<HttpTransport> {
    pub fn new(opts: ClientOptions) -> Self {
        let transport = HttpTransport::new(opts.timeout);
        Self::with_transport(opts, transport)
    }
}

impl<T: Transport> Tx2Json<T> {
    pub fn with_transport(opts: ClientOptions, transport: T) -> Self {
        Self {
            base_url: opts.base_url.trim_end_matches('/').to_string(),
            cookie: opts.cookie,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tx_url(&self) -> String {
        join!(&self.base_url, TX_PATH)
    }

    /// Browser-like header set, with `origin`/`referer` pointing at our base URL
    /// and `Cookie` added when a session is configured.
    pub fn build_headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = BROWSER_HEADERS
            .iter()
            .map(|&(name, value)| {
                let value = match name {
                    "origin" => s!(&self.base_url),
                    "referer" => self.tx_url(),
                    _ => s!(value),
                };
                (s!(name), value)
            })
            .collect();

        if let Some(cookie) = &self.cookie {
            headers.push((s!("Cookie"), cookie.clone()));
        }
        headers
    }

    /// POST the id and return the page, provided it looks like a transaction page.
    pub fn fetch_html_for_tx(&self, tx: &str) -> Result<String, FetchError> {
        let url = self.tx_url();
        debug!("POST {url} tx={tx}");
        let reply = self
            .transport
            .post_form(&url, &self.build_headers(), &[(TX_FORM_FIELD, tx)])?;
        check_tx_page(reply, &url)
    }

    /// Fetch and extract. Every failure, transport or page shape, is `None`.
    pub fn parse(&self, tx: &str) -> Option<TxRecord> {
        match self.fetch_html_for_tx(tx) {
            Ok(html) => extract_fields_from_html(&html),
            Err(e) => {
                warn!("tx {tx}: {e}");
                None
            }
        }
    }
}

/// 200, non-empty, and mentions the receiver label in either language.
fn check_tx_page(reply: HttpReply, url: &str) -> Result<String, FetchError> {
    if reply.status != 200 {
        return Err(FetchError::Status { status: reply.status, url: s!(url) });
    }
    if reply.body.is_empty() {
        return Err(FetchError::EmptyBody(s!(url)));
    }
    let (zh, en) = LABEL_RECEIVER;
    if !(reply.body.contains(zh) || reply.body.contains(en)) {
        return Err(FetchError::NotTxPage(s!(url)));
    }
    Ok(reply.body)
}
