// src/core/net.rs
// Blocking form POST over HTTPS (ureq). One request, no retries.

use std::{io::Read, time::Duration};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP transport error: {0}")] Transport(String),

    #[error("Failed to read response body: {0}")] Body(#[from] std::io::Error),

    #[error("HTTP error: {status} {url}")] Status { status: u16, url: String },

    #[error("Empty response body: {0}")] EmptyBody(String),

    #[error("Not a transaction page (receiver marker missing): {0}")] NotTxPage(String),
}

/// Status and body of a finished request. Non-2xx statuses are replies too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// The one I/O seam of the crate. Implement this to fetch pages some other way
/// (fixtures, a proxy, a different HTTP stack).
pub trait Transport {
    fn post_form(
        &self,
        url: &str,
        headers: &[(String, String)],
        form: &[(&str, &str)],
    ) -> Result<HttpReply, FetchError>;
}

pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Self { agent: builder.build() }
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &self,
        url: &str,
        headers: &[(String, String)],
        form: &[(&str, &str)],
    ) -> Result<HttpReply, FetchError> {
        let mut req = self.agent.post(url);
        for (name, value) in headers {
            req = req.set(name, value);
        }

        let resp = match req.send_form(form) {
            Ok(resp) => resp,
            // Status handling belongs to the caller
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(e) => return Err(FetchError::Transport(e.to_string())),
        };

        let status = resp.status();
        let mut buf = Vec::new();
        resp.into_reader().read_to_end(&mut buf)?;

        Ok(HttpReply { status, body: String::from_utf8_lossy(&buf).into_owned() })
    }
}
