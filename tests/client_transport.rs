// tests/client_transport.rs
//
// Tx2Json over a scripted Transport: fetch → sanity check → extract.
//
use tx2json::{ClientOptions, FetchError, HttpReply, Transport, Tx2Json};

const FIXTURE_EN: &str = include_str!("fixtures/tx_en.html");

/// Serves one canned reply for any request.
struct Canned(u16, &'static str);

impl Transport for Canned {
    fn post_form(
        &self,
        _url: &str,
        _headers: &[(String, String)],
        _form: &[(&str, &str)],
    ) -> Result<HttpReply, FetchError> {
        Ok(HttpReply { status: self.0, body: self.1.to_string() })
    }
}

struct Down;

impl Transport for Down {
    fn post_form(
        &self,
        url: &str,
        _headers: &[(String, String)],
        _form: &[(&str, &str)],
    ) -> Result<HttpReply, FetchError> {
        Err(FetchError::Transport(format!("{url}: connection refused")))
    }
}

#[test]
fn parse_returns_record_for_tx_page() {
    let client = Tx2Json::with_transport(ClientOptions::default(), Canned(200, FIXTURE_EN));
    let rec = client.parse("4Ei8hzSZ").expect("record");
    assert_eq!(rec.tx_hash, "4Ei8hzSZ9Ab3kD1qYdqGKb7rPmXf2nJvZLqz8sVxR1cT");
    assert_eq!(rec.receiver.username.as_deref(), Some("bob"));
}

#[test]
fn every_failure_collapses_to_none() {
    let opts = ClientOptions::default;

    assert!(Tx2Json::with_transport(opts(), Down).parse("x").is_none());
    assert!(Tx2Json::with_transport(opts(), Canned(500, FIXTURE_EN)).parse("x").is_none());
    assert!(Tx2Json::with_transport(opts(), Canned(200, "")).parse("x").is_none());
    assert!(Tx2Json::with_transport(opts(), Canned(200, "<h1>Sign in</h1>")).parse("x").is_none());
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let opts = ClientOptions { base_url: "https://v2ex.com///".into(), ..ClientOptions::default() };
    let client = Tx2Json::with_transport(opts, Canned(200, FIXTURE_EN));
    assert_eq!(client.base_url(), "https://v2ex.com");
    assert_eq!(client.tx_url(), "https://v2ex.com/solana/tx");
}

#[test]
fn fetch_reports_reason() {
    let client = Tx2Json::with_transport(ClientOptions::default(), Canned(403, "denied"));
    let err = client.fetch_html_for_tx("x").unwrap_err();
    assert!(err.to_string().contains("403"));
}
