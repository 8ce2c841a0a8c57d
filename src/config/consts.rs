// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "https://v2ex.com";
pub const TX_PATH: &str = "/solana/tx";
pub const TX_FORM_FIELD: &str = "tx";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("tx2json/", env!("CARGO_PKG_VERSION"));

// Environment
pub const ENV_BASE_URL: &str = "BASE_URL";
pub const ENV_COOKIE: &str = "COOKIE";
pub const ENV_TIMEOUT_SECS: &str = "TX2JSON_TIMEOUT_SECS";

/// Browser-like request headers. `origin` and `referer` are rewritten per base URL.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8"),
    ("accept-language", "zh-CN,zh;q=0.6"),
    ("cache-control", "max-age=0"),
    ("content-type", "application/x-www-form-urlencoded"),
    ("origin", DEFAULT_BASE_URL),
    ("priority", "u=0, i"),
    ("referer", "https://v2ex.com/solana/tx"),
    ("sec-ch-ua", r#""Brave";v="141", "Not?A_Brand";v="8", "Chromium";v="141""#),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", r#""macOS""#),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "same-origin"),
    ("sec-fetch-user", "?1"),
    ("sec-gpc", "1"),
    ("upgrade-insecure-requests", "1"),
    ("user-agent", USER_AGENT),
];

// Row labels, (Chinese, English). Chinese is looked up first.
pub const LABEL_TX_HASH: (&str, &str) = ("交易哈希", "Transaction Hash");
pub const LABEL_SENDER: (&str, &str) = ("发送方", "Sender");
pub const LABEL_RECEIVER: (&str, &str) = ("接收方", "Receiver");
pub const LABEL_TOKEN_TYPE: (&str, &str) = ("代币类型", "Token Type");
pub const LABEL_AMOUNT: (&str, &str) = ("数额", "Amount");
pub const LABEL_TIME: (&str, &str) = ("发送时间", "Time");
pub const LABEL_MEMO: (&str, &str) = ("附言（只对发送者或者接收者可见）", "Memo");
// No localized variant on the page
pub const LABEL_TOKEN_ACCOUNT: &str = "Token Account";
