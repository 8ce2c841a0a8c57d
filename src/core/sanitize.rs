// src/core/sanitize.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::html::strip_tags;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("number pattern"));

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `None` for blank input, trimmed text otherwise.
pub fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// Strip tags, trim, and treat an empty result as absent.
pub fn text_or_none(html: &str) -> Option<String> {
    non_empty(&strip_tags(html))
}

pub fn last_token(s: &str) -> Option<&str> {
    s.split_whitespace().next_back()
}

/// First decimal numeral in `amount`, ignoring thousands separators.
/// "1,234.5 SOL" → 1234.5
pub fn amount_value(amount: &str) -> Option<f64> {
    let plain = amount.replace(',', "");
    let m = NUMBER_RE.find(&plain)?;
    m.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  Foo \n\t  Bar  "), "Foo Bar");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn text_or_none_drops_blank_after_strip() {
        assert_eq!(text_or_none("<span> </span>"), None);
        assert_eq!(text_or_none(""), None);
        assert_eq!(text_or_none(" <b>SOL</b> ").as_deref(), Some("SOL"));
    }

    #[test]
    fn last_token_of_text() {
        assert_eq!(last_token("Foo Bar"), Some("Bar"));
        assert_eq!(last_token("  "), None);
    }

    #[test]
    fn amount_value_variants() {
        assert!(approx(amount_value("1.2345 SOL"), 1.2345));
        assert!(approx(amount_value("1,234.5 SOL"), 1234.5));
        assert!(approx(amount_value("-0.5 USDC"), -0.5));
        assert!(approx(amount_value("≈ .75 V2EX"), 0.75));
        assert!(approx(amount_value("+12"), 12.0));
        assert_eq!(amount_value("SOL"), None);
        assert_eq!(amount_value(""), None);
    }

    #[test]
    fn amount_value_takes_first_number_only() {
        assert!(approx(amount_value("10 SOL (2 fee)"), 10.0));
    }
}
