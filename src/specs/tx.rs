// src/specs/tx.rs

use log::debug;

use crate::config::consts::*;
use crate::core::html::{field_table, strip_tags};
use crate::core::sanitize::{self, text_or_none};
use crate::record::TxRecord;

use super::identity::extract_identity;

/// Extract a [`TxRecord`] from a transaction page.
///
/// Returns `None` when neither `交易哈希` nor `Transaction Hash` labels a row:
/// the page is then not a transaction page and nothing else on it is trusted.
pub fn extract_fields_from_html(html: &str) -> Option<TxRecord> {
    let fields = field_table(html);
    debug!("tx page: {} labelled rows", fields.len());

    if !fields.has_any(LABEL_TX_HASH) {
        debug!("tx page: no transaction hash row");
        return None;
    }
    let tx_hash = strip_tags(fields.lookup(LABEL_TX_HASH)?).trim().to_string();

    let sender = extract_identity(fields.lookup(LABEL_SENDER).unwrap_or(""));
    let receiver = extract_identity(fields.lookup(LABEL_RECEIVER).unwrap_or(""));

    let text = |labels: (&str, &str)| fields.lookup(labels).and_then(text_or_none);

    let amount = text(LABEL_AMOUNT);
    let amount_value = amount.as_deref().and_then(sanitize::amount_value);

    let record = TxRecord {
        tx_hash,
        sender,
        receiver,
        token_type: text(LABEL_TOKEN_TYPE),
        token_address: fields.get(LABEL_TOKEN_ACCOUNT).and_then(text_or_none),
        amount,
        amount_value,
        time: text(LABEL_TIME),
        memo: text(LABEL_MEMO),
    };
    debug!("tx page: extracted {}", record.tx_hash);
    Some(record)
}
