// src/record.rs
use serde::{Deserialize, Serialize};

/// One party of a transfer, as shown in the sender/receiver cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub username: Option<String>,
    pub avatar: Option<String>,
    pub uid: Option<String>,
}

/// Everything the transaction page tells us. Only `tx_hash` is guaranteed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxRecord {
    pub tx_hash: String,
    pub sender: Identity,
    pub receiver: Identity,
    pub token_type: Option<String>,
    /// From the "Token Account" row.
    pub token_address: Option<String>,
    /// Raw text, e.g. "1.2345 SOL".
    pub amount: Option<String>,
    /// Numeric prefix of `amount`.
    pub amount_value: Option<f64>,
    pub time: Option<String>,
    pub memo: Option<String>,
}

impl TxRecord {
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) }
    }
}
