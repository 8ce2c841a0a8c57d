// src/lib.rs

#[macro_use]
pub mod macros;

pub mod client;
pub mod config;
pub mod core;
pub mod record;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

pub use crate::client::Tx2Json;
pub use crate::config::options::ClientOptions;
pub use crate::core::net::{FetchError, HttpReply, HttpTransport, Transport};
pub use crate::record::{Identity, TxRecord};
pub use crate::specs::identity::extract_identity;
pub use crate::specs::tx::extract_fields_from_html;
