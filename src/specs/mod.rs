// src/specs/mod.rs
//! # Page specs
//!
//! Pure HTML extraction for the transaction page. Nothing here does I/O;
//! `client` fetches the page and hands the text over.
//!
//! ## Page shape
//! The page is a table of two-cell rows, `<tr><td>LABEL</td><td>VALUE</td></tr>`.
//! Labels are either Chinese or English depending on the session's locale;
//! lookups try the Chinese label first (see `config::consts`).
//!
//! ## Conventions
//! - Fixed textual patterns (`core::html`), no DOM. Tag stripping removes anything
//!   between `<` and `>` and knows nothing about nesting, comments or scripts.
//! - Blank-after-strip is `None`, never `""`.
//! - No transaction hash row means no record at all.
//!
//! ```text
//! Tx2Json::parse → client fetch → tx::extract_fields_from_html
//!                                  ↘ identity::extract_identity (sender, receiver)
//! ```
pub mod identity;
pub mod tx;
