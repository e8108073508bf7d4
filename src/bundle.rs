// SPDX-License-Identifier: PMPL-1.0-or-later

//! Chrome-style message bundle loading.
//!
//! A `messages.json` maps message ids to objects carrying a `message`
//! string plus optional translator metadata (`description`,
//! `placeholders`). Only the `message` text survives loading; the map
//! keeps the file's key order, which the format converter relies on
//! when it emits properties entries.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One locale's messages, in file order: message id → message text.
pub type MessageBundle = IndexMap<String, String>;

#[derive(Debug, Deserialize)]
struct MessageEntry {
    message: String,
}

/// Load a `messages.json` into a [`MessageBundle`].
///
/// An entry without a `message` string is a load error, not a silent
/// gap. A bundle that passes this function is complete for every id
/// it declares.
pub fn read_messages(path: &Path) -> Result<MessageBundle> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("unable to read message file {}", path.display()))?;
    let entries: IndexMap<String, MessageEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("malformed message file {}", path.display()))?;
    Ok(entries
        .into_iter()
        .map(|(id, entry)| (id, entry.message))
        .collect())
}
