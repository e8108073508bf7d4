// SPDX-License-Identifier: PMPL-1.0-or-later

//! Extension display-name postfix patching.
//!
//! Beta and dev builds append a channel marker to the extension's
//! `name` and `short_name` so different channels can be installed side
//! by side. The patch is textual: the message files are formatted one
//! key/value pair per line with the `"message"` pair directly below the
//! `"name":`/`"short_name":` line, and only that message line is
//! rewritten. Everything else passes through untouched, so translator
//! formatting survives. Each invocation appends the postfix again; the
//! caller runs this exactly once per build.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Append `postfix` to the `name` and `short_name` messages of every
/// locale under `<dest>/_locales/`. No-op for an empty postfix.
pub fn append_name_postfix(dest: &Path, postfix: &str) -> Result<()> {
    if postfix.is_empty() {
        return Ok(());
    }

    let locales_dir = dest.join("_locales");
    let entries = fs::read_dir(&locales_dir)
        .with_context(|| format!("unable to list locales directory {}", locales_dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        patch_message_file(&path.join("messages.json"), postfix)?;
    }

    Ok(())
}

fn patch_message_file(path: &Path, postfix: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read message file {}", path.display()))?;

    let mut patched = String::with_capacity(content.len() + 64);
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        patched.push_str(line);
        patched.push('\n');

        let trimmed = line.trim();
        if trimmed.starts_with("\"name\":") || trimmed.starts_with("\"short_name\":") {
            let Some(message_line) = lines.next() else {
                bail!("message entry missing after name key in {}", path.display());
            };
            patched.push_str(&postfix_message_line(message_line, postfix, path)?);
            patched.push('\n');
        }
    }

    fs::write(path, patched)
        .with_context(|| format!("unable to write message file {}", path.display()))?;
    Ok(())
}

/// Rewrite a `"message": "<value>"` line with the postfix appended
/// before the closing quote.
fn postfix_message_line(line: &str, postfix: &str, path: &Path) -> Result<String> {
    let Some((_, value)) = line.split_once(':') else {
        bail!("expected a message entry in {}, found: {}", path.display(), line.trim());
    };
    let value = value.trim();
    let value = value.strip_suffix('"').unwrap_or(value);
    Ok(format!("\t\"message\": {value}{postfix}\""))
}
