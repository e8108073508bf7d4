// SPDX-License-Identifier: PMPL-1.0-or-later

//! Chrome → Firefox locale format conversion.
//!
//! The Chrome target keeps one `messages.json` per locale directory;
//! the Firefox target wants flat `messages.properties` files in
//! hyphenated locale directories. The English bundle is the canonical
//! key set: every output file carries exactly its keys, in its order,
//! falling back to the English text wherever a translation is missing.
//! Locale directories outside the supported set are removed from the
//! tree entirely.

use crate::bundle::{self, MessageBundle};
use crate::locales::Locale;
use crate::LINE_SEP;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What a conversion run did to the locales tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Locales converted to properties files.
    pub converted: usize,
    /// Unsupported locale directories deleted.
    pub dropped: usize,
}

/// Convert every locale directory under `locales_dir` in place.
///
/// Already-processed locales stay converted if a later one fails; the
/// build driver treats the whole step as atomic-or-abort and reruns
/// from a clean checkout.
pub fn chrome_to_firefox(locales_dir: &Path) -> Result<ConvertSummary> {
    let en_file = locales_dir.join("en").join("messages.json");
    let en_messages = bundle::read_messages(&en_file)?;

    // Snapshot before the loop: conversion creates hyphenated sibling
    // directories that a live read_dir iteration could re-visit.
    let mut locale_dirs: Vec<PathBuf> = fs::read_dir(locales_dir)
        .with_context(|| format!("unable to list locales directory {}", locales_dir.display()))?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    locale_dirs.sort();

    let mut summary = ConvertSummary {
        converted: 0,
        dropped: 0,
    };

    for dir in locale_dirs {
        let code = match dir.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        if !Locale::supported(&code) {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("unable to delete locale directory {}", dir.display()))?;
            summary.dropped += 1;
            continue;
        }

        let chrome_file = dir.join("messages.json");
        let local_messages = bundle::read_messages(&chrome_file)?;

        let firefox_dir = locales_dir.join(code.replace('_', "-"));
        fs::create_dir_all(&firefox_dir)
            .with_context(|| format!("unable to create locale directory {}", firefox_dir.display()))?;
        let properties_file = firefox_dir.join("messages.properties");
        fs::write(&properties_file, render_properties(&en_messages, &local_messages))
            .with_context(|| format!("unable to write {}", properties_file.display()))?;

        fs::remove_file(&chrome_file)
            .with_context(|| format!("unable to delete {}", chrome_file.display()))?;
        if code.contains('_') {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("unable to delete locale directory {}", dir.display()))?;
        }

        summary.converted += 1;
    }

    Ok(summary)
}

/// Render a properties file over the English key set, taking local
/// translations where they exist. Embedded newlines are escaped to the
/// two-character sequence `\n`; properties values are single-line.
fn render_properties(en: &MessageBundle, local: &MessageBundle) -> String {
    let mut out = String::new();
    for (id, en_text) in en {
        let text = local.get(id).unwrap_or(en_text);
        out.push_str(id);
        out.push('=');
        out.push_str(&text.replace('\n', "\\n"));
        out.push_str(LINE_SEP);
    }
    out
}
