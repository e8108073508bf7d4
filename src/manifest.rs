// SPDX-License-Identifier: PMPL-1.0-or-later

//! `chrome.manifest` locale registration.

use crate::locales::Locale;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Chrome package name the locale entries register under.
const CHROME_PACKAGE: &str = "adguard";

/// Append one locale registration line per supported locale to
/// `<dest>/chrome.manifest`, after the existing content and a single
/// blank line. Codes are hyphenated, matching the directory layout the
/// format converter produces under `./chrome/locale/`.
pub fn write_locale_entries(dest: &Path) -> Result<()> {
    let manifest = dest.join("chrome.manifest");
    let mut content = fs::read_to_string(&manifest)
        .with_context(|| format!("unable to read manifest {}", manifest.display()))?;

    content.push('\n');
    for locale in Locale::all() {
        let code = locale.firefox_code();
        content.push_str(&format!(
            "\nlocale {CHROME_PACKAGE} {code} ./chrome/locale/{code}/"
        ));
    }

    fs::write(&manifest, content)
        .with_context(|| format!("unable to write manifest {}", manifest.display()))?;
    Ok(())
}
