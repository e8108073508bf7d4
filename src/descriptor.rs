// SPDX-License-Identifier: PMPL-1.0-or-later

//! `install.rdf` localized-metadata expansion.
//!
//! The legacy Firefox install descriptor declares the extension's name
//! and description once per locale. The build template carries a
//! `${localised}` placeholder where those declarations belong; this
//! module renders one `<em:localized>` block per supported locale from
//! the source locale tree and substitutes them in. Locale codes stay in
//! Chrome form here (`pt_BR`, not `pt-BR`); the descriptor predates
//! the hyphenated layout.

use crate::bundle;
use crate::locales::Locale;
use crate::LINE_SEP;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const LOCALIZED_PLACEHOLDER: &str = "${localised}";

/// Expand the `${localised}` placeholder in `<dest>/install.rdf` with
/// per-locale metadata read from `<source>/_locales/`, appending
/// `postfix` to each locale's name. No-op when the descriptor does not
/// exist (the build target does not use this format).
pub fn localize_install_rdf(source: &Path, dest: &Path, postfix: &str) -> Result<()> {
    let descriptor = dest.join("install.rdf");
    if !descriptor.exists() {
        return Ok(());
    }

    let mut blocks = String::new();
    for locale in Locale::all() {
        let bundle_path = source
            .join("_locales")
            .join(locale.code())
            .join("messages.json");
        let messages = bundle::read_messages(&bundle_path)?;
        let name = messages
            .get("name")
            .with_context(|| format!("missing name message in {}", bundle_path.display()))?;
        let description = messages
            .get("description")
            .with_context(|| format!("missing description message in {}", bundle_path.display()))?;
        blocks.push_str(&localized_block(*locale, &format!("{name}{postfix}"), description));
    }

    let content = fs::read_to_string(&descriptor)
        .with_context(|| format!("unable to read install descriptor {}", descriptor.display()))?;
    let content = content.replace(LOCALIZED_PLACEHOLDER, &blocks);
    fs::write(&descriptor, content)
        .with_context(|| format!("unable to write install descriptor {}", descriptor.display()))?;
    Ok(())
}

fn localized_block(locale: Locale, name: &str, description: &str) -> String {
    let code = locale.code();
    format!(
        "<em:localized>{LINE_SEP}\
         \t<Description>{LINE_SEP}\
         \t\t<em:locale>{code}</em:locale>{LINE_SEP}\
         \t\t<em:name>{name}</em:name>{LINE_SEP}\
         \t\t<em:description>{description}</em:description>{LINE_SEP}\
         \t</Description>{LINE_SEP}\
         </em:localized>{LINE_SEP}"
    )
}
