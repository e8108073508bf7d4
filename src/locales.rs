// SPDX-License-Identifier: PMPL-1.0-or-later

//! The fixed set of locales the extension ships with.
//!
//! Every build target draws from the same closed list; a locale
//! directory whose code is not in this list is not packaged at all.
//! Enumeration order matters: it is the order locales are registered in
//! `chrome.manifest` and listed in `install.rdf`.
//!
//! ## Adding a locale
//!
//! 1. Add a variant to [`Locale`] (position fixes its registration order)
//! 2. Add a `Locale::Xx => "xx"` arm to `Locale::code()`
//! 3. Add a `"xx" => Some(Locale::Xx)` arm to `Locale::from_code()`
//! 4. Append the variant to `Locale::all()`
//! 5. Add its English name to `Locale::language_name()`

use serde::{Deserialize, Serialize};

/// A locale the extension is translated into.
///
/// Codes follow the Chrome extension convention: a lowercase language
/// code, optionally followed by an underscore and a region tag
/// (`pt_BR`, `es_419`). The Firefox packaging target wants the same
/// codes hyphenated — see [`Locale::firefox_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    En,
    Ru,
    De,
    Tr,
    Uk,
    Pl,
    PtBr,
    PtPt,
    Ko,
    ZhCn,
    Sr,
    Fr,
    Sk,
    Hy,
    Es419,
    Es,
    It,
    Id,
}

impl Locale {
    /// Chrome-style locale code, as used for `_locales/` directory names.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::De => "de",
            Locale::Tr => "tr",
            Locale::Uk => "uk",
            Locale::Pl => "pl",
            Locale::PtBr => "pt_BR",
            Locale::PtPt => "pt_PT",
            Locale::Ko => "ko",
            Locale::ZhCn => "zh_CN",
            Locale::Sr => "sr",
            Locale::Fr => "fr",
            Locale::Sk => "sk",
            Locale::Hy => "hy",
            Locale::Es419 => "es_419",
            Locale::Es => "es",
            Locale::It => "it",
            Locale::Id => "id",
        }
    }

    /// Firefox-style locale code: underscores become hyphens.
    pub fn firefox_code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::PtPt => "pt-PT",
            Locale::ZhCn => "zh-CN",
            Locale::Es419 => "es-419",
            other => other.code(),
        }
    }

    /// Parse a locale code into a supported locale.
    ///
    /// Case-insensitive: locale directories have shown up with
    /// inconsistent casing in translation drops, and the packaging
    /// step must still recognise them.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            "de" => Some(Locale::De),
            "tr" => Some(Locale::Tr),
            "uk" => Some(Locale::Uk),
            "pl" => Some(Locale::Pl),
            "pt_br" => Some(Locale::PtBr),
            "pt_pt" => Some(Locale::PtPt),
            "ko" => Some(Locale::Ko),
            "zh_cn" => Some(Locale::ZhCn),
            "sr" => Some(Locale::Sr),
            "fr" => Some(Locale::Fr),
            "sk" => Some(Locale::Sk),
            "hy" => Some(Locale::Hy),
            "es_419" => Some(Locale::Es419),
            "es" => Some(Locale::Es),
            "it" => Some(Locale::It),
            "id" => Some(Locale::Id),
            _ => None,
        }
    }

    /// Whether a code names a supported locale.
    pub fn supported(code: &str) -> bool {
        Locale::from_code(code).is_some()
    }

    /// All supported locales, in registration order.
    pub fn all() -> &'static [Locale] {
        &[
            Locale::En,
            Locale::Ru,
            Locale::De,
            Locale::Tr,
            Locale::Uk,
            Locale::Pl,
            Locale::PtBr,
            Locale::PtPt,
            Locale::Ko,
            Locale::ZhCn,
            Locale::Sr,
            Locale::Fr,
            Locale::Sk,
            Locale::Hy,
            Locale::Es419,
            Locale::Es,
            Locale::It,
            Locale::Id,
        ]
    }

    /// English display name of the locale's language.
    pub fn language_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Russian",
            Locale::De => "German",
            Locale::Tr => "Turkish",
            Locale::Uk => "Ukrainian",
            Locale::Pl => "Polish",
            Locale::PtBr => "Portuguese (Brazil)",
            Locale::PtPt => "Portuguese (Portugal)",
            Locale::Ko => "Korean",
            Locale::ZhCn => "Chinese (China)",
            Locale::Sr => "Serbian",
            Locale::Fr => "French",
            Locale::Sk => "Slovak",
            Locale::Hy => "Armenian",
            Locale::Es419 => "Spanish (Latin America)",
            Locale::Es => "Spanish",
            Locale::It => "Italian",
            Locale::Id => "Indonesian",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
