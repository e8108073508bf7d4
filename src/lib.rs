// SPDX-License-Identifier: PMPL-1.0-or-later

//! webext-locales: locale asset conversion for extension packaging.
//!
//! The extension's translations live as Chrome-style locale trees
//! (`_locales/<code>/messages.json`). This crate reshapes them for the
//! other packaging targets, as four independent operations the build
//! driver runs in order:
//!
//! 1. **patch** — append a build-channel postfix to every locale's
//!    `name`/`short_name` messages.
//! 2. **convert** — rewrite each supported locale as a flat
//!    `messages.properties` file, hyphenate its directory, and drop
//!    unsupported locales from the tree.
//! 3. **manifest** — register every supported locale in `chrome.manifest`.
//! 4. **descriptor** — expand the `${localised}` placeholder in
//!    `install.rdf` with per-locale name/description blocks.
//!
//! The order matters: conversion deletes and renames the directories
//! the earlier patch step walks, and the manifest/descriptor steps
//! describe the converted layout.

pub mod bundle;
pub mod convert;
pub mod descriptor;
pub mod locales;
pub mod manifest;
pub mod patch;

/// Line terminator for generated text files, matching what the
/// platform's packaging tools expect.
pub(crate) const LINE_SEP: &str = if cfg!(windows) { "\r\n" } else { "\n" };
