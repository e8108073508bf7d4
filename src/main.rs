// SPDX-License-Identifier: PMPL-1.0-or-later

//! webext-locales: locale asset conversion for extension packaging.
//!
//! Thin CLI over the library operations. The build driver invokes the
//! subcommands in pipeline order: patch-names, convert, then
//! write-manifest and localize-descriptor against the converted tree.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use webext_locales::{convert, descriptor, manifest, patch};

#[derive(Parser)]
#[command(name = "webext-locales")]
#[command(version = "1.2.0")]
#[command(about = "Locale asset conversion for browser extension packaging")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a build-channel postfix to every locale's extension name
    PatchNames {
        /// Destination build tree (contains _locales/)
        #[arg(value_name = "DEST")]
        dest: PathBuf,

        /// Postfix for name/short_name messages, e.g. " (Beta)"
        #[arg(short, long, default_value = "")]
        postfix: String,
    },

    /// Convert Chrome-style JSON locales to Firefox properties files
    Convert {
        /// The _locales directory to convert in place
        #[arg(value_name = "LOCALES_DIR")]
        locales_dir: PathBuf,
    },

    /// Register all supported locales in chrome.manifest
    WriteManifest {
        /// Destination build tree (contains chrome.manifest)
        #[arg(value_name = "DEST")]
        dest: PathBuf,
    },

    /// Expand the ${localised} placeholder in install.rdf
    LocalizeDescriptor {
        /// Source tree holding the original _locales/
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Destination build tree (may contain install.rdf)
        #[arg(value_name = "DEST")]
        dest: PathBuf,

        /// Postfix appended to each locale's name, e.g. " (Beta)"
        #[arg(short, long, default_value = "")]
        postfix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::PatchNames { dest, postfix } => {
            patch::append_name_postfix(&dest, &postfix)?;
            if postfix.is_empty() {
                println!("No postfix given, extension names left as-is");
            } else {
                println!(
                    "Patched extension names in {} with {:?}",
                    dest.join("_locales").display(),
                    postfix
                );
            }
        }

        Commands::Convert { locales_dir } => {
            let summary = convert::chrome_to_firefox(&locales_dir)?;
            println!(
                "Converted {} locales, dropped {} unsupported",
                summary.converted.to_string().green(),
                if summary.dropped > 0 {
                    summary.dropped.to_string().yellow()
                } else {
                    summary.dropped.to_string().normal()
                }
            );
        }

        Commands::WriteManifest { dest } => {
            manifest::write_locale_entries(&dest)?;
            println!(
                "Registered {} locales in {}",
                webext_locales::locales::Locale::all().len(),
                dest.join("chrome.manifest").display()
            );
        }

        Commands::LocalizeDescriptor {
            source,
            dest,
            postfix,
        } => {
            descriptor::localize_install_rdf(&source, &dest, &postfix)?;
            println!(
                "Localized install descriptor in {}",
                dest.display()
            );
        }
    }

    Ok(())
}
