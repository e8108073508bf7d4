// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for install.rdf localization

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use webext_locales::descriptor;
use webext_locales::locales::Locale;

const DESCRIPTOR_TEMPLATE: &str = "<RDF>\n${localised}\n</RDF>\n";

fn write_source_locale(source: &Path, code: &str, name: &str, description: &str) {
    let dir = source.join("_locales").join(code);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("messages.json"),
        format!(
            r#"{{"name":{{"message":"{name}"}},"description":{{"message":"{description}"}}}}"#
        ),
    )
    .unwrap();
}

fn write_all_source_locales(source: &Path) {
    for locale in Locale::all() {
        write_source_locale(
            source,
            locale.code(),
            &format!("Blocker {locale}"),
            &format!("Blocks ads ({locale})"),
        );
    }
}

#[test]
fn test_placeholder_expanded_for_every_locale() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_all_source_locales(source.path());
    fs::write(dest.path().join("install.rdf"), DESCRIPTOR_TEMPLATE).unwrap();

    descriptor::localize_install_rdf(source.path(), dest.path(), " (Beta)")
        .expect("localization should succeed");

    let content = fs::read_to_string(dest.path().join("install.rdf")).unwrap();
    assert!(!content.contains("${localised}"), "placeholder must be consumed");
    assert_eq!(content.matches("<em:localized>").count(), 18);
    assert!(content.contains("<em:name>Blocker en (Beta)</em:name>"));
    assert!(
        content.contains("<em:description>Blocks ads (en)</em:description>"),
        "descriptions are taken unmodified"
    );
    assert!(content.starts_with("<RDF>"));
    assert!(content.trim_end().ends_with("</RDF>"));
}

#[test]
fn test_locale_codes_stay_in_chrome_form() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_all_source_locales(source.path());
    fs::write(dest.path().join("install.rdf"), DESCRIPTOR_TEMPLATE).unwrap();

    descriptor::localize_install_rdf(source.path(), dest.path(), "").unwrap();

    let content = fs::read_to_string(dest.path().join("install.rdf")).unwrap();
    assert!(content.contains("<em:locale>pt_BR</em:locale>"));
    assert!(!content.contains("<em:locale>pt-BR</em:locale>"));
}

#[test]
fn test_blocks_follow_registration_order() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_all_source_locales(source.path());
    fs::write(dest.path().join("install.rdf"), DESCRIPTOR_TEMPLATE).unwrap();

    descriptor::localize_install_rdf(source.path(), dest.path(), "").unwrap();

    let content = fs::read_to_string(dest.path().join("install.rdf")).unwrap();
    let en = content.find("<em:locale>en</em:locale>").unwrap();
    let ru = content.find("<em:locale>ru</em:locale>").unwrap();
    let id = content.find("<em:locale>id</em:locale>").unwrap();
    assert!(en < ru && ru < id);
}

#[test]
fn test_empty_postfix_leaves_names_unchanged() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_all_source_locales(source.path());
    fs::write(dest.path().join("install.rdf"), DESCRIPTOR_TEMPLATE).unwrap();

    descriptor::localize_install_rdf(source.path(), dest.path(), "").unwrap();

    let content = fs::read_to_string(dest.path().join("install.rdf")).unwrap();
    assert!(content.contains("<em:name>Blocker en</em:name>"));
}

#[test]
fn test_noop_when_descriptor_missing() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    descriptor::localize_install_rdf(source.path(), dest.path(), " (Beta)")
        .expect("missing descriptor is not an error");

    assert!(!dest.path().join("install.rdf").exists());
}

#[test]
fn test_missing_locale_bundle_errors() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_source_locale(source.path(), "en", "Blocker", "Blocks ads");
    fs::write(dest.path().join("install.rdf"), DESCRIPTOR_TEMPLATE).unwrap();

    let err = descriptor::localize_install_rdf(source.path(), dest.path(), "").unwrap_err();
    assert!(err.to_string().contains("unable to read message file"));
}

#[test]
fn test_bundle_without_name_errors() {
    let source = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    write_all_source_locales(source.path());
    let en_file = source.path().join("_locales/en/messages.json");
    fs::write(&en_file, r#"{"description":{"message":"only a description"}}"#).unwrap();
    fs::write(dest.path().join("install.rdf"), DESCRIPTOR_TEMPLATE).unwrap();

    let err = descriptor::localize_install_rdf(source.path(), dest.path(), "").unwrap_err();
    assert!(err.to_string().contains("missing name message"));
}
