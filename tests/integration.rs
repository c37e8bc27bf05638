// SPDX-License-Identifier: MPL-2.0
use folio::config::{self, Config, GeneralConfig};
use folio::content;
use folio::ui::contact_form::is_valid_email;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = folio::i18n::I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("form-status-spam"), "Spam detected.");

    // 2. Change config to Indonesian
    let indonesian_config = Config {
        general: GeneralConfig {
            language: Some("id".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&indonesian_config, &temp_config_file_path)
        .expect("Failed to write Indonesian config file");

    let loaded_indonesian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load Indonesian config from path");
    let i18n_id = folio::i18n::I18n::new(None, &loaded_indonesian_config);
    assert_eq!(i18n_id.current_locale().to_string(), "id");
    assert_eq!(i18n_id.tr("form-status-spam"), "Spam terdeteksi.");

    // 3. CLI flag wins over the config file
    let i18n_cli = folio::i18n::I18n::new(Some("en-US".to_string()), &loaded_indonesian_config);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_user_content_overrides_embedded_sample() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let content_path = dir.path().join("portfolio.toml");

    std::fs::write(
        &content_path,
        r#"
[profile]
name = "Integration Tester"
tagline = "Writes tests all day."

[[skills]]
name = "Testing"
level = "95"

[[skills]]
name = "Debugging"
level = "not-a-number"
"#,
    )
    .expect("Failed to write content file");

    let (portfolio, warning) = content::load(Some(content_path));
    assert!(warning.is_none());
    assert_eq!(portfolio.profile.name, "Integration Tester");
    assert_eq!(portfolio.skills[0].level_percent(), 95);
    // Unparsable levels degrade to zero instead of erroring.
    assert_eq!(portfolio.skills[1].level_percent(), 0);
}

#[test]
fn test_email_shape_check_matches_expected_pattern() {
    // Shaped like local@domain.tld
    for valid in ["a@b.c", "adi.pratama@mail.example.id", "x+y@z.co"] {
        assert!(is_valid_email(valid), "{valid} should be accepted");
    }

    // No @, no dot after the @, whitespace, or empty segments
    for invalid in [
        "",
        "plain",
        "missing.domain@",
        "user@nodot",
        "user@tld.",
        "@example.com",
        "two@at@signs.com",
        "spa ce@example.com",
    ] {
        assert!(!is_valid_email(invalid), "{invalid} should be rejected");
    }
}
