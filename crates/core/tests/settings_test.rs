use std::{io::Write, time::Duration};

use tubeseo_core::{ConfigurationError, Overrides, Provider, Settings};

fn secrets_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write secrets");
    file
}

#[tokio::test]
async fn loads_key_and_settings_from_explicit_file() {
    let file = secrets_file(
        r#"
gemini_api_key = "AIza-from-file"

[settings]
model = "gemini-test"
request_timeout_secs = 15
temperature = 0.2
"#,
    );

    let settings = Settings::load(Overrides {
        secrets_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .await
    .expect("settings should load");

    assert_eq!(settings.provider(), Provider::Gemini);
    assert_eq!(settings.model, "gemini-test");
    assert_eq!(settings.request_timeout, Duration::from_secs(15));
    assert_eq!(settings.temperature, 0.2);
    assert_eq!(settings.secrets_path.as_deref(), Some(file.path()));
    assert_eq!(
        settings.credentials.secret().unwrap().expose(),
        "AIza-from-file"
    );
}

#[tokio::test]
async fn malformed_file_is_a_configuration_error() {
    let file = secrets_file("gemini_api_key = [not valid");

    let err = Settings::load(Overrides {
        secrets_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(err, ConfigurationError::SecretsMalformed { .. }));
}

#[tokio::test]
async fn unknown_provider_in_file_is_rejected() {
    let file = secrets_file("[settings]\nprovider = \"claude\"\n");

    let err = Settings::load(Overrides {
        secrets_path: Some(file.path().to_path_buf()),
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(err, ConfigurationError::SecretsMalformed { .. }));
}
