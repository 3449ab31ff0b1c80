//! Application configuration. Paths, login credentials, chat pacing.

use crate::domain::DomainError;
use serde::Deserialize;
use std::path::PathBuf;

/// Demo credentials accepted when none are configured.
pub const DEFAULT_LOGIN_EMAIL: &str = "test@example.com";
pub const DEFAULT_LOGIN_PASSWORD: &str = "123456";

/// Artificial delay before MatriBot answers, in milliseconds.
pub const DEFAULT_CHAT_DELAY_MS: u64 = 800;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Root for generated files. Read from MATRISENSE_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Where PDF reports are written. Read from MATRISENSE_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Login gate
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from MATRISENSE_LOGIN_EMAIL.
    #[serde(default)]
    pub login_email: Option<String>,

    /// Read from MATRISENSE_LOGIN_PASSWORD.
    #[serde(default)]
    pub login_password: Option<String>,

    /// Failed logins tolerated before exit. Read from MATRISENSE_LOGIN_ATTEMPTS.
    #[serde(default)]
    pub login_attempts: Option<u32>,

    // ─────────────────────────────────────────────────────────────────────────
    // Chat / records
    // ─────────────────────────────────────────────────────────────────────────
    /// Delay before each bot reply. 0 disables it. Read from MATRISENSE_CHAT_DELAY_MS.
    #[serde(default)]
    pub chat_delay_ms: Option<u64>,

    /// Keep the latest assessment in `<data_dir>/latest_record.json` across runs.
    /// Read from MATRISENSE_PERSIST_RECORDS.
    #[serde(default)]
    pub persist_records: Option<bool>,
}

impl AppConfig {
    /// Reads `.env`, the optional MATRISENSE_CONFIG file and MATRISENSE_* variables.
    ///
    /// A value that does not deserialize is an error; nothing falls back to defaults.
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        Self::from_sources(
            std::env::var("MATRISENSE_CONFIG").ok(),
            config::Environment::with_prefix("MATRISENSE"),
        )
    }

    fn from_sources(file: Option<String>, env: config::Environment) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment wins over the file.
        c = c.add_source(env.try_parsing(true));
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Returns the data directory. Defaults to ./data.
    pub fn data_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or("./data"))
    }

    /// Returns the reports directory. Defaults to `<data_dir>/reports`.
    pub fn reports_dir_or_default(&self) -> PathBuf {
        self.reports_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.data_dir_or_default().join("reports"))
    }

    /// Path of the JSON record file used when persistence is on.
    pub fn record_path(&self) -> PathBuf {
        self.data_dir_or_default().join("latest_record.json")
    }

    pub fn login_email_or_default(&self) -> String {
        self.login_email
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGIN_EMAIL.to_string())
    }

    pub fn login_password_or_default(&self) -> String {
        self.login_password
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGIN_PASSWORD.to_string())
    }

    /// Returns login attempts. Defaults to 3; never below 1.
    pub fn login_attempts_or_default(&self) -> u32 {
        self.login_attempts.unwrap_or(3).max(1)
    }

    /// Returns chat reply delay in milliseconds. Defaults to 800.
    pub fn chat_delay_ms_or_default(&self) -> u64 {
        self.chat_delay_ms.unwrap_or(DEFAULT_CHAT_DELAY_MS)
    }

    /// Returns true if the latest record should be written to disk.
    pub fn is_persistence_enabled(&self) -> bool {
        self.persist_records.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.chat_delay_ms_or_default(), 800);
        assert_eq!(cfg.login_attempts_or_default(), 3);
        assert_eq!(cfg.login_email_or_default(), "test@example.com");
        assert_eq!(cfg.login_password_or_default(), "123456");
        assert_eq!(cfg.reports_dir_or_default(), PathBuf::from("./data/reports"));
        assert_eq!(cfg.record_path(), PathBuf::from("./data/latest_record.json"));
        assert!(!cfg.is_persistence_enabled());
    }

    #[test]
    fn test_reports_dir_follows_data_dir() {
        let cfg = AppConfig {
            data_dir: Some("/tmp/ms".into()),
            ..Default::default()
        };
        assert_eq!(cfg.reports_dir_or_default(), PathBuf::from("/tmp/ms/reports"));

        let cfg = AppConfig {
            data_dir: Some("/tmp/ms".into()),
            reports_dir: Some("/srv/out".into()),
            ..Default::default()
        };
        assert_eq!(cfg.reports_dir_or_default(), PathBuf::from("/srv/out"));
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        config::Environment::with_prefix("MATRISENSE").source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_load_reads_prefixed_env() {
        let cfg = AppConfig::from_sources(
            None,
            env(&[
                ("MATRISENSE_LOGIN_EMAIL", "mum@clinic.org"),
                ("MATRISENSE_LOGIN_PASSWORD", "s3cret"),
                ("MATRISENSE_LOGIN_ATTEMPTS", "5"),
                ("MATRISENSE_CHAT_DELAY_MS", "0"),
                ("MATRISENSE_PERSIST_RECORDS", "true"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.login_email_or_default(), "mum@clinic.org");
        assert_eq!(cfg.login_password_or_default(), "s3cret");
        assert_eq!(cfg.login_attempts_or_default(), 5);
        assert_eq!(cfg.chat_delay_ms_or_default(), 0);
        assert!(cfg.is_persistence_enabled());
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let err = AppConfig::from_sources(
            None,
            env(&[
                ("MATRISENSE_LOGIN_EMAIL", "mum@clinic.org"),
                ("MATRISENSE_LOGIN_PASSWORD", "s3cret"),
                ("MATRISENSE_LOGIN_ATTEMPTS", "three"),
            ]),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
        assert!(err.to_string().contains("login_attempts"));
    }

    #[test]
    fn test_file_source_under_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrisense.toml");
        std::fs::write(&path, "data_dir = \"/srv/ms\"\nchat_delay_ms = 100\n").unwrap();

        let cfg = AppConfig::from_sources(
            Some(path.display().to_string()),
            env(&[("MATRISENSE_CHAT_DELAY_MS", "250")]),
        )
        .unwrap();
        assert_eq!(cfg.data_dir_or_default(), PathBuf::from("/srv/ms"));
        assert_eq!(cfg.chat_delay_ms_or_default(), 250);
    }

    #[test]
    fn test_login_attempts_floor() {
        let cfg = AppConfig {
            login_attempts: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.login_attempts_or_default(), 1);
    }
}
