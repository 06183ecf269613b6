use crate::error::{FridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "./fridge.db";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

pub const CONFIG_ENV: &str = "FRIDGE_CONFIG";
pub const DB_ENV: &str = "FRIDGE_DB";
pub const ADDR_ENV: &str = "FRIDGE_ADDR";
pub const URL_ENV: &str = "FRIDGE_URL";

/// Where the database lives and where the server listens / is reached.
///
/// Resolution order: built-in defaults, then the JSON file named by `FRIDGE_CONFIG`,
/// then the `FRIDGE_DB`, `FRIDGE_ADDR` and `FRIDGE_URL` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FridgeConfig {
    pub db_path: PathBuf,
    pub listen_addr: String,
    pub server_url: String,
}

impl Default for FridgeConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl FridgeConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load with an explicit variable lookup, so tests need not touch the process env.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FridgeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db) = lookup(DB_ENV).filter(|v| !v.is_empty()) {
            self.db_path = PathBuf::from(db);
        }
        if let Some(addr) = lookup(ADDR_ENV).filter(|v| !v.is_empty()) {
            self.listen_addr = addr;
        }
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.is_empty()) {
            self.server_url = url;
        }
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_fixed_constants() {
        let config = FridgeConfig::load_with(env(&[])).unwrap();
        assert_eq!(config.db_path, PathBuf::from("./fridge.db"));
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.server_url, "http://localhost:8080");
    }

    #[test]
    fn env_overrides_defaults() {
        let config = FridgeConfig::load_with(env(&[
            (DB_ENV, "/tmp/other.db"),
            (ADDR_ENV, "0.0.0.0:9000"),
            (URL_ENV, "http://fridge.local:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.base_url(), "http://fridge.local:9000");
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = FridgeConfig::load_with(env(&[(DB_ENV, "")])).unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fridge.json");
        fs::write(
            &path,
            r#"{"db_path": "/data/fridge.db", "listen_addr": "0.0.0.0:80"}"#,
        )
        .unwrap();

        let config = FridgeConfig::load_with(env(&[
            (CONFIG_ENV, path.to_str().unwrap()),
            (ADDR_ENV, "0.0.0.0:8081"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/data/fridge.db"));
        assert_eq!(config.listen_addr, "0.0.0.0:8081");
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = FridgeConfig::load_with(env(&[(CONFIG_ENV, "/nonexistent/fridge.json")]))
            .unwrap_err();
        assert!(matches!(err, FridgeError::Config(_)));
    }
}
