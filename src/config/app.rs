// src/config/app.rs
use super::defaults::default_kdf;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::consts::DEFAULT_CONFIG_PATH;
use crate::enums::HashAlgorithm;
use crate::error::{BridgeError, Result};
use crate::kdf::EvpKdf;

pub const CONFIG_PATH_VAR: &str = "WORDBRIDGE_CONFIG";
pub const HASH_VAR: &str = "WORDBRIDGE_HASH";
pub const ITERATIONS_VAR: &str = "WORDBRIDGE_ITERATIONS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kdf: KdfSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfSettings {
    pub hash: HashAlgorithm,
    pub iterations: u32,
    /// Key size in bytes
    pub key_size: usize,
    /// IV size in bytes
    pub iv_size: usize,
}

impl Default for KdfSettings {
    fn default() -> Self {
        default_kdf()
    }
}

impl KdfSettings {
    /// Checked EVPKDF for these settings
    pub fn evp_kdf(&self) -> Result<EvpKdf> {
        EvpKdf::new(self.hash, self.iterations)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once — falls back to defaults if the file is missing
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let config_path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        from_path(&config_path)?
    } else {
        #[cfg(feature = "logging")]
        tracing::debug!(path = %config_path, "config file not found, using built-in defaults");
        Config::default()
    };

    apply_env_overrides(&mut conf)?;
    Ok(CONFIG.get_or_init(|| conf))
}

/// Read and parse a TOML config file without caching it
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;

    #[cfg(feature = "logging")]
    tracing::debug!(path = %path.as_ref().display(), "loaded config file");

    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<Config> {
    let conf: Config = toml::from_str(content)?;
    conf.kdf.evp_kdf()?;
    Ok(conf)
}

/// `WORDBRIDGE_HASH` and `WORDBRIDGE_ITERATIONS` win over the file
pub fn apply_env_overrides(conf: &mut Config) -> Result<()> {
    if let Ok(hash) = std::env::var(HASH_VAR) {
        conf.kdf.hash = hash.parse()?;
    }
    if let Ok(iterations) = std::env::var(ITERATIONS_VAR) {
        conf.kdf.iterations = match iterations.trim().parse() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(BridgeError::InvalidSetting {
                    key: ITERATIONS_VAR,
                    value: iterations,
                })
            }
        };
    }
    Ok(())
}
