// src/config/mod.rs
//! Configuration system for wordbridge
//!
//! Lazy-loaded global config with TOML + env overrides. Only the
//! password-based derivation defaults live here; the conversion layer has
//! nothing to configure.

pub use app::{apply_env_overrides, from_path, from_toml_str, load, Config, KdfSettings};

mod app;
mod defaults;
