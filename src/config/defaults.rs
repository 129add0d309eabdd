use crate::config::app::KdfSettings;
use crate::consts::{DEFAULT_IV_SIZE, DEFAULT_KDF_ITERATIONS, DEFAULT_KEY_SIZE};
use crate::enums::HashAlgorithm;

/// What the legacy password-based AES-256 cipher uses
pub fn default_kdf() -> KdfSettings {
    KdfSettings {
        hash: HashAlgorithm::Md5,
        iterations: DEFAULT_KDF_ITERATIONS,
        key_size: DEFAULT_KEY_SIZE,
        iv_size: DEFAULT_IV_SIZE,
    }
}
