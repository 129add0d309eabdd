//! evp_derive — print OpenSSL-compatible key/IV for a password, like `openssl enc -P`

use anyhow::{bail, Context, Result};
use clap::Parser;
use rpassword::prompt_password;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use wordbridge::config::{self, Config};
use wordbridge::kdf::OpenSslKdf;
use wordbridge::HashAlgorithm;

#[derive(Debug, Parser)]
#[command(version, about = "Derive key and IV with EVPKDF (EVP_BytesToKey)")]
struct Args {
    /// Password; prompted for when omitted
    #[arg(short, long, env = "WORDBRIDGE_PASS")]
    pass: Option<String>,

    /// 8-byte salt as hex; random when omitted
    #[arg(short = 'S', long)]
    salt: Option<String>,

    /// Digest (md5, sha1, sha256, sha512)
    #[arg(long)]
    md: Option<HashAlgorithm>,

    /// Hash iterations per block
    #[arg(long)]
    iter: Option<u32>,

    /// Key size in bytes
    #[arg(long)]
    key_size: Option<usize>,

    /// IV size in bytes
    #[arg(long)]
    iv_size: Option<usize>,

    /// TOML config file (overrides WORDBRIDGE_CONFIG)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let conf: Config = match &args.config {
        Some(path) => {
            let mut conf = config::from_path(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            config::apply_env_overrides(&mut conf)?;
            conf
        }
        None => config::load().context("Failed to load configuration")?.clone(),
    };

    let mut settings = conf.kdf;
    if let Some(md) = args.md {
        settings.hash = md;
    }
    if let Some(iter) = args.iter {
        settings.iterations = iter;
    }
    if let Some(key_size) = args.key_size {
        settings.key_size = key_size;
    }
    if let Some(iv_size) = args.iv_size {
        settings.iv_size = iv_size;
    }
    debug!(?settings, "effective KDF settings");

    let salt = match &args.salt {
        Some(hex_salt) => Some(hex::decode(hex_salt.trim()).context("Salt is not valid hex")?),
        None => None,
    };

    let password = match args.pass {
        Some(p) => p,
        None => prompt_password("enter password: ")?,
    };
    if password.is_empty() {
        bail!("empty password");
    }

    let kdf = OpenSslKdf::from_settings(&settings)?;
    let params = kdf.execute(
        password.as_bytes(),
        settings.key_size,
        settings.iv_size,
        salt.as_deref(),
    )?;
    info!(hash = %settings.hash, iterations = settings.iterations, "derived key material");

    println!("salt={}", hex::encode_upper(params.salt));
    println!("key={}", hex::encode_upper(&params.key));
    println!("iv ={}", hex::encode_upper(&params.iv));
    Ok(())
}
