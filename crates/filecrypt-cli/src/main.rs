//! Command-line interface for `filecrypt`.
//!
//! Thin glue only: walks one folder, reads each regular file into memory,
//! hands the bytes to the engine, and writes the result under a derived name.
//! All cipher logic lives in the `filecrypt` and `aes-core` crates.

#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use filecrypt::{derive_key, KeySize};

const ENCRYPTED_EXT: &str = "enc";

/// Folder encryption tool.
#[derive(Parser)]
#[command(
    name = "filecrypt",
    version,
    author,
    about = "Encrypt or decrypt every file in a folder with AES-CBC"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt each regular file, writing `<name>.enc` alongside it.
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Folder whose files are processed (non-recursive).
        folder: PathBuf,
    },
    /// Decrypt each `*.enc` file, writing `<stem>.dec<ext>` alongside it.
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Folder whose files are processed (non-recursive).
        folder: PathBuf,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// Passphrase; key bytes are its SHA-256 digest truncated to the key size.
    #[arg(long, value_name = "STRING", required_unless_present = "key_hex")]
    key: Option<String>,
    /// Raw key bytes as hex (32, 48, or 64 hex characters) instead of a passphrase.
    #[arg(long, value_name = "HEX", conflicts_with = "key")]
    key_hex: Option<String>,
    /// Cipher variant used when deriving from a passphrase.
    #[arg(long, value_enum, default_value = "256")]
    key_size: KeySizeArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum KeySizeArg {
    /// AES-128.
    #[value(name = "128")]
    Bits128,
    /// AES-192.
    #[value(name = "192")]
    Bits192,
    /// AES-256.
    #[value(name = "256")]
    Bits256,
}

impl From<KeySizeArg> for KeySize {
    fn from(value: KeySizeArg) -> Self {
        match value {
            KeySizeArg::Bits128 => KeySize::Aes128,
            KeySizeArg::Bits192 => KeySize::Aes192,
            KeySizeArg::Bits256 => KeySize::Aes256,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key, folder } => cmd_encrypt(&key_bytes(&key)?, &folder),
        Commands::Decrypt { key, folder } => cmd_decrypt(&key_bytes(&key)?, &folder),
    }
}

fn key_bytes(args: &KeyArgs) -> Result<Vec<u8>> {
    if let Some(key_hex) = &args.key_hex {
        let bytes = hex::decode(key_hex.trim()).context("decode key hex")?;
        if !matches!(bytes.len(), 16 | 24 | 32) {
            bail!("raw key must be 16, 24, or 32 bytes, got {}", bytes.len());
        }
        return Ok(bytes);
    }
    let passphrase = args
        .key
        .as_deref()
        .context("either --key or --key-hex is required")?;
    Ok(derive_key(passphrase, args.key_size.into())?)
}

fn cmd_encrypt(key: &[u8], folder: &Path) -> Result<()> {
    for path in regular_files(folder)? {
        let data = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let ciphertext = filecrypt::encrypt(key, &data)
            .with_context(|| format!("encrypt {}", path.display()))?;
        let out_path = encrypted_name(&path);
        fs::write(&out_path, ciphertext)
            .with_context(|| format!("write {}", out_path.display()))?;
        println!("encrypted {} -> {}", path.display(), out_path.display());
    }
    Ok(())
}

fn cmd_decrypt(key: &[u8], folder: &Path) -> Result<()> {
    for path in regular_files(folder)? {
        if path.extension().and_then(|ext| ext.to_str()) != Some(ENCRYPTED_EXT) {
            println!("skipping non-encrypted file: {}", path.display());
            continue;
        }
        let data = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let plaintext = filecrypt::decrypt(key, &data)
            .with_context(|| format!("decrypt {}", path.display()))?;
        let out_path = decrypted_name(&path);
        fs::write(&out_path, plaintext)
            .with_context(|| format!("write {}", out_path.display()))?;
        println!("decrypted {} -> {}", path.display(), out_path.display());
    }
    Ok(())
}

/// Lists the regular files directly inside `folder`, sorted for stable output.
fn regular_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(folder).with_context(|| format!("read folder {}", folder.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read folder {}", folder.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// `report.txt` becomes `report.txt.enc`.
fn encrypted_name(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ENCRYPTED_EXT);
    PathBuf::from(name)
}

/// `report.txt.enc` becomes `report.dec.txt`; `notes.enc` becomes `notes.dec`.
fn decrypted_name(path: &Path) -> PathBuf {
    let inner = path.with_extension("");
    match inner.extension().map(|ext| ext.to_os_string()) {
        Some(ext) => {
            let mut name = inner.with_extension("").into_os_string();
            name.push(".dec.");
            name.push(ext);
            PathBuf::from(name)
        }
        None => {
            let mut name = inner.into_os_string();
            name.push(".dec");
            PathBuf::from(name)
        }
    }
}
