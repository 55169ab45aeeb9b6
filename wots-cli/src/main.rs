//! WOTS CLI - Winternitz one-time signature command-line tool.

use anyhow::{anyhow, bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use rand::{rng, Rng};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use wots::{keygen, Params, PublicKey, SecretKey, Signature};
use zeroize::{Zeroize, Zeroizing};

/// Winternitz one-time signature CLI tool
#[derive(Parser)]
#[command(name = "wots")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new one-time key pair
    Keygen {
        /// Parameter set to use
        #[arg(short, long, value_enum, default_value = "sha256-w16")]
        params: ParamSet,

        /// Output file prefix (creates `<prefix>.pub` and `<prefix>.sec`)
        #[arg(short, long)]
        output: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "hex")]
        format: OutputFormat,

        /// Derive the key pair from this master key file instead of fresh randomness
        #[arg(long)]
        master_key: Option<PathBuf>,
    },

    /// Sign a file. The secret key file is destroyed afterwards.
    Sign {
        /// Path to the secret key file
        #[arg(long = "key")]
        key: PathBuf,

        /// Input file to sign
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for signature
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "hex")]
        format: OutputFormat,

        /// Parameter set (detected from the key size if not specified)
        #[arg(short, long, value_enum)]
        params: Option<ParamSet>,

        /// Leave the secret key file in place after signing
        #[arg(long)]
        keep_key: bool,
    },

    /// Verify a signature
    Verify {
        /// Path to the public key file
        #[arg(long = "pub")]
        pubkey: PathBuf,

        /// Input file that was signed
        #[arg(short, long)]
        input: PathBuf,

        /// Signature file
        #[arg(short, long)]
        signature: PathBuf,

        /// Parameter set (detected from the key size if not specified)
        #[arg(short, long, value_enum)]
        params: Option<ParamSet>,
    },

    /// Display information about supported parameter sets
    Info,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ParamSet {
    /// SHA-256, w = 4 (135 chains)
    #[value(name = "sha256-w4")]
    Sha256W4,
    /// SHA-256, w = 16 (71 chains)
    #[value(name = "sha256-w16")]
    Sha256W16,
    /// SHA-512, w = 4 (264 chains)
    #[value(name = "sha512-w4")]
    Sha512W4,
    /// SHA-512, w = 16 (136 chains)
    #[value(name = "sha512-w16")]
    Sha512W16,
}

impl ParamSet {
    fn n_w(self) -> (usize, u32) {
        match self {
            ParamSet::Sha256W4 => (32, 4),
            ParamSet::Sha256W16 => (32, 16),
            ParamSet::Sha512W4 => (64, 4),
            ParamSet::Sha512W16 => (64, 16),
        }
    }

    fn params(self) -> Result<Params> {
        let (n, w) = self.n_w();
        Params::new(n, w).map_err(|e| anyhow!("Invalid parameter set {}: {}", self, e))
    }
}

impl std::fmt::Display for ParamSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamSet::Sha256W4 => write!(f, "WOTS-SHA256-W4"),
            ParamSet::Sha256W16 => write!(f, "WOTS-SHA256-W16"),
            ParamSet::Sha512W4 => write!(f, "WOTS-SHA512-W4"),
            ParamSet::Sha512W16 => write!(f, "WOTS-SHA512-W16"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Hexadecimal encoding
    Hex,
    /// Base64 encoding
    Base64,
    /// PEM format
    Pem,
}

/// Encode bytes to the specified format
fn encode_output(data: &[u8], format: OutputFormat, label: &str) -> String {
    match format {
        OutputFormat::Hex => hex::encode(data),
        OutputFormat::Base64 => BASE64.encode(data),
        OutputFormat::Pem => {
            let b64 = BASE64.encode(data);
            // Base64 output is ASCII, so 64-byte chunks are valid 64-char lines
            let wrapped = b64
                .as_bytes()
                .chunks(64)
                .map(String::from_utf8_lossy)
                .collect::<Vec<_>>()
                .join("\n");
            format!("-----BEGIN {label}-----\n{wrapped}\n-----END {label}-----")
        }
    }
}

/// Check if a string is valid hexadecimal
fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Decode bytes with auto-detection of format.
/// Detection order: PEM (by header) -> Hex (if all hex chars) -> Base64.
fn decode_input(data: &str) -> Result<Vec<u8>> {
    let data = data.trim();

    if data.starts_with("-----BEGIN") {
        let lines: Vec<&str> = data.lines().collect();
        if lines.len() < 3 {
            bail!("Invalid PEM format");
        }
        let b64: String = lines[1..lines.len() - 1].concat();
        return BASE64
            .decode(&b64)
            .context("Failed to decode PEM base64 content");
    }

    // Hex: only 0-9, a-f, A-F with even length. Base64 may contain +, /, =
    if is_hex(data) && data.len() % 2 == 0 {
        return hex::decode(data).context("Failed to decode hex");
    }

    BASE64.decode(data).context("Failed to decode base64")
}

/// Detect the parameter set from a key or signature size.
///
/// Every preset has a distinct `n * len`, so the size is unambiguous.
fn detect_param_set(size: usize) -> Result<ParamSet> {
    for set in ParamSet::value_variants() {
        if set.params()?.key_bytes() == size {
            return Ok(*set);
        }
    }
    bail!(
        "Unknown key size: {} bytes. Expected one of 4320, 2272, 16896 or 8704.",
        size
    )
}

/// Use the explicit parameter set if given, validating the size; detect otherwise.
fn resolve_param_set(explicit: Option<ParamSet>, size: usize) -> Result<ParamSet> {
    let Some(set) = explicit else {
        return detect_param_set(size);
    };

    let expected = set.params()?.key_bytes();
    if size != expected {
        bail!(
            "Key size {} bytes does not match parameter set {} (expected {} bytes)",
            size,
            set,
            expected
        );
    }
    Ok(set)
}

/// Overwrite a file with zeros, then remove it.
///
/// Best effort: the filesystem may keep older copies of the data.
fn destroy_file(path: &Path) -> Result<()> {
    let len = fs::metadata(path)
        .context("Failed to stat secret key file")?
        .len();
    let len = usize::try_from(len).context("Secret key file too large")?;
    fs::write(path, vec![0u8; len]).context("Failed to overwrite secret key file")?;
    fs::remove_file(path).context("Failed to remove secret key file")?;
    Ok(())
}

/// Generate a key pair for the specified parameter set
fn cmd_keygen(
    set: ParamSet,
    output: &str,
    format: OutputFormat,
    master_key_path: Option<&PathBuf>,
    verbose: bool,
) -> Result<()> {
    let params = set.params()?;

    if verbose {
        eprintln!("Generating {} key pair...", set);
    }

    let master_key = if let Some(path) = master_key_path {
        let mut data = fs::read_to_string(path).context("Failed to read master key file")?;
        let bytes = Zeroizing::new(decode_input(&data)?);
        data.zeroize();
        if verbose {
            eprintln!("Master key read from: {}", path.display());
        }
        bytes
    } else {
        let mut bytes = Zeroizing::new(vec![0u8; params.n()]);
        rng().fill(bytes.as_mut_slice());
        bytes
    };

    let (sk, pk) =
        keygen(&params, &master_key).map_err(|e| anyhow!("Key generation failed: {}", e))?;

    let pk_encoded = encode_output(pk.as_bytes(), format, "WOTS PUBLIC KEY");
    let sk_encoded = Zeroizing::new(encode_output(sk.as_bytes(), format, "WOTS SECRET KEY"));

    let pub_path = format!("{output}.pub");
    let sec_path = format!("{output}.sec");

    fs::write(&pub_path, &pk_encoded).context("Failed to write public key")?;
    fs::write(&sec_path, sk_encoded.as_bytes()).context("Failed to write secret key")?;

    if verbose {
        eprintln!("Chains: {} ({} + {})", params.len(), params.len1(), params.len2());
        eprintln!("Public key size: {} bytes", pk.as_bytes().len());
        eprintln!("Secret key size: {} bytes", sk.as_bytes().len());
    }

    println!("Public key written to: {pub_path}");
    println!("Secret key written to: {sec_path}");

    Ok(())
}

/// Sign a file, consuming the secret key
fn cmd_sign(
    key: &Path,
    input: &Path,
    output: &Path,
    format: OutputFormat,
    explicit_set: Option<ParamSet>,
    keep_key: bool,
    verbose: bool,
) -> Result<()> {
    let mut sk_data = fs::read_to_string(key).context("Failed to read secret key file")?;
    let sk_bytes = Zeroizing::new(decode_input(&sk_data)?);
    // Zeroize the raw string data immediately after decoding
    sk_data.zeroize();

    let set = resolve_param_set(explicit_set, sk_bytes.len())?;
    let params = set.params()?;

    if verbose {
        eprintln!("Parameter set: {}", set);
        eprintln!("Secret key size: {} bytes", sk_bytes.len());
    }

    let message = fs::read(input).context("Failed to read input file")?;
    if verbose {
        eprintln!("Message size: {} bytes", message.len());
    }

    let sk = SecretKey::from_bytes(params, &sk_bytes)
        .map_err(|e| anyhow!("Invalid secret key: {}", e))?;
    drop(sk_bytes);
    let sig = sk.sign(&message);

    let sig_encoded = encode_output(sig.as_bytes(), format, "WOTS SIGNATURE");
    fs::write(output, &sig_encoded).context("Failed to write signature")?;

    if verbose {
        eprintln!("Signature size: {} bytes", sig.as_bytes().len());
    }
    println!("Signature written to: {}", output.display());

    if keep_key {
        eprintln!(
            "Warning: {} was kept. Signing a second message with it breaks security.",
            key.display()
        );
    } else {
        destroy_file(key)?;
        if verbose {
            eprintln!("Secret key destroyed: {}", key.display());
        }
    }

    Ok(())
}

/// Verify a signature
fn cmd_verify(
    pubkey: &Path,
    input: &Path,
    signature: &Path,
    explicit_set: Option<ParamSet>,
    verbose: bool,
) -> Result<()> {
    let pk_data = fs::read_to_string(pubkey).context("Failed to read public key file")?;
    let pk_bytes = decode_input(&pk_data)?;

    let set = resolve_param_set(explicit_set, pk_bytes.len())?;
    let params = set.params()?;

    if verbose {
        eprintln!("Parameter set: {}", set);
        eprintln!("Public key size: {} bytes", pk_bytes.len());
    }

    let message = fs::read(input).context("Failed to read input file")?;
    let sig_data = fs::read_to_string(signature).context("Failed to read signature file")?;
    let sig_bytes = decode_input(&sig_data)?;

    if verbose {
        eprintln!("Message size: {} bytes", message.len());
        eprintln!("Signature size: {} bytes", sig_bytes.len());
    }

    let pk = PublicKey::from_bytes(params, &pk_bytes)
        .map_err(|e| anyhow!("Invalid public key: {}", e))?;
    let sig = Signature::from_bytes(params, &sig_bytes)
        .map_err(|e| anyhow!("Invalid signature: {}", e))?;

    if pk.verify(&message, &sig) {
        println!("Signature is valid.");
        Ok(())
    } else {
        bail!("Signature is INVALID")
    }
}

/// Display information about supported parameter sets
fn cmd_info() -> Result<()> {
    println!("WOTS - Winternitz One-Time Signatures");
    println!();
    println!("Each secret key signs exactly one message.");
    println!();
    println!("Parameter sets:");
    println!();
    for set in ParamSet::value_variants() {
        let params = set.params()?;
        println!(
            "    {:<11} n: {}  w: {:<2}  chains: {:<3}  PK/SK/SIG: {}B",
            params.to_string(),
            params.n(),
            params.w(),
            params.len(),
            params.key_bytes()
        );
    }
    println!();
    println!("Output formats:");
    println!("    hex    - Hexadecimal encoding (default)");
    println!("    base64 - Base64 encoding");
    println!("    pem    - PEM format with headers");
    Ok(())
}

/// Generate shell completions
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "wots", &mut io::stdout());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen {
            params,
            output,
            format,
            master_key,
        } => cmd_keygen(params, &output, format, master_key.as_ref(), cli.verbose),

        Commands::Sign {
            key,
            input,
            output,
            format,
            params,
            keep_key,
        } => cmd_sign(&key, &input, &output, format, params, keep_key, cli.verbose),

        Commands::Verify {
            pubkey,
            input,
            signature,
            params,
        } => cmd_verify(&pubkey, &input, &signature, params, cli.verbose),

        Commands::Info => cmd_info(),

        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}
