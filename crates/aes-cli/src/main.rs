//! Command-line interface for chained AES-128 encryption of text blocks.

#![forbid(unsafe_code)]

mod codec;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use aes_chain::{random_iv, Block, DEFAULT_IV};
use aes_core::Aes128Key;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Chained AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "AES-128 with previous-ciphertext block chaining"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a text file, one line per 16-byte block.
    Enc(CipherArgs),
    /// Decrypt a hex ciphertext file back to text.
    Dec(CipherArgs),
    /// Run a local demo: random key, IV and blocks, encrypt then decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of blocks to encrypt.
        #[arg(long, default_value_t = 3)]
        blocks: usize,
    },
}

#[derive(Args)]
struct CipherArgs {
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
    #[command(flatten)]
    key: KeyArgs,
    /// IV as 32 hex characters (defaults to the fixed compatibility IV).
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
    /// Repeat the operation and report the average duration.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// File whose first line is the 16-character key.
    #[arg(long, value_name = "FILE")]
    key_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Enc(args) => cmd_enc(&args),
        Commands::Dec(args) => cmd_dec(&args),
        Commands::Demo { seed, blocks } => cmd_demo(seed, blocks),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_enc(args: &CipherArgs) -> Result<()> {
    let key = load_key(&args.key)?;
    let iv = resolve_iv(args.iv_hex.as_deref())?;
    let text = read_text(&args.input)?;
    let blocks = codec::text_to_blocks(&text)?;

    let (ciphertext, average) = timed(args.iterations, || {
        aes_chain::encrypt(key.as_bytes(), &iv, &blocks)
    })?;

    fs::write(&args.output, codec::blocks_to_hex(&ciphertext))
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        blocks = ciphertext.len(),
        iterations = args.iterations,
        average_us = average.as_micros() as u64,
        "encryption completed"
    );
    println!("key hex: {}", hex::encode_upper(key.as_bytes()));
    println!("blocks: {}", ciphertext.len());
    println!("average time: {average:?}");
    Ok(())
}

fn cmd_dec(args: &CipherArgs) -> Result<()> {
    let key = load_key(&args.key)?;
    let iv = resolve_iv(args.iv_hex.as_deref())?;
    let text = read_text(&args.input)?;
    let chunks = codec::hex_to_chunks(&text)?;

    let (plaintext, average) = timed(args.iterations, || {
        aes_chain::decrypt(key.as_bytes(), &iv, &chunks)
    })
    .with_context(|| format!("decrypt {}", args.input.display()))?;

    fs::write(&args.output, codec::blocks_to_text(&plaintext))
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        blocks = plaintext.len(),
        iterations = args.iterations,
        average_us = average.as_micros() as u64,
        "decryption completed"
    );
    println!("key hex: {}", hex::encode_upper(key.as_bytes()));
    println!("blocks: {}", plaintext.len());
    println!("average time: {average:?}");
    Ok(())
}

fn cmd_demo(seed: Option<u64>, count: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let iv = random_iv(&mut rng);

    let blocks: Vec<Block> = (0..count)
        .map(|_| {
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut block);
            block
        })
        .collect();

    let ciphertext = aes_chain::encrypt(&key, &iv, &blocks)?;
    let decrypted = aes_chain::decrypt(&key, &iv, &ciphertext)?;

    println!("demo key: {}", hex::encode(key));
    println!("iv: {}", hex::encode(iv));
    for (i, ((pt, ct), back)) in blocks.iter().zip(&ciphertext).zip(&decrypted).enumerate() {
        println!("block {i}:");
        println!("  plaintext: {}", hex::encode(pt));
        println!("  ciphertext: {}", hex::encode(ct));
        println!("  decrypted: {}", hex::encode(back));
    }
    if decrypted != blocks {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn timed<T>(
    iterations: u32,
    mut op: impl FnMut() -> aes_core::Result<T>,
) -> Result<(T, Duration)> {
    let start = Instant::now();
    let mut output = op()?;
    for _ in 1..iterations {
        output = op()?;
    }
    Ok((output, start.elapsed() / iterations))
}

fn load_key(args: &KeyArgs) -> Result<Aes128Key> {
    if let Some(hex_str) = &args.key_hex {
        return Ok(Aes128Key::from(codec::parse_block_hex(hex_str, "key")?));
    }
    let Some(path) = &args.key_file else {
        bail!("either --key-hex or --key-file is required");
    };
    let text = read_text(path)?;
    let line = text.lines().next().unwrap_or_default();
    Aes128Key::from_slice(line.as_bytes())
        .with_context(|| format!("key in {} must be 16 bytes", path.display()))
}

fn resolve_iv(iv_hex: Option<&str>) -> Result<Block> {
    match iv_hex {
        Some(hex_str) => codec::parse_block_hex(hex_str, "iv"),
        None => {
            debug!("no IV supplied, using the fixed default");
            Ok(DEFAULT_IV)
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
