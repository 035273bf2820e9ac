//! allowlist-merkle CLI - Merkle roots and proofs for address allowlists
//!
//! Generates the JSON record (root, allowlist, per-address proofs) used when
//! deploying allowlist-gated contracts, and checks addresses against it.

use allowlist_merkle::logging::{self, LogLevel};
use allowlist_merkle::source::load_allowlist;
use allowlist_merkle::{sink, Address, Allowlist, Commitment, Config, HashAlgorithm};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "allowlist-merkle")]
#[command(about = "Merkle roots and membership proofs for address allowlists")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Where the allowlist comes from
#[derive(Args)]
struct SourceArgs {
    /// Address to include (repeat in commitment order)
    #[arg(short, long = "address", value_name = "ADDRESS", conflicts_with = "input")]
    addresses: Vec<String>,

    /// File with one address per line, or a JSON array
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON config file (whitelist, output, hash)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and write the commitment record
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Output file [default: merkle-output.json]
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Hash function [default: keccak256]
        #[arg(long = "hash", value_enum)]
        hash: Option<HashAlgorithm>,
        /// Print the record to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Print the proof for a single address
    Proof {
        /// The address to prove
        address: String,
        #[command(flatten)]
        source: SourceArgs,
        /// Hash function [default: keccak256]
        #[arg(long = "hash", value_enum)]
        hash: Option<HashAlgorithm>,
    },

    /// Check an address against a saved record
    Verify {
        /// The address to check
        address: String,
        /// Record written by `generate`
        #[arg(short, long, default_value = "merkle-output.json")]
        record: PathBuf,
        /// Hash function the record was built with
        #[arg(long = "hash", value_enum, default_value = "keccak256")]
        hash: HashAlgorithm,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::try_init(LogLevel::from_verbosity(cli.verbose)).map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Generate {
            source,
            output: output_path,
            hash,
            stdout,
        } => {
            let run = resolve(&source, output_path, hash)?;
            let commitment = Commitment::build_with(run.allowlist, run.hash.hasher())?;
            let record = commitment.to_record()?;

            if stdout {
                print!("{}", sink::to_pretty_json(&record)?);
                return Ok(());
            }

            sink::write_record_atomic(&run.output, &record)
                .with_context(|| format!("Failed to write {}", run.output.display()))?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "merkleRoot": record.merkle_root.to_hex(),
                    "count": record.whitelist.len(),
                    "hash": run.hash.to_string(),
                    "output": run.output.display().to_string()
                }),
            )?;
        }

        Commands::Proof {
            address,
            source,
            hash,
        } => {
            let run = resolve(&source, None, hash)?;
            let commitment = Commitment::build_with(run.allowlist, run.hash.hasher())?;
            let parsed = Address::parse(&address)?;
            let proof = commitment.proof(&parsed)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "address": address,
                    "leaf": commitment.leaf(&parsed).to_hex(),
                    "merkleRoot": commitment.root().to_hex(),
                    "proof": proof.to_hex()
                }),
            )?;
        }

        Commands::Verify {
            address,
            record,
            hash,
        } => {
            let saved = sink::read_record(&record)
                .with_context(|| format!("Failed to read {}", record.display()))?;
            let valid = saved.verify_address(hash.hasher().as_ref(), &address)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "address": address,
                    "merkleRoot": saved.merkle_root.to_hex(),
                    "valid": valid
                }),
            )?;
            if !valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Allowlist and options for one run, after merging flags and config
struct Run {
    allowlist: Allowlist,
    output: PathBuf,
    hash: HashAlgorithm,
}

/// Flags win over the config file; the user config is only consulted when
/// nothing else names an address source.
fn resolve(
    source: &SourceArgs,
    output: Option<PathBuf>,
    hash: Option<HashAlgorithm>,
) -> anyhow::Result<Run> {
    let has_flags = !source.addresses.is_empty() || source.input.is_some();
    let config = match &source.config {
        Some(path) => Some(Config::load(path)?),
        None if !has_flags => Config::load_user()?,
        None => None,
    }
    .unwrap_or_default();

    let allowlist = if !source.addresses.is_empty() {
        Allowlist::parse(&source.addresses)?
    } else if let Some(input) = &source.input {
        load_allowlist(input).with_context(|| format!("Failed to load {}", input.display()))?
    } else {
        config.allowlist()?
    };

    Ok(Run {
        allowlist,
        output: output.unwrap_or_else(|| config.output_path()),
        hash: hash.unwrap_or(config.hash),
    })
}

fn output(format: &OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
