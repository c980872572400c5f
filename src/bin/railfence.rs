//! `railfence` — Encrypts and decrypts text with the rail fence cipher.
//!
//! **Usage:**
//! ```text
//! railfence encrypt "WEAREDISCOVEREDFLEEATONCE" --rails 3 --show-fence
//! railfence decrypt                       # reads the record written by `encrypt`
//! railfence decrypt --cipher WECRLTEERDSOEEFEAOCAIVDEN --rails 3
//! railfence demo "some message"
//! ```

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use railfence::bridge::{self, CipherRecord};
use railfence::observability::init_logging;
use railfence::{RailFenceConfig, RailFenceError};

/// Rail fence transposition cipher.
#[derive(Parser)]
#[command(name = "railfence", version = railfence::VERSION, about = "Rail fence cipher tool")]
struct Args {
    /// JSON config file; built-in defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of the config.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a message and save the `{cipher, rails}` record.
    Encrypt {
        message: String,
        #[arg(short, long)]
        rails: Option<usize>,
        /// Record file to write (defaults to the config's `record_path`).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also print the message drawn on its rails.
        #[arg(long)]
        show_fence: bool,
    },
    /// Decrypt a saved record, or a cipher given on the command line.
    Decrypt {
        #[arg(long, conflicts_with = "cipher")]
        record: Option<PathBuf>,
        #[arg(long, requires = "rails")]
        cipher: Option<String>,
        #[arg(short, long)]
        rails: Option<usize>,
    },
    /// Encrypt then decrypt a message and show all three forms.
    Demo {
        message: String,
        #[arg(short, long)]
        rails: Option<usize>,
    },
}

fn load_config(args: &Args) -> Result<RailFenceConfig> {
    match &args.config {
        Some(path) => RailFenceConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(RailFenceConfig::default()),
    }
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        let input_error = err
            .downcast_ref::<RailFenceError>()
            .is_some_and(RailFenceError::is_input_error);
        process::exit(if input_error { 2 } else { 1 });
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.log_level.into()
    };
    init_logging(level, config.log_file.as_deref())?;

    match args.command {
        Command::Encrypt {
            message,
            rails,
            out,
            show_fence,
        } => {
            let rails = rails.unwrap_or(config.default_rails);
            let record = bridge::encrypt_to_record(&message, rails, config.store_length)?;
            if show_fence {
                println!("{}\n", bridge::render_fence(&message, rails)?);
            }

            let path = out.unwrap_or_else(|| config.record_path.clone());
            bridge::save_record(&record, &path)?;
            println!("{} {}", "cipher:".green().bold(), record.cipher);
            println!("{} {}", "rails: ".green().bold(), record.rails);
            println!("{} {}", "saved: ".dimmed(), path.display());
        }
        Command::Decrypt {
            record,
            cipher,
            rails,
        } => {
            let record = match cipher {
                Some(cipher) => match rails {
                    Some(rails) => CipherRecord::new(cipher, rails),
                    None => bail!("--cipher requires --rails"),
                },
                None => {
                    let path = record.unwrap_or_else(|| config.record_path.clone());
                    bridge::load_record(&path)
                        .with_context(|| format!("failed to read record {}", path.display()))?
                }
            };
            let plaintext = bridge::decrypt_record(&record)?;
            println!("{} {}", "plaintext:".green().bold(), plaintext);
        }
        Command::Demo { message, rails } => {
            let rails = rails.unwrap_or(config.default_rails);
            let report = bridge::round_trip(&message, rails)?;
            println!("{}\n{}\n", "plaintext".cyan().bold(), report.plaintext);
            println!("{}\n{}\n", "cipher".cyan().bold(), report.cipher);
            println!("{}\n{}\n", "decrypted".cyan().bold(), report.decrypted);
            if report.is_lossless() {
                println!("{}", "round trip OK".green());
            } else {
                bail!("round trip on {} rails did not restore the message", rails);
            }
        }
    }
    Ok(())
}
