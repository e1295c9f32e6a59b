//! Message encryption and decryption (`solitaire encrypt|decrypt`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use solitaire::{decrypt_message, encrypt_message};

use crate::cli::utils::{load_deck, read_text_arg};

/// Arguments for `solitaire encrypt`.
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Deck file holding the key ordering.
    #[arg(long)]
    pub deck: PathBuf,
    /// Input text (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
}

/// Arguments for `solitaire decrypt`.
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Deck file holding the key ordering.
    #[arg(long)]
    pub deck: PathBuf,
    /// Input text (falls back to stdin if omitted).
    #[arg(long)]
    pub text: Option<String>,
    /// Read input from file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
}

/// Execute `solitaire encrypt`.
pub fn encrypt(args: EncryptArgs) -> Result<()> {
    let deck = load_deck(&args.deck)?;
    let text = read_text_arg(args.text, args.from)?;
    println!("{}", encrypt_message(&deck, &text)?);
    Ok(())
}

/// Execute `solitaire decrypt`.
pub fn decrypt(args: DecryptArgs) -> Result<()> {
    let deck = load_deck(&args.deck)?;
    let text = read_text_arg(args.text, args.from)?;
    println!("{}", decrypt_message(&deck, &text)?);
    Ok(())
}
