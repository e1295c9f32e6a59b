//! Keystream inspection (`solitaire keys`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use solitaire::KeystreamGenerator;

use crate::cli::utils::load_deck;

/// Arguments for `solitaire keys`.
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Deck file holding the key ordering.
    #[arg(long)]
    pub deck: PathBuf,
    /// Number of keys to draw.
    #[arg(long, default_value_t = 10)]
    pub count: usize,
}

/// Execute `solitaire keys`: draw keys the way one encryption pass would,
/// printing them space separated.
pub fn handle(args: KeysArgs) -> Result<()> {
    let deck = load_deck(&args.deck)?;
    let mut generator = KeystreamGenerator::new(deck);
    let mut keys = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        keys.push(generator.next_key()?.to_string());
    }
    println!("{}", keys.join(" "));
    Ok(())
}
