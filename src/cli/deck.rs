//! Deck management (`solitaire deck ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use solitaire::Deck;

use crate::cli::utils::{load_deck, write_output};

/// Deck subcommands.
#[derive(Subcommand, Debug)]
pub enum DeckCommand {
    /// Deal a freshly shuffled deck.
    New(NewArgs),
    /// Validate a deck file and print its ordering.
    Show(ShowArgs),
}

/// Arguments for `solitaire deck new`.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Seed for a reproducible shuffle (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output file (`-` for stdout).
    #[arg(long, default_value = "-")]
    pub out: PathBuf,
}

/// Arguments for `solitaire deck show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Deck file to inspect.
    pub deck: PathBuf,
}

/// Execute a deck command.
pub fn handle(command: DeckCommand) -> Result<()> {
    match command {
        DeckCommand::New(args) => new(args),
        DeckCommand::Show(args) => show(args),
    }
}

fn new(args: NewArgs) -> Result<()> {
    let deck = match args.seed {
        Some(seed) => Deck::shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::shuffled(&mut rand::rng()),
    };
    write_output(&args.out, &format!("{}\n", deck))
}

fn show(args: ShowArgs) -> Result<()> {
    let deck = load_deck(&args.deck)?;
    println!("{}", deck);
    Ok(())
}
