//! Command-line interface wiring for the `solitaire` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod crypt;
pub mod deck;
pub mod keys;
pub mod utils;

/// Parsed CLI entrypoint for the `solitaire` binary.
#[derive(Parser, Debug)]
#[command(
    name = "solitaire",
    version,
    about = "Solitaire (Pontifex) card cipher toolkit"
)]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(subcommand)]
    Deck(deck::DeckCommand),
    /// Encrypt a message with a deck file.
    Encrypt(crypt::EncryptArgs),
    /// Decrypt a message with a deck file.
    Decrypt(crypt::DecryptArgs),
    /// Print keystream values from a deck file.
    Keys(keys::KeysArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deck(cmd) => deck::handle(cmd),
        Command::Encrypt(args) => crypt::encrypt(args),
        Command::Decrypt(args) => crypt::decrypt(args),
        Command::Keys(args) => keys::handle(args),
    }
}
