//! Core library for the Solitaire (Pontifex) keystream cipher.
//!
//! Solitaire generates a stream of key values by repeatedly shuffling a
//! 28-card deck (26 suit cards plus two jokers) through four deterministic
//! steps, then shifts message letters by those keys. The deck ordering is the
//! secret: two parties holding identically ordered decks produce identical
//! keystreams. This is Schneier's teaching cipher, not a secure one.

mod cipher;
mod deck;
mod keystream;

pub use cipher::{decrypt, encrypt};
pub use deck::{DECK_SIZE, Deck, DeckError, JOKER_A, JOKER_B, SUIT_CARDS};
pub use keystream::{KeystreamError, KeystreamGenerator};

/// Encrypts a message with a fresh generator cloned from `deck`.
///
/// Cloning keeps the caller's deck pristine, so the same deck value can be
/// handed to [`decrypt_message`] afterwards; a generator mutated by one
/// direction must never be reused for the other.
pub fn encrypt_message(deck: &Deck, message: &str) -> Result<String, KeystreamError> {
    let mut generator = KeystreamGenerator::new(deck.clone());
    cipher::encrypt(&mut generator, message)
}

/// Decrypts a message with a fresh generator cloned from `deck`.
pub fn decrypt_message(deck: &Deck, message: &str) -> Result<String, KeystreamError> {
    let mut generator = KeystreamGenerator::new(deck.clone());
    cipher::decrypt(&mut generator, message)
}
