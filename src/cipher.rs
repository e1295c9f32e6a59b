//! Letter-stream encryption over a keystream generator.
//!
//! Both directions walk the message once, draw one key per ASCII uppercase
//! letter, and shift it through the 26-letter alphabet. Every other character
//! (lowercase, digits, punctuation, whitespace) is dropped outright and does
//! not consume a key, so ciphertext and recovered plaintext contain uppercase
//! letters only.

use crate::deck::SUIT_CARDS;
use crate::keystream::{KeystreamError, KeystreamGenerator};

/// Encrypt a message, advancing `generator` one key per retained letter.
///
/// Letters are combined 1-based (A = 1): `(index + key)`, wrapping back by 26
/// when the sum exceeds 26.
pub fn encrypt(
    generator: &mut KeystreamGenerator,
    message: &str,
) -> Result<String, KeystreamError> {
    let mut out = String::with_capacity(message.len());
    for ch in message.chars() {
        if !ch.is_ascii_uppercase() {
            continue;
        }
        let key = generator.next_key()?;
        let mut index = (ch as u8 - b'A' + 1) + key;
        if index > SUIT_CARDS {
            index -= SUIT_CARDS;
        }
        out.push((b'A' + index - 1) as char);
    }
    Ok(out)
}

/// Decrypt a message encrypted by [`encrypt`] with an identically seeded
/// generator. The shift runs backwards, borrowing 26 when the 1-based index
/// would drop to zero or below.
pub fn decrypt(
    generator: &mut KeystreamGenerator,
    message: &str,
) -> Result<String, KeystreamError> {
    let mut out = String::with_capacity(message.len());
    for ch in message.chars() {
        if !ch.is_ascii_uppercase() {
            continue;
        }
        let key = generator.next_key()?;
        let mut index = ch as u8 - b'A' + 1;
        if index <= key {
            index += SUIT_CARDS;
        }
        index -= key;
        out.push((b'A' + index - 1) as char);
    }
    Ok(out)
}
