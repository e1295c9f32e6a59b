use thiserror::Error;

use crate::deck::{DECK_SIZE, Deck, JOKER_A, JOKER_B, SUIT_CARDS};

/// Rounds of the four-step shuffle allowed per key before giving up. A
/// well-formed deck redraws at most a handful of times; hitting this cap
/// means the deck state is corrupted.
const MAX_ROUNDS: usize = 1024;

/// Failures that indicate a corrupted deck, not bad input. These never occur
/// for a deck built through [`Deck::from_values`] or [`Deck::shuffled`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeystreamError {
    #[error("card {0} is missing from the deck; deck state is corrupted")]
    MissingCard(u8),
    #[error("no key found after {0} shuffle rounds; deck state is corrupted")]
    RetryLimit(usize),
}

/// Produces the Solitaire keystream by mutating an owned deck in place.
///
/// Each [`next_key`](Self::next_key) call advances the deck through the four
/// transformation steps (joker A, joker B, triple cut, count cut) and reads
/// off one key card. The deck is never reset: a generator accumulates state
/// for the lifetime of one message in one direction. To decrypt what it
/// encrypted, build a second generator from a clone of the starting deck.
#[derive(Debug, Clone)]
pub struct KeystreamGenerator {
    deck: Deck,
}

impl KeystreamGenerator {
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }

    /// Read access to the current deck state, mainly for inspection tools.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Draw the next key, a card value in 1..=26.
    ///
    /// Runs the four steps, then counts down from the top card's value to the
    /// candidate card. A joker candidate is discarded and the whole sequence
    /// repeats on the already-mutated deck until a suit card turns up.
    pub fn next_key(&mut self) -> Result<u8, KeystreamError> {
        for _ in 0..MAX_ROUNDS {
            self.joker_a()?;
            self.joker_b()?;
            self.triple_cut()?;
            self.deck.count_cut();

            let mut count = self.deck.value_at(self.deck.top_position());
            if count == JOKER_B {
                count = JOKER_A;
            }
            let mut position = self.deck.top_position();
            for _ in 0..count {
                position = self.deck.successor(position);
            }
            let key = self.deck.value_at(position);
            if key <= SUIT_CARDS {
                return Ok(key);
            }
        }
        Err(KeystreamError::RetryLimit(MAX_ROUNDS))
    }

    /// Step 1: joker A moves forward one position.
    fn joker_a(&mut self) -> Result<(), KeystreamError> {
        let position = self.locate(JOKER_A)?;
        self.deck.swap_with_next(position);
        Ok(())
    }

    /// Step 2: joker B moves forward two positions, one adjacent swap at a
    /// time, re-locating the joker between swaps so it wraps past the anchor.
    fn joker_b(&mut self) -> Result<(), KeystreamError> {
        for _ in 0..2 {
            let position = self.locate(JOKER_B)?;
            self.deck.swap_with_next(position);
        }
        Ok(())
    }

    /// Step 3: one forward scan from the top finds both jokers in encounter
    /// order, then the outer segments swap around them.
    fn triple_cut(&mut self) -> Result<(), KeystreamError> {
        let mut first = None;
        let mut second = None;
        let mut position = self.deck.top_position();
        for _ in 0..DECK_SIZE {
            let value = self.deck.value_at(position);
            if value == JOKER_A || value == JOKER_B {
                if first.is_none() {
                    first = Some(position);
                } else {
                    second = Some(position);
                    break;
                }
            }
            position = self.deck.successor(position);
        }
        match (first, second) {
            (Some(first), Some(second)) => {
                self.deck.splice_triple_cut(first, second);
                Ok(())
            }
            (Some(_), None) => Err(KeystreamError::MissingCard(JOKER_B)),
            _ => Err(KeystreamError::MissingCard(JOKER_A)),
        }
    }

    fn locate(&self, value: u8) -> Result<usize, KeystreamError> {
        self.deck
            .find(value)
            .ok_or(KeystreamError::MissingCard(value))
    }
}
