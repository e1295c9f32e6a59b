use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Number of cards in a deck: the 26 suit cards plus both jokers.
pub const DECK_SIZE: usize = 28;
/// Card value of joker A.
pub const JOKER_A: u8 = 27;
/// Card value of joker B.
pub const JOKER_B: u8 = 28;
/// Highest card value that may be emitted as a key.
pub const SUIT_CARDS: u8 = 26;

/// Ways a deck can fail to load from external input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck must contain exactly {DECK_SIZE} cards (got {0})")]
    WrongCount(usize),
    #[error("card value {0} is outside 1..={DECK_SIZE}")]
    OutOfRange(u64),
    #[error("card value {0} appears more than once")]
    Duplicate(u8),
    #[error("'{0}' is not a card value")]
    BadToken(String),
}

/// One slot in the circular arena. The value stored in a cell can change
/// (joker steps swap values between neighbors) while the cell itself stays
/// put; cut steps instead re-link `next` pointers around fixed values.
#[derive(Debug, Clone, Copy)]
struct Cell {
    value: u8,
    next: usize,
}

/// Circular deck of 28 distinct card values with a distinguished bottom card.
///
/// The deck is an arena of 28 cells linked into a single cycle by index,
/// anchored at the bottom (rear) cell; the top card is the anchor's circular
/// successor. Every mutation keeps the values a permutation of 1..=28 and the
/// cycle intact. Cloning snapshots the full state, which is how callers
/// branch a keyed deck into independent encrypt and decrypt generators.
#[derive(Debug, Clone)]
pub struct Deck {
    cells: [Cell; DECK_SIZE],
    anchor: usize,
}

impl Deck {
    /// Build a deck from an explicit ordering: first value is the top card,
    /// last value is the bottom (anchor) card.
    pub fn from_values(values: &[u8]) -> Result<Self, DeckError> {
        if values.len() != DECK_SIZE {
            return Err(DeckError::WrongCount(values.len()));
        }
        let mut seen = [false; DECK_SIZE];
        for &value in values {
            if value == 0 || value as usize > DECK_SIZE {
                return Err(DeckError::OutOfRange(value as u64));
            }
            if seen[value as usize - 1] {
                return Err(DeckError::Duplicate(value));
            }
            seen[value as usize - 1] = true;
        }
        Ok(Self::ring(values))
    }

    /// Parse the external deck format: whitespace/line-separated integers,
    /// read until exhausted (see [`Deck::from_values`] for ordering).
    pub fn from_text(input: &str) -> Result<Self, DeckError> {
        let mut values = Vec::with_capacity(DECK_SIZE);
        for token in input.split_whitespace() {
            let value: u64 = token
                .parse()
                .map_err(|_| DeckError::BadToken(token.to_string()))?;
            if value == 0 || value > DECK_SIZE as u64 {
                return Err(DeckError::OutOfRange(value));
            }
            values.push(value as u8);
        }
        Self::from_values(&values)
    }

    /// Deal a uniformly shuffled deck from the supplied RNG. Callers that
    /// need reproducible decks pass a seeded generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values: Vec<u8> = (1..=DECK_SIZE as u8).collect();
        values.shuffle(rng);
        Self::ring(&values)
    }

    /// Link validated values into a fresh ring. Cell `i` holds the `i`-th
    /// value from the top, so the last cell is the anchor.
    fn ring(values: &[u8]) -> Self {
        let mut cells = [Cell { value: 0, next: 0 }; DECK_SIZE];
        for (i, &value) in values.iter().enumerate() {
            cells[i] = Cell {
                value,
                next: (i + 1) % DECK_SIZE,
            };
        }
        Self {
            cells,
            anchor: DECK_SIZE - 1,
        }
    }

    /// Position of the top card (the anchor's circular successor).
    pub fn top_position(&self) -> usize {
        self.cells[self.anchor].next
    }

    /// Position of the bottom (anchor) card.
    pub fn bottom_position(&self) -> usize {
        self.anchor
    }

    /// Circular successor of a position.
    pub fn successor(&self, position: usize) -> usize {
        self.cells[position].next
    }

    /// Card value stored at a position.
    pub fn value_at(&self, position: usize) -> u8 {
        self.cells[position].value
    }

    /// Scan for the position holding `value`. `None` only ever means the
    /// deck has been corrupted; the keystream layer promotes it to an error.
    pub fn find(&self, value: u8) -> Option<usize> {
        let mut position = self.top_position();
        for _ in 0..DECK_SIZE {
            if self.cells[position].value == value {
                return Some(position);
            }
            position = self.cells[position].next;
        }
        None
    }

    /// Exchange the values at a position and its circular successor. The
    /// cells keep their place in the ring; only the cards move.
    pub fn swap_with_next(&mut self, position: usize) {
        let next = self.cells[position].next;
        let value = self.cells[position].value;
        self.cells[position].value = self.cells[next].value;
        self.cells[next].value = value;
    }

    /// Swap the two outer segments of the deck around the segment bounded by
    /// `first` and `second`, the joker positions in scan order from the top.
    ///
    /// When the first joker is already the top card there is no leading
    /// segment: the second joker simply becomes the new bottom. When the
    /// second joker is the bottom card there is no trailing segment: the cell
    /// before the first joker becomes the new bottom.
    pub fn splice_triple_cut(&mut self, first: usize, second: usize) {
        let top = self.top_position();
        if first == top {
            self.anchor = second;
            return;
        }
        if second == self.anchor {
            self.anchor = self.predecessor(first);
            return;
        }
        let first_prev = self.predecessor(first);
        let second_next = self.cells[second].next;
        self.cells[second].next = top;
        self.cells[first_prev].next = second_next;
        self.cells[self.anchor].next = first;
        self.anchor = first_prev;
    }

    /// Move the top `n` cards to just above the bottom card, where `n` is
    /// the bottom card's value. A joker on the bottom leaves the deck
    /// untouched; the bottom card itself never moves.
    pub fn count_cut(&mut self) {
        let n = self.cells[self.anchor].value;
        if n == JOKER_A || n == JOKER_B {
            return;
        }
        let before_anchor = self.predecessor(self.anchor);
        let mut cut_end = self.anchor;
        for _ in 0..n {
            cut_end = self.cells[cut_end].next;
        }
        let top = self.top_position();
        self.cells[self.anchor].next = self.cells[cut_end].next;
        self.cells[cut_end].next = self.anchor;
        self.cells[before_anchor].next = top;
    }

    /// Card values in order from top to bottom.
    pub fn values(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(DECK_SIZE);
        let mut position = self.top_position();
        for _ in 0..DECK_SIZE {
            out.push(self.cells[position].value);
            position = self.cells[position].next;
        }
        out
    }

    /// Walk the ring backwards by walking forwards all the way around.
    fn predecessor(&self, position: usize) -> usize {
        let mut current = position;
        while self.cells[current].next != position {
            current = self.cells[current].next;
        }
        current
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

/// Prints the deck top to bottom, space separated — the same shape
/// [`Deck::from_text`] accepts, so a shown deck can be loaded back.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
