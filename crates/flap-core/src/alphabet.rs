//! Ordered, cyclic symbol sequences for the reels.
//!
//! An alphabet is the card deck of a physical split-flap unit: a fixed,
//! ordered set of symbols the reel flips through, wrapping from the last
//! card back to the first. Cycling order matters; symbol validity is all
//! the layout engine ever asks about.

use serde::{Deserialize, Serialize};

/// The board deck: blank, letters, then digits in descending card order.
///
/// The digit ordering (9 down to 0) matches the physical card decks the
/// upstream boards print, so a reel showing "1" reaches "0" in one flip.
const BOARD_DECK: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ9876543210";

/// Letters-only deck for boards that never show numbers.
const LETTERS_DECK: &str = " ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Which built-in card deck an alphabet is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetVariant {
    /// Blank + A-Z + 9-0 (the full departure-board deck).
    #[default]
    Board,
    /// Blank + A-Z.
    Letters,
}

/// An ordered, finite, cyclic sequence of displayable symbols.
///
/// Invariant: non-empty, symbols unique. Cycling is `(index + 1) % len`,
/// so wrapping from the last symbol to the first is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from one of the built-in decks.
    pub fn from_variant(variant: AlphabetVariant) -> Self {
        match variant {
            AlphabetVariant::Board => Self::board(),
            AlphabetVariant::Letters => Self::letters(),
        }
    }

    /// The full departure-board deck (blank, A-Z, 9-0).
    pub fn board() -> Self {
        Self {
            symbols: BOARD_DECK.chars().collect(),
        }
    }

    /// The letters-only deck (blank, A-Z).
    pub fn letters() -> Self {
        Self {
            symbols: LETTERS_DECK.chars().collect(),
        }
    }

    /// Builds an alphabet from an arbitrary symbol sequence.
    ///
    /// Returns `None` for an empty sequence; the cyclic-step invariant
    /// requires at least one symbol.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Option<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return None;
        }
        Some(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Position of `symbol` in cycling order, if present.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// The symbol one flip after `symbol` in cycling order.
    ///
    /// A symbol not in the alphabet is treated as position -1, so the
    /// step lands on the first card. This is the defined silent-wrap rule
    /// for foreign symbols, not a defensive fallback.
    pub fn next_after(&self, symbol: char) -> char {
        let index = match self.index_of(symbol) {
            Some(i) => (i + 1) % self.symbols.len(),
            None => 0,
        };
        self.symbols[index]
    }
}
