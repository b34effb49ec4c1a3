//! The symbol alphabet for puzzle strings.
//!
//! A puzzle string mixes two kinds of symbols: plain letters, which drive
//! the automaton from state to state, and checkpoint markers, which assert
//! that the automaton is currently accepting (`+`) or rejecting (`-`)
//! without moving it. Every symbol is exactly one of the two kinds, and
//! `polarity` is the exhaustive partition the rest of the crate matches on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single symbol of the puzzle alphabet.
///
/// `LetterA` and `LetterB` are the plain transition letters; `CheckAccept`
/// and `CheckReject` are checkpoint markers with a fixed polarity. Equality
/// is structural: two `LetterA` values are always equal.
///
/// # Example
///
/// ```rust
/// use automan::Symbol;
///
/// assert_eq!(Symbol::LetterA.polarity(), None);
/// assert_eq!(Symbol::CheckAccept.polarity(), Some(true));
/// assert_eq!(Symbol::CheckReject.polarity(), Some(false));
/// assert_eq!(Symbol::LetterB.to_string(), "B");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    /// The plain letter `A`.
    LetterA,
    /// The plain letter `B`.
    LetterB,
    /// Checkpoint asserting the automaton is currently accepting.
    CheckAccept,
    /// Checkpoint asserting the automaton is currently rejecting.
    CheckReject,
}

impl Symbol {
    /// The plain-letter alphabet, in display order.
    ///
    /// The generators take the alphabet as a slice so they stay agnostic
    /// of its size; this constant is the alphabet this game ships with.
    pub const LETTERS: [Symbol; 2] = [Symbol::LetterA, Symbol::LetterB];

    /// The checkpoint polarity of this symbol.
    ///
    /// Returns `None` for plain letters and `Some(expected)` for
    /// checkpoint markers. This is the partition that decides whether a
    /// symbol causes a transition when consumed.
    pub fn polarity(self) -> Option<bool> {
        match self {
            Symbol::LetterA | Symbol::LetterB => None,
            Symbol::CheckAccept => Some(true),
            Symbol::CheckReject => Some(false),
        }
    }

    /// Whether this symbol is a plain transition letter.
    pub fn is_letter(self) -> bool {
        self.polarity().is_none()
    }

    /// The checkpoint marker for the given acceptance value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use automan::Symbol;
    ///
    /// assert_eq!(Symbol::checkpoint(true), Symbol::CheckAccept);
    /// assert_eq!(Symbol::checkpoint(false), Symbol::CheckReject);
    /// ```
    pub fn checkpoint(accepting: bool) -> Self {
        if accepting {
            Symbol::CheckAccept
        } else {
            Symbol::CheckReject
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Symbol::LetterA => "A",
            Symbol::LetterB => "B",
            Symbol::CheckAccept => "+",
            Symbol::CheckReject => "-",
        };
        f.write_str(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_partitions_letters_and_checkpoints() {
        assert_eq!(Symbol::LetterA.polarity(), None);
        assert_eq!(Symbol::LetterB.polarity(), None);
        assert_eq!(Symbol::CheckAccept.polarity(), Some(true));
        assert_eq!(Symbol::CheckReject.polarity(), Some(false));
    }

    #[test]
    fn is_letter_matches_polarity() {
        assert!(Symbol::LetterA.is_letter());
        assert!(Symbol::LetterB.is_letter());
        assert!(!Symbol::CheckAccept.is_letter());
        assert!(!Symbol::CheckReject.is_letter());
    }

    #[test]
    fn checkpoint_constructor_picks_polarity() {
        assert_eq!(Symbol::checkpoint(true).polarity(), Some(true));
        assert_eq!(Symbol::checkpoint(false).polarity(), Some(false));
    }

    #[test]
    fn display_uses_game_glyphs() {
        assert_eq!(Symbol::LetterA.to_string(), "A");
        assert_eq!(Symbol::LetterB.to_string(), "B");
        assert_eq!(Symbol::CheckAccept.to_string(), "+");
        assert_eq!(Symbol::CheckReject.to_string(), "-");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Symbol::LetterA, Symbol::LetterA);
        assert_ne!(Symbol::LetterA, Symbol::LetterB);
        assert_ne!(Symbol::CheckAccept, Symbol::CheckReject);
    }

    #[test]
    fn letters_constant_contains_only_letters() {
        assert!(Symbol::LETTERS.iter().all(|s| s.is_letter()));
        assert_eq!(Symbol::LETTERS.len(), 2);
    }

    #[test]
    fn symbol_serializes_correctly() {
        let json = serde_json::to_string(&Symbol::CheckAccept).unwrap();
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbol::CheckAccept);
    }
}
