//! Moves and move sets

use core::fmt;
use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors-Lizard-Spock
///
/// Declaration order is the canonical order used for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Spock,
    Lizard,
}

impl Move {
    /// Number of distinct moves
    pub const COUNT: usize = 5;

    /// Every move, in canonical order
    pub const ALL: [Move; Move::COUNT] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Spock,
        Move::Lizard,
    ];

    /// Position of this move in `Move::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Move> {
        Self::ALL.get(index).copied()
    }

    /// Upper-case name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
            Move::Spock => "SPOCK",
            Move::Lizard => "LIZARD",
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of moves, stored as a bitmask (bit i = `Move::ALL[i]`)
///
/// Copy semantics mean a set handed to a function can never be mutated
/// behind the caller's back.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Move>", from = "Vec<Move>")]
pub struct MoveSet(u8);

impl MoveSet {
    pub const EMPTY: MoveSet = MoveSet(0);

    const MASK: u8 = (1 << Move::COUNT) - 1;

    /// Set containing every move
    pub fn all() -> Self {
        MoveSet(Self::MASK)
    }

    pub fn single(mv: Move) -> Self {
        MoveSet(mv.bit())
    }

    /// Build from a raw bitmask; bits above the five moves are dropped
    pub fn from_bits(bits: u8) -> Self {
        MoveSet(bits & Self::MASK)
    }

    /// Insert a move. Returns false if it was already present.
    pub fn insert(&mut self, mv: Move) -> bool {
        let fresh = !self.contains(mv);
        self.0 |= mv.bit();
        fresh
    }

    pub fn remove(&mut self, mv: Move) -> bool {
        let present = self.contains(mv);
        self.0 &= !mv.bit();
        present
    }

    pub fn contains(self, mv: Move) -> bool {
        self.0 & mv.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: MoveSet) -> MoveSet {
        MoveSet(self.0 | other.0)
    }

    /// Moves in `self` that are not in `other`
    pub fn difference(self, other: MoveSet) -> MoveSet {
        MoveSet(self.0 & !other.0)
    }

    /// Iterate in canonical order
    pub fn iter(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |mv| self.contains(*mv))
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = MoveSet::EMPTY;
        for mv in iter {
            set.insert(mv);
        }
        set
    }
}

impl From<Vec<Move>> for MoveSet {
    fn from(moves: Vec<Move>) -> Self {
        moves.into_iter().collect()
    }
}

impl From<MoveSet> for Vec<Move> {
    fn from(set: MoveSet) -> Self {
        set.iter().collect()
    }
}
