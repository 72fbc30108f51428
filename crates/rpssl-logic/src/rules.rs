//! The "beats" relation between moves
//!
//! A rule table maps each move to the set of moves it defeats. The table is
//! validated on construction: every pair of distinct moves must have exactly
//! one winner, otherwise winner resolution would be ambiguous.

use thiserror::Error;

use crate::moves::{Move, MoveSet};

/// Standard Rock-Paper-Scissors-Lizard-Spock rules
pub const STANDARD_RULES: [(Move, &[Move]); Move::COUNT] = [
    (Move::Rock, &[Move::Lizard, Move::Scissors]),
    (Move::Paper, &[Move::Rock, Move::Spock]),
    (Move::Scissors, &[Move::Lizard, Move::Paper]),
    (Move::Spock, &[Move::Rock, Move::Scissors]),
    (Move::Lizard, &[Move::Paper, Move::Spock]),
];

/// Reasons a rule table is rejected
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("no rule defined for {0}")]
    MissingRule(Move),
    #[error("more than one rule defined for {0}")]
    DuplicateRule(Move),
    #[error("{0} is listed as beating itself")]
    SelfBeat(Move),
    #[error("{a} and {b} each beat the other")]
    Contradiction { a: Move, b: Move },
    #[error("neither {a} nor {b} beats the other")]
    Unrelated { a: Move, b: Move },
}

/// Validated, immutable beats relation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    beats: [MoveSet; Move::COUNT],
}

impl RuleTable {
    /// Build a table from `(move, moves it beats)` entries.
    ///
    /// Fails unless every move has exactly one rule and the rules form a
    /// complete tournament.
    pub fn new<'a, I>(rules: I) -> Result<Self, RuleTableError>
    where
        I: IntoIterator<Item = (Move, &'a [Move])>,
    {
        let mut beats = [MoveSet::EMPTY; Move::COUNT];
        let mut defined = MoveSet::EMPTY;

        for (mv, beaten) in rules {
            if !defined.insert(mv) {
                return Err(RuleTableError::DuplicateRule(mv));
            }
            beats[mv.index()] = beaten.iter().copied().collect();
        }

        if let Some(mv) = MoveSet::all().difference(defined).iter().next() {
            return Err(RuleTableError::MissingRule(mv));
        }

        let table = Self { beats };
        table.validate()?;
        Ok(table)
    }

    /// The standard five-move table
    pub fn standard() -> Result<Self, RuleTableError> {
        Self::new(STANDARD_RULES)
    }

    fn validate(&self) -> Result<(), RuleTableError> {
        for a in Move::ALL {
            if self.defeats(a, a) {
                return Err(RuleTableError::SelfBeat(a));
            }
            for b in Move::ALL.into_iter().skip(a.index() + 1) {
                match (self.defeats(a, b), self.defeats(b, a)) {
                    (true, true) => return Err(RuleTableError::Contradiction { a, b }),
                    (false, false) => return Err(RuleTableError::Unrelated { a, b }),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Moves that `mv` defeats
    pub fn beats(&self, mv: Move) -> MoveSet {
        self.beats[mv.index()]
    }

    pub fn defeats(&self, a: Move, b: Move) -> bool {
        self.beats(a).contains(b)
    }

    /// Every move defeated by at least one move in `moves`
    pub fn beaten_by(&self, moves: MoveSet) -> MoveSet {
        moves
            .iter()
            .fold(MoveSet::EMPTY, |losers, mv| losers.union(self.beats(mv)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> RuleTable {
        RuleTable::standard().expect("standard rules are consistent")
    }

    #[test]
    fn test_standard_table_entries() {
        let rules = standard();
        assert!(rules.defeats(Move::Rock, Move::Scissors));
        assert!(rules.defeats(Move::Rock, Move::Lizard));
        assert!(rules.defeats(Move::Paper, Move::Spock));
        assert!(rules.defeats(Move::Scissors, Move::Lizard));
        assert!(rules.defeats(Move::Spock, Move::Scissors));
        assert!(rules.defeats(Move::Lizard, Move::Paper));
        assert!(!rules.defeats(Move::Scissors, Move::Rock));
    }

    #[test]
    fn test_every_pair_has_one_winner() {
        let rules = standard();
        for a in Move::ALL {
            for b in Move::ALL {
                if a == b {
                    assert!(!rules.defeats(a, b));
                } else {
                    assert!(
                        rules.defeats(a, b) ^ rules.defeats(b, a),
                        "{} vs {} must have exactly one winner",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_move_beats_two() {
        let rules = standard();
        for mv in Move::ALL {
            assert_eq!(rules.beats(mv).len(), 2, "{} should beat two moves", mv);
        }
    }

    #[test]
    fn test_beaten_by_unions() {
        let rules = standard();
        let present: MoveSet = [Move::Rock, Move::Paper].into_iter().collect();
        let losers: Vec<Move> = rules.beaten_by(present).into();
        assert_eq!(
            losers,
            vec![Move::Rock, Move::Scissors, Move::Spock, Move::Lizard]
        );
        assert!(rules.beaten_by(MoveSet::EMPTY).is_empty());
    }

    #[test]
    fn test_missing_rule() {
        let err = RuleTable::new(STANDARD_RULES.into_iter().take(4)).unwrap_err();
        assert_eq!(err, RuleTableError::MissingRule(Move::Lizard));
    }

    #[test]
    fn test_duplicate_rule() {
        let mut rules = STANDARD_RULES.to_vec();
        rules.push((Move::Rock, &[Move::Scissors][..]));
        let err = RuleTable::new(rules).unwrap_err();
        assert_eq!(err, RuleTableError::DuplicateRule(Move::Rock));
    }

    #[test]
    fn test_self_beat() {
        let mut rules = STANDARD_RULES;
        rules[0] = (Move::Rock, &[Move::Rock, Move::Lizard, Move::Scissors][..]);
        let err = RuleTable::new(rules).unwrap_err();
        assert_eq!(err, RuleTableError::SelfBeat(Move::Rock));
    }

    #[test]
    fn test_contradiction() {
        let mut rules = STANDARD_RULES;
        // Scissors also claims Rock, which already beats Scissors
        rules[2] = (Move::Scissors, &[Move::Lizard, Move::Paper, Move::Rock][..]);
        let err = RuleTable::new(rules).unwrap_err();
        assert_eq!(
            err,
            RuleTableError::Contradiction { a: Move::Rock, b: Move::Scissors }
        );
    }

    #[test]
    fn test_unrelated() {
        let mut rules = STANDARD_RULES;
        rules[0] = (Move::Rock, &[Move::Lizard][..]);
        let err = RuleTable::new(rules).unwrap_err();
        assert_eq!(
            err,
            RuleTableError::Unrelated { a: Move::Rock, b: Move::Scissors }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = RuleTableError::Contradiction { a: Move::Rock, b: Move::Paper };
        assert_eq!(err.to_string(), "ROCK and PAPER each beat the other");
        assert_eq!(
            RuleTableError::MissingRule(Move::Spock).to_string(),
            "no rule defined for SPOCK"
        );
    }
}
