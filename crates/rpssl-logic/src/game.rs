//! Single-round mechanics: drawing moves and resolving the winner

use serde::{Deserialize, Serialize};

use crate::moves::{Move, MoveSet};
use crate::random::SeededRng;
use crate::rules::RuleTable;

/// Result of drawing one move per player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draw {
    /// Every player picked a different move
    Distinct(MoveSet),
    /// Two players picked this move; drawing stopped there
    Duplicate(Move),
}

/// Why a round produced no winner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieReason {
    /// Two players drew this move
    DuplicateMove(Move),
    /// Every move present was beaten by another one present
    NoDominantMove,
}

/// Outcome of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Tie(TieReason),
    Won { winner: Move, participants: MoveSet },
}

impl RoundOutcome {
    pub fn is_tie(&self) -> bool {
        matches!(self, RoundOutcome::Tie(_))
    }

    /// Moves that lost this round (empty for a tie)
    pub fn losers(&self) -> MoveSet {
        match *self {
            RoundOutcome::Tie(_) => MoveSet::EMPTY,
            RoundOutcome::Won { winner, participants } => {
                participants.difference(MoveSet::single(winner))
            }
        }
    }
}

/// Pick one move uniformly at random
pub fn random_move(rng: &mut SeededRng) -> Move {
    Move::ALL[rng.next_below(Move::COUNT as u32) as usize]
}

/// Draw one move per player.
///
/// Stops at the first repeated move and reports it; the partial set is
/// discarded. Zero players gives an empty set.
pub fn generate_moves(players: u32, rng: &mut SeededRng) -> Draw {
    let mut moves = MoveSet::EMPTY;
    for _ in 0..players {
        let mv = random_move(rng);
        if !moves.insert(mv) {
            return Draw::Duplicate(mv);
        }
    }
    Draw::Distinct(moves)
}

/// Find the move that beats every other move present.
///
/// Removes from `moves` everything beaten by some present move. If exactly
/// one move survives it is the winner. Nothing survives for an empty set or
/// a cycle such as {Rock, Paper, Scissors}.
pub fn find_winner(moves: MoveSet, rules: &RuleTable) -> Option<Move> {
    let survivors = moves.difference(rules.beaten_by(moves));

    let mut iter = survivors.iter();
    match (iter.next(), iter.next()) {
        (Some(winner), None) => Some(winner),
        _ => None,
    }
}

/// Play one round: draw, then resolve
pub fn play_round(players: u32, rules: &RuleTable, rng: &mut SeededRng) -> RoundOutcome {
    match generate_moves(players, rng) {
        Draw::Duplicate(mv) => RoundOutcome::Tie(TieReason::DuplicateMove(mv)),
        Draw::Distinct(participants) => match find_winner(participants, rules) {
            Some(winner) => RoundOutcome::Won { winner, participants },
            None => RoundOutcome::Tie(TieReason::NoDominantMove),
        },
    }
}
