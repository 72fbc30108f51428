//! Per-move win/loss tallies

use serde::{Deserialize, Serialize};

use crate::game::{RoundOutcome, TieReason};
use crate::moves::{Move, MoveSet};

/// Win and loss counts per move, plus round and tie counters.
///
/// Every counter starts at zero, so a move that never won or lost reports 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    wins: [u64; Move::COUNT],
    losses: [u64; Move::COUNT],
    decided_rounds: u64,
    duplicate_ties: u64,
    unresolved_ties: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a decided round: `winner` gets a win and every other
    /// participant a loss
    pub fn record(&mut self, winner: Move, participants: MoveSet) {
        self.decided_rounds += 1;
        self.wins[winner.index()] += 1;
        for loser in participants.difference(MoveSet::single(winner)).iter() {
            self.losses[loser.index()] += 1;
        }
    }

    /// Count a played round; ties touch only the tie counters
    pub fn record_outcome(&mut self, outcome: &RoundOutcome) {
        match *outcome {
            RoundOutcome::Tie(TieReason::DuplicateMove(_)) => self.duplicate_ties += 1,
            RoundOutcome::Tie(TieReason::NoDominantMove) => self.unresolved_ties += 1,
            RoundOutcome::Won { winner, participants } => self.record(winner, participants),
        }
    }

    pub fn wins(&self, mv: Move) -> u64 {
        self.wins[mv.index()]
    }

    pub fn losses(&self, mv: Move) -> u64 {
        self.losses[mv.index()]
    }

    /// Decided rounds plus ties
    pub fn rounds(&self) -> u64 {
        self.decided_rounds.saturating_add(self.ties())
    }

    pub fn ties(&self) -> u64 {
        self.duplicate_ties.saturating_add(self.unresolved_ties)
    }

    /// Ties caused by two players drawing the same move
    pub fn duplicate_ties(&self) -> u64 {
        self.duplicate_ties
    }

    /// Ties where no move beat all the others
    pub fn unresolved_ties(&self) -> u64 {
        self.unresolved_ties
    }

    pub fn decided_rounds(&self) -> u64 {
        self.decided_rounds
    }

    /// Sum of wins and losses over every move
    pub fn total_results(&self) -> u64 {
        self.wins.iter().sum::<u64>() + self.losses.iter().sum::<u64>()
    }

    /// Fold another tally into this one
    pub fn merge(&mut self, other: &Statistics) {
        for i in 0..Move::COUNT {
            self.wins[i] += other.wins[i];
            self.losses[i] += other.losses[i];
        }
        self.decided_rounds += other.decided_rounds;
        self.duplicate_ties += other.duplicate_ties;
        self.unresolved_ties += other.unresolved_ties;
    }
}
