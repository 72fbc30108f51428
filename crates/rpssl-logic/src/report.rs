//! Final per-move report

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::stats::Statistics;

/// Win percentage truncated toward zero, `None` when the move never played
pub fn win_percentage(wins: u64, losses: u64) -> Option<u64> {
    let total = wins + losses;
    if total == 0 {
        None
    } else {
        Some(wins * 100 / total)
    }
}

/// One report line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    #[serde(rename = "move")]
    pub mv: Move,
    pub wins: u64,
    pub losses: u64,
    pub win_percentage: Option<u64>,
}

impl MoveSummary {
    pub fn new(mv: Move, stats: &Statistics) -> Self {
        let wins = stats.wins(mv);
        let losses = stats.losses(mv);
        Self {
            mv,
            wins,
            losses,
            win_percentage: win_percentage(wins, losses),
        }
    }
}

impl fmt::Display for MoveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} won {} times, lost {} times and win percentage is ",
            self.mv, self.wins, self.losses
        )?;
        match self.win_percentage {
            Some(pct) => write!(f, "{}%", pct),
            None => f.write_str("NA"),
        }
    }
}

/// Summary of every move in canonical order.
///
/// Built from a borrowed `Statistics`, so producing it any number of times
/// yields the same report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub moves: Vec<MoveSummary>,
}

impl Report {
    pub fn from_statistics(stats: &Statistics) -> Self {
        Self {
            moves: Move::ALL
                .iter()
                .map(|mv| MoveSummary::new(*mv, stats))
                .collect(),
        }
    }

    pub fn get(&self, mv: Move) -> Option<&MoveSummary> {
        self.moves.iter().find(|line| line.mv == mv)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.moves {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
