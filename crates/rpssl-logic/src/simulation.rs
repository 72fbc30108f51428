//! Simulation driver
//!
//! Runs a fixed number of rounds against a single RNG and feeds every
//! outcome into a `Statistics` tally.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::game::{play_round, RoundOutcome};
use crate::moves::Move;
use crate::random::SeededRng;
use crate::rules::RuleTable;
use crate::stats::Statistics;

/// Players and rounds for one simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub players: u32,
    pub games: u32,
}

impl SimulationConfig {
    pub const DEFAULT_PLAYERS: u32 = 2;
    pub const DEFAULT_GAMES: u32 = 10_000;

    pub fn new(players: u32, games: u32) -> Self {
        Self { players, games }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PLAYERS, Self::DEFAULT_GAMES)
    }
}

/// Where a simulation is in its run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationState {
    Running { remaining: u32 },
    Done,
}

/// A simulation in progress
pub struct Simulation<'r> {
    rules: &'r RuleTable,
    config: SimulationConfig,
    rng: SeededRng,
    remaining: u32,
    stats: Statistics,
}

impl<'r> Simulation<'r> {
    pub fn new(rules: &'r RuleTable, config: SimulationConfig, rng: SeededRng) -> Self {
        if config.players as usize > Move::COUNT {
            warn!(
                players = config.players,
                "more players than moves, every round will tie"
            );
        }
        Self {
            rules,
            config,
            rng,
            remaining: config.games,
            stats: Statistics::new(),
        }
    }

    pub fn state(&self) -> SimulationState {
        if self.remaining == 0 {
            SimulationState::Done
        } else {
            SimulationState::Running { remaining: self.remaining }
        }
    }

    /// Play the next round. Returns `None` once every round has been played.
    pub fn step(&mut self) -> Option<RoundOutcome> {
        if self.remaining == 0 {
            return None;
        }

        let outcome = play_round(self.config.players, self.rules, &mut self.rng);
        self.stats.record_outcome(&outcome);
        self.remaining -= 1;
        trace!(round = self.stats.rounds(), ?outcome, "round played");

        if self.remaining == 0 {
            debug!(
                rounds = self.stats.rounds(),
                ties = self.stats.ties(),
                duplicate_ties = self.stats.duplicate_ties(),
                unresolved_ties = self.stats.unresolved_ties(),
                "simulation finished"
            );
        }

        Some(outcome)
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Play every remaining round and hand back the tally
    pub fn run(mut self) -> Statistics {
        while self.step().is_some() {}
        self.stats
    }
}

/// Run a complete simulation
///
/// # Arguments
/// * `rules` - Validated beats relation
/// * `config` - Player and round counts
/// * `rng` - Source of every move drawn
pub fn simulate(rules: &RuleTable, config: SimulationConfig, rng: SeededRng) -> Statistics {
    debug!(players = config.players, games = config.games, "starting simulation");
    Simulation::new(rules, config, rng).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Report;

    fn rules() -> RuleTable {
        RuleTable::standard().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.players, 2);
        assert_eq!(config.games, 10_000);
    }

    #[test]
    fn test_state_transitions() {
        let rules = rules();
        let mut sim = Simulation::new(&rules, SimulationConfig::new(2, 2), SeededRng::from_u64(1));

        assert_eq!(sim.state(), SimulationState::Running { remaining: 2 });
        assert!(sim.step().is_some());
        assert_eq!(sim.state(), SimulationState::Running { remaining: 1 });
        assert!(sim.step().is_some());
        assert_eq!(sim.state(), SimulationState::Done);
        assert!(sim.step().is_none());
        assert_eq!(sim.statistics().rounds(), 2);
    }

    #[test]
    fn test_zero_games_is_done_immediately() {
        let rules = rules();
        let sim = Simulation::new(&rules, SimulationConfig::new(2, 0), SeededRng::from_u64(1));
        assert_eq!(sim.state(), SimulationState::Done);
        assert_eq!(sim.run(), Statistics::new());
    }

    #[test]
    fn test_same_seed_same_statistics() {
        let rules = rules();
        let config = SimulationConfig::new(3, 500);
        let a = simulate(&rules, config, SeededRng::new(&[42u8; 32]));
        let b = simulate(&rules, config, SeededRng::new(&[42u8; 32]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let rules = rules();
        let config = SimulationConfig::new(2, 500);
        let a = simulate(&rules, config, SeededRng::from_u64(1));
        let b = simulate(&rules, config, SeededRng::from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_reference_run_totals() {
        let rules = rules();
        let stats = simulate(&rules, SimulationConfig::default(), SeededRng::new(&[7u8; 32]));

        assert_eq!(stats.rounds(), 10_000);
        assert_eq!(stats.total_results(), 2 * (10_000 - stats.ties()));
        // Two players collide with probability 1/5 and never form a cycle
        assert_eq!(stats.unresolved_ties(), 0);
        assert!(
            stats.ties() > 1_500 && stats.ties() < 2_500,
            "tie count {} far from 2000",
            stats.ties()
        );

        for line in Report::from_statistics(&stats).moves {
            let pct = line.win_percentage.expect("every move plays in 10000 rounds");
            assert!(pct <= 100);
        }
    }

    #[test]
    fn test_three_players_hit_both_tie_kinds() {
        let rules = rules();
        let stats = simulate(&rules, SimulationConfig::new(3, 2_000), SeededRng::from_u64(9));

        assert!(stats.duplicate_ties() > 0);
        assert!(stats.unresolved_ties() > 0);
        assert_eq!(stats.total_results(), 3 * stats.decided_rounds());
    }

    #[test]
    fn test_too_many_players_all_tie() {
        let rules = rules();
        let stats = simulate(&rules, SimulationConfig::new(6, 100), SeededRng::from_u64(4));
        assert_eq!(stats.duplicate_ties(), 100);
        assert_eq!(stats.total_results(), 0);

        let report = Report::from_statistics(&stats);
        assert!(report.moves.iter().all(|line| line.win_percentage.is_none()));
    }

    #[test]
    fn test_single_player_always_wins() {
        let rules = rules();
        let stats = simulate(&rules, SimulationConfig::new(1, 50), SeededRng::from_u64(8));
        assert_eq!(stats.ties(), 0);
        let wins: u64 = Move::ALL.iter().map(|mv| stats.wins(*mv)).sum();
        assert_eq!(wins, 50);
        assert_eq!(stats.total_results(), 50);
    }
}
