//! Seeded match simulation.
//!
//! Drives a `MatchSession` with random rally outcomes. The server wins each
//! rally with a fixed probability. Used for soak tests and benchmarks; the
//! same seed always plays the same match.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{ScoreRng, Settings, Side};
use crate::rules::PointFlags;
use crate::serve::PlayerSlot;
use crate::session::{MatchSession, MatchSetup, SessionError};

/// Configuration for simulated matches.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Chance the serving side wins a rally.
    pub serve_win: f64,

    /// Stop after this many points even if the match is undecided.
    pub max_points: usize,

    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            serve_win: 0.55,
            max_points: 5_000,
            seed: 0,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_serve_win(mut self, serve_win: f64) -> Self {
        self.serve_win = serve_win;
        self
    }

    pub fn with_max_points(mut self, max: usize) -> Self {
        self.max_points = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A point that completed something, by its 0-based index in the match.
pub type Boundary = (usize, PointFlags);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimOutcome {
    pub points: usize,
    pub winner: Option<Side>,
    /// Non-quiet points in play order.
    pub boundaries: SmallVec<[Boundary; 16]>,
}

impl SimOutcome {
    #[must_use]
    pub fn games(&self) -> usize {
        self.boundaries.iter().filter(|(_, flags)| flags.game_won).count()
    }

    #[must_use]
    pub fn sets(&self) -> usize {
        self.boundaries.iter().filter(|(_, flags)| flags.set_won).count()
    }

    #[must_use]
    pub fn side_outs(&self) -> usize {
        self.boundaries.iter().filter(|(_, flags)| flags.side_out).count()
    }
}

pub struct MatchSimulator {
    config: SimConfig,
    rng: ScoreRng,
}

impl MatchSimulator {
    pub fn new(config: SimConfig) -> Self {
        let rng = ScoreRng::new(config.seed);
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play one rally, first resolving any pending next-server choice.
    pub fn play_point(&mut self, session: &mut MatchSession) -> Result<PointFlags, SessionError> {
        if let Some(team) = session.state().awaiting_server() {
            let [first, second] = PlayerSlot::members(team);
            let slot = if self.rng.gen_bool(0.5) { first } else { second };
            session.select_next_server(slot)?;
        }

        let winner = self.rng.rally_winner(session.state().serving(), self.config.serve_win);
        session.point(winner)
    }

    /// Play until the match ends or `max_points` is reached.
    pub fn play_out(&mut self, session: &mut MatchSession) -> Result<SimOutcome, SessionError> {
        let mut outcome = SimOutcome::default();

        while !session.is_complete() && outcome.points < self.config.max_points {
            let flags = self.play_point(session)?;
            if !flags.is_quiet() {
                outcome.boundaries.push((outcome.points, flags));
            }
            outcome.points += 1;
        }

        outcome.winner = session.winner();
        debug!(
            sport = %session.sport(),
            points = outcome.points,
            winner = ?outcome.winner,
            "simulated match"
        );
        Ok(outcome)
    }

    /// Start a match from `setup` and play it out on a forked stream.
    pub fn simulate(&mut self, setup: MatchSetup, settings: &Settings) -> Result<(MatchSession, SimOutcome), SessionError> {
        let mut session = MatchSession::start(setup, settings)?;
        let mut worker = MatchSimulator {
            config: self.config.clone(),
            rng: self.rng.fork(),
        };
        let outcome = worker.play_out(&mut session)?;
        Ok((session, outcome))
    }
}
