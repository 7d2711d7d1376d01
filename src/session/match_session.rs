//! The live match: who is playing, the score, and undo.
//!
//! A session owns exactly one match. Each point goes to the engine for the
//! session's sport; the session keeps the previous snapshots so the last
//! points can be taken back. When the match is over `finish` copies it out
//! into a `MatchHistoryRecord` and the session can be dropped.

use chrono::{DateTime, Utc};
use im::Vector;
use tracing::{debug, info, warn};

use crate::core::{Settings, Side, SideMap};
use crate::rules::{PointFlags, ScoringEngine};
use crate::serve::{DoublesServe, PlayerSlot, ServeRotation};

use super::error::SessionError;
use super::history::MatchHistoryRecord;
use super::participants::Participants;
use super::sport::Sport;
use super::state::{MatchState, SportEngine, BADMINTON_SIDE_SWITCH};

/// How a match starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSetup {
    pub sport: Sport,
    pub participants: Participants,
    /// Doubles only: first and second server of a custom rotation.
    pub serve_order: Option<(PlayerSlot, PlayerSlot)>,
}

impl MatchSetup {
    #[must_use]
    pub fn new(sport: Sport, participants: Participants) -> Self {
        Self {
            sport,
            participants,
            serve_order: None,
        }
    }

    #[must_use]
    pub fn singles(sport: Sport, one: impl Into<String>, two: impl Into<String>) -> Self {
        Self::new(sport, Participants::singles(one, two))
    }

    #[must_use]
    pub fn doubles(sport: Sport, names: [String; 4]) -> Self {
        Self::new(sport, Participants::doubles(names))
    }

    #[must_use]
    pub fn with_serve_order(mut self, first: PlayerSlot, second: PlayerSlot) -> Self {
        self.serve_order = Some((first, second));
        self
    }

    #[must_use]
    pub fn with_participants(mut self, participants: Participants) -> Self {
        self.participants = participants;
        self
    }

    fn rotation(&self) -> Result<Option<ServeRotation>, SessionError> {
        match (self.serve_order, self.participants.is_doubles()) {
            (None, false) => Ok(None),
            (None, true) => Ok(Some(ServeRotation::Standard)),
            (Some(_), false) => Err(SessionError::InvalidServeOrder),
            (Some((first, second)), true) => ServeRotation::custom(first, second)
                .map(Some)
                .ok_or(SessionError::InvalidServeOrder),
        }
    }
}

/// Score plus the per-side rally tally, restored together on undo.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Snapshot {
    state: MatchState,
    rallies_won: SideMap<u32>,
}

#[derive(Clone, Debug)]
pub struct MatchSession {
    sport: Sport,
    participants: Participants,
    rotation: Option<ServeRotation>,
    started_at: DateTime<Utc>,
    engine: SportEngine,
    current: Snapshot,
    /// Earlier snapshots, oldest first.
    undo: Vector<Snapshot>,
}

impl MatchSession {
    /// Start a match now.
    pub fn start(setup: MatchSetup, settings: &Settings) -> Result<Self, SessionError> {
        Self::start_at(setup, settings, Utc::now())
    }

    /// Start a match with an explicit start time.
    pub fn start_at(setup: MatchSetup, settings: &Settings, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        let rotation = setup.rotation().map_err(|err| {
            warn!(sport = %setup.sport, serve_order = ?setup.serve_order, "rejected serve order");
            err
        })?;
        let doubles = setup.participants.is_doubles();

        let state = MatchState::initial(setup.sport, rotation.map(DoublesServe::new));
        let engine = SportEngine::for_sport(setup.sport, settings, doubles);

        info!(
            sport = %setup.sport,
            one = %setup.participants.team_name(Side::One),
            two = %setup.participants.team_name(Side::Two),
            doubles,
            "match started"
        );

        Ok(Self {
            sport: setup.sport,
            participants: setup.participants,
            rotation,
            started_at,
            engine,
            current: Snapshot {
                state,
                rallies_won: SideMap::with_value(0),
            },
            undo: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn sport(&self) -> Sport {
        self.sport
    }

    #[must_use]
    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    /// Doubles serve rotation, custom or standard.
    #[must_use]
    pub fn rotation(&self) -> Option<ServeRotation> {
        self.rotation
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.current.state
    }

    #[must_use]
    pub fn engine(&self) -> &SportEngine {
        &self.engine
    }

    /// Rallies won by each side, including those of reset games.
    #[must_use]
    pub fn rallies_won(&self) -> SideMap<u32> {
        self.current.rallies_won
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.current.state.winner()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Badminton reminder to change ends: a side has exactly 11 in the game.
    #[must_use]
    pub fn side_switch_due(&self) -> bool {
        match &self.current.state {
            MatchState::Badminton(state) => state.winner.is_none() && state.game.reached(BADMINTON_SIDE_SWITCH),
            _ => false,
        }
    }

    // === Operations ===

    /// Award a point to `side`.
    pub fn point(&mut self, side: Side) -> Result<PointFlags, SessionError> {
        if self.is_complete() {
            warn!(sport = %self.sport, %side, "point after match end");
            return Err(SessionError::MatchComplete);
        }
        if let Some(team) = self.current.state.awaiting_server() {
            warn!(sport = %self.sport, %team, "point while next server is undecided");
            return Err(SessionError::AwaitingServerSelection { team });
        }

        let transition = self.engine.apply_point(&self.current.state, side);
        let mut rallies_won = self.current.rallies_won;
        rallies_won[side] += 1;

        let previous = std::mem::replace(
            &mut self.current,
            Snapshot {
                state: transition.state,
                rallies_won,
            },
        );
        self.undo.push_back(previous);

        debug!(sport = %self.sport, %side, flags = ?transition.flags, "point");
        if transition.flags.match_won {
            info!(sport = %self.sport, winner = %side, result = %self.current.state.result_string(), "match complete");
        }

        Ok(transition.flags)
    }

    /// Choose who serves the next game, when the losing side has to pick.
    pub fn select_next_server(&mut self, slot: PlayerSlot) -> Result<(), SessionError> {
        let Some(team) = self.current.state.awaiting_server() else {
            warn!(%slot, "no next-server choice pending");
            return Err(SessionError::NoServerSelectionPending);
        };
        if slot.side() != team {
            warn!(%slot, %team, "server is not on the choosing side");
            return Err(SessionError::ServerNotOnTeam { slot, team });
        }

        let state = self
            .engine
            .select_server(&self.current.state, slot)
            .ok_or(SessionError::NoServerSelectionPending)?;
        let rallies_won = self.current.rallies_won;
        let previous = std::mem::replace(&mut self.current, Snapshot { state, rallies_won });
        self.undo.push_back(previous);

        info!(%slot, "next server selected");
        Ok(())
    }

    /// Restore the state before the last point or server choice.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let Some(previous) = self.undo.pop_back() else {
            warn!(sport = %self.sport, "nothing to undo");
            return Err(SessionError::NothingToUndo);
        };
        self.current = previous;
        debug!(sport = %self.sport, depth = self.undo.len(), "undo");
        Ok(())
    }

    /// Zero the game in progress, keeping the server. Clears undo.
    pub fn reset_game(&mut self) {
        self.current.state = self.current.state.reset_game();
        self.undo.clear();
        info!(sport = %self.sport, "game reset");
    }

    /// Summarize the finished match for history.
    pub fn finish(&self, ended_at: DateTime<Utc>) -> Result<MatchHistoryRecord, SessionError> {
        let Some(winner) = self.winner() else {
            warn!(sport = %self.sport, "finish before match end");
            return Err(SessionError::MatchNotComplete);
        };

        let duration_secs = u64::try_from((ended_at - self.started_at).num_seconds()).unwrap_or(0);
        let record = MatchHistoryRecord {
            id: format!("{}-{}", self.sport.id(), self.started_at.timestamp_millis()),
            sport: self.sport,
            date: ended_at,
            duration_secs,
            names: self.participants.team_names(),
            result: self.current.state.result_string(),
            winner,
            total_points: Some(self.current.rallies_won),
        };

        info!(id = %record.id, result = %record.result, winner = %winner, "match finished");
        Ok(record)
    }
}
