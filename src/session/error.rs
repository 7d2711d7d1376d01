use thiserror::Error;

use crate::core::Side;
use crate::serve::PlayerSlot;

/// Rejected match session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Match is already complete")]
    MatchComplete,

    #[error("Waiting for {team} to choose who serves the next game")]
    AwaitingServerSelection { team: Side },

    #[error("No next-server choice is pending")]
    NoServerSelectionPending,

    #[error("{slot} does not play for {team}")]
    ServerNotOnTeam { slot: PlayerSlot, team: Side },

    #[error("A match needs 2 or 4 players, got {count}")]
    InvalidParticipants { count: usize },

    #[error("Serve order needs doubles and servers from opposite sides")]
    InvalidServeOrder,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Match is not complete")]
    MatchNotComplete,
}

impl SessionError {
    /// True when retrying after more play (or a server choice) can succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            SessionError::AwaitingServerSelection { .. } => true,
            SessionError::NothingToUndo => true,
            SessionError::MatchNotComplete => true,
            SessionError::MatchComplete => false,
            SessionError::NoServerSelectionPending => false,
            SessionError::ServerNotOnTeam { .. } => false,
            SessionError::InvalidParticipants { .. } => false,
            SessionError::InvalidServeOrder => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(SessionError::AwaitingServerSelection { team: Side::Two }.is_transient());
        assert!(SessionError::MatchNotComplete.is_transient());
        assert!(!SessionError::MatchComplete.is_transient());
        assert!(!SessionError::InvalidServeOrder.is_transient());
    }

    #[test]
    fn test_messages() {
        let err = SessionError::ServerNotOnTeam {
            slot: PlayerSlot::P2,
            team: Side::One,
        };
        assert_eq!(err.to_string(), "Player 2 does not play for Side 1");
        assert_eq!(
            SessionError::InvalidParticipants { count: 3 }.to_string(),
            "A match needs 2 or 4 players, got 3"
        );
    }
}
