//! A single tennis game: 0, 15, 30, 40, deuce and advantage.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap, TennisScoring};

/// Point score of one side within a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointScore {
    #[default]
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
    /// Only ever seen on a finished game.
    Game,
}

impl PointScore {
    /// Scoreboard label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PointScore::Love => "0",
            PointScore::Fifteen => "15",
            PointScore::Thirty => "30",
            PointScore::Forty => "40",
            PointScore::Advantage => "Ad",
            PointScore::Game => "Game",
        }
    }
}

impl std::fmt::Display for PointScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TennisGameState {
    pub points: SideMap<PointScore>,
    pub serving: Side,
}

impl TennisGameState {
    /// A love-all game.
    #[must_use]
    pub fn new(serving: Side) -> Self {
        Self {
            points: SideMap::with_value(PointScore::Love),
            serving,
        }
    }

    /// Build a game at an arbitrary score.
    #[must_use]
    pub fn at(one: PointScore, two: PointScore, serving: Side) -> Self {
        Self {
            points: SideMap::from_pair(one, two),
            serving,
        }
    }

    /// The side holding `Game`, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.points[side] == PointScore::Game)
    }

    #[must_use]
    pub fn is_deuce(&self) -> bool {
        self.points.pair() == (PointScore::Forty, PointScore::Forty)
    }

    /// Award a point to `winner`.
    ///
    /// The result either continues the game or has `winner` at `Game`.
    #[must_use]
    pub fn score_point(&self, winner: Side, scoring: TennisScoring) -> Self {
        let loser = winner.opponent();
        let mut next = *self;

        if self.winner().is_some() {
            return next;
        }

        match (self.points[winner], self.points[loser]) {
            (PointScore::Love, _) => next.points[winner] = PointScore::Fifteen,
            (PointScore::Fifteen, _) => next.points[winner] = PointScore::Thirty,
            (PointScore::Thirty, _) => next.points[winner] = PointScore::Forty,
            (PointScore::Forty, PointScore::Forty) => match scoring {
                TennisScoring::NoAd => next.points[winner] = PointScore::Game,
                TennisScoring::Standard => next.points[winner] = PointScore::Advantage,
            },
            (PointScore::Forty, PointScore::Advantage) => next.points[loser] = PointScore::Forty,
            (PointScore::Forty | PointScore::Advantage, _) => next.points[winner] = PointScore::Game,
            (PointScore::Game, _) => {}
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointScore::*;

    fn play(game: TennisGameState, points: &[Side], scoring: TennisScoring) -> TennisGameState {
        points
            .iter()
            .fold(game, |g, &side| g.score_point(side, scoring))
    }

    #[test]
    fn test_point_sequence() {
        let game = TennisGameState::new(Side::One);
        let game = play(game, &[Side::One, Side::One, Side::One], TennisScoring::Standard);
        assert_eq!(game.points.pair(), (Forty, Love));

        let game = game.score_point(Side::One, TennisScoring::Standard);
        assert_eq!(game.winner(), Some(Side::One));
        assert_eq!(game.points.pair(), (Game, Love));
    }

    #[test]
    fn test_deuce_advantage_and_back() {
        let game = TennisGameState::at(Forty, Forty, Side::One);
        assert!(game.is_deuce());

        let game = game.score_point(Side::One, TennisScoring::Standard);
        assert_eq!(game.points.pair(), (Advantage, Forty));

        let game = game.score_point(Side::Two, TennisScoring::Standard);
        assert_eq!(game.points.pair(), (Forty, Forty));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_advantage_converts() {
        let game = TennisGameState::at(Forty, Advantage, Side::One);
        let game = game.score_point(Side::Two, TennisScoring::Standard);
        assert_eq!(game.winner(), Some(Side::Two));
    }

    #[test]
    fn test_no_ad_sudden_death() {
        let game = TennisGameState::at(Forty, Forty, Side::Two);
        let game = game.score_point(Side::Two, TennisScoring::NoAd);
        assert_eq!(game.points.pair(), (Forty, Game));
    }

    #[test]
    fn test_forty_wins_when_opponent_behind() {
        let game = TennisGameState::at(Thirty, Forty, Side::One);
        let game = game.score_point(Side::Two, TennisScoring::Standard);
        assert_eq!(game.winner(), Some(Side::Two));
    }

    #[test]
    fn test_finished_game_is_unchanged() {
        let game = TennisGameState::at(Game, Thirty, Side::One);
        assert_eq!(game.score_point(Side::Two, TennisScoring::Standard), game);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Love.to_string(), "0");
        assert_eq!(Advantage.to_string(), "Ad");
        assert_eq!(Game.label(), "Game");
    }
}
