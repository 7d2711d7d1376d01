//! Who is playing: names, teams, colors.
//!
//! Names are stored in player-number order, so in doubles index 0 and 2 are
//! side one and index 1 and 3 are side two.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Side, SideMap, TeamColor};
use crate::serve::PlayerSlot;

use super::error::SessionError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    names: SmallVec<[String; 4]>,
    pub colors: SideMap<TeamColor>,
}

impl Participants {
    /// Default scoreboard colors: navy for side one, blue for side two.
    pub const DEFAULT_COLORS: (TeamColor, TeamColor) = (TeamColor::Navy, TeamColor::Blue);

    /// Two players, one per side.
    #[must_use]
    pub fn singles(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            names: SmallVec::from_iter([one.into(), two.into()]),
            colors: SideMap::from_pair(Self::DEFAULT_COLORS.0, Self::DEFAULT_COLORS.1),
        }
    }

    /// Four players in player-number order (1 and 3 on side one).
    #[must_use]
    pub fn doubles(names: [String; 4]) -> Self {
        Self {
            names: SmallVec::from_iter(names),
            colors: SideMap::from_pair(Self::DEFAULT_COLORS.0, Self::DEFAULT_COLORS.1),
        }
    }

    /// Two or four names, in player-number order.
    pub fn from_names<I, S>(names: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: SmallVec<[String; 4]> = names.into_iter().map(Into::into).collect();
        match names.len() {
            2 | 4 => Ok(Self {
                names,
                colors: SideMap::from_pair(Self::DEFAULT_COLORS.0, Self::DEFAULT_COLORS.1),
            }),
            count => Err(SessionError::InvalidParticipants { count }),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, one: TeamColor, two: TeamColor) -> Self {
        self.colors = SideMap::from_pair(one, two);
        self
    }

    #[must_use]
    pub fn is_doubles(&self) -> bool {
        self.names.len() == 4
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    /// Name of a player by slot. In singles, slots 3 and 4 have no name.
    #[must_use]
    pub fn name(&self, slot: PlayerSlot) -> Option<&str> {
        self.names
            .get(usize::from(slot.number()) - 1)
            .map(String::as_str)
    }

    /// Names of a side's players, first player first.
    #[must_use]
    pub fn members(&self, side: Side) -> SmallVec<[&str; 2]> {
        PlayerSlot::members(side)
            .into_iter()
            .filter_map(|slot| self.name(slot))
            .collect()
    }

    /// Scoreboard name for a side: the player, or `"A / B"` in doubles.
    #[must_use]
    pub fn team_name(&self, side: Side) -> String {
        self.members(side).join(" / ")
    }

    #[must_use]
    pub fn team_names(&self) -> SideMap<String> {
        SideMap::new(|side| self.team_name(side))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
