//! Sport identifiers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    #[default]
    Tennis,
    Padel,
    Badminton,
    TableTennis,
    Squash,
    Pickleball,
}

impl Sport {
    pub const ALL: [Sport; 6] = [
        Sport::Tennis,
        Sport::Padel,
        Sport::Badminton,
        Sport::TableTennis,
        Sport::Squash,
        Sport::Pickleball,
    ];

    /// Stable identifier, as used in saved data.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Sport::Tennis => "tennis",
            Sport::Padel => "padel",
            Sport::Badminton => "badminton",
            Sport::TableTennis => "table-tennis",
            Sport::Squash => "squash",
            Sport::Pickleball => "pickleball",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sport| sport.id() == id)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sport::Tennis => "Tennis",
            Sport::Padel => "Padel",
            Sport::Badminton => "Badminton",
            Sport::TableTennis => "Table Tennis",
            Sport::Squash => "Squash",
            Sport::Pickleball => "Pickleball",
        }
    }

    /// Scored in games and sets with 15-30-40.
    #[must_use]
    pub const fn uses_tennis_scoring(self) -> bool {
        matches!(self, Sport::Tennis | Sport::Padel)
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for sport in Sport::ALL {
            assert_eq!(Sport::from_id(sport.id()), Some(sport));
        }
        assert_eq!(Sport::from_id("croquet"), None);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Sport::TableTennis).unwrap();
        assert_eq!(json, "\"table-tennis\"");
        let sport: Sport = serde_json::from_str("\"padel\"").unwrap();
        assert_eq!(sport, Sport::Padel);
    }

    #[test]
    fn test_tennis_family() {
        assert!(Sport::Tennis.uses_tennis_scoring());
        assert!(Sport::Padel.uses_tennis_scoring());
        assert!(!Sport::Squash.uses_tennis_scoring());
        assert_eq!(Sport::TableTennis.to_string(), "Table Tennis");
    }
}
