//! Game mode selection

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Which computer strategy a session plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Random,
    Reddit,
    #[default]
    Psychology,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Random, GameMode::Reddit, GameMode::Psychology];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Random => "random",
            GameMode::Reddit => "reddit",
            GameMode::Psychology => "psychology",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lowered)
            .ok_or_else(|| Error::ParseGameMode {
                input: s.to_string(),
                expected: "random, reddit, psychology".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Reddit".parse::<GameMode>().unwrap(), GameMode::Reddit);
        assert_eq!(" psychology".parse::<GameMode>().unwrap(), GameMode::Psychology);
    }

    #[test]
    fn unknown_mode_lists_choices() {
        let err = "minimax".parse::<GameMode>().unwrap_err();
        assert!(err.to_string().contains("random, reddit, psychology"));
    }
}
