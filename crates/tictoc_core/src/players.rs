//! Display names for the two players.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Names shown for X and O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Builds names, falling back to "Player X"/"Player O" for blank input.
    #[instrument(skip_all)]
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: or_default(x.into(), Player::X),
            o: or_default(o.into(), Player::O),
        }
    }

    /// Name for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn or_default(name: String, player: Player) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        format!("Player {}", player)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_get_defaults() {
        let names = PlayerNames::new("", "   ");
        assert_eq!(names.name_of(Player::X), "Player X");
        assert_eq!(names.name_of(Player::O), "Player O");
    }

    #[test]
    fn test_names_are_trimmed() {
        let names = PlayerNames::new(" Ada ", "Grace");
        assert_eq!(names.name_of(Player::X), "Ada");
        assert_eq!(names.name_of(Player::O), "Grace");
    }
}
