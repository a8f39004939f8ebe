use serde::{Deserialize, Serialize};

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the cell value it leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player One",
            Player::Two => "Player Two",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::One.to_cell(), Cell::PlayerOne);
        assert_eq!(Player::Two.to_cell(), Cell::PlayerTwo);
        assert_eq!(Cell::PlayerTwo.player(), Some(Player::Two));
        assert_eq!(Cell::Empty.player(), None);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::One.name(), "Player One");
        assert_eq!(Player::Two.name(), "Player Two");
    }
}
