use static_assertions::const_assert;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use Action::*;

/// The closed set of behaviors a block can enable
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Action {
    GameStart,
    KeyPress,
    MoveSnake,
    ChangeDirection,
    SetSpeed,
    CheckFood,
    GrowSnake,
    CheckWall,
    CheckSelf,
    GameOver,
    SetSnakeColor,
    SetFoodColor,
    SetGridSize,
}

const_assert!(Action::ALL.len() <= u16::BITS as usize);

impl Action {
    pub const ALL: [Action; 13] = [
        GameStart,
        KeyPress,
        MoveSnake,
        ChangeDirection,
        SetSpeed,
        CheckFood,
        GrowSnake,
        CheckWall,
        CheckSelf,
        GameOver,
        SetSnakeColor,
        SetFoodColor,
        SetGridSize,
    ];

    pub fn code(self) -> &'static str {
        match self {
            GameStart => "GAME_START",
            KeyPress => "KEY_PRESS",
            MoveSnake => "MOVE_SNAKE",
            ChangeDirection => "CHANGE_DIRECTION",
            SetSpeed => "SET_SPEED",
            CheckFood => "CHECK_FOOD",
            GrowSnake => "GROW_SNAKE",
            CheckWall => "CHECK_WALL",
            CheckSelf => "CHECK_SELF",
            GameOver => "GAME_OVER",
            SetSnakeColor => "SET_SNAKE_COLOR",
            SetFoodColor => "SET_FOOD_COLOR",
            SetGridSize => "SET_GRID_SIZE",
        }
    }

    /// Bit in a [`super::Capabilities`] set
    pub(super) fn bit(self) -> u16 {
        1 << self as u8
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
pub struct UnknownAction {
    pub code: String,
}

impl Display for UnknownAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action code {:?}", self.code)
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.code() == code)
            .ok_or_else(|| UnknownAction { code: code.to_string() })
    }
}

#[test]
fn test_codes_are_distinct() {
    use itertools::Itertools;
    assert!(Action::ALL.iter().map(|a| a.code()).all_unique());
    assert!(Action::ALL.iter().map(|a| a.bit()).all_unique());
}

#[test]
fn test_parse_codes() {
    assert_eq!("MOVE_SNAKE".parse::<Action>().unwrap(), MoveSnake);
    assert_eq!("SET_GRID_SIZE".parse::<Action>().unwrap(), SetGridSize);
    // codes are case sensitive, like the palette definitions
    assert!("move_snake".parse::<Action>().is_err());
    assert!("JUMP".parse::<Action>().is_err());
}
