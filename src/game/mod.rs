use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use crate::app::Prefs;
use crate::basic::{Dir, GridDim, GridPoint};
use crate::program::Settings;

pub use step::{steer, tick};

mod step;

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Head first
    pub snake: VecDeque<GridPoint>,
    pub food: GridPoint,
    pub dir: Dir,
    pub tick_interval: Duration,
    pub score: u32,
    pub game_over: bool,
    pub grid_dim: GridDim,
    /// Side of the square board in pixels
    pub board_size: f32,
}

impl GameState {
    /// The state a game starts in, `settings` come from the program
    /// at the moment play is pressed
    pub fn new(prefs: &Prefs, settings: &Settings) -> Self {
        Self {
            snake: VecDeque::from([prefs.start_pos]),
            food: prefs.start_food,
            dir: prefs.start_dir,
            tick_interval: settings.tick_interval,
            score: 0,
            game_over: false,
            grid_dim: settings.grid_dim,
            board_size: prefs.board_size,
        }
    }

    pub fn head(&self) -> GridPoint {
        self.snake[0]
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    Wall,
    Itself,
}

impl Display for Collision {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => f.write_str("You hit a wall."),
            Collision::Itself => f.write_str("You hit yourself."),
        }
    }
}

/// What a single tick did
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TickOutcome {
    /// The game was already over
    Frozen,
    /// No MOVE_SNAKE block
    Idle,
    Moved,
    Ate { score: u32 },
    Crashed(Collision),
}
