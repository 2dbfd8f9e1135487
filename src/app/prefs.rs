use std::time::Duration;

use crate::basic::{Dir, GridDim, GridPoint, Point};
use crate::color::Color;

pub struct Prefs {
    pub window_dim: Point,

    /// Side of the square preview board in pixels
    pub board_size: f32,
    pub tick_interval: Duration,
    pub grid_dim: GridDim,

    pub start_pos: GridPoint,
    pub start_food: GridPoint,
    pub start_dir: Dir,

    pub snake_color: Color,
    pub food_color: Color,

    pub draw_grid: bool,
    pub message_duration: Duration,
    pub overlay_fade: Duration,

    /// Upper bound on ticks performed in a single update after a stall,
    /// missed ticks beyond this are dropped
    pub max_catch_up: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_dim: Point { x: 1100., y: 700. },

            board_size: 400.,
            tick_interval: Duration::from_millis(100),
            grid_dim: GridDim(20),

            start_pos: GridPoint { x: 10, y: 10 },
            start_food: GridPoint { x: 5, y: 5 },
            start_dir: Dir::R,

            snake_color: Color::from_rgb(0x4C, 0xAF, 0x50),
            food_color: Color::from_rgb(0xF4, 0x43, 0x36),

            draw_grid: true,
            message_duration: Duration::from_secs(2),
            overlay_fade: Duration::from_millis(400),

            max_catch_up: 3,
        }
    }
}

// builder
impl Prefs {
    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn max_catch_up(mut self, max_catch_up: usize) -> Self {
        self.max_catch_up = max_catch_up;
        self
    }
}
