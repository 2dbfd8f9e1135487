use std::time::Duration;

use tracing::warn;

use crate::app::Prefs;
use crate::basic::GridDim;
use crate::color::Color;
use crate::program::action::Action;
use crate::program::block::Block;
use crate::program::Program;

/// Values set by setting blocks, anything not set keeps the
/// value from [`Prefs`]. The last block of a kind wins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    pub tick_interval: Duration,
    pub grid_dim: GridDim,
    pub snake_color: Color,
    pub food_color: Color,
}

impl Settings {
    pub fn defaults(prefs: &Prefs) -> Self {
        Self {
            tick_interval: prefs.tick_interval,
            grid_dim: prefs.grid_dim,
            snake_color: prefs.snake_color,
            food_color: prefs.food_color,
        }
    }

    pub fn from_program(program: &Program, prefs: &Prefs) -> Self {
        let mut settings = Self::defaults(prefs);
        for block in program.blocks() {
            match block.action() {
                Some(Action::SetSpeed) => {
                    if let Some(ms) = positive_number(block, "speed") {
                        settings.tick_interval = Duration::from_millis(ms.round().max(1.) as u64);
                    }
                }
                Some(Action::SetGridSize) => {
                    if let Some(size) = positive_number(block, "size") {
                        settings.grid_dim = GridDim(size.round().max(1.) as i32);
                    }
                }
                Some(Action::SetSnakeColor) => {
                    if let Some(color) = color(block) {
                        settings.snake_color = color;
                    }
                }
                Some(Action::SetFoodColor) => {
                    if let Some(color) = color(block) {
                        settings.food_color = color;
                    }
                }
                _ => {}
            }
        }
        settings
    }
}

fn positive_number(block: &Block, name: &str) -> Option<f64> {
    let value = block.param(name)?.value.as_number()?;
    if value.is_finite() && value > 0. {
        Some(value)
    } else {
        warn!("{}: ignoring {} = {}", block.id, name, value);
        None
    }
}

fn color(block: &Block) -> Option<Color> {
    let text = block.param("color")?.value.as_str()?;
    text.parse()
        .map_err(|e| warn!("{}: {}", block.id, e))
        .ok()
}
