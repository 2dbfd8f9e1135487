use rand::Rng;
use tracing::{debug, warn};

use crate::basic::board::{get_occupied_cells, random_free_spot};
use crate::basic::Dir;
use crate::game::{Collision, GameState, TickOutcome};
use crate::program::{Action, Capabilities};

/// Advance the game by one tick, every sub-step only runs if the
/// block enabling it is in `caps`
pub fn tick(state: &GameState, caps: Capabilities, rng: &mut impl Rng) -> (GameState, TickOutcome) {
    if state.game_over {
        return (state.clone(), TickOutcome::Frozen);
    }
    if !caps.has(Action::MoveSnake) {
        return (state.clone(), TickOutcome::Idle);
    }

    let new_head = state.head().translate(state.dir);

    // collisions are checked against the body before it moves,
    // wall first so that it wins when both happen at once
    let collision = if caps.has(Action::CheckWall) && !state.grid_dim.contains(new_head) {
        Some(Collision::Wall)
    } else if caps.has(Action::CheckSelf) && state.snake.contains(&new_head) {
        Some(Collision::Itself)
    } else {
        None
    };

    if let Some(collision) = collision {
        if caps.has(Action::GameOver) {
            let mut next = state.clone();
            next.game_over = true;
            return (next, TickOutcome::Crashed(collision));
        }
        debug!("{:?} collision at {:?} ignored without GAME_OVER", collision, new_head);
    }

    let mut next = state.clone();
    next.snake.push_front(new_head);

    let ate = caps.has(Action::CheckFood) && new_head == state.food;
    if ate {
        let occupied = get_occupied_cells(&next.snake, next.grid_dim);
        match random_free_spot(&occupied, next.grid_dim, rng) {
            Some(food) => next.food = food,
            None => warn!("no free cell left for food, leaving it at {:?}", next.food),
        }
        next.score += 1;
    }

    if !(ate && caps.has(Action::GrowSnake)) {
        next.snake.pop_back();
    }

    let outcome = if ate {
        TickOutcome::Ate { score: next.score }
    } else {
        TickOutcome::Moved
    };
    (next, outcome)
}

/// Apply a direction key, returns whether the direction changed.
/// Turning straight back into the neck is refused.
pub fn steer(state: &mut GameState, caps: Capabilities, dir: Dir) -> bool {
    if state.game_over || !caps.can_steer() {
        return false;
    }
    if dir == state.dir || dir.is_opposite(state.dir) {
        return false;
    }
    state.dir = dir;
    true
}
