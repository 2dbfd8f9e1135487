use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::basic::{Dir, GridPoint, Point};
use crate::color::Color;
use crate::error::{ErrorConversion, Result};
use crate::game::GameState;
use crate::rendering::theme::Theme;

/// Head at full opacity, body slightly transparent, two eyes
/// looking the way the snake is going
pub fn snake_mesh(state: &GameState, color: Color, theme: &Theme, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    add_snake(&mut builder, state, color, theme).with_trace_step("snake_mesh")?;
    Ok(Mesh::from_data(ctx, builder.build()))
}

fn add_snake(builder: &mut MeshBuilder, state: &GameState, color: Color, theme: &Theme) -> Result {
    let cell_side = state.grid_dim.cell_side(state.board_size);
    let body_color = color.with_alpha(color.a * theme.body_alpha);

    // tail first so the head ends up on top
    for (i, segment) in state.snake.iter().enumerate().rev() {
        let Point { x, y } = segment.to_cartesian(cell_side);
        let color = if i == 0 { color } else { body_color };
        builder.rectangle(DrawMode::fill(), Rect::new(x, y, cell_side, cell_side), *color)?;
    }

    for eye in eyes(state.head(), state.dir, cell_side) {
        builder.rectangle(DrawMode::fill(), eye, *theme.eyes)?;
    }
    Ok(())
}

/// Both eyes sit on the leading edge of the head
pub fn eyes(head: GridPoint, dir: Dir, cell_side: f32) -> [Rect; 2] {
    let size = cell_side / 5.;
    let offset = cell_side / 3.;
    let Point { x, y } = head.to_cartesian(cell_side);
    let near = offset;
    let far = cell_side - offset - size;

    let [(x1, y1), (x2, y2)] = match dir {
        Dir::U => [(near, near), (far, near)],
        Dir::D => [(near, far), (far, far)],
        Dir::L => [(near, near), (near, far)],
        Dir::R => [(far, near), (far, far)],
    };
    [
        Rect::new(x + x1, y + y1, size, size),
        Rect::new(x + x2, y + y2, size, size),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn eyes_face_the_direction_of_travel() {
        let head = GridPoint { x: 2, y: 1 };
        let side = 30.;
        // the head cell spans x 60..90, y 30..60; eyes are 6px, 10px in from an edge
        let [a, b] = eyes(head, Dir::R, side);
        assert!(approx(a.x, 74.) && approx(b.x, 74.));
        assert!(approx(a.y, 40.) && approx(b.y, 44.));

        let [a, b] = eyes(head, Dir::L, side);
        assert!(approx(a.x, 70.) && approx(b.x, 70.));

        let [a, b] = eyes(head, Dir::U, side);
        assert!(approx(a.y, 40.) && approx(b.y, 40.));
        assert!(a.x < b.x);

        let [a, b] = eyes(head, Dir::D, side);
        assert!(approx(a.y, 44.) && approx(b.y, 44.));
        assert!(approx(a.w, 6.) && approx(b.h, 6.));
    }
}
