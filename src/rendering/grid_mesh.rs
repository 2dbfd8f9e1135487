use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;
use num_integer::Integer;

use crate::basic::{GridDim, GridPoint, Point};
use crate::error::{ErrorConversion, Result};
use crate::rendering::theme::Theme;

/// Board background with a light checker pattern and optional grid lines,
/// drawn with the top-left corner at the origin
pub fn grid_mesh(
    grid_dim: GridDim,
    board_size: f32,
    draw_grid: bool,
    theme: &Theme,
    ctx: &Context,
) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    add_board(&mut builder, grid_dim, board_size, draw_grid, theme).with_trace_step("grid_mesh")?;
    Ok(Mesh::from_data(ctx, builder.build()))
}

fn add_board(
    builder: &mut MeshBuilder,
    grid_dim: GridDim,
    board_size: f32,
    draw_grid: bool,
    theme: &Theme,
) -> Result {
    let cell_side = grid_dim.cell_side(board_size);
    builder.rectangle(
        DrawMode::fill(),
        Rect::new(0., 0., board_size, board_size),
        *theme.board,
    )?;

    for cell in checker_cells(grid_dim) {
        let Point { x, y } = cell.to_cartesian(cell_side);
        builder.rectangle(DrawMode::fill(), Rect::new(x, y, cell_side, cell_side), *theme.checker)?;
    }

    if draw_grid {
        for i in 0..=grid_dim.0 {
            let d = i as f32 * cell_side;
            builder.line(
                &[Point { x: d, y: 0. }, Point { x: d, y: board_size }],
                theme.grid_thickness,
                *theme.grid,
            )?;
            builder.line(
                &[Point { x: 0., y: d }, Point { x: board_size, y: d }],
                theme.grid_thickness,
                *theme.grid,
            )?;
        }
    }
    Ok(())
}

fn checker_cells(grid_dim: GridDim) -> impl Iterator<Item = GridPoint> {
    let n = grid_dim.0.max(0);
    (0..n)
        .flat_map(move |y| (0..n).map(move |x| GridPoint { x, y }))
        .filter(|p| (p.x + p.y).is_odd())
}
