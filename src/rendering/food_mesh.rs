use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::Context;

use crate::basic::{GridDim, GridPoint, Point};
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};

/// A circle filling the food cell
pub fn food_mesh(
    food: GridPoint,
    grid_dim: GridDim,
    board_size: f32,
    color: Color,
    ctx: &Context,
) -> Result<Mesh> {
    let cell_side = grid_dim.cell_side(board_size);
    let center = food.to_cartesian(cell_side) + Point::square(cell_side / 2.);

    let mut builder = MeshBuilder::new();
    builder
        .circle(DrawMode::fill(), center, cell_side / 2., 0.1, *color)
        .map_err(Error::from)
        .with_trace_step("food_mesh")?;
    Ok(Mesh::from_data(ctx, builder.build()))
}
