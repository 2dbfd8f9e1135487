pub mod editor_mesh;
pub mod food_mesh;
pub mod grid_mesh;
pub mod overlay;
pub mod snake_mesh;
pub mod theme;
