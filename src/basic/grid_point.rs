use super::dir::Dir;
use crate::basic::Point;
use std::fmt::{Debug, Error, Formatter};

/// A cell on the square board, (0, 0) is the top-left corner
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        let (dx, dy) = dir.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Top-left corner of the cell in pixels relative to the board origin
    pub fn to_cartesian(self, cell_side: f32) -> Point {
        Point {
            x: self.x as f32 * cell_side,
            y: self.y as f32 * cell_side,
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side length of the square board in cells
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridDim(pub i32);

impl GridDim {
    pub fn contains(self, point: GridPoint) -> bool {
        (0..self.0).contains(&point.x) && (0..self.0).contains(&point.y)
    }

    pub fn cell_count(self) -> usize {
        (self.0.max(0) as usize).pow(2)
    }

    pub fn cell_side(self, board_size: f32) -> f32 {
        board_size / self.0 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_follows_dir() {
        let p = GridPoint { x: 10, y: 10 };
        assert_eq!(p.translate(Dir::R), GridPoint { x: 11, y: 10 });
        assert_eq!(p.translate(Dir::L), GridPoint { x: 9, y: 10 });
        assert_eq!(p.translate(Dir::U), GridPoint { x: 10, y: 9 });
        assert_eq!(p.translate(Dir::D), GridPoint { x: 10, y: 11 });
    }

    #[test]
    fn contains_is_half_open() {
        let dim = GridDim(20);
        assert!(dim.contains(GridPoint { x: 0, y: 0 }));
        assert!(dim.contains(GridPoint { x: 19, y: 19 }));
        assert!(!dim.contains(GridPoint { x: -1, y: 5 }));
        assert!(!dim.contains(GridPoint { x: 5, y: 20 }));
        assert!(!dim.contains(GridPoint { x: 20, y: 0 }));
    }
}
