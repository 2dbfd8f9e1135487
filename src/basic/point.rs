use ggez::mint::Point2;

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2<f32>> for Point {
    fn from(Point2 { x, y }: Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl Point {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }
}
