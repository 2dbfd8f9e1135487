use ggez::graphics;

use crate::color::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color(graphics::Color::new($lightness, $lightness, $lightness, 1.))
    };
}

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color(graphics::Color::new(r, g, b, 1.))
}

/// Colors of everything that isn't set by a block
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub panel_border: Color,
    pub text: Color,
    pub faint_text: Color,
    pub selection: Color,

    pub board: Color,
    pub checker: Color,
    pub grid: Color,
    pub grid_thickness: f32,
    pub eyes: Color,

    /// Alpha is the final opacity after fading in
    pub overlay: Color,

    /// Body segments are drawn slightly transparent
    pub body_alpha: f32,
}

impl Theme {
    pub const DEFAULT: Self = Self {
        background: gray!(0.12),
        panel: gray!(0.18),
        panel_border: gray!(0.3),
        text: gray!(0.95),
        faint_text: gray!(0.6),
        selection: rgb(1., 0.84, 0.25),

        board: gray!(1.),
        checker: gray!(0.97),
        grid: rgb(0.878, 0.878, 0.878),
        grid_thickness: 0.5,
        eyes: gray!(1.),

        overlay: Color(graphics::Color::new(0., 0., 0., 0.7)),

        body_alpha: 0.8,
    };
}
