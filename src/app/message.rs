use std::time::{Duration, Instant};

use ggez::graphics::{Canvas, DrawParam, PxScale, Text, TextLayout};
use ggez::Context;

use crate::basic::Point;
use crate::color::Color;
use crate::support::text_layout::TextLayoutExtension;

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Line above the preview: instructions, score, game over reason
    Status,
    /// Temporary feedback for editor actions
    Notification,
}

#[derive(Copy, Clone, Debug)]
pub enum Position {
    /// Top left corner of the text
    At(Point),
    TopRight,
}

pub struct Message {
    pub text: String,
    pub position: Position,
    pub margin: f32,
    pub font_size: f32,
    pub color: Color,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 20.;
    pub const DEFAULT_FONT_SIZE: f32 = 20.;
    const FADE: Duration = Duration::from_millis(200);

    pub fn new(text: String, position: Position, color: Color, now: Instant, duration: Option<Duration>) -> Self {
        Self {
            text,
            position,
            margin: Self::DEFAULT_MARGIN,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
            disappear: duration.map(|d| now + d),
        }
    }

    /// None once the message has reached its end of life
    pub fn alpha(&self, now: Instant) -> Option<f32> {
        let deadline = match self.disappear {
            None => return Some(1.),
            Some(deadline) => deadline,
        };
        let time_left = deadline.checked_duration_since(now).filter(|d| !d.is_zero())?;
        Some((time_left.as_secs_f32() / Self::FADE.as_secs_f32()).min(1.))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.alpha(now).is_none()
    }

    pub fn draw(&self, ctx: &Context, canvas: &mut Canvas, now: Instant) {
        let Some(alpha) = self.alpha(now) else {
            return;
        };
        let (width, _) = ctx.gfx.drawable_size();

        let (dest, layout) = match self.position {
            Position::At(dest) => (dest, TextLayout::top_left()),
            Position::TopRight => (
                Point { x: width - self.margin, y: self.margin },
                TextLayout::top_right(),
            ),
        };

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        let color = self.color.with_alpha(self.color.a * alpha);
        canvas.draw(&text, DrawParam::default().dest(dest).color(color));
    }
}
