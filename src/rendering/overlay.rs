use std::time::Duration;

use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, PxScale, Rect, Text, TextAlign, TextLayout};
use ggez::Context;

use crate::basic::Point;
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::theme::Theme;

/// How far the overlay has faded in, from 0 to 1
pub fn fade_in(since_game_over: Duration, fade: Duration) -> f32 {
    if fade.is_zero() {
        return 1.;
    }
    let linear = (since_game_over.as_secs_f32() / fade.as_secs_f32()).clamp(0., 1.);
    ezing::quad_out(linear)
}

/// Darkens the board and shows the final score
pub fn draw_game_over(
    ctx: &Context,
    canvas: &mut Canvas,
    origin: Point,
    board_size: f32,
    score: u32,
    progress: f32,
    theme: &Theme,
) -> Result {
    let shade = theme.overlay.with_alpha(theme.overlay.a * progress);
    let rect = Mesh::new_rectangle(
        ctx,
        DrawMode::fill(),
        Rect::new(0., 0., board_size, board_size),
        *shade,
    )
    .map_err(Error::from)
    .with_trace_step("draw_game_over")?;
    canvas.draw(&rect, DrawParam::default().dest(origin));

    let center = origin + Point::square(board_size / 2.);
    let text_color = theme.text.with_alpha(progress);
    let lines = [
        ("GAME OVER".to_string(), 30., -30.),
        (format!("Score: {}", score), 20., 10.),
        ("Press Play to restart".to_string(), 20., 40.),
    ];
    for (line, size, dy) in lines {
        let mut text = Text::new(line);
        text.set_scale(PxScale::from(size)).set_layout(TextLayout {
            h_align: TextAlign::Middle,
            v_align: TextAlign::Middle,
        });
        let dest = center + Point { x: 0., y: dy };
        canvas.draw(&text, DrawParam::default().dest(dest).color(text_color));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_in_quickly_then_stays() {
        let fade = Duration::from_millis(400);
        assert_eq!(fade_in(Duration::ZERO, fade), 0.);
        let half = fade_in(Duration::from_millis(200), fade);
        assert!(half > 0.5 && half < 1.);
        assert_eq!(fade_in(Duration::from_millis(400), fade), 1.);
        assert_eq!(fade_in(Duration::from_secs(10), fade), 1.);
        assert_eq!(fade_in(Duration::from_secs(1), Duration::ZERO), 1.);
    }
}
