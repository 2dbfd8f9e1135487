use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, PxScale, Rect, Text, TextLayout};
use ggez::Context;
use rand::Rng;

use crate::app::control::State;
use crate::app::editor::{row_color, Button, Editor, Layout, PaletteRow};
use crate::app::session::Session;
use crate::basic::Point;
use crate::error::{ErrorConversion, Result};
use crate::rendering::theme::Theme;
use crate::support::text_layout::TextLayoutExtension;

const FONT_SIZE: f32 = 16.;
const TITLE_SIZE: f32 = 20.;

/// Palette, program list and play controls
pub fn draw_editor<R: Rng>(
    ctx: &Context,
    canvas: &mut Canvas,
    editor: &Editor,
    session: &Session<R>,
    theme: &Theme,
) -> Result {
    let mut builder = MeshBuilder::new();
    add_shapes(&mut builder, editor, session, theme).with_trace_step("draw_editor")?;
    canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());

    let layout = &editor.layout;
    let mut texts: Vec<(String, Point, f32)> = vec![
        ("Blocks".to_string(), title_pos(layout.palette), TITLE_SIZE),
        ("Program".to_string(), title_pos(layout.program), TITLE_SIZE),
    ];

    for (rect, row) in layout.palette_rows() {
        let text = match row {
            PaletteRow::Header { name, .. } => name.to_uppercase(),
            PaletteRow::Entry { def, .. } => format!("+ {}", def.summary()),
        };
        texts.push((text, row_text_pos(rect), FONT_SIZE));
    }

    let blocks = session.program().blocks();
    if blocks.is_empty() {
        let pos = row_text_pos(layout.program_rows(1).next().unwrap_or(layout.program));
        texts.push(("Click a block to add it".to_string(), pos, FONT_SIZE));
    }
    for (rect, block) in layout.program_rows(blocks.len()).zip(blocks) {
        texts.push((block.def.summary(), row_text_pos(rect), FONT_SIZE));
        let marker = Layout::remove_marker(rect);
        texts.push(("x".to_string(), Point { x: marker.x + 6., y: marker.y + marker.h / 2. }, FONT_SIZE));
    }

    for (button, rect) in layout.buttons() {
        texts.push((button.label().to_string(), row_text_pos(rect) + Point { x: 8., y: 0. }, FONT_SIZE));
    }

    for (string, dest, size) in texts {
        let mut text = Text::new(string);
        text.set_scale(PxScale::from(size)).set_layout(TextLayout::center_left());
        canvas.draw(&text, DrawParam::default().dest(dest).color(theme.text));
    }
    Ok(())
}

fn add_shapes<R: Rng>(
    builder: &mut MeshBuilder,
    editor: &Editor,
    session: &Session<R>,
    theme: &Theme,
) -> Result {
    let layout = &editor.layout;
    for panel in [layout.palette, layout.program] {
        builder.rectangle(DrawMode::fill(), panel, *theme.panel)?;
        builder.rectangle(DrawMode::stroke(1.), panel, *theme.panel_border)?;
    }

    for (rect, row) in layout.palette_rows() {
        if let PaletteRow::Entry { color, .. } = row {
            builder.rectangle(DrawMode::fill(), rect, *color.shade(0.8))?;
        }
    }

    let blocks = session.program().blocks();
    for (rect, block) in layout.program_rows(blocks.len()).zip(blocks) {
        builder.rectangle(DrawMode::fill(), rect, *row_color(&block.def).shade(0.7))?;
        builder.rectangle(DrawMode::fill(), Layout::remove_marker(rect), *theme.panel)?;
        if editor.selected() == Some(block.id) {
            builder.rectangle(DrawMode::stroke(2.), rect, *theme.selection)?;
        }
    }

    let active = active_button(session.state());
    for (button, rect) in layout.buttons() {
        let color = if active == Some(button) { theme.selection } else { theme.panel_border };
        builder.rectangle(DrawMode::fill(), rect, *color)?;
    }
    Ok(())
}

/// The button that would do something useful right now
fn active_button(state: State) -> Option<Button> {
    match state {
        State::Idle | State::GameOver => Some(Button::Play),
        State::Playing => Some(Button::Stop),
    }
}

fn title_pos(panel: Rect) -> Point {
    Point { x: panel.x + 10., y: panel.y + 20. }
}

fn row_text_pos(row: Rect) -> Point {
    Point { x: row.x + 8., y: row.y + row.h / 2. }
}
