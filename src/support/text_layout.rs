use ggez::graphics::{TextAlign, TextLayout};

/// Layouts ggez only provides as struct literals
pub trait TextLayoutExtension {
    fn top_right() -> Self;
    fn center_left() -> Self;
}

impl TextLayoutExtension for TextLayout {
    fn top_right() -> Self {
        TextLayout {
            h_align: TextAlign::End,
            v_align: TextAlign::Begin,
        }
    }

    fn center_left() -> Self {
        TextLayout {
            h_align: TextAlign::Begin,
            v_align: TextAlign::Middle,
        }
    }
}
