//! The block editor: where everything sits on screen, what a click hits,
//! and the edits a click or key performs on the program

use ggez::graphics::Rect;
use rand::Rng;
use tracing::debug;

use crate::app::session::Session;
use crate::app::Prefs;
use crate::basic::Point;
use crate::color::Color;
use crate::program::palette::{self, PALETTE};
use crate::program::{Action, BlockDef, BlockId, ParamError, ParamValue};

const MARGIN: f32 = 20.;
const ROW_HEIGHT: f32 = 28.;
const ROW_GAP: f32 = 4.;
const TITLE_HEIGHT: f32 = 40.;
const PALETTE_WIDTH: f32 = 240.;
const PROGRAM_WIDTH: f32 = 360.;
const BUTTON_WIDTH: f32 = 80.;
const BUTTON_HEIGHT: f32 = 30.;

/// Colors a color parameter cycles through
pub const SWATCHES: [&str; 8] = [
    "#4CAF50", "#F44336", "#2196F3", "#FFC107", "#9C27B0", "#00BCD4", "#FF9800", "#FFFFFF",
];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Button {
    Play,
    Stop,
    Reset,
}

impl Button {
    pub const ALL: [Self; 3] = [Button::Play, Button::Stop, Button::Reset];

    pub fn label(self) -> &'static str {
        match self {
            Button::Play => "Play",
            Button::Stop => "Stop",
            Button::Reset => "Reset",
        }
    }
}

pub enum PaletteRow {
    Header { name: &'static str, color: Color },
    Entry { def: &'static BlockDef, color: Color },
}

/// What is under the cursor
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Hit {
    PaletteEntry(&'static BlockDef),
    ProgramRow(usize),
    RemoveMarker(usize),
    Button(Button),
}

pub struct Layout {
    pub palette: Rect,
    pub program: Rect,
    pub board_origin: Point,
    pub board_size: f32,
    pub status_pos: Point,
}

impl Layout {
    pub fn new(prefs: &Prefs) -> Self {
        let height = prefs.window_dim.y - 2. * MARGIN;
        let palette = Rect::new(MARGIN, MARGIN, PALETTE_WIDTH, height);
        let program = Rect::new(palette.right() + MARGIN, MARGIN, PROGRAM_WIDTH, height);

        let preview_x = program.right() + MARGIN;
        Self {
            palette,
            program,
            status_pos: Point { x: preview_x, y: MARGIN + BUTTON_HEIGHT + 15. },
            board_origin: Point { x: preview_x, y: MARGIN + BUTTON_HEIGHT + 50. },
            board_size: prefs.board_size,
        }
    }

    fn row(panel: Rect, i: usize) -> Rect {
        Rect::new(
            panel.x + ROW_GAP * 2.,
            panel.y + TITLE_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_GAP),
            panel.w - ROW_GAP * 4.,
            ROW_HEIGHT,
        )
    }

    /// Rows that fit inside the panel are shown, the rest are cut off
    fn fits(panel: Rect, row: Rect) -> bool {
        row.bottom() <= panel.bottom()
    }

    pub fn palette_rows(&self) -> Vec<(Rect, PaletteRow)> {
        let rows = PALETTE.iter().flat_map(|section| {
            let header = PaletteRow::Header { name: section.name, color: section.color };
            let entries = section
                .defs
                .iter()
                .map(move |def| PaletteRow::Entry { def, color: section.color });
            std::iter::once(header).chain(entries)
        });

        rows.enumerate()
            .map(|(i, row)| (Self::row(self.palette, i), row))
            .take_while(|(rect, _)| Self::fits(self.palette, *rect))
            .collect()
    }

    /// Row rectangle of each program block in order
    pub fn program_rows(&self, len: usize) -> impl Iterator<Item = Rect> + '_ {
        (0..len)
            .map(move |i| Self::row(self.program, i))
            .take_while(move |rect| Self::fits(self.program, *rect))
    }

    /// Small square at the right end of a program row
    pub fn remove_marker(row: Rect) -> Rect {
        let side = ROW_HEIGHT - 2. * ROW_GAP;
        Rect::new(row.right() - side - ROW_GAP, row.y + ROW_GAP, side, side)
    }

    pub fn buttons(&self) -> impl Iterator<Item = (Button, Rect)> + '_ {
        Button::ALL.into_iter().enumerate().map(move |(i, button)| {
            let x = self.board_origin.x + i as f32 * (BUTTON_WIDTH + ROW_GAP * 2.);
            (button, Rect::new(x, MARGIN, BUTTON_WIDTH, BUTTON_HEIGHT))
        })
    }

    pub fn hit(&self, program_len: usize, point: Point) -> Option<Hit> {
        if let Some((button, _)) = self.buttons().find(|(_, rect)| rect.contains(point)) {
            return Some(Hit::Button(button));
        }

        for (rect, row) in self.palette_rows() {
            if let PaletteRow::Entry { def, .. } = row {
                if rect.contains(point) {
                    return Some(Hit::PaletteEntry(def));
                }
            }
        }

        for (i, rect) in self.program_rows(program_len).enumerate() {
            if Self::remove_marker(rect).contains(point) {
                return Some(Hit::RemoveMarker(i));
            }
            if rect.contains(point) {
                return Some(Hit::ProgramRow(i));
            }
        }
        None
    }
}

pub enum Clicked {
    Button(Button),
    /// The program changed, with a notification to show
    Edited(String),
    Selected(BlockId),
}

pub struct Editor {
    pub layout: Layout,
    selected: Option<BlockId>,
}

impl Editor {
    pub fn new(prefs: &Prefs) -> Self {
        Self { layout: Layout::new(prefs), selected: None }
    }

    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    pub fn click<R: Rng>(&mut self, session: &mut Session<R>, point: Point) -> Option<Clicked> {
        let hit = self.layout.hit(session.program().len(), point)?;
        debug!("click at {:?} hit {:?}", point, hit);

        match hit {
            Hit::Button(button) => Some(Clicked::Button(button)),
            Hit::PaletteEntry(def) => {
                let id = session.add_block(def);
                self.selected = Some(id);
                Some(Clicked::Edited(format!("Added {}", def.label)))
            }
            Hit::ProgramRow(i) => {
                let id = session.program().blocks()[i].id;
                self.selected = Some(id);
                Some(Clicked::Selected(id))
            }
            Hit::RemoveMarker(i) => {
                let id = session.program().blocks()[i].id;
                self.remove(session, id)
            }
        }
    }

    fn remove<R: Rng>(&mut self, session: &mut Session<R>, id: BlockId) -> Option<Clicked> {
        let label = session.program().get(id)?.def.label;
        if !session.remove_block(id) {
            return None;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(Clicked::Edited(format!("Removed {}", label)))
    }

    pub fn remove_selected<R: Rng>(&mut self, session: &mut Session<R>) -> Option<String> {
        match self.remove(session, self.selected?)? {
            Clicked::Edited(message) => Some(message),
            _ => None,
        }
    }

    /// Moves the selected block one row up (`-1`) or down (`1`)
    pub fn move_selected<R: Rng>(&mut self, session: &mut Session<R>, delta: isize) -> bool {
        let position = match self.selected.and_then(|id| session.program().position(id)) {
            Some(position) => position,
            None => return false,
        };
        match position.checked_add_signed(delta) {
            Some(to) => session.move_block(position, to),
            None => false,
        }
    }

    /// Nudges the selected block's number parameter, values stay at least 1
    pub fn step_selected<R: Rng>(
        &mut self,
        session: &mut Session<R>,
        sign: f64,
    ) -> Result<Option<String>, ParamError> {
        let block = match self.selected.and_then(|id| session.program().get(id)) {
            Some(block) => block,
            None => return Ok(None),
        };
        let param = match block.def.params.iter().find(|p| p.value.as_number().is_some()) {
            Some(param) => param,
            None => return Ok(None),
        };

        let step = match block.action() {
            Some(Action::SetSpeed) => 10.,
            _ => 1.,
        };
        let current = param.value.as_number().unwrap_or_default();
        let value = (current + sign * step).max(1.);
        let (id, name) = (block.id, param.name);

        session.set_param(id, name, ParamValue::Number(value))?;
        Ok(Some(format!("{} = {}", name, value)))
    }

    /// Moves the selected block's color parameter to the next swatch
    pub fn cycle_color<R: Rng>(&mut self, session: &mut Session<R>) -> Result<Option<String>, ParamError> {
        let block = match self.selected.and_then(|id| session.program().get(id)) {
            Some(block) => block,
            None => return Ok(None),
        };
        let param = match block.param("color") {
            Some(param) => param,
            None => return Ok(None),
        };

        let current = param.value.as_str().unwrap_or_default();
        let next = SWATCHES
            .iter()
            .position(|swatch| swatch.eq_ignore_ascii_case(current))
            .map_or(0, |i| (i + 1) % SWATCHES.len());
        let id = block.id;

        session.set_param(id, "color", ParamValue::Str(SWATCHES[next].to_string()))?;
        Ok(Some(format!("color = {}", SWATCHES[next])))
    }
}

/// Label of the palette entry or program row, drawn with the section color
pub fn row_color(def: &BlockDef) -> Color {
    palette::section_color(def.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::palette::def_for;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Editor, Session<StdRng>) {
        let prefs = Prefs::default();
        let editor = Editor::new(&prefs);
        let (session, _latest) = Session::with_rng(prefs, StdRng::seed_from_u64(0));
        (editor, session)
    }

    fn center(rect: Rect) -> Point {
        Point { x: rect.x + rect.w / 2., y: rect.y + rect.h / 2. }
    }

    fn palette_entry(editor: &Editor, action: Action) -> Point {
        editor
            .layout
            .palette_rows()
            .into_iter()
            .find_map(|(rect, row)| match row {
                PaletteRow::Entry { def, .. } if def.action() == Some(action) => Some(center(rect)),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn every_palette_entry_is_shown() {
        let (editor, _) = setup();
        let rows = editor.layout.palette_rows();
        let entries = rows.iter().filter(|(_, row)| matches!(row, PaletteRow::Entry { .. }));
        assert_eq!(entries.count(), Action::ALL.len());
        assert_eq!(rows.len(), Action::ALL.len() + PALETTE.len());
    }

    #[test]
    fn headers_are_not_clickable() {
        let (editor, _) = setup();
        let (header, _) = editor.layout.palette_rows().into_iter().next().unwrap();
        assert_eq!(editor.layout.hit(0, center(header)), None);
    }

    #[test]
    fn hits_buttons() {
        let (editor, _) = setup();
        for (button, rect) in editor.layout.buttons() {
            assert_eq!(editor.layout.hit(0, center(rect)), Some(Hit::Button(button)));
        }
        assert_eq!(editor.layout.hit(0, Point::ZERO), None);
    }

    #[test]
    fn clicking_palette_appends_and_selects() {
        let (mut editor, mut session) = setup();
        let point = palette_entry(&editor, Action::MoveSnake);
        let clicked = editor.click(&mut session, point);
        assert!(matches!(clicked, Some(Clicked::Edited(ref m)) if m == "Added Move snake"));

        let point = palette_entry(&editor, Action::CheckWall);
        editor.click(&mut session, point);
        let program = session.program();
        assert_eq!(program.len(), 2);
        assert_eq!(program.blocks()[1].action(), Some(Action::CheckWall));
        assert_eq!(editor.selected(), Some(program.blocks()[1].id));
    }

    #[test]
    fn remove_marker_removes_row() {
        let (mut editor, mut session) = setup();
        session.add_block(def_for(Action::MoveSnake));
        session.add_block(def_for(Action::GrowSnake));
        let rows: Vec<_> = editor.layout.program_rows(2).collect();

        let row = rows[0];
        assert_eq!(editor.layout.hit(2, center(row)), Some(Hit::ProgramRow(0)));
        let marker = center(Layout::remove_marker(row));
        assert_eq!(editor.layout.hit(2, marker), Some(Hit::RemoveMarker(0)));

        editor.click(&mut session, marker);
        assert_eq!(session.program().len(), 1);
        assert_eq!(session.program().blocks()[0].action(), Some(Action::GrowSnake));
    }

    #[test]
    fn selection_moves_and_removes() {
        let (mut editor, mut session) = setup();
        session.add_block(def_for(Action::MoveSnake));
        session.add_block(def_for(Action::GrowSnake));
        assert!(!editor.move_selected(&mut session, 1));
        assert_eq!(editor.remove_selected(&mut session), None);

        let row = editor.layout.program_rows(2).next().unwrap();
        editor.click(&mut session, center(row));
        assert!(!editor.move_selected(&mut session, -1));
        assert!(editor.move_selected(&mut session, 1));
        assert_eq!(session.program().blocks()[1].action(), Some(Action::MoveSnake));
        assert!(!editor.move_selected(&mut session, 1));

        assert_eq!(editor.remove_selected(&mut session), Some("Removed Move snake".to_string()));
        assert_eq!(editor.selected(), None);
        assert_eq!(session.program().len(), 1);
    }

    #[test]
    fn steps_number_parameters() {
        let (mut editor, mut session) = setup();
        let point = palette_entry(&editor, Action::SetSpeed);
        editor.click(&mut session, point);

        assert_eq!(editor.step_selected(&mut session, 1.).unwrap(), Some("speed = 110".to_string()));
        let speed = |session: &Session<StdRng>| session.program().blocks()[0].param("speed").unwrap().value.clone();
        assert_eq!(speed(&session), ParamValue::Number(110.));

        for _ in 0..20 {
            editor.step_selected(&mut session, -1.).unwrap();
        }
        assert_eq!(speed(&session), ParamValue::Number(1.));
    }

    #[test]
    fn stepping_without_number_does_nothing() {
        let (mut editor, mut session) = setup();
        assert_eq!(editor.step_selected(&mut session, 1.).unwrap(), None);
        let point = palette_entry(&editor, Action::MoveSnake);
        editor.click(&mut session, point);
        assert_eq!(editor.step_selected(&mut session, 1.).unwrap(), None);
    }

    #[test]
    fn cycles_color_swatches() {
        let (mut editor, mut session) = setup();
        let point = palette_entry(&editor, Action::SetFoodColor);
        editor.click(&mut session, point);

        // default food color is the second swatch
        assert_eq!(editor.cycle_color(&mut session).unwrap(), Some("color = #2196F3".to_string()));
        assert_eq!(session.settings().food_color, Color::from_rgb(0x21, 0x96, 0xF3));

        for _ in 0..SWATCHES.len() {
            editor.cycle_color(&mut session).unwrap();
        }
        assert_eq!(session.settings().food_color, Color::from_rgb(0x21, 0x96, 0xF3));
    }
}
