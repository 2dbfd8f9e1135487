use std::collections::HashMap;
use std::time::Instant;

use ggez::event::{EventHandler, MouseButton};
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;
use tracing::{debug, warn};

use crate::app::control::State;
use crate::app::editor::{Button, Clicked, Editor};
use crate::app::message::{Message, MessageID, Position};
use crate::app::session::{Session, Status};
use crate::app::snapshot::Latest;
use crate::basic::{Dir, GridDim};
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::GameState;
use crate::program::ParamError;
use crate::rendering::editor_mesh::draw_editor;
use crate::rendering::food_mesh::food_mesh;
use crate::rendering::grid_mesh::grid_mesh;
use crate::rendering::overlay::{draw_game_over, fade_in};
use crate::rendering::snake_mesh::snake_mesh;
use crate::rendering::theme::Theme;

pub use prefs::Prefs;

pub mod control;
pub mod editor;
pub mod message;
mod prefs;
pub mod session;
pub mod snapshot;

pub struct App {
    session: Session,
    latest: Latest,
    editor: Editor,

    theme: Theme,
    draw_grid: bool,
    grid_mesh: Option<(GridDim, Mesh)>,

    messages: HashMap<MessageID, Message>,
    shown_status: Option<Status>,
}

impl App {
    pub fn new(prefs: Prefs) -> Self {
        let editor = Editor::new(&prefs);
        let draw_grid = prefs.draw_grid;
        let (session, latest) = Session::new(prefs);
        Self {
            session,
            latest,
            editor,
            theme: Theme::DEFAULT,
            draw_grid,
            grid_mesh: None,
            messages: HashMap::new(),
            shown_status: None,
        }
    }

    /// Display a notification message in the top-right corner,
    /// overwriting any previous notification
    fn display_notification<S: ToString>(&mut self, text: S, now: Instant) {
        self.messages.insert(
            MessageID::Notification,
            Message::new(
                text.to_string(),
                Position::TopRight,
                self.theme.text,
                now,
                Some(self.session.prefs().message_duration),
            ),
        );
    }

    fn sync_status(&mut self) {
        let status = self.session.status();
        if self.shown_status == Some(status) {
            return;
        }
        self.shown_status = Some(status);

        let color = match status {
            Status::GameOver(_) => Color::RED,
            _ => self.theme.text,
        };
        let pos = Position::At(self.editor.layout.status_pos);
        self.messages.insert(
            MessageID::Status,
            Message::new(status.to_string(), pos, color, Instant::now(), None),
        );
    }

    fn press(&mut self, button: Button, now: Instant) {
        match button {
            Button::Play => {
                self.session.play(now);
            }
            Button::Stop => {
                self.session.stop();
            }
            Button::Reset => self.session.reset(now),
        }
    }

    fn toggle_play(&mut self, now: Instant) {
        match self.session.state() {
            State::Playing => self.press(Button::Stop, now),
            State::Idle | State::GameOver => self.press(Button::Play, now),
        }
    }

    fn draw_preview(&mut self, ctx: &Context, canvas: &mut Canvas, now: Instant) -> Result {
        let origin = self.editor.layout.board_origin;
        let board_size = self.editor.layout.board_size;
        let state: Option<GameState> = self.latest.get().cloned();
        let grid_dim = state
            .as_ref()
            .map_or(self.session.settings().grid_dim, |state| state.grid_dim);

        let cached = matches!(&self.grid_mesh, Some((dim, _)) if *dim == grid_dim);
        if !cached {
            let mesh = grid_mesh(grid_dim, board_size, self.draw_grid, &self.theme, ctx)?;
            self.grid_mesh = Some((grid_dim, mesh));
        }
        if let Some((_, mesh)) = &self.grid_mesh {
            canvas.draw(mesh, DrawParam::default().dest(origin));
        }

        // a stopped session shows the empty board
        let state = match state {
            Some(state) if self.session.state() != State::Idle => state,
            _ => return Ok(()),
        };

        // colors apply as soon as they are edited
        let settings = self.session.settings();
        let food = food_mesh(state.food, state.grid_dim, state.board_size, settings.food_color, ctx)?;
        canvas.draw(&food, DrawParam::default().dest(origin));
        let snake = snake_mesh(&state, settings.snake_color, &self.theme, ctx)?;
        canvas.draw(&snake, DrawParam::default().dest(origin));

        if state.game_over {
            let since = self.session.since_game_over(now).unwrap_or_default();
            let progress = fade_in(since, self.session.prefs().overlay_fade);
            draw_game_over(ctx, canvas, origin, board_size, state.score, progress, &self.theme)?;
        }
        Ok(())
    }
}

/// Bad parameter edits leave the program unchanged
fn logged(result: std::result::Result<Option<String>, ParamError>) -> Option<String> {
    result
        .map_err(|e| warn!("{:?}", Error::from(e).with_trace_step("parameter edit")))
        .unwrap_or_default()
}

impl EventHandler<Error> for App {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        let now = Instant::now();
        self.session.update(now);
        self.sync_status();
        self.messages.retain(|_, message| !message.is_expired(now));
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let now = Instant::now();
        let mut canvas = Canvas::from_frame(ctx, *self.theme.background);

        draw_editor(ctx, &mut canvas, &self.editor, &self.session, &self.theme)
            .with_trace_step("App::draw")?;
        self.draw_preview(ctx, &mut canvas, now)
            .with_trace_step("App::draw")?;
        for message in self.messages.values() {
            message.draw(ctx, &mut canvas, now);
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> Result {
        if button != MouseButton::Left {
            return Ok(());
        }
        let now = Instant::now();
        match self.editor.click(&mut self.session, crate::basic::Point { x, y }) {
            Some(Clicked::Button(button)) => self.press(button, now),
            Some(Clicked::Edited(text)) => self.display_notification(text, now),
            Some(Clicked::Selected(id)) => debug!("selected {}", id),
            None => {}
        }
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        use KeyCode::*;

        let now = Instant::now();
        let key = match input.keycode {
            Some(key) => key,
            None => return Ok(()),
        };

        let notification = match key {
            Up => {
                self.session.steer(Dir::U);
                None
            }
            Right => {
                self.session.steer(Dir::R);
                None
            }
            Down => {
                self.session.steer(Dir::D);
                None
            }
            Left => {
                self.session.steer(Dir::L);
                None
            }
            Space => {
                self.toggle_play(now);
                None
            }
            Escape => {
                self.press(Button::Stop, now);
                None
            }
            R => {
                self.press(Button::Reset, now);
                None
            }
            G => {
                self.draw_grid = !self.draw_grid;
                self.grid_mesh = None;
                Some(if self.draw_grid { "Grid on" } else { "Grid off" }.to_string())
            }
            Delete | Back => self.editor.remove_selected(&mut self.session),
            LBracket => {
                self.editor.move_selected(&mut self.session, -1);
                None
            }
            RBracket => {
                self.editor.move_selected(&mut self.session, 1);
                None
            }
            Equals | Plus | NumpadAdd => logged(self.editor.step_selected(&mut self.session, 1.)),
            Minus | NumpadSubtract => logged(self.editor.step_selected(&mut self.session, -1.)),
            C => logged(self.editor.cycle_color(&mut self.session)),
            _ => None,
        };

        if let Some(text) = notification {
            self.display_notification(text, now);
        }
        Ok(())
    }
}
