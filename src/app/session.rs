use std::fmt::{self, Display, Formatter};
use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use crate::app::control::{Control, State};
use crate::app::snapshot::{self, Latest, Publisher};
use crate::app::Prefs;
use crate::basic::Dir;
use crate::game::{self, Collision, GameState, TickOutcome};
use crate::program::{BlockDef, BlockId, Capabilities, ParamError, ParamValue, Program, Settings};

/// Text shown above the preview
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Instructions,
    Steering,
    Score(u32),
    GameOver(Collision),
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Status::Instructions => f.write_str("Click \"Play\" (Space) to start the game"),
            Status::Steering => f.write_str("Use arrow keys to move"),
            Status::Score(score) => write!(f, "Score: {}", score),
            Status::GameOver(collision) => write!(f, "Game Over! {}", collision),
        }
    }
}

/// Owns the program and the game, the single writer of both
pub struct Session<R: Rng = ThreadRng> {
    prefs: Prefs,
    program: Program,
    control: Control,

    /// Recomputed on every edit, colors apply immediately,
    /// everything else is read when play starts
    settings: Settings,
    /// Fixed for the duration of a game
    caps: Capabilities,
    game: GameState,
    status: Status,

    publisher: Publisher,
    rng: R,
}

impl Session {
    pub fn new(prefs: Prefs) -> (Self, Latest) {
        Self::with_rng(prefs, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(prefs: Prefs, rng: R) -> (Self, Latest) {
        let (publisher, latest) = snapshot::channel();
        let settings = Settings::defaults(&prefs);
        let session = Self {
            control: Control::new(prefs.tick_interval, prefs.max_catch_up),
            program: Program::default(),
            game: GameState::new(&prefs, &settings),
            settings,
            caps: Capabilities::default(),
            status: Status::Instructions,
            publisher,
            rng,
            prefs,
        };
        (session, latest)
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn state(&self) -> State {
        self.control.state()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn since_game_over(&self, now: Instant) -> Option<Duration> {
        self.control.since_game_over(now)
    }

    // editing

    pub fn add_block(&mut self, def: &BlockDef) -> BlockId {
        let id = self.program.append(def);
        debug!("added {} {}", id, def.code);
        self.refresh_settings();
        id
    }

    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let removed = self.program.remove(id);
        match &removed {
            Some(block) => debug!("removed {} {}", id, block.def.code),
            None => debug!("remove {}: no such block", id),
        }
        self.refresh_settings();
        removed.is_some()
    }

    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        let moved = self.program.move_block(from, to);
        if !moved {
            debug!("move {} -> {} out of range ({} blocks)", from, to, self.program.len());
        }
        moved
    }

    pub fn set_param(&mut self, id: BlockId, name: &str, value: ParamValue) -> Result<(), ParamError> {
        self.program.set_param(id, name, value)?;
        self.refresh_settings();
        Ok(())
    }

    fn refresh_settings(&mut self) {
        self.settings = Settings::from_program(&self.program, &self.prefs);
    }

    // session control

    /// Start a fresh game, from Idle or after a game over
    pub fn play(&mut self, now: Instant) -> bool {
        if self.state() == State::Playing {
            return false;
        }

        self.settings = Settings::from_program(&self.program, &self.prefs);
        self.caps = Capabilities::from_program(&self.program);
        self.game = GameState::new(&self.prefs, &self.settings);
        self.status = Status::Steering;
        self.control.play(self.settings.tick_interval, now);
        self.publisher.publish(&self.game);

        info!(
            "play: every {}ms on a {}x{} grid with {:?}",
            self.settings.tick_interval.as_millis(),
            self.settings.grid_dim.0,
            self.settings.grid_dim.0,
            self.caps,
        );
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.state() == State::Idle {
            return false;
        }
        self.control.stop();
        self.status = Status::Instructions;
        info!("stop");
        true
    }

    /// Throw the current game away and start over
    pub fn reset(&mut self, now: Instant) {
        self.stop();
        self.play(now);
    }

    /// Run the ticks that are due, returns how many ran
    pub fn update(&mut self, now: Instant) -> usize {
        let mut ticks = 0;
        while self.control.can_update(now) {
            self.tick(now);
            ticks += 1;
        }
        ticks
    }

    fn tick(&mut self, now: Instant) {
        let (next, outcome) = game::tick(&self.game, self.caps, &mut self.rng);
        self.game = next;

        match outcome {
            TickOutcome::Ate { score } => self.status = Status::Score(score),
            TickOutcome::Crashed(collision) => {
                self.control.game_over(now);
                self.status = Status::GameOver(collision);
                info!("game over ({:?}), score {}", collision, self.game.score);
            }
            TickOutcome::Frozen | TickOutcome::Idle | TickOutcome::Moved => {}
        }

        self.publisher.publish(&self.game);
    }

    pub fn steer(&mut self, dir: Dir) -> bool {
        if self.state() != State::Playing {
            return false;
        }
        let changed = game::steer(&mut self.game, self.caps, dir);
        if changed {
            self.publisher.publish(&self.game);
        } else {
            debug!("ignored {} while going {}", dir, self.game.dir);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{GridDim, GridPoint};
    use crate::program::palette::def_for;
    use crate::program::Action;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn new_session(actions: &[Action]) -> (Session<StdRng>, Latest) {
        let (mut session, latest) = Session::with_rng(Prefs::default(), StdRng::seed_from_u64(3));
        for action in actions {
            session.add_block(def_for(*action));
        }
        (session, latest)
    }

    const T: Duration = Duration::from_millis(100);

    #[test]
    fn starts_idle_and_does_nothing() {
        let (mut session, mut latest) = new_session(&[Action::MoveSnake]);
        let start = Instant::now();
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.update(start + T * 5), 0);
        assert!(latest.get().is_none());
        assert_eq!(session.status(), Status::Instructions);
    }

    #[test]
    fn play_publishes_fresh_state() {
        let (mut session, mut latest) = new_session(&[Action::MoveSnake]);
        let start = Instant::now();
        assert!(session.play(start));
        assert!(!session.play(start));
        assert_eq!(session.state(), State::Playing);
        assert_eq!(session.status(), Status::Steering);

        let snapshot = latest.get().unwrap();
        assert_eq!(snapshot.snake, VecDeque::from([GridPoint { x: 10, y: 10 }]));
        assert_eq!(snapshot.food, GridPoint { x: 5, y: 5 });
        assert_eq!(snapshot.dir, Dir::R);
        assert_eq!(snapshot.score, 0);
    }

    #[test]
    fn ticks_move_the_snake() {
        let (mut session, mut latest) = new_session(&[Action::MoveSnake]);
        let start = Instant::now();
        session.play(start);
        assert_eq!(session.update(start + T * 3), 3);
        assert_eq!(latest.get().unwrap().head(), GridPoint { x: 13, y: 10 });
    }

    #[test]
    fn settings_are_read_when_play_starts() {
        let (mut session, _latest) = new_session(&[Action::MoveSnake, Action::SetSpeed, Action::SetGridSize]);
        let speed = session.program().blocks()[1].id;
        let size = session.program().blocks()[2].id;
        session.set_param(speed, "speed", ParamValue::Number(200.)).unwrap();
        session.set_param(size, "size", ParamValue::Number(15.)).unwrap();

        let start = Instant::now();
        session.play(start);
        assert_eq!(session.game().tick_interval, Duration::from_millis(200));
        assert_eq!(session.game().grid_dim, GridDim(15));
        assert_eq!(session.update(start + T), 0);
        assert_eq!(session.update(start + T * 2), 1);

        // edits during play wait for the next game
        session.set_param(speed, "speed", ParamValue::Number(50.)).unwrap();
        assert_eq!(session.game().tick_interval, Duration::from_millis(200));
    }

    #[test]
    fn wall_crash_ends_game_and_freezes() {
        use Action::*;
        let (mut session, mut latest) = new_session(&[MoveSnake, CheckWall, GameOver]);
        let start = Instant::now();
        session.play(start);

        // from (10,10) going right, (19,10) is the last cell
        for i in 1..=9 {
            session.update(start + T * i);
        }
        assert_eq!(session.state(), State::Playing);
        session.update(start + T * 10);
        assert_eq!(session.state(), State::GameOver);
        assert_eq!(session.status(), Status::GameOver(Collision::Wall));
        assert_eq!(session.status().to_string(), "Game Over! You hit a wall.");

        let frozen = latest.get().unwrap().clone();
        assert!(frozen.game_over);
        assert_eq!(frozen.head(), GridPoint { x: 19, y: 10 });
        assert_eq!(session.update(start + T * 20), 0);
        assert_eq!(latest.get(), Some(&frozen));
    }

    #[test]
    fn replay_after_game_over_starts_fresh() {
        use Action::*;
        let (mut session, mut latest) = new_session(&[MoveSnake, CheckWall, GameOver]);
        let start = Instant::now();
        session.play(start);
        for i in 1..=10 {
            session.update(start + T * i);
        }
        assert_eq!(session.state(), State::GameOver);

        let replay = start + T * 30;
        assert!(session.play(replay));
        assert_eq!(session.state(), State::Playing);
        let fresh = latest.get().unwrap();
        assert!(!fresh.game_over);
        assert_eq!(fresh.head(), GridPoint { x: 10, y: 10 });
        assert_eq!(session.since_game_over(replay), None);
    }

    #[test]
    fn stop_cancels_ticks() {
        let (mut session, mut latest) = new_session(&[Action::MoveSnake]);
        let start = Instant::now();
        session.play(start);
        session.update(start + T);
        assert!(session.stop());
        assert!(!session.stop());
        assert_eq!(session.state(), State::Idle);

        let before = latest.get().cloned();
        assert_eq!(session.update(start + T * 10), 0);
        assert_eq!(latest.get().cloned(), before);
        assert_eq!(session.status(), Status::Instructions);
    }

    #[test]
    fn steering_needs_blocks_and_play() {
        use Action::*;
        let (mut session, _latest) = new_session(&[MoveSnake, KeyPress, ChangeDirection]);
        assert!(!session.steer(Dir::U));

        session.play(Instant::now());
        assert!(!session.steer(Dir::L));
        assert!(session.steer(Dir::U));
        assert_eq!(session.game().dir, Dir::U);

        let (mut session, _latest) = new_session(&[MoveSnake, KeyPress]);
        session.play(Instant::now());
        assert!(!session.steer(Dir::U));
        assert_eq!(session.game().dir, Dir::R);
    }

    #[test]
    fn capabilities_are_fixed_during_a_game() {
        let (mut session, _latest) = new_session(&[]);
        let start = Instant::now();
        session.play(start);
        session.add_block(def_for(Action::MoveSnake));
        session.update(start + T);
        assert_eq!(session.game().head(), GridPoint { x: 10, y: 10 });

        session.reset(start + T * 2);
        session.update(start + T * 3);
        assert_eq!(session.game().head(), GridPoint { x: 11, y: 10 });
    }

    #[test]
    fn stalls_only_replay_a_few_ticks() {
        let prefs = Prefs::default()
            .tick_interval(Duration::from_millis(50))
            .max_catch_up(2);
        let (mut session, _latest) = Session::with_rng(prefs, StdRng::seed_from_u64(1));
        session.add_block(def_for(Action::MoveSnake));

        let start = Instant::now();
        session.play(start);
        assert_eq!(session.update(start + Duration::from_secs(1)), 2);
        assert_eq!(session.game().head(), GridPoint { x: 12, y: 10 });
    }

    #[test]
    fn eating_updates_status() {
        use Action::*;
        let (mut session, _latest) = new_session(&[MoveSnake, CheckFood, GrowSnake, KeyPress, ChangeDirection]);
        let start = Instant::now();
        session.play(start);
        // food is at (5,5), snake at (10,10) going right: go up 5 then left 5
        session.steer(Dir::U);
        for i in 1..=5 {
            session.update(start + T * i);
        }
        session.steer(Dir::L);
        for i in 6..=10 {
            session.update(start + T * i);
        }
        assert_eq!(session.status(), Status::Score(1));
        assert_eq!(session.game().score, 1);
        assert_eq!(session.game().snake.len(), 2);
    }

    #[test]
    fn color_edits_apply_immediately() {
        let (mut session, _latest) = new_session(&[Action::SetSnakeColor]);
        let id = session.program().blocks()[0].id;
        session
            .set_param(id, "color", ParamValue::Str("#112233".to_string()))
            .unwrap();
        assert_eq!(session.settings().snake_color, crate::color::Color::from_rgb(0x11, 0x22, 0x33));

        assert!(session.remove_block(id));
        assert_eq!(session.settings().snake_color, session.prefs().snake_color);
        assert!(!session.remove_block(id));
    }
}
