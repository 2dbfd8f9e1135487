#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder, GameResult};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{App, Prefs};

mod app;
mod basic;
mod color;
mod error;
mod game;
mod program;
mod rendering;
mod support;

fn main() -> GameResult {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "block_snake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let prefs = Prefs::default();
    let window_mode = WindowMode::default().dimensions(prefs.window_dim.x, prefs.window_dim.y);
    let window_setup = WindowSetup::default().title("Block Snake");

    let (ctx, event_loop) = ContextBuilder::new("block_snake", "gorilskij")
        .window_mode(window_mode)
        .window_setup(window_setup)
        .build()?;

    info!("window {}x{}", prefs.window_dim.x, prefs.window_dim.y);
    let app = App::new(prefs);
    event::run(ctx, event_loop, app)
}
