//! Hand-off of game states from the session (the only writer)
//! to the renderer, which always paints the newest one

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use crate::game::GameState;

pub fn channel() -> (Publisher, Latest) {
    let (tx, rx) = mpsc::channel();
    (Publisher { tx }, Latest { rx, latest: None })
}

pub struct Publisher {
    tx: Sender<GameState>,
}

impl Publisher {
    pub fn publish(&self, state: &GameState) {
        // fails only if the renderer is gone, nothing left to paint
        if let Err(e) = self.tx.send(state.clone()) {
            debug!("snapshot dropped: {}", e);
        }
    }
}

pub struct Latest {
    rx: Receiver<GameState>,
    latest: Option<GameState>,
}

impl Latest {
    /// Never blocks, keeps the previous snapshot if nothing new arrived
    pub fn get(&mut self) -> Option<&GameState> {
        if let Some(newest) = self.rx.try_iter().last() {
            self.latest = Some(newest);
        }
        self.latest.as_ref()
    }
}
