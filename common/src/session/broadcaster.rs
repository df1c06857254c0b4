use std::future::Future;

use crate::games::snake::{Cell, GameOverInfo, GameSnapshot};

/// Notable moments of a round, for collaborators that animate them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { round: u32 },
    FoodEaten { at: Cell, score: u32 },
    GameOver(GameOverInfo),
    BannerDue { final_score: u32 },
}

/// Receives state once a tick (or command) has been fully applied, never mid-tick.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_event(&self, event: GameEvent) -> impl Future<Output = ()> + Send;
}
