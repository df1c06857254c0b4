use common::games::snake::{GameSnapshot, GridSize};
use common::session::{GameCommand, GameEvent};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// What the session has published and the UI has not consumed yet.
struct Published {
    snapshot: GameSnapshot,
    events: VecDeque<GameEvent>,
}

/// Bridge between the session thread and the egui thread.
#[derive(Clone)]
pub struct SharedState {
    published: Arc<Mutex<Published>>,
    command_tx: mpsc::UnboundedSender<GameCommand>,
    repaint: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(grid: GridSize, command_tx: mpsc::UnboundedSender<GameCommand>) -> Self {
        Self {
            published: Arc::new(Mutex::new(Published {
                snapshot: GameSnapshot::idle(grid),
                events: VecDeque::new(),
            })),
            command_tx,
            repaint: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        self.repaint.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.repaint.lock().unwrap() = Some(ctx);
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        self.published.lock().unwrap().snapshot = snapshot;
        self.request_repaint();
    }

    pub fn push_event(&self, event: GameEvent) {
        self.published.lock().unwrap().events.push_back(event);
        self.request_repaint();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.published.lock().unwrap().snapshot.clone()
    }

    pub fn drain_events(&self) -> Vec<GameEvent> {
        self.published.lock().unwrap().events.drain(..).collect()
    }

    pub fn send(&self, command: GameCommand) {
        if self.command_tx.send(command).is_err() {
            common::log_warn!("Game session is gone, dropping {:?}", command);
        }
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.repaint.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::Cell;

    #[test]
    fn test_events_are_drained_once() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = SharedState::new(GridSize { cols: 16, rows: 16 }, tx);
        state.push_event(GameEvent::RoundStarted { round: 1 });
        state.push_event(GameEvent::FoodEaten { at: Cell::new(3, 4), score: 10 });

        assert_eq!(state.drain_events().len(), 2);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_commands_reach_the_session_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let state = SharedState::new(GridSize { cols: 16, rows: 16 }, tx);
        state.send(GameCommand::Start);
        assert_eq!(rx.try_recv().unwrap(), GameCommand::Start);
    }

    #[test]
    fn test_starts_with_idle_snapshot() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = SharedState::new(GridSize { cols: 12, rows: 10 }, tx);
        let snapshot = state.snapshot();
        assert!(!snapshot.is_running());
        assert_eq!(snapshot.grid, GridSize { cols: 12, rows: 10 });
    }
}
