use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::games::SessionRng;
use crate::games::snake::{InputSurface, SnakeGameState, SnakeSettings, TickOutcome};
use crate::log;
use super::broadcaster::{GameBroadcaster, GameEvent};
use super::commands::GameCommand;
use super::sound::{SoundCue, SoundPlayer};
use super::tick_timer::TickTimer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub rounds_played: u32,
    pub best_score: u32,
}

/// Owns the game state and is its only writer. Commands, ticks and the
/// banner timer are all handled on this one task, so a tick never observes
/// a half-applied command and renderers never observe a half-applied tick.
pub struct SnakeSession<B: GameBroadcaster> {
    state: SnakeGameState,
    rng: SessionRng,
    timer: TickTimer,
    banner_deadline: Option<Instant>,
    tick_interval: Duration,
    banner_delay: Duration,
    direction_starts_game: bool,
    broadcaster: B,
    sound: Arc<dyn SoundPlayer>,
    best_score: u32,
}

impl<B: GameBroadcaster> SnakeSession<B> {
    pub fn new(
        settings: &SnakeSettings,
        surface: InputSurface,
        rng: SessionRng,
        broadcaster: B,
        sound: Arc<dyn SoundPlayer>,
    ) -> Self {
        Self {
            state: SnakeGameState::new(settings),
            rng,
            timer: TickTimer::new(),
            banner_deadline: None,
            tick_interval: settings.tick_interval(surface),
            banner_delay: settings.game_over_banner_delay(),
            direction_starts_game: settings.direction_starts_game,
            broadcaster,
            sound,
            best_score: 0,
        }
    }

    pub async fn run(mut self, mut command_rx: mpsc::UnboundedReceiver<GameCommand>) -> SessionReport {
        log!(
            "Snake session ready: tick every {}ms, rng seed {}",
            self.tick_interval.as_millis(),
            self.rng.seed()
        );
        self.broadcaster.broadcast_state(self.state.snapshot()).await;

        loop {
            tokio::select! {
                _ = self.timer.tick(), if self.timer.is_running() => {
                    self.on_tick().await;
                }
                _ = sleep_until(self.banner_deadline.unwrap_or_else(Instant::now)), if self.banner_deadline.is_some() => {
                    self.on_banner_due().await;
                }
                command = command_rx.recv() => match command {
                    Some(GameCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command).await,
                },
            }
        }

        self.timer.stop();
        self.banner_deadline = None;

        let report = SessionReport {
            rounds_played: self.state.round(),
            best_score: self.best_score,
        };
        log!(
            "Snake session stopped after {} round(s), best score {}",
            report.rounds_played,
            report.best_score
        );
        report
    }

    async fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Start => self.start_round().await,
            GameCommand::Turn(direction) => {
                if self.state.is_running() {
                    self.state.request_direction(direction);
                } else if self.direction_starts_game && !direction.is_opposite(&self.state.direction()) {
                    // A reversal of the last committed direction does not start a round.
                    self.start_round().await;
                }
            }
            GameCommand::Shutdown => {}
        }
    }

    async fn start_round(&mut self) {
        if !self.state.start(&mut self.rng) {
            return;
        }

        self.banner_deadline = None;
        self.timer.start(self.tick_interval);
        self.sound.play(SoundCue::Start);
        self.broadcaster
            .broadcast_event(GameEvent::RoundStarted {
                round: self.state.round(),
            })
            .await;
        self.broadcaster.broadcast_state(self.state.snapshot()).await;
    }

    async fn on_tick(&mut self) {
        match self.state.tick(&mut self.rng) {
            TickOutcome::NotRunning => {
                self.timer.stop();
                return;
            }
            TickOutcome::Moved => {}
            TickOutcome::AteFood { at, score } => {
                self.sound.play(SoundCue::Eat);
                self.broadcaster
                    .broadcast_event(GameEvent::FoodEaten { at, score })
                    .await;
            }
            TickOutcome::GameOver(info) => {
                self.timer.stop();
                self.best_score = self.best_score.max(info.final_score);
                self.banner_deadline = Some(Instant::now() + self.banner_delay);
                self.sound.play(SoundCue::GameOver);
                self.broadcaster.broadcast_event(GameEvent::GameOver(info)).await;
            }
        }

        self.broadcaster.broadcast_state(self.state.snapshot()).await;
    }

    async fn on_banner_due(&mut self) {
        self.banner_deadline = None;
        if !self.state.reveal_game_over_banner() {
            return;
        }

        let final_score = self.state.score();
        log!("Showing game-over banner, final score {}", final_score);
        self.broadcaster
            .broadcast_event(GameEvent::BannerDue { final_score })
            .await;
        self.broadcaster.broadcast_state(self.state.snapshot()).await;
    }
}
