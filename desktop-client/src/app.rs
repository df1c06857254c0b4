use common::games::SessionRng;
use common::games::snake::{Direction, GameSnapshot};
use common::session::{GameCommand, GameEvent};
use eframe::egui;
use std::sync::Arc;

use crate::audio::AudioManager;
use crate::effects::Effects;
use crate::game_view::{start_button_label, BoardView};
use crate::input::{keyboard_actions, InputAction, SwipeTracker};
use crate::state::SharedState;

pub struct KidsSnakeApp {
    shared_state: SharedState,
    audio: Arc<AudioManager>,
    board: BoardView,
    effects: Effects,
    swipe: SwipeTracker,
    rng: SessionRng,
    touch_controls: bool,
    audio_unlocked: bool,
}

impl KidsSnakeApp {
    pub fn new(
        shared_state: SharedState,
        audio: Arc<AudioManager>,
        board: BoardView,
        swipe_threshold: f32,
        touch_controls: bool,
    ) -> Self {
        Self {
            shared_state,
            audio,
            board,
            effects: Effects::new(),
            swipe: SwipeTracker::new(swipe_threshold),
            rng: SessionRng::from_random(),
            touch_controls,
            audio_unlocked: false,
        }
    }

    fn apply_events(&mut self) {
        for event in self.shared_state.drain_events() {
            match event {
                GameEvent::RoundStarted { .. } => {
                    self.effects.clear();
                    self.board.new_round(&mut self.rng);
                }
                GameEvent::FoodEaten { at, .. } => {
                    let center = self.board.board_point(at);
                    self.effects.spawn_fireworks(center, &mut self.rng);
                }
                GameEvent::GameOver(info) => {
                    let center = self.board.board_point(info.collision_point);
                    self.effects.start_crying(center, self.board.snake_color());
                }
                GameEvent::BannerDue { .. } => {}
            }
        }
    }

    fn unlock_audio(&mut self) {
        if !self.audio_unlocked {
            self.audio_unlocked = true;
            self.audio.unlock();
        }
    }

    fn perform(&mut self, action: InputAction) {
        self.unlock_audio();
        match action {
            InputAction::Start => self.shared_state.send(GameCommand::Start),
            InputAction::Turn(direction) => self.shared_state.send(GameCommand::Turn(direction)),
            InputAction::ToggleEffects => {
                let muted = self.audio.toggle_effects_muted();
                common::log!("Sound effects {}", if muted { "muted" } else { "on" });
            }
            InputAction::ToggleBackground => {
                let muted = self.audio.toggle_background_muted();
                common::log!("Background music {}", if muted { "muted" } else { "on" });
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let music = if self.audio.background_muted() { "🔇 Music" } else { "🎵 Music" };
                if ui.button(music).on_hover_text("B").clicked() {
                    self.perform(InputAction::ToggleBackground);
                }
                let sound = if self.audio.effects_muted() { "🔇 Sound" } else { "🔊 Sound" };
                if ui.button(sound).on_hover_text("M").clicked() {
                    self.perform(InputAction::ToggleEffects);
                }
            });
        });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let start = egui::Button::new(egui::RichText::new(start_button_label(snapshot)).size(20.0))
            .min_size(egui::vec2(140.0, 40.0));
        if ui.add(start).clicked() {
            self.perform(InputAction::Start);
        }

        if !self.touch_controls {
            ui.label("Arrow keys or WASD to steer, Space to start");
            return;
        }

        let arrow = |label: &str| {
            egui::Button::new(egui::RichText::new(label).size(24.0)).min_size(egui::vec2(56.0, 56.0))
        };
        let mut pressed = None;
        if ui.add(arrow("⬆")).clicked() {
            pressed = Some(Direction::Up);
        }
        ui.horizontal(|ui| {
            let row_width = 3.0 * 56.0 + 2.0 * ui.spacing().item_spacing.x;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            if ui.add(arrow("⬅")).clicked() {
                pressed = Some(Direction::Left);
            }
            if ui.add(arrow("⬇")).clicked() {
                pressed = Some(Direction::Down);
            }
            if ui.add(arrow("➡")).clicked() {
                pressed = Some(Direction::Right);
            }
        });
        if let Some(direction) = pressed {
            self.perform(InputAction::Turn(direction));
        }
    }
}

impl eframe::App for KidsSnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        self.apply_events();
        let snapshot = self.shared_state.snapshot();

        let (actions, pointer_pressed, dt) =
            ctx.input(|i| (keyboard_actions(i), i.pointer.any_pressed(), i.stable_dt));
        if pointer_pressed {
            self.unlock_audio();
        }
        for action in actions {
            self.perform(action);
        }
        self.effects.advance(dt);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, &snapshot);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let response = self.board.show(ui, ctx, &snapshot, &self.effects);
                if let Some(direction) = self.swipe.track(&response) {
                    self.perform(InputAction::Turn(direction));
                }
                ui.add_space(12.0);
                self.render_controls(ui, &snapshot);
            });
        });

        if self.effects.is_active() {
            ctx.request_repaint();
        }
    }
}
