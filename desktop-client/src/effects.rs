use common::games::SessionRng;
use eframe::egui::{self, Color32, Pos2, Stroke};
use std::f32::consts::TAU;

use crate::colors;

/// Effects advance in fixed 60 Hz frames regardless of the repaint rate.
const FRAME_SECONDS: f32 = 1.0 / 60.0;
const MAX_FRAMES_PER_UPDATE: u32 = 8;

const FIREWORK_PARTICLES: usize = 30;
const CRYING_FRAMES: u32 = 60;
const TEAR_DROP_DISTANCE: f32 = 20.0;

#[derive(Clone, Debug)]
struct Particle {
    pos: Pos2,
    velocity: egui::Vec2,
    size: f32,
    life: f32,
    color: Color32,
}

impl Particle {
    fn alpha(&self) -> f32 {
        (self.life / 50.0).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
struct Tear {
    offset_x: f32,
    fall: f32,
    speed: f32,
    size: f32,
}

#[derive(Clone, Debug)]
struct CryingFace {
    center: Pos2,
    frame: u32,
    color: Color32,
    tears: [Tear; 2],
}

/// Fireworks and the crying face, in board pixels (one cell = `cell_size` px).
#[derive(Default)]
pub struct Effects {
    particles: Vec<Particle>,
    crying: Option<CryingFace>,
    pending_time: f32,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty() || self.crying.is_some()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.crying = None;
        self.pending_time = 0.0;
    }

    pub fn spawn_fireworks(&mut self, center: Pos2, rng: &mut SessionRng) {
        for _ in 0..FIREWORK_PARTICLES {
            let angle: f32 = rng.random_range(0.0..TAU);
            let speed: f32 = rng.random_range(1.0..4.0);
            self.particles.push(Particle {
                pos: center,
                velocity: egui::vec2(angle.cos(), angle.sin()) * speed,
                size: rng.random_range(2.0..6.0),
                life: rng.random_range(30.0..50.0),
                color: rng.pick(&colors::FIREWORK_PALETTE).copied().unwrap_or(Color32::WHITE),
            });
        }
    }

    pub fn start_crying(&mut self, center: Pos2, color: Color32) {
        self.crying = Some(CryingFace {
            center,
            frame: 0,
            color,
            tears: [
                Tear { offset_x: -5.0, fall: 0.0, speed: 1.5, size: 3.0 },
                Tear { offset_x: 5.0, fall: 0.0, speed: 1.2, size: 4.0 },
            ],
        });
    }

    /// Runs as many whole frames as `dt` covers.
    pub fn advance(&mut self, dt: f32) {
        if !self.is_active() {
            self.pending_time = 0.0;
            return;
        }
        self.pending_time += dt.max(0.0);
        let mut frames = 0;
        while self.pending_time >= FRAME_SECONDS && frames < MAX_FRAMES_PER_UPDATE {
            self.pending_time -= FRAME_SECONDS;
            self.step();
            frames += 1;
        }
        if frames == MAX_FRAMES_PER_UPDATE {
            self.pending_time = 0.0;
        }
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.pos += particle.velocity;
            particle.life -= 1.0;
        }
        self.particles.retain(|p| p.life > 0.0);

        if let Some(face) = self.crying.as_mut() {
            face.frame += 1;
            for tear in &mut face.tears {
                tear.fall += tear.speed;
                if tear.fall > TEAR_DROP_DISTANCE {
                    tear.fall = 0.0;
                }
            }
            if face.frame >= CRYING_FRAMES {
                self.crying = None;
            }
        }
    }

    pub fn draw(&self, painter: &egui::Painter, origin: Pos2, scale: f32) {
        let to_screen = |p: Pos2| origin + p.to_vec2() * scale;

        for particle in &self.particles {
            painter.circle_filled(
                to_screen(particle.pos),
                particle.size * scale,
                particle.color.gamma_multiply(particle.alpha()),
            );
        }

        let Some(face) = &self.crying else {
            return;
        };
        let center = to_screen(face.center);
        painter.circle_filled(center, 10.0 * scale, face.color);

        for dx in [-5.0, 5.0] {
            let eye = center + egui::vec2(dx, -3.0) * scale;
            painter.circle_filled(eye, 4.0 * scale, colors::EYE_WHITE);
            // Closed eye: a flat line across the white.
            painter.line_segment(
                [eye - egui::vec2(4.0 * scale, 0.0), eye + egui::vec2(4.0 * scale, 0.0)],
                Stroke::new(2.0 * scale, colors::PUPIL),
            );
        }

        let mouth: Vec<Pos2> = (0..=8)
            .map(|i| {
                let t = std::f32::consts::PI * i as f32 / 8.0;
                center + egui::vec2(-3.0 * t.cos(), 5.0 - 3.0 * t.sin()) * scale
            })
            .collect();
        painter.add(egui::Shape::line(mouth, Stroke::new(1.5 * scale, colors::PUPIL)));

        for tear in &face.tears {
            let pos = center + egui::vec2(tear.offset_x, -3.0 + tear.fall) * scale;
            painter.circle_filled(pos, tear.size * scale, colors::TEAR);
        }
    }
}
