use common::games::SessionRng;
use common::games::snake::{cell_center, fit_canvas_side, Cell, Direction, GamePhase, GameSnapshot};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::colors;
use crate::effects::Effects;
use crate::food_sprites::FoodSprites;

const CANVAS_MARGIN: f32 = 20.0;

/// Eye centres for a head cell at the origin, looking toward `direction`.
pub fn eye_offsets(direction: Direction, cell: f32) -> [egui::Vec2; 2] {
    let near = cell / 3.0;
    let far = cell * 2.0 / 3.0;
    match direction {
        Direction::Up => [egui::vec2(near, near), egui::vec2(far, near)],
        Direction::Down => [egui::vec2(near, far), egui::vec2(far, far)],
        Direction::Left => [egui::vec2(near, near), egui::vec2(near, far)],
        Direction::Right => [egui::vec2(far, near), egui::vec2(far, far)],
    }
}

pub fn start_button_label(snapshot: &GameSnapshot) -> &'static str {
    match snapshot.phase {
        GamePhase::Idle => "Start",
        GamePhase::Running => "Restart",
        GamePhase::GameOver if snapshot.show_game_over_banner => "Play again",
        GamePhase::GameOver => "Restart",
    }
}

/// Draws the board. Works in board pixels (`cell_size` per cell) scaled to fit.
pub struct BoardView {
    cell_size: f32,
    max_side: f32,
    food_sprites: FoodSprites,
    snake_color: Color32,
}

impl BoardView {
    pub fn new(cell_size: u32, canvas_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
            max_side: canvas_size as f32,
            food_sprites: FoodSprites::new(),
            snake_color: colors::SNAKE_PALETTE[1],
        }
    }

    pub fn snake_color(&self) -> Color32 {
        self.snake_color
    }

    pub fn new_round(&mut self, rng: &mut SessionRng) {
        self.snake_color = colors::pick_snake_color(rng);
    }

    /// Centre of `cell` in board pixels, for effects.
    pub fn board_point(&self, cell: Cell) -> Pos2 {
        let p = cell_center(cell, self.cell_size);
        egui::pos2(p.x, p.y)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &GameSnapshot,
        effects: &Effects,
    ) -> egui::Response {
        let grid = snapshot.grid;
        let board_width = grid.cols as f32 * self.cell_size;
        let board_height = grid.rows as f32 * self.cell_size;
        let side = fit_canvas_side(ui.available_width(), self.max_side, CANVAS_MARGIN);
        let scale = side / board_width.max(board_height);

        let (response, painter) = ui.allocate_painter(
            egui::vec2(board_width * scale, board_height * scale),
            Sense::click_and_drag(),
        );
        let rect = response.rect;
        let cell = self.cell_size * scale;
        let to_screen = |p: Pos2| rect.min + p.to_vec2() * scale;

        painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);
        let grid_stroke = Stroke::new(0.5, colors::GRID_LINE);
        for col in 0..=grid.cols {
            let x = rect.min.x + col as f32 * cell;
            painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], grid_stroke);
        }
        for row in 0..=grid.rows {
            let y = rect.min.y + row as f32 * cell;
            painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], grid_stroke);
        }

        if snapshot.phase == GamePhase::Idle {
            self.draw_welcome(&painter, rect, scale);
            return response;
        }

        if let Some(food) = snapshot.food {
            let texture = self.food_sprites.texture(ctx, food.kind);
            let min = rect.min + egui::vec2(food.cell.x as f32, food.cell.y as f32) * cell;
            painter.image(
                texture.id(),
                Rect::from_min_size(min, egui::vec2(cell, cell)),
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        for (i, segment) in snapshot.snake.iter().enumerate() {
            let center = to_screen(self.board_point(*segment));
            painter.circle_filled(center, (cell / 2.0 - 2.0 * scale).max(1.0), self.snake_color);
            if i == 0 {
                let min = rect.min + egui::vec2(segment.x as f32, segment.y as f32) * cell;
                for offset in eye_offsets(snapshot.direction, cell) {
                    painter.circle_filled(min + offset, 3.0 * scale, colors::EYE_WHITE);
                    painter.circle_filled(min + offset, 1.5 * scale, colors::PUPIL);
                }
            }
        }

        effects.draw(&painter.with_clip_rect(rect.expand(cell)), rect.min, scale);

        if snapshot.show_game_over_banner {
            self.draw_banner(&painter, rect, snapshot.score, scale);
        }

        response
    }

    fn draw_welcome(&self, painter: &egui::Painter, rect: Rect, scale: f32) {
        let center = rect.center();
        painter.text(
            center - egui::vec2(0.0, 60.0 * scale),
            Align2::CENTER_CENTER,
            "Snake!",
            FontId::proportional(36.0 * scale),
            colors::TITLE,
        );

        let r = 9.0 * scale;
        for i in 0..3 {
            let pos = center + egui::vec2((1.0 - i as f32) * 2.0 * r, 0.0);
            painter.circle_filled(pos, r, colors::SNAKE_PALETTE[1]);
        }
        let head = center + egui::vec2(2.0 * r, 0.0);
        for dy in [-0.35, 0.35] {
            let eye = head + egui::vec2(0.35 * r, dy * r);
            painter.circle_filled(eye, 0.3 * r, colors::EYE_WHITE);
            painter.circle_filled(eye, 0.15 * r, colors::PUPIL);
        }

        painter.text(
            center + egui::vec2(0.0, 50.0 * scale),
            Align2::CENTER_CENTER,
            "Press Start or an arrow key",
            FontId::proportional(16.0 * scale),
            colors::TITLE,
        );
    }

    fn draw_banner(&self, painter: &egui::Painter, rect: Rect, score: u32, scale: f32) {
        painter.rect_filled(rect, 0.0, colors::BANNER_OVERLAY);
        let center = rect.center();
        painter.text(
            center - egui::vec2(0.0, 30.0 * scale),
            Align2::CENTER_CENTER,
            "Game Over",
            FontId::proportional(32.0 * scale),
            colors::BANNER_TEXT,
        );
        painter.text(
            center + egui::vec2(0.0, 8.0 * scale),
            Align2::CENTER_CENTER,
            format!("Score: {}", score),
            FontId::proportional(20.0 * scale),
            colors::BANNER_TEXT,
        );
        painter.text(
            center + egui::vec2(0.0, 40.0 * scale),
            Align2::CENTER_CENTER,
            "Press Start to play again",
            FontId::proportional(14.0 * scale),
            colors::BANNER_TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::snake::GridSize;
    use eframe::egui::pos2;

    #[test]
    fn test_eyes_look_toward_direction() {
        let [a, b] = eye_offsets(Direction::Right, 30.0);
        assert_eq!((a.x, b.x), (20.0, 20.0));
        assert_eq!((a.y, b.y), (10.0, 20.0));

        let [a, b] = eye_offsets(Direction::Up, 30.0);
        assert_eq!((a.y, b.y), (10.0, 10.0));
        assert_eq!((a.x, b.x), (10.0, 20.0));
    }

    #[test]
    fn test_start_button_label_follows_phase() {
        let mut snapshot = GameSnapshot::idle(GridSize { cols: 16, rows: 16 });
        assert_eq!(start_button_label(&snapshot), "Start");

        snapshot.phase = GamePhase::Running;
        assert_eq!(start_button_label(&snapshot), "Restart");

        snapshot.phase = GamePhase::GameOver;
        assert_eq!(start_button_label(&snapshot), "Restart");

        snapshot.show_game_over_banner = true;
        assert_eq!(start_button_label(&snapshot), "Play again");
    }

    #[test]
    fn test_board_point_is_cell_center() {
        let view = BoardView::new(20, 320);
        assert_eq!(view.board_point(Cell::new(2, 3)), pos2(50.0, 70.0));
    }
}
