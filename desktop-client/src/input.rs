use common::games::snake::Direction;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Start,
    Turn(Direction),
    ToggleEffects,
    ToggleBackground,
}

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
        _ => None,
    }
}

pub fn action_for_key(key: egui::Key) -> Option<InputAction> {
    if let Some(direction) = direction_for_key(key) {
        return Some(InputAction::Turn(direction));
    }
    match key {
        egui::Key::Space | egui::Key::Enter => Some(InputAction::Start),
        egui::Key::M => Some(InputAction::ToggleEffects),
        egui::Key::B => Some(InputAction::ToggleBackground),
        _ => None,
    }
}

/// Keyboard actions pressed this frame, in event order.
pub fn keyboard_actions(input: &egui::InputState) -> Vec<InputAction> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => action_for_key(*key),
            _ => None,
        })
        .collect()
}

/// The dominant axis of the drag wins; drags shorter than `threshold` on it are ignored.
pub fn swipe_direction(delta: egui::Vec2, threshold: f32) -> Option<Direction> {
    if delta.x.abs() > delta.y.abs() {
        if delta.x.abs() < threshold {
            return None;
        }
        Some(if delta.x > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        if delta.y.abs() < threshold {
            return None;
        }
        Some(if delta.y > 0.0 { Direction::Down } else { Direction::Up })
    }
}

pub struct SwipeTracker {
    origin: Option<egui::Pos2>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self { origin: None, threshold }
    }

    pub fn begin(&mut self, pos: egui::Pos2) {
        self.origin = Some(pos);
    }

    pub fn finish(&mut self, pos: egui::Pos2) -> Option<Direction> {
        let origin = self.origin.take()?;
        swipe_direction(pos - origin, self.threshold)
    }

    /// Feeds one frame of a drag on the board.
    pub fn track(&mut self, response: &egui::Response) -> Option<Direction> {
        if response.drag_started()
            && let Some(pos) = response.interact_pointer_pos()
        {
            self.begin(pos);
        }
        if response.drag_stopped() {
            let end = response.interact_pointer_pos().or(self.origin);
            return end.and_then(|pos| self.finish(pos));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_arrow_keys_and_wasd_map_to_directions() {
        assert_eq!(direction_for_key(egui::Key::ArrowUp), Some(Direction::Up));
        assert_eq!(direction_for_key(egui::Key::S), Some(Direction::Down));
        assert_eq!(direction_for_key(egui::Key::A), Some(Direction::Left));
        assert_eq!(direction_for_key(egui::Key::ArrowRight), Some(Direction::Right));
        assert_eq!(direction_for_key(egui::Key::Q), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(egui::Key::Space), Some(InputAction::Start));
        assert_eq!(action_for_key(egui::Key::M), Some(InputAction::ToggleEffects));
        assert_eq!(action_for_key(egui::Key::B), Some(InputAction::ToggleBackground));
    }

    #[test]
    fn test_swipe_uses_dominant_axis() {
        assert_eq!(swipe_direction(vec2(50.0, 20.0), 30.0), Some(Direction::Right));
        assert_eq!(swipe_direction(vec2(-50.0, 40.0), 30.0), Some(Direction::Left));
        assert_eq!(swipe_direction(vec2(10.0, -45.0), 30.0), Some(Direction::Up));
        assert_eq!(swipe_direction(vec2(-10.0, 31.0), 30.0), Some(Direction::Down));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        assert_eq!(swipe_direction(vec2(29.0, 5.0), 30.0), None);
        assert_eq!(swipe_direction(vec2(5.0, -20.0), 30.0), None);
    }

    #[test]
    fn test_tracker_needs_a_start_point() {
        let mut tracker = SwipeTracker::new(30.0);
        assert_eq!(tracker.finish(pos2(100.0, 100.0)), None);

        tracker.begin(pos2(100.0, 100.0));
        assert_eq!(tracker.finish(pos2(100.0, 160.0)), Some(Direction::Down));
        assert_eq!(tracker.finish(pos2(100.0, 220.0)), None);
    }
}
