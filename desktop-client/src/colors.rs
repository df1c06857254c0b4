use common::games::SessionRng;
use common::games::snake::FoodKind;
use eframe::egui::Color32;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(0xE8, 0xF5, 0xE9);
pub const GRID_LINE: Color32 = Color32::from_rgb(0xC8, 0xE6, 0xC9);
pub const EYE_WHITE: Color32 = Color32::WHITE;
pub const PUPIL: Color32 = Color32::BLACK;
pub const TEAR: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);
pub const BANNER_TEXT: Color32 = Color32::WHITE;
pub const BANNER_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 140);
pub const TITLE: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

pub const SNAKE_PALETTE: [Color32; 5] = [
    Color32::from_rgb(0xFF, 0x98, 0x00),
    Color32::from_rgb(0x4C, 0xAF, 0x50),
    Color32::from_rgb(0x21, 0x96, 0xF3),
    Color32::from_rgb(0x9C, 0x27, 0xB0),
    Color32::from_rgb(0xF4, 0x43, 0x36),
];

pub const FIREWORK_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0xFF, 0x98, 0x00),
    Color32::from_rgb(0xF4, 0x43, 0x36),
    Color32::from_rgb(0x21, 0x96, 0xF3),
    Color32::from_rgb(0xFF, 0xEB, 0x3B),
    Color32::from_rgb(0x4C, 0xAF, 0x50),
    Color32::from_rgb(0xE9, 0x1E, 0x63),
];

pub fn food_color(kind: FoodKind) -> Color32 {
    match kind {
        FoodKind::Apple => Color32::from_rgb(0xFF, 0x52, 0x52),
        FoodKind::Banana => Color32::from_rgb(0xFF, 0xEB, 0x3B),
        FoodKind::Strawberry => Color32::from_rgb(0xE9, 0x1E, 0x63),
        FoodKind::Orange => Color32::from_rgb(0xFF, 0x98, 0x00),
    }
}

pub fn pick_snake_color(rng: &mut SessionRng) -> Color32 {
    rng.pick(&SNAKE_PALETTE).copied().unwrap_or(SNAKE_PALETTE[1])
}
