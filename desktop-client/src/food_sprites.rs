use common::games::snake::FoodKind;
use eframe::egui;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;

use crate::colors;

pub const SPRITE_PIXELS: u32 = 64;

const STEM: Rgba<u8> = Rgba([0x5D, 0x40, 0x37, 0xFF]);
const LEAF: Rgba<u8> = Rgba([0x43, 0xA0, 0x47, 0xFF]);
const HIGHLIGHT: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xB0]);

/// Round fruit icon: body disc, a soft highlight, and a stem with a leaf.
pub fn render_food_icon(kind: FoodKind) -> RgbaImage {
    let size = SPRITE_PIXELS as f32;
    let body = colors::food_color(kind);
    let body = Rgba([body.r(), body.g(), body.b(), 0xFF]);

    let center = (size / 2.0, size / 2.0 + 4.0);
    let radius = size * 0.38;
    let highlight_center = (center.0 - radius * 0.4, center.1 - radius * 0.4);
    let highlight_radius = radius * 0.22;
    let leaf_center = (center.0 + 7.0, center.1 - radius - 3.0);

    RgbaImage::from_fn(SPRITE_PIXELS, SPRITE_PIXELS, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        if within(px, py, highlight_center, highlight_radius) {
            HIGHLIGHT
        } else if within(px, py, center, radius) {
            body
        } else if (px - center.0).abs() < 2.0 && py > center.1 - radius - 8.0 && py < center.1 - radius + 2.0 {
            STEM
        } else if within_ellipse(px, py, leaf_center, 6.0, 3.0) {
            LEAF
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn within(px: f32, py: f32, center: (f32, f32), radius: f32) -> bool {
    let dx = px - center.0;
    let dy = py - center.1;
    dx * dx + dy * dy <= radius * radius
}

fn within_ellipse(px: f32, py: f32, center: (f32, f32), rx: f32, ry: f32) -> bool {
    let dx = (px - center.0) / rx;
    let dy = (py - center.1) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Food textures, uploaded on first use.
#[derive(Default)]
pub struct FoodSprites {
    textures: HashMap<FoodKind, egui::TextureHandle>,
}

impl FoodSprites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texture(&mut self, ctx: &egui::Context, kind: FoodKind) -> &egui::TextureHandle {
        self.textures.entry(kind).or_insert_with(|| {
            let icon = render_food_icon(kind);
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [icon.width() as usize, icon.height() as usize],
                icon.as_raw(),
            );
            ctx.load_texture(format!("food_{}", kind.name()), color_image, Default::default())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_center_uses_food_color() {
        for kind in FoodKind::ALL {
            let icon = render_food_icon(kind);
            let expected = colors::food_color(kind);
            let pixel = icon.get_pixel(SPRITE_PIXELS / 2 + 6, SPRITE_PIXELS / 2 + 8);
            assert_eq!(pixel.0, [expected.r(), expected.g(), expected.b(), 0xFF], "{:?}", kind);
        }
    }

    #[test]
    fn test_icon_corners_are_transparent() {
        let icon = render_food_icon(FoodKind::Apple);
        assert_eq!(icon.get_pixel(0, 0).0[3], 0);
        assert_eq!(icon.get_pixel(SPRITE_PIXELS - 1, SPRITE_PIXELS - 1).0[3], 0);
    }
}
