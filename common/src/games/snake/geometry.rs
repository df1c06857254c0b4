use super::types::{Cell, GridSize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

pub fn to_cell(pixel_x: f32, pixel_y: f32, cell_size: f32) -> Cell {
    Cell::new(
        (pixel_x / cell_size).floor() as i32,
        (pixel_y / cell_size).floor() as i32,
    )
}

pub fn cell_center(cell: Cell, cell_size: f32) -> PixelPoint {
    PixelPoint {
        x: cell.x as f32 * cell_size + cell_size / 2.0,
        y: cell.y as f32 * cell_size + cell_size / 2.0,
    }
}

/// Whole cells that fit on the canvas; a partial trailing cell is not playable.
pub fn grid_dimensions(canvas_width: f32, canvas_height: f32, cell_size: f32) -> GridSize {
    GridSize::new(
        (canvas_width / cell_size).floor() as i32,
        (canvas_height / cell_size).floor() as i32,
    )
}

/// Square canvas side for the space the window offers.
pub fn fit_canvas_side(available_width: f32, max_side: f32, margin: f32) -> f32 {
    max_side.min(available_width - margin).max(0.0)
}
