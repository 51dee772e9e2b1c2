use cgmath::{Matrix4, Vector3};

use super::TilePos;

/// Minimum target width & height, to avoid divide-by-zero errors.
const MIN_TARGET_SIZE: u32 = 10;

/// Fixed mapping between the render target and the board, stretching the
/// board to fill the whole window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    /// Width and height of the render target.
    target_dimensions: (u32, u32),
    /// Number of columns and rows on the board.
    board_dimensions: (usize, usize),
}

impl Layout {
    /// Returns a new layout for a board of the given size.
    pub fn new(board_width: usize, board_height: usize) -> Self {
        Self {
            target_dimensions: (MIN_TARGET_SIZE, MIN_TARGET_SIZE),
            board_dimensions: (board_width.max(1), board_height.max(1)),
        }
    }

    /// Sets the width and height of the render target.
    pub fn set_target_dimensions(&mut self, (target_w, target_h): (u32, u32)) {
        self.target_dimensions = (
            std::cmp::max(MIN_TARGET_SIZE, target_w),
            std::cmp::max(MIN_TARGET_SIZE, target_h),
        );
    }

    /// Returns the width and height of a single cell, in pixels.
    pub fn cell_size(self) -> (f64, f64) {
        let (target_w, target_h) = self.target_dimensions;
        let (board_w, board_h) = self.board_dimensions;
        (
            target_w as f64 / board_w as f64,
            target_h as f64 / board_h as f64,
        )
    }

    /// Returns the transform from tile space (one unit per cell, `y` pointing
    /// down) to clip space.
    pub fn gl_matrix(self) -> Matrix4<f32> {
        let (board_w, board_h) = self.board_dimensions;
        let sx = 2.0 / board_w as f32;
        let sy = -2.0 / board_h as f32;
        Matrix4::from_translation(Vector3::new(-1.0, 1.0, 0.0))
            * Matrix4::from_nonuniform_scale(sx, sy, 1.0)
    }

    /// Returns the position of the cell containing a pixel. The result may be
    /// outside the board.
    pub fn pixel_to_tile_pos(self, (x, y): (u32, u32)) -> TilePos {
        let (cell_w, cell_h) = self.cell_size();
        TilePos(
            (x as f64 / cell_w).floor() as i32,
            (y as f64 / cell_h).floor() as i32,
        )
    }
}
