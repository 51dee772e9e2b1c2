use glium::glutin::event::MouseButton;

use super::TilePos;

/// Mouse button held down over a cell. Releasing it over the same cell counts
/// as a click.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PendingClick {
    pub button: MouseButton,
    pub tile_pos: TilePos,
    /// Whether the cursor has left the cell since the button was pressed.
    pub cancelled: bool,
}
impl PendingClick {
    pub fn new(button: MouseButton, tile_pos: TilePos) -> Self {
        Self {
            button,
            tile_pos,
            cancelled: false,
        }
    }

    pub fn update_cursor(&mut self, tile_pos: TilePos) {
        if tile_pos != self.tile_pos {
            self.cancelled = true;
        }
    }

    /// Returns the clicked cell if `button` was released over it.
    pub fn release(self, button: MouseButton) -> Option<TilePos> {
        if button == self.button && !self.cancelled {
            Some(self.tile_pos)
        } else {
            None
        }
    }
}
