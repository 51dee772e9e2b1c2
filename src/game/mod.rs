use glium::glutin::event::{ElementState, MouseButton, VirtualKeyCode, WindowEvent};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod board;
mod cell;
mod input;
mod layout;

pub use board::{Board, BoardError, BoardState};
pub use cell::{Cell, Sprite, TilePos};
pub use layout::Layout;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct Game {
    /// Cell grid.
    pub board: Board,
    /// Mapping between pixels and cells.
    pub layout: Layout,
    /// Source of randomness for mine placement.
    rng: StdRng,
    /// Key that starts a new game once the current one is over.
    reset_key: VirtualKeyCode,

    /// Position of the mouse cursor.
    cursor_pos: Option<(u32, u32)>,
    /// Mouse click in progress.
    click: Option<input::PendingClick>,
}
impl Game {
    /// Returns a new game using the given settings.
    pub fn new(config: &Config) -> Result<Self, BoardError> {
        let board = match config.mines {
            Some(mines) => Board::with_mine_count(config.width, config.height, mines)?,
            None => Board::new(config.width, config.height)?,
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            "New {}x{} board with {} mines",
            board.width(),
            board.height(),
            board.mine_count(),
        );
        Ok(Self {
            layout: Layout::new(board.width(), board.height()),
            board,
            rng,
            reset_key: config.reset_key,

            cursor_pos: None,
            click: None,
        })
    }

    pub fn handle_event(&mut self, ev: WindowEvent<'_>) {
        match ev {
            // Handle keyboard input.
            WindowEvent::KeyboardInput { input, .. } => {
                if input.state == ElementState::Pressed {
                    self.handle_key_press(input.virtual_keycode);
                }
            }

            // Handle cursor events.
            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x.max(0.0) as u32, position.y.max(0.0) as u32);
                self.cursor_pos = Some(pos);
                if let Some(c) = &mut self.click {
                    c.update_cursor(self.layout.pixel_to_tile_pos(pos));
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_pos = None;
                self.click = None;
            }

            // Handle mouse click.
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.handle_mouse_press(button),
                ElementState::Released => self.handle_mouse_release(button),
            },

            _ => (),
        }
    }

    fn handle_key_press(&mut self, vkc: Option<VirtualKeyCode>) {
        if vkc == Some(self.reset_key) && self.board.state().is_terminal() {
            info!("Restarting");
            self.board.reset();
            self.click = None;
        }
    }

    fn handle_mouse_press(&mut self, button: MouseButton) {
        if self.click.is_some() || self.board.state().is_terminal() {
            return;
        }
        if let Some(pixel) = self.cursor_pos {
            let tile_pos = self.layout.pixel_to_tile_pos(pixel);
            self.click = Some(input::PendingClick::new(button, tile_pos));
        }
    }
    fn handle_mouse_release(&mut self, button: MouseButton) {
        let tile_pos = match self.click.and_then(|c| c.release(button)) {
            Some(pos) => pos,
            None => {
                if self.click.map_or(false, |c| c.button == button) {
                    self.click = None;
                }
                return;
            }
        };
        self.click = None;

        match button {
            MouseButton::Left => {
                let n = self.board.expose(tile_pos, &mut self.rng);
                debug!("Exposed {} cells from {:?}", n, tile_pos);
            }
            MouseButton::Right => self.board.toggle_flag(tile_pos),
            MouseButton::Middle => {
                let n = self.board.chord(tile_pos, &mut self.rng);
                debug!("Chorded {} cells around {:?}", n, tile_pos);
            }
            MouseButton::Other(_) => (),
        }
    }

    /// Returns a one-line summary of the game, suitable for a window title.
    pub fn status_text(&self) -> String {
        match self.board.state() {
            BoardState::Playing => format!(
                "Cells exposed: {}/{} | Mines: {}",
                self.board.exposed_count(),
                self.board.safe_count(),
                self.board.mines_remaining(),
            ),
            BoardState::Won => format!("You won! Press {:?} to restart", self.reset_key),
            BoardState::Lost => {
                format!("Stepped on a mine! Press {:?} to restart", self.reset_key)
            }
        }
    }
}
