use itertools::Itertools;

/// Cell coordinates, with `x` increasing to the right and `y` increasing
/// downward.
///
/// Coordinates are signed so that neighbors of edge cells can be named before
/// being bounds-checked against a board.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TilePos(pub i32, pub i32);
impl TilePos {
    /// Returns an iterator over the 8 surrounding positions, which may lie
    /// outside the board.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&offset| offset != (0, 0))
            .map(move |(dx, dy)| TilePos(self.0 + dx, self.1 + dy))
    }
}

/// Flag annotation added by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FlagState {
    /// No player annotation.
    None,
    /// Flag annotation.
    Flag,
}
impl Default for FlagState {
    fn default() -> Self {
        FlagState::None
    }
}

/// Visual layer of a cell. The renderer maps each one to an image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Raised cell that has not been exposed.
    Unopened,
    /// Flat exposed cell.
    Opened,
    /// Background of the mine that ended the game.
    Exploded,
    /// Adjacent mine count, from 1 to 8.
    Number(u8),
    /// Flag placed by the player.
    Flag,
    /// Mine, shown once the game is lost.
    Mine,
}

/// Single cell in the Minesweeper grid.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pos: TilePos,
    mine: bool,
    exposed: bool,
    flag: FlagState,
    adjacent_mines: u8,
}
impl Cell {
    /// Returns a new covered, mine-free cell.
    pub fn new(pos: TilePos) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Returns the position of the cell on its board.
    pub fn pos(self) -> TilePos {
        self.pos
    }
    /// Returns `true` if the cell holds a mine.
    pub fn is_mine(self) -> bool {
        self.mine
    }
    /// Returns `true` if the cell has been exposed.
    pub fn is_exposed(self) -> bool {
        self.exposed
    }
    /// Returns `true` if the player has flagged the cell.
    pub fn is_flagged(self) -> bool {
        self.flag == FlagState::Flag
    }
    /// Returns the player annotation on the cell.
    pub fn flag(self) -> FlagState {
        self.flag
    }
    /// Returns the number of mines around the cell.
    ///
    /// This is only meaningful for exposed cells without a mine; it is `0`
    /// everywhere else.
    pub fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub(super) fn set_mine(&mut self, mine: bool) {
        self.mine = mine;
    }
    pub(super) fn set_exposed(&mut self, adjacent_mines: u8) {
        self.exposed = true;
        self.adjacent_mines = adjacent_mines;
    }
    pub(super) fn set_flag(&mut self, flag: FlagState) {
        self.flag = flag;
    }

    /// Returns the visual layers of the cell, from bottom to top.
    pub fn sprites(self) -> impl Iterator<Item = Sprite> {
        let (bg, fg) = if !self.exposed {
            let fg = match self.flag {
                FlagState::None => None,
                FlagState::Flag => Some(Sprite::Flag),
            };
            (Sprite::Unopened, fg)
        } else if self.mine {
            (Sprite::Opened, Some(Sprite::Mine))
        } else if self.adjacent_mines == 0 {
            (Sprite::Opened, None)
        } else {
            (Sprite::Opened, Some(Sprite::Number(self.adjacent_mines)))
        };
        std::iter::once(bg).chain(fg)
    }
}
