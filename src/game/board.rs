use log::{debug, info, trace};
use rand::Rng;
use std::convert::TryFrom;
use std::fmt;

use super::cell::{Cell, FlagState, TilePos};

/// Fraction of cells that hold a mine, unless the mine count is given
/// explicitly.
pub const MINE_DENSITY_DIVISOR: usize = 10;

/// Maximum number of cells excluded from mine placement around the first
/// exposed cell: the cell itself and its 8 neighbors.
const FIRST_CLICK_EXCLUSION: usize = 9;

/// Error constructing a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The board has no cells.
    EmptyBoard { width: usize, height: usize },
    /// The board has more rows, columns, or cells than can be addressed.
    TooLarge { width: usize, height: usize },
    /// There are not enough cells to place every mine while keeping the first
    /// exposed cell and its neighbors safe.
    TooManyMines { mines: usize, eligible: usize },
}
impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyBoard { width, height } => {
                write!(f, "board must not be empty (got {}x{})", width, height)
            }
            BoardError::TooLarge { width, height } => {
                write!(f, "board is too large (got {}x{})", width, height)
            }
            BoardError::TooManyMines { mines, eligible } => write!(
                f,
                "cannot place {} mines; only {} cells are guaranteed to be available",
                mines, eligible,
            ),
        }
    }
}
impl std::error::Error for BoardError {}

/// Progress of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoardState {
    /// The game is in progress.
    Playing,
    /// Every safe cell has been exposed.
    Won,
    /// A mine has been exposed.
    Lost,
}
impl Default for BoardState {
    fn default() -> Self {
        BoardState::Playing
    }
}
impl BoardState {
    /// Returns `true` if no more input is accepted until the board is reset.
    pub fn is_terminal(self) -> bool {
        self != BoardState::Playing
    }
}

/// Whether mines have been placed on the board yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Mines {
    /// Mines will be placed on the first exposure, away from the exposed cell.
    Pending { count: usize },
    /// Mines are on the board.
    Placed { count: usize },
}
impl Mines {
    fn count(self) -> usize {
        match self {
            Mines::Pending { count } | Mines::Placed { count } => count,
        }
    }
}

/// Rectangular Minesweeper board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    mines: Mines,
    /// Number of exposed cells without a mine.
    exposed: usize,
    flags: usize,
    state: BoardState,
    /// Mine that ended the game.
    losing_cell: Option<TilePos>,
}
impl Board {
    /// Returns a new board with mines pending, using the default density of
    /// one mine per ten cells.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let cells = Self::cell_count(width, height)?;
        Self::with_mine_count(width, height, cells / MINE_DENSITY_DIVISOR)
    }
    /// Returns a new board with mines pending and an explicit mine count.
    pub fn with_mine_count(width: usize, height: usize, mines: usize) -> Result<Self, BoardError> {
        // Any first exposure excludes at most 9 indices, wherever it lands.
        let eligible = Self::cell_count(width, height)?.saturating_sub(FIRST_CLICK_EXCLUSION);
        if mines > eligible {
            return Err(BoardError::TooManyMines { mines, eligible });
        }

        let mut ret = Self {
            width,
            height,
            cells: vec![],
            mines: Mines::Pending { count: mines },
            exposed: 0,
            flags: 0,
            state: BoardState::Playing,
            losing_cell: None,
        };
        ret.reset();
        Ok(ret)
    }
    /// Returns the number of cells on a board of the given size, checking that
    /// every position fits in a `TilePos`.
    fn cell_count(width: usize, height: usize) -> Result<usize, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(BoardError::TooLarge { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })
    }
    /// Returns a new board with mines already placed at the given positions.
    /// Out-of-bounds and repeated positions are ignored.
    ///
    /// The mine count must still leave room for a safe first exposure, since
    /// resetting the board places the same number of mines randomly.
    #[cfg(test)]
    pub fn with_mines(
        width: usize,
        height: usize,
        mines: impl IntoIterator<Item = TilePos>,
    ) -> Result<Self, BoardError> {
        let mut ret = Self::with_mine_count(width, height, 0)?;
        let mut count = 0;
        for pos in mines {
            if let Some(cell) = ret.get_cell_mut(pos) {
                if !cell.is_mine() {
                    cell.set_mine(true);
                    count += 1;
                }
            }
        }
        let eligible = ret.cells.len().saturating_sub(FIRST_CLICK_EXCLUSION);
        if count > eligible {
            return Err(BoardError::TooManyMines {
                mines: count,
                eligible,
            });
        }
        ret.mines = Mines::Placed { count };
        Ok(ret)
    }

    /// Returns the board to its freshly constructed state: every cell covered
    /// and mine placement pending.
    pub fn reset(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        self.cells = (0..h)
            .flat_map(|y| (0..w).map(move |x| Cell::new(TilePos(x, y))))
            .collect();
        self.mines = Mines::Pending {
            count: self.mines.count(),
        };
        self.exposed = 0;
        self.flags = 0;
        self.state = BoardState::Playing;
        self.losing_cell = None;
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the number of mines on the board, or that will be placed on the
    /// first exposure.
    pub fn mine_count(&self) -> usize {
        self.mines.count()
    }
    /// Returns `true` once mines have been placed.
    pub fn mines_placed(&self) -> bool {
        matches!(self.mines, Mines::Placed { .. })
    }
    /// Returns the number of exposed cells without a mine.
    pub fn exposed_count(&self) -> usize {
        self.exposed
    }
    /// Returns the number of cells that must be exposed to win.
    pub fn safe_count(&self) -> usize {
        self.cells.len() - self.mine_count()
    }
    /// Returns the number of flags placed.
    pub fn flag_count(&self) -> usize {
        self.flags
    }
    /// Returns the number of mines not accounted for by a flag.
    pub fn mines_remaining(&self) -> usize {
        self.mine_count().saturating_sub(self.flag_count())
    }
    /// Returns the progress of the game.
    pub fn state(&self) -> BoardState {
        self.state
    }
    /// Returns the mine that ended the game, if any.
    pub fn losing_cell(&self) -> Option<TilePos> {
        self.losing_cell
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
    /// Returns a cell, or `None` if the position is out of bounds.
    pub fn get_cell(&self, pos: TilePos) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }
    fn get_cell_mut(&mut self, pos: TilePos) -> Option<&mut Cell> {
        let i = self.index_of(pos)?;
        Some(&mut self.cells[i])
    }
    /// Returns the row-major index of a position, or `None` if the position is
    /// out of bounds.
    fn index_of(&self, TilePos(x, y): TilePos) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some(y as usize * self.width + x as usize)
        }
    }
    /// Returns an iterator over the neighbors of a position that are on the
    /// board.
    fn neighbors(&self, pos: TilePos) -> impl Iterator<Item = TilePos> + '_ {
        pos.neighbors().filter(move |&p| self.index_of(p).is_some())
    }
    /// Returns the number of neighboring cells that satisfy a predicate.
    fn count_neighbors(&self, pos: TilePos, mut predicate: impl FnMut(Cell) -> bool) -> u8 {
        self.neighbors(pos)
            .filter(|&p| self.get_cell(p).map_or(false, &mut predicate))
            .count() as u8
    }

    /// Places mines away from `origin`, if they have not been placed already.
    ///
    /// The exclusion zone is computed from raw row-major index offsets, so near
    /// the left and right edges it also covers a couple of cells that wrap
    /// around to the neighboring rows.
    pub fn generate_mines(&mut self, origin: TilePos, rng: &mut impl Rng) {
        let count = match self.mines {
            Mines::Pending { count } => count,
            Mines::Placed { .. } => return,
        };
        debug!("Placing {} mines after exposing {:?}", count, origin);

        let w = self.width as i64;
        let origin_index = origin.1 as i64 * w + origin.0 as i64;
        let excluded = [
            origin_index - w - 1,
            origin_index - w,
            origin_index - w + 1,
            origin_index - 1,
            origin_index,
            origin_index + 1,
            origin_index + w - 1,
            origin_index + w,
            origin_index + w + 1,
        ];
        trace!("Excluded indices: {:?}", excluded);

        let mut placed = 0;
        while placed < count {
            let index = rng.gen_range(0..self.cells.len());
            if excluded.contains(&(index as i64)) || self.cells[index].is_mine() {
                continue;
            }
            self.cells[index].set_mine(true);
            placed += 1;
            trace!(
                "Placed mine at ({}, {})",
                index % self.width,
                index / self.width,
            );
        }
        self.mines = Mines::Placed { count };
    }

    /// Exposes a cell, placing mines first if this is the first exposure.
    ///
    /// If the cell has no adjacent mines, exposure cascades to its neighbors.
    /// Does nothing if the cell is out of bounds, already exposed, or flagged,
    /// or if the game is over. Returns the number of cells newly exposed.
    pub fn expose(&mut self, pos: TilePos, rng: &mut impl Rng) -> usize {
        self.update_state();
        if self.state.is_terminal() {
            return 0;
        }
        match self.get_cell(pos) {
            Some(c) if !c.is_exposed() && !c.is_flagged() => (),
            _ => return 0,
        }
        self.generate_mines(pos, rng);

        let exposed_before = self.exposed;
        let mut worklist = vec![pos];
        while let Some(pos) = worklist.pop() {
            let i = match self.index_of(pos) {
                Some(i) => i,
                None => continue,
            };
            let cell = self.cells[i];
            if cell.is_exposed() || cell.is_flagged() {
                continue;
            }

            if cell.is_mine() {
                // Shown as exposed, but never counted toward `exposed`.
                self.cells[i].set_exposed(0);
                self.state = BoardState::Lost;
                self.losing_cell = Some(pos);
                info!("Stepped on a mine at {:?}, game over", pos);
                return self.exposed - exposed_before;
            }

            let n = self.count_neighbors(pos, Cell::is_mine);
            self.cells[i].set_exposed(n);
            self.exposed += 1;
            if n == 0 {
                worklist.extend(
                    self.neighbors(pos)
                        .filter(|&p| self.get_cell(p).map_or(false, |c| !c.is_exposed())),
                );
            }
        }

        self.update_state();
        self.exposed - exposed_before
    }

    /// Exposes every unflagged neighbor of an exposed number, if the number of
    /// flags around it matches. Returns the number of cells newly exposed.
    pub fn chord(&mut self, pos: TilePos, rng: &mut impl Rng) -> usize {
        let n = match self.get_cell(pos) {
            Some(c) if c.is_exposed() && !c.is_mine() && c.adjacent_mines() > 0 => {
                c.adjacent_mines()
            }
            _ => return 0,
        };
        if self.count_neighbors(pos, Cell::is_flagged) != n {
            return 0;
        }
        let nbrs: Vec<TilePos> = self.neighbors(pos).collect();
        nbrs.into_iter().map(|nbr| self.expose(nbr, rng)).sum()
    }

    /// Toggles the flag on a covered cell.
    pub fn toggle_flag(&mut self, pos: TilePos) {
        if self.state.is_terminal() {
            return;
        }
        let cell = match self.get_cell_mut(pos) {
            Some(c) if !c.is_exposed() => c,
            _ => return,
        };
        match cell.flag() {
            FlagState::None => {
                cell.set_flag(FlagState::Flag);
                self.flags += 1;
            }
            FlagState::Flag => {
                cell.set_flag(FlagState::None);
                self.flags -= 1;
            }
        }
    }

    /// Moves from `Playing` to `Won` once every safe cell is exposed.
    fn update_state(&mut self) {
        if self.state == BoardState::Playing
            && self.mines_placed()
            && self.exposed == self.safe_count()
        {
            info!("All {} safe cells exposed, game won", self.exposed);
            self.state = BoardState::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xD3_1A_E4)
    }

    fn exposed_safe_cells(board: &Board) -> usize {
        board
            .cells()
            .filter(|c| c.is_exposed() && !c.is_mine())
            .count()
    }

    #[test]
    fn test_new_board_is_pending() {
        let board = Board::new(20, 20).unwrap();
        assert_eq!(board.mine_count(), 40);
        assert!(!board.mines_placed());
        assert_eq!(board.state(), BoardState::Playing);
        assert_eq!(board.exposed_count(), 0);
        assert!(board.cells().all(|c| !c.is_mine() && !c.is_exposed()));
        assert_eq!(board.cells().count(), 400);
        assert_eq!(board.get_cell(TilePos(3, 7)).unwrap().pos(), TilePos(3, 7));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::EmptyBoard {
                width: 0,
                height: 5,
            }),
        );
        assert_eq!(
            Board::with_mine_count(4, 4, 8),
            Err(BoardError::TooManyMines {
                mines: 8,
                eligible: 7,
            }),
        );
        assert!(Board::with_mine_count(4, 4, 7).is_ok());
        // Density alone never demands too many mines.
        for size in 1..12 {
            assert!(Board::new(size, size).is_ok());
            assert!(Board::new(size, 1).is_ok());
        }
    }

    #[test]
    fn test_first_exposure_is_safe() {
        let mut rng = rng();
        for &(x, y) in &[(0, 0), (19, 0), (0, 19), (19, 19), (7, 12), (10, 0)] {
            for _ in 0..20 {
                let mut board = Board::new(20, 20).unwrap();
                let origin = TilePos(x, y);
                board.expose(origin, &mut rng);
                assert!(board.mines_placed());
                assert_eq!(board.cells().filter(|c| c.is_mine()).count(), 40);
                assert!(!board.get_cell(origin).unwrap().is_mine());
                for nbr in origin.neighbors() {
                    if let Some(c) = board.get_cell(nbr) {
                        assert!(!c.is_mine(), "mine next to first exposure at {:?}", nbr);
                    }
                }
                assert_eq!(board.state(), BoardState::Playing);
                assert_eq!(board.get_cell(origin).unwrap().adjacent_mines(), 0);
            }
        }
    }

    #[test]
    fn test_oversized_dimensions() {
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            Board::new(too_wide, 1),
            Err(BoardError::TooLarge {
                width: too_wide,
                height: 1,
            }),
        );
        assert_eq!(
            Board::with_mine_count(3, usize::MAX, 0),
            Err(BoardError::TooLarge {
                width: 3,
                height: usize::MAX,
            }),
        );
        assert!(Board::new(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_explicit_layout_too_dense() {
        let all: Vec<TilePos> = (0..3).flat_map(|y| (0..3).map(move |x| TilePos(x, y))).collect();
        assert!(Board::with_mines(3, 3, all).is_err());
    }

    #[test]
    fn test_tight_mine_count_terminates() {
        let mut rng = rng();
        let mut board = Board::with_mine_count(4, 4, 7).unwrap();
        board.generate_mines(TilePos(1, 1), &mut rng);
        assert_eq!(board.cells().filter(|c| c.is_mine()).count(), 7);
    }

    #[test]
    fn test_mines_placed_once() {
        let mut rng = rng();
        let mut board = Board::new(10, 10).unwrap();
        board.expose(TilePos(5, 5), &mut rng);
        let mines: Vec<bool> = board.cells().map(|c| c.is_mine()).collect();
        board.generate_mines(TilePos(0, 0), &mut rng);
        let mines_after: Vec<bool> = board.cells().map(|c| c.is_mine()).collect();
        assert_eq!(mines, mines_after);
    }

    #[test]
    fn test_wrapped_exclusion() {
        // On a 4-wide board, the raw index to the left of (0, 1) is (3, 0).
        let mut rng = rng();
        for _ in 0..50 {
            let mut board = Board::with_mine_count(4, 5, 11).unwrap();
            board.generate_mines(TilePos(0, 1), &mut rng);
            assert!(!board.get_cell(TilePos(3, 0)).unwrap().is_mine());
            assert!(!board.get_cell(TilePos(3, 1)).unwrap().is_mine());
        }
    }

    #[test]
    fn test_flood_fill() {
        let mut rng = rng();
        // . . . . .
        // . . . . .
        // . . . 1 1
        // . . . 1 *
        let mut board = Board::with_mines(5, 4, vec![TilePos(4, 3)]).unwrap();
        let n = board.expose(TilePos(0, 0), &mut rng);
        assert_eq!(n, 19);
        assert_eq!(board.exposed_count(), 19);
        assert_eq!(board.state(), BoardState::Won);
        assert!(!board.get_cell(TilePos(4, 3)).unwrap().is_exposed());
        assert_eq!(board.get_cell(TilePos(3, 3)).unwrap().adjacent_mines(), 1);
        assert_eq!(board.get_cell(TilePos(0, 0)).unwrap().adjacent_mines(), 0);
    }

    #[test]
    fn test_flood_fill_stops_at_numbers() {
        let mut rng = rng();
        // . . 1 *
        // . . 2 2
        // . . 1 *
        let mut board = Board::with_mines(4, 3, vec![TilePos(3, 0), TilePos(3, 2)]).unwrap();
        board.expose(TilePos(0, 1), &mut rng);
        assert_eq!(board.exposed_count(), 9);
        assert_eq!(board.get_cell(TilePos(2, 1)).unwrap().adjacent_mines(), 2);
        assert!(!board.get_cell(TilePos(3, 1)).unwrap().is_exposed());
        assert!(board.cells().all(|c| !(c.is_mine() && c.is_exposed())));
        assert_eq!(board.state(), BoardState::Playing);
    }

    #[test]
    fn test_expose_number_does_not_cascade() {
        let mut rng = rng();
        let mut board = Board::with_mines(5, 5, vec![TilePos(2, 2)]).unwrap();
        assert_eq!(board.expose(TilePos(1, 1), &mut rng), 1);
        assert_eq!(board.get_cell(TilePos(1, 1)).unwrap().adjacent_mines(), 1);
        assert_eq!(board.exposed_count(), 1);
    }

    #[test]
    fn test_expose_is_idempotent() {
        let mut rng = rng();
        let mut board = Board::with_mines(5, 5, vec![TilePos(2, 2)]).unwrap();
        board.expose(TilePos(1, 1), &mut rng);
        let before = board.clone();
        assert_eq!(board.expose(TilePos(1, 1), &mut rng), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_expose_out_of_bounds() {
        let mut rng = rng();
        let mut board = Board::new(5, 5).unwrap();
        let before = board.clone();
        assert_eq!(board.expose(TilePos(-1, 0), &mut rng), 0);
        assert_eq!(board.expose(TilePos(5, 0), &mut rng), 0);
        assert_eq!(board.expose(TilePos(0, 5), &mut rng), 0);
        assert_eq!(board, before);
        assert!(!board.mines_placed());
    }

    #[test]
    fn test_win() {
        let mut rng = rng();
        // Mines far from the click at (0, 0).
        let mut board = Board::with_mines(5, 5, vec![TilePos(4, 0), TilePos(4, 4)]).unwrap();
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.state(), BoardState::Playing);
        for y in 0..5 {
            for x in 0..5 {
                let pos = TilePos(x, y);
                if !board.get_cell(pos).unwrap().is_mine() {
                    board.expose(pos, &mut rng);
                }
            }
        }
        assert_eq!(board.exposed_count(), 23);
        assert_eq!(board.state(), BoardState::Won);

        // Terminal states ignore input.
        assert_eq!(board.expose(TilePos(4, 0), &mut rng), 0);
        assert_eq!(board.state(), BoardState::Won);
    }

    #[test]
    fn test_loss() {
        let mut rng = rng();
        let mut board = Board::with_mines(5, 5, vec![TilePos(0, 0)]).unwrap();
        assert_eq!(board.expose(TilePos(0, 0), &mut rng), 0);
        assert_eq!(board.state(), BoardState::Lost);
        assert_eq!(board.losing_cell(), Some(TilePos(0, 0)));
        assert!(board.get_cell(TilePos(0, 0)).unwrap().is_exposed());
        assert_eq!(board.get_cell(TilePos(0, 0)).unwrap().adjacent_mines(), 0);
        assert_eq!(board.exposed_count(), 0);
        assert_eq!(board.cells().filter(|c| c.is_exposed()).count(), 1);

        // Nothing else is exposed afterward.
        assert_eq!(board.expose(TilePos(4, 4), &mut rng), 0);
        assert!(!board.get_cell(TilePos(4, 4)).unwrap().is_exposed());
    }

    #[test]
    fn test_exposed_count_matches_cells() {
        let mut rng = rng();
        for seed in 0..10 {
            let mut board = Board::new(12, 9).unwrap();
            let mut click_rng = StdRng::seed_from_u64(seed);
            while !board.state().is_terminal() {
                let pos = TilePos(click_rng.gen_range(0..12), click_rng.gen_range(0..9));
                board.expose(pos, &mut rng);
                assert_eq!(board.exposed_count(), exposed_safe_cells(&board));
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut rng = rng();
        let mut board = Board::new(10, 10).unwrap();
        board.expose(TilePos(3, 3), &mut rng);
        board.toggle_flag(TilePos(9, 9));
        board.reset();
        assert_eq!(board.exposed_count(), 0);
        assert_eq!(board.flag_count(), 0);
        assert!(!board.mines_placed());
        assert_eq!(board.mine_count(), 10);
        assert_eq!(board.state(), BoardState::Playing);
        assert_eq!(board.losing_cell(), None);
        assert!(board
            .cells()
            .all(|c| !c.is_mine() && !c.is_exposed() && !c.is_flagged()));
        assert_eq!(board, Board::new(10, 10).unwrap());
    }

    #[test]
    fn test_flags() {
        let mut rng = rng();
        let mut board = Board::with_mines(5, 5, vec![TilePos(2, 2)]).unwrap();
        board.toggle_flag(TilePos(0, 0));
        assert_eq!(board.flag_count(), 1);
        assert_eq!(board.mines_remaining(), 0);
        assert_eq!(board.expose(TilePos(0, 0), &mut rng), 0);
        assert!(!board.get_cell(TilePos(0, 0)).unwrap().is_exposed());

        // Flood fill goes around flagged cells.
        board.expose(TilePos(0, 4), &mut rng);
        assert!(!board.get_cell(TilePos(0, 0)).unwrap().is_exposed());
        assert!(board.get_cell(TilePos(1, 0)).unwrap().is_exposed());

        board.toggle_flag(TilePos(0, 0));
        assert_eq!(board.flag_count(), 0);
        // Exposed cells cannot be flagged.
        board.toggle_flag(TilePos(1, 0));
        assert_eq!(board.flag_count(), 0);
        board.expose(TilePos(0, 0), &mut rng);
        assert_eq!(board.state(), BoardState::Won);
    }

    #[test]
    fn test_chord() {
        let mut rng = rng();
        let mut board = Board::with_mines(5, 5, vec![TilePos(2, 2)]).unwrap();
        board.expose(TilePos(1, 1), &mut rng);

        // Not enough flags.
        assert_eq!(board.chord(TilePos(1, 1), &mut rng), 0);

        board.toggle_flag(TilePos(2, 2));
        let n = board.chord(TilePos(1, 1), &mut rng);
        assert!(n > 0);
        assert_eq!(board.exposed_count(), 24);
        assert_eq!(board.state(), BoardState::Won);
    }

    #[test]
    fn test_chord_with_wrong_flag() {
        let mut rng = rng();
        let mut board = Board::with_mines(5, 5, vec![TilePos(2, 2)]).unwrap();
        board.expose(TilePos(1, 1), &mut rng);
        board.toggle_flag(TilePos(0, 0));
        board.chord(TilePos(1, 1), &mut rng);
        assert_eq!(board.state(), BoardState::Lost);
        assert_eq!(board.losing_cell(), Some(TilePos(2, 2)));
        assert_eq!(board.cells().filter(|c| c.is_mine() && c.is_exposed()).count(), 1);
    }
}
