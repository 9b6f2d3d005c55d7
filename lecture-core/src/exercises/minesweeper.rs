//! A minesweeper board with intention-revealing names.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("position {position} is outside a board of {size} cells")]
    OutOfBounds { position: usize, size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: usize,
    pub is_flagged: bool,
    pub has_mine: bool,
}

impl Cell {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            is_flagged: false,
            has_mine: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// A board of `size` unflagged cells without mines.
    pub fn new(size: usize) -> Self {
        Self {
            cells: (0..size).map(Cell::new).collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn flag(&mut self, position: usize) -> Result<(), BoardError> {
        self.cell_mut(position)?.is_flagged = true;
        Ok(())
    }

    pub fn unflag(&mut self, position: usize) -> Result<(), BoardError> {
        self.cell_mut(position)?.is_flagged = false;
        Ok(())
    }

    pub fn place_mine(&mut self, position: usize) -> Result<(), BoardError> {
        self.cell_mut(position)?.has_mine = true;
        Ok(())
    }

    /// Flagged cells in board order.
    pub fn flagged_cells(&self) -> Vec<Cell> {
        self.cells.iter().filter(|cell| cell.is_flagged).copied().collect()
    }

    fn cell_mut(&mut self, position: usize) -> Result<&mut Cell, BoardError> {
        let size = self.cells.len();
        self.cells
            .get_mut(position)
            .ok_or(BoardError::OutOfBounds { position, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged_cells() {
        let mut board = Board::new(64);
        board.flag(2).unwrap();

        assert_eq!(
            board.flagged_cells(),
            vec![Cell {
                position: 2,
                is_flagged: true,
                has_mine: false
            }]
        );
    }

    #[test]
    fn test_flagged_cells_in_board_order() {
        let mut board = Board::new(10);
        board.flag(7).unwrap();
        board.flag(1).unwrap();
        board.flag(4).unwrap();
        board.unflag(4).unwrap();
        board.place_mine(7).unwrap();

        let positions: Vec<usize> = board.flagged_cells().iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 7]);
        assert!(board.cells()[7].has_mine);
    }

    #[test]
    fn test_flag_out_of_bounds() {
        let mut board = Board::new(8);
        assert_eq!(
            board.flag(8),
            Err(BoardError::OutOfBounds { position: 8, size: 8 })
        );
        assert!(board.flagged_cells().is_empty());
    }
}
