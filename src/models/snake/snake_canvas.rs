//! Painting the game onto a cell buffer the views can draw.
use log::debug;

use super::snake_grid::{Grid, Position};

/// What a painted cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeBlock {
    Empty,
    Food,
    SnakeBody,
    SnakeHead,
}

/// Receives one filled cell at a time.
pub trait CellPainter {
    fn fill_cell(&mut self, cell: Position, block: SnakeBlock);
}

/// A `height × width` buffer of painted cells, indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCanvas {
    grid: Grid,
    cells: Vec<Vec<SnakeBlock>>,
}

impl GridCanvas {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![vec![SnakeBlock::Empty; grid.width()]; grid.height()],
        }
    }

    #[must_use]
    pub fn rows(&self) -> &Vec<Vec<SnakeBlock>> {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, cell: Position) -> Option<SnakeBlock> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        self.cells.get(y)?.get(x).copied()
    }
}

impl CellPainter for GridCanvas {
    fn fill_cell(&mut self, cell: Position, block: SnakeBlock) {
        if !self.grid.contains(cell) {
            // the head leaves the grid on the losing tick
            debug!("Skipping paint of {:?} outside the grid", cell);
            return;
        }
        if let (Ok(x), Ok(y)) = (usize::try_from(cell.x), usize::try_from(cell.y)) {
            self.cells[y][x] = block;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_inside_and_ignores_outside() {
        let mut canvas = GridCanvas::new(Grid::new(4, 3));
        canvas.fill_cell(Position::new(3, 2), SnakeBlock::Food);
        canvas.fill_cell(Position::new(4, 0), SnakeBlock::SnakeHead);
        canvas.fill_cell(Position::new(-1, 0), SnakeBlock::SnakeHead);

        assert_eq!(canvas.rows().len(), 3);
        assert_eq!(canvas.rows()[0].len(), 4);
        assert_eq!(canvas.get(Position::new(3, 2)), Some(SnakeBlock::Food));
        assert_eq!(canvas.get(Position::new(4, 0)), None);
        let painted = canvas
            .rows()
            .iter()
            .flatten()
            .filter(|b| **b != SnakeBlock::Empty)
            .count();
        assert_eq!(painted, 1);
    }
}
