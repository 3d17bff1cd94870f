use super::types::{Cell, Position};

#[derive(Clone, Debug)]
pub(crate) struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn index_of(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index_of(pos)]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index_of(pos);
        self.cells[idx] = cell;
    }

    pub fn snapshot(&self, head: Position, score: u32) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
            head,
            score,
        }
    }
}

/// Copy of the board handed to the presentation layer after each step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    head: Position,
    score: u32,
}

impl GridSnapshot {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.cols + pos.col]
    }

    /// The head is also a `SnakeBody` cell; renderers shade it separately.
    pub fn head(&self) -> Position {
        self.head
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    pub fn positions_of(&self, kind: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == kind)
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl std::fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: String = self
                .row(row)
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    _ if Position::new(row, col) == self.head => '@',
                    Cell::SnakeBody => 'o',
                    Cell::Food => '*',
                    Cell::Empty => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_row_major() {
        let mut grid = Grid::new(3, 4);
        assert_eq!(grid.index_of(Position::new(1, 1)), 5);
        assert_eq!(grid.index_of(Position::new(2, 3)), 11);

        grid.set(Position::new(1, 1), Cell::Food);
        let snapshot = grid.snapshot(Position::new(0, 0), 0);
        assert_eq!(snapshot.row(1), &[Cell::Empty, Cell::Food, Cell::Empty, Cell::Empty]);
        assert_eq!(grid.get(Position::new(1, 1)), Cell::Food);
    }

    #[test]
    fn test_snapshot_text_dump() {
        let mut grid = Grid::new(2, 3);
        grid.set(Position::new(0, 0), Cell::SnakeBody);
        grid.set(Position::new(0, 1), Cell::SnakeBody);
        grid.set(Position::new(1, 2), Cell::Food);
        let snapshot = grid.snapshot(Position::new(0, 1), 0);

        assert_eq!(snapshot.to_string(), "o@.\n..*\n");
        assert_eq!(snapshot.count(Cell::SnakeBody), 2);
        assert_eq!(
            snapshot.positions_of(Cell::Food).collect::<Vec<_>>(),
            vec![Position::new(1, 2)]
        );
    }
}
