use crate::{log, SessionRng};
use super::body::Snake;
use super::grid::{Grid, GridSnapshot};
use super::open_cells::OpenCells;
use super::types::{Cell, DeathReason, Direction, GameOver, Mode, Position};

/// Single-player snake simulation on a fixed `rows x cols` board.
///
/// The engine is driven from outside: `set_direction` on input, `advance`
/// once per tick. It has no notion of time and is not meant to be shared
/// between threads without external serialization.
#[derive(Clone, Debug)]
pub struct GridSimulationEngine {
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    open_cells: OpenCells,
    direction: Direction,
    pending_direction: Option<Direction>,
    mode: Mode,
    score: u32,
    game_over: Option<GameOver>,
    rng: SessionRng,
}

impl GridSimulationEngine {
    /// Starts a game with a random head cell, a random food cell and a
    /// heading toward the farthest edge. The engine starts in `Mode::Bounded`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize, mut rng: SessionRng) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");

        let head = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let mut engine = Self {
            grid: Grid::new(rows, cols),
            snake: Snake::new(head),
            food: None,
            open_cells: OpenCells::all(rows, cols),
            direction: initial_direction(head, rows, cols),
            pending_direction: None,
            mode: Mode::Bounded,
            score: 0,
            game_over: None,
            rng,
        };
        engine.grid.set(head, Cell::SnakeBody);
        engine.open_cells.remove(head);
        engine.place_food();
        engine
    }

    /// Throws the current game away and deals a new one. Only the mode
    /// survives; the random stream continues where it left off.
    pub fn reset(&mut self) {
        let mode = self.mode;
        *self = Self::new(self.grid.rows(), self.grid.cols(), self.rng.clone());
        self.mode = mode;
        log!("Engine reset ({} mode)", mode_name(mode));
    }

    /// Requests a new heading for the next `advance`. A 180 degree turn is
    /// ignored unless the snake is a single cell.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.snake.len() > 1 && direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    pub fn advance(&mut self) -> Result<GridSnapshot, GameOver> {
        if let Some(game_over) = self.game_over {
            return Err(game_over);
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let target = self
            .next_head_position()
            .map_err(|reason| self.end_game(reason))?;

        match self.grid.get(target) {
            // The tail has not moved yet, so running into it also counts.
            Cell::SnakeBody => return Err(self.end_game(DeathReason::SelfCollision)),
            Cell::Food => self.eat(target),
            Cell::Empty => self.slither(target),
        }

        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot(self.snake.head(), self.score)
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    /// `None` only once the snake covers every cell.
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn open_cell_count(&self) -> usize {
        self.open_cells.len()
    }

    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn next_head_position(&self) -> Result<Position, DeathReason> {
        let head = self.snake.head();
        let rows = self.grid.rows();
        let cols = self.grid.cols();

        let at_edge = match self.direction {
            Direction::Up => head.row == 0,
            Direction::Down => head.row + 1 == rows,
            Direction::Left => head.col == 0,
            Direction::Right => head.col + 1 == cols,
        };

        if at_edge && self.mode == Mode::Bounded {
            return Err(DeathReason::WallCollision);
        }

        let next = match (self.direction, at_edge) {
            (Direction::Up, false) => Position::new(head.row - 1, head.col),
            (Direction::Up, true) => Position::new(rows - 1, head.col),
            (Direction::Down, false) => Position::new(head.row + 1, head.col),
            (Direction::Down, true) => Position::new(0, head.col),
            (Direction::Left, false) => Position::new(head.row, head.col - 1),
            (Direction::Left, true) => Position::new(head.row, cols - 1),
            (Direction::Right, false) => Position::new(head.row, head.col + 1),
            (Direction::Right, true) => Position::new(head.row, 0),
        };

        Ok(next)
    }

    fn eat(&mut self, target: Position) {
        self.occupy(target);
        self.score += 1;
        log!("Snake ate food at {}. Score: {}", target, self.score);
        self.place_food();
    }

    fn slither(&mut self, target: Position) {
        self.occupy(target);
        let tail = self.snake.pop_tail();
        self.grid.set(tail, Cell::Empty);
        self.open_cells.insert(tail);
    }

    fn occupy(&mut self, target: Position) {
        self.snake.push_head(target);
        self.grid.set(target, Cell::SnakeBody);
        self.open_cells.remove(target);
    }

    fn place_food(&mut self) {
        self.food = self.open_cells.sample(&mut self.rng);
        match self.food {
            Some(food) => {
                self.grid.set(food, Cell::Food);
                crate::debug_log!("Food spawned at {}", food);
            }
            None => log!("No open cells left, board is full"),
        }
    }

    fn end_game(&mut self, reason: DeathReason) -> GameOver {
        let game_over = GameOver {
            reason,
            score: self.score,
        };
        self.game_over = Some(game_over);
        log!("{} (head at {})", game_over, self.snake.head());
        game_over
    }

    /// Builds an engine with an exact board layout. `body` is tail to head.
    #[cfg(test)]
    pub(crate) fn with_layout(
        rows: usize,
        cols: usize,
        body: &[Position],
        food: Option<Position>,
        direction: Direction,
        mode: Mode,
    ) -> Self {
        let mut grid = Grid::new(rows, cols);
        let mut open_cells = OpenCells::all(rows, cols);
        for &pos in body {
            grid.set(pos, Cell::SnakeBody);
            open_cells.remove(pos);
        }
        if let Some(food) = food {
            grid.set(food, Cell::Food);
        }
        Self {
            grid,
            snake: Snake::from_body(body),
            food,
            open_cells,
            direction,
            pending_direction: None,
            mode,
            score: 0,
            game_over: None,
            rng: SessionRng::new(42),
        }
    }
}

/// Heading toward the farthest edge. Candidates are scanned left, right, up,
/// down and a later one only wins on a strictly larger distance.
fn initial_direction(head: Position, rows: usize, cols: usize) -> Direction {
    let candidates = [
        (Direction::Left, head.col),
        (Direction::Right, cols - head.col),
        (Direction::Up, head.row),
        (Direction::Down, rows - head.row),
    ];

    let mut best = (Direction::Right, 0);
    for (direction, distance) in candidates {
        if distance > best.1 {
            best = (direction, distance);
        }
    }
    best.0
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Bounded => "bounded",
        Mode::Wraparound => "wraparound",
    }
}
