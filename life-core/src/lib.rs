/**
* A live cell dies if it has fewer than two live neighbours.
* A live cell with two or three live neighbours lives on to the next generation.
* A live cell with more than three live neighbours dies.
* A dead cell will be brought back to life if it has exactly three live neighbours.
* The board has hard edges: everything outside it counts as permanently dead.
*/

pub mod grid {
    use crate::grid::CellState::{Alive, Dead};
    use rand::Rng;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CellState {
        Dead,
        Alive,
    }

    /// A finite Game of Life board.
    ///
    /// Cells are addressed by `(col, row)` with the origin in the top-left
    /// corner. A zero-sized board is valid and every operation on it is a
    /// no-op.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct LifeGrid {
        width: usize,
        height: usize,
        cells: Vec<Vec<CellState>>,
    }

    impl LifeGrid {
        pub fn new(width: usize, height: usize) -> Self {
            LifeGrid {
                width,
                height,
                cells: vec![vec![Dead; width]; height],
            }
        }

        /// Randomly populated board with `density` percent of cells alive.
        pub fn seeded(width: usize, height: usize, density: u8) -> Self {
            let mut grid = LifeGrid::new(width, height);
            grid.reseed(width, height, density);
            grid
        }

        /// Board sized to a pixel canvas: the extent is the number of whole
        /// cells of `cell_size` pixels that fit in each direction.
        pub fn from_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32, density: u8) -> Self {
            if cell_size == 0 {
                return LifeGrid::default();
            }
            LifeGrid::seeded(
                (canvas_width / cell_size) as usize,
                (canvas_height / cell_size) as usize,
                density,
            )
        }

        /// Replace the whole board with fresh random content. Each cell
        /// comes alive iff a uniform draw in `[0, 100)` falls below
        /// `density`, so 0 seeds an all-dead board and 100 an all-alive one.
        pub fn reseed(&mut self, width: usize, height: usize, density: u8) {
            let mut rng = rand::rng();
            self.width = width;
            self.height = height;
            self.cells = (0..height)
                .map(|_| {
                    (0..width)
                        .map(|_| if rng.random_range(0..100) < density { Alive } else { Dead })
                        .collect()
                })
                .collect();
        }

        pub fn dimensions(&self) -> (usize, usize) {
            (self.width, self.height)
        }

        /// Whether the cell at `(col, row)` is alive. Coordinates outside
        /// the board read as dead, which is what the neighbour scan relies
        /// on at the edges.
        pub fn is_alive(&self, col: isize, row: isize) -> bool {
            if col < 0 || row < 0 {
                return false;
            }
            let (col, row) = (col as usize, row as usize);
            col < self.width && row < self.height && self.cells[row][col] == Alive
        }

        /// Number of live cells among the 8 surrounding positions.
        pub fn live_neighbours(&self, col: isize, row: isize) -> usize {
            let mut count = 0;
            for dc in -1..=1 {
                for dr in -1..=1 {
                    if dc == 0 && dr == 0 {
                        // Skip the cell itself
                        continue;
                    }
                    if self.is_alive(col + dc, row + dr) {
                        count += 1;
                    }
                }
            }
            count
        }

        /// Advance the board by one generation.
        ///
        /// The next generation is written into a second buffer while all
        /// neighbour counts read the untouched current one, then committed
        /// in a single swap. Every cell therefore sees the same pre-step
        /// board regardless of traversal order. Returns whether anything
        /// changed.
        pub fn step(&mut self) -> bool {
            let mut next = vec![vec![Dead; self.width]; self.height];

            for row in 0..self.height {
                for col in 0..self.width {
                    let neighbours = self.live_neighbours(col as isize, row as isize);

                    next[row][col] = match (self.cells[row][col], neighbours) {
                        (Alive, 2..=3) => Alive, // survives
                        (Dead, 3) => Alive,      // born
                        _ => Dead,               // dies or stays dead
                    };
                }
            }

            if self.cells == next {
                return false;
            }
            self.cells = next;
            true
        }

        /// Turn every addressed cell alive. Coordinates outside the board
        /// are ignored; the board never grows to fit an edit.
        pub fn insert_life<I>(&mut self, cells: I)
        where
            I: IntoIterator<Item = (usize, usize)>,
        {
            for (col, row) in cells {
                if col < self.width && row < self.height {
                    self.cells[row][col] = Alive;
                }
            }
        }
    }
}
