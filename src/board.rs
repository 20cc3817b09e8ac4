//! `board` — Graph of walkable letter tiles built from one grid snapshot.
//!
//! Each populated grid cell becomes a vertex; a double tile like "Q/U"
//! becomes two vertices that are mutually adjacent on top of sharing the
//! cell's geometric neighbors. Adjacency is king-move: all eight directions.
//!
//! The board is rebuilt from scratch for every grid snapshot and is
//! read-only once built.

use crate::errors::GridError;

/// Separator between the two letters of a double tile.
pub const DOUBLE_TILE_SEPARATOR: char = '/';

/// Relative offsets of the already-processed cells during the row-major
/// construction scan. Linking each new vertex back to these four (with edges
/// added in both directions) yields full 8-direction adjacency without ever
/// scanning forward: the forward half of each pair is handled when the later
/// cell looks back.
const BACKWARD_OFFSETS: [(isize, isize); 4] = [(-1, -1), (-1, 0), (-1, 1), (0, -1)];

/// One walkable unit of board content.
#[derive(Debug)]
pub struct Tile {
    /// The letter this vertex contributes to a path. Always uppercase.
    pub content: char,
    /// Indices of adjacent vertices. Symmetric and self-loop-free.
    pub neighbors: Vec<usize>,
}

impl Tile {
    fn new(content: char) -> Self {
        Tile {
            content: content.to_ascii_uppercase(),
            neighbors: Vec::new(),
        }
    }
}

/// What one validated grid cell contributes to the board.
enum Cell {
    Hole,
    Single(char),
    Double(char, char),
}

/// Classify one grid cell string.
///
/// Legal shapes: empty (hole), one alphabetic character, or exactly two
/// alphabetic characters joined by [`DOUBLE_TILE_SEPARATOR`]. Anything else
/// is a malformed cell.
fn classify_cell(cell: &str, row: usize, col: usize) -> Result<Cell, GridError> {
    let malformed = || GridError::MalformedCell {
        cell: cell.to_string(),
        row,
        col,
    };

    let mut chars = cell.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (None, ..) => Ok(Cell::Hole),
        (Some(c), None, ..) if c.is_ascii_alphabetic() => Ok(Cell::Single(c)),
        (Some(a), Some(sep), Some(b), None)
            if sep == DOUBLE_TILE_SEPARATOR
                && a.is_ascii_alphabetic()
                && b.is_ascii_alphabetic() =>
        {
            Ok(Cell::Double(a, b))
        }
        _ => Err(malformed()),
    }
}

/// The tile graph for one grid snapshot.
#[derive(Debug, Default)]
pub struct Board {
    /// Vertices in creation (row-major) order.
    pub tiles: Vec<Tile>,
}

impl Board {
    /// Builds the board graph from a rows x columns grid of cell strings.
    ///
    /// Empty cells are holes: they produce no vertex and are invisible to
    /// the graph. A "Q/U" cell produces two vertices linked to each other,
    /// each carrying the cell's full geometric neighbor set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedGrid`] if rows differ in length, or
    /// [`GridError::MalformedCell`] for a cell that is not empty, a single
    /// letter, or a double tile.
    pub fn from_grid(grid: &[Vec<String>]) -> Result<Board, GridError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedGrid {
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        let mut tiles: Vec<Tile> = Vec::new();
        // Scratch lookup from grid position to the vertex indices placed
        // there (0, 1, or 2 of them). Scoped to this build.
        let mut placed: Vec<Vec<Vec<usize>>> = vec![vec![Vec::new(); cols]; rows];

        for r in 0..rows {
            for c in 0..cols {
                let first = tiles.len();
                match classify_cell(&grid[r][c], r, c)? {
                    Cell::Hole => continue,
                    Cell::Single(a) => tiles.push(Tile::new(a)),
                    Cell::Double(a, b) => {
                        tiles.push(Tile::new(a));
                        tiles.push(Tile::new(b));
                        // The two letters of a double tile can follow each
                        // other within a path.
                        tiles[first].neighbors.push(first + 1);
                        tiles[first + 1].neighbors.push(first);
                    }
                }
                let created: Vec<usize> = (first..tiles.len()).collect();

                for (dr, dc) in BACKWARD_OFFSETS {
                    let (Some(nr), Some(nc)) =
                        (r.checked_add_signed(dr), c.checked_add_signed(dc))
                    else {
                        continue;
                    };
                    // (-1, 1) can step past the right edge.
                    if nc >= cols {
                        continue;
                    }
                    for &earlier in &placed[nr][nc] {
                        for &mine in &created {
                            tiles[earlier].neighbors.push(mine);
                            tiles[mine].neighbors.push(earlier);
                        }
                    }
                }
                placed[r][c] = created;
            }
        }

        log::debug!(
            "built board: {} vertices from {}x{} grid",
            tiles.len(),
            rows,
            cols
        );
        Ok(Board { tiles })
    }

    /// Number of vertices on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
