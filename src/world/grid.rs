use glam::{Vec2, vec2};
use once_cell::sync::Lazy;
use thiserror::Error;

/// State of one map tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Solid,
}

/// Fixed-size tile map (immutable after construction).
///
/// Cells are stored row-major with **row 0 = the top map row**, exactly as a
/// map literal reads on screen. World Y grows upward, so storage row `r`
/// covers the world-Y band `[(rows-1-r)*tile, (rows-r)*tile)`; every
/// world↔cell conversion below goes through that inversion.
#[derive(Clone, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    tile: f32,
    cells: Vec<Cell>,
}

/// Errors that can be encountered while building a [`Grid`].
#[derive(Error, Debug)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("{cols}x{rows} does not match {len} cells")]
    DimensionMismatch {
        cols: usize,
        rows: usize,
        len: usize,
    },

    #[error("tile size must be positive and finite, got {0}")]
    BadTileSize(f32),
}

impl Grid {
    /// Build a grid from a row-major cell list (row 0 = top row).
    pub fn new(cols: usize, rows: usize, tile: f32, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 || cells.is_empty() {
            return Err(GridError::Empty);
        }
        if cols * rows != cells.len() {
            return Err(GridError::DimensionMismatch {
                cols,
                rows,
                len: cells.len(),
            });
        }
        if !(tile > 0.0 && tile.is_finite()) {
            return Err(GridError::BadTileSize(tile));
        }
        Ok(Self {
            cols,
            rows,
            tile,
            cells,
        })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// World units per tile edge.
    #[inline]
    pub fn tile(&self) -> f32 {
        self.tile
    }

    /// Larger of the two dimensions – upper bound on grid-line crossings a
    /// ray can make before leaving the map.
    #[inline]
    pub fn max_dim(&self) -> usize {
        self.cols.max(self.rows)
    }

    /// World-space extent of the whole map.
    #[inline]
    pub fn size_world(&self) -> Vec2 {
        vec2(self.cols as f32 * self.tile, self.rows as f32 * self.tile)
    }

    /// Cell state at storage indices `(col, row)`.
    ///
    /// Anything outside the grid reads as `Solid`: a ray or player probing
    /// past the edge must never see open space.
    #[inline]
    pub fn cell(&self, col: i32, row: i32) -> Cell {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return Cell::Solid;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    /// Storage indices of the tile containing world point `p`.
    ///
    /// Floor division, so a point exactly on a grid line belongs to the
    /// higher-index world band (the tile above / to the right of the line).
    /// The result may lie outside the grid; `cell` treats that as solid.
    #[inline]
    pub fn world_to_cell(&self, p: Vec2) -> (i32, i32) {
        let col = (p.x / self.tile).floor() as i32;
        let band = (p.y / self.tile).floor() as i32;
        (col, self.rows as i32 - 1 - band)
    }

    /// Cell state at world point `p`.
    #[inline]
    pub fn cell_at_world(&self, p: Vec2) -> Cell {
        let (col, row) = self.world_to_cell(p);
        self.cell(col, row)
    }

    /// Bottom-left world corner of tile `(col, row)` – the reference point
    /// for overlay rendering and grid-line arithmetic.
    #[inline]
    pub fn cell_origin(&self, col: i32, row: i32) -> Vec2 {
        let band = self.rows as i32 - 1 - row;
        vec2(col as f32 * self.tile, band as f32 * self.tile)
    }

    /// The built-in 8×8 demo map: solid border, a few interior pillars.
    pub fn demo() -> Grid {
        DEMO.clone()
    }
}

static DEMO: Lazy<Grid> = Lazy::new(|| {
    use Cell::Open as O;
    use Cell::Solid as S;

    #[rustfmt::skip]
    let cells = vec![
        S, S, S, S, S, S, S, S,
        S, S, O, O, O, S, S, S,
        S, O, O, O, O, O, S, S,
        S, S, S, O, O, O, O, S,
        S, O, O, S, O, O, S, S,
        S, O, O, O, S, O, O, S,
        S, S, O, O, O, O, S, S,
        S, S, S, S, S, S, S, S,
    ];
    Grid::new(8, 8, 64.0, cells).expect("demo map literal is well-formed")
});

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_construction() {
        assert!(matches!(
            Grid::new(0, 0, 64.0, vec![]),
            Err(GridError::Empty)
        ));
        assert!(matches!(
            Grid::new(3, 3, 64.0, vec![Cell::Open; 8]),
            Err(GridError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Grid::new(2, 2, 0.0, vec![Cell::Open; 4]),
            Err(GridError::BadTileSize(_))
        ));
        assert!(matches!(
            Grid::new(2, 2, f32::NAN, vec![Cell::Open; 4]),
            Err(GridError::BadTileSize(_))
        ));
    }

    #[test]
    fn out_of_bounds_reads_solid() {
        let g = Grid::demo();
        assert_eq!(g.cell(-1, 0), Cell::Solid);
        assert_eq!(g.cell(0, -1), Cell::Solid);
        assert_eq!(g.cell(8, 0), Cell::Solid);
        assert_eq!(g.cell(0, 8), Cell::Solid);
    }

    #[test]
    fn world_row_inversion() {
        let g = Grid::demo();
        // Bottom-left world corner is the *last* storage row.
        assert_eq!(g.world_to_cell(vec2(1.0, 1.0)), (0, 7));
        // Top-left corner region maps to storage row 0.
        assert_eq!(g.world_to_cell(vec2(1.0, 511.0)), (0, 0));
        // Interior: world (300, 300) sits in band 4 → storage row 3.
        assert_eq!(g.world_to_cell(vec2(300.0, 300.0)), (4, 3));
        assert_eq!(g.cell_at_world(vec2(300.0, 300.0)), Cell::Open);
    }

    #[test]
    fn grid_line_belongs_to_higher_band() {
        let g = Grid::demo();
        // Exactly on the line y = 64: floor division puts the point in the
        // band above, i.e. storage row 6 rather than 7.
        assert_eq!(g.world_to_cell(vec2(100.0, 64.0)), (1, 6));
        // Same on a vertical line.
        assert_eq!(g.world_to_cell(vec2(64.0, 100.0)), (1, 6));
    }

    #[test]
    fn cell_origin_round_trips() {
        let g = Grid::demo();
        for (col, row) in [(0, 0), (3, 4), (7, 7)] {
            let origin = g.cell_origin(col, row);
            // A point nudged inside the tile converts back to the same cell.
            let inside = origin + vec2(1.0, 1.0);
            assert_eq!(g.world_to_cell(inside), (col, row));
        }
    }

    #[test]
    fn demo_map_shape() {
        let g = Grid::demo();
        assert_eq!((g.cols(), g.rows()), (8, 8));
        assert_eq!(g.size_world(), vec2(512.0, 512.0));
        // Border is sealed.
        for i in 0..8 {
            assert_eq!(g.cell(i, 0), Cell::Solid);
            assert_eq!(g.cell(i, 7), Cell::Solid);
            assert_eq!(g.cell(0, i), Cell::Solid);
            assert_eq!(g.cell(7, i), Cell::Solid);
        }
    }
}
