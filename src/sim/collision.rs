//! Pure tile-collision predicates.
//!
//! No drawing, no state: the controller asks questions here *before* it
//! commits a move, and the per-frame update asks again with the raw
//! position. Both questions reduce to "which cell would the player occupy,
//! and is it solid" – with out-of-grid treated as solid by [`Grid::cell`].

use glam::Vec2;

use crate::world::{Cell, Grid};

/// Would the player's leading edge land in a solid tile?
///
/// The leading edge is the position after applying the pending delta scaled
/// by `look_ahead` – probing a little further than one step so the player
/// cannot press face-first into a wall over several frames.
#[inline]
pub fn leading_edge_blocked(grid: &Grid, pos: Vec2, delta: Vec2, look_ahead: f32) -> bool {
    grid.cell_at_world(pos + delta * look_ahead) == Cell::Solid
}

/// Is the raw position itself inside a solid tile?
///
/// Runs every frame regardless of input: near a corner the non-dominant
/// coordinate can drift a position into a wall even when no move command
/// was issued.
#[inline]
pub fn inside_wall(grid: &Grid, pos: Vec2) -> bool {
    grid.cell_at_world(pos) == Cell::Solid
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
