//! Distance → screen geometry.
//!
//! Pure functions: a corrected distance goes in, a vertically centred wall
//! slice comes out. Nothing here touches a pixel.

use crate::engine::raycast::{RayHit, Side};
use crate::engine::types::Screen;

/// One vertical wall slice, in ray order. `column` indexes the fan, not the
/// pixel grid; the renderer decides how wide a column is on screen.
#[derive(Clone, Copy, Debug)]
pub struct WallSlice {
    pub column: usize,
    pub top: f32,
    pub bottom: f32,
    pub side: Side,
}

impl WallSlice {
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// The projection-plane constant `K`: a wall at distance `d` spans
/// `K / d` pixels.
#[inline]
pub fn projection_constant(tile: f32, screen: &Screen) -> f32 {
    tile * screen.h as f32
}

/// Slice height for a corrected distance, clamped to the viewport.
///
/// The clamp covers both extremes: standing flush against a wall drives
/// `dist` toward zero (`K / dist → ∞`, capped at full height), and the
/// no-hit sentinel is `INFINITY` (`K / ∞ == 0`, an empty slice).
#[inline]
pub fn wall_height(dist: f32, k: f32, screen: &Screen) -> f32 {
    (k / dist).min(screen.h as f32)
}

/// Project one ray result into a centred wall slice.
pub fn project_hit(hit: &RayHit, column: usize, k: f32, screen: &Screen) -> WallSlice {
    let height = wall_height(hit.dist, k, screen);
    let top = (screen.h as f32 - height) * 0.5;
    WallSlice {
        column,
        top,
        bottom: top + height,
        side: hit.side,
    }
}

/// Project a whole fan, one slice per ray, in ray order.
pub fn project_fan(hits: &[RayHit], grid_tile: f32, screen: &Screen) -> Vec<WallSlice> {
    let k = projection_constant(grid_tile, screen);
    hits.iter()
        .enumerate()
        .map(|(i, hit)| project_hit(hit, i, k, screen))
        .collect()
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::raycast;
    use crate::engine::types::RayFan;
    use crate::world::{Cell, Grid};
    use glam::vec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn screen() -> Screen {
        Screen::new(1024, 512).unwrap()
    }

    #[test]
    fn height_is_monotone_and_bounded() {
        let s = screen();
        let k = projection_constant(64.0, &s);
        let mut prev = f32::INFINITY;
        for dist in [0.0, 1.0, 10.0, 64.0, 96.0, 500.0, 4096.0, f32::INFINITY] {
            let h = wall_height(dist, k, &s);
            assert!(h <= s.h as f32);
            assert!(h <= prev, "height grew as distance grew");
            prev = h;
        }
        // The two extremes pin the clamp.
        assert_eq!(wall_height(0.0, k, &s), 512.0);
        assert_eq!(wall_height(f32::INFINITY, k, &s), 0.0);
    }

    #[test]
    fn slices_are_vertically_centred() {
        let s = screen();
        let k = projection_constant(64.0, &s);
        let hit = RayHit {
            angle: 0.0,
            point: vec2(0.0, 0.0),
            raw: 96.0,
            dist: 96.0,
            side: Side::Vertical,
        };
        let slice = project_hit(&hit, 7, k, &s);
        assert_eq!(slice.column, 7);
        assert!((slice.height() - k / 96.0).abs() < 1e-3);
        let margin_top = slice.top;
        let margin_bottom = s.h as f32 - slice.bottom;
        assert!((margin_top - margin_bottom).abs() < 1e-3);
    }

    #[test]
    fn end_to_end_known_wall() {
        // Player 1.5 tiles from a west-facing wall: height must be exactly
        // K / (1.5 * tile).
        let g = Grid::demo();
        let s = screen();
        let from = vec2(160.0, 160.0);
        let hits = [raycast::cast_ray(&g, from, PI, PI)];
        let slices = project_fan(&hits, g.tile(), &s);
        let expect = projection_constant(g.tile(), &s) / 96.0;
        assert!((slices[0].height() - expect).abs() < 1e-2);
    }

    #[test]
    fn flush_against_the_wall_fills_the_viewport() {
        // Distance below one tile blows K/d past the viewport; the slice
        // must clamp to full height, centred.
        let g = Grid::demo();
        let s = screen();
        // 4 units east of the wall face at x = 64.
        let hits = [raycast::cast_ray(&g, vec2(68.0, 160.0), PI, PI)];
        let slices = project_fan(&hits, g.tile(), &s);
        assert_eq!(slices[0].height(), s.h as f32);
        assert_eq!(slices[0].top, 0.0);
    }

    #[test]
    fn symmetric_map_projects_a_palindrome() {
        // Solid border, open interior, viewer on the mirror axis: the wall
        // height profile must read the same in both directions.
        let mut cells = vec![Cell::Open; 64];
        for i in 0..8 {
            cells[i] = Cell::Solid;
            cells[56 + i] = Cell::Solid;
            cells[i * 8] = Cell::Solid;
            cells[i * 8 + 7] = Cell::Solid;
        }
        let g = Grid::new(8, 8, 64.0, cells).unwrap();
        let s = screen();
        let fan = RayFan::new(60_f32.to_radians(), 60).unwrap();
        let hits = raycast::cast_fan(&g, vec2(256.0, 96.0), FRAC_PI_2, &fan);
        let slices = project_fan(&hits, g.tile(), &s);
        for i in 0..slices.len() / 2 {
            let a = slices[i].height();
            let b = slices[slices.len() - 1 - i].height();
            assert!(
                (a - b).abs() <= 1e-3 * a.max(b).max(1.0),
                "column {i}: {a} vs {b}"
            );
        }
    }
}
