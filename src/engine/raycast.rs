//! The ray caster.
//!
//! A ray never marches through continuous space: it jumps from one grid-line
//! crossing to the next. Crossings of *horizontal* lines and of *vertical*
//! lines form two independent scans; each tests the tile the ray is entering
//! at every crossing and stops at the first solid one. The nearer of the two
//! scan results is the visible wall face – a ray generally crosses several
//! lines of both families before one of them lands in a solid tile.

use std::f32::consts::TAU;

use glam::{Vec2, vec2};

use crate::engine::types::RayFan;
use crate::world::{Cell, Grid};

/// Tolerance for treating `sin`/`cos` as exactly zero. Wide enough to cover
/// the f32 roundings of the four axis-aligned angles (e.g. `sin` of the f32
/// nearest π is ≈ -8.7e-8), narrow enough that the fan never loses a real
/// ray to it.
const AXIS_EPS: f32 = 1e-6;

/// Which grid-line family produced the hit. Only used for flat shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Horizontal,
    Vertical,
}

/// Result of casting a single ray. Transient: recomputed every frame.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Absolute ray angle in `[0, TAU)`.
    pub angle: f32,
    /// World-space point where the ray met a wall face.
    pub point: Vec2,
    /// Euclidean distance from the origin to `point`; `INFINITY` when the
    /// ray found nothing (then `point` is the origin).
    pub raw: f32,
    /// Fisheye-corrected distance: `raw * cos(angle - heading)`.
    pub dist: f32,
    pub side: Side,
}

/// Nearest solid tile along the ray, considering only crossings of
/// horizontal grid lines. `None` when the ray is parallel to them.
pub fn horizontal_scan(grid: &Grid, from: Vec2, angle: f32) -> Option<(Vec2, f32)> {
    let (sin_a, cos_a) = angle.sin_cos();
    if sin_a.abs() <= AXIS_EPS {
        return None;
    }

    let t = grid.tile();
    let cot = cos_a / sin_a;
    // Integer index of the next horizontal line in the ray's vertical
    // direction. Tracking the index (instead of accumulating a float y)
    // keeps every crossing exactly on its line for any tile size.
    let dir: i32 = if sin_a > 0.0 { 1 } else { -1 };
    let mut line = (from.y / t).floor() as i32 + if dir > 0 { 1 } else { 0 };
    let mut x = from.x + cot * (line as f32 * t - from.y);
    let x_step = cot * t * dir as f32;

    for _ in 0..=grid.max_dim() {
        // The tile being entered: the band above the line when moving up,
        // below it when moving down.
        let band = if dir > 0 { line } else { line - 1 };
        let col = (x / t).floor() as i32;
        let row = grid.rows() as i32 - 1 - band;
        if grid.cell(col, row) == Cell::Solid {
            let point = vec2(x, line as f32 * t);
            return Some((point, from.distance(point)));
        }
        line += dir;
        x += x_step;
    }
    None
}

/// The symmetric scan over vertical grid lines. `None` when the ray is
/// parallel to them.
pub fn vertical_scan(grid: &Grid, from: Vec2, angle: f32) -> Option<(Vec2, f32)> {
    let (sin_a, cos_a) = angle.sin_cos();
    if cos_a.abs() <= AXIS_EPS {
        return None;
    }

    let t = grid.tile();
    let tan = sin_a / cos_a;
    let dir: i32 = if cos_a > 0.0 { 1 } else { -1 };
    let mut line = (from.x / t).floor() as i32 + if dir > 0 { 1 } else { 0 };
    let mut y = from.y + tan * (line as f32 * t - from.x);
    let y_step = tan * t * dir as f32;

    for _ in 0..=grid.max_dim() {
        let col = if dir > 0 { line } else { line - 1 };
        let band = (y / t).floor() as i32;
        let row = grid.rows() as i32 - 1 - band;
        if grid.cell(col, row) == Cell::Solid {
            let point = vec2(line as f32 * t, y);
            return Some((point, from.distance(point)));
        }
        line += dir;
        y += y_step;
    }
    None
}

/// Cast one ray and pick the nearer of the two scan families.
///
/// Ties prefer the horizontal family (any fixed choice works; it only
/// decides the shade of a corner-grazing column). Out-of-grid reads as
/// solid, so on a bordered map every non-degenerate ray hits; the infinite
/// sentinel survives for the degenerate-angle case and keeps the contract
/// total.
pub fn cast_ray(grid: &Grid, from: Vec2, angle: f32, heading: f32) -> RayHit {
    let h = horizontal_scan(grid, from, angle);
    let v = vertical_scan(grid, from, angle);

    let (point, raw, side) = match (h, v) {
        (Some((hp, hd)), Some((_, vd))) if hd <= vd => (hp, hd, Side::Horizontal),
        (_, Some((vp, vd))) => (vp, vd, Side::Vertical),
        (Some((hp, hd)), None) => (hp, hd, Side::Horizontal),
        (None, None) => {
            return RayHit {
                angle,
                point: from,
                raw: f32::INFINITY,
                dist: f32::INFINITY,
                side: Side::Horizontal,
            };
        }
    };

    RayHit {
        angle,
        point,
        raw,
        // Off-centre rays measure a longer distance than the perpendicular
        // distance to the view plane; projecting them uncorrected bows
        // every wall outward.
        dist: raw * (angle - heading).cos(),
        side,
    }
}

/// Cast the whole fan, leftmost ray first (descending angle).
///
/// Each ray sits half a step inside its slot, so the fan is symmetric about
/// the heading and a symmetric map projects to a symmetric profile.
pub fn cast_fan(grid: &Grid, from: Vec2, heading: f32, fan: &RayFan) -> Vec<RayHit> {
    (0..fan.count())
        .map(|i| {
            let offset = fan.half_fov() - (i as f32 + 0.5) * fan.angle_step();
            cast_ray(grid, from, (heading + offset).rem_euclid(TAU), heading)
        })
        .collect()
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
