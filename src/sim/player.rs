use glam::Vec2;
use std::f32::consts::TAU;

use crate::sim::collision;
use crate::world::Grid;

/// Per-command movement tuning, fixed at initialization.
#[derive(Clone, Copy, Debug)]
pub struct Tuning {
    /// World units covered by one forward/backward command.
    pub move_speed: f32,
    /// Radians per turn command (positive = counter-clockwise).
    pub turn_step: f32,
    /// Scale applied to the pending delta for the leading-edge probe.
    pub look_ahead: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            turn_step: 0.1,
            look_ahead: 5.0,
        }
    }
}

/// The viewer: continuous position, heading, and the derived per-command
/// movement vector.
///
/// `step` is recomputed inside every heading change – there is no way to
/// observe a stale movement vector from outside.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    pos: Vec2,
    heading: f32, // radians in [0, TAU), 0 = east, counter-clockwise
    step: Vec2,   // (cos heading, sin heading) * move_speed
    tuning: Tuning,
}

impl Player {
    pub fn new(pos: Vec2, heading: f32, tuning: Tuning) -> Self {
        let mut player = Self {
            pos,
            heading: 0.0,
            step: Vec2::ZERO,
            tuning,
        };
        player.set_heading(heading);
        player
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Heading in `[0, TAU)`.
    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Movement delta of one forward command.
    #[inline]
    pub fn step(&self) -> Vec2 {
        self.step
    }

    fn set_heading(&mut self, heading: f32) {
        self.heading = heading.rem_euclid(TAU);
        let (s, c) = self.heading.sin_cos();
        self.step = Vec2::new(c, s) * self.tuning.move_speed;
    }

    /*──────────────────────── move commands ─────────────────────────*/

    /// Rotate counter-clockwise by one turn step.
    pub fn turn_left(&mut self) {
        self.set_heading(self.heading + self.tuning.turn_step);
    }

    /// Rotate clockwise by one turn step.
    pub fn turn_right(&mut self) {
        self.set_heading(self.heading - self.tuning.turn_step);
    }

    /// One step along the heading, gated by the leading-edge check.
    pub fn forward(&mut self, grid: &Grid) {
        self.try_advance(grid, self.step);
    }

    /// One step against the heading, gated by the leading-edge check.
    pub fn backward(&mut self, grid: &Grid) {
        self.try_advance(grid, -self.step);
    }

    /// Commit `delta` only if the leading edge stays out of solid tiles.
    /// A rejected move leaves the position bit-identical, so repeating the
    /// same command is a no-op every time.
    fn try_advance(&mut self, grid: &Grid, delta: Vec2) {
        if !collision::leading_edge_blocked(grid, self.pos, delta, self.tuning.look_ahead) {
            self.pos += delta;
        }
    }

    /// Unconditional per-frame check with the raw position: if some other
    /// update left the player inside a wall, walk one step along the
    /// heading to get back out.
    pub fn frame_update(&mut self, grid: &Grid) {
        if collision::inside_wall(grid, self.pos) {
            self.pos += self.step;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::f32::consts::PI;

    #[test]
    fn heading_stays_normalized() {
        let g = Grid::demo();
        let mut p = Player::new(vec2(300.0, 300.0), 0.0, Tuning::default());
        for _ in 0..200 {
            p.turn_left();
            assert!((0.0..TAU).contains(&p.heading()));
        }
        for _ in 0..500 {
            p.turn_right();
            assert!((0.0..TAU).contains(&p.heading()));
        }
        // Moves never touch the heading.
        p.forward(&g);
        assert!((0.0..TAU).contains(&p.heading()));
    }

    #[test]
    fn step_tracks_heading() {
        let mut p = Player::new(vec2(300.0, 300.0), 0.0, Tuning::default());
        assert!((p.step() - vec2(5.0, 0.0)).length() < 1e-5);
        p.turn_left();
        let (s, c) = p.heading().sin_cos();
        assert!((p.step() - vec2(c, s) * 5.0).length() < 1e-6);
    }

    #[test]
    fn open_move_commits_exactly_one_step() {
        let g = Grid::demo();
        let mut p = Player::new(vec2(300.0, 300.0), 0.0, Tuning::default());
        let before = p.pos();
        p.forward(&g);
        assert_eq!(p.pos(), before + p.step());
        p.backward(&g);
        assert_eq!(p.pos(), before);
    }

    #[test]
    fn blocked_move_is_an_idempotent_no_op() {
        let g = Grid::demo();
        // Facing east with the border wall one tile ahead (x = 448); the
        // command would cross the tile boundary in one step.
        let tuning = Tuning {
            move_speed: 60.0,
            look_ahead: 1.0,
            ..Tuning::default()
        };
        let mut p = Player::new(vec2(400.0, 300.0), 0.0, tuning);
        let before = p.pos();
        for _ in 0..5 {
            p.forward(&g);
            assert_eq!(p.pos(), before);
        }
    }

    #[test]
    fn look_ahead_blocks_before_the_face() {
        let g = Grid::demo();
        // One raw step (5 units) would stay open, but the scaled probe
        // (25 units) reaches the wall, so the move is rejected.
        let mut p = Player::new(vec2(440.0, 300.0), 0.0, Tuning::default());
        let before = p.pos();
        p.forward(&g);
        assert_eq!(p.pos(), before);
    }

    #[test]
    fn backward_is_gated_too() {
        let g = Grid::demo();
        // Facing west, so backing up drives the probe east into the wall.
        let mut p = Player::new(vec2(440.0, 300.0), PI, Tuning::default());
        let before = p.pos();
        p.backward(&g);
        assert_eq!(p.pos(), before);
    }

    #[test]
    fn frame_update_ejects_from_walls() {
        let g = Grid::demo();
        // Start inside the east border wall facing west; the raw-position
        // check walks the player back into the open one step per frame.
        let mut p = Player::new(vec2(470.0, 300.0), PI, Tuning::default());
        for _ in 0..10 {
            p.frame_update(&g);
        }
        assert!(!crate::sim::inside_wall(&g, p.pos()));
        // Once out, the check no longer moves anything.
        let settled = p.pos();
        p.frame_update(&g);
        assert_eq!(p.pos(), settled);
    }
}
