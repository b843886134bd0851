//! Top-down debug viewer: map tiles, the ray fan, and the player.
//!
//! Same controls as the first-person viewer (W/S/A/D, Esc quits); useful for
//! eyeballing what the caster actually intersects.

use glam::{Vec2, vec2};
use minifb::{Key, Window, WindowOptions};

use gridcaster::{
    engine::{self, RayFan, Side},
    sim::{Player, Tuning},
    world::{Cell, Grid},
};

const WIDTH: usize = 512;
const HEIGHT: usize = 512;

const BACKGROUND: u32 = 0xFF_33_33_59;
const TILE_SOLID: u32 = 0xFF_FF_FF_FF;
const TILE_OPEN: u32 = 0xFF_00_00_00;
const PLAYER: u32 = 0xFF_FF_FF_00;
const RAY_DIM: u32 = 0xFF_66_00_B2; // horizontal-line hits
const RAY_LIT: u32 = 0xFF_99_00_E6; // vertical-line hits

fn main() -> anyhow::Result<()> {
    let grid = Grid::demo();
    let fan = RayFan::new(60_f32.to_radians(), 60)?;
    let mut player = Player::new(vec2(300.0, 300.0), 0.0, Tuning::default());

    // ─────────── map-space → screen-space transform ────────────
    let size = grid.size_world();
    let scale = (WIDTH as f32 / size.x).min(HEIGHT as f32 / size.y);
    let to_screen = move |p: Vec2| -> (i32, i32) {
        let sx = (p.x * scale) as i32;
        let sy = HEIGHT as i32 - 1 - (p.y * scale) as i32; // invert Y so north is up
        (sx, sy)
    };

    let mut buffer = vec![0u32; WIDTH * HEIGHT];
    let mut win = Window::new("gridcaster map view", WIDTH, HEIGHT, WindowOptions::default())?;
    win.set_target_fps(60);

    while win.is_open() && !win.is_key_down(Key::Escape) {
        if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
            player.forward(&grid);
        }
        if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
            player.backward(&grid);
        }
        if win.is_key_down(Key::A) || win.is_key_down(Key::Left) {
            player.turn_left();
        }
        if win.is_key_down(Key::D) || win.is_key_down(Key::Right) {
            player.turn_right();
        }
        player.frame_update(&grid);

        buffer.fill(BACKGROUND);

        // ─────────── tiles (1 px inset keeps the grid lines visible) ──────
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                let colour = match grid.cell(col, row) {
                    Cell::Solid => TILE_SOLID,
                    Cell::Open => TILE_OPEN,
                };
                let origin = grid.cell_origin(col, row);
                let (x0, y1) = to_screen(origin);
                let (x1, y0) = to_screen(origin + Vec2::splat(grid.tile()));
                fill_rect(&mut buffer, x0 + 1, y0 + 1, x1 - 1, y1 - 1, colour);
            }
        }

        // ─────────── ray fan ──────────────────────────────────────────────
        let hits = engine::cast_fan(&grid, player.pos(), player.heading(), &fan);
        let (px, py) = to_screen(player.pos());
        for hit in hits.iter().filter(|h| h.raw.is_finite()) {
            let (hx, hy) = to_screen(hit.point);
            let colour = match hit.side {
                Side::Horizontal => RAY_DIM,
                Side::Vertical => RAY_LIT,
            };
            draw_line(&mut buffer, px, py, hx, hy, colour);
        }

        // ─────────── player dot + heading probe ───────────────────────────
        let ahead = player.pos() + player.step() * 5.0;
        let (ax, ay) = to_screen(ahead);
        draw_line(&mut buffer, px, py, ax, ay, PLAYER);
        fill_rect(&mut buffer, px - 2, py - 2, px + 2, py + 2, PLAYER);

        win.update_with_buffer(&buffer, WIDTH, HEIGHT)?;
    }
    Ok(())
}

/// Axis-aligned filled rectangle, clamped to the buffer.
fn fill_rect(buf: &mut [u32], x0: i32, y0: i32, x1: i32, y1: i32, colour: u32) {
    for y in y0.max(0)..=y1.min(HEIGHT as i32 - 1) {
        for x in x0.max(0)..=x1.min(WIDTH as i32 - 1) {
            buf[y as usize * WIDTH + x as usize] = colour;
        }
    }
}

/// Integer Bresenham line-drawing algorithm.
fn draw_line(buf: &mut [u32], mut x0: i32, mut y0: i32, x1: i32, y1: i32, colour: u32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..WIDTH as i32).contains(&x0) && (0..HEIGHT as i32).contains(&y0) {
            buf[y0 as usize * WIDTH + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}
