//! First-person grid ray-casting viewer.
//!
//! ```bash
//! cargo run --release -- [--width 1024] [--height 512] [--fov 60] [--rays 256]
//! ```
//!
//! W/S (or ↑/↓) move, A/D (or ←/→) turn, Esc quits.

use clap::Parser;
use glam::vec2;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use gridcaster::{
    engine::{self, RayFan, Screen},
    renderer::{RendererExt, software::Software},
    sim::{Player, Tuning},
    world::Grid,
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(version, about = "First-person view of the built-in demo map")]
struct Opts {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1024)]
    width: usize,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 512)]
    height: usize,

    /// Horizontal field of view in degrees.
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Rays per frame, one wall column each.
    #[arg(long, default_value_t = 256)]
    rays: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let grid = Grid::demo();
    let screen = Screen::new(opts.width, opts.height)?;
    let fan = RayFan::new(opts.fov.to_radians(), opts.rays)?;
    let mut player = Player::new(vec2(300.0, 300.0), 0.0, Tuning::default());

    let mut renderer = Software::default();
    let mut win = Window::new("gridcaster", screen.w, screen.h, WindowOptions::default())?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated frame time
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* ------------- discrete move commands, one per held key ---------- */
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
        // Runs even with no input: the raw-position wall check must not
        // depend on key state.
        player.frame_update(&grid);

        /* ------------- cast → project → draw ----------------------------- */
        let hits = engine::cast_fan(&grid, player.pos(), player.heading(), &fan);
        let slices = engine::project_fan(&hits, grid.tile(), &screen);

        renderer.draw_frame(screen.w, screen.h, &slices, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h).unwrap()
        });

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            println!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
