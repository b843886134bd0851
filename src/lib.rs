//! Grid ray-casting engine.
//!
//! The world is a fixed grid of solid/open tiles. Each frame the engine
//! casts one ray per screen column, finds the nearest solid tile boundary by
//! stepping grid-line intersections (never by marching in small increments),
//! and projects the corrected distance into a vertical wall slice. The
//! binaries under `src/bin` own all windowing and pixel output.

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
