pub mod projection;
pub mod raycast;
pub mod types;

pub use projection::{WallSlice, project_fan, project_hit, projection_constant, wall_height};
pub use raycast::{RayHit, Side, cast_fan, cast_ray, horizontal_scan, vertical_scan};
pub use types::{ConfigError, RayFan, Screen};
