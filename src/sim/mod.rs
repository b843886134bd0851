mod collision;
mod player;

pub use collision::{inside_wall, leading_edge_blocked};
pub use player::{Player, Tuning};
