mod game_mode;
mod latency;
mod player_identity;
mod text;

pub use game_mode::*;
pub use latency::*;
pub use player_identity::*;
pub use text::*;
