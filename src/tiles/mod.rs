pub mod suit;
pub use suit::*;

pub mod tile;
pub use tile::*;
