pub mod deck;
pub use deck::*;

pub mod deal;
pub use deal::*;
