pub mod assets;
pub use assets::*;

pub mod canvas;
pub use canvas::*;

pub mod scene;
pub use scene::*;
