pub mod examples;
pub use examples::*;

pub mod highlight;
pub use highlight::*;

pub mod page;
pub use page::*;
