pub mod detection;
pub mod examples;

pub use detection::*;
pub use examples::*;
