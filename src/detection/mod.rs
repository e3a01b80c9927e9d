pub mod client;
pub mod normalizer;
pub mod types;

pub use client::DetectionClient;
pub use types::*;
