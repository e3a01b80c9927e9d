pub mod model;
pub mod repository;
pub mod store;

pub use model::*;
pub use repository::ExampleRepository;
