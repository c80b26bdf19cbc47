pub mod calculations;
pub mod models;
pub mod tips;
pub mod trend;

pub use models::*;
