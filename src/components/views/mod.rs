mod generator;
mod models;

pub use generator::*;
pub use models::*;
