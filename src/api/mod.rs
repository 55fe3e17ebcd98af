//! Request model and HTTP client for the lyrics generation API.

mod lyrics_api;
mod models;

pub use lyrics_api::*;
pub use models::*;
