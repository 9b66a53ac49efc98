//! Search orchestration module
//!
//! Asks the remote relevance service first and falls back to the local
//! ranking engine when it errors, times out, or returns nothing.

mod executor;
mod models;
mod traits;

pub use executor::SearchController;
pub use models::*;
pub use traits::RelevanceService;
