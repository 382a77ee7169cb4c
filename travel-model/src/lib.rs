//! Type contracts shared by `travel-api` and `travel-tui`.

mod entities;
mod ids;

pub use entities::*;
pub use ids::*;
