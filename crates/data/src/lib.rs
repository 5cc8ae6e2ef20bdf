//! Catalog loading: action definitions from JSON, with the built-in
//! defaults as fallback.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
