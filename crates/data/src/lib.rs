//! Catalog and config loading: JSON files on disk into `lootfall-core`
//! pools, with validation at the boundary.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
