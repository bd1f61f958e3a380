//! Repository modules implementing CRUD operations for the tracking store.
//!
//! Each module adds methods to `PotatoDb` via `impl PotatoDb` blocks.

pub mod defect;
pub mod proof;
pub mod scenario;
pub mod seed;
pub mod step;
