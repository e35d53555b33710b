//! Law catalogs and their compilers
//!
//! The catalogs are closed enums, matched exhaustively when compiling, so a
//! new law cannot be added without deciding how it is checked.

pub mod operation;
pub mod relation;

pub use operation::{OperationLaw, MAX_IDEMPOTENCE_REPEATS};
pub use relation::RelationLaw;
