//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod owner;
pub mod pet;
