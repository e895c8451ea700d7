//! Route handlers.

pub mod analysis;
pub mod health;
