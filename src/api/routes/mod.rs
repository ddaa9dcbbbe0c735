//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod summary;
pub mod tobs;
