//! Pure domain types with minimal dependencies
//!
//! Types here are shared across the pipeline and have no imaging or
//! font-stack dependencies.

pub mod color;
pub mod geometry;

pub use color::*;
pub use geometry::*;
