//! Raster compositing for the marketing canvases
//!
//! This module contains:
//! - Gradient background generation
//! - Rounded-corner masking using tiny-skia
//! - Drop shadow and scale-and-place compositing
//! - Caption text rasterization

pub mod background;
pub mod compose;
pub mod mask;
pub mod shadow;
pub mod text;
