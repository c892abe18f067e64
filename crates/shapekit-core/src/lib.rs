//! # ShapeKit Core
//!
//! Core types shared by every ShapeKit crate:
//! - Integer geometry primitives ([`Point`], [`BoundingBox`])
//! - Display colors ([`Color`])
//! - The crate-wide error type ([`Error`])

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Point, MIN_SIZE};
