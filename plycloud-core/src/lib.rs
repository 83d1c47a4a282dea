//! Core data structures for plycloud
//!
//! This crate provides the fundamental types for point cloud export:
//! points, per-vertex colors, and the point cloud container that pairs them.

pub mod cloud;
pub mod color;
pub mod point;

pub use cloud::*;
pub use color::*;
pub use point::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
