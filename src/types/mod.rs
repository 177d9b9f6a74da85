//! Core value types shared across the scene engine

pub mod bounds;
pub mod color;
pub mod handle;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use color::{aci_to_rgb, Color, Rgb};
pub use handle::Handle;
pub use vector::Vector2;
