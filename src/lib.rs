pub mod math;
pub mod vector;
pub mod matrix;
pub mod quaternion;
pub mod random;
pub mod error;
pub mod config;

pub use crate::quaternion::Quaternion;
pub use crate::vector::{Vec3, Vec4};
pub use crate::matrix::Mat4x4;
