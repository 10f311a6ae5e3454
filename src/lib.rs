#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod camera;
pub mod container;
pub mod error;
pub mod linalg;
pub mod mat2;
pub mod mat2x3;
pub mod mat3;
pub mod mat3x2;
pub mod mat3x4;
pub mod mat4;
pub mod mat4x3;
pub mod multiply;
pub mod norm;
pub mod rotation;
pub mod spherical;
pub mod types;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use crate::camera::{look_at, orthographic, perspective};
pub use crate::container::{Container, Shape};
pub use crate::error::Error;
pub use crate::mat2::{mat2, Mat2};
pub use crate::mat2x3::{mat2x3, Mat2x3};
pub use crate::mat3::{mat3, Mat3};
pub use crate::mat3x2::{mat3x2, Mat3x2};
pub use crate::mat3x4::{mat3x4, Mat3x4};
pub use crate::mat4::{mat4, Mat4};
pub use crate::mat4x3::{mat4x3, Mat4x3};
pub use crate::multiply::{multiply2, multiply3, multiply4, Form, Member3, Member4};
pub use crate::spherical::Spherical;
pub use crate::vec2::{vec2, Vec2};
pub use crate::vec3::{vec3, Linear3, Vec3};
pub use crate::vec4::{vec4, Homogeneous, Vec4};

/// Absolute tolerance used by [`Container::equal`].
pub const EPSILON: f64 = 1e-6;

pub const DEG2RAD: f64 = core::f64::consts::PI / 180.;
pub const RAD2DEG: f64 = 180. / core::f64::consts::PI;

pub use num_traits::clamp;
