//! The storage contract shared by every vector and matrix.
//!
//! Each container is a fixed-length run of `f64` whose length is fixed by its
//! [`Shape`]. Matrices are stored column-major.

use core::fmt;

use num_traits::Float;

use crate::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Mat2,
    Mat3,
    Mat3x2,
    Mat2x3,
    Mat4,
    Mat4x3,
    Mat3x4,
    Vec2,
    Vec3,
    Vec4,
}

impl Shape {
    /// Number of stored components.
    pub const fn len(self) -> usize {
        match self {
            Shape::Mat2 => 4,
            Shape::Mat3 => 9,
            Shape::Mat3x2 | Shape::Mat2x3 => 6,
            Shape::Mat4 => 16,
            Shape::Mat4x3 | Shape::Mat3x4 => 12,
            Shape::Vec2 => 2,
            Shape::Vec3 => 3,
            Shape::Vec4 => 4,
        }
    }

    pub const fn is_matrix(self) -> bool {
        !matches!(self, Shape::Vec2 | Shape::Vec3 | Shape::Vec4)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shape::Mat2 => "mat2",
            Shape::Mat3 => "mat3",
            Shape::Mat3x2 => "mat3x2",
            Shape::Mat2x3 => "mat2x3",
            Shape::Mat4 => "mat4",
            Shape::Mat4x3 => "mat4x3",
            Shape::Mat3x4 => "mat3x4",
            Shape::Vec2 => "vec2",
            Shape::Vec3 => "vec3",
            Shape::Vec4 => "vec4",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Container: AsRef<[f64]> + AsMut<[f64]> + Copy {
    const SHAPE: Shape;

    /// True iff every component equals the one at the same index of `other`.
    /// A shorter `other` never matches.
    fn exact_equal<O: AsRef<[f64]> + ?Sized>(&self, other: &O) -> bool {
        let other = other.as_ref();
        self.as_ref()
            .iter()
            .enumerate()
            .all(|(i, e)| other.get(i).is_some_and(|o| e == o))
    }

    /// Like [`Container::exact_equal`], with an absolute tolerance of [`EPSILON`].
    fn equal<O: AsRef<[f64]> + ?Sized>(&self, other: &O) -> bool {
        let other = other.as_ref();
        self.as_ref()
            .iter()
            .enumerate()
            .all(|(i, e)| other.get(i).is_some_and(|o| Float::abs(e - o) <= EPSILON))
    }
}

/// Copies `src` over `dst`, leaving components past the end of `src` untouched.
pub(crate) fn overwrite(dst: &mut [f64], src: &[f64]) {
    let n = dst.len().min(src.len());
    dst[..n].copy_from_slice(&src[..n]);
}

/// Ordinal access, array conversions and slice construction for a
/// `struct Name(pub [f64; LEN])` container. `Default` must be implemented
/// by hand since it carries the per-shape padding values.
macro_rules! impl_container {
    ($name:ident, $shape:ident, $len:literal) => {
        impl $crate::container::Container for $name {
            const SHAPE: $crate::container::Shape = $crate::container::Shape::$shape;
        }

        impl AsRef<[f64]> for $name {
            fn as_ref(&self) -> &[f64] {
                &self.0
            }
        }

        impl AsMut<[f64]> for $name {
            fn as_mut(&mut self) -> &mut [f64] {
                &mut self.0
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = f64;

            fn index(&self, index: usize) -> &f64 {
                &self.0[index]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f64 {
                &mut self.0[index]
            }
        }

        impl From<[f64; $len]> for $name {
            fn from(array: [f64; $len]) -> Self {
                $name(array)
            }
        }

        impl From<$name> for [f64; $len] {
            fn from(c: $name) -> Self {
                c.0
            }
        }

        impl TryFrom<&[f64]> for $name {
            type Error = $crate::error::Error;

            fn try_from(slice: &[f64]) -> Result<Self, Self::Error> {
                let array: [f64; $len] =
                    slice
                        .try_into()
                        .map_err(|_| $crate::error::Error::Length {
                            shape: $crate::container::Shape::$shape,
                            expected: $len,
                            found: slice.len(),
                        })?;
                Ok($name(array))
            }
        }

        impl $name {
            pub const LEN: usize = $len;

            /// Builds from the leading components of `slice`; missing ones
            /// keep their [`Default`] value and extra ones are ignored.
            pub fn from_slice(slice: &[f64]) -> Self {
                let mut c = Self::default();
                $crate::container::overwrite(&mut c.0, slice);
                c
            }

            /// In-place counterpart of `from_slice`.
            pub fn set_slice(&mut self, slice: &[f64]) -> &mut Self {
                *self = Self::from_slice(slice);
                self
            }

            pub fn as_slice(&self) -> &[f64] {
                &self.0
            }

            /// Independent snapshot of the components.
            pub fn to_array(&self) -> [f64; $len] {
                self.0
            }

            pub fn to_f32_array(&self) -> [f32; $len] {
                self.0.map(|e| e as f32)
            }
        }
    };
}

pub(crate) use impl_container;
