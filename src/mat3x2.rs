use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat2x3::Mat2x3;
use crate::mat3::Mat3;
use crate::multiply::{multiply3, Member3};
use crate::vec3::Vec3;
use crate::vec4::Homogeneous;

/// 2D affine transform stored as three columns of two: the linear block
/// `(a, b)`, `(c, d)` followed by the translation `(e, f)`. The bottom row
/// `(0, 0, 1)` is implied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3x2(pub [f64; 6]);

impl_container!(Mat3x2, Mat3x2, 6);

impl Default for Mat3x2 {
    fn default() -> Self {
        Mat3x2::IDENTITY
    }
}

pub fn mat3x2(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Mat3x2 {
    Mat3x2::new(a, b, c, d, e, f)
}

impl Mat3x2 {
    pub const IDENTITY: Mat3x2 = Mat3x2([1., 0., 0., 1., 0., 0.]);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Mat3x2([a, b, c, d, e, f])
    }

    pub fn set(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.0 = [a, b, c, d, e, f];
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn i(&mut self) -> &mut Self {
        self.identity()
    }

    pub fn transpose(&self) -> Mat2x3 {
        let [a, b, c, d, e, f] = self.0;
        Mat2x3::new(a, c, e, b, d, f)
    }

    /// Inverts in place. A singular linear block leaves the matrix untouched
    /// and returns `None`.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse3x2(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`. Whatever `m` holds in a bottom row is dropped.
    pub fn append<M: Member3>(&mut self, m: &M) -> &mut Self {
        let a = *self;
        multiply3(&a, m, self)
    }

    /// `self = m · self`.
    pub fn prepend<M: Member3>(&mut self, m: &M) -> &mut Self {
        let b = *self;
        multiply3(m, &b, self)
    }

    /// `self · v`; the third component of `v` passes through unchanged.
    pub fn transform_vec<V: Homogeneous<Vec3>>(&self, v: V) -> Vec3 {
        let [a, b, c, d, e, f] = self.0;
        let [x, y, z] = v.homogeneous().0;

        Vec3::new(a * x + c * y + e * z, b * x + d * y + f * z, z)
    }

    pub fn to_mat3(&self) -> Mat3 {
        let [a, b, c, d, e, f] = self.0;

        #[rustfmt::skip]
        let m = Mat3::new(
            a, b, 0.,
            c, d, 0.,
            e, f, 1.,
        );
        m
    }
}
