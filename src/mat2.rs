use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat3::Mat3;
use crate::multiply::multiply2;
use crate::rotation;
use crate::vec2::Vec2;

/// 2x2 linear transform, column-major `[a, b, c, d]` = columns `(a, b)`, `(c, d)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2(pub [f64; 4]);

impl_container!(Mat2, Mat2, 4);

impl Default for Mat2 {
    fn default() -> Self {
        Mat2::IDENTITY
    }
}

pub fn mat2(a: f64, b: f64, c: f64, d: f64) -> Mat2 {
    Mat2::new(a, b, c, d)
}

impl Mat2 {
    pub const IDENTITY: Mat2 = Mat2([1., 0., 0., 1.]);

    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Mat2([a, b, c, d])
    }

    pub fn set(&mut self, a: f64, b: f64, c: f64, d: f64) -> &mut Self {
        self.0 = [a, b, c, d];
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn i(&mut self) -> &mut Self {
        self.identity()
    }

    pub fn transpose(&mut self) -> &mut Self {
        self.0.swap(1, 2);
        self
    }

    pub fn determinant(&self) -> f64 {
        linalg::determinant2(&self.0)
    }

    /// Inverts in place. A singular matrix is left untouched and `None` is
    /// returned.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse2(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`.
    pub fn append(&mut self, m: &Mat2) -> &mut Self {
        let a = *self;
        multiply2(&a, m, self)
    }

    /// `self = m · self`.
    pub fn prepend(&mut self, m: &Mat2) -> &mut Self {
        let b = *self;
        multiply2(m, &b, self)
    }

    pub fn transform_vec(&self, v: Vec2) -> Vec2 {
        let mut out = v;
        out.transform(self);
        out
    }

    pub fn rotate(&mut self, rad: f64) -> &mut Self {
        self.prepend(&Mat2(rotation::rotation2(rad)))
    }

    /// Rotation angle of a pure rotation, in radians.
    pub fn angle(&self) -> f64 {
        rotation::angle2(&self.0)
    }

    /// Embeds into a 2D affine transform translating by `(tx, ty)`.
    pub fn to_mat3(&self, tx: f64, ty: f64) -> Mat3 {
        let [a, b, c, d] = self.0;

        #[rustfmt::skip]
        let m = Mat3::new(
            a, b, 0.,
            c, d, 0.,
            tx, ty, 1.,
        );
        m
    }
}
