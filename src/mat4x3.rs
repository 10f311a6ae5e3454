use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat3x4::Mat3x4;
use crate::mat4::Mat4;
use crate::multiply::{multiply4, Member4};
use crate::vec4::{Homogeneous, Vec4};

/// 3D affine transform: the three columns of the linear block followed by
/// the translation column. The bottom row `(0, 0, 0, 1)` is implied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4x3(pub [f64; 12]);

impl_container!(Mat4x3, Mat4x3, 12);

impl Default for Mat4x3 {
    fn default() -> Self {
        Mat4x3::IDENTITY
    }
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn mat4x3(
    a00: f64, a01: f64, a02: f64,
    a10: f64, a11: f64, a12: f64,
    a20: f64, a21: f64, a22: f64,
    a30: f64, a31: f64, a32: f64,
) -> Mat4x3 {
    Mat4x3::new(
        a00, a01, a02,
        a10, a11, a12,
        a20, a21, a22,
        a30, a31, a32,
    )
}

impl Mat4x3 {
    #[rustfmt::skip]
    pub const IDENTITY: Mat4x3 = Mat4x3([
        1., 0., 0.,
        0., 1., 0.,
        0., 0., 1.,
        0., 0., 0.,
    ]);

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        a00: f64, a01: f64, a02: f64,
        a10: f64, a11: f64, a12: f64,
        a20: f64, a21: f64, a22: f64,
        a30: f64, a31: f64, a32: f64,
    ) -> Self {
        Mat4x3([
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
            a30, a31, a32,
        ])
    }

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        a00: f64, a01: f64, a02: f64,
        a10: f64, a11: f64, a12: f64,
        a20: f64, a21: f64, a22: f64,
        a30: f64, a31: f64, a32: f64,
    ) -> &mut Self {
        *self = Mat4x3::new(
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
            a30, a31, a32,
        );
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn i(&mut self) -> &mut Self {
        self.identity()
    }

    pub fn transpose(&self) -> Mat3x4 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
            a30, a31, a32,
        ] = self.0;

        #[rustfmt::skip]
        let m = Mat3x4::new(
            a00, a10, a20, a30,
            a01, a11, a21, a31,
            a02, a12, a22, a32,
        );
        m
    }

    /// Inverts in place. A singular linear block leaves the matrix untouched
    /// and returns `None`.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse4x3(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`. Whatever `m` holds in a bottom row is dropped.
    pub fn append<M: Member4>(&mut self, m: &M) -> &mut Self {
        let a = *self;
        multiply4(&a, m, self)
    }

    /// `self = m · self`.
    pub fn prepend<M: Member4>(&mut self, m: &M) -> &mut Self {
        let b = *self;
        multiply4(m, &b, self)
    }

    /// `self · v`; `w` passes through unchanged.
    pub fn transform_vec<V: Homogeneous<Vec4>>(&self, v: V) -> Vec4 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
            a30, a31, a32,
        ] = self.0;
        let [x, y, z, w] = v.homogeneous().0;

        Vec4::new(
            a00 * x + a10 * y + a20 * z + a30 * w,
            a01 * x + a11 * y + a21 * z + a31 * w,
            a02 * x + a12 * y + a22 * z + a32 * w,
            w,
        )
    }

    pub fn to_mat4(&self) -> Mat4 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
            a30, a31, a32,
        ] = self.0;

        #[rustfmt::skip]
        let m = Mat4::new(
            a00, a01, a02, 0.,
            a10, a11, a12, 0.,
            a20, a21, a22, 0.,
            a30, a31, a32, 1.,
        );
        m
    }
}
