//! 4x4 matrices: 3D affine (and projective) transforms.
//!
//! As with [`Mat3`], the builders prepend an elementary matrix, so
//! `m.translate_z(r).rotate_x(a)` moves along z first and rotates second.

use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat3::Mat3;
use crate::mat3x4::Mat3x4;
use crate::mat4x3::Mat4x3;
use crate::multiply::{multiply4, Member4};
use crate::rotation;
use crate::vec3::Vec3;
use crate::vec4::{Homogeneous, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4(pub [f64; 16]);

impl_container!(Mat4, Mat4, 16);

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::IDENTITY
    }
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn mat4(
    a00: f64, a01: f64, a02: f64, a03: f64,
    a10: f64, a11: f64, a12: f64, a13: f64,
    a20: f64, a21: f64, a22: f64, a23: f64,
    a30: f64, a31: f64, a32: f64, a33: f64,
) -> Mat4 {
    Mat4::new(
        a00, a01, a02, a03,
        a10, a11, a12, a13,
        a20, a21, a22, a23,
        a30, a31, a32, a33,
    )
}

impl Mat4 {
    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4([
        1., 0., 0., 0.,
        0., 1., 0., 0.,
        0., 0., 1., 0.,
        0., 0., 0., 1.,
    ]);

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        a00: f64, a01: f64, a02: f64, a03: f64,
        a10: f64, a11: f64, a12: f64, a13: f64,
        a20: f64, a21: f64, a22: f64, a23: f64,
        a30: f64, a31: f64, a32: f64, a33: f64,
    ) -> Self {
        Mat4([
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ])
    }

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        a00: f64, a01: f64, a02: f64, a03: f64,
        a10: f64, a11: f64, a12: f64, a13: f64,
        a20: f64, a21: f64, a22: f64, a23: f64,
        a30: f64, a31: f64, a32: f64, a33: f64,
    ) -> &mut Self {
        *self = Mat4::new(
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
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

    pub fn transpose(&mut self) -> &mut Self {
        for col in 0..4 {
            for row in col + 1..4 {
                self.0.swap(col * 4 + row, row * 4 + col);
            }
        }
        self
    }

    pub fn determinant(&self) -> f64 {
        linalg::determinant4(&self.0)
    }

    /// Inverts in place. A singular matrix is left untouched and `None` is
    /// returned.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse4(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`: `m` acts on a vector before `self` does.
    pub fn append<M: Member4>(&mut self, m: &M) -> &mut Self {
        let a = *self;
        multiply4(&a, m, self)
    }

    /// `self = m · self`: `m` acts on a vector after `self` does.
    pub fn prepend<M: Member4>(&mut self, m: &M) -> &mut Self {
        let b = *self;
        multiply4(m, &b, self)
    }

    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) -> &mut Self {
        #[rustfmt::skip]
        let m = Mat4::new(
            1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            tx, ty, tz, 1.,
        );
        self.prepend(&m)
    }

    pub fn t(&mut self, tx: f64, ty: f64, tz: f64) -> &mut Self {
        self.translate(tx, ty, tz)
    }

    pub fn translate_x(&mut self, tx: f64) -> &mut Self {
        self.translate(tx, 0., 0.)
    }

    pub fn tx(&mut self, tx: f64) -> &mut Self {
        self.translate_x(tx)
    }

    pub fn translate_y(&mut self, ty: f64) -> &mut Self {
        self.translate(0., ty, 0.)
    }

    pub fn ty(&mut self, ty: f64) -> &mut Self {
        self.translate_y(ty)
    }

    pub fn translate_z(&mut self, tz: f64) -> &mut Self {
        self.translate(0., 0., tz)
    }

    pub fn tz(&mut self, tz: f64) -> &mut Self {
        self.translate_z(tz)
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        #[rustfmt::skip]
        let m = Mat4::new(
            sx, 0., 0., 0.,
            0., sy, 0., 0.,
            0., 0., sz, 0.,
            0., 0., 0., 1.,
        );
        self.prepend(&m)
    }

    pub fn s(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        self.scale(sx, sy, sz)
    }

    pub fn scale_x(&mut self, sx: f64) -> &mut Self {
        self.scale(sx, 1., 1.)
    }

    pub fn sx(&mut self, sx: f64) -> &mut Self {
        self.scale_x(sx)
    }

    pub fn scale_y(&mut self, sy: f64) -> &mut Self {
        self.scale(1., sy, 1.)
    }

    pub fn sy(&mut self, sy: f64) -> &mut Self {
        self.scale_y(sy)
    }

    pub fn scale_z(&mut self, sz: f64) -> &mut Self {
        self.scale(1., 1., sz)
    }

    pub fn sz(&mut self, sz: f64) -> &mut Self {
        self.scale_z(sz)
    }

    /// Axis-angle rotation is not provided; this leaves the matrix as is.
    /// Use [`Mat4::rotate_x`], [`Mat4::rotate_y`] and [`Mat4::rotate_z`].
    pub fn rotate(&mut self, _axis: &Vec3) -> &mut Self {
        self
    }

    pub fn r(&mut self, axis: &Vec3) -> &mut Self {
        self.rotate(axis)
    }

    pub fn rotate_x(&mut self, rad: f64) -> &mut Self {
        self.prepend(&Mat4(rotation::rotation_x(rad)))
    }

    pub fn rx(&mut self, rad: f64) -> &mut Self {
        self.rotate_x(rad)
    }

    pub fn rotate_y(&mut self, rad: f64) -> &mut Self {
        self.prepend(&Mat4(rotation::rotation_y(rad)))
    }

    pub fn ry(&mut self, rad: f64) -> &mut Self {
        self.rotate_y(rad)
    }

    pub fn rotate_z(&mut self, rad: f64) -> &mut Self {
        self.prepend(&Mat4(rotation::rotation_z(rad)))
    }

    pub fn rz(&mut self, rad: f64) -> &mut Self {
        self.rotate_z(rad)
    }

    /// `self · v`; a [`Vec3`] is taken as the point `(x, y, z, 1)`, so it
    /// picks up the translation.
    pub fn transform_vec<V: Homogeneous<Vec4>>(&self, v: V) -> Vec4 {
        #[rustfmt::skip]
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ] = self.0;
        let [x, y, z, w] = v.homogeneous().0;

        Vec4::new(
            a00 * x + a10 * y + a20 * z + a30 * w,
            a01 * x + a11 * y + a21 * z + a31 * w,
            a02 * x + a12 * y + a22 * z + a32 * w,
            a03 * x + a13 * y + a23 * z + a33 * w,
        )
    }

    pub fn to_pos_vec(&self) -> Vec4 {
        Vec4::new(self.0[12], self.0[13], self.0[14], self.0[15])
    }

    pub fn remove_pos(&mut self) -> &mut Self {
        self.0[12] = 0.;
        self.0[13] = 0.;
        self.0[14] = 0.;
        self.0[15] = 1.;
        self
    }

    /// The upper-left 3x3 block.
    pub fn to_mat3(&self) -> Mat3 {
        let m = &self.0;

        #[rustfmt::skip]
        let out = Mat3::new(
            m[0], m[1], m[2],
            m[4], m[5], m[6],
            m[8], m[9], m[10],
        );
        out
    }

    pub fn to_rotate_mat(&self) -> Mat3 {
        self.to_mat3()
    }

    /// Drops the bottom row.
    pub fn to_mat4x3(&self) -> Mat4x3 {
        let m = &self.0;

        #[rustfmt::skip]
        let out = Mat4x3::new(
            m[0], m[1], m[2],
            m[4], m[5], m[6],
            m[8], m[9], m[10],
            m[12], m[13], m[14],
        );
        out
    }

    /// Drops the last column.
    pub fn to_mat3x4(&self) -> Mat3x4 {
        let mut out = [0f64; 12];
        out.copy_from_slice(&self.0[..12]);
        Mat3x4(out)
    }
}
