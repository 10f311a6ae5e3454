//! 3x3 matrices: 2D affine transforms in homogeneous coordinates.
//!
//! The transform builders (`translate`, `scale`, `rotate`) all go through
//! [`Mat3::prepend`], so every call in a chain acts after the previous ones.

use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat2::Mat2;
use crate::mat2x3::Mat2x3;
use crate::mat3x2::Mat3x2;
use crate::mat4::Mat4;
use crate::multiply::{multiply3, Member3};
use crate::rotation;
use crate::vec3::Vec3;
use crate::vec4::Homogeneous;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3(pub [f64; 9]);

impl_container!(Mat3, Mat3, 9);

impl Default for Mat3 {
    fn default() -> Self {
        Mat3::IDENTITY
    }
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn mat3(
    a00: f64, a01: f64, a02: f64,
    a10: f64, a11: f64, a12: f64,
    a20: f64, a21: f64, a22: f64,
) -> Mat3 {
    Mat3::new(a00, a01, a02, a10, a11, a12, a20, a21, a22)
}

impl Mat3 {
    #[rustfmt::skip]
    pub const IDENTITY: Mat3 = Mat3([
        1., 0., 0.,
        0., 1., 0.,
        0., 0., 1.,
    ]);

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        a00: f64, a01: f64, a02: f64,
        a10: f64, a11: f64, a12: f64,
        a20: f64, a21: f64, a22: f64,
    ) -> Self {
        Mat3([a00, a01, a02, a10, a11, a12, a20, a21, a22])
    }

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        a00: f64, a01: f64, a02: f64,
        a10: f64, a11: f64, a12: f64,
        a20: f64, a21: f64, a22: f64,
    ) -> &mut Self {
        self.0 = [a00, a01, a02, a10, a11, a12, a20, a21, a22];
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
        self.0.swap(1, 3);
        self.0.swap(2, 6);
        self.0.swap(5, 7);
        self
    }

    pub fn determinant(&self) -> f64 {
        linalg::determinant3(&self.0)
    }

    /// Inverts in place. A singular matrix is left untouched and `None` is
    /// returned.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse3(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`: `m` acts on a vector before `self` does.
    pub fn append<M: Member3>(&mut self, m: &M) -> &mut Self {
        let a = *self;
        multiply3(&a, m, self)
    }

    /// `self = m · self`: `m` acts on a vector after `self` does.
    pub fn prepend<M: Member3>(&mut self, m: &M) -> &mut Self {
        let b = *self;
        multiply3(m, &b, self)
    }

    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        #[rustfmt::skip]
        let m = Mat3::new(
            1., 0., 0.,
            0., 1., 0.,
            tx, ty, 1.,
        );
        self.prepend(&m)
    }

    pub fn t(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.translate(tx, ty)
    }

    pub fn translate_x(&mut self, tx: f64) -> &mut Self {
        self.translate(tx, 0.)
    }

    pub fn tx(&mut self, tx: f64) -> &mut Self {
        self.translate_x(tx)
    }

    pub fn translate_y(&mut self, ty: f64) -> &mut Self {
        self.translate(0., ty)
    }

    pub fn ty(&mut self, ty: f64) -> &mut Self {
        self.translate_y(ty)
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        #[rustfmt::skip]
        let m = Mat3::new(
            sx, 0., 0.,
            0., sy, 0.,
            0., 0., 1.,
        );
        self.prepend(&m)
    }

    pub fn s(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.scale(sx, sy)
    }

    pub fn scale_x(&mut self, sx: f64) -> &mut Self {
        self.scale(sx, 1.)
    }

    pub fn sx(&mut self, sx: f64) -> &mut Self {
        self.scale_x(sx)
    }

    pub fn scale_y(&mut self, sy: f64) -> &mut Self {
        self.scale(1., sy)
    }

    pub fn sy(&mut self, sy: f64) -> &mut Self {
        self.scale_y(sy)
    }

    /// Counter-clockwise rotation by `rad` radians.
    pub fn rotate(&mut self, rad: f64) -> &mut Self {
        self.prepend(&Mat2(rotation::rotation2(rad)).to_mat3(0., 0.))
    }

    pub fn r(&mut self, rad: f64) -> &mut Self {
        self.rotate(rad)
    }

    /// `self · v`; a [`Vec2`](crate::Vec2) is taken as the point `(x, y, 1)`.
    pub fn transform_vec<V: Homogeneous<Vec3>>(&self, v: V) -> Vec3 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
        ] = self.0;
        let [x, y, z] = v.homogeneous().0;

        Vec3::new(
            a00 * x + a10 * y + a20 * z,
            a01 * x + a11 * y + a21 * z,
            a02 * x + a12 * y + a22 * z,
        )
    }

    /// The translation column.
    pub fn to_pos_vec(&self) -> Vec3 {
        Vec3::new(self.0[6], self.0[7], self.0[8])
    }

    pub fn remove_pos(&mut self) -> &mut Self {
        self.0[6] = 0.;
        self.0[7] = 0.;
        self.0[8] = 1.;
        self
    }

    pub fn to_mat3x2(&self) -> Mat3x2 {
        let m = &self.0;
        Mat3x2::new(m[0], m[1], m[3], m[4], m[6], m[7])
    }

    pub fn to_mat2x3(&self) -> Mat2x3 {
        let m = &self.0;
        Mat2x3::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    pub fn to_mat2(&self) -> Mat2 {
        let m = &self.0;
        Mat2::new(m[0], m[1], m[3], m[4])
    }

    pub fn to_rotate_mat(&self) -> Mat2 {
        self.to_mat2()
    }

    pub fn to_mat4(&self) -> Mat4 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
        ] = self.0;

        #[rustfmt::skip]
        let m = Mat4::new(
            a00, a01, a02, 0.,
            a10, a11, a12, 0.,
            a20, a21, a22, 0.,
            0., 0., 0., 1.,
        );
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mat2x3, mat3x2, vec2, vec3};
    use core::f64::consts::FRAC_PI_2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random(rng: &mut StdRng) -> Mat3 {
        Mat3(core::array::from_fn(|_| rng.gen_range(-5.0..5.0)))
    }

    #[test]
    fn test_translate_then_rotate() {
        let mut m = Mat3::IDENTITY;
        m.identity().translate(5., 0.).rotate(FRAC_PI_2);

        // (1, 0) is moved to (6, 0) first, then rotated a quarter turn
        let v = m.transform_vec(vec2(1., 0.));
        assert!(v.equal(&[0., 6., 1.]));
    }

    #[test]
    fn test_rotate_then_translate() {
        let mut m = Mat3::IDENTITY;
        m.r(FRAC_PI_2).t(5., 0.);
        let v = m.transform_vec(vec2(1., 0.));
        assert!(v.equal(&[5., 1., 1.]));
        assert!(m.to_pos_vec().equal(&[5., 0., 1.]));
    }

    #[test]
    fn test_builders() {
        let mut m = Mat3::IDENTITY;
        m.scale(2., 3.).translate(1., 1.);
        assert_eq!(m.to_array(), [2., 0., 0., 0., 3., 0., 1., 1., 1.]);

        let mut a = Mat3::IDENTITY;
        a.tx(4.).ty(-2.);
        let mut b = Mat3::IDENTITY;
        b.translate(4., -2.);
        assert!(a.exact_equal(&b));

        let mut a = Mat3::IDENTITY;
        a.sx(4.).sy(-2.);
        let mut b = Mat3::IDENTITY;
        b.s(4., -2.);
        assert!(a.exact_equal(&b));
        assert_eq!(a.to_array(), [4., 0., 0., 0., -2., 0., 0., 0., 1.]);

        let mut a = Mat3::IDENTITY;
        a.scale_x(3.);
        assert_eq!(a[0], 3.);
        assert_eq!(a[4], 1.);
    }

    #[test]
    fn test_append_is_prepend_reversed() {
        let mut rng = StdRng::seed_from_u64(9);
        let a = random(&mut rng);
        let b = random(&mut rng);

        let mut appended = a;
        appended.append(&b);
        let mut prepended = b;
        prepended.prepend(&a);
        assert!(appended.equal(&prepended));

        let expected = nalgebra::Matrix3::from_column_slice(&a.0)
            * nalgebra::Matrix3::from_column_slice(&b.0);
        assert!(appended.equal(expected.as_slice()));
    }

    #[test]
    fn test_identity_composition() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..10 {
            let m = random(&mut rng);
            let mut a = m;
            a.append(&Mat3::IDENTITY);
            assert!(a.equal(&m));
            let mut p = m;
            p.prepend(&Mat3::IDENTITY);
            assert!(p.equal(&m));
        }
    }

    #[test]
    fn test_append_reduced_shapes() {
        let mut m = Mat3::IDENTITY;
        m.rotate(FRAC_PI_2);
        m.append(&mat3x2(1., 0., 0., 1., 5., 0.));
        let v = m.transform_vec(vec2(1., 0.));
        assert!(v.equal(&[0., 6., 1.]));

        let mut m = Mat3::IDENTITY;
        m.append(&mat2x3(2., 0., 0., 0., 2., 0.));
        assert!(m.equal(&[2., 0., 0., 0., 2., 0., 0., 0., 1.]));
    }

    #[test]
    fn test_invert() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let m = random(&mut rng);
            let mut inv = m;
            if inv.invert().is_none() {
                continue;
            }
            let mut product = m;
            product.append(&inv);
            assert!(product.equal(&Mat3::IDENTITY));

            inv.invert().unwrap();
            assert!(inv.equal(&m));
        }
    }

    #[test]
    fn test_invert_singular() {
        let singular = mat3(3., 1., 2., 6., 2., 4., 9., 9., 7.);
        let mut m = singular;
        assert!(m.invert().is_none());
        assert!(m.exact_equal(&singular));
        assert_eq!(singular.determinant(), 0.);
    }

    #[test]
    fn test_transpose_involution() {
        let m = mat3(1., 2., 3., 4., 5., 6., 7., 8., 9.);
        let mut t = m;
        t.transpose();
        assert_eq!(t.to_array(), [1., 4., 7., 2., 5., 8., 3., 6., 9.]);
        t.transpose();
        assert!(t.exact_equal(&m));
    }

    #[test]
    fn test_transform_vec3() {
        let mut m = Mat3::IDENTITY;
        m.translate(1., 2.);
        // a direction (z = 0) is not translated
        let v = m.transform_vec(vec3(1., 1., 0.));
        assert_eq!(v.to_array(), [1., 1., 0.]);
        let v = m.transform_vec(vec3(1., 1., 1.));
        assert_eq!(v.to_array(), [2., 3., 1.]);
    }

    #[test]
    fn test_remove_pos() {
        let mut m = Mat3::IDENTITY;
        m.scale(2., 2.).translate(3., 4.);
        m.remove_pos();
        assert_eq!(m.to_array(), [2., 0., 0., 0., 2., 0., 0., 0., 1.]);
    }

    #[test]
    fn test_conversions() {
        let m = mat3(1., 2., 3., 4., 5., 6., 7., 8., 9.);
        assert_eq!(m.to_mat3x2().to_array(), [1., 2., 4., 5., 7., 8.]);
        assert_eq!(m.to_mat2x3().to_array(), [1., 2., 3., 4., 5., 6.]);
        assert_eq!(m.to_mat2().to_array(), [1., 2., 4., 5.]);
        assert_eq!(m.to_rotate_mat(), m.to_mat2());
        #[rustfmt::skip]
        assert_eq!(m.to_mat4().to_array(), [
            1., 2., 3., 0.,
            4., 5., 6., 0.,
            7., 8., 9., 0.,
            0., 0., 0., 1.,
        ]);
    }
}
