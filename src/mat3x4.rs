use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat4::Mat4;
use crate::mat4x3::Mat4x3;
use crate::multiply::{multiply4, Member4};
use crate::vec4::{Homogeneous, Vec4};

/// The first three columns of a 4x4 matrix whose last column is
/// `(0, 0, 0, 1)`. This is the transpose of a [`Mat4x3`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3x4(pub [f64; 12]);

impl_container!(Mat3x4, Mat3x4, 12);

impl Default for Mat3x4 {
    fn default() -> Self {
        Mat3x4::IDENTITY
    }
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn mat3x4(
    a00: f64, a01: f64, a02: f64, a03: f64,
    a10: f64, a11: f64, a12: f64, a13: f64,
    a20: f64, a21: f64, a22: f64, a23: f64,
) -> Mat3x4 {
    Mat3x4::new(
        a00, a01, a02, a03,
        a10, a11, a12, a13,
        a20, a21, a22, a23,
    )
}

impl Mat3x4 {
    #[rustfmt::skip]
    pub const IDENTITY: Mat3x4 = Mat3x4([
        1., 0., 0., 0.,
        0., 1., 0., 0.,
        0., 0., 1., 0.,
    ]);

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        a00: f64, a01: f64, a02: f64, a03: f64,
        a10: f64, a11: f64, a12: f64, a13: f64,
        a20: f64, a21: f64, a22: f64, a23: f64,
    ) -> Self {
        Mat3x4([
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
        ])
    }

    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn set(
        &mut self,
        a00: f64, a01: f64, a02: f64, a03: f64,
        a10: f64, a11: f64, a12: f64, a13: f64,
        a20: f64, a21: f64, a22: f64, a23: f64,
    ) -> &mut Self {
        *self = Mat3x4::new(
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
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

    pub fn transpose(&self) -> Mat4x3 {
        #[rustfmt::skip]
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
        ] = self.0;

        #[rustfmt::skip]
        let m = Mat4x3::new(
            a00, a10, a20,
            a01, a11, a21,
            a02, a12, a22,
            a03, a13, a23,
        );
        m
    }

    /// Inverts in place. A singular matrix is left untouched and `None` is
    /// returned.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse3x4(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`, keeping the first three columns of the product.
    pub fn append<M: Member4>(&mut self, m: &M) -> &mut Self {
        let a = *self;
        multiply4(&a, m, self)
    }

    /// `self = m · self`, keeping the first three columns of the product.
    pub fn prepend<M: Member4>(&mut self, m: &M) -> &mut Self {
        let b = *self;
        multiply4(m, &b, self)
    }

    pub fn transform_vec<V: Homogeneous<Vec4>>(&self, v: V) -> Vec4 {
        #[rustfmt::skip]
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
        ] = self.0;
        let [x, y, z, w] = v.homogeneous().0;

        Vec4::new(
            a00 * x + a10 * y + a20 * z,
            a01 * x + a11 * y + a21 * z,
            a02 * x + a12 * y + a22 * z,
            a03 * x + a13 * y + a23 * z + w,
        )
    }

    pub fn to_mat4(&self) -> Mat4 {
        let mut m = [0f64; 16];
        m[..12].copy_from_slice(&self.0);
        m[15] = 1.;
        Mat4(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec3, vec4};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_identity() {
        let mut m = Mat3x4(core::array::from_fn(|i| i as f64));
        m.identity();
        assert!(m.to_mat4().exact_equal(&Mat4::IDENTITY));
    }

    #[test]
    fn test_transpose() {
        let m = mat3x4(1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12.);
        let t = m.transpose();
        assert_eq!(
            t.to_array(),
            [1., 5., 9., 2., 6., 10., 3., 7., 11., 4., 8., 12.]
        );
        assert_eq!(t.transpose(), m);

        let mut square = m.to_mat4();
        square.transpose();
        assert!(t.to_mat4().exact_equal(&square));
    }

    #[test]
    fn test_identity_composition() {
        let m = Mat3x4(core::array::from_fn(|i| i as f64 - 5.));
        let mut a = m;
        a.append(&Mat3x4::IDENTITY).append(&Mat4::IDENTITY);
        assert!(a.equal(&m));
        let mut p = m;
        p.prepend(&Mat3x4::IDENTITY).prepend(&Mat4::IDENTITY);
        assert!(p.equal(&m));
    }

    #[test]
    fn test_invert() {
        let mut rng = StdRng::seed_from_u64(34);
        for _ in 0..10 {
            let original = Mat3x4(core::array::from_fn(|_| rng.gen_range(-5.0..5.0)));
            let mut m = original;
            assert!(m.invert().is_some());

            let mut square = original.to_mat4();
            square.invert().unwrap();
            assert!(m.to_mat4().equal(&square));

            let mut product = original;
            product.append(&m);
            assert!(product.equal(&Mat3x4::IDENTITY));

            m.invert().unwrap();
            assert!(m.equal(&original));
        }
    }

    #[test]
    fn test_invert_singular() {
        let mut zero = Mat3x4([0.; 12]);
        assert!(zero.invert().is_none());
        assert_eq!(zero.to_array(), [0.; 12]);
    }

    #[test]
    fn test_transform_vec() {
        let m = mat3x4(2., 0., 0., 1., 0., 2., 0., 0., 0., 0., 2., 0.);
        assert_eq!(m.transform_vec(vec3(1., 2., 3.)).to_array(), [2., 4., 6., 2.]);

        let v = vec4(1., -1., 0.5, 2.);
        assert!(m.transform_vec(v).equal(&m.to_mat4().transform_vec(v)));
    }

    #[test]
    fn test_to_mat4() {
        let m = mat3x4(1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12.);
        assert_eq!(
            m.to_mat4().to_array(),
            [1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 0., 0., 0., 1.]
        );
        assert_eq!(m.to_mat4().to_mat3x4(), m);
    }
}
