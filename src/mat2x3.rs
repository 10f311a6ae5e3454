use crate::container::{impl_container, Container};
use crate::linalg;
use crate::mat3::Mat3;
use crate::mat3x2::Mat3x2;
use crate::multiply::{multiply3, Member3};
use crate::vec3::Vec3;
use crate::vec4::Homogeneous;

/// The first two columns of a 3x3 matrix whose third column is `(0, 0, 1)`.
/// This is the transpose of a [`Mat3x2`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2x3(pub [f64; 6]);

impl_container!(Mat2x3, Mat2x3, 6);

impl Default for Mat2x3 {
    fn default() -> Self {
        Mat2x3::IDENTITY
    }
}

#[rustfmt::skip]
pub fn mat2x3(
    a00: f64, a01: f64, a02: f64,
    a10: f64, a11: f64, a12: f64,
) -> Mat2x3 {
    Mat2x3::new(a00, a01, a02, a10, a11, a12)
}

impl Mat2x3 {
    pub const IDENTITY: Mat2x3 = Mat2x3([1., 0., 0., 0., 1., 0.]);

    #[rustfmt::skip]
    pub const fn new(
        a00: f64, a01: f64, a02: f64,
        a10: f64, a11: f64, a12: f64,
    ) -> Self {
        Mat2x3([a00, a01, a02, a10, a11, a12])
    }

    #[rustfmt::skip]
    pub fn set(
        &mut self,
        a00: f64, a01: f64, a02: f64,
        a10: f64, a11: f64, a12: f64,
    ) -> &mut Self {
        self.0 = [a00, a01, a02, a10, a11, a12];
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    pub fn i(&mut self) -> &mut Self {
        self.identity()
    }

    pub fn transpose(&self) -> Mat3x2 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
        ] = self.0;

        #[rustfmt::skip]
        let m = Mat3x2::new(
            a00, a10,
            a01, a11,
            a02, a12,
        );
        m
    }

    /// Inverts in place. A singular matrix is left untouched and `None` is
    /// returned.
    pub fn invert(&mut self) -> Option<&mut Self> {
        let Some(inv) = linalg::inverse2x3(&self.0) else {
            log::debug!("{} is singular, not inverted", Self::SHAPE);
            return None;
        };
        self.0 = inv;
        Some(self)
    }

    /// `self = self · m`, keeping the first two columns of the product.
    pub fn append<M: Member3>(&mut self, m: &M) -> &mut Self {
        let a = *self;
        multiply3(&a, m, self)
    }

    /// `self = m · self`, keeping the first two columns of the product.
    pub fn prepend<M: Member3>(&mut self, m: &M) -> &mut Self {
        let b = *self;
        multiply3(m, &b, self)
    }

    /// `self · v`; a [`Vec2`](crate::Vec2) is taken as the point `(x, y, 1)`.
    pub fn transform_vec<V: Homogeneous<Vec3>>(&self, v: V) -> Vec3 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
        ] = self.0;
        let [x, y, z] = v.homogeneous().0;

        Vec3::new(
            a00 * x + a10 * y,
            a01 * x + a11 * y,
            a02 * x + a12 * y + z,
        )
    }

    pub fn to_mat3(&self) -> Mat3 {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
        ] = self.0;

        #[rustfmt::skip]
        let m = Mat3::new(
            a00, a01, a02,
            a10, a11, a12,
            0., 0., 1.,
        );
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn test_identity() {
        let mut m = mat2x3(1., 2., 3., 4., 5., 6.);
        m.i();
        assert_eq!(m.to_array(), [1., 0., 0., 0., 1., 0.]);
        assert!(m.to_mat3().exact_equal(&Mat3::IDENTITY));
    }

    #[test]
    fn test_transpose() {
        let m = mat2x3(1., 2., 3., 4., 5., 6.);
        assert_eq!(m.transpose().to_array(), [1., 4., 2., 5., 3., 6.]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_identity_composition() {
        let m = mat2x3(2., 0.5, 3., -1., 4., 5.);
        let mut a = m;
        a.append(&Mat2x3::IDENTITY).append(&Mat3::IDENTITY);
        assert!(a.equal(&m));
        let mut p = m;
        p.prepend(&Mat2x3::IDENTITY).prepend(&Mat3::IDENTITY);
        assert!(p.equal(&m));
    }

    #[test]
    fn test_invert() {
        let original = mat2x3(2., 0.5, 3., -1., 4., 5.);
        let mut m = original;
        assert!(m.invert().is_some());

        let mut square = original.to_mat3();
        square.invert().unwrap();
        assert!(m.to_mat3().equal(&square));

        let mut product = original;
        product.append(&m);
        assert!(product.equal(&Mat2x3::IDENTITY));

        m.invert().unwrap();
        assert!(m.equal(&original));
    }

    #[test]
    fn test_invert_singular() {
        let mut m = mat2x3(1., 2., 3., 2., 4., 6.);
        assert!(m.invert().is_none());
        assert_eq!(m.to_array(), [1., 2., 3., 2., 4., 6.]);
    }

    #[test]
    fn test_transform_vec() {
        let m = mat2x3(1., 0., 2., 0., 1., 3.);
        let v = vec3(1., 1., 1.);
        assert_eq!(m.transform_vec(v).to_array(), [1., 1., 6.]);
        assert!(m.transform_vec(v).equal(&m.to_mat3().transform_vec(v)));
        assert_eq!(m.transform_vec(vec2(1., 1.)), m.transform_vec(v));
    }

    #[test]
    fn test_prepend() {
        let mut m = mat2x3(1., 0., 2., 0., 1., 3.);
        let mut scale = Mat3::IDENTITY;
        scale.scale(2., 2.);
        m.prepend(&scale);
        assert_eq!(m.to_array(), [2., 0., 2., 0., 2., 3.]);
    }
}
