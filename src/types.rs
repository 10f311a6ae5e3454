//! Conversions to and from `nalgebra` for interop with code built on it.
//!
//! Both sides are column-major, so every conversion is a plain copy. The
//! reduced shapes map onto the matrix they store, e.g. a [`Mat3x2`] is a
//! 2x3 `nalgebra` matrix (two rows, three columns).

use nalgebra::base::dimension::Const;
use nalgebra::{ArrayStorage, Matrix, U1};

use crate::mat2::Mat2;
use crate::mat2x3::Mat2x3;
use crate::mat3::Mat3;
use crate::mat3x2::Mat3x2;
use crate::mat3x4::Mat3x4;
use crate::mat4::Mat4;
use crate::mat4x3::Mat4x3;
use crate::vec2::Vec2;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

pub type Vector<const D: usize> = Matrix<f64, Const<D>, U1, ArrayStorage<f64, D, 1>>;
pub type MatrixRxC<const R: usize, const C: usize> =
    Matrix<f64, Const<R>, Const<C>, ArrayStorage<f64, R, C>>;

pub type Matrix2 = MatrixRxC<2, 2>;
pub type Matrix3 = MatrixRxC<3, 3>;
pub type Matrix4 = MatrixRxC<4, 4>;
pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Vector4 = Vector<4>;

macro_rules! impl_nalgebra {
    ($name:ident, $rows:literal, $cols:literal) => {
        impl From<$name> for MatrixRxC<$rows, $cols> {
            fn from(m: $name) -> Self {
                Self::from_column_slice(&m.0)
            }
        }

        impl From<&MatrixRxC<$rows, $cols>> for $name {
            fn from(m: &MatrixRxC<$rows, $cols>) -> Self {
                $name::from_slice(m.as_slice())
            }
        }

        impl From<MatrixRxC<$rows, $cols>> for $name {
            fn from(m: MatrixRxC<$rows, $cols>) -> Self {
                $name::from(&m)
            }
        }
    };
}

impl_nalgebra!(Mat2, 2, 2);
impl_nalgebra!(Mat3, 3, 3);
impl_nalgebra!(Mat4, 4, 4);
impl_nalgebra!(Mat3x2, 2, 3);
impl_nalgebra!(Mat2x3, 3, 2);
impl_nalgebra!(Mat4x3, 3, 4);
impl_nalgebra!(Mat3x4, 4, 3);
impl_nalgebra!(Vec2, 2, 1);
impl_nalgebra!(Vec3, 3, 1);
impl_nalgebra!(Vec4, 4, 1);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::{mat3x2, vec3};

    #[test]
    fn test_square_roundtrip() {
        let mut m = Mat4::IDENTITY;
        // translating last keeps the translation column as given
        m.rotate_y(0.4).translate(1., 2., 3.);
        let n: Matrix4 = m.into();
        assert_eq!(n[(0, 3)], 1.);
        assert_eq!(n[(2, 3)], 3.);
        assert_eq!(n[(0, 2)], m[8]);

        // a later rotation turns the translation too
        let mut r = m;
        r.rotate_y(0.4);
        let n: Matrix4 = r.into();
        assert_eq!(n[(2, 3)], r[14]);
        assert!((n[(2, 3)] - (3. * f64::cos(0.4) - f64::sin(0.4))).abs() < 1e-12);
        assert_eq!(Mat4::from(&n), r);
    }

    #[test]
    fn test_reduced_shapes() {
        let m = mat3x2(1., 2., 3., 4., 5., 6.);
        let n: MatrixRxC<2, 3> = m.into();
        assert_eq!(n[(0, 2)], 5.);
        assert_eq!(n[(1, 2)], 6.);

        // a transpose on either side agrees
        let t: MatrixRxC<3, 2> = m.transpose().into();
        assert_eq!(t, n.transpose());
        assert_eq!(Mat3x2::from(t.transpose()), m);
    }

    #[test]
    fn test_vector_products_agree() {
        let mut m = Mat3::IDENTITY;
        m.scale(2., 3.).rotate(0.25).translate(1., -1.);
        let v = vec3(0.5, 2., 1.);

        let expected = Matrix3::from(m) * Vector3::from(v);
        assert!(m.transform_vec(v).equal(expected.as_slice()));
        assert!(Vec3::from(expected).equal(&m.transform_vec(v)));
    }
}
