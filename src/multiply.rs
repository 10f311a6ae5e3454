//! Matrix products across the shapes of one family.
//!
//! All products are `dst = a · b` on column-major storage. Reduced shapes are
//! promoted to the square form of their family before multiplying; the
//! destination's [`Form`] then decides which components are written.

use crate::container::Container;
use crate::mat2::Mat2;
use crate::mat2x3::Mat2x3;
use crate::mat3::Mat3;
use crate::mat3x2::Mat3x2;
use crate::mat3x4::Mat3x4;
use crate::mat4::Mat4;
use crate::mat4x3::Mat4x3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Every component is stored.
    Square,
    /// The last row is dropped and read back as `(0, .., 0, 1)`; the last
    /// stored column holds the translation (`Mat3x2`, `Mat4x3`).
    Affine,
    /// The last column is dropped and read back as `(0, .., 0, 1)`
    /// (`Mat2x3`, `Mat3x4`).
    Truncated,
}

/// A member of the 3x3 family.
pub trait Member3: Container {
    const FORM: Form;

    /// The square matrix this shape stands for.
    fn expand(&self) -> [f64; 9];
}

/// A member of the 4x4 family.
pub trait Member4: Container {
    const FORM: Form;

    /// The square matrix this shape stands for.
    fn expand(&self) -> [f64; 16];
}

impl Member3 for Mat3 {
    const FORM: Form = Form::Square;

    fn expand(&self) -> [f64; 9] {
        self.0
    }
}

impl Member3 for Mat3x2 {
    const FORM: Form = Form::Affine;

    fn expand(&self) -> [f64; 9] {
        let [a, b, c, d, e, f] = self.0;
        [a, b, 0., c, d, 0., e, f, 1.]
    }
}

impl Member3 for Mat2x3 {
    const FORM: Form = Form::Truncated;

    fn expand(&self) -> [f64; 9] {
        let [a00, a01, a02, a10, a11, a12] = self.0;
        [a00, a01, a02, a10, a11, a12, 0., 0., 1.]
    }
}

impl Member4 for Mat4 {
    const FORM: Form = Form::Square;

    fn expand(&self) -> [f64; 16] {
        self.0
    }
}

impl Member4 for Mat4x3 {
    const FORM: Form = Form::Affine;

    fn expand(&self) -> [f64; 16] {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
            a30, a31, a32,
        ] = self.0;

        #[rustfmt::skip]
        let m = [
            a00, a01, a02, 0.,
            a10, a11, a12, 0.,
            a20, a21, a22, 0.,
            a30, a31, a32, 1.,
        ];
        m
    }
}

impl Member4 for Mat3x4 {
    const FORM: Form = Form::Truncated;

    fn expand(&self) -> [f64; 16] {
        let mut m = [0f64; 16];
        m[..12].copy_from_slice(&self.0);
        m[15] = 1.;
        m
    }
}

pub fn multiply2<'a>(a: &Mat2, b: &Mat2, dst: &'a mut Mat2) -> &'a mut Mat2 {
    #[rustfmt::skip]
    let [
        a00, a01,
        a10, a11,
    ] = a.0;
    #[rustfmt::skip]
    let [
        b00, b01,
        b10, b11,
    ] = b.0;

    dst.0 = [
        a00 * b00 + a10 * b01,
        a01 * b00 + a11 * b01,
        a00 * b10 + a10 * b11,
        a01 * b10 + a11 * b11,
    ];
    dst
}

/// `dst = a · b` in the 3x3 family.
///
/// An affine destination only keeps the linear block and the translation
/// column: the implied bottom row of `b` is never read, so `a`'s translation
/// is carried over as is.
pub fn multiply3<'a, A: Member3, B: Member3, D: Member3>(
    a: &A,
    b: &B,
    dst: &'a mut D,
) -> &'a mut D {
    #[rustfmt::skip]
    let [
        a00, a01, a02,
        a10, a11, a12,
        a20, a21, a22,
    ] = a.expand();
    #[rustfmt::skip]
    let [
        b00, b01, b02,
        b10, b11, b12,
        b20, b21, b22,
    ] = b.expand();

    let out = dst.as_mut();
    match D::FORM {
        Form::Affine => {
            out.copy_from_slice(&[
                b00 * a00 + b01 * a10,
                b00 * a01 + b01 * a11,
                b10 * a00 + b11 * a10,
                b10 * a01 + b11 * a11,
                b20 * a00 + b21 * a10 + a20,
                b20 * a01 + b21 * a11 + a21,
            ]);
        }
        Form::Square | Form::Truncated => {
            let full = [
                b00 * a00 + b01 * a10 + b02 * a20,
                b00 * a01 + b01 * a11 + b02 * a21,
                b00 * a02 + b01 * a12 + b02 * a22,
                b10 * a00 + b11 * a10 + b12 * a20,
                b10 * a01 + b11 * a11 + b12 * a21,
                b10 * a02 + b11 * a12 + b12 * a22,
                b20 * a00 + b21 * a10 + b22 * a20,
                b20 * a01 + b21 * a11 + b22 * a21,
                b20 * a02 + b21 * a12 + b22 * a22,
            ];
            let n = out.len();
            out.copy_from_slice(&full[..n]);
        }
    }
    dst
}

/// `dst = a · b` in the 4x4 family, with the same destination rules as
/// [`multiply3`].
pub fn multiply4<'a, A: Member4, B: Member4, D: Member4>(
    a: &A,
    b: &B,
    dst: &'a mut D,
) -> &'a mut D {
    #[rustfmt::skip]
    let [
        a00, a01, a02, a03,
        a10, a11, a12, a13,
        a20, a21, a22, a23,
        a30, a31, a32, a33,
    ] = a.expand();
    #[rustfmt::skip]
    let [
        b00, b01, b02, b03,
        b10, b11, b12, b13,
        b20, b21, b22, b23,
        b30, b31, b32, b33,
    ] = b.expand();

    let out = dst.as_mut();
    match D::FORM {
        Form::Affine => {
            out.copy_from_slice(&[
                b00 * a00 + b01 * a10 + b02 * a20,
                b00 * a01 + b01 * a11 + b02 * a21,
                b00 * a02 + b01 * a12 + b02 * a22,
                b10 * a00 + b11 * a10 + b12 * a20,
                b10 * a01 + b11 * a11 + b12 * a21,
                b10 * a02 + b11 * a12 + b12 * a22,
                b20 * a00 + b21 * a10 + b22 * a20,
                b20 * a01 + b21 * a11 + b22 * a21,
                b20 * a02 + b21 * a12 + b22 * a22,
                b30 * a00 + b31 * a10 + b32 * a20 + a30,
                b30 * a01 + b31 * a11 + b32 * a21 + a31,
                b30 * a02 + b31 * a12 + b32 * a22 + a32,
            ]);
        }
        Form::Square | Form::Truncated => {
            let full = [
                b00 * a00 + b01 * a10 + b02 * a20 + b03 * a30,
                b00 * a01 + b01 * a11 + b02 * a21 + b03 * a31,
                b00 * a02 + b01 * a12 + b02 * a22 + b03 * a32,
                b00 * a03 + b01 * a13 + b02 * a23 + b03 * a33,
                b10 * a00 + b11 * a10 + b12 * a20 + b13 * a30,
                b10 * a01 + b11 * a11 + b12 * a21 + b13 * a31,
                b10 * a02 + b11 * a12 + b12 * a22 + b13 * a32,
                b10 * a03 + b11 * a13 + b12 * a23 + b13 * a33,
                b20 * a00 + b21 * a10 + b22 * a20 + b23 * a30,
                b20 * a01 + b21 * a11 + b22 * a21 + b23 * a31,
                b20 * a02 + b21 * a12 + b22 * a22 + b23 * a32,
                b20 * a03 + b21 * a13 + b22 * a23 + b23 * a33,
                b30 * a00 + b31 * a10 + b32 * a20 + b33 * a30,
                b30 * a01 + b31 * a11 + b32 * a21 + b33 * a31,
                b30 * a02 + b31 * a12 + b32 * a22 + b33 * a32,
                b30 * a03 + b31 * a13 + b32 * a23 + b33 * a33,
            ];
            let n = out.len();
            out.copy_from_slice(&full[..n]);
        }
    }
    dst
}
