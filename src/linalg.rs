//! Closed-form cofactor inverses on column-major component arrays.
//!
//! `aCR` names the component in column `C`, row `R`. Every function returns
//! `None` when the determinant is exactly zero.

pub fn determinant2(m: &[f64; 4]) -> f64 {
    m[0] * m[3] - m[1] * m[2]
}

pub fn inverse2(m: &[f64; 4]) -> Option<[f64; 4]> {
    let [a, b, c, d] = *m;

    let det = determinant2(m);
    if det == 0f64 {
        return None;
    }
    let det = 1. / det;

    Some([d * det, -b * det, -c * det, a * det])
}

pub fn determinant3(m: &[f64; 9]) -> f64 {
    #[rustfmt::skip]
    let [
        a00, a01, a02,
        a10, a11, a12,
        a20, a21, a22,
    ] = *m;

    a00 * (a22 * a11 - a12 * a21) + a01 * (-a22 * a10 + a12 * a20) + a02 * (a21 * a10 - a11 * a20)
}

pub fn inverse3(m: &[f64; 9]) -> Option<[f64; 9]> {
    #[rustfmt::skip]
    let [
        a00, a01, a02,
        a10, a11, a12,
        a20, a21, a22,
    ] = *m;

    let b01 = a22 * a11 - a12 * a21;
    let b11 = -a22 * a10 + a12 * a20;
    let b21 = a21 * a10 - a11 * a20;

    let det = a00 * b01 + a01 * b11 + a02 * b21;
    if det == 0f64 {
        return None;
    }
    let det = 1. / det;

    #[rustfmt::skip]
    let inv = [
        b01 * det, (-a22 * a01 + a02 * a21) * det, (a12 * a01 - a02 * a11) * det,
        b11 * det, (a22 * a00 - a02 * a20) * det, (-a12 * a00 + a02 * a10) * det,
        b21 * det, (-a21 * a00 + a01 * a20) * det, (a11 * a00 - a01 * a10) * det,
    ];
    Some(inv)
}

/// Inverse of a 2D affine transform stored as three columns of two
/// (linear part followed by the translation column).
pub fn inverse3x2(m: &[f64; 6]) -> Option<[f64; 6]> {
    #[rustfmt::skip]
    let [
        a, b,
        c, d,
        e, f,
    ] = *m;

    let n = a * d - b * c;
    if n == 0f64 {
        return None;
    }

    #[rustfmt::skip]
    let inv = [
        d / n, -b / n,
        -c / n, a / n,
        (c * f - d * e) / n, -(a * f - b * e) / n,
    ];
    Some(inv)
}

/// Inverse of a 2D affine transform stored as two columns of three, whose
/// implicit third column is `(0, 0, 1)`.
pub fn inverse2x3(m: &[f64; 6]) -> Option<[f64; 6]> {
    #[rustfmt::skip]
    let [
        a00, a01, a02,
        a10, a11, a12,
    ] = *m;

    let b01 = a11;
    let b11 = -a10;

    let det = a00 * b01 + a01 * b11;
    if det == 0f64 {
        return None;
    }
    let det = 1. / det;

    #[rustfmt::skip]
    let inv = [
        b01 * det, -a01 * det, (a12 * a01 - a02 * a11) * det,
        b11 * det, a00 * det, (-a12 * a00 + a02 * a10) * det,
    ];
    Some(inv)
}

pub fn determinant4(m: &[f64; 16]) -> f64 {
    let b = minors4(m);
    b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
}

/// The twelve 2x2 sub-determinants pairing columns 0/1 and columns 2/3.
fn minors4(m: &[f64; 16]) -> [f64; 12] {
    #[rustfmt::skip]
    let [
        a00, a01, a02, a03,
        a10, a11, a12, a13,
        a20, a21, a22, a23,
        a30, a31, a32, a33,
    ] = *m;

    [
        a00 * a11 - a01 * a10,
        a00 * a12 - a02 * a10,
        a00 * a13 - a03 * a10,
        a01 * a12 - a02 * a11,
        a01 * a13 - a03 * a11,
        a02 * a13 - a03 * a12,
        a20 * a31 - a21 * a30,
        a20 * a32 - a22 * a30,
        a20 * a33 - a23 * a30,
        a21 * a32 - a22 * a31,
        a21 * a33 - a23 * a31,
        a22 * a33 - a23 * a32,
    ]
}

pub fn inverse4(m: &[f64; 16]) -> Option<[f64; 16]> {
    #[rustfmt::skip]
    let [
        a00, a01, a02, a03,
        a10, a11, a12, a13,
        a20, a21, a22, a23,
        a30, a31, a32, a33,
    ] = *m;
    let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = minors4(m);

    let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
    if det == 0f64 {
        return None;
    }
    let det = 1. / det;

    Some([
        (a11 * b11 - a12 * b10 + a13 * b09) * det,
        (a02 * b10 - a01 * b11 - a03 * b09) * det,
        (a31 * b05 - a32 * b04 + a33 * b03) * det,
        (a22 * b04 - a21 * b05 - a23 * b03) * det,
        (a12 * b08 - a10 * b11 - a13 * b07) * det,
        (a00 * b11 - a02 * b08 + a03 * b07) * det,
        (a32 * b02 - a30 * b05 - a33 * b01) * det,
        (a20 * b05 - a22 * b02 + a23 * b01) * det,
        (a10 * b10 - a11 * b08 + a13 * b06) * det,
        (a01 * b08 - a00 * b10 - a03 * b06) * det,
        (a30 * b04 - a31 * b02 + a33 * b00) * det,
        (a21 * b02 - a20 * b04 - a23 * b00) * det,
        (a11 * b07 - a10 * b09 - a12 * b06) * det,
        (a00 * b09 - a01 * b07 + a02 * b06) * det,
        (a31 * b01 - a30 * b03 - a32 * b00) * det,
        (a20 * b03 - a21 * b01 + a22 * b00) * det,
    ])
}

/// Inverse of a 3D affine transform stored as four columns of three
/// (linear part followed by the translation column).
pub fn inverse4x3(m: &[f64; 12]) -> Option<[f64; 12]> {
    #[rustfmt::skip]
    let [
        a00, a01, a02,
        a10, a11, a12,
        a20, a21, a22,
        a30, a31, a32,
    ] = *m;

    let b00 = a00 * a11 - a01 * a10;
    let b01 = a00 * a12 - a02 * a10;
    let b03 = a01 * a12 - a02 * a11;
    let b06 = a20 * a31 - a21 * a30;
    let b07 = a20 * a32 - a22 * a30;
    let b08 = a20;
    let b09 = a21 * a32 - a22 * a31;
    let b10 = a21;
    let b11 = a22;

    let det = b00 * b11 - b01 * b10 + b03 * b08;
    if det == 0f64 {
        return None;
    }
    let det = 1. / det;

    Some([
        (a11 * b11 - a12 * b10) * det,
        (a02 * b10 - a01 * b11) * det,
        b03 * det,
        (a12 * b08 - a10 * b11) * det,
        (a00 * b11 - a02 * b08) * det,
        -b01 * det,
        (a10 * b10 - a11 * b08) * det,
        (a01 * b08 - a00 * b10) * det,
        b00 * det,
        (a11 * b07 - a10 * b09 - a12 * b06) * det,
        (a00 * b09 - a01 * b07 + a02 * b06) * det,
        (a31 * b01 - a30 * b03 - a32 * b00) * det,
    ])
}

/// Inverse of a 3D affine transform stored as three columns of four, whose
/// implicit fourth column is `(0, 0, 0, 1)`.
pub fn inverse3x4(m: &[f64; 12]) -> Option<[f64; 12]> {
    #[rustfmt::skip]
    let [
        a00, a01, a02, a03,
        a10, a11, a12, a13,
        a20, a21, a22, a23,
    ] = *m;

    let b00 = a00 * a11 - a01 * a10;
    let b01 = a00 * a12 - a02 * a10;
    let b02 = a00 * a13 - a03 * a10;
    let b03 = a01 * a12 - a02 * a11;
    let b04 = a01 * a13 - a03 * a11;
    let b05 = a02 * a13 - a03 * a12;
    let b08 = a20;
    let b10 = a21;
    let b11 = a22;

    let det = b00 * b11 - b01 * b10 + b03 * b08;
    if det == 0f64 {
        return None;
    }
    let det = 1. / det;

    Some([
        (a11 * b11 - a12 * b10) * det,
        (a02 * b10 - a01 * b11) * det,
        b03 * det,
        (a22 * b04 - a21 * b05 - a23 * b03) * det,
        (a12 * b08 - a10 * b11) * det,
        (a00 * b11 - a02 * b08) * det,
        -b01 * det,
        (a20 * b05 - a22 * b02 + a23 * b01) * det,
        (a10 * b10 - a11 * b08) * det,
        (a01 * b08 - a00 * b10) * det,
        b00 * det,
        (a21 * b02 - a20 * b04 - a23 * b00) * det,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: &[f64], b: &[f64]) -> f64 {
        assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
            .sqrt()
    }

    #[test]
    fn test_inverse2() {
        let m = [4., 2., 7., 6.];
        let Some(inverse) = inverse2(&m) else {
            panic!("Should return Some(inverse_matrix)");
        };
        let expected = nalgebra::Matrix2::from_column_slice(&m).try_inverse().unwrap();
        assert!(distance(&inverse, expected.as_slice()) < 1e-14);
        assert_eq!(determinant2(&m), 10.);

        // a * d - b * d vanishes here although the matrix is invertible
        assert!(inverse2(&[2., 2., 1., 3.]).is_some());
        assert!(inverse2(&[1., 2., 2., 4.]).is_none());
        assert!(inverse2(&[0.; 4]).is_none());
    }

    #[test]
    fn test_inverse3() {
        #[rustfmt::skip]
        let matrix = [
            -3.64867356, 0.11236464, -7.60555263,
            -3.56881707, -9.77855129, 0.50475873,
            -9.34728378, 0.25373179, -7.55422161,
        ];
        let inverse = match inverse3(&matrix) {
            Some(inverse) => inverse,
            None => panic!("Should return Some(inverse_matrix)"),
        };
        let product = nalgebra::Matrix3::from_column_slice(&inverse)
            * nalgebra::Matrix3::from_column_slice(&matrix);
        assert!(distance(product.as_slice(), nalgebra::Matrix3::<f64>::identity().as_slice()) < 1e-14);

        let det = nalgebra::Matrix3::from_column_slice(&matrix).determinant();
        assert!((determinant3(&matrix) - det).abs() < 1e-10);

        assert!(inverse3(&[0.; 9]).is_none());

        #[rustfmt::skip]
        let matrix = [
            3.0, 1.0, 2.0,
            6.0, 2.0, 4.0,
            9.0, 9.0, 7.0,
        ];
        assert!(inverse3(&matrix).is_none());
    }

    #[test]
    fn test_inverse3x2() {
        // rotate by 90 degrees, then translate by (3, 4)
        let m = [0., 1., -1., 0., 3., 4.];
        let Some(inverse) = inverse3x2(&m) else {
            panic!("Should return Some(inverse_matrix)");
        };
        assert!(distance(&inverse, &[0., -1., 1., 0., -4., 3.]) < 1e-15);
        assert!(inverse3x2(&[1., 2., 2., 4., 5., 6.]).is_none());
    }

    #[test]
    fn test_inverse2x3() {
        let m = [2., 0., 3., 0., 4., 5.];
        let Some(inverse) = inverse2x3(&m) else {
            panic!("Should return Some(inverse_matrix)");
        };
        let full = [m[0], m[1], m[2], m[3], m[4], m[5], 0., 0., 1.];
        let expected = inverse3(&full).unwrap();
        assert!(distance(&inverse, &expected[..6]) < 1e-15);
        assert!(inverse2x3(&[0.; 6]).is_none());
    }

    #[test]
    fn test_inverse4() {
        #[rustfmt::skip]
        let matrix = [
            2., 0.5, -1., 0.,
            1., 3., 0.25, 1.,
            0., -2., 4., 0.5,
            7., 1., -3., 1.,
        ];
        let Some(inverse) = inverse4(&matrix) else {
            panic!("Should return Some(inverse_matrix)");
        };
        let expected = nalgebra::Matrix4::from_column_slice(&matrix)
            .try_inverse()
            .unwrap();
        assert!(distance(&inverse, expected.as_slice()) < 1e-12);

        let det = nalgebra::Matrix4::from_column_slice(&matrix).determinant();
        assert!((determinant4(&matrix) - det).abs() < 1e-10);

        assert!(inverse4(&[0.; 16]).is_none());
    }

    #[test]
    fn test_affine_inverses_match_square() {
        #[rustfmt::skip]
        let m = [
            0.8, 0.1, -0.3,
            -0.2, 1.1, 0.4,
            0.5, 0.0, 0.9,
            7., -2., 3.,
        ];
        #[rustfmt::skip]
        let full = [
            m[0], m[1], m[2], 0.,
            m[3], m[4], m[5], 0.,
            m[6], m[7], m[8], 0.,
            m[9], m[10], m[11], 1.,
        ];
        let square = inverse4(&full).unwrap();
        let affine = inverse4x3(&m).unwrap();
        #[rustfmt::skip]
        let expected = [
            square[0], square[1], square[2],
            square[4], square[5], square[6],
            square[8], square[9], square[10],
            square[12], square[13], square[14],
        ];
        assert!(distance(&affine, &expected) < 1e-12);

        #[rustfmt::skip]
        let m = [
            0.8, 0.1, -0.3, 2.,
            -0.2, 1.1, 0.4, -1.,
            0.5, 0.0, 0.9, 0.5,
        ];
        let mut full = [0f64; 16];
        full[..12].copy_from_slice(&m);
        full[15] = 1.;
        let square = inverse4(&full).unwrap();
        let truncated = inverse3x4(&m).unwrap();
        assert!(distance(&truncated, &square[..12]) < 1e-12);
        assert!(distance(&square[12..], &[0., 0., 0., 1.]) < 1e-12);

        assert!(inverse4x3(&[0.; 12]).is_none());
        assert!(inverse3x4(&[0.; 12]).is_none());
    }
}
