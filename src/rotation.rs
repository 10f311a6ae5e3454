//! Elementary rotation blocks, column-major, counter-clockwise for positive
//! angles when applied as `R · v`.

use num_traits::Float;

pub fn rotation2(rad: f64) -> [f64; 4] {
    let cos = Float::cos(rad);
    let sin = Float::sin(rad);
    #[rustfmt::skip]
    let m = [
        cos, sin,
        -sin, cos,
    ];
    m
}

/// Inverse of [`rotation2`] for a pure rotation block.
pub fn angle2(rotation: &[f64; 4]) -> f64 {
    Float::atan2(rotation[1], rotation[0])
}

pub fn rotation_x(rad: f64) -> [f64; 16] {
    let c = Float::cos(rad);
    let s = Float::sin(rad);
    #[rustfmt::skip]
    let m = [
        1., 0., 0., 0.,
        0., c, s, 0.,
        0., -s, c, 0.,
        0., 0., 0., 1.,
    ];
    m
}

pub fn rotation_y(rad: f64) -> [f64; 16] {
    let c = Float::cos(rad);
    let s = Float::sin(rad);
    #[rustfmt::skip]
    let m = [
        c, 0., -s, 0.,
        0., 1., 0., 0.,
        s, 0., c, 0.,
        0., 0., 0., 1.,
    ];
    m
}

pub fn rotation_z(rad: f64) -> [f64; 16] {
    let c = Float::cos(rad);
    let s = Float::sin(rad);
    #[rustfmt::skip]
    let m = [
        c, s, 0., 0.,
        -s, c, 0., 0.,
        0., 0., 1., 0.,
        0., 0., 0., 1.,
    ];
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn test_rotation2() {
        let theta = 0.3;
        let rot = rotation2(theta);
        let expected = [f64::cos(theta), f64::sin(theta), -f64::sin(theta), f64::cos(theta)];
        for (a, b) in rot.iter().zip(expected) {
            assert!((a - b).abs() < 1e-15);
        }
    }

    #[test]
    fn test_angle2() {
        for theta in [0.25 * PI, 0.9 * PI, -0.6 * PI, -0.05 * PI, 0.] {
            let rot = rotation2(theta);
            assert!((angle2(&rot) - theta).abs() < 1e-6);
        }
    }

    #[test]
    fn test_axis_rotations_match_nalgebra() {
        let angle = 0.7;
        let cases = [
            (rotation_x(angle), nalgebra::Vector3::x_axis()),
            (rotation_y(angle), nalgebra::Vector3::y_axis()),
            (rotation_z(angle), nalgebra::Vector3::z_axis()),
        ];
        for (rot, axis) in cases {
            let expected = nalgebra::Rotation3::from_axis_angle(&axis, angle).to_homogeneous();
            for (a, b) in rot.iter().zip(expected.as_slice()) {
                assert!((a - b).abs() < 1e-12);
            }
        }
    }
}
