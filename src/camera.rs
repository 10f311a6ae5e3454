//! Camera and projection matrices (right-handed, clip space `z` in `[-1, 1]`).

use num_traits::Float;

use crate::mat4::{mat4, Mat4};
use crate::vec3::Vec3;

/// Camera-to-world transform of a camera at `eye` looking at `target`.
///
/// The camera looks down its local `-z`; `up` only has to be non-parallel to
/// the viewing direction.
pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let mut z = *eye;
    z.subtract(target).normalize();
    let mut x = *up;
    x.cross(&z).normalize();
    let mut y = z;
    y.cross(&x).normalize();

    let [xx, xy, xz] = x.0;
    let [yx, yy, yz] = y.0;
    let [zx, zy, zz] = z.0;
    let [cx, cy, cz] = eye.0;

    #[rustfmt::skip]
    let m = mat4(
        xx, xy, xz, 0.,
        yx, yy, yz, 0.,
        zx, zy, zz, 0.,
        cx, cy, cz, 1.,
    );
    m
}

/// Perspective projection; `fov` is the vertical field of view in radians.
pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> Mat4 {
    let tan = Float::tan(fov / 2.);
    let range = near - far;

    #[rustfmt::skip]
    let m = mat4(
        1. / tan / aspect, 0., 0., 0.,
        0., 1. / tan, 0., 0.,
        0., 0., (near + far) / range, -1.,
        0., 0., 2. * near * far / range, 0.,
    );
    m
}

pub fn orthographic(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> Mat4 {
    #[rustfmt::skip]
    let m = mat4(
        2. / (right - left), 0., 0., 0.,
        0., 2. / (top - bottom), 0., 0.,
        0., 0., 2. / (near - far), 0.,
        (left + right) / (left - right), (bottom + top) / (bottom - top), (near + far) / (near - far), 1.,
    );
    m
}
