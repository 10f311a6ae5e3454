use num_traits::Float;

use crate::container::impl_container;
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::norm::norm;
use crate::vec2::Vec2;
use crate::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3(pub [f64; 3]);

impl_container!(Vec3, Vec3, 3);

impl Default for Vec3 {
    fn default() -> Self {
        Vec3([0.; 3])
    }
}

pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Matrices whose 3x3 linear part can act on a [`Vec3`] direction.
///
/// A [`Mat4`] contributes only its upper-left block, so any translation it
/// carries is ignored. Use [`Mat4::transform_vec`] to move a point.
pub trait Linear3 {
    fn linear3(&self) -> Mat3;
}

impl Linear3 for Mat3 {
    fn linear3(&self) -> Mat3 {
        *self
    }
}

impl Linear3 for Mat4 {
    fn linear3(&self) -> Mat3 {
        self.to_mat3()
    }
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn set_x(&mut self, x: f64) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.0[2] = z;
    }

    pub fn norm(&self) -> f64 {
        norm(&self.0)
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 = [x, y, z];
        self
    }

    pub fn dot(&self, v: &Vec3) -> f64 {
        self.0[0] * v.0[0] + self.0[1] * v.0[1] + self.0[2] * v.0[2]
    }

    /// `self = self × v`.
    pub fn cross(&mut self, v: &Vec3) -> &mut Self {
        let [a, b, c] = self.0;
        let [x, y, z] = v.0;

        self.0 = [b * z - c * y, c * x - a * z, a * y - b * x];
        self
    }

    /// Divides by [`Vec3::norm`]. A zero vector turns into NaNs.
    pub fn normalize(&mut self) -> &mut Self {
        let l = self.norm();
        self.0 = self.0.map(|e| e / l);
        self
    }

    pub fn add(&mut self, v: &Vec3) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e += o;
        }
        self
    }

    pub fn subtract(&mut self, v: &Vec3) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e -= o;
        }
        self
    }

    pub fn multiply(&mut self, v: &Vec3) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e *= o;
        }
        self
    }

    pub fn divide(&mut self, v: &Vec3) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e /= o;
        }
        self
    }

    pub fn scale(&mut self, n: f64) -> &mut Self {
        self.0 = self.0.map(|e| e * n);
        self
    }

    pub fn distance(&self, v: &Vec3) -> f64 {
        let mut d = *self;
        d.subtract(v).norm()
    }

    pub fn inverse(&mut self) -> &mut Self {
        self.0 = self.0.map(|e| 1. / e);
        self
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.0 = self.0.map(Float::ceil);
        self
    }

    pub fn floor(&mut self) -> &mut Self {
        self.0 = self.0.map(Float::floor);
        self
    }

    /// `self = L · self`, where `L` is the 3x3 linear part of `m`.
    pub fn transform<M: Linear3>(&mut self, m: &M) -> &mut Self {
        #[rustfmt::skip]
        let [
            a00, a01, a02,
            a10, a11, a12,
            a20, a21, a22,
        ] = m.linear3().0;
        let [x, y, z] = self.0;

        self.0 = [
            a00 * x + a10 * y + a20 * z,
            a01 * x + a11 * y + a21 * z,
            a02 * x + a12 * y + a22 * z,
        ];
        self
    }

    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }

    pub fn to_vec4(&self) -> Vec4 {
        self.to_vec4_w(1.)
    }

    pub fn to_vec4_w(&self, w: f64) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], self.0[2], w)
    }
}
