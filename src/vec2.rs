use num_traits::Float;

use crate::container::impl_container;
use crate::mat2::Mat2;
use crate::norm::norm;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2(pub [f64; 2]);

impl_container!(Vec2, Vec2, 2);

impl Default for Vec2 {
    fn default() -> Self {
        Vec2([0.; 2])
    }
}

pub fn vec2(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn set_x(&mut self, x: f64) {
        self.0[0] = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.0[1] = y;
    }

    pub fn norm(&self) -> f64 {
        norm(&self.0)
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.0 = [x, y];
        self
    }

    pub fn dot(&self, v: &Vec2) -> f64 {
        self.0[0] * v.0[0] + self.0[1] * v.0[1]
    }

    /// The z component of the 3D cross product of the two vectors.
    pub fn cross(&self, v: &Vec2) -> f64 {
        self.0[0] * v.0[1] - self.0[1] * v.0[0]
    }

    /// Divides by [`Vec2::norm`]. A zero vector turns into NaNs.
    pub fn normalize(&mut self) -> &mut Self {
        let l = self.norm();
        self.0[0] /= l;
        self.0[1] /= l;
        self
    }

    pub fn add(&mut self, v: &Vec2) -> &mut Self {
        self.0[0] += v.0[0];
        self.0[1] += v.0[1];
        self
    }

    pub fn subtract(&mut self, v: &Vec2) -> &mut Self {
        self.0[0] -= v.0[0];
        self.0[1] -= v.0[1];
        self
    }

    pub fn multiply(&mut self, v: &Vec2) -> &mut Self {
        self.0[0] *= v.0[0];
        self.0[1] *= v.0[1];
        self
    }

    pub fn divide(&mut self, v: &Vec2) -> &mut Self {
        self.0[0] /= v.0[0];
        self.0[1] /= v.0[1];
        self
    }

    pub fn scale(&mut self, n: f64) -> &mut Self {
        self.0[0] *= n;
        self.0[1] *= n;
        self
    }

    pub fn distance(&self, v: &Vec2) -> f64 {
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

    /// `self = m · self`.
    pub fn transform(&mut self, m: &Mat2) -> &mut Self {
        let [a, b, c, d] = m.0;
        let [x, y] = self.0;

        self.0 = [a * x + c * y, b * x + d * y];
        self
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], 0.)
    }

    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.0[0], self.0[1], 0., 1.)
    }
}
