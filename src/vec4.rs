use num_traits::Float;

use crate::container::impl_container;
use crate::mat4::Mat4;
use crate::norm::norm;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec4(pub [f64; 4]);

impl_container!(Vec4, Vec4, 4);

impl Default for Vec4 {
    fn default() -> Self {
        Vec4([0., 0., 0., 1.])
    }
}

pub fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vec4 {
    Vec4::new(x, y, z, w)
}

/// Promotion of a vector into the homogeneous coordinates of a matrix
/// family. A missing last component is taken as a point (`1`).
pub trait Homogeneous<V> {
    fn homogeneous(self) -> V;
}

impl Homogeneous<Vec3> for Vec2 {
    fn homogeneous(self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], 1.)
    }
}

impl Homogeneous<Vec3> for Vec3 {
    fn homogeneous(self) -> Vec3 {
        self
    }
}

impl Homogeneous<Vec4> for Vec3 {
    fn homogeneous(self) -> Vec4 {
        self.to_vec4()
    }
}

impl Homogeneous<Vec4> for Vec4 {
    fn homogeneous(self) -> Vec4 {
        self
    }
}

impl Vec4 {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Vec4([x, y, z, w])
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

    pub fn w(&self) -> f64 {
        self.0[3]
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

    pub fn set_w(&mut self, w: f64) {
        self.0[3] = w;
    }

    pub fn norm(&self) -> f64 {
        norm(&self.0)
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        self.0 = [x, y, z, w];
        self
    }

    pub fn dot(&self, v: &Vec4) -> f64 {
        self.0.iter().zip(v.0).map(|(a, b)| a * b).sum()
    }

    /// Divides all four components by [`Vec4::norm`]. A zero vector turns
    /// into NaNs.
    pub fn normalize(&mut self) -> &mut Self {
        let l = self.norm();
        self.0 = self.0.map(|e| e / l);
        self
    }

    pub fn add(&mut self, v: &Vec4) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e += o;
        }
        self
    }

    pub fn subtract(&mut self, v: &Vec4) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e -= o;
        }
        self
    }

    pub fn multiply(&mut self, v: &Vec4) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e *= o;
        }
        self
    }

    pub fn divide(&mut self, v: &Vec4) -> &mut Self {
        for (e, o) in self.0.iter_mut().zip(v.0) {
            *e /= o;
        }
        self
    }

    pub fn scale(&mut self, n: f64) -> &mut Self {
        self.0 = self.0.map(|e| e * n);
        self
    }

    pub fn distance(&self, v: &Vec4) -> f64 {
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

    /// Perspective divide: x, y and z are divided by w, which becomes 1.
    pub fn divide_by_w(&mut self) -> &mut Self {
        let w = self.0[3];
        self.0[0] /= w;
        self.0[1] /= w;
        self.0[2] /= w;
        self.0[3] = 1.;
        self
    }

    /// `self = m · self`.
    pub fn transform(&mut self, m: &Mat4) -> &mut Self {
        *self = m.transform_vec(*self);
        self
    }

    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }

    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }
}
