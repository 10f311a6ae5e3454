//! Spherical coordinates in degrees, with the azimuth `theta` measured from
//! the z axis towards x and the elevation `phi` measured from the x-z plane
//! towards y.

use num_traits::Float;

use crate::mat4::Mat4;
use crate::vec3::Vec3;
use crate::{clamp, DEG2RAD, RAD2DEG};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    radius: f64,
    theta: f64,
    phi: f64,
}

impl Default for Spherical {
    fn default() -> Self {
        Spherical::new(1., 0., 0.)
    }
}

fn clamp_phi(phi: f64) -> f64 {
    let clamped = clamp(phi, -90., 90.);
    if clamped != phi {
        log::trace!("elevation {} clamped to {}", phi, clamped);
    }
    clamped
}

impl Spherical {
    pub fn new(radius: f64, theta: f64, phi: f64) -> Self {
        Spherical {
            radius,
            theta,
            phi: clamp_phi(phi),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn set_theta(&mut self, theta: f64) {
        self.theta = theta;
    }

    /// Elevation in degrees, clamped to `[-90, 90]`.
    pub fn set_phi(&mut self, phi: f64) {
        self.phi = clamp_phi(phi);
    }

    pub fn set(&mut self, radius: f64, theta: f64, phi: f64) -> &mut Self {
        *self = Spherical::new(radius, theta, phi);
        self
    }

    /// Converts a Cartesian point. The origin maps to zero angles.
    pub fn from_cartesian(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.radius = Float::sqrt(x * x + y * y + z * z);

        if self.radius == 0. {
            self.theta = 0.;
            self.phi = 0.;
        } else {
            self.theta = Float::atan2(x, z) * RAD2DEG;
            self.phi = Float::asin(clamp(y / self.radius, -1., 1.)) * RAD2DEG;
        }
        self
    }

    /// Like [`Spherical::from_cartesian`], with missing components read as
    /// `(0, 0, 1)`.
    pub fn set_slice(&mut self, v: &[f64]) -> &mut Self {
        let x = v.first().copied().unwrap_or(0.);
        let y = v.get(1).copied().unwrap_or(0.);
        let z = v.get(2).copied().unwrap_or(1.);
        self.from_cartesian(x, y, z)
    }

    pub fn to_cartesian(&self) -> Vec3 {
        let phi = self.phi * DEG2RAD;
        let theta = self.theta * DEG2RAD;
        let y = self.radius * Float::sin(phi);
        let rr = self.radius * Float::cos(phi);

        Vec3::new(rr * Float::sin(theta), y, rr * Float::cos(theta))
    }

    /// Moves out along z by the radius, then tilts up by `phi` and turns by
    /// `theta`. The origin lands on [`Spherical::to_cartesian`].
    pub fn to_mat4(&self) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        m.tz(self.radius)
            .rx(-self.phi * DEG2RAD)
            .ry(self.theta * DEG2RAD);
        m
    }
}

impl From<Vec3> for Spherical {
    fn from(v: Vec3) -> Self {
        let mut s = Spherical::default();
        s.from_cartesian(v.0[0], v.0[1], v.0[2]);
        s
    }
}
