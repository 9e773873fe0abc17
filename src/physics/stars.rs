//! Star sampling and per-tick star motion
//!
//! Stars are laid out in a thin disk around their galaxy's center. Height falls
//! off exponentially with radius, so the disk is densest and flattest near the
//! middle, and each star starts on a roughly circular orbit.

use crate::physics::forces::{ForceLaw, PointMass};
use crate::physics::galaxy::Galaxy;
use crate::physics::math::{Scalar, Vector, random_angle};
use rand::Rng;

/// Star sizes are drawn from `0..MAX_STAR_SIZE`
pub const MAX_STAR_SIZE: u8 = 7;

/// A massless point orbiting its galaxy
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    size: u8,
    position: Vector,
    velocity: Vector,
}

impl Star {
    /// Visual weight in `0..MAX_STAR_SIZE`, unrelated to the physics
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn position(&self) -> Vector {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Kick the star with the pull of every attractor, then drift it.
    ///
    /// Velocity is fully updated before the position moves.
    pub fn advance(&mut self, attractors: &[PointMass], law: &ForceLaw, dt: Scalar) {
        let position = self.position;
        self.velocity = attractors
            .iter()
            .fold(self.velocity, |velocity, attractor| {
                velocity + law.pull(attractor, position)
            });
        self.position += self.velocity * dt;
    }
}

/// Polar sample of a star's place in its galaxy's disk
#[derive(Debug, Clone, Copy)]
struct DiskSample {
    angle: Scalar,
    radius: Scalar,
    height: Scalar,
}

impl DiskSample {
    fn distance(&self) -> Scalar {
        libm::sqrt(self.radius * self.radius + self.height * self.height)
    }
}

fn sample_disk<R: Rng + ?Sized>(galaxy_size: Scalar, rng: &mut R) -> DiskSample {
    loop {
        let angle = random_angle(rng);
        let radius = rng.random::<Scalar>() * galaxy_size;
        let mut height =
            rng.random::<Scalar>() * libm::exp(-2.0 * (radius / galaxy_size)) / 5.0 * galaxy_size;
        if rng.random_bool(0.5) {
            height = -height;
        }

        // A star at the exact center has no defined orbital speed
        if radius != 0.0 || height != 0.0 {
            return DiskSample {
                angle,
                radius,
                height,
            };
        }
    }
}

/// Samples one star for `galaxy`.
///
/// The orbital speed is `sqrt(mass * orbital_velocity_scale / r)`, directed
/// perpendicular to the radius inside the disk plane.
pub fn create_star<R: Rng + ?Sized>(
    galaxy: &Galaxy,
    orbital_velocity_scale: Scalar,
    rng: &mut R,
) -> Star {
    let sample = sample_disk(galaxy.size(), rng);
    let speed = libm::sqrt(galaxy.mass() * orbital_velocity_scale / sample.distance());

    let (sin_w, cos_w) = (libm::sin(sample.angle), libm::cos(sample.angle));
    let orientation = galaxy.orientation();

    let offset = orientation
        * Vector::new(
            sample.radius * cos_w,
            sample.radius * sin_w,
            sample.height,
        );
    let orbital_velocity = orientation * Vector::new(-speed * sin_w, speed * cos_w, 0.0);

    Star {
        size: rng.random_range(0..MAX_STAR_SIZE),
        position: galaxy.position() + offset,
        velocity: galaxy.velocity() + orbital_velocity,
    }
}
