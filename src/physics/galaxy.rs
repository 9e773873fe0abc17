//! Galaxy sampling and bulk motion

use crate::config::PhysicsConfig;
use crate::physics::forces::{ForceLaw, PointMass};
use crate::physics::math::{
    Orientation, Scalar, Vector, random_orientation, random_unit_cube_vector,
};
use crate::physics::stars::{Star, create_star};
use rand::Rng;

/// A point-mass center with a fixed population of orbiting stars
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    mass: Scalar,
    size: Scalar,
    position: Vector,
    velocity: Vector,
    orientation: Orientation,
    stars: Vec<Star>,
}

impl Galaxy {
    /// A galaxy without stars. Stars are added by [`create_galaxy`].
    pub(crate) fn from_parts(
        mass: Scalar,
        size: Scalar,
        position: Vector,
        velocity: Vector,
        orientation: Orientation,
    ) -> Self {
        Self {
            mass,
            size,
            position,
            velocity,
            orientation,
            stars: Vec::new(),
        }
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    #[inline]
    pub fn size(&self) -> Scalar {
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

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn as_point_mass(&self) -> PointMass {
        PointMass::new(self.position, self.mass)
    }

    /// Advance every star of this galaxy by one tick
    pub fn advance_stars(&mut self, attractors: &[PointMass], law: &ForceLaw, dt: Scalar) {
        for star in &mut self.stars {
            star.advance(attractors, law, dt);
        }
    }

    /// Exchange equal and opposite impulses with `other`
    pub fn attract(&mut self, other: &mut Galaxy, law: &ForceLaw) {
        let impulse = law.mutual_impulse(&self.as_point_mass(), &other.as_point_mass());
        self.velocity += impulse / self.mass;
        other.velocity -= impulse / other.mass;
    }

    /// Move the galaxy center along its current velocity
    pub fn drift(&mut self, dt: Scalar) {
        self.position += self.velocity * dt;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self
                .stars
                .iter()
                .all(|star| star.position().is_finite() && star.velocity().is_finite())
    }
}

/// Samples a galaxy heading into the collision zone.
///
/// The galaxy is placed where it would have been `hit_iterations` ticks ago
/// had it travelled at its sampled velocity from near the origin, then pushed
/// forward along z by `depth_offset`.
pub fn create_galaxy<R: Rng + ?Sized>(physics: &PhysicsConfig, rng: &mut R) -> Galaxy {
    let mass = physics.stars_per_galaxy as Scalar;
    let size = physics.galaxy_size_range * rng.random::<Scalar>() + physics.galaxy_min_size;

    let velocity = random_unit_cube_vector(rng);
    let lead_time = physics.time_step * physics.hit_iterations as Scalar;
    let jitter = Vector::new(
        rng.random::<Scalar>() - 0.5,
        rng.random::<Scalar>() - 0.5,
        rng.random::<Scalar>() - 0.5,
    );
    let position =
        -velocity * lead_time + jitter + Vector::new(0.0, 0.0, physics.depth_offset);

    let orientation = random_orientation(rng);

    let mut galaxy = Galaxy::from_parts(mass, size, position, velocity, orientation);
    let stars = (0..physics.stars_per_galaxy)
        .map(|_| create_star(&galaxy, physics.orbital_velocity_scale, rng))
        .collect();
    galaxy.stars = stars;

    galaxy
}
