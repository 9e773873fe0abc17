//! Inverse-square attraction between point masses
//!
//! The force law is empirical: the coupling constant stands in for both the
//! gravitational constant and the time step, so the value returned here is a
//! velocity change applied once per tick rather than an acceleration.

use crate::physics::math::{Scalar, Vector};

/// A point mass that pulls on stars and other galaxies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub position: Vector,
    pub mass: Scalar,
}

impl PointMass {
    pub fn new(position: Vector, mass: Scalar) -> Self {
        Self { position, mass }
    }
}

/// Gravitational coupling used by the integrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceLaw {
    coupling: Scalar,
    min_distance: Option<Scalar>,
}

impl ForceLaw {
    pub fn new(coupling: Scalar) -> Self {
        Self {
            coupling,
            min_distance: None,
        }
    }

    /// Clamp separations below `min_distance` when computing magnitudes.
    ///
    /// Without a clamp, near-coincident bodies receive arbitrarily large kicks.
    pub fn with_min_distance(mut self, min_distance: Option<Scalar>) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn coupling(&self) -> Scalar {
        self.coupling
    }

    pub fn min_distance(&self) -> Option<Scalar> {
        self.min_distance
    }

    /// `mass / r³ * coupling` for the given separation.
    ///
    /// Returns `None` when the separation is exactly zero and no clamp is set,
    /// since the direction of the pull is undefined there.
    #[inline]
    pub fn strength(&self, mass: Scalar, separation: Vector) -> Option<Scalar> {
        let mut distance_squared = separation.length_squared();

        if let Some(min_distance) = self.min_distance {
            distance_squared = distance_squared.max(min_distance * min_distance);
        }

        if distance_squared == 0.0 {
            return None;
        }

        Some(mass / (distance_squared * libm::sqrt(distance_squared)) * self.coupling)
    }

    /// Velocity change a star at `target` receives from `source` in one tick
    #[inline]
    pub fn pull(&self, source: &PointMass, target: Vector) -> Vector {
        let separation = source.position - target;
        match self.strength(source.mass, separation) {
            Some(strength) => separation * strength,
            None => Vector::ZERO,
        }
    }

    /// Impulse exchanged between two masses, directed from `a` towards `b`
    #[inline]
    pub fn mutual_impulse(&self, a: &PointMass, b: &PointMass) -> Vector {
        let separation = b.position - a.position;
        match self.strength(a.mass * b.mass, separation) {
            Some(strength) => separation * strength,
            None => Vector::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_follows_inverse_square() {
        let law = ForceLaw::new(1.0);
        let source = PointMass::new(Vector::ZERO, 4.0);

        let near = law.pull(&source, Vector::new(1.0, 0.0, 0.0));
        let far = law.pull(&source, Vector::new(2.0, 0.0, 0.0));

        assert!((near - Vector::new(-4.0, 0.0, 0.0)).length() < 1e-12);
        assert!((far - Vector::new(-1.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_pull_scales_with_coupling() {
        let source = PointMass::new(Vector::new(0.0, 3.0, 4.0), 700.0);
        let target = Vector::ZERO;

        let unit = ForceLaw::new(1.0).pull(&source, target);
        let scaled = ForceLaw::new(5e-6).pull(&source, target);

        assert!((unit * 5e-6 - scaled).length() < 1e-15);
    }

    #[test]
    fn test_coincident_bodies_contribute_nothing() {
        let law = ForceLaw::new(5e-6);
        let source = PointMass::new(Vector::new(1.0, 2.0, 3.0), 700.0);

        assert_eq!(law.strength(700.0, Vector::ZERO), None);
        assert_eq!(law.pull(&source, source.position), Vector::ZERO);
        assert_eq!(law.mutual_impulse(&source, &source), Vector::ZERO);
    }

    #[test]
    fn test_min_distance_clamps_magnitude() {
        let law = ForceLaw::new(1.0).with_min_distance(Some(0.5));
        let separation = Vector::new(0.1, 0.0, 0.0);

        let clamped = law.strength(1.0, separation).unwrap();
        assert!((clamped - 8.0).abs() < 1e-12, "Expected 1/0.5³, got {clamped}");

        let source = PointMass::new(Vector::ZERO, 1.0);
        assert!(law.pull(&source, Vector::ZERO).is_finite());
        assert_eq!(law.pull(&source, Vector::ZERO), Vector::ZERO);
    }

    #[test]
    fn test_min_distance_leaves_far_field_untouched() {
        let unclamped = ForceLaw::new(1.0);
        let clamped = ForceLaw::new(1.0).with_min_distance(Some(0.01));
        let separation = Vector::new(1.0, 1.0, 0.0);

        assert_eq!(
            unclamped.strength(2.0, separation),
            clamped.strength(2.0, separation)
        );
    }

    #[test]
    fn test_mutual_impulse_is_antisymmetric() {
        let law = ForceLaw::new(5e-6);
        let a = PointMass::new(Vector::new(-0.5, 0.1, 1.5), 700.0);
        let b = PointMass::new(Vector::new(0.4, -0.2, 1.2), 700.0);

        let ab = law.mutual_impulse(&a, &b);
        let ba = law.mutual_impulse(&b, &a);

        assert!((ab + ba).length() < 1e-15);
    }
}
