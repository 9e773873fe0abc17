//! The set of interacting galaxies and the fixed-step integrator that moves them

use crate::config::{PhysicsConfig, StepOrdering};
use crate::physics::error::SimulationError;
use crate::physics::forces::{ForceLaw, PointMass};
use crate::physics::galaxy::{Galaxy, create_galaxy};
use crate::physics::math::{Scalar, Vector};
use crate::physics::stars::Star;
use rand::Rng;

/// All galaxies of one simulation run together with the constants used to advance them
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    galaxies: Vec<Galaxy>,
    generation: u64,
    time_step: Scalar,
    force_law: ForceLaw,
    step_ordering: StepOrdering,
}

impl Universe {
    /// Samples `galaxy_count` galaxies.
    ///
    /// Construction cost is proportional to `galaxy_count * stars_per_galaxy`.
    pub fn new<R: Rng + ?Sized>(
        galaxy_count: usize,
        physics: &PhysicsConfig,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        if galaxy_count == 0 {
            return Err(SimulationError::InvalidGalaxyCount(galaxy_count));
        }
        physics.validate_parameters()?;

        Ok(Self::sample(galaxy_count, physics, rng))
    }

    /// Sampling without validation, for callers that already checked their inputs
    pub(crate) fn sample<R: Rng + ?Sized>(
        galaxy_count: usize,
        physics: &PhysicsConfig,
        rng: &mut R,
    ) -> Self {
        let galaxies = (0..galaxy_count)
            .map(|_| create_galaxy(physics, rng))
            .collect();

        Self {
            galaxies,
            generation: 0,
            time_step: physics.time_step,
            force_law: physics.force_law(),
            step_ordering: physics.step_ordering,
        }
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    #[inline]
    pub fn galaxies(&self) -> &[Galaxy] {
        &self.galaxies
    }

    /// How many universes preceded this one in its simulation
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn time_step(&self) -> Scalar {
        self.time_step
    }

    #[inline]
    pub fn force_law(&self) -> &ForceLaw {
        &self.force_law
    }

    #[inline]
    pub fn step_ordering(&self) -> StepOrdering {
        self.step_ordering
    }

    /// Every star paired with the index of the galaxy that owns it
    pub fn stars(&self) -> impl Iterator<Item = (usize, &Star)> {
        self.galaxies
            .iter()
            .enumerate()
            .flat_map(|(index, galaxy)| galaxy.stars().iter().map(move |star| (index, star)))
    }

    pub fn star_count(&self) -> usize {
        self.galaxies.iter().map(|galaxy| galaxy.stars().len()).sum()
    }

    pub fn mean_star_speed(&self) -> Scalar {
        let count = self.star_count();
        if count == 0 {
            return 0.0;
        }

        let total: Scalar = self.stars().map(|(_, star)| star.velocity().length()).sum();
        total / count as Scalar
    }

    /// Total momentum of the galaxy centers
    pub fn galaxy_momentum(&self) -> Vector {
        self.galaxies
            .iter()
            .map(|galaxy| galaxy.velocity() * galaxy.mass())
            .sum()
    }

    pub fn is_finite(&self) -> bool {
        self.galaxies.iter().all(Galaxy::is_finite)
    }

    /// Advance all stars and galaxies by one fixed tick
    pub fn integrate(&mut self) {
        match self.step_ordering {
            StepOrdering::Sequential => self.integrate_sequential(),
            StepOrdering::Simultaneous => self.integrate_simultaneous(),
        }
    }

    /// Galaxy by galaxy: move its stars, let it pull on the galaxies after it,
    /// then move it. Later galaxies see the already-moved earlier ones.
    fn integrate_sequential(&mut self) {
        let dt = self.time_step;
        let law = self.force_law;
        let mut attractors: Vec<PointMass> =
            self.galaxies.iter().map(Galaxy::as_point_mass).collect();

        for index in 0..self.galaxies.len() {
            self.galaxies[index].advance_stars(&attractors, &law, dt);

            let (head, tail) = self.galaxies.split_at_mut(index + 1);
            let galaxy = &mut head[index];
            for other in tail.iter_mut() {
                galaxy.attract(other, &law);
            }

            galaxy.drift(dt);
            attractors[index] = galaxy.as_point_mass();
        }
    }

    /// All forces come from the positions held at the start of the tick
    fn integrate_simultaneous(&mut self) {
        let dt = self.time_step;
        let law = self.force_law;
        let attractors: Vec<PointMass> =
            self.galaxies.iter().map(Galaxy::as_point_mass).collect();

        for galaxy in &mut self.galaxies {
            galaxy.advance_stars(&attractors, &law, dt);
        }

        for index in 0..self.galaxies.len() {
            let (head, tail) = self.galaxies.split_at_mut(index + 1);
            for other in tail.iter_mut() {
                head[index].attract(other, &law);
            }
        }

        for galaxy in &mut self.galaxies {
            galaxy.drift(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SharedRng;

    fn small_physics() -> PhysicsConfig {
        PhysicsConfig {
            stars_per_galaxy: 50,
            ..PhysicsConfig::default()
        }
    }

    #[test]
    fn test_zero_galaxies_is_rejected() {
        let mut rng = SharedRng::from_seed(1);
        let result = Universe::new(0, &PhysicsConfig::default(), &mut *rng);
        assert_eq!(result, Err(SimulationError::InvalidGalaxyCount(0)));
    }

    #[test]
    fn test_invalid_physics_is_rejected() {
        let mut rng = SharedRng::from_seed(1);
        let physics = PhysicsConfig {
            time_step: 0.0,
            ..PhysicsConfig::default()
        };

        let result = Universe::new(3, &physics, &mut *rng);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter {
                name: "time_step",
                ..
            })
        ));
    }

    #[test]
    fn test_count_argument_overrides_config_count() {
        let mut rng = SharedRng::from_seed(3);
        let physics = PhysicsConfig {
            galaxy_count: 0,
            stars_per_galaxy: 5,
            ..PhysicsConfig::default()
        };

        let universe = Universe::new(5, &physics, &mut *rng).unwrap();
        assert_eq!(universe.galaxies().len(), 5);
        assert_eq!(universe.star_count(), 25);
    }

    #[test]
    fn test_universe_has_requested_galaxies() {
        let physics = small_physics();
        let mut rng = SharedRng::from_seed(2);

        for count in [1, 3, 12, 20] {
            let universe = Universe::new(count, &physics, &mut *rng).unwrap();
            assert_eq!(universe.galaxies().len(), count);
            assert_eq!(universe.star_count(), count * physics.stars_per_galaxy);
            assert!(
                universe
                    .galaxies()
                    .iter()
                    .all(|galaxy| galaxy.stars().len() == physics.stars_per_galaxy)
            );
        }
    }

    #[test]
    fn test_integrate_keeps_mass_and_star_count() {
        let physics = small_physics();
        let mut rng = SharedRng::from_seed(3);
        let mut universe = Universe::new(4, &physics, &mut *rng).unwrap();
        let masses: Vec<Scalar> = universe.galaxies().iter().map(Galaxy::mass).collect();

        for _ in 0..50 {
            universe.integrate();
        }

        let after: Vec<Scalar> = universe.galaxies().iter().map(Galaxy::mass).collect();
        assert_eq!(masses, after);
        assert_eq!(universe.star_count(), 4 * physics.stars_per_galaxy);
    }

    #[test]
    fn test_galaxy_momentum_is_conserved() {
        let physics = small_physics();
        let mut rng = SharedRng::from_seed(4);
        let mut universe = Universe::new(5, &physics, &mut *rng).unwrap();
        let initial = universe.galaxy_momentum();

        for _ in 0..100 {
            universe.integrate();
        }

        let drift = (universe.galaxy_momentum() - initial).length();
        assert!(drift < 1e-9, "Galaxy momentum drifted by {drift}");
    }

    #[test]
    fn test_single_galaxy_moves_in_straight_line() {
        let physics = small_physics();
        let mut rng = SharedRng::from_seed(5);
        let mut universe = Universe::new(1, &physics, &mut *rng).unwrap();
        let start = universe.galaxies()[0].position();
        let velocity = universe.galaxies()[0].velocity();

        for _ in 0..10 {
            universe.integrate();
        }

        let expected = start + velocity * physics.time_step * 10.0;
        assert!((universe.galaxies()[0].position() - expected).length() < 1e-12);
        assert_eq!(universe.galaxies()[0].velocity(), velocity);
    }

    #[test]
    fn test_sequential_star_sees_moved_earlier_galaxy() {
        let physics = PhysicsConfig {
            stars_per_galaxy: 1,
            ..PhysicsConfig::default()
        };
        let mut rng = SharedRng::from_seed(6);
        let universe = Universe::new(2, &physics, &mut *rng).unwrap();

        let mut sequential = universe.clone();
        sequential.step_ordering = StepOrdering::Sequential;
        let mut simultaneous = universe.clone();
        simultaneous.step_ordering = StepOrdering::Simultaneous;

        sequential.integrate();
        simultaneous.integrate();

        // The first galaxy's stars see identical attractors either way
        assert_eq!(
            sequential.galaxies()[0].stars(),
            simultaneous.galaxies()[0].stars()
        );
        // The second galaxy's stars were pulled from where the first galaxy moved to
        assert_ne!(
            sequential.galaxies()[1].stars(),
            simultaneous.galaxies()[1].stars()
        );
        // Galaxy centers follow the same update in both orderings
        for (a, b) in sequential.galaxies().iter().zip(simultaneous.galaxies()) {
            assert!((a.position() - b.position()).length() < 1e-15);
        }
    }

    #[test]
    fn test_stars_iterator_tags_owner() {
        let physics = small_physics();
        let mut rng = SharedRng::from_seed(7);
        let universe = Universe::new(3, &physics, &mut *rng).unwrap();

        let owners: Vec<usize> = universe.stars().map(|(index, _)| index).collect();
        assert_eq!(owners.len(), 3 * physics.stars_per_galaxy);
        assert!(owners.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(owners.first(), Some(&0));
        assert_eq!(owners.last(), Some(&2));
    }
}
