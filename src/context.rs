use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::authority::{HealthAuthority, NullHealthAuthority};
use crate::person::{Person, Position};

/// Inclusive bounds of the world grid, anchored at the origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        WorldBounds {
            max_x: 100,
            max_y: 100,
        }
    }
}

impl WorldBounds {
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }
}

/// Shared resources the state machine consumes: the world bounds, a seedable
/// random number generator, and the health authority to escalate to. One
/// `Context` is threaded through every day step so that runs are
/// reproducible for a given seed.
pub struct Context {
    bounds: WorldBounds,
    rng: StdRng,
    authority: Box<dyn HealthAuthority>,
}

impl Context {
    /// Creates a context seeded with 0. Call [`Context::init_random`] to
    /// reseed.
    pub fn new(bounds: WorldBounds) -> Context {
        Context {
            bounds,
            rng: StdRng::seed_from_u64(0),
            authority: Box::new(NullHealthAuthority),
        }
    }

    /// Reseeds the random number generator. Two contexts seeded alike
    /// produce the same draw sequence.
    pub fn init_random(&mut self, base_seed: u64) {
        self.rng = StdRng::seed_from_u64(base_seed);
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Draws a sample from the given distribution.
    pub fn sample_distr<T>(&mut self, distribution: impl Distribution<T>) -> T {
        distribution.sample(&mut self.rng)
    }

    /// Draws a uniform sample from the given range.
    pub fn sample_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Draws a uniformly random in-bounds position.
    pub fn sample_position(&mut self) -> Position {
        let x = self.sample_range(0..=self.bounds.max_x);
        let y = self.sample_range(0..=self.bounds.max_y);
        Position::new(x, y)
    }

    /// Replaces the health authority that life-threatening conditions are
    /// reported to.
    pub fn set_health_authority(&mut self, authority: Box<dyn HealthAuthority>) {
        self.authority = authority;
    }

    /// Escalates a person in a life-threatening (but survivable) condition
    /// to the health authority.
    pub fn notify_authority(&mut self, person: &Person) {
        self.authority.notify(person);
    }
}
