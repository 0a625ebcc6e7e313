use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::health::HealthState;
use crate::pathogen::{Pathogen, PathogenKind};

/// A cell on the 2D integer grid people move around on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// Body temperature everyone starts out with, in degrees Celsius.
pub const STARTING_TEMPERATURE: f64 = 36.6;
/// Starting hydration as a fraction of body weight.
pub const STARTING_HYDRATION_FRACTION: f64 = 0.6;

/// Above this temperature a person needs the attention of the health
/// authority.
pub const LIFE_THREATENING_TEMPERATURE: f64 = 40.0;
/// At or above this temperature a person dies.
pub const FATAL_TEMPERATURE: f64 = 44.0;
/// At or below this hydration-to-weight ratio a person needs the attention of
/// the health authority.
pub const LIFE_THREATENING_HYDRATION_FRACTION: f64 = 0.5;
/// At or below this hydration-to-weight ratio a person dies.
pub const FATAL_HYDRATION_FRACTION: f64 = 0.4;

/// How much pathogen strength one night of immune response removes, divided
/// by the person's age.
pub const IMMUNE_RESPONSE_STRENGTH: f64 = 3.0;

const DEFAULT_AGE: u32 = 30;
const DEFAULT_WEIGHT: f64 = 70.0;

/// One simulated person.
///
/// A person owns their position, physiology (temperature and hydration), at
/// most one current [`Pathogen`], the set of pathogen kinds they are immune
/// to, and their current [`HealthState`]. All state transitions go through
/// the state machine methods in the `health` module; nothing else reassigns
/// the state.
#[derive(Debug)]
pub struct Person {
    pub(crate) home_position: Position,
    pub(crate) position: Position,
    pub(crate) age: u32,
    pub(crate) weight: f64,
    pub(crate) temperature: f64,
    pub(crate) hydration: f64,
    pub(crate) pathogen: Option<Pathogen>,
    pub(crate) immunity: HashSet<PathogenKind>,
    pub(crate) state: HealthState,
}

impl Person {
    /// Creates a healthy person at home, with the default age and weight.
    pub fn new(home_position: Position) -> Person {
        Person {
            home_position,
            position: home_position,
            age: DEFAULT_AGE,
            weight: DEFAULT_WEIGHT,
            temperature: STARTING_TEMPERATURE,
            hydration: STARTING_HYDRATION_FRACTION * DEFAULT_WEIGHT,
            pathogen: None,
            immunity: HashSet::new(),
            state: HealthState::Healthy,
        }
    }

    #[must_use]
    pub fn with_age(mut self, age: u32) -> Person {
        self.age = age;
        self
    }

    /// Sets the weight and rebases hydration to the starting fraction of it.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Person {
        self.weight = weight;
        self.hydration = STARTING_HYDRATION_FRACTION * weight;
        self
    }

    /// Starts the person out infected, going through the regular exposure
    /// path. A person built with a kind already in their immunity set stays
    /// healthy.
    #[must_use]
    pub fn with_infection(mut self, pathogen: Pathogen) -> Person {
        self.expose(pathogen);
        self
    }

    pub fn home_position(&self) -> Position {
        self.home_position
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn hydration(&self) -> f64 {
        self.hydration
    }

    pub fn pathogen(&self) -> Option<&Pathogen> {
        self.pathogen.as_ref()
    }

    pub fn state(&self) -> &HealthState {
        &self.state
    }

    pub fn is_immune_to(&self, kind: PathogenKind) -> bool {
        self.immunity.contains(&kind)
    }

    /// Whether two people occupy the same grid cell right now. The driver
    /// uses this to decide which pairs get an `interact` call.
    pub fn is_co_located_with(&self, other: &Person) -> bool {
        self.position == other.position
    }

    /// Life-threatening but survivable: the person should be reported to the
    /// health authority.
    pub fn is_life_threatening(&self) -> bool {
        self.temperature >= LIFE_THREATENING_TEMPERATURE
            || self.hydration / self.weight <= LIFE_THREATENING_HYDRATION_FRACTION
    }

    /// Life-incompatible: the person dies on this day step.
    pub fn is_fatal(&self) -> bool {
        self.temperature >= FATAL_TEMPERATURE
            || self.hydration / self.weight <= FATAL_HYDRATION_FRACTION
    }

    /// One day's worth of symptoms from the current pathogen, if any.
    pub(crate) fn progress_disease(&mut self) {
        if let Some(kind) = self.pathogen.as_ref().map(Pathogen::kind) {
            kind.apply_symptoms(self);
        }
    }

    /// One night's worth of immune response against the current pathogen, if
    /// any. Ages are assumed positive; zero is clamped to one rather than
    /// dividing by it.
    pub(crate) fn fight_pathogen(&mut self) {
        let age = f64::from(self.age.max(1));
        if let Some(pathogen) = self.pathogen.as_mut() {
            pathogen.weaken(IMMUNE_RESPONSE_STRENGTH / age);
        }
    }
}
