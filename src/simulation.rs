//! The turn-based driver: one day phase, one contact phase, one night phase
//! per simulated day, plus population generation and a state census.

use log::{info, trace};

use crate::context::{Context, WorldBounds};
use crate::health::HealthState;
use crate::params::Parameters;
use crate::pathogen::{ContextPathogenExt, PathogenKind};
use crate::person::Person;

const MIN_AGE: u32 = 1;
const MAX_AGE: u32 = 90;
const MIN_WEIGHT: i32 = 30;
const MAX_WEIGHT: i32 = 120;

/// Census of the population by health state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub healthy: usize,
    pub asymptomatic: usize,
    pub symptomatic: usize,
    pub dead: usize,
}

impl StateCounts {
    pub fn total(&self) -> usize {
        self.healthy + self.asymptomatic + self.symptomatic + self.dead
    }
}

/// Owns the population and the shared [`Context`] and advances both through
/// whole simulated days.
pub struct Simulation {
    context: Context,
    people: Vec<Person>,
    day: u32,
}

impl Simulation {
    pub fn new(bounds: WorldBounds, seed: u64) -> Simulation {
        let mut context = Context::new(bounds);
        context.init_random(seed);
        Simulation {
            context,
            people: Vec::new(),
            day: 0,
        }
    }

    /// Builds a populated, seeded simulation from run parameters.
    pub fn from_parameters(parameters: &Parameters) -> Simulation {
        let mut simulation = Simulation::new(parameters.world, parameters.seed);
        simulation.populate(parameters.population);
        for seed_infection in &parameters.initial_infections {
            simulation.seed_infections(seed_infection.kind, seed_infection.count);
        }
        simulation
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Completed days.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Adds a person and returns their index.
    pub fn add_person(&mut self, person: Person) -> usize {
        self.people.push(person);
        self.people.len() - 1
    }

    /// Generates `count` healthy people with random homes, ages and weights.
    pub fn populate(&mut self, count: usize) {
        trace!("populating with {} people", count);
        for _ in 0..count {
            let home = self.context.sample_position();
            let age = self.context.sample_range(MIN_AGE..=MAX_AGE);
            let weight = f64::from(self.context.sample_range(MIN_WEIGHT..=MAX_WEIGHT));
            self.add_person(Person::new(home).with_age(age).with_weight(weight));
        }
    }

    /// Exposes up to `count` randomly chosen healthy people to freshly
    /// generated pathogens of the given kind.
    pub fn seed_infections(&mut self, kind: PathogenKind, count: usize) {
        let mut healthy: Vec<usize> = (0..self.people.len())
            .filter(|&i| *self.people[i].state() == HealthState::Healthy)
            .collect();
        for _ in 0..count {
            if healthy.is_empty() {
                break;
            }
            let chosen = self.context.sample_range(0..healthy.len());
            let index = healthy.swap_remove(chosen);
            let pathogen = self.context.generate_pathogen(kind);
            self.people[index].expose(pathogen);
        }
    }

    /// Advances the whole population through one simulated day: the day
    /// phase, then the contact phase, then the night phase.
    ///
    /// The contact phase is a stable pass: the set of infectious initiators
    /// is snapshotted before any contact happens, and each of them interacts
    /// with every other co-located person in index order. A person infected
    /// during the pass is not in the snapshot, so there is no multi-hop
    /// transmission within a single day. Two infectious people co-located
    /// with each other both appear in the snapshot, so mutual exposure needs
    /// no special casing.
    pub fn step_day(&mut self) {
        self.day += 1;
        trace!("day {}: day phase", self.day);
        for person in &mut self.people {
            person.day_step(&mut self.context);
        }

        trace!("day {}: contact phase", self.day);
        let initiators: Vec<usize> = (0..self.people.len())
            .filter(|&i| self.people[i].state().is_infectious())
            .collect();
        for &i in &initiators {
            for j in 0..self.people.len() {
                if i == j || !self.people[i].is_co_located_with(&self.people[j]) {
                    continue;
                }
                let (initiator, target) = pair_mut(&mut self.people, i, j);
                initiator.interact(target);
            }
        }

        trace!("day {}: night phase", self.day);
        for person in &mut self.people {
            person.night_step();
        }
    }

    /// Runs `days` whole days, logging the census after each.
    pub fn run(&mut self, days: u32) {
        for _ in 0..days {
            self.step_day();
            let counts = self.state_counts();
            info!(
                "day {}: {} healthy, {} incubating, {} sick, {} dead",
                self.day, counts.healthy, counts.asymptomatic, counts.symptomatic, counts.dead
            );
        }
    }

    pub fn state_counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for person in &self.people {
            match person.state() {
                HealthState::Healthy => counts.healthy += 1,
                HealthState::Asymptomatic { .. } => counts.asymptomatic += 1,
                HealthState::Symptomatic => counts.symptomatic += 1,
                HealthState::Dead => counts.dead += 1,
            }
        }
        counts
    }
}

/// Disjoint borrows of an interacting pair: the initiator shared, the target
/// mutable.
fn pair_mut(people: &mut [Person], i: usize, j: usize) -> (&Person, &mut Person) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = people.split_at_mut(j);
        (&left[i], &mut right[0])
    } else {
        let (left, right) = people.split_at_mut(i);
        (&right[0], &mut left[j])
    }
}
