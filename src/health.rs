//! The per-person health state machine.
//!
//! Every person is in exactly one of four states. The driver advances each
//! person through one day step and one night step per simulated day, and
//! calls [`Person::interact`] for each co-located pair it decides is in
//! contact:
//!
//! * `Healthy` people wander by day, go home at night, and can be infected
//!   through [`Person::expose`] unless they are immune to the kind.
//! * `Asymptomatic` people behave like healthy ones but already transmit;
//!   after the incubation period they become symptomatic.
//! * `Symptomatic` people suffer their pathogen's symptoms by day and fight
//!   it at night. Crossing the life-threatening threshold escalates them to
//!   the health authority; crossing the fatal threshold kills them. Clearing
//!   the pathogen recovers them with immunity to its kind.
//! * `Dead` is terminal. Dead people silently ignore further stepping.

use log::{debug, trace};

use crate::context::Context;
use crate::pathogen::Pathogen;
use crate::person::Person;

/// Number of night steps an infection incubates before symptoms show. The
/// counter starts at 0 and is checked before it is incremented, so the
/// symptomatic transition lands on the 3rd night step after infection.
pub const INCUBATION_NIGHTS: u32 = 2;

/// The four health states. Only the asymptomatic state carries data: the
/// incubation counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthState {
    Healthy,
    Asymptomatic { days_infected: u32 },
    Symptomatic,
    Dead,
}

impl HealthState {
    /// Whether a person in this state transmits their pathogen on contact.
    pub fn is_infectious(&self) -> bool {
        matches!(
            self,
            HealthState::Asymptomatic { .. } | HealthState::Symptomatic
        )
    }
}

impl Person {
    /// Advances this person through the day phase.
    pub fn day_step(&mut self, context: &mut Context) {
        match self.state {
            HealthState::Healthy | HealthState::Asymptomatic { .. } => {
                self.position = context.sample_position();
            }
            HealthState::Symptomatic => {
                self.progress_disease();
                if self.is_life_threatening() {
                    debug!("escalating a person in a life-threatening condition");
                    context.notify_authority(self);
                }
                // The fatal check runs strictly after the authority check, so
                // a person crossing both thresholds in one day is reported
                // and then dies in the same step.
                if self.is_fatal() {
                    debug!(
                        "person died (temperature {:.1}, hydration {:.1})",
                        self.temperature, self.hydration
                    );
                    self.state = HealthState::Dead;
                }
            }
            HealthState::Dead => {}
        }
    }

    /// Advances this person through the night phase.
    pub fn night_step(&mut self) {
        match &mut self.state {
            HealthState::Healthy => {
                self.position = self.home_position;
            }
            HealthState::Asymptomatic { days_infected } => {
                self.position = self.home_position;
                if *days_infected == INCUBATION_NIGHTS {
                    trace!("incubation over, person turns symptomatic");
                    self.state = HealthState::Symptomatic;
                } else {
                    *days_infected += 1;
                }
            }
            HealthState::Symptomatic => {
                self.fight_pathogen();
                if let Some(pathogen) = self.pathogen.take_if(|p| p.is_cleared()) {
                    trace!("person recovered from {}", pathogen.kind());
                    self.immunity.insert(pathogen.kind());
                    self.state = HealthState::Healthy;
                }
            }
            HealthState::Dead => {}
        }
    }

    /// One-directional contact: an infectious person passes a copy of their
    /// pathogen to `other`. Never mutates `self`. The driver decides which
    /// of a co-located pair initiates; for mutual exposure it must issue
    /// both directions.
    pub fn interact(&self, other: &mut Person) {
        if !self.state.is_infectious() {
            return;
        }
        if let Some(pathogen) = &self.pathogen {
            other.expose(pathogen.clone());
        }
    }

    /// Exposure to a pathogen. Only a healthy person who is not immune to
    /// the kind adopts it and starts incubating; everyone else is unchanged.
    /// This is the only entry point that can change a healthy person's
    /// state.
    pub fn expose(&mut self, pathogen: Pathogen) {
        if self.state != HealthState::Healthy {
            return;
        }
        if self.is_immune_to(pathogen.kind()) {
            trace!("exposure to {} blocked by immunity", pathogen.kind());
            return;
        }
        trace!("person infected with {}", pathogen.kind());
        self.pathogen = Some(pathogen);
        self.state = HealthState::Asymptomatic { days_infected: 0 };
    }
}
