//! An agent-based model of person-to-person pathogen transmission
//!
//! A population of people move around a 2D grid through a repeating
//! day/night cycle. People who end up in the same cell come into contact,
//! and an infected person passes their pathogen on. Carriers incubate the
//! infection without symptoms for a couple of days, then fall symptomatically
//! sick: the pathogen works on their physiology each day while their immune
//! system grinds its strength down each night, until they either recover
//! with immunity to that kind or cross a fatal physiological threshold and
//! die.
//!
//! The pieces fit together like this:
//! * The `pathogen` module defines the pathogen kinds, their physiological
//!   effects, and the stochastic catalog that generates fresh instances.
//! * The `person` module holds the agent data model: position, physiology,
//!   the current pathogen, and acquired immunity.
//! * The `health` module is the per-person state machine that drives all
//!   transitions between healthy, asymptomatic, symptomatic and dead.
//! * The `context` module carries the shared resources a step consumes: the
//!   world bounds, the seeded random number generator, and the health
//!   authority that life-threatening cases are escalated to.
//! * The `simulation` module is the turn-based driver that advances the
//!   whole population through day, contact and night phases.

pub mod authority;
pub mod context;
pub mod error;
pub mod health;
pub mod log;
pub mod params;
pub mod pathogen;
pub mod person;
pub mod prelude;
pub mod report;
pub mod simulation;

pub use crate::error::ContagionError;
pub use crate::log::{debug, error, info, trace, warn};
