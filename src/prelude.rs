//! Re-exports of the types most model code needs.

pub use crate::authority::{DepartmentOfHealth, HealthAuthority, NullHealthAuthority};
pub use crate::context::{Context, WorldBounds};
pub use crate::error::ContagionError;
pub use crate::health::HealthState;
pub use crate::params::{Parameters, SeedInfection};
pub use crate::pathogen::{ContextPathogenExt, Pathogen, PathogenKind};
pub use crate::person::{Person, Position};
pub use crate::report::{PrevalenceReport, PrevalenceRow};
pub use crate::simulation::{Simulation, StateCounts};
