use std::fmt;
use std::str::FromStr;

use rand_distr::Exp;
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::ContagionError;
use crate::person::Person;

const SEASONAL_FLU_TEMPERATURE_RISE: f64 = 0.25;
const SARS_COV_2_TEMPERATURE_RISE: f64 = 0.5;
const CHOLERA_HYDRATION_LOSS: f64 = 1.0;

/// The closed set of pathogens the model knows how to simulate. The kind
/// determines both the physiological symptoms and the parameter
/// distributions a generated instance is drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathogenKind {
    SeasonalFlu,
    #[serde(rename = "sars_cov_2")]
    SarsCoV2,
    Cholera,
}

/// Per-kind rate parameters of the exponential distributions that initial
/// strength and contagiousness are drawn from. Lower rates mean larger, more
/// variable draws.
struct KindProfile {
    strength_rate: f64,
    contagiousness_rate: f64,
}

impl PathogenKind {
    pub const ALL: [PathogenKind; 3] = [
        PathogenKind::SeasonalFlu,
        PathogenKind::SarsCoV2,
        PathogenKind::Cholera,
    ];

    fn profile(self) -> KindProfile {
        match self {
            PathogenKind::SeasonalFlu => KindProfile {
                strength_rate: 10.0,
                contagiousness_rate: 10.0,
            },
            PathogenKind::SarsCoV2 => KindProfile {
                strength_rate: 2.0,
                contagiousness_rate: 2.0,
            },
            PathogenKind::Cholera => KindProfile {
                strength_rate: 2.0,
                contagiousness_rate: 2.0,
            },
        }
    }

    /// Applies one day's worth of symptoms to the host. Each kind mutates
    /// exactly one physiological field.
    pub fn apply_symptoms(self, host: &mut Person) {
        match self {
            PathogenKind::SeasonalFlu => host.temperature += SEASONAL_FLU_TEMPERATURE_RISE,
            PathogenKind::SarsCoV2 => host.temperature += SARS_COV_2_TEMPERATURE_RISE,
            PathogenKind::Cholera => host.hydration -= CHOLERA_HYDRATION_LOSS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PathogenKind::SeasonalFlu => "seasonal_flu",
            PathogenKind::SarsCoV2 => "sars_cov_2",
            PathogenKind::Cholera => "cholera",
        }
    }
}

impl fmt::Display for PathogenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PathogenKind {
    type Err = ContagionError;

    fn from_str(s: &str) -> Result<PathogenKind, ContagionError> {
        match s {
            "seasonal_flu" => Ok(PathogenKind::SeasonalFlu),
            "sars_cov_2" => Ok(PathogenKind::SarsCoV2),
            "cholera" => Ok(PathogenKind::Cholera),
            _ => Err(ContagionError::UnsupportedKind(s.to_string())),
        }
    }
}

/// A single pathogen instance, owned by the one person currently carrying
/// it. `strength` is the remaining virulence; the host's immune response
/// drives it down each night and at zero or below the infection is cleared.
/// `contagiousness` is carried on the instance but does not currently factor
/// into transmission.
#[derive(Clone, Debug)]
pub struct Pathogen {
    kind: PathogenKind,
    strength: f64,
    contagiousness: f64,
}

impl Pathogen {
    /// Creates a pathogen with fixed parameters, for deterministic
    /// scenarios. Randomized instances come from
    /// [`ContextPathogenExt::generate_pathogen`].
    pub fn new(kind: PathogenKind, strength: f64, contagiousness: f64) -> Pathogen {
        Pathogen {
            kind,
            strength,
            contagiousness,
        }
    }

    pub fn kind(&self) -> PathogenKind {
        self.kind
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn contagiousness(&self) -> f64 {
        self.contagiousness
    }

    pub fn is_cleared(&self) -> bool {
        self.strength <= 0.0
    }

    pub(crate) fn weaken(&mut self, amount: f64) {
        self.strength -= amount;
    }
}

/// Stochastic pathogen factory, in the style of a context extension trait.
pub trait ContextPathogenExt {
    /// Generates a fresh pathogen of the requested kind, drawing strength
    /// and contagiousness from the kind's exponential distributions with the
    /// context rng.
    fn generate_pathogen(&mut self, kind: PathogenKind) -> Pathogen;
}

impl ContextPathogenExt for Context {
    fn generate_pathogen(&mut self, kind: PathogenKind) -> Pathogen {
        let profile = kind.profile();
        let strength = self.sample_distr(Exp::new(profile.strength_rate).unwrap());
        let contagiousness = self.sample_distr(Exp::new(profile.contagiousness_rate).unwrap());
        Pathogen::new(kind, strength, contagiousness)
    }
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::context::{Context, WorldBounds};
    use crate::person::{Person, Position, STARTING_TEMPERATURE};

    #[test]
    fn seasonal_flu_raises_temperature() {
        let mut person = Person::new(Position::new(0, 0));
        PathogenKind::SeasonalFlu.apply_symptoms(&mut person);
        assert_approx_eq!(person.temperature(), STARTING_TEMPERATURE + 0.25);
        assert_approx_eq!(person.hydration(), 0.6 * person.weight());
    }

    #[test]
    fn sars_cov_2_raises_temperature() {
        let mut person = Person::new(Position::new(0, 0));
        PathogenKind::SarsCoV2.apply_symptoms(&mut person);
        assert_approx_eq!(person.temperature(), STARTING_TEMPERATURE + 0.5);
        assert_approx_eq!(person.hydration(), 0.6 * person.weight());
    }

    #[test]
    fn cholera_lowers_hydration() {
        let mut person = Person::new(Position::new(0, 0));
        PathogenKind::Cholera.apply_symptoms(&mut person);
        assert_approx_eq!(person.hydration(), 0.6 * person.weight() - 1.0);
        assert_approx_eq!(person.temperature(), STARTING_TEMPERATURE);
    }

    #[test]
    fn kind_parses_from_name() {
        for kind in PathogenKind::ALL {
            assert_eq!(kind.name().parse::<PathogenKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let error = "ebola".parse::<PathogenKind>().unwrap_err();
        assert!(matches!(error, ContagionError::UnsupportedKind(name) if name == "ebola"));
    }

    #[test]
    fn kind_serde_names_match_display() {
        for kind in PathogenKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
            let parsed: PathogenKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn generated_pathogens_start_potent() {
        let mut context = Context::new(WorldBounds::default());
        context.init_random(42);
        for kind in PathogenKind::ALL {
            let pathogen = context.generate_pathogen(kind);
            assert_eq!(pathogen.kind(), kind);
            assert!(pathogen.strength() > 0.0);
            assert!(pathogen.contagiousness() > 0.0);
            assert!(!pathogen.is_cleared());
        }
    }

    #[test]
    fn generation_is_reproducible_per_seed() {
        let mut a = Context::new(WorldBounds::default());
        let mut b = Context::new(WorldBounds::default());
        a.init_random(88);
        b.init_random(88);

        let from_a = a.generate_pathogen(PathogenKind::Cholera);
        let from_b = b.generate_pathogen(PathogenKind::Cholera);
        assert_approx_eq!(from_a.strength(), from_b.strength());
        assert_approx_eq!(from_a.contagiousness(), from_b.contagiousness());
    }

    #[test]
    fn weaken_clears_at_zero() {
        let mut pathogen = Pathogen::new(PathogenKind::Cholera, 0.1, 1.0);
        assert!(!pathogen.is_cleared());
        pathogen.weaken(0.1);
        assert!(pathogen.is_cleared());
    }
}
