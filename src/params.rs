use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::WorldBounds;
use crate::error::ContagionError;
use crate::pathogen::PathogenKind;

/// How many people start out infected with a given kind.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct SeedInfection {
    pub kind: PathogenKind,
    pub count: usize,
}

/// Run parameters. Every field has a default, so a JSON config file only
/// needs to name the values it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub population: usize,
    pub seed: u64,
    pub days: u32,
    pub world: WorldBounds,
    pub initial_infections: Vec<SeedInfection>,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            population: 100,
            seed: 123,
            days: 60,
            world: WorldBounds::default(),
            initial_infections: vec![SeedInfection {
                kind: PathogenKind::SeasonalFlu,
                count: 3,
            }],
        }
    }
}

impl Parameters {
    /// Loads parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `ContagionError` if the file cannot be read or does not
    /// parse, including when it names an unsupported pathogen kind.
    pub fn from_json_file(path: &Path) -> Result<Parameters, ContagionError> {
        let contents = fs::read_to_string(path)?;
        let parameters = serde_json::from_str(&contents)?;
        Ok(parameters)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_describe_a_runnable_model() {
        let parameters = Parameters::default();
        assert!(parameters.population > 0);
        assert!(parameters.days > 0);
        let seeded: usize = parameters
            .initial_infections
            .iter()
            .map(|seed_infection| seed_infection.count)
            .sum();
        assert!(seeded <= parameters.population);
    }

    #[test]
    fn loads_partial_overrides_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "population": 20,
                "initial_infections": [{{"kind": "cholera", "count": 2}}]
            }}"#
        )
        .unwrap();

        let parameters = Parameters::from_json_file(file.path()).unwrap();
        assert_eq!(parameters.population, 20);
        assert_eq!(parameters.initial_infections.len(), 1);
        assert_eq!(
            parameters.initial_infections[0].kind,
            PathogenKind::Cholera
        );
        // Unset fields keep their defaults.
        assert_eq!(parameters.seed, Parameters::default().seed);
    }

    #[test]
    fn unknown_kind_in_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"initial_infections": [{{"kind": "ebola", "count": 2}}]}}"#
        )
        .unwrap();

        let error = Parameters::from_json_file(file.path()).unwrap_err();
        assert!(matches!(error, ContagionError::JsonError(_)));
    }

    #[test]
    fn missing_file_fails_with_io_error() {
        let error =
            Parameters::from_json_file(Path::new("no-such-parameters.json")).unwrap_err();
        assert!(matches!(error, ContagionError::IoError(_)));
    }
}
