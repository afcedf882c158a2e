//! Session files: one evening described in TOML or JSON.
//!
//! ```toml
//! height_cm = 180
//! weight_kg = 80
//! duration_hours = 2
//! sex = "male"
//!
//! [[drinks]]
//! kind = "beer"
//! volume_ml = 500
//! alcohol_percent = 5
//! ```
//!
//! Files are read-only input; nothing is written back.

use crate::drink::DrinkSpec;
use crate::person::{Person, Sex};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub height_cm: f64,
    pub weight_kg: f64,
    #[serde(default)]
    pub duration_hours: f64,
    pub sex: Sex,
    #[serde(default)]
    pub drinks: Vec<DrinkSpec>,
}

impl Session {
    /// Load a session, picking the format from the file extension
    ///
    /// `.json` is parsed as JSON; anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let session: Session = if is_json {
            serde_json::from_str(&contents)?
        } else {
            toml::from_str(&contents)?
        };
        tracing::info!(
            "Loaded session from {:?} ({} drinks)",
            path,
            session.drinks.len()
        );
        Ok(session)
    }

    /// Validate every field and build the person with all drinks recorded
    pub fn into_person(self) -> Result<Person> {
        let mut person =
            Person::try_new(self.height_cm, self.weight_kg, self.duration_hours, self.sex)?;

        for (index, spec) in self.drinks.into_iter().enumerate() {
            spec.validate()
                .map_err(|e| Error::Validation(format!("drink #{}: {}", index + 1, e)))?;
            person.add_boxed_drink(spec.into_drink());
        }
        Ok(person)
    }
}
