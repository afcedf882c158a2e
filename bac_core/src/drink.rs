//! Drink model.
//!
//! Every beverage knows its own volume and strength and reports how many
//! grams of pure ethanol it carries. `Person` only ever talks to the
//! [`Drink`] trait, so new beverage kinds can apply their own constants
//! without touching the aggregation logic.

use crate::constants::ETHANOL_DENSITY_G_PER_ML;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A consumed beverage
pub trait Drink: fmt::Debug + Send + Sync {
    fn volume_ml(&self) -> f64;

    fn alcohol_percent(&self) -> f64;

    /// Grams of pure ethanol in this drink
    ///
    /// Default: `volume_ml * percent / 100 * 0.789`.
    fn raw_alcohol_mass(&self) -> f64 {
        self.volume_ml() * self.alcohol_percent() / 100.0 * ETHANOL_DENSITY_G_PER_ML
    }
}

macro_rules! beverage {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            volume_ml: f64,
            alcohol_percent: f64,
        }

        impl $name {
            pub fn new(volume_ml: f64, alcohol_percent: f64) -> Self {
                Self {
                    volume_ml,
                    alcohol_percent,
                }
            }
        }

        impl Drink for $name {
            fn volume_ml(&self) -> f64 {
                self.volume_ml
            }

            fn alcohol_percent(&self) -> f64 {
                self.alcohol_percent
            }
        }
    };
}

beverage!(
    /// Beer, cider and other low-strength brews
    Beer
);
beverage!(
    /// Wine, including fortified wines
    Wine
);
beverage!(
    /// Distilled spirits and liqueurs
    Spirit
);

/// Beverage category as it appears in session files and on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkKind {
    Beer,
    Wine,
    Spirit,
}

impl FromStr for DrinkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beer" | "cider" => Ok(DrinkKind::Beer),
            "wine" => Ok(DrinkKind::Wine),
            "spirit" | "spirits" | "liquor" => Ok(DrinkKind::Spirit),
            other => Err(Error::Validation(format!("unknown drink kind: {}", other))),
        }
    }
}

/// Fully specified drink, as read from input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrinkSpec {
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub alcohol_percent: f64,
}

impl DrinkSpec {
    /// Check the volume and strength are physically meaningful
    pub fn validate(&self) -> Result<()> {
        validate_drink(self.volume_ml, self.alcohol_percent)
    }

    /// Build the concrete beverage for this spec
    pub fn into_drink(self) -> Box<dyn Drink> {
        match self.kind {
            DrinkKind::Beer => Box::new(Beer::new(self.volume_ml, self.alcohol_percent)),
            DrinkKind::Wine => Box::new(Wine::new(self.volume_ml, self.alcohol_percent)),
            DrinkKind::Spirit => Box::new(Spirit::new(self.volume_ml, self.alcohol_percent)),
        }
    }
}

/// Parses `kind:volume_ml:percent`, e.g. `beer:500:5`
impl FromStr for DrinkSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let [kind, volume, percent] = parts.as_slice() else {
            return Err(Error::Validation(format!(
                "expected kind:volume_ml:percent, got '{}'",
                s
            )));
        };

        let parse = |field: &str, raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|e| Error::Validation(format!("invalid {} '{}': {}", field, raw, e)))
        };

        let spec = DrinkSpec {
            kind: kind.parse()?,
            volume_ml: parse("volume", *volume)?,
            alcohol_percent: parse("alcohol percent", *percent)?,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Boundary check for drink inputs; the model itself never validates.
pub fn validate_drink(volume_ml: f64, alcohol_percent: f64) -> Result<()> {
    if !volume_ml.is_finite() || volume_ml < 0.0 {
        return Err(Error::Validation(format!(
            "volume must be a non-negative number of millilitres, got {}",
            volume_ml
        )));
    }
    if !(0.0..=100.0).contains(&alcohol_percent) {
        return Err(Error::Validation(format!(
            "alcohol percent must be within 0-100, got {}",
            alcohol_percent
        )));
    }
    Ok(())
}
