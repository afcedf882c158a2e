//! Person model and the Widmark BAC estimate.
//!
//! A [`Person`] owns its body measurements, the derived BMI and Widmark
//! factor, the drinking duration and the drinks consumed so far. All BAC
//! queries are pure reads over that snapshot.

use crate::constants::{widmark, GRAMS_PER_KILOGRAM, METABOLIC_RATE};
use crate::drink::Drink;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex, as far as the Widmark tables care
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl FromStr for Sex {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "m" | "male" => Sex::Male,
            "f" | "female" => Sex::Female,
            _ => Sex::Other,
        })
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(sex) => sex,
            Err(never) => match never {},
        }
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        };
        f.write_str(s)
    }
}

/// Body mass index from height (cm) and weight (kg)
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powi(2)
}

/// Widmark distribution factor for a BMI and sex
///
/// Step function, decreasing with BMI. Thresholds are strict: a BMI equal
/// to a band's upper bound belongs to the next band. Sexes outside the two
/// tables get [`widmark::UNKNOWN_FACTOR`].
pub fn compute_widmark_factor(bmi: f64, sex: Sex) -> f64 {
    let (bands, fallback) = match sex {
        Sex::Male => (widmark::MALE_BANDS, widmark::MALE_FALLBACK),
        Sex::Female => (widmark::FEMALE_BANDS, widmark::FEMALE_FALLBACK),
        Sex::Other => return widmark::UNKNOWN_FACTOR,
    };

    bands
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(fallback)
}

/// One person's evening of drinking
#[derive(Debug)]
pub struct Person {
    height_cm: f64,
    weight_kg: f64,
    duration_hours: f64,
    sex: Sex,
    bmi: f64,
    widmark_factor: f64,
    consumed_drinks: Vec<Box<dyn Drink>>,
}

impl Person {
    /// Create a person; BMI and Widmark factor are derived immediately.
    ///
    /// Inputs are taken as-is. Use [`Person::try_new`] at input boundaries.
    pub fn new(height_cm: f64, weight_kg: f64, duration_hours: f64, sex: Sex) -> Self {
        let mut person = Self {
            height_cm,
            weight_kg,
            duration_hours,
            sex,
            bmi: 0.0,
            widmark_factor: 0.0,
            consumed_drinks: Vec::new(),
        };
        person.recompute_derived();
        person
    }

    /// Validating constructor
    pub fn try_new(height_cm: f64, weight_kg: f64, duration_hours: f64, sex: Sex) -> Result<Self> {
        validate_body(height_cm, weight_kg)?;
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            return Err(Error::Validation(format!(
                "drinking duration must be zero or more hours, got {}",
                duration_hours
            )));
        }
        Ok(Self::new(height_cm, weight_kg, duration_hours, sex))
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn widmark_factor(&self) -> f64 {
        self.widmark_factor
    }

    pub fn consumed_drinks(&self) -> &[Box<dyn Drink>] {
        &self.consumed_drinks
    }

    pub fn drink_count(&self) -> usize {
        self.consumed_drinks.len()
    }

    /// Record a drink
    pub fn add_drink<D: Drink + 'static>(&mut self, drink: D) {
        self.add_boxed_drink(Box::new(drink));
    }

    pub fn add_boxed_drink(&mut self, drink: Box<dyn Drink>) {
        tracing::debug!(
            "Recorded drink #{}: {:?} ({:.2} g ethanol)",
            self.consumed_drinks.len() + 1,
            drink,
            drink.raw_alcohol_mass()
        );
        self.consumed_drinks.push(drink);
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
        self.recompute_derived();
    }

    pub fn set_height(&mut self, height_cm: f64) {
        self.height_cm = height_cm;
        self.recompute_derived();
    }

    // BMI first; the factor must never see a stale BMI.
    fn recompute_derived(&mut self) {
        self.bmi = compute_bmi(self.height_cm, self.weight_kg);
        self.widmark_factor = compute_widmark_factor(self.bmi, self.sex);
        tracing::trace!(
            "Derived BMI {:.2}, Widmark factor {:.2} for {}",
            self.bmi,
            self.widmark_factor,
            self.sex
        );
    }

    /// Grams of ethanol across all recorded drinks
    pub fn total_alcohol_mass(&self) -> f64 {
        self.consumed_drinks
            .iter()
            .map(|drink| drink.raw_alcohol_mass())
            .sum()
    }

    /// Estimated BAC in percent, never negative
    ///
    /// An undefined distribution (factor or weight of zero) is reported as
    /// `0.0`; see [`Person::checked_blood_alcohol_content`] to detect it.
    pub fn blood_alcohol_content(&self) -> f64 {
        match self.checked_blood_alcohol_content() {
            Ok(bac) => bac,
            Err(e) => {
                tracing::warn!("{}; reporting BAC as 0", e);
                0.0
            }
        }
    }

    /// Estimated BAC in percent, or an error when the Widmark denominator is
    /// not positive
    ///
    /// Alcohol mass is converted from grams to kilograms so it shares units
    /// with `weight_kg`; the result is then a percent (0.08 means 0.08%).
    pub fn checked_blood_alcohol_content(&self) -> Result<f64> {
        let distribution = self.widmark_factor * self.weight_kg;
        if !(distribution > 0.0) {
            return Err(Error::UndefinedDistribution {
                sex: self.sex,
                weight_kg: self.weight_kg,
            });
        }

        let alcohol_kg = self.total_alcohol_mass() / GRAMS_PER_KILOGRAM;
        let raw = (100.0 * alcohol_kg) / distribution - METABOLIC_RATE * self.duration_hours;
        Ok(raw.max(0.0))
    }

    /// Hours until BAC reaches zero
    pub fn time_to_sobriety_hours(&self) -> f64 {
        hours_to_sober(self.blood_alcohol_content())
    }

    /// Three-line human readable report
    pub fn summary(&self) -> String {
        let bac = self.blood_alcohol_content();
        format!(
            "--> You have had a total of {} drink(s) tonight\n\
             --> Your total BAC is {:.3}%\n\
             --> It will take you {:.2} hours to get sober",
            self.drink_count(),
            bac,
            hours_to_sober(bac)
        )
    }

    /// Machine readable snapshot of the estimate
    pub fn report(&self) -> BacReport {
        let bac = self.blood_alcohol_content();
        BacReport {
            drink_count: self.drink_count(),
            bmi: self.bmi,
            widmark_factor: self.widmark_factor,
            total_alcohol_grams: self.total_alcohol_mass(),
            blood_alcohol_content: bac,
            hours_to_sober: hours_to_sober(bac),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Serializable estimate, used for `--json` output
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BacReport {
    pub drink_count: usize,
    pub bmi: f64,
    pub widmark_factor: f64,
    pub total_alcohol_grams: f64,
    pub blood_alcohol_content: f64,
    pub hours_to_sober: f64,
}

fn hours_to_sober(bac: f64) -> f64 {
    (bac / METABOLIC_RATE).max(0.0)
}

fn validate_body(height_cm: f64, weight_kg: f64) -> Result<()> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(Error::Validation(format!(
            "height must be a positive number of centimetres, got {}",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::Validation(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }
    Ok(())
}
