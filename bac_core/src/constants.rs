//! Fixed physiological constants for the Widmark estimate.
//!
//! None of these are configurable; they are part of the model.

/// Percent BAC eliminated by the liver per hour.
pub const METABOLIC_RATE: f64 = 0.015;

/// Density of ethanol at room temperature (g/mL).
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;

pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Widmark factor bands, keyed on BMI.
///
/// Each entry is `(upper_bmi, factor)`: the factor applies when
/// `bmi < upper_bmi`. A BMI equal to a threshold falls through to the next
/// band.
pub mod widmark {
    pub const MALE_BANDS: &[(f64, f64)] =
        &[(19.9, 0.80), (23.3, 0.75), (25.95, 0.72), (28.4, 0.69)];
    pub const MALE_FALLBACK: f64 = 0.66;

    pub const FEMALE_BANDS: &[(f64, f64)] =
        &[(17.85, 0.74), (21.45, 0.69), (24.05, 0.65), (26.3, 0.62)];
    pub const FEMALE_FALLBACK: f64 = 0.60;

    /// Factor for any sex outside the two tables
    pub const UNKNOWN_FACTOR: f64 = 0.0;
}
