use super::domain::{CrimeCategory, FIRST_YEAR, LAST_YEAR};
use std::collections::HashMap;
use std::ops::RangeInclusive;

const DEFAULT_BASE_COUNT: u64 = 500;
const DEFAULT_REMOVAL_RATE: f64 = 0.69;
const ANNUAL_GROWTH: f64 = 1.15;

/// A multiplier applied on top of the compound growth for every year inside
/// `years`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccelerationStep {
    pub years: RangeInclusive<i32>,
    pub multiplier: f64,
}

impl AccelerationStep {
    fn applies_to(&self, year: i32) -> bool {
        self.years.contains(&year)
    }
}

/// Growth and takedown parameters for incident synthesis.
///
/// Categories missing from either table resolve to the shared default so a
/// partial profile never fails generation.
#[derive(Debug, Clone)]
pub struct IncidentProfile {
    pub reference_year: i32,
    pub years: RangeInclusive<i32>,
    pub annual_growth: f64,
    pub accelerations: Vec<AccelerationStep>,
    base_counts: HashMap<CrimeCategory, u64>,
    removal_rates: HashMap<CrimeCategory, f64>,
    default_base_count: u64,
    default_removal_rate: f64,
}

impl IncidentProfile {
    pub fn standard() -> Self {
        let mut base_counts = HashMap::new();
        let mut removal_rates = HashMap::new();
        for (category, base, rate) in standard_rows() {
            base_counts.insert(category, base);
            removal_rates.insert(category, rate);
        }

        Self {
            reference_year: FIRST_YEAR,
            years: FIRST_YEAR..=LAST_YEAR,
            annual_growth: ANNUAL_GROWTH,
            accelerations: standard_accelerations(),
            base_counts,
            removal_rates,
            default_base_count: DEFAULT_BASE_COUNT,
            default_removal_rate: DEFAULT_REMOVAL_RATE,
        }
    }

    /// A profile with empty lookup tables; every category uses the defaults.
    pub fn with_defaults(default_base_count: u64, default_removal_rate: f64) -> Self {
        Self {
            base_counts: HashMap::new(),
            removal_rates: HashMap::new(),
            default_base_count,
            default_removal_rate: default_removal_rate.clamp(0.0, 1.0),
            ..Self::standard()
        }
    }

    pub fn set_base_count(&mut self, category: CrimeCategory, base: u64) {
        self.base_counts.insert(category, base);
    }

    pub fn set_removal_rate(&mut self, category: CrimeCategory, rate: f64) {
        self.removal_rates.insert(category, rate.clamp(0.0, 1.0));
    }

    pub fn base_count(&self, category: CrimeCategory) -> u64 {
        self.base_counts
            .get(&category)
            .copied()
            .unwrap_or(self.default_base_count)
    }

    pub fn removal_rate(&self, category: CrimeCategory) -> f64 {
        self.removal_rates
            .get(&category)
            .copied()
            .unwrap_or(self.default_removal_rate)
    }

    pub fn growth_factor(&self, year: i32) -> f64 {
        let elapsed = (year - self.reference_year) as f64;
        let mut factor = self.annual_growth.powf(elapsed);
        for step in &self.accelerations {
            if step.applies_to(year) {
                factor *= step.multiplier;
            }
        }
        factor
    }

    /// Count before jitter, truncated toward zero.
    pub fn expected_count(&self, category: CrimeCategory, year: i32) -> u64 {
        let projected = self.base_count(category) as f64 * self.growth_factor(year);
        projected.max(0.0) as u64
    }

    pub fn removed_for(&self, category: CrimeCategory, report_count: u64) -> u64 {
        let removed = (report_count as f64 * self.removal_rate(category)).floor() as u64;
        removed.min(report_count)
    }
}

impl Default for IncidentProfile {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_accelerations() -> Vec<AccelerationStep> {
    vec![
        AccelerationStep {
            years: 2015..=i32::MAX,
            multiplier: 1.5,
        },
        AccelerationStep {
            years: 2020..=2022,
            multiplier: 1.3,
        },
    ]
}

fn standard_rows() -> [(CrimeCategory, u64, f64); 10] {
    [
        (CrimeCategory::ChildSexualAbuse, 5000, 0.60),
        (CrimeCategory::Racism, 3000, 0.73),
        (CrimeCategory::NeoNazism, 2000, 0.65),
        (CrimeCategory::LgbtPhobia, 1500, 0.68),
        (CrimeCategory::ReligiousIntolerance, 1200, 0.70),
        (CrimeCategory::AnimalCruelty, 800, 0.72),
        (CrimeCategory::IncitementToViolence, 600, 0.75),
        (CrimeCategory::HumanTrafficking, 400, 0.58),
        (CrimeCategory::ViolenceAgainstWomen, 300, 0.69),
        (CrimeCategory::Xenophobia, 200, 0.71),
    ]
}
