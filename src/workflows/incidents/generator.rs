use super::domain::{CrimeCategory, IncidentRecord};
use super::profile::IncidentProfile;
use chrono::NaiveDateTime;
use rand::Rng;
use tracing::debug;

/// Multiplicative noise applied to each projected count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterRange {
    pub min: f64,
    pub max: f64,
}

impl JitterRange {
    pub const STANDARD: Self = Self { min: 0.8, max: 1.2 };

    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl Default for JitterRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Default)]
pub struct IncidentGenerator {
    profile: IncidentProfile,
    jitter: JitterRange,
}

impl IncidentGenerator {
    pub fn new(profile: IncidentProfile) -> Self {
        Self {
            profile,
            jitter: JitterRange::STANDARD,
        }
    }

    pub fn with_jitter(mut self, jitter: JitterRange) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn profile(&self) -> &IncidentProfile {
        &self.profile
    }

    /// Builds the full year × category grid, years outermost.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        collected_at: NaiveDateTime,
    ) -> Vec<IncidentRecord> {
        let mut records = Vec::new();
        for year in self.profile.years.clone() {
            for category in CrimeCategory::ordered() {
                records.push(self.record_for(category, year, rng, collected_at));
            }
        }

        debug!(records = records.len(), "synthesized incident grid");
        records
    }

    pub fn record_for<R: Rng + ?Sized>(
        &self,
        category: CrimeCategory,
        year: i32,
        rng: &mut R,
        collected_at: NaiveDateTime,
    ) -> IncidentRecord {
        let expected = self.profile.expected_count(category, year);
        let jitter = self.jitter.sample(rng);
        let report_count = (expected as f64 * jitter).max(0.0) as u64;
        let removed_count = self.profile.removed_for(category, report_count);

        IncidentRecord {
            year,
            category,
            report_count,
            removed_count,
            collected_at,
        }
    }
}
