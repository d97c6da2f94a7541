pub mod domain;
mod generator;
mod profile;

pub use domain::{CrimeCategory, IncidentRecord, FIRST_YEAR, LAST_YEAR};
pub use generator::{IncidentGenerator, JitterRange};
pub use profile::{AccelerationStep, IncidentProfile};
