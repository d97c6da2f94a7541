mod collection;

pub use collection::{CollectionReport, IncidentOverview};
