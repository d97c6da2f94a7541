mod classify;
pub mod domain;
mod generator;
mod monetary;
mod templates;

pub use classify::categorize;
pub use domain::{
    CategoryFlags, NewsCategory, NewsRecord, SearchTerm,
};
pub use generator::{NewsGenerator, MAX_ARTICLES_PER_TERM};
pub use monetary::extract_monetary_value;
pub use templates::{group_thousands, TemplateCatalog};
