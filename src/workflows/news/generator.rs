use super::classify::categorize;
use super::domain::{NewsRecord, SearchTerm};
use super::monetary::extract_monetary_value;
use super::templates::TemplateCatalog;
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

const LOOKBACK_DAYS: i64 = 730;
const URL_PREFIX: &str = "https://g1.globo.com/fake-url-";
const URL_IDS: RangeInclusive<u32> = 1000..=9999;
/// Largest per-term count that still leaves every article a distinct URL id.
pub const MAX_ARTICLES_PER_TERM: usize =
    (*URL_IDS.end() - *URL_IDS.start() + 1) as usize / SearchTerm::ordered().len();

#[derive(Debug, Clone)]
pub struct NewsGenerator {
    catalog: TemplateCatalog,
    articles_per_term: RangeInclusive<usize>,
}

impl Default for NewsGenerator {
    fn default() -> Self {
        Self::new(TemplateCatalog::standard())
    }
}

impl NewsGenerator {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self {
            catalog,
            articles_per_term: 1..=3,
        }
    }

    /// Both bounds are clamped to [`MAX_ARTICLES_PER_TERM`].
    pub fn with_articles_per_term(mut self, range: RangeInclusive<usize>) -> Self {
        let (start, end) = range.into_inner();
        if end > MAX_ARTICLES_PER_TERM {
            warn!(
                requested = end,
                max = MAX_ARTICLES_PER_TERM,
                "articles per term exceeds the url id space; clamping"
            );
        }
        self.articles_per_term =
            start.min(MAX_ARTICLES_PER_TERM)..=end.min(MAX_ARTICLES_PER_TERM);
        self
    }

    /// Synthesizes articles for every search term, grouped by term in
    /// declaration order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, now: NaiveDateTime) -> Vec<NewsRecord> {
        let mut used_ids = HashSet::new();
        let mut records = Vec::new();

        for term in SearchTerm::ordered() {
            let count = if self.articles_per_term.is_empty() {
                0
            } else {
                rng.gen_range(self.articles_per_term.clone())
            };
            for _ in 0..count {
                let url = unique_url(rng, &mut used_ids);
                records.push(self.article(term, url, rng, now));
            }
        }

        debug!(articles = records.len(), "synthesized news articles");
        records
    }

    fn article<R: Rng + ?Sized>(
        &self,
        term: SearchTerm,
        url: String,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> NewsRecord {
        let title = self.catalog.headline(term, rng);
        let window_start = now.date() - Duration::days(LOOKBACK_DAYS);
        let published_date = window_start + Duration::days(rng.gen_range(0..=LOOKBACK_DAYS));
        let summary = self.catalog.summary_for(term);
        let category_flags = categorize(&title, &summary);
        let monetary_value = extract_monetary_value(&title);

        NewsRecord {
            title,
            summary,
            published_date,
            search_term: term,
            url,
            monetary_value,
            category_flags,
        }
    }
}

// Terminates because callers never draw more ids than `URL_IDS` holds.
fn unique_url<R: Rng + ?Sized>(rng: &mut R, used: &mut HashSet<u32>) -> String {
    loop {
        let id = rng.gen_range(URL_IDS);
        if used.insert(id) {
            return format!("{URL_PREFIX}{id}");
        }
    }
}
