use chrono::{Duration, NaiveDate, NaiveDateTime};
use cyber_trends::workflows::incidents::{
    CrimeCategory, IncidentGenerator, IncidentProfile, JitterRange, FIRST_YEAR, LAST_YEAR,
};
use cyber_trends::workflows::news::{
    categorize, extract_monetary_value, NewsCategory, NewsGenerator, SearchTerm, TemplateCatalog,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn run_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 21)
        .expect("valid run date")
        .and_hms_opt(9, 30, 0)
        .expect("valid run time")
}

fn exact_generator() -> IncidentGenerator {
    IncidentGenerator::new(IncidentProfile::standard()).with_jitter(JitterRange::fixed(1.0))
}

#[test]
fn incident_grid_covers_every_year_and_category_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let records = IncidentGenerator::default().generate(&mut rng, run_timestamp());

    assert_eq!(records.len(), 19 * 10, "19 years by 10 categories");

    let keys: HashSet<(i32, CrimeCategory)> =
        records.iter().map(|r| (r.year, r.category)).collect();
    assert_eq!(keys.len(), records.len(), "no duplicate year/category pairs");

    for year in FIRST_YEAR..=LAST_YEAR {
        for category in CrimeCategory::ordered() {
            assert!(keys.contains(&(year, category)), "missing {year} {category}");
        }
    }

    assert!(records
        .iter()
        .all(|r| r.removed_count <= r.report_count && r.collected_at == run_timestamp()));
}

#[test]
fn racism_counts_follow_growth_accelerations() {
    let generator = exact_generator();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let at = run_timestamp();

    let base = generator.record_for(CrimeCategory::Racism, 2006, &mut rng, at);
    assert_eq!(base.report_count, 3000);
    assert_eq!(base.removed_count, 2190);

    let smartphone = generator.record_for(CrimeCategory::Racism, 2015, &mut rng, at);
    assert_eq!(
        smartphone.report_count,
        (3000.0 * (1.15f64.powf(9.0) * 1.5)) as u64
    );

    let pandemic = generator.record_for(CrimeCategory::Racism, 2020, &mut rng, at);
    assert_eq!(
        pandemic.report_count,
        (3000.0 * (1.15f64.powf(14.0) * 1.5 * 1.3)) as u64
    );

    let latest = generator.record_for(CrimeCategory::Racism, 2024, &mut rng, at);
    assert_eq!(
        latest.report_count,
        (3000.0 * (1.15f64.powf(18.0) * 1.5)) as u64
    );
}

#[test]
fn expected_counts_rise_inside_each_growth_segment() {
    let generator = exact_generator();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let records = generator.generate(&mut rng, run_timestamp());

    for category in CrimeCategory::ordered() {
        let series: Vec<(i32, u64)> = records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| (r.year, r.report_count))
            .collect();

        for pair in series.windows(2) {
            let ((prev_year, prev), (year, count)) = (pair[0], pair[1]);
            if year == 2023 {
                // the pandemic multiplier drops out here
                assert!(count < prev, "{category}: {prev_year}->{year}");
            } else {
                assert!(count > prev, "{category}: {prev_year}->{year}");
            }
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let at = run_timestamp();
    let incidents = IncidentGenerator::default();
    let news = NewsGenerator::default();

    let mut first_rng = ChaCha8Rng::seed_from_u64(99);
    let first = (
        incidents.generate(&mut first_rng, at),
        news.generate(&mut first_rng, at),
    );
    let mut second_rng = ChaCha8Rng::seed_from_u64(99);
    let second = (
        incidents.generate(&mut second_rng, at),
        news.generate(&mut second_rng, at),
    );

    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

#[test]
fn news_articles_respect_window_and_per_term_bounds() {
    let now = run_timestamp();
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let articles = NewsGenerator::default().generate(&mut rng, now);

    assert!((10..=30).contains(&articles.len()));

    for term in SearchTerm::ordered() {
        let per_term = articles.iter().filter(|a| a.search_term == term).count();
        assert!((1..=3).contains(&per_term), "{term} produced {per_term}");
    }

    let earliest = now.date() - Duration::days(730);
    let urls: HashSet<&str> = articles.iter().map(|a| a.url.as_str()).collect();
    assert_eq!(urls.len(), articles.len(), "urls are unique per run");

    for article in &articles {
        assert!(article.published_date >= earliest && article.published_date <= now.date());
        assert!(article.url.starts_with("https://g1.globo.com/fake-url-"));
        let id: u32 = article.url["https://g1.globo.com/fake-url-".len()..]
            .parse()
            .expect("numeric url suffix");
        assert!((1000..=9999).contains(&id));
        assert!(!article.summary.is_empty());
        assert_eq!(
            article.category_flags,
            categorize(&article.title, &article.summary)
        );
        assert_eq!(article.monetary_value, extract_monetary_value(&article.title));
        assert!(article.monetary_value >= 0.0);
    }
}

#[test]
fn terms_without_templates_fall_back_to_generic_headline() {
    let generator = NewsGenerator::new(TemplateCatalog::empty()).with_articles_per_term(1..=1);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let articles = generator.generate(&mut rng, run_timestamp());

    assert_eq!(articles.len(), 10);
    let ransomware = articles
        .iter()
        .find(|a| a.search_term == SearchTerm::Ransomware)
        .expect("ransomware article present");
    assert_eq!(ransomware.title, "Notícia sobre ransomware");
    assert_eq!(ransomware.monetary_value, 0.0);
}

#[test]
fn pix_headlines_are_flagged_as_scams() {
    let generator = NewsGenerator::default().with_articles_per_term(3..=3);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let articles = generator.generate(&mut rng, run_timestamp());

    let pix: Vec<_> = articles
        .iter()
        .filter(|a| a.search_term == SearchTerm::PixScam)
        .collect();
    assert_eq!(pix.len(), 3);
    assert!(pix
        .iter()
        .all(|a| a.category_flags.get(NewsCategory::Scam)));
}
