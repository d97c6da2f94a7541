use super::trends::ratio;
use super::views::{CategoryEvolution, CategoryTotal, EvolutionRow};
use crate::workflows::incidents::{CrimeCategory, IncidentRecord};
use std::collections::{BTreeSet, HashMap};

/// Per-category sums, largest report volume first. Equal volumes are ordered
/// by category label.
pub fn category_totals(records: &[IncidentRecord]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<CrimeCategory, (u64, u64)> = HashMap::new();
    for record in records {
        let entry = sums.entry(record.category).or_default();
        entry.0 += record.report_count;
        entry.1 += record.removed_count;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, (report_count, removed_count))| CategoryTotal {
            category,
            report_count,
            removed_count,
            removal_rate: ratio(removed_count, report_count),
        })
        .collect();

    totals.sort_by(|a, b| {
        b.report_count
            .cmp(&a.report_count)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });
    totals
}

pub fn top_categories(totals: &[CategoryTotal], limit: usize) -> Vec<CrimeCategory> {
    totals.iter().take(limit).map(|total| total.category).collect()
}

/// Pivots report counts for `categories` into one row per year. A missing
/// (year, category) pair counts as zero.
pub fn category_evolution(
    records: &[IncidentRecord],
    categories: &[CrimeCategory],
) -> CategoryEvolution {
    let mut cells: HashMap<(i32, CrimeCategory), u64> = HashMap::new();
    let mut years = BTreeSet::new();

    for record in records.iter().filter(|r| categories.contains(&r.category)) {
        years.insert(record.year);
        *cells.entry((record.year, record.category)).or_default() += record.report_count;
    }

    let rows = years
        .into_iter()
        .map(|year| EvolutionRow {
            year,
            counts: categories
                .iter()
                .map(|category| cells.get(&(year, *category)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    CategoryEvolution {
        categories: categories.to_vec(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, category: CrimeCategory, reports: u64, removed: u64) -> IncidentRecord {
        IncidentRecord {
            year,
            category,
            report_count: reports,
            removed_count: removed,
            collected_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .expect("valid date")
                .and_hms_opt(0, 0, 0)
                .expect("valid time"),
        }
    }

    #[test]
    fn totals_sort_descending_with_label_tiebreak() {
        let records = vec![
            record(2006, CrimeCategory::Xenophobia, 100, 50),
            record(2006, CrimeCategory::Racism, 100, 80),
            record(2006, CrimeCategory::NeoNazism, 300, 100),
        ];

        let totals = category_totals(&records);
        let order: Vec<CrimeCategory> = totals.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![
                CrimeCategory::NeoNazism,
                CrimeCategory::Racism,
                CrimeCategory::Xenophobia
            ]
        );
        assert_eq!(totals[1].removal_rate, Some(0.8));
    }

    #[test]
    fn top_categories_caps_at_available_count() {
        let records = vec![
            record(2006, CrimeCategory::Racism, 10, 1),
            record(2006, CrimeCategory::LgbtPhobia, 20, 1),
        ];
        let totals = category_totals(&records);
        assert_eq!(
            top_categories(&totals, 5),
            vec![CrimeCategory::LgbtPhobia, CrimeCategory::Racism]
        );
        assert_eq!(top_categories(&totals, 1), vec![CrimeCategory::LgbtPhobia]);
    }

    #[test]
    fn evolution_fills_gaps_with_zero() {
        let records = vec![
            record(2006, CrimeCategory::Racism, 10, 1),
            record(2007, CrimeCategory::Racism, 12, 1),
            record(2007, CrimeCategory::Xenophobia, 4, 1),
            record(2007, CrimeCategory::NeoNazism, 99, 1),
        ];
        let evolution = category_evolution(
            &records,
            &[CrimeCategory::Racism, CrimeCategory::Xenophobia],
        );

        assert_eq!(evolution.rows.len(), 2);
        assert_eq!(evolution.count(2006, CrimeCategory::Xenophobia), Some(0));
        assert_eq!(evolution.count(2007, CrimeCategory::Racism), Some(12));
        assert_eq!(evolution.count(2007, CrimeCategory::NeoNazism), None);
    }
}
