use super::views::YearlyTrend;
use crate::workflows::incidents::IncidentRecord;
use std::collections::BTreeMap;

pub fn yearly_trends(records: &[IncidentRecord]) -> Vec<YearlyTrend> {
    let mut totals: BTreeMap<i32, (u64, u64)> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.year).or_default();
        entry.0 += record.report_count;
        entry.1 += record.removed_count;
    }

    let mut trends: Vec<YearlyTrend> = Vec::with_capacity(totals.len());
    for (year, (report_count, removed_count)) in totals {
        let (report_change_pct, removed_change_pct) = match trends.last() {
            Some(previous) => (
                percent_change(previous.report_count, report_count),
                percent_change(previous.removed_count, removed_count),
            ),
            None => (None, None),
        };
        trends.push(YearlyTrend {
            year,
            report_count,
            removed_count,
            removal_rate: ratio(removed_count, report_count),
            report_change_pct,
            removed_change_pct,
        });
    }
    trends
}

/// Mean of the defined year-over-year report changes, in percent.
pub fn mean_annual_growth(trends: &[YearlyTrend]) -> Option<f64> {
    mean(trends.iter().filter_map(|trend| trend.report_change_pct))
}

/// Mean of the defined yearly removal rates.
pub fn mean_removal_rate(trends: &[YearlyTrend]) -> Option<f64> {
    mean(trends.iter().filter_map(|trend| trend.removal_rate))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

pub(crate) fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

pub(crate) fn percent_change(previous: u64, current: u64) -> Option<f64> {
    if previous == 0 {
        return None;
    }
    Some((current as f64 / previous as f64 - 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::incidents::CrimeCategory;
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
    fn sums_per_year_and_leaves_first_change_absent() {
        let records = vec![
            record(2007, CrimeCategory::Racism, 150, 60),
            record(2006, CrimeCategory::Racism, 60, 30),
            record(2006, CrimeCategory::Xenophobia, 40, 20),
            record(2007, CrimeCategory::Xenophobia, 50, 40),
        ];

        let trends = yearly_trends(&records);
        assert_eq!(trends.len(), 2);

        assert_eq!(trends[0].year, 2006);
        assert_eq!(trends[0].report_count, 100);
        assert_eq!(trends[0].removed_count, 50);
        assert_eq!(trends[0].removal_rate, Some(0.5));
        assert!(trends[0].report_change_pct.is_none());
        assert!(trends[0].removed_change_pct.is_none());

        assert_eq!(trends[1].report_count, 200);
        assert_eq!(trends[1].report_change_pct, Some(100.0));
        assert_eq!(trends[1].removed_change_pct, Some(100.0));
    }

    #[test]
    fn zero_denominators_are_undefined() {
        let records = vec![
            record(2006, CrimeCategory::Racism, 0, 0),
            record(2007, CrimeCategory::Racism, 10, 5),
        ];
        let trends = yearly_trends(&records);
        assert!(trends[0].removal_rate.is_none());
        assert!(trends[1].report_change_pct.is_none());
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(yearly_trends(&[]).is_empty());
        assert!(mean_annual_growth(&[]).is_none());
        assert!(mean_removal_rate(&[]).is_none());
    }

    #[test]
    fn means_skip_undefined_years() {
        let records = vec![
            record(2006, CrimeCategory::Racism, 0, 0),
            record(2007, CrimeCategory::Racism, 100, 50),
            record(2008, CrimeCategory::Racism, 150, 75),
            record(2009, CrimeCategory::Racism, 300, 75),
        ];
        let trends = yearly_trends(&records);

        assert_eq!(mean_annual_growth(&trends), Some(75.0));
        assert_eq!(mean_removal_rate(&trends), Some(1.25 / 3.0));

        let single = yearly_trends(&[record(2006, CrimeCategory::Racism, 10, 5)]);
        assert!(mean_annual_growth(&single).is_none());
        assert_eq!(mean_removal_rate(&single), Some(0.5));
    }
}
