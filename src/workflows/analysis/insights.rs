use super::views::{CategoryTotal, NewsAnalysis, YearlyTrend};
use crate::workflows::format;

/// Headline findings in a fixed order: overall growth, peak annual growth,
/// leading category, best removal rate, then money mentioned in the news.
/// Sections whose inputs are missing or degenerate are left out.
pub(crate) fn generate_insights(
    trends: Option<&[YearlyTrend]>,
    totals: Option<&[CategoryTotal]>,
    news: Option<&NewsAnalysis>,
) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some(trends) = trends {
        if let (Some(first), Some(last)) = (trends.first(), trends.last()) {
            if first.report_count > 0 {
                let growth = (last.report_count as f64 / first.report_count as f64 - 1.0) * 100.0;
                insights.push(format!(
                    "Total report growth ({}-{}): {:.1}%",
                    first.year, last.year, growth
                ));
            }
        }

        if let Some((year, change)) = peak_growth(trends) {
            insights.push(format!("Largest annual growth: {change:.1}% in {year}"));
        }
    }

    if let Some(totals) = totals {
        if let Some(top) = totals.first() {
            insights.push(format!(
                "Most reported category: {} ({} reports)",
                top.category.label(),
                format::count(top.report_count)
            ));
        }

        if let Some(best) = best_removal(totals) {
            insights.push(format!(
                "Highest removal rate: {} ({})",
                best.category.label(),
                format::percent(best.removal_rate)
            ));
        }
    }

    if let Some(news) = news {
        if news.monetary.total_mentioned > 0.0 {
            insights.push(format!(
                "Losses mentioned in news coverage: {}",
                format::brl(news.monetary.total_mentioned)
            ));
        }
    }

    insights
}

fn peak_growth(trends: &[YearlyTrend]) -> Option<(i32, f64)> {
    let mut peak: Option<(i32, f64)> = None;
    for trend in trends {
        let Some(change) = trend.report_change_pct else {
            continue;
        };
        if peak.map_or(true, |(_, best)| change > best) {
            peak = Some((trend.year, change));
        }
    }
    peak
}

fn best_removal(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    let mut best: Option<&CategoryTotal> = None;
    for total in totals {
        let Some(rate) = total.removal_rate else {
            continue;
        };
        if best
            .and_then(|current| current.removal_rate)
            .map_or(true, |current| rate > current)
        {
            best = Some(total);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::analysis::views::MonetarySummary;
    use crate::workflows::incidents::CrimeCategory;

    fn trend(year: i32, reports: u64, change: Option<f64>) -> YearlyTrend {
        YearlyTrend {
            year,
            report_count: reports,
            removed_count: reports / 2,
            removal_rate: Some(0.5),
            report_change_pct: change,
            removed_change_pct: change,
        }
    }

    fn total(category: CrimeCategory, reports: u64, rate: Option<f64>) -> CategoryTotal {
        CategoryTotal {
            category,
            report_count: reports,
            removed_count: 0,
            removal_rate: rate,
        }
    }

    fn news(total_mentioned: f64) -> NewsAnalysis {
        NewsAnalysis {
            article_count: 1,
            term_distribution: Vec::new(),
            category_counts: Vec::new(),
            monetary: MonetarySummary {
                total_mentioned,
                mean_per_article: None,
                articles_with_value: 0,
            },
        }
    }

    #[test]
    fn produces_findings_in_order() {
        let trends = vec![
            trend(2006, 100, None),
            trend(2007, 150, Some(50.0)),
            trend(2008, 300, Some(100.0)),
        ];
        let totals = vec![
            total(CrimeCategory::ChildSexualAbuse, 5000, Some(0.6)),
            total(CrimeCategory::Racism, 3000, Some(0.73)),
        ];

        let insights = generate_insights(
            Some(trends.as_slice()),
            Some(totals.as_slice()),
            Some(&news(2_000_000.0)),
        );
        assert_eq!(
            insights,
            vec![
                "Total report growth (2006-2008): 200.0%".to_string(),
                "Largest annual growth: 100.0% in 2008".to_string(),
                "Most reported category: Pornografia Infantil (5,000 reports)".to_string(),
                "Highest removal rate: Racismo (73.0%)".to_string(),
                "Losses mentioned in news coverage: R$ 2,000,000.00".to_string(),
            ]
        );
    }

    #[test]
    fn ties_keep_the_first_occurrence() {
        let trends = vec![
            trend(2006, 100, None),
            trend(2007, 200, Some(100.0)),
            trend(2008, 400, Some(100.0)),
        ];
        assert_eq!(peak_growth(&trends), Some((2007, 100.0)));

        let totals = vec![
            total(CrimeCategory::NeoNazism, 10, Some(0.7)),
            total(CrimeCategory::Racism, 5, Some(0.7)),
        ];
        assert_eq!(
            best_removal(&totals).map(|t| t.category),
            Some(CrimeCategory::NeoNazism)
        );
    }

    #[test]
    fn missing_inputs_and_zero_money_are_skipped() {
        assert!(generate_insights(None, None, None).is_empty());
        assert!(generate_insights(None, None, Some(&news(0.0))).is_empty());
    }

    #[test]
    fn undefined_rates_never_win() {
        let totals = vec![
            total(CrimeCategory::NeoNazism, 0, None),
            total(CrimeCategory::Racism, 5, Some(0.2)),
        ];
        assert_eq!(
            best_removal(&totals).map(|t| t.category),
            Some(CrimeCategory::Racism)
        );
    }
}
