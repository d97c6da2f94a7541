use crate::workflows::analysis::{category_totals, monetary_summary, term_distribution};
use crate::workflows::format;
use crate::workflows::incidents::IncidentRecord;
use crate::workflows::news::NewsRecord;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use std::fmt::Write;

const TOP_CATEGORIES: usize = 5;

/// Headline numbers for the incident table.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentOverview {
    pub records: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub categories: usize,
    pub total_reports: u64,
    pub total_removed: u64,
    pub removal_rate: Option<f64>,
}

impl IncidentOverview {
    pub fn from_records(records: &[IncidentRecord]) -> Self {
        let categories: BTreeSet<_> = records.iter().map(|r| r.category).collect();
        let total_reports: u64 = records.iter().map(|r| r.report_count).sum();
        let total_removed: u64 = records.iter().map(|r| r.removed_count).sum();
        let removal_rate = if total_reports == 0 {
            None
        } else {
            Some(total_removed as f64 / total_reports as f64)
        };

        Self {
            records: records.len(),
            first_year: records.iter().map(|r| r.year).min(),
            last_year: records.iter().map(|r| r.year).max(),
            categories: categories.len(),
            total_reports,
            total_removed,
            removal_rate,
        }
    }

    pub fn period(&self) -> String {
        match (self.first_year, self.last_year) {
            (Some(first), Some(last)) => format!("{first}-{last}"),
            _ => "n/a".to_string(),
        }
    }
}

/// Markdown summary of one collection run. Sections for absent datasets are
/// omitted.
#[derive(Debug)]
pub struct CollectionReport<'a> {
    pub generated_at: NaiveDateTime,
    pub incidents: Option<&'a [IncidentRecord]>,
    pub news: Option<&'a [NewsRecord]>,
}

impl CollectionReport<'_> {
    pub fn total_records(&self) -> usize {
        self.incidents.map_or(0, <[_]>::len) + self.news.map_or(0, <[_]>::len)
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Data Collection Report\n\n");
        let _ = writeln!(
            out,
            "**Generated at:** {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        );

        if let Some(records) = self.incidents {
            write_incident_section(&mut out, records);
        }
        if let Some(records) = self.news {
            write_news_section(&mut out, records);
        }

        out.push_str("## Overall Summary\n\n");
        let _ = writeln!(
            out,
            "- **Total records collected:** {}",
            format::count(self.total_records() as u64)
        );
        let status = if self.total_records() > 0 {
            "collection completed"
        } else {
            "no data collected"
        };
        let _ = writeln!(out, "- **Status:** {status}");
        out
    }
}

fn write_incident_section(out: &mut String, records: &[IncidentRecord]) {
    let overview = IncidentOverview::from_records(records);
    out.push_str("## Incident Reports\n\n");
    let _ = writeln!(out, "- **Records:** {}", format::count(overview.records as u64));
    let _ = writeln!(out, "- **Period:** {}", overview.period());
    let _ = writeln!(out, "- **Categories:** {}", overview.categories);
    let _ = writeln!(
        out,
        "- **Total reports:** {}",
        format::count(overview.total_reports)
    );
    let _ = writeln!(
        out,
        "- **Removed URLs:** {}",
        format::count(overview.total_removed)
    );
    let _ = writeln!(
        out,
        "- **Removal rate:** {}\n",
        format::percent(overview.removal_rate)
    );

    out.push_str("### Top 5 Categories by Reports\n\n");
    for (index, total) in category_totals(records)
        .iter()
        .take(TOP_CATEGORIES)
        .enumerate()
    {
        let _ = writeln!(
            out,
            "{}. **{}:** {} reports",
            index + 1,
            total.category.label(),
            format::count(total.report_count)
        );
    }
    out.push('\n');
}

fn write_news_section(out: &mut String, records: &[NewsRecord]) {
    let distribution = term_distribution(records);
    let monetary = monetary_summary(records);
    let earliest = records.iter().map(|r| r.published_date).min();
    let latest = records.iter().map(|r| r.published_date).max();

    out.push_str("## News Coverage\n\n");
    let _ = writeln!(out, "- **Articles:** {}", records.len());
    let _ = writeln!(out, "- **Search terms:** {}", distribution.len());
    match (earliest, latest) {
        (Some(earliest), Some(latest)) => {
            let _ = writeln!(out, "- **Period:** {earliest} to {latest}");
        }
        _ => {
            let _ = writeln!(out, "- **Period:** n/a");
        }
    }
    let _ = writeln!(
        out,
        "- **Total value mentioned:** {}",
        format::brl(monetary.total_mentioned)
    );
    let mean = monetary
        .mean_per_article
        .map_or_else(|| "no data".to_string(), format::brl);
    let _ = writeln!(out, "- **Mean value per article with amount:** {mean}\n");

    out.push_str("### Distribution by Search Term\n\n");
    for entry in &distribution {
        let _ = writeln!(
            out,
            "- **{}:** {} articles",
            entry.search_term.label(),
            entry.count
        );
    }
    out.push('\n');
}
