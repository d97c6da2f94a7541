use crate::workflows::incidents::CrimeCategory;
use crate::workflows::news::{NewsCategory, SearchTerm};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTrend {
    pub year: i32,
    pub report_count: u64,
    pub removed_count: u64,
    /// `None` when the year has no reports.
    pub removal_rate: Option<f64>,
    /// Percent change against the previous year in the series. Absent for the
    /// first year and whenever the previous count is zero.
    pub report_change_pct: Option<f64>,
    pub removed_change_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: CrimeCategory,
    pub report_count: u64,
    pub removed_count: u64,
    pub removal_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionRow {
    pub year: i32,
    /// Aligned with [`CategoryEvolution::categories`].
    pub counts: Vec<u64>,
}

/// Year × category pivot of report counts for the leading categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEvolution {
    pub categories: Vec<CrimeCategory>,
    pub rows: Vec<EvolutionRow>,
}

impl CategoryEvolution {
    pub fn count(&self, year: i32, category: CrimeCategory) -> Option<u64> {
        let column = self.categories.iter().position(|c| *c == category)?;
        self.rows
            .iter()
            .find(|row| row.year == year)
            .and_then(|row| row.counts.get(column).copied())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub search_term: SearchTerm,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsCategoryCount {
    pub category: NewsCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonetarySummary {
    pub total_mentioned: f64,
    /// Mean over articles with a positive value; `None` when there are none.
    pub mean_per_article: Option<f64>,
    pub articles_with_value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsAnalysis {
    pub article_count: usize,
    pub term_distribution: Vec<TermCount>,
    pub category_counts: Vec<NewsCategoryCount>,
    pub monetary: MonetarySummary,
}

/// Everything the analysis stage derives. Sections whose source table was
/// missing stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub yearly_trends: Option<Vec<YearlyTrend>>,
    pub category_totals: Option<Vec<CategoryTotal>>,
    pub category_evolution: Option<CategoryEvolution>,
    pub news: Option<NewsAnalysis>,
    pub insights: Vec<String>,
}
