mod categories;
mod insights;
mod news;
mod trends;
pub mod views;

pub use categories::{category_evolution, category_totals, top_categories};
pub use news::{analyze_news, category_counts, monetary_summary, term_distribution};
pub use trends::{mean_annual_growth, mean_removal_rate, yearly_trends};
pub use views::{
    AnalysisReport, CategoryEvolution, CategoryTotal, EvolutionRow, MonetarySummary,
    NewsAnalysis, NewsCategoryCount, TermCount, YearlyTrend,
};

use crate::workflows::incidents::IncidentRecord;
use crate::workflows::news::NewsRecord;
use tracing::{info, warn};

pub const DEFAULT_TOP_N: usize = 5;

/// Runs every aggregation whose source table is available.
#[derive(Debug, Clone)]
pub struct Analyzer {
    top_n: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl Analyzer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn analyze(
        &self,
        incidents: Option<&[IncidentRecord]>,
        news: Option<&[NewsRecord]>,
    ) -> AnalysisReport {
        let yearly_trends = match incidents {
            Some(records) => {
                let trends = yearly_trends(records);
                info!(years = trends.len(), "computed yearly trends");
                Some(trends)
            }
            None => {
                warn!("incident data unavailable; skipping temporal trends");
                None
            }
        };

        let (category_totals, category_evolution) = match incidents {
            Some(records) => {
                let totals = category_totals(records);
                let leaders = top_categories(&totals, self.top_n);
                let evolution = category_evolution(records, &leaders);
                info!(
                    categories = totals.len(),
                    tracked = leaders.len(),
                    "computed category totals"
                );
                (Some(totals), Some(evolution))
            }
            None => {
                warn!("incident data unavailable; skipping category analysis");
                (None, None)
            }
        };

        let news = match news {
            Some(records) => {
                let analysis = analyze_news(records);
                info!(
                    articles = analysis.article_count,
                    with_value = analysis.monetary.articles_with_value,
                    "computed news trends"
                );
                Some(analysis)
            }
            None => {
                warn!("news data unavailable; skipping news analysis");
                None
            }
        };

        let insights = insights::generate_insights(
            yearly_trends.as_deref(),
            category_totals.as_deref(),
            news.as_ref(),
        );

        AnalysisReport {
            yearly_trends,
            category_totals,
            category_evolution,
            news,
            insights,
        }
    }
}
