use super::views::{MonetarySummary, NewsAnalysis, NewsCategoryCount, TermCount};
use crate::workflows::news::{NewsCategory, NewsRecord, SearchTerm};
use std::collections::HashMap;

pub fn analyze_news(records: &[NewsRecord]) -> NewsAnalysis {
    NewsAnalysis {
        article_count: records.len(),
        term_distribution: term_distribution(records),
        category_counts: category_counts(records),
        monetary: monetary_summary(records),
    }
}

/// Article counts per search term, most frequent first, ties by term label.
pub fn term_distribution(records: &[NewsRecord]) -> Vec<TermCount> {
    let mut counts: HashMap<SearchTerm, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.search_term).or_default() += 1;
    }

    let mut distribution: Vec<TermCount> = counts
        .into_iter()
        .map(|(search_term, count)| TermCount { search_term, count })
        .collect();
    distribution.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.search_term.label().cmp(b.search_term.label()))
    });
    distribution
}

pub fn category_counts(records: &[NewsRecord]) -> Vec<NewsCategoryCount> {
    NewsCategory::ordered()
        .into_iter()
        .map(|category| NewsCategoryCount {
            category,
            count: records
                .iter()
                .filter(|record| record.category_flags.get(category))
                .count(),
        })
        .collect()
}

pub fn monetary_summary(records: &[NewsRecord]) -> MonetarySummary {
    let total_mentioned: f64 = records.iter().map(|r| r.monetary_value).sum();
    let positive: Vec<f64> = records
        .iter()
        .map(|r| r.monetary_value)
        .filter(|value| *value > 0.0)
        .collect();

    let mean_per_article = if positive.is_empty() {
        None
    } else {
        Some(positive.iter().sum::<f64>() / positive.len() as f64)
    };

    MonetarySummary {
        total_mentioned,
        mean_per_article,
        articles_with_value: positive.len(),
    }
}
