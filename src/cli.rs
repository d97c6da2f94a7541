use chrono::Local;
use clap::{Args, Parser, Subcommand};
use cyber_trends::config::{AppConfig, PipelineConfig};
use cyber_trends::error::AppError;
use cyber_trends::telemetry;
use cyber_trends::workflows::analysis::{
    mean_annual_growth, mean_removal_rate, AnalysisReport, Analyzer,
};
use cyber_trends::workflows::format;
use cyber_trends::workflows::incidents::IncidentGenerator;
use cyber_trends::workflows::news::NewsGenerator;
use cyber_trends::workflows::pipeline::{self, AnalysisOutcome, CollectionOutcome};
use cyber_trends::workflows::report::IncidentOverview;
use cyber_trends::workflows::storage::DataLayout;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "cyber-trends",
    about = "Synthesize cyber-crime incident data and derive trend reports from it",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate incident and news tables plus the collection report
    Collect(CollectArgs),
    /// Aggregate the raw tables into processed outputs and insights
    Analyze(AnalyzeArgs),
    /// Collect then analyze (default command)
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct DataDirArg {
    /// Override the configured output directory
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct CollectArgs {
    #[command(flatten)]
    data: DataDirArg,
    /// Seed the generator for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
struct AnalyzeArgs {
    #[command(flatten)]
    data: DataDirArg,
    /// Number of leading categories tracked in the evolution table
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    top_n: Option<u64>,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    data: DataDirArg,
    /// Seed the generator for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,
    /// Number of leading categories tracked in the evolution table
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    top_n: Option<u64>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Run(RunArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "cyber-trends starting");

    match command {
        Command::Collect(args) => {
            apply_overrides(&mut config.pipeline, args.data, args.seed, None);
            run_collect(&config.pipeline).map(|_| ())
        }
        Command::Analyze(args) => {
            apply_overrides(&mut config.pipeline, args.data, None, args.top_n);
            run_analyze(&config.pipeline).map(|_| ())
        }
        Command::Run(args) => {
            apply_overrides(&mut config.pipeline, args.data, args.seed, args.top_n);
            run_collect(&config.pipeline)?;
            run_analyze(&config.pipeline).map(|_| ())
        }
    }
}

fn apply_overrides(
    pipeline: &mut PipelineConfig,
    data: DataDirArg,
    seed: Option<u64>,
    top_n: Option<u64>,
) {
    if let Some(dir) = data.data_dir {
        pipeline.data_dir = dir;
    }
    if seed.is_some() {
        pipeline.seed = seed;
    }
    if let Some(top_n) = top_n {
        pipeline.top_n = usize::try_from(top_n).unwrap_or(usize::MAX);
    }
}

fn run_collect(config: &PipelineConfig) -> Result<CollectionOutcome, AppError> {
    let layout = DataLayout::new(&config.data_dir);
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let now = Local::now().naive_local();

    let outcome = pipeline::collect(
        &layout,
        &IncidentGenerator::default(),
        &NewsGenerator::default(),
        &mut rng,
        now,
    )?;
    render_collection(&outcome);
    Ok(outcome)
}

fn run_analyze(config: &PipelineConfig) -> Result<AnalysisOutcome, AppError> {
    let layout = DataLayout::new(&config.data_dir);
    let outcome = pipeline::analyze(&layout, &Analyzer::new(config.top_n))?;
    render_analysis(&outcome.report);

    println!("\nProcessed outputs");
    for path in &outcome.outputs.files {
        println!("- {}", path.display());
    }
    Ok(outcome)
}

fn render_collection(outcome: &CollectionOutcome) {
    let overview = IncidentOverview::from_records(&outcome.incidents);
    println!("Collection summary");
    println!(
        "- Incident records: {} ({} categories, {})",
        format::count(overview.records as u64),
        overview.categories,
        overview.period()
    );
    println!(
        "- Reports: {}, removed: {} ({})",
        format::count(overview.total_reports),
        format::count(overview.total_removed),
        format::percent(overview.removal_rate)
    );

    let total_value: f64 = outcome.news.iter().map(|n| n.monetary_value).sum();
    println!(
        "- News articles: {} (value mentioned {})",
        outcome.news.len(),
        format::brl(total_value)
    );
    println!("- Report: {}", outcome.report_path.display());
}

fn render_analysis(report: &AnalysisReport) {
    match &report.yearly_trends {
        Some(trends) => {
            println!("\nYearly trends");
            println!(
                "- Mean annual growth: {}",
                format::percent(mean_annual_growth(trends).map(|pct| pct / 100.0))
            );
            println!(
                "- Mean yearly removal rate: {}",
                format::percent(mean_removal_rate(trends))
            );
        }
        None => println!("\nYearly trends: no incident data"),
    }

    match &report.category_totals {
        Some(totals) => {
            println!("\nTop categories");
            for (index, total) in totals.iter().take(3).enumerate() {
                println!(
                    "{}. {}: {} reports",
                    index + 1,
                    total.category.label(),
                    format::count(total.report_count)
                );
            }
        }
        None => println!("\nTop categories: no incident data"),
    }

    match &report.news {
        Some(news) => {
            let mean = news
                .monetary
                .mean_per_article
                .map_or_else(|| "no data".to_string(), format::brl);
            println!(
                "\nNews: {} articles, {} with amounts, mean {}",
                news.article_count, news.monetary.articles_with_value, mean
            );
        }
        None => println!("\nNews: no news data"),
    }

    if report.insights.is_empty() {
        println!("\nInsights: none");
    } else {
        println!("\nInsights");
        for (index, insight) in report.insights.iter().enumerate() {
            println!("{}. {}", index + 1, insight);
        }
    }
}
