use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use impulse::config::{AnalysisConfig, SourceConfig};
use impulse::services::{analyze_with, project};
use impulse::sources::AlphaVantageClient;
use impulse::types::BarDirection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "impulse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "SPY".to_string());
    let source = SourceConfig::from_env().context("ALPHA_VANTAGE_API_KEY is not set")?;
    let config = AnalysisConfig::from_env();

    info!(%symbol, window = config.window, "fetching monthly history");
    let client = AlphaVantageClient::new(source.api_key);
    let observations = client.monthly_adjusted(&symbol).await?;

    let analysis = analyze_with(&observations, &config)?;
    let latest = &analysis.latest;

    println!("{} ({} months)", symbol, analysis.series.len());
    println!("  latest:       {} @ {:.2}", latest.label, latest.price);
    match latest.velocity {
        Some(v) => println!("  velocity:     {:+.2}%", v),
        None => println!("  velocity:     n/a"),
    }
    match latest.acceleration {
        Some(a) => println!(
            "  acceleration: {:+.2}pp ({})",
            a,
            match BarDirection::from_value(a) {
                BarDirection::Above => "above zero",
                BarDirection::Below => "below zero",
            }
        ),
        None => println!("  acceleration: n/a"),
    }
    println!("  signal:       {}", analysis.signal.label);

    let accelerations: Vec<f64> = analysis
        .series
        .iter()
        .filter_map(|m| m.acceleration)
        .collect();
    let projection = project(&accelerations, 600.0, 240.0, 20.0, true);
    println!(
        "  chart:        {} bars, domain [{:.2}, {:.2}]",
        projection.points.len(),
        projection.domain.min,
        projection.domain.max
    );

    Ok(())
}
