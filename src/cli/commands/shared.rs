//! Shared command plumbing
//!
//! Logging setup and the analyze-and-emit path common to every subcommand.

use tracing::debug;

use crate::Result;
use crate::app::services::{briefing, report_renderer};
use crate::cli::args::{AnalysisArgs, ReportFormat};

/// Set up structured logging for a command
///
/// Log output goes to stderr so a JSON briefing on stdout stays clean.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("metar_analyzer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Assemble a briefing from raw reports and print it in the chosen format
pub fn analyze_and_emit(raws: &[String], analysis: &AnalysisArgs) -> Result<()> {
    let config = analysis.to_config();
    let briefing = briefing::assemble(raws, analysis.taf.clone(), &config)?;

    match analysis.format {
        ReportFormat::Text => print!("{}", report_renderer::render_text(&briefing, &config)),
        ReportFormat::Json => println!("{}", report_renderer::render_json(&briefing)?),
    }

    Ok(())
}
