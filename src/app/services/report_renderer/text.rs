//! Human-readable briefing output
//!
//! One labeled block per report, followed by the raw forecast echo and the
//! trend block when present. Threshold markers are colored: green for OK,
//! red for a violated minimum.

use colored::Colorize;

use crate::app::models::{Briefing, DecodedMetar, MetarAnalysis, TrendSummary};
use crate::config::AnalysisConfig;

/// Render a briefing as display text
pub fn render_text(briefing: &Briefing, config: &AnalysisConfig) -> String {
    let mut out = String::new();

    for (index, analysis) in briefing.reports.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("=== METAR {} ===\n", index + 1));
        out.push_str(&analysis.raw);
        out.push('\n');
        if config.runway_heading_deg.is_none() {
            out.push_str("(Tip: add a runway heading to compute crosswind)\n");
        }
        write_report(&mut out, analysis, config);
    }

    if let Some(forecast) = &briefing.forecast {
        out.push_str("\n=== TAF (raw) ===\n");
        out.push_str(forecast);
        out.push('\n');
    }

    if let Some(trend) = &briefing.trend {
        write_trend(&mut out, trend);
    }

    out
}

fn write_report(out: &mut String, analysis: &MetarAnalysis, config: &AnalysisConfig) {
    let decoded = &analysis.decoded;

    let station = if decoded.station.is_empty() {
        "N/A"
    } else {
        decoded.station.as_str()
    };
    out.push_str(&format!("Station: {}", station));
    if let Some(timestamp) = &decoded.timestamp {
        out.push_str(&format!(" @ {}", timestamp));
    }
    out.push('\n');

    write_wind_line(out, analysis, config);
    write_visibility_line(out, analysis, config);
    write_ceiling_line(out, decoded, analysis, config);
    write_weather_line(out, decoded);
}

fn write_wind_line(out: &mut String, analysis: &MetarAnalysis, config: &AnalysisConfig) {
    out.push_str("- Wind: ");

    let Some(wind) = &analysis.decoded.wind else {
        out.push_str("N/A\n");
        return;
    };

    match wind.direction_deg {
        Some(direction) => out.push_str(&format!("{}@{}kt", direction, wind.speed_kt)),
        None => out.push_str(&format!("VRB {}kt", wind.speed_kt)),
    }
    if let Some(gust) = wind.gust_kt {
        out.push_str(&format!(" G{}", gust));
    }

    if wind.is_variable() {
        out.push_str(" (variable direction)\n");
        return;
    }

    let Some(components) = &analysis.components else {
        out.push_str(" | add a runway heading for crosswind calc\n");
        return;
    };

    let crosswind = components.crosswind_kt.abs();
    out.push_str(&format!(
        " | headwind {:.1} kt, crosswind {:.1} kt ",
        components.headwind_kt, crosswind
    ));

    let limit = config.minima.max_crosswind_kt;
    let marker = if analysis.assessment.crosswind.is_some() {
        format!("(EXCEEDS {} kt)", limit).red().to_string()
    } else {
        format!("(OK <= {} kt)", limit).green().to_string()
    };
    out.push_str(&marker);
    out.push('\n');
}

fn write_visibility_line(out: &mut String, analysis: &MetarAnalysis, config: &AnalysisConfig) {
    out.push_str("- Visibility: ");

    let Some(visibility) = analysis.decoded.visibility_sm else {
        out.push_str("N/A\n");
        return;
    };

    out.push_str(&format!("{:.1} SM ", visibility));

    let limit = config.minima.min_visibility_sm;
    let marker = if analysis.assessment.visibility.is_some() {
        format!("(BELOW {} SM)", limit).red().to_string()
    } else {
        format!("(OK >= {} SM)", limit).green().to_string()
    };
    out.push_str(&marker);
    out.push('\n');
}

fn write_ceiling_line(
    out: &mut String,
    decoded: &DecodedMetar,
    analysis: &MetarAnalysis,
    config: &AnalysisConfig,
) {
    out.push_str("- Ceiling: ");

    let Some(ceiling) = &decoded.ceiling else {
        out.push_str("No ceiling reported\n");
        return;
    };

    out.push_str(&format!("{} ft {} ", ceiling.height_ft, ceiling.layer));

    let limit = config.minima.min_ceiling_ft;
    let marker = if analysis.assessment.ceiling.is_some() {
        format!("(BELOW {} ft)", limit).red().to_string()
    } else {
        format!("(OK >= {} ft)", limit).green().to_string()
    };
    out.push_str(&marker);
    out.push('\n');
}

fn write_weather_line(out: &mut String, decoded: &DecodedMetar) {
    out.push_str("- Weather: ");
    if decoded.weather.is_empty() {
        out.push_str("None significant\n");
    } else {
        out.push_str(&decoded.weather.join(", "));
        out.push('\n');
    }
}

fn write_trend(out: &mut String, trend: &TrendSummary) {
    out.push_str("\n=== Trend (oldest -> latest) ===\n");

    if let Some(visibility) = &trend.visibility {
        out.push_str(&format!(
            "- Visibility: {} ({:.1} -> {:.1} SM)\n",
            visibility.state, visibility.from, visibility.to
        ));
    }

    if let Some(ceiling) = &trend.ceiling {
        out.push_str(&format!(
            "- Ceiling: {} ({:.0} -> {:.0} ft)\n",
            ceiling.state, ceiling.from, ceiling.to
        ));
    }

    if let Some(shift) = &trend.wind_direction {
        out.push_str(&format!(
            "- Wind: {} -> {} deg",
            shift.from_deg, shift.to_deg
        ));
        if shift.shift_deg() != 0 {
            out.push_str(&format!(" (shift {} deg)", shift.shift_deg()));
        }
        out.push('\n');
    }
}
