//! Machine-readable briefing document
//!
//! Serializes a briefing into one JSON document per invocation. The alerts
//! map carries only the categories that actually triggered, and the trend
//! is a literal `null` when fewer than two reports were supplied; an
//! empty trend object would read as "no change observed", which is a
//! different statement.

use serde::Serialize;

use crate::Result;
use crate::app::models::{Briefing, MetarAnalysis, TrendState, TrendSummary};

/// Top-level briefing document
#[derive(Debug, Serialize)]
pub struct BriefingDocument {
    metars: Vec<ReportEntry>,
    trend: Option<TrendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    taf_raw: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReportEntry {
    raw: String,
    station: String,
    timestamp: Option<String>,
    wind: Option<WindEntry>,
    visibility_sm: Option<f64>,
    ceiling_ft: Option<u32>,
    ceiling_layer: Option<&'static str>,
    weather: Vec<String>,
    alerts: AlertEntry,
}

#[derive(Debug, Serialize)]
struct WindEntry {
    dir: Option<u16>,
    spd: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    gust: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headwind: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crosswind: Option<f64>,
}

/// Only triggered categories are serialized
#[derive(Debug, Serialize)]
struct AlertEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ceiling: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crosswind: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct TrendEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<FieldTrendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ceiling: Option<CeilingTrendEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wind_dir: Option<DirectionEntry>,
}

#[derive(Debug, Serialize)]
struct FieldTrendEntry {
    from: f64,
    to: f64,
    state: TrendState,
}

#[derive(Debug, Serialize)]
struct CeilingTrendEntry {
    from: u32,
    to: u32,
    state: TrendState,
}

/// Wind direction has no polarity, so the entry reports the raw shift
/// instead of a qualitative state
#[derive(Debug, Serialize)]
struct DirectionEntry {
    from: u16,
    to: u16,
    shift_deg: i32,
}

/// Render a briefing as a pretty-printed JSON document
pub fn render_json(briefing: &Briefing) -> Result<String> {
    let document = build_document(briefing);
    Ok(serde_json::to_string_pretty(&document)?)
}

fn build_document(briefing: &Briefing) -> BriefingDocument {
    BriefingDocument {
        metars: briefing.reports.iter().map(build_report_entry).collect(),
        trend: briefing.trend.as_ref().map(build_trend_entry),
        taf_raw: briefing.forecast.clone(),
    }
}

fn build_report_entry(analysis: &MetarAnalysis) -> ReportEntry {
    let decoded = &analysis.decoded;

    let wind = decoded.wind.as_ref().map(|wind| WindEntry {
        dir: wind.direction_deg,
        spd: wind.speed_kt,
        gust: wind.gust_kt,
        headwind: analysis
            .components
            .map(|components| round1(components.headwind_kt)),
        crosswind: analysis
            .components
            .map(|components| round1(components.crosswind_kt)),
    });

    let assessment = &analysis.assessment;
    let alerts = AlertEntry {
        visibility: assessment.visibility.map(|_| "below minima"),
        ceiling: assessment.ceiling.map(|_| "below minima"),
        crosswind: assessment.crosswind.map(|_| "exceeds minima"),
    };

    ReportEntry {
        raw: analysis.raw.clone(),
        station: decoded.station.clone(),
        timestamp: decoded.timestamp.clone(),
        wind,
        visibility_sm: decoded.visibility_sm.map(round1),
        ceiling_ft: decoded.ceiling.map(|ceiling| ceiling.height_ft),
        ceiling_layer: decoded.ceiling.map(|ceiling| ceiling.layer.code()),
        weather: decoded.weather.clone(),
        alerts,
    }
}

fn build_trend_entry(trend: &TrendSummary) -> TrendEntry {
    TrendEntry {
        visibility: trend.visibility.map(|field| FieldTrendEntry {
            from: round1(field.from),
            to: round1(field.to),
            state: field.state,
        }),
        ceiling: trend.ceiling.map(|field| CeilingTrendEntry {
            from: field.from as u32,
            to: field.to as u32,
            state: field.state,
        }),
        wind_dir: trend.wind_direction.map(|shift| DirectionEntry {
            from: shift.from_deg,
            to: shift.to_deg,
            shift_deg: shift.shift_deg(),
        }),
    }
}

/// Display rounding to one decimal place, applied at serialization only
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
