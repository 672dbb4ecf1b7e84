//! Chart adapters: price series → line chart dataset, 24h change → sparkline.
//!
//! Time-axis labels are synthesized backwards from the current hour, one per
//! sample: `label[i] = anchor - (N - i) hours`, where `anchor` is now with the
//! minutes zeroed. They are not derived from the sample timestamps, which the
//! API spaces by its own granularity; a 2-day window usually arrives hourly so
//! the two roughly line up, but nothing guarantees it.

use super::PriceHistorySeries;
use chrono::{DateTime, Local, TimeDelta, TimeZone, Timelike, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Weekday + hour + minute, e.g. `Tue 14:00`.
pub const LABEL_FORMAT: &str = "%a %H:%M";

// ─── Sparkline ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

const UP_SHAPE: [f64; 7] = [2400.0, 1398.0, 9800.0, 3908.0, 4800.0, 3800.0, 4300.0];
const DOWN_SHAPE: [f64; 7] = [4300.0, 3800.0, 4800.0, 3908.0, 9800.0, 1398.0, 2400.0];

impl Direction {
    /// Fixed decorative trend line; it does not encode real prices.
    pub fn shape(&self) -> &'static [f64] {
        match self {
            Self::Up => &UP_SHAPE,
            Self::Down => &DOWN_SHAPE,
        }
    }

    pub fn stroke(&self) -> &'static str {
        match self {
            Self::Up => "green",
            Self::Down => "red",
        }
    }
}

/// Inline up/down indicator for a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SparklineDirective {
    pub direction: Direction,
}

/// `Up` only for a strictly positive change; flat and negative are `Down`.
pub fn to_sparkline_directive(percent_change: f64) -> SparklineDirective {
    let direction = if percent_change > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    SparklineDirective { direction }
}

// ─── Line chart ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLabel {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// Chart-ready dataset; `labels` and `values` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<ChartLabel>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Chart dataset labelled against the local clock.
pub fn to_chart_series(series: &PriceHistorySeries) -> ChartSeries {
    to_chart_series_at(series, &Local::now())
}

/// Chart dataset labelled against an explicit `now`; labels are formatted in
/// `now`'s time zone.
pub fn to_chart_series_at<Tz>(series: &PriceHistorySeries, now: &DateTime<Tz>) -> ChartSeries
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let anchor = hour_anchor(now);
    let n = series.len();

    let labels = (0..n)
        .map(|i| {
            let at = anchor.clone() - TimeDelta::hours((n - i) as i64);
            ChartLabel {
                text: at.format(LABEL_FORMAT).to_string(),
                at: at.with_timezone(&Utc),
            }
        })
        .collect();
    let values = series.samples().iter().map(|s| s.price).collect();

    ChartSeries { labels, values }
}

fn hour_anchor<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    now.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or_else(|| now.clone())
}
