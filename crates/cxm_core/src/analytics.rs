//! Dashboard analytics display data.
//!
//! # Responsibility
//! - Supply the KPI widget row and chart series the dashboard renders.
//!
//! # Invariants
//! - These datasets are externally supplied display figures; nothing here
//!   is computed from the record stores.

use serde::Serialize;

/// One KPI summary tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiWidget {
    pub title: String,
    /// Pre-formatted display value, e.g. `"$534,267"`.
    pub value: String,
    /// Period-over-period change in percent; negative means decline.
    pub change: f64,
}

/// One point of the monthly engagement trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementPoint {
    pub month: String,
    pub engagement: u32,
}

/// Conversion percentage for one sales channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelConversion {
    pub channel: String,
    pub conversion: u32,
}

fn widget(title: &str, value: &str, change: f64) -> KpiWidget {
    KpiWidget {
        title: title.to_string(),
        value: value.to_string(),
        change,
    }
}

/// The four headline KPI tiles.
pub fn kpi_widgets() -> Vec<KpiWidget> {
    vec![
        widget("Total Customers", "12,345", 8.2),
        widget("Sales Revenue", "$534,267", 12.5),
        widget("Engagement Rate", "64.8%", -2.4),
        widget("Conversion Rate", "28.6%", 5.3),
    ]
}

/// Six-month customer engagement series for the area chart.
pub fn engagement_trend() -> Vec<EngagementPoint> {
    [
        ("Jan", 4000),
        ("Feb", 3000),
        ("Mar", 5000),
        ("Apr", 2780),
        ("May", 6890),
        ("Jun", 4390),
    ]
    .into_iter()
    .map(|(month, engagement)| EngagementPoint {
        month: month.to_string(),
        engagement,
    })
    .collect()
}

/// Conversion-by-channel series for the bar chart.
pub fn conversion_by_channel() -> Vec<ChannelConversion> {
    [
        ("Mobile App", 65),
        ("Website", 45),
        ("Store", 78),
        ("Social", 34),
        ("Email", 52),
    ]
    .into_iter()
    .map(|(channel, conversion)| ChannelConversion {
        channel: channel.to_string(),
        conversion,
    })
    .collect()
}
