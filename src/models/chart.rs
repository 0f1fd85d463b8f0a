use serde::{Deserialize, Serialize};

/// Single-series bar chart payload (inpatient snapshot).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Time-series chart payload for the outpatient views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutpatientChart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One named series with chart.js-style color fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<i64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
}
