// Rendered document model - The JSON tree handed to the dashboard writer
use crate::domain::dashboard::TimeRange;
use serde::Serialize;
use serde_json::{Map, Value};

pub const SCHEMA_VERSION: u32 = 7;
pub const DOCUMENT_VERSION: u32 = 22;

/// One rendered dashboard, keyed by its registry name
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDashboard {
    pub name: String,
    pub folder: Option<String>,
    pub document: DashboardDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDocument {
    pub title: String,
    pub original_title: String,
    pub tags: Vec<String>,
    pub style: String,
    pub timezone: String,
    pub editable: bool,
    pub hide_controls: bool,
    pub shared_crosshair: bool,
    pub refresh: Value,
    pub rows: Vec<RowFragment>,
    pub links: Vec<LinkFragment>,
    pub time: TimeRange,
    pub timepicker: TimePicker,
    pub templating: ItemList<VariableFragment>,
    pub annotations: ItemList<Value>,
    pub schema_version: u32,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePicker {
    pub now: bool,
    pub refresh_intervals: Vec<String>,
    pub time_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemList<T> {
    pub list: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowFragment {
    pub collapse: bool,
    pub editable: bool,
    pub height: Value,
    pub title: String,
    pub show_title: bool,
    pub panels: Vec<PanelFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelFragment {
    pub id: u64,
    pub alias_colors: Map<String, Value>,
    pub bars: bool,
    pub datasource: Value,
    pub editable: bool,
    pub error: bool,
    pub fill: u32,
    pub left_y_axis_label: Value,
    pub lines: bool,
    pub line_width: u32,
    pub null_point_mode: String,
    pub percentage: bool,
    pub pointradius: u32,
    pub points: bool,
    pub renderer: String,
    pub right_y_axis_label: Value,
    pub series_overrides: Vec<Value>,
    pub span: u32,
    pub stack: bool,
    pub stepped_line: bool,
    pub time_from: Value,
    pub time_shift: Value,
    pub title: String,
    #[serde(rename = "type")]
    pub panel_type: String,
    pub links: Vec<Value>,
    pub tooltip: Tooltip,
    #[serde(rename = "y_formats")]
    pub y_formats: Vec<String>,
    pub legend: Legend,
    pub grid: Grid,
    pub targets: Vec<TargetFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub shared: bool,
    pub value_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub align_as_table: bool,
    pub avg: bool,
    pub current: bool,
    pub max: bool,
    pub min: bool,
    pub show: bool,
    pub total: bool,
    pub values: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left_log_base: Value,
    pub left_max: Value,
    pub left_min: Value,
    pub right_log_base: Value,
    pub right_max: Value,
    pub right_min: Value,
    pub threshold1: Value,
    pub threshold1_color: Value,
    pub threshold2: Value,
    pub threshold2_color: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetFragment {
    pub expr: String,
    pub interval_factor: u32,
    pub legend_format: String,
    pub ref_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableFragment {
    pub all_value: Value,
    pub current: Value,
    pub datasource: Value,
    pub hide: u8,
    pub include_all: bool,
    pub label: String,
    pub multi: bool,
    pub name: String,
    pub options: Vec<Value>,
    pub query: String,
    pub refresh: u8,
    pub regex: String,
    pub sort: u8,
    pub tag_values_query: String,
    pub tags: Vec<Value>,
    pub tags_query: String,
    #[serde(rename = "type")]
    pub variable_type: String,
    pub use_tags: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFragment {
    pub icon: String,
    pub tags: Vec<String>,
    pub target_blank: bool,
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: String,
    pub title: String,
}
