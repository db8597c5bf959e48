// Row template - One untitled row wrapping a single graph panel
use crate::domain::template::{template_record, TemplateKind};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One query inside a row. Legend format and interval factor fall back to
/// the row's values when unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetTemplate {
    pub expression: String,
    #[serde(default)]
    pub legend_format: Option<String>,
    #[serde(default, rename = "intervalFactor")]
    pub interval_factor: Option<u32>,
}

template_record! {
    pub struct Row(TemplateKind::Row) {
        pub collapse: bool,
        pub editable: bool,
        pub height: Value,

        #[serde(rename = "aliasColors")]
        pub alias_colors: Map<String, Value>,
        pub bars: bool,
        pub datasource: Value,
        pub error: bool,
        pub fill: u32,
        #[serde(rename = "leftYAxisLabel")]
        pub left_y_axis_label: Value,
        pub lines: bool,
        #[serde(rename = "lineWidth")]
        pub line_width: u32,
        #[serde(rename = "nullPointMode")]
        pub null_point_mode: String,
        pub percentage: bool,
        pub pointradius: u32,
        pub points: bool,
        pub renderer: String,
        #[serde(rename = "rightYAxisLabel")]
        pub right_y_axis_label: Value,
        #[serde(rename = "seriesOverrides")]
        pub series_overrides: Vec<Value>,
        pub span: u32,
        pub stack: bool,
        #[serde(rename = "steppedLine")]
        pub stepped_line: bool,
        #[serde(rename = "timeFrom")]
        pub time_from: Value,
        pub title: String,
        #[serde(rename = "type")]
        pub panel_type: String,
        pub tooltip_shared: bool,
        pub y_formats: Vec<String>,

        #[serde(rename = "legend_alignAsTable")]
        pub legend_align_as_table: bool,
        pub legend_avg: bool,
        pub legend_current: bool,
        pub legend_max: bool,
        pub legend_min: bool,
        pub legend_show: bool,
        pub legend_total: bool,
        pub legend_values: bool,

        #[serde(rename = "grid_leftLogBase")]
        pub grid_left_log_base: Value,
        #[serde(rename = "grid_leftMax")]
        pub grid_left_max: Value,
        #[serde(rename = "grid_leftMin")]
        pub grid_left_min: Value,
        #[serde(rename = "grid_rightLogBase")]
        pub grid_right_log_base: Value,
        #[serde(rename = "grid_rightMax")]
        pub grid_right_max: Value,
        #[serde(rename = "grid_rightMin")]
        pub grid_right_min: Value,
        pub grid_threshold1: Value,
        #[serde(rename = "grid_threshold1Color")]
        pub grid_threshold1_color: Value,
        pub grid_threshold2: Value,
        #[serde(rename = "grid_threshold2Color")]
        pub grid_threshold2_color: Value,

        pub legend_format: String,
        #[serde(rename = "intervalFactor")]
        pub interval_factor: u32,
        pub targets: Vec<TargetTemplate>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_deserializes_prefixed_fields() {
        let yaml = r#"
title: CPU
legend_alignAsTable: true
grid_leftMin: 0
intervalFactor: 1
targets:
  - expression: "up"
  - expression: "rate(x[5m])"
    legend_format: "{{instance}}"
    intervalFactor: 4
"#;
        let row: Row = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(row.title.as_deref(), Some("CPU"));
        assert_eq!(row.legend_align_as_table, Some(true));
        assert_eq!(row.grid_left_min, Some(Value::from(0)));
        assert_eq!(row.interval_factor, Some(1));

        let targets = row.targets.unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].legend_format, None);
        assert_eq!(targets[1].legend_format.as_deref(), Some("{{instance}}"));
        assert_eq!(targets[1].interval_factor, Some(4));
    }

    #[test]
    fn test_explicit_null_is_kept_as_override() {
        let row: Row = serde_yaml::from_str("timeFrom: null\n").unwrap();
        assert_eq!(row.time_from, Some(Value::Null));
    }
}
