// Dashboard template - Top-level document definition and its references
use crate::domain::hostgroup::Hostgroup;
use crate::domain::link::Link;
use crate::domain::row::Row;
use crate::domain::template::{template_record, ReferenceList, TemplateKind};
use crate::domain::variable::Variable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl Default for TimeRange {
    fn default() -> Self {
        Self {
            from: "now-6h".to_string(),
            to: "now".to_string(),
        }
    }
}

template_record! {
    pub struct Dashboard(TemplateKind::Dashboard) {
        pub title: String,
        #[serde(rename = "originalTitle")]
        pub original_title: String,
        pub tags: Vec<String>,
        pub style: String,
        pub timezone: String,
        pub editable: bool,
        #[serde(rename = "hideControls")]
        pub hide_controls: bool,
        #[serde(rename = "sharedCrosshair")]
        pub shared_crosshair: bool,
        pub refresh: Value,

        pub time: TimeRange,
        pub now: bool,
        pub refresh_intervals: Vec<String>,
        pub time_options: Vec<String>,

        pub instantiate: bool,
        pub folder: String,
        pub expvars: BTreeMap<String, Value>,
        pub templating_regexps: BTreeMap<String, String>,

        pub hostgroups: ReferenceList<Hostgroup>,
        pub rows: ReferenceList<Row>,
        pub variables: ReferenceList<Variable>,
        #[serde(rename = "dashboardLinks")]
        pub dashboard_links: ReferenceList<Link>,
    }
}

impl Dashboard {
    pub fn is_instantiable(&self) -> bool {
        self.instantiate.unwrap_or(true)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unnamed")
    }
}
