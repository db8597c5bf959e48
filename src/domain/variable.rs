// Templating variable template
use crate::domain::template::{template_record, TemplateKind};
use serde_json::Value;

template_record! {
    /// A variable picker; its discovery query is `label_values(metric, label)`
    pub struct Variable(TemplateKind::Variable) {
        pub name: String,
        pub metric: String,
        pub label: String,
        pub datasource: Value,
        #[serde(rename = "allValue")]
        pub all_value: Value,
        pub current: Value,
        pub hide: u8,
        #[serde(rename = "includeAll")]
        pub include_all: bool,
        pub multi: bool,
        pub options: Vec<Value>,
        pub refresh: u8,
        pub regex: String,
        pub sort: u8,
        #[serde(rename = "tagValuesQuery")]
        pub tag_values_query: String,
        pub tags: Vec<Value>,
        #[serde(rename = "tagsQuery")]
        pub tags_query: String,
        #[serde(rename = "type")]
        pub variable_type: String,
        #[serde(rename = "useTags")]
        pub use_tags: bool,
    }
}
