// Dashboard link template
use crate::domain::template::{template_record, TemplateKind};

template_record! {
    pub struct Link(TemplateKind::Link) {
        pub icon: String,
        pub tags: Vec<String>,
        #[serde(rename = "targetBlank")]
        pub target_blank: bool,
        #[serde(rename = "type")]
        pub link_type: String,
        pub url: String,
        pub title: String,
    }
}
