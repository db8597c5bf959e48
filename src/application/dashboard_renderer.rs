// Dashboard renderer - Assembles a filled dashboard into its output document
use crate::application::link_renderer::render_link;
use crate::application::panel_ids::PanelIdSequence;
use crate::application::row_renderer::render_row;
use crate::application::scope::DashboardScope;
use crate::application::variable_renderer::render_variable;
use crate::domain::dashboard::Dashboard;
use crate::domain::document::{
    DashboardDocument, ItemList, TimePicker, DOCUMENT_VERSION, SCHEMA_VERSION,
};
use crate::domain::error::TemplateError;
use crate::domain::template::Instance;
use serde_json::Value;

const REFRESH_INTERVALS: [&str; 9] = ["5s", "10s", "30s", "1m", "5m", "15m", "30m", "1h", "1d"];
const TIME_OPTIONS: [&str; 9] = ["5m", "15m", "1h", "6h", "12h", "24h", "2d", "7d", "30d"];

#[derive(Debug, Default)]
pub struct DashboardRenderer {
    panel_ids: PanelIdSequence,
}

impl DashboardRenderer {
    pub fn new(panel_ids: PanelIdSequence) -> Self {
        Self { panel_ids }
    }

    /// Render a converged and filled dashboard. Reference lists that were
    /// never filled contribute nothing.
    pub fn render(&self, instance: &Instance<Dashboard>) -> Result<DashboardDocument, TemplateError> {
        let dashboard = &instance.template;
        let scope = DashboardScope::of(&instance.name, dashboard)?;

        let rows = dashboard
            .rows
            .iter()
            .flat_map(|r| r.instances())
            .map(|row| render_row(row, &scope, &self.panel_ids))
            .collect::<Result<Vec<_>, _>>()?;

        let links = dashboard
            .dashboard_links
            .iter()
            .flat_map(|l| l.instances())
            .map(render_link)
            .collect::<Result<Vec<_>, _>>()?;

        let variables = dashboard
            .variables
            .iter()
            .flat_map(|v| v.instances())
            .map(|variable| render_variable(variable, &scope))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "rendered dashboard `{}`: {} row(s), {} link(s), {} variable(s)",
            instance.name,
            rows.len(),
            links.len(),
            variables.len()
        );

        Ok(DashboardDocument {
            title: scope.title.clone(),
            original_title: dashboard
                .original_title
                .clone()
                .unwrap_or_else(|| "Unnamed".to_string()),
            tags: dashboard.tags.clone().unwrap_or_default(),
            style: dashboard.style.clone().unwrap_or_else(|| "dark".to_string()),
            timezone: dashboard.timezone.clone().unwrap_or_else(|| "browser".to_string()),
            editable: dashboard.editable.unwrap_or(true),
            hide_controls: dashboard.hide_controls.unwrap_or(false),
            shared_crosshair: dashboard.shared_crosshair.unwrap_or(false),
            refresh: dashboard.refresh.clone().unwrap_or(Value::Bool(false)),
            rows,
            links,
            time: dashboard.time.clone().unwrap_or_default(),
            timepicker: TimePicker {
                now: dashboard.now.unwrap_or(true),
                refresh_intervals: dashboard
                    .refresh_intervals
                    .clone()
                    .unwrap_or_else(|| strings(&REFRESH_INTERVALS)),
                time_options: dashboard
                    .time_options
                    .clone()
                    .unwrap_or_else(|| strings(&TIME_OPTIONS)),
            },
            templating: ItemList { list: variables },
            annotations: ItemList::default(),
            schema_version: SCHEMA_VERSION,
            version: DOCUMENT_VERSION,
        })
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::TimeRange;
    use crate::domain::link::Link;
    use crate::domain::row::Row;
    use crate::domain::template::ReferenceList;
    use crate::domain::variable::Variable;
    use serde_json::json;

    fn resolved<T>(items: Vec<(&str, T)>) -> Option<ReferenceList<T>> {
        Some(ReferenceList::Resolved(
            items
                .into_iter()
                .map(|(name, template)| Instance {
                    name: name.to_string(),
                    template,
                })
                .collect(),
        ))
    }

    fn filled_dashboard() -> Instance<Dashboard> {
        Instance {
            name: "ops".to_string(),
            template: Dashboard {
                title: Some("Ops".to_string()),
                tags: Some(vec!["infra".to_string()]),
                time: Some(TimeRange {
                    from: "now-24h".to_string(),
                    to: "now".to_string(),
                }),
                refresh: Some(json!("1m")),
                rows: resolved(vec![
                    ("cpu", Row::default()),
                    ("memory", Row::default()),
                ]),
                dashboard_links: resolved(vec![(
                    "wiki",
                    Link {
                        url: Some("https://wiki".to_string()),
                        ..Default::default()
                    },
                )]),
                variables: resolved(vec![(
                    "host",
                    Variable {
                        metric: Some("up".to_string()),
                        label: Some("instance".to_string()),
                        ..Default::default()
                    },
                )]),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_render_document_structure() {
        let renderer = DashboardRenderer::default();

        let document = renderer.render(&filled_dashboard()).unwrap();

        assert_eq!(document.title, "Ops");
        assert_eq!(document.original_title, "Unnamed");
        assert_eq!(document.tags, vec!["infra"]);
        assert_eq!(document.rows.len(), 2);
        assert_eq!(document.links.len(), 1);
        assert_eq!(document.templating.list.len(), 1);
        assert_eq!(document.templating.list[0].query, "label_values(up, instance)");
        assert!(document.annotations.list.is_empty());
        assert_eq!(document.time.from, "now-24h");
        assert_eq!(document.refresh, json!("1m"));
    }

    #[test]
    fn test_fixed_versions_and_field_names() {
        let renderer = DashboardRenderer::default();

        let document = serde_json::to_value(renderer.render(&filled_dashboard()).unwrap()).unwrap();

        assert_eq!(document["schemaVersion"], json!(7));
        assert_eq!(document["version"], json!(22));
        assert_eq!(document["hideControls"], json!(false));
        assert_eq!(document["annotations"], json!({ "list": [] }));
        assert_eq!(document["timepicker"]["now"], json!(true));
        assert_eq!(document["timepicker"]["refresh_intervals"][0], json!("5s"));
        assert_eq!(document["rows"][0]["panels"][0]["id"], json!(1));
        assert_eq!(document["rows"][1]["panels"][0]["id"], json!(2));
        assert!(document.get("folder").is_none());
    }

    #[test]
    fn test_panel_ids_shared_between_dashboards() {
        let renderer = DashboardRenderer::default();

        let first = renderer.render(&filled_dashboard()).unwrap();
        let second = renderer.render(&filled_dashboard()).unwrap();

        let ids: Vec<u64> = first
            .rows
            .iter()
            .chain(second.rows.iter())
            .map(|row| row.panels[0].id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unfilled_references_render_empty() {
        let instance = Instance {
            name: "raw".to_string(),
            template: Dashboard {
                rows: Some(ReferenceList::Unresolved(vec!["cpu".to_string()])),
                ..Default::default()
            },
        };

        let document = DashboardRenderer::default().render(&instance).unwrap();

        assert!(document.rows.is_empty());
        assert_eq!(document.title, "Unnamed");
    }
}
