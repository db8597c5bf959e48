// Dashboard scope - What child renderers may read from their parent dashboard
use crate::domain::dashboard::Dashboard;
use crate::domain::error::TemplateError;
use crate::domain::hostgroup::instance_selector;
use crate::domain::template::TemplateKind;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardScope {
    pub title: String,
    /// Substitution values for target expressions
    pub expvars: BTreeMap<String, String>,
    pub templating_regexps: BTreeMap<String, String>,
}

impl DashboardScope {
    /// Build the scope of a filled dashboard. `instance_selector` is derived
    /// from the dashboard's hostgroups; its own `expvars` take precedence.
    pub fn of(name: &str, dashboard: &Dashboard) -> Result<Self, TemplateError> {
        let mut regexps = Vec::new();
        for hostgroup in dashboard.hostgroups.iter().flat_map(|h| h.instances()) {
            let regexp = hostgroup.template.regexp.as_deref().ok_or_else(|| {
                TemplateError::MissingField {
                    kind: TemplateKind::Hostgroup,
                    name: hostgroup.name.clone(),
                    field: "regexp",
                }
            })?;
            regexps.push(regexp);
        }

        let mut expvars = BTreeMap::new();
        expvars.insert("instance_selector".to_string(), instance_selector(regexps));
        for (key, value) in dashboard.expvars.iter().flatten() {
            expvars.insert(key.clone(), expvar_text(value));
        }

        tracing::debug!("dashboard `{}` exposes {} expression variable(s)", name, expvars.len());

        Ok(Self {
            title: dashboard.display_title().to_string(),
            expvars,
            templating_regexps: dashboard.templating_regexps.clone().unwrap_or_default(),
        })
    }
}

fn expvar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
