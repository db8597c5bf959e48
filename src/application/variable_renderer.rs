// Variable renderer - Turns a converged variable into a templating entry
use crate::application::scope::DashboardScope;
use crate::domain::document::VariableFragment;
use crate::domain::error::TemplateError;
use crate::domain::template::{Instance, TemplateKind};
use crate::domain::variable::Variable;
use serde_json::{json, Value};

pub fn render_variable(
    instance: &Instance<Variable>,
    scope: &DashboardScope,
) -> Result<VariableFragment, TemplateError> {
    let variable = &instance.template;
    let name = variable.name.clone().unwrap_or_else(|| instance.name.clone());
    let metric = required(instance, &variable.metric, "metric")?;
    let label = required(instance, &variable.label, "label")?;

    // A dashboard may pick which of its expression variables filters this picker
    let regex = match scope.templating_regexps.get(&name) {
        Some(key) => scope
            .expvars
            .get(key)
            .cloned()
            .ok_or_else(|| TemplateError::MissingVariable {
                dashboard: scope.title.clone(),
                expression: format!("templating_regexps.{name}"),
                variable: key.clone(),
            })?,
        None => variable.regex.clone().unwrap_or_default(),
    };

    tracing::debug!("rendered variable `{}` for dashboard `{}`", name, scope.title);

    Ok(VariableFragment {
        all_value: variable.all_value.clone().unwrap_or(Value::Null),
        current: variable.current.clone().unwrap_or_else(|| json!({})),
        datasource: variable.datasource.clone().unwrap_or(Value::Null),
        hide: variable.hide.unwrap_or(0),
        include_all: variable.include_all.unwrap_or(false),
        label: label.to_string(),
        multi: variable.multi.unwrap_or(false),
        query: format!("label_values({metric}, {label})"),
        name,
        options: variable.options.clone().unwrap_or_default(),
        refresh: variable.refresh.unwrap_or(1),
        regex,
        sort: variable.sort.unwrap_or(0),
        tag_values_query: variable.tag_values_query.clone().unwrap_or_default(),
        tags: variable.tags.clone().unwrap_or_default(),
        tags_query: variable.tags_query.clone().unwrap_or_default(),
        variable_type: variable.variable_type.clone().unwrap_or_else(|| "query".to_string()),
        use_tags: variable.use_tags.unwrap_or(false),
    })
}

fn required<'a>(
    instance: &Instance<Variable>,
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, TemplateError> {
    value.as_deref().ok_or_else(|| TemplateError::MissingField {
        kind: TemplateKind::Variable,
        name: instance.name.clone(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn scope(regexps: &[(&str, &str)]) -> DashboardScope {
        DashboardScope {
            title: "Hosts".to_string(),
            expvars: BTreeMap::from([
                ("instance_selector".to_string(), "(web-.*)".to_string()),
                ("env".to_string(), "prod".to_string()),
            ]),
            templating_regexps: regexps
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn instance() -> Instance<Variable> {
        Instance {
            name: "host".to_string(),
            template: Variable {
                metric: Some("node_boot_time".to_string()),
                label: Some("instance".to_string()),
                regex: Some("own-.*".to_string()),
                multi: Some(true),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_query_and_name() {
        let fragment = render_variable(&instance(), &scope(&[])).unwrap();

        assert_eq!(fragment.name, "host");
        assert_eq!(fragment.query, "label_values(node_boot_time, instance)");
        assert_eq!(fragment.label, "instance");
        assert_eq!(fragment.regex, "own-.*");
        assert!(fragment.multi);
        assert_eq!(fragment.variable_type, "query");
    }

    #[test]
    fn test_explicit_name_wins() {
        let mut instance = instance();
        instance.template.name = Some("server".to_string());

        let fragment = render_variable(&instance, &scope(&[])).unwrap();

        assert_eq!(fragment.name, "server");
    }

    #[test]
    fn test_regex_override_from_dashboard() {
        let fragment =
            render_variable(&instance(), &scope(&[("host", "instance_selector")])).unwrap();
        assert_eq!(fragment.regex, "(web-.*)");
    }

    #[test]
    fn test_regex_override_for_other_variable_is_ignored() {
        let fragment = render_variable(&instance(), &scope(&[("job", "env")])).unwrap();
        assert_eq!(fragment.regex, "own-.*");
    }

    #[test]
    fn test_regex_override_with_unknown_expvar() {
        let err = render_variable(&instance(), &scope(&[("host", "nope")])).unwrap_err();
        assert!(matches!(err, TemplateError::MissingVariable { ref variable, .. } if variable == "nope"));
    }

    #[test]
    fn test_metric_is_required() {
        let mut instance = instance();
        instance.template.metric = None;

        let err = render_variable(&instance, &scope(&[])).unwrap_err();

        assert_eq!(
            err,
            TemplateError::MissingField {
                kind: TemplateKind::Variable,
                name: "host".to_string(),
                field: "metric",
            }
        );
    }
}
