// Convergence resolver - Flattens a template's inheritance chain
use crate::domain::error::TemplateError;
use crate::domain::registry::Registry;
use crate::domain::template::Template;

/// Converge the template registered under `name`.
///
/// The result is a fresh copy: own attributes win over every ancestor's,
/// `inherits` is cleared and `inherited` names the direct parent.
/// Converging an already converged template returns an equal copy.
pub fn converge<T: Template>(name: &str, registry: &Registry<T>) -> Result<T, TemplateError> {
    let template = registry.get(name).ok_or_else(|| TemplateError::UnknownTemplate {
        kind: T::KIND,
        name: name.to_string(),
    })?;

    let mut chain = vec![name.to_string()];
    resolve(template, registry, &mut chain)
}

fn resolve<T: Template>(
    template: &T,
    registry: &Registry<T>,
    chain: &mut Vec<String>,
) -> Result<T, TemplateError> {
    let Some(parent_name) = template.inherits() else {
        return Ok(template.clone());
    };

    let revisited = chain.iter().any(|name| name == parent_name);
    chain.push(parent_name.to_string());
    if revisited {
        return Err(TemplateError::CyclicInheritance {
            kind: T::KIND,
            chain: chain.clone(),
        });
    }

    let parent = registry.get(parent_name).ok_or_else(|| TemplateError::UnknownTemplate {
        kind: T::KIND,
        name: parent_name.to_string(),
    })?;

    tracing::debug!("converging {} template via `{}`", T::KIND, parent_name);
    let base = resolve(parent, registry, chain)?;

    let mut merged = template.clone().overlay(base);
    merged.settle();
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Dashboard;
    use crate::domain::template::TemplateKind;

    fn dashboards(yaml: &str) -> Registry<Dashboard> {
        let entries: Vec<(String, Dashboard)> = serde_yaml::from_str::<serde_yaml::Mapping>(yaml)
            .unwrap()
            .into_iter()
            .map(|(k, v)| {
                (
                    k.as_str().unwrap().to_string(),
                    serde_yaml::from_value(v).unwrap(),
                )
            })
            .collect();
        Registry::from_entries(entries)
    }

    #[test]
    fn test_child_overrides_parent_field() {
        let registry = dashboards(
            r#"
base: { title: Base, style: light }
child: { inherits: base, title: Child }
"#,
        );

        let converged = converge("child", &registry).unwrap();

        assert_eq!(converged.title.as_deref(), Some("Child"));
        assert_eq!(converged.style.as_deref(), Some("light"));
        assert_eq!(converged.inherits, None);
        assert_eq!(converged.inherited.as_deref(), Some("base"));
    }

    #[test]
    fn test_transitive_inheritance() {
        let registry = dashboards(
            r#"
c: { timezone: utc, title: C }
b: { inherits: c, title: B }
a: { inherits: b, title: A }
"#,
        );

        let converged = converge("a", &registry).unwrap();

        assert_eq!(converged.timezone.as_deref(), Some("utc"));
        assert_eq!(converged.title.as_deref(), Some("A"));
        assert_eq!(converged.inherited.as_deref(), Some("b"));
    }

    #[test]
    fn test_registry_is_not_mutated() {
        let registry = dashboards(
            r#"
base: { title: Base }
child: { inherits: base }
"#,
        );

        let mut converged = converge("child", &registry).unwrap();
        converged.title = Some("changed".to_string());

        assert_eq!(registry.get("base").unwrap().title.as_deref(), Some("Base"));
        assert_eq!(registry.get("child").unwrap().inherits.as_deref(), Some("base"));
        assert_eq!(registry.get("child").unwrap().title, None);
    }

    #[test]
    fn test_convergence_is_idempotent() {
        let registry = dashboards(
            r#"
base: { title: Base, tags: [infra] }
child: { inherits: base, style: dark }
"#,
        );

        let once = converge("child", &registry).unwrap();
        let converged = Registry::from_entries(vec![("child".to_string(), once.clone())]);
        let twice = converge("child", &converged).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_parent() {
        let registry = dashboards("child: { inherits: nowhere }\n");

        let err = converge("child", &registry).unwrap_err();

        assert_eq!(
            err,
            TemplateError::UnknownTemplate {
                kind: TemplateKind::Dashboard,
                name: "nowhere".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_template() {
        let registry = dashboards("a: {}\n");
        assert!(matches!(
            converge("b", &registry),
            Err(TemplateError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn test_cycle_is_reported() {
        let registry = dashboards(
            r#"
a: { inherits: b }
b: { inherits: c }
c: { inherits: a }
"#,
        );

        let err = converge("a", &registry).unwrap_err();

        assert_eq!(
            err,
            TemplateError::CyclicInheritance {
                kind: TemplateKind::Dashboard,
                chain: vec!["a", "b", "c", "a"].into_iter().map(String::from).collect(),
            }
        );
    }

    #[test]
    fn test_self_inheritance_is_a_cycle() {
        let registry = dashboards("loop: { inherits: loop }\n");
        assert!(matches!(
            converge("loop", &registry),
            Err(TemplateError::CyclicInheritance { .. })
        ));
    }
}
