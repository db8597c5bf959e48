// Template source - Reads the YAML template file into typed registries
use crate::domain::registry::{Registry, TemplateRegistries};
use crate::domain::template::{Template, TemplateKind};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml::Mapping;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read template source {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse template source")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid {kind} template `{name}`: {source}")]
    InvalidTemplate {
        kind: TemplateKind,
        name: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{kind} template name must be a string, found {found:?}")]
    InvalidName { kind: TemplateKind, found: serde_yaml::Value },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    #[serde(default)]
    dashboards: Option<Mapping>,
    #[serde(default)]
    rows: Option<Mapping>,
    #[serde(default)]
    variables: Option<Mapping>,
    #[serde(default, rename = "dashboardLinks")]
    dashboard_links: Option<Mapping>,
    #[serde(default)]
    hostgroups: Option<Mapping>,
}

pub fn load_template_source(path: &Path) -> Result<TemplateRegistries, SourceError> {
    tracing::debug!("reading template source {}", path.display());
    let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_template_source(&text)
}

pub fn parse_template_source(text: &str) -> Result<TemplateRegistries, SourceError> {
    let raw = if text.trim().is_empty() {
        RawSource::default()
    } else {
        serde_yaml::from_str::<Option<RawSource>>(text)?.unwrap_or_default()
    };

    let registries = TemplateRegistries {
        dashboards: registry(raw.dashboards)?,
        rows: registry(raw.rows)?,
        variables: registry(raw.variables)?,
        links: registry(raw.dashboard_links)?,
        hostgroups: registry(raw.hostgroups)?,
    };

    tracing::debug!(
        "parsed {} dashboard(s), {} row(s), {} variable(s), {} link(s), {} hostgroup(s)",
        registries.dashboards.len(),
        registries.rows.len(),
        registries.variables.len(),
        registries.links.len(),
        registries.hostgroups.len()
    );

    Ok(registries)
}

fn registry<T>(mapping: Option<Mapping>) -> Result<Registry<T>, SourceError>
where
    T: Template + DeserializeOwned,
{
    let mut entries = Vec::new();
    for (key, value) in mapping.unwrap_or_default() {
        let name = match key {
            serde_yaml::Value::String(name) => name,
            found => return Err(SourceError::InvalidName { kind: T::KIND, found }),
        };
        // an entry with no attributes at all is an empty template
        let value = if value.is_null() {
            serde_yaml::Value::Mapping(Mapping::new())
        } else {
            value
        };
        let template = serde_yaml::from_value(value).map_err(|source| SourceError::InvalidTemplate {
            kind: T::KIND,
            name: name.clone(),
            source,
        })?;
        entries.push((name, template));
    }
    Ok(Registry::from_entries(entries))
}
