// Template registries - One insertion-ordered, read-only registry per kind
use crate::domain::dashboard::Dashboard;
use crate::domain::hostgroup::Hostgroup;
use crate::domain::link::Link;
use crate::domain::row::Row;
use crate::domain::template::Template;
use crate::domain::variable::Variable;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Registry<T> {
    order: Vec<String>,
    templates: HashMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            templates: HashMap::new(),
        }
    }
}

impl<T: Template> Registry<T> {
    /// Build a registry from `(name, template)` pairs in source order.
    /// A repeated name keeps its first position and its last definition.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, T)>) -> Self {
        let mut registry = Self::default();
        for (name, template) in entries {
            if registry.templates.insert(name.clone(), template).is_none() {
                registry.order.push(name);
            }
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.templates.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Templates in the order they were declared
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(|name| self.templates.get(name).map(|t| (name.as_str(), t)))
    }
}

/// Every registry loaded from one template source
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistries {
    pub dashboards: Registry<Dashboard>,
    pub rows: Registry<Row>,
    pub variables: Registry<Variable>,
    pub links: Registry<Link>,
    pub hostgroups: Registry<Hostgroup>,
}
