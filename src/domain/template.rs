// Template domain model - Named, inheritable configuration records
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Dashboard,
    Row,
    Variable,
    Link,
    Hostgroup,
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateKind::Dashboard => "dashboard",
            TemplateKind::Row => "row",
            TemplateKind::Variable => "variable",
            TemplateKind::Link => "link",
            TemplateKind::Hostgroup => "hostgroup",
        };
        f.write_str(name)
    }
}

/// A template record of one kind. Every attribute is optional so that a
/// template only has to carry what it overrides on top of its parent.
pub trait Template: Clone {
    const KIND: TemplateKind;

    /// Name of the parent template, if this one still has to be converged
    fn inherits(&self) -> Option<&str>;

    /// Take every attribute this record leaves unset from `parent`
    fn overlay(self, parent: Self) -> Self;

    /// Mark the record as converged: `inherits` moves to `inherited`
    fn settle(&mut self);
}

/// A converged template together with the registry name it was filled from
#[derive(Debug, Clone, PartialEq)]
pub struct Instance<T> {
    pub name: String,
    pub template: T,
}

/// An attribute holding references to other templates. It starts out as a
/// list of names and becomes a list of converged instances once filled.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceList<T> {
    Unresolved(Vec<String>),
    Resolved(Vec<Instance<T>>),
}

impl<T> ReferenceList<T> {
    /// Resolved instances; an unfilled list yields nothing
    pub fn instances(&self) -> &[Instance<T>] {
        match self {
            ReferenceList::Resolved(instances) => instances,
            ReferenceList::Unresolved(_) => &[],
        }
    }
}

impl<'de, T> Deserialize<'de> for ReferenceList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(ReferenceList::Unresolved)
    }
}

/// Deserialize a present attribute as `Some`, even when its value is null.
/// Absent attributes stay `None` through `#[serde(default)]`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Declares a template record: every listed attribute becomes an `Option`,
/// unknown keys are rejected and the `Template` overlay is derived field by
/// field.
macro_rules! template_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($kind:expr) {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            #[serde(default)]
            pub inherits: Option<String>,
            #[serde(skip)]
            pub inherited: Option<String>,
            $(
                $(#[$field_meta])*
                #[serde(default, deserialize_with = "crate::domain::template::present")]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::domain::template::Template for $name {
            const KIND: $crate::domain::template::TemplateKind = $kind;

            fn inherits(&self) -> Option<&str> {
                self.inherits.as_deref()
            }

            fn overlay(self, parent: Self) -> Self {
                Self {
                    inherits: self.inherits,
                    inherited: self.inherited.or(parent.inherited),
                    $( $field: self.$field.or(parent.$field), )*
                }
            }

            fn settle(&mut self) {
                if let Some(parent) = self.inherits.take() {
                    self.inherited = Some(parent);
                }
            }
        }
    };
}

pub(crate) use template_record;
