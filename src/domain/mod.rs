// Domain layer - Template records, registries and the rendered document model
pub mod dashboard;
pub mod document;
pub mod error;
pub mod hostgroup;
pub mod link;
pub mod registry;
pub mod row;
pub mod template;
pub mod variable;
