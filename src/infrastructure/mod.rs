// Infrastructure layer - Settings, template source and dashboard files
pub mod config;
pub mod dashboard_writer;
pub mod template_source;
