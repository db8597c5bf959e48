// Main entry point - Settings, logging and the render/write pipeline
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_renderer::DashboardRenderer;
use crate::application::panel_ids::PanelIdSequence;
use crate::application::run_driver::RunDriver;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::dashboard_writer::DashboardWriter;
use crate::infrastructure::template_source::load_template_source;
use crate::presentation::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    // Initialize tracing
    let level = if settings.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    // Load templates
    let registries = load_template_source(&settings.config_file)
        .with_context(|| format!("cannot load templates from {}", settings.config_file.display()))?;

    // Render everything before anything is written
    let driver = RunDriver::new(&registries, DashboardRenderer::new(PanelIdSequence::new()));
    let dashboards = driver.render_all()?;

    let writer = DashboardWriter::new(&settings.dest_dir, settings.noop);
    let written = writer.write_all(&dashboards)?;
    tracing::debug!("{} dashboard(s) rendered", written.len());

    Ok(())
}
