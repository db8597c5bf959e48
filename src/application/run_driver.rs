// Run driver - Converges, fills and renders every instantiable dashboard
use crate::application::convergence::converge;
use crate::application::dashboard_renderer::DashboardRenderer;
use crate::application::reference_filler::fill;
use crate::domain::dashboard::Dashboard;
use crate::domain::document::RenderedDashboard;
use crate::domain::error::TemplateError;
use crate::domain::registry::TemplateRegistries;
use crate::domain::template::Instance;

pub struct RunDriver<'a> {
    registries: &'a TemplateRegistries,
    renderer: DashboardRenderer,
}

impl<'a> RunDriver<'a> {
    pub fn new(registries: &'a TemplateRegistries, renderer: DashboardRenderer) -> Self {
        Self {
            registries,
            renderer,
        }
    }

    /// Converge a dashboard and fill all of its reference attributes
    pub fn prepare(&self, name: &str) -> Result<Instance<Dashboard>, TemplateError> {
        tracing::debug!("templatization & filling of `{}` dashboard", name);

        let dashboard = converge(name, &self.registries.dashboards)?;
        let dashboard = fill(&dashboard, |d: &mut Dashboard| &mut d.hostgroups, &self.registries.hostgroups)?;
        let dashboard = fill(&dashboard, |d: &mut Dashboard| &mut d.rows, &self.registries.rows)?;
        let dashboard = fill(&dashboard, |d: &mut Dashboard| &mut d.variables, &self.registries.variables)?;
        let dashboard = fill(
            &dashboard,
            |d: &mut Dashboard| &mut d.dashboard_links,
            &self.registries.links,
        )?;

        Ok(Instance {
            name: name.to_string(),
            template: dashboard,
        })
    }

    /// Render the whole run. Every dashboard is prepared, including the ones
    /// that are not instantiated, and the first error aborts the run.
    pub fn render_all(&self) -> Result<Vec<RenderedDashboard>, TemplateError> {
        if self.registries.dashboards.is_empty() {
            tracing::warn!("template source defines no dashboards");
        }

        let mut rendered = Vec::new();

        for (name, _) in self.registries.dashboards.iter() {
            let instance = self.prepare(name)?;
            if !instance.template.is_instantiable() {
                tracing::debug!("skipping template-only dashboard `{}`", name);
                continue;
            }

            let document = self.renderer.render(&instance)?;
            rendered.push(RenderedDashboard {
                name: instance.name,
                folder: instance.template.folder,
                document,
            });
        }

        Ok(rendered)
    }
}
