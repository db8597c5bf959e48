// Dashboard writer - Stores rendered documents and the index listing
use crate::domain::document::RenderedDashboard;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index";

#[derive(Debug, Clone)]
pub struct DashboardWriter {
    dest_dir: PathBuf,
    noop: bool,
}

impl DashboardWriter {
    pub fn new(dest_dir: impl Into<PathBuf>, noop: bool) -> Self {
        Self {
            dest_dir: dest_dir.into(),
            noop,
        }
    }

    /// Write every dashboard as `<dest>/[<folder>/]<name>.json` and list the
    /// written files in `<dest>/index`. Returns the relative paths in order.
    pub fn write_all(&self, dashboards: &[RenderedDashboard]) -> Result<Vec<PathBuf>> {
        let index_path = self.dest_dir.join(INDEX_FILE);
        if self.noop {
            tracing::debug!("would be writing {}", index_path.display());
        } else {
            fs::create_dir_all(&self.dest_dir)
                .with_context(|| format!("failed to create {}", self.dest_dir.display()))?;
        }

        let mut written = Vec::with_capacity(dashboards.len());
        for dashboard in dashboards {
            let relative = relative_path(dashboard);
            let out_path = self.dest_dir.join(&relative);

            if self.noop {
                tracing::debug!("would be writing {}", out_path.display());
            } else {
                tracing::debug!("writing {}", out_path.display());
                write_document(&out_path, dashboard)?;
            }
            written.push(relative);
        }

        if !self.noop {
            let mut index = String::new();
            for path in &written {
                index.push_str(&path.to_string_lossy());
                index.push('\n');
            }
            tracing::debug!("writing {}", index_path.display());
            fs::write(&index_path, index)
                .with_context(|| format!("failed to write {}", index_path.display()))?;
        }

        Ok(written)
    }
}

fn relative_path(dashboard: &RenderedDashboard) -> PathBuf {
    let file_name = format!("{}.json", dashboard.name);
    match &dashboard.folder {
        Some(folder) => Path::new(folder).join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn write_document(path: &Path, dashboard: &RenderedDashboard) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut json = serde_json::to_string(&dashboard.document)
        .with_context(|| format!("failed to serialize dashboard `{}`", dashboard.name))?;
    json.push('\n');

    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
