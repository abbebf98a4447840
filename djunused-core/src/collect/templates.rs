//! Template discovery from global search directories and application
//! `templates/` directories.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use walkdir::WalkDir;

use crate::project::{AppDescriptor, Project};
use crate::template::TemplateInfo;

/// Collects templates from every search directory of every backend.
///
/// Backends and directories are visited in configuration order.
pub fn collect_global_templates(project: &Project) -> Vec<TemplateInfo> {
    let mut templates = Vec::new();
    for backend in &project.backends {
        for dir in &backend.dirs {
            templates.extend(walk_template_root(dir, None));
        }
    }
    templates
}

/// Collects `<app_root>/templates` for each application under the project
/// root, in registry order.
pub fn collect_app_templates(project: &Project) -> Vec<TemplateInfo> {
    project
        .in_project_apps()
        .flat_map(|app| walk_template_root(&app.templates_dir(), Some(Arc::clone(app))))
        .collect()
}

/// Path of `file` relative to `root`, joined with `/`.
///
/// Returns `None` if `file` is not under `root`.
pub fn template_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let segments: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    Some(segments.join("/"))
}

fn walk_template_root(root: &Path, owner: Option<Arc<AppDescriptor>>) -> Vec<TemplateInfo> {
    if !root.is_dir() {
        debug!(root = %root.display(), "template directory missing, skipping");
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                debug!(root = %root.display(), error = %e, "unreadable entry skipped");
                None
            }
        })
        .filter(|e| e.path().is_file())
        .filter_map(|e| {
            let relative = template_path(root, e.path())?;
            Some(TemplateInfo::new(e.path(), relative, owner.clone()))
        })
        .collect()
}
