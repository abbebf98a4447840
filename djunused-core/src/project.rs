//! Resolved view of a project: root, application registry, template backends.
//!
//! All paths are made absolute against the manifest directory and lexically
//! normalized. Nothing here touches the filesystem, so directories named by
//! the manifest may be missing.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::config::{ProjectConfig, ScanConfig};

/// An installed application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppDescriptor {
    pub name: String,
    pub path: PathBuf,
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Directory holding this application's own templates.
    pub fn templates_dir(&self) -> PathBuf {
        self.path.join("templates")
    }
}

/// A template engine backend and its search directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateBackend {
    pub backend: Option<String>,
    pub dirs: Vec<PathBuf>,
}

/// The project a search runs against.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub base_dir: PathBuf,
    pub apps: Vec<Arc<AppDescriptor>>,
    pub backends: Vec<TemplateBackend>,
    pub scan: ScanConfig,
}

impl Project {
    /// Creates an empty project rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: normalize(&base_dir.into()),
            ..Self::default()
        }
    }

    /// Registers an application. Order of registration is enumeration order.
    pub fn with_app(mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let path = normalize(&self.base_dir.join(path));
        self.apps.push(Arc::new(AppDescriptor::new(name, path)));
        self
    }

    /// Registers a template backend with the given search directories.
    pub fn with_backend<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dirs = dirs
            .into_iter()
            .map(|d| normalize(&self.base_dir.join(d)))
            .collect();
        self.backends.push(TemplateBackend { backend: None, dirs });
        self
    }

    /// Resolves a parsed manifest against the directory that contained it.
    pub fn from_config(config: ProjectConfig, manifest_dir: &Path) -> Self {
        let resolve = |p: &str| normalize(&manifest_dir.join(p));

        let base_dir = config
            .base_dir
            .as_deref()
            .map(resolve)
            .unwrap_or_else(|| normalize(manifest_dir));

        let apps = config
            .apps
            .iter()
            .map(|app| Arc::new(AppDescriptor::new(app.name.clone(), resolve(&app.path))))
            .collect();

        let backends = config
            .templates
            .iter()
            .map(|b| TemplateBackend {
                backend: b.backend.clone(),
                dirs: b.dirs.iter().map(|d| resolve(d)).collect(),
            })
            .collect();

        Self {
            base_dir,
            apps,
            backends,
            scan: config.scan.unwrap_or_default(),
        }
    }

    /// Applications whose root lies under the project root, in registry order.
    ///
    /// Third-party applications installed elsewhere are skipped.
    pub fn in_project_apps(&self) -> impl Iterator<Item = &Arc<AppDescriptor>> {
        self.apps
            .iter()
            .filter(move |app| app.path.starts_with(&self.base_dir))
    }
}

/// Lexically normalizes a path: drops `.` components and resolves `..`
/// against the preceding component where there is one.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
