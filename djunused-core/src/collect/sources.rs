//! Source file discovery for in-project applications.
//!
//! Directories whose path contains one of the exclusion substrings are pruned
//! together with their whole subtree.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::project::Project;

/// Extensions scanned when nothing else is configured.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["py"];

/// Default directory exclusion: the bundled example project's test suite.
pub fn default_source_excludes() -> Vec<String> {
    vec![Path::new("example")
        .join("server")
        .join("tests")
        .to_string_lossy()
        .into_owned()]
}

pub fn default_source_extensions() -> Vec<String> {
    DEFAULT_SOURCE_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Collected source files. Both lists are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFiles {
    /// Paths used for scanning.
    pub absolute: Vec<PathBuf>,
    /// Paths relative to the owning application root, `/`-separated.
    pub relative: Vec<String>,
}

impl SourceFiles {
    pub fn len(&self) -> usize {
        self.absolute.len()
    }

    pub fn is_empty(&self) -> bool {
        self.absolute.is_empty()
    }
}

#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let path = entry.path().to_string_lossy();
    let excluded = excludes.iter().any(|ex| path.contains(ex.as_str()));
    if excluded {
        debug!(dir = %path, "excluding");
    }
    excluded
}

#[inline]
fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Gathers source files under every in-project application root.
pub fn collect_source_files(
    project: &Project,
    excludes: &[String],
    extensions: &[String],
) -> SourceFiles {
    let mut files = SourceFiles::default();

    for app in project.in_project_apps() {
        for entry in WalkDir::new(&app.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded_dir(e, excludes))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !has_source_extension(path, extensions) {
                continue;
            }
            let relative = crate::collect::template_path(&app.path, path)
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            files.absolute.push(path.to_path_buf());
            files.relative.push(relative);
        }
    }

    files
}
