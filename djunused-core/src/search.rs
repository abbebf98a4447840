//! Builder API for running a template search.
//!
//! ```rust,ignore
//! use djunused_core::prelude::*;
//!
//! let outcome = TemplateSearch::new(project)
//!     .excluded_apps(["legacy"])
//!     .excluded_template_dirs(["admin/"])
//!     .run()?;
//!
//! for template in &outcome.result.unused_templates {
//!     println!("unused: {}", template.template_path);
//! }
//! ```

use tracing::info;

use crate::collect::{
    collect_app_templates, collect_global_templates, collect_source_files,
    default_source_excludes, default_source_extensions, SourceFiles,
};
use crate::error::DjunusedResult;
use crate::filter::{filter_templates, TemplateFilterOptions};
use crate::project::Project;
use crate::scan::{build_corpus, ReferenceScanner};
use crate::template::TemplateSearchResult;

/// Builder for configuring a search.
#[derive(Debug, Clone)]
pub struct TemplateSearch {
    project: Project,

    /// App and directory exclusions
    filter: TemplateFilterOptions,

    /// Directory substrings skipped during source collection
    source_excludes: Vec<String>,

    /// Extensions of source files to scan
    source_extensions: Vec<String>,
}

impl TemplateSearch {
    /// Create a search for the given project.
    ///
    /// Source exclusions and extensions come from the project's `[scan]`
    /// section when present, otherwise from the defaults.
    pub fn new(project: Project) -> Self {
        let source_excludes = project
            .scan
            .exclude
            .clone()
            .unwrap_or_else(default_source_excludes);
        let source_extensions = project
            .scan
            .source_extensions
            .clone()
            .unwrap_or_else(default_source_extensions);

        Self {
            project,
            filter: TemplateFilterOptions::default(),
            source_excludes,
            source_extensions,
        }
    }

    /// Drop templates owned by these applications.
    pub fn excluded_apps(mut self, apps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.filter = self.filter.excluded_apps(apps);
        self
    }

    /// Drop templates whose path starts with any of these prefixes.
    pub fn excluded_template_dirs(
        mut self,
        dirs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.filter = self.filter.excluded_template_dirs(dirs);
        self
    }

    /// Replace the full filter configuration.
    pub fn with_filter(mut self, filter: TemplateFilterOptions) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the directory substrings skipped during source collection.
    pub fn source_excludes(mut self, excludes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.source_excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the source file extensions.
    pub fn source_extensions(
        mut self,
        extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.source_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Run the search and return results.
    pub fn run(&self) -> DjunusedResult<SearchOutcome> {
        // 1. Collect templates, global first
        let global = collect_global_templates(&self.project);
        info!(count = global.len(), "global templates found");

        let app = collect_app_templates(&self.project);
        info!(count = app.len(), "app templates found");

        let global_templates = global.len();
        let app_templates = app.len();
        let mut templates = global;
        templates.extend(app);

        // 2. Apply exclusions
        let filtered = filter_templates(templates, &self.filter);
        if self.filter.excluded_apps.is_some() {
            info!(count = filtered.excluded_by_app, "templates excluded by app filter");
        }
        if self.filter.excluded_template_dirs.is_some() {
            info!(count = filtered.excluded_by_dir, "templates excluded by directory filter");
        }
        let templates = filtered.templates;

        // 3. Collect source files
        let source_files =
            collect_source_files(&self.project, &self.source_excludes, &self.source_extensions);
        info!(count = source_files.len(), "source files found");

        // 4. Scan
        let corpus = build_corpus(&source_files.absolute, &templates);
        let result = ReferenceScanner::new(&templates)?.scan(&corpus)?;

        let stats = SearchStats {
            global_templates,
            app_templates,
            excluded_by_app: filtered.excluded_by_app,
            excluded_by_dir: filtered.excluded_by_dir,
            scanned_templates: templates.len(),
            source_files: source_files.len(),
            corpus_files: corpus.len(),
        };

        Ok(SearchOutcome {
            result,
            stats,
            source_files,
        })
    }
}

/// Counts gathered along the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub global_templates: usize,
    pub app_templates: usize,
    pub excluded_by_app: usize,
    pub excluded_by_dir: usize,
    /// Templates left after filtering
    pub scanned_templates: usize,
    pub source_files: usize,
    pub corpus_files: usize,
}

/// Result of running a search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub result: TemplateSearchResult,
    pub stats: SearchStats,
    pub source_files: SourceFiles,
}

impl SearchOutcome {
    /// Check if any unused template was found.
    pub fn has_unused(&self) -> bool {
        self.result.has_unused()
    }
}
