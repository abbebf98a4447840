//! djunused-core: unused template detection for Django projects.
//!
//! Finds template files that no other template in the project includes,
//! extends, or otherwise mentions, so they can be reviewed for deletion.
//!
//! # Pipeline
//!
//! 1. [`collect`]: gather templates from global search directories and from
//!    each in-project application's `templates/` directory, plus the
//!    applications' source files
//! 2. [`filter`]: drop templates by owning application or path prefix
//! 3. [`scan`]: stream every corpus line through the [`index`] and record a
//!    [`Reference`] for each mention found inside a template file
//! 4. [`classify`]: label each reference as include, extend, or unknown
//! 5. [`aggregate`]: partition templates into used and unused, group by app
//! 6. [`report`]: render the result
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use djunused_core::prelude::*;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("."))?.unwrap_or_default();
//! let project = Project::from_config(config, Path::new("."));
//! let outcome = TemplateSearch::new(project).run()?;
//! print_plain(&outcome.result)?;
//! ```
//!
//! # Module Organization
//!
//! - [`config`]: `djunused.toml` manifest loading
//! - [`project`]: resolved application registry and template backends
//! - [`search`]: fluent builder running the whole pipeline
//! - [`error`]: typed error handling
//! - [`logging`]: tracing subscriber setup

pub mod aggregate;
pub mod classify;
pub mod collect;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod logging;
pub mod prelude;
pub mod project;
pub mod report;
pub mod scan;
pub mod search;
pub mod template;

// Error types
pub use error::{DjunusedError, DjunusedResult, IoResultExt};

// Data model
pub use template::{
    Reference, TemplateId, TemplateInfo, TemplateKey, TemplateSearchResult, UsedTemplateInfo,
    GLOBAL_LABEL,
};

// Configuration
pub use config::{
    load_config, AppConfig, ProjectConfig, ScanConfig, TemplateBackendConfig, MANIFEST_FILE,
};
pub use project::{AppDescriptor, Project, TemplateBackend};

// Collection
pub use collect::{
    collect_app_templates, collect_global_templates, collect_source_files,
    default_source_excludes, default_source_extensions, SourceFiles,
};

// Filtering
pub use filter::{filter_templates, FilteredTemplates, TemplateFilterOptions};

// Scanning and classification
pub use classify::{classify, ReferenceType};
pub use index::MatchIndex;
pub use scan::{build_corpus, scan_references, ReferenceScanner};

// Aggregation
pub use aggregate::{group_by_app, OwnedByApp, UsageTally};

// Builder API
pub use search::{SearchOutcome, SearchStats, TemplateSearch};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print_plain, write_plain};
