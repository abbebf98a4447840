//! Template and source file discovery.
//!
//! ```text
//! ┌─────────────────────┐     ┌─────────────────────┐
//! │    templates.rs     │     │     sources.rs      │
//! │  ─────────────────  │     │  ─────────────────  │
//! │  global DIRS and    │     │  in-project app     │
//! │  <app>/templates    │     │  source files       │
//! └──────────┬──────────┘     └──────────┬──────────┘
//!            │                           │
//!            └───────────┬───────────────┘
//!                        ▼
//!                 scan corpus (scan.rs)
//! ```
//!
//! Walks are sequential and sorted by file name, so two runs over an
//! unchanged tree produce identical lists. A directory that does not exist
//! contributes nothing.

pub mod sources;
pub mod templates;

pub use sources::{
    collect_source_files, default_source_excludes, default_source_extensions, SourceFiles,
    DEFAULT_SOURCE_EXTENSIONS,
};
pub use templates::{collect_app_templates, collect_global_templates, template_path};
