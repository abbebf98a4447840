//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use djunused_core::prelude::*;
//! ```

// Core types
pub use crate::error::{DjunusedError, DjunusedResult};
pub use crate::template::{Reference, TemplateInfo, TemplateKey, TemplateSearchResult, UsedTemplateInfo};
pub use crate::classify::ReferenceType;

// Project setup
pub use crate::config::{load_config, ProjectConfig};
pub use crate::project::Project;

// Builder API
pub use crate::search::{SearchOutcome, TemplateSearch};
pub use crate::filter::TemplateFilterOptions;

// Reporting
pub use crate::report::print_plain;
