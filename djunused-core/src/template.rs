//! Template data model: collected templates, references between them, and the
//! used/unused partition a search produces.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::classify::ReferenceType;
use crate::project::AppDescriptor;

/// Label used for templates that come from global search directories.
pub const GLOBAL_LABEL: &str = "global";

/// A template file found by the collectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Location on disk.
    pub file_path: PathBuf,
    /// Path relative to its template root, `/`-separated, no leading slash.
    pub template_path: String,
    /// Owning application, `None` for global templates.
    pub owning_app: Option<Arc<AppDescriptor>>,
}

impl TemplateInfo {
    pub fn new(
        file_path: impl Into<PathBuf>,
        template_path: impl Into<String>,
        owning_app: Option<Arc<AppDescriptor>>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            template_path: template_path.into(),
            owning_app,
        }
    }

    /// Owning application name, or `"global"`.
    pub fn app_label(&self) -> &str {
        self.owning_app
            .as_deref()
            .map_or(GLOBAL_LABEL, |app| app.name.as_str())
    }

    /// Last `/`-separated segment of the template path.
    pub fn basename(&self) -> &str {
        self.template_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.template_path)
    }

    pub fn key(&self) -> TemplateKey {
        TemplateKey {
            app: self.owning_app.as_ref().map(|a| a.name.clone()),
            template_path: self.template_path.clone(),
        }
    }
}

/// Composite lookup key: owning application name plus template path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateKey {
    pub app: Option<String>,
    pub template_path: String,
}

impl TemplateKey {
    pub fn global(template_path: impl Into<String>) -> Self {
        Self {
            app: None,
            template_path: template_path.into(),
        }
    }

    pub fn app(app: impl Into<String>, template_path: impl Into<String>) -> Self {
        Self {
            app: Some(app.into()),
            template_path: template_path.into(),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.app.as_deref().unwrap_or(GLOBAL_LABEL),
            self.template_path
        )
    }
}

/// Position of a template in the collected list. Stable for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(pub usize);

/// One occurrence of a template's path inside another template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Template whose file contains the matching line.
    pub referencing_template: TemplateInfo,
    /// 1-based, relative to the start of that file.
    pub line_number: usize,
    /// The matching line, trimmed.
    pub line_text: String,
    pub reference_type: ReferenceType,
}

/// A template with at least one reference, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedTemplateInfo {
    pub template: TemplateInfo,
    pub references: Vec<Reference>,
}

impl UsedTemplateInfo {
    pub fn new(template: TemplateInfo) -> Self {
        Self {
            template,
            references: Vec::new(),
        }
    }
}

/// Outcome of a scan. Every scanned template lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSearchResult {
    pub unused_templates: Vec<TemplateInfo>,
    pub used_templates: Vec<UsedTemplateInfo>,
}

impl TemplateSearchResult {
    pub fn has_unused(&self) -> bool {
        !self.unused_templates.is_empty()
    }

    /// Total number of templates accounted for.
    pub fn total(&self) -> usize {
        self.unused_templates.len() + self.used_templates.len()
    }

    /// Looks up a used template by key. With duplicate keys the first
    /// collected template wins.
    pub fn used(&self, key: &TemplateKey) -> Option<&UsedTemplateInfo> {
        self.used_templates.iter().find(|u| u.template.key() == *key)
    }

    pub fn is_unused(&self, key: &TemplateKey) -> bool {
        self.unused_templates.iter().any(|t| t.key() == *key)
    }

    /// Total number of references recorded.
    pub fn reference_count(&self) -> usize {
        self.used_templates.iter().map(|u| u.references.len()).sum()
    }
}
