//! Accumulation of scan matches into the used/unused partition, and grouping
//! of results by owning application for presentation.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::template::{
    Reference, TemplateId, TemplateInfo, TemplateSearchResult, UsedTemplateInfo,
};

/// Collects references per template while a scan runs.
///
/// Entries are created on first match and keep that order.
#[derive(Debug, Default)]
pub struct UsageTally {
    slots: HashMap<TemplateId, usize>,
    used: Vec<(TemplateId, UsedTemplateInfo)>,
}

impl UsageTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `reference` to the entry for the matched template.
    pub fn record(&mut self, id: TemplateId, template: &TemplateInfo, reference: Reference) {
        let slot = *self.slots.entry(id).or_insert_with(|| {
            self.used.push((id, UsedTemplateInfo::new(template.clone())));
            self.used.len() - 1
        });
        self.used[slot].1.references.push(reference);
    }

    pub fn is_used(&self, id: TemplateId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Splits `templates` into used and unused. Unused keep collection order.
    pub fn finish(self, templates: &[TemplateInfo]) -> TemplateSearchResult {
        let unused_templates = templates
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.slots.contains_key(&TemplateId(*i)))
            .map(|(_, t)| t.clone())
            .collect();

        TemplateSearchResult {
            unused_templates,
            used_templates: self.used.into_iter().map(|(_, u)| u).collect(),
        }
    }
}

/// Anything that can be attributed to an application.
pub trait OwnedByApp {
    /// Owning application name, or `"global"`.
    fn app_label(&self) -> &str;
}

impl OwnedByApp for TemplateInfo {
    fn app_label(&self) -> &str {
        TemplateInfo::app_label(self)
    }
}

impl OwnedByApp for UsedTemplateInfo {
    fn app_label(&self) -> &str {
        self.template.app_label()
    }
}

/// Groups items by application label, in order of first appearance.
pub fn group_by_app<T: OwnedByApp>(items: &[T]) -> IndexMap<&str, Vec<&T>> {
    let mut groups: IndexMap<&str, Vec<&T>> = IndexMap::new();
    for item in items {
        groups.entry(item.app_label()).or_default().push(item);
    }
    groups
}
