//! Precomputed lookup from line text to the templates it mentions.
//!
//! A template matches a line when its full `template_path` or its basename
//! occurs in the line. The basename is a suffix of the full path, so the test
//! reduces to "basename occurs". Distinct basenames are compiled once into an
//! Aho-Corasick automaton; each line is searched a single time with
//! overlapping matches enabled, and every matching basename expands to the
//! templates that share it.
//!
//! Performance characteristics:
//! - Build: O(total basename length)
//! - Per line: O(line length + matches), then O(k log k) over the k candidates

use aho_corasick::AhoCorasick;
use indexmap::IndexMap;

use crate::error::{DjunusedError, DjunusedResult};
use crate::template::{TemplateId, TemplateInfo};

/// Basename index over a fixed template list.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    automaton: AhoCorasick,
    /// Templates sharing each pattern's basename, in collection order.
    candidates: Vec<Vec<TemplateId>>,
}

impl MatchIndex {
    pub fn build(templates: &[TemplateInfo]) -> DjunusedResult<Self> {
        let mut by_basename: IndexMap<&str, Vec<TemplateId>> = IndexMap::new();
        for (i, template) in templates.iter().enumerate() {
            let basename = template.basename();
            if basename.is_empty() {
                continue;
            }
            by_basename.entry(basename).or_default().push(TemplateId(i));
        }

        let automaton = AhoCorasick::new(by_basename.keys().copied())
            .map_err(|e| DjunusedError::index(e.to_string()))?;

        Ok(Self {
            automaton,
            candidates: by_basename.into_values().collect(),
        })
    }

    /// Templates mentioned by `line`, in collection order.
    pub fn matches(&self, line: &str) -> Vec<TemplateId> {
        if self.candidates.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<TemplateId> = self
            .automaton
            .find_overlapping_iter(line)
            .flat_map(|m| self.candidates[m.pattern().as_usize()].iter().copied())
            .collect();
        hits.sort_unstable();
        hits.dedup();
        hits
    }

    /// Number of distinct basenames indexed.
    pub fn pattern_count(&self) -> usize {
        self.candidates.len()
    }
}

/// One template against one line, without the index.
#[cfg(test)]
pub(crate) fn template_matches_line(template: &TemplateInfo, line: &str) -> bool {
    line.contains(template.template_path.as_str()) || line.contains(template.basename())
}
