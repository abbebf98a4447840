//! Line-by-line reference scanning over the corpus.
//!
//! The corpus is every collected source file followed by every template file,
//! so templates are scanned for mentions of each other as well as being
//! mentioned by source files.
//!
//! Only matches found inside a template file become [`Reference`]s. A match
//! inside a non-template source file has no referencing template and is
//! dropped, so a template that is rendered from code but never included or
//! extended by another template is reported as unused. Whether source-file
//! mentions should count as usage is undecided; this module keeps the
//! template-only reference graph.
//!
//! Files are streamed one line at a time and closed before the next one is
//! opened. `\n`, `\r\n` and a lone `\r` all end a line. The first line that is
//! not valid UTF-8 aborts the scan.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::aggregate::UsageTally;
use crate::classify::classify;
use crate::error::{DjunusedError, DjunusedResult, IoResultExt};
use crate::index::MatchIndex;
use crate::template::{Reference, TemplateId, TemplateInfo, TemplateSearchResult};

/// Source files first, then the file of every template, in the given order.
/// No deduplication is performed.
pub fn build_corpus(source_files: &[PathBuf], templates: &[TemplateInfo]) -> Vec<PathBuf> {
    source_files
        .iter()
        .cloned()
        .chain(templates.iter().map(|t| t.file_path.clone()))
        .collect()
}

/// Scans the corpus built from `source_files` and `templates`.
pub fn scan_references(
    templates: &[TemplateInfo],
    source_files: &[PathBuf],
) -> DjunusedResult<TemplateSearchResult> {
    let corpus = build_corpus(source_files, templates);
    ReferenceScanner::new(templates)?.scan(&corpus)
}

/// Scanner bound to one template list.
pub struct ReferenceScanner<'a> {
    templates: &'a [TemplateInfo],
    index: MatchIndex,
    /// File path to the first template collected from it.
    by_file: HashMap<&'a Path, TemplateId>,
}

impl<'a> ReferenceScanner<'a> {
    pub fn new(templates: &'a [TemplateInfo]) -> DjunusedResult<Self> {
        let index = MatchIndex::build(templates)?;

        let mut by_file = HashMap::new();
        for (i, template) in templates.iter().enumerate() {
            by_file
                .entry(template.file_path.as_path())
                .or_insert(TemplateId(i));
        }

        Ok(Self {
            templates,
            index,
            by_file,
        })
    }

    /// Scans each corpus file in order and partitions the templates.
    pub fn scan(&self, corpus: &[PathBuf]) -> DjunusedResult<TemplateSearchResult> {
        info!(
            files = corpus.len(),
            templates = self.templates.len(),
            patterns = self.index.pattern_count(),
            "searching for template references"
        );

        let mut tally = UsageTally::new();
        for file in corpus {
            self.scan_file(file, &mut tally)?;
        }

        let result = tally.finish(self.templates);
        info!(
            used = result.used_templates.len(),
            unused = result.unused_templates.len(),
            references = result.reference_count(),
            "search complete"
        );
        Ok(result)
    }

    fn scan_file(&self, file: &Path, tally: &mut UsageTally) -> DjunusedResult<()> {
        let referencing = self.by_file.get(file).copied();
        let mut reader = BufReader::new(File::open(file).with_path(file)?);

        let mut chunk = Vec::new();
        let mut line_number = 0;
        loop {
            chunk.clear();
            if reader.read_until(b'\n', &mut chunk).with_path(file)? == 0 {
                break;
            }

            for raw in split_lines(&chunk) {
                line_number += 1;
                let line = std::str::from_utf8(raw)
                    .map_err(|_| DjunusedError::decode(file, line_number))?;

                // Source files are still decoded in full; their matches are dropped.
                let Some(referencing) = referencing else {
                    continue;
                };

                for matched in self.index.matches(line) {
                    let reference = Reference {
                        referencing_template: self.templates[referencing.0].clone(),
                        line_number,
                        line_text: line.trim().to_string(),
                        reference_type: classify(line),
                    };
                    tally.record(matched, &self.templates[matched.0], reference);
                }
            }
        }

        debug!(file = %file.display(), lines = line_number, "scanned");
        Ok(())
    }
}

/// Splits one `\n`-terminated chunk into lines, treating `\r\n`, a lone `\r`
/// and `\n` alike as line breaks. Terminators are not included.
///
/// `read_until` never separates a `\r` from the `\n` that follows it, so
/// splitting per chunk gives the same lines as splitting the whole file.
fn split_lines(chunk: &[u8]) -> Vec<&[u8]> {
    let (body, terminated) = match chunk.strip_suffix(b"\n") {
        Some(rest) => (rest.strip_suffix(b"\r").unwrap_or(rest), true),
        None => (chunk, false),
    };

    let mut lines: Vec<&[u8]> = body.split(|&b| b == b'\r').collect();
    // A trailing lone `\r` at end of file ends the last line; it does not open a new one.
    if !terminated && body.ends_with(b"\r") {
        lines.pop();
    }
    lines
}
