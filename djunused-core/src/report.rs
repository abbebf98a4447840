//! Output formatting: the human-readable report.
//!
//! Rendering only reads a [`TemplateSearchResult`]; nothing here takes part in
//! deciding what is used.

use std::io::{self, Write};

use colored::Colorize;

use crate::aggregate::group_by_app;
use crate::template::{Reference, TemplateSearchResult};

/// Writes unused templates grouped by application, then used templates with
/// their references.
pub fn write_plain<W: Write>(out: &mut W, result: &TemplateSearchResult) -> io::Result<()> {
    if result.unused_templates.is_empty() {
        writeln!(out, "{}", "No unused templates found.".green())?;
    } else {
        writeln!(out, "{}", "Unused templates found:".red())?;
        for (app, templates) in group_by_app(&result.unused_templates) {
            writeln!(out)?;
            writeln!(out, "{}", format!("App: {}", app).yellow())?;
            for template in templates {
                writeln!(out, "{}", format!("- {}", template.template_path).red())?;
            }
        }
    }

    if !result.used_templates.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Used templates:".green())?;
        for (app, used) in group_by_app(&result.used_templates) {
            writeln!(out)?;
            writeln!(out, "{}", format!("App: {}", app).yellow())?;
            for entry in used {
                writeln!(out, "- {}", entry.template.template_path)?;
                for reference in &entry.references {
                    write_reference(out, reference)?;
                }
            }
        }
    }

    Ok(())
}

fn write_reference<W: Write>(out: &mut W, reference: &Reference) -> io::Result<()> {
    writeln!(
        out,
        "    {} {}, line {}: {}",
        format!("[{}]", reference.reference_type).cyan(),
        reference.referencing_template.template_path,
        reference.line_number,
        reference.line_text
    )
}

/// Prints the report to stdout.
pub fn print_plain(result: &TemplateSearchResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_plain(&mut lock, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ReferenceType;
    use crate::project::AppDescriptor;
    use crate::template::{TemplateInfo, UsedTemplateInfo};
    use std::sync::Arc;

    fn render(result: &TemplateSearchResult) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_plain(&mut buf, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let blog = Arc::new(AppDescriptor::new("blog", "/p/blog"));
        let page = TemplateInfo::new("/p/blog/templates/blog/page.html", "blog/page.html", Some(blog));
        let base = TemplateInfo::new("/p/templates/base.html", "base.html", None);

        let mut used = UsedTemplateInfo::new(base);
        used.references.push(Reference {
            referencing_template: page.clone(),
            line_number: 2,
            line_text: "{% extends \"base.html\" %}".into(),
            reference_type: ReferenceType::Extend,
        });

        let result = TemplateSearchResult {
            unused_templates: vec![page],
            used_templates: vec![used],
        };

        let expected = "\
Unused templates found:

App: blog
- blog/page.html

Used templates:

App: global
- base.html
    [extend] blog/page.html, line 2: {% extends \"base.html\" %}
";
        assert_eq!(render(&result), expected);
    }

    #[test]
    fn test_report_nothing_unused() {
        let result = TemplateSearchResult::default();
        assert_eq!(render(&result), "No unused templates found.\n");
    }
}
