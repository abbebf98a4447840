//! Reference classification from the text of a matching line.

use std::fmt;

const INCLUDE_OPEN: &str = "{% include";
const EXTENDS_OPEN: &str = "{% extends";
const TAG_CLOSE: &str = "%}";

/// How a template is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    Include,
    Extend,
    Unknown,
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Extend => write!(f, "extend"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classifies a line by the template tags it contains.
///
/// The opening fragment and the closing `%}` are tested independently, so
/// they need not belong to the same tag. Include wins over Extend. A line
/// with no `%}` at all is Unknown.
pub fn classify(line: &str) -> ReferenceType {
    let line = line.trim();
    let closed = line.contains(TAG_CLOSE);

    if closed && line.contains(INCLUDE_OPEN) {
        ReferenceType::Include
    } else if closed && line.contains(EXTENDS_OPEN) {
        ReferenceType::Extend
    } else {
        ReferenceType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_reference() {
        assert_eq!(classify("{% include 'some_template.html' %}"), ReferenceType::Include);
        assert_eq!(
            classify("Some text before {% include 'partials/header.html' %} some text after"),
            ReferenceType::Include
        );
        assert_eq!(
            classify("{% include 'footer.html' %} and some trailing text"),
            ReferenceType::Include
        );
    }

    #[test]
    fn test_extend_reference() {
        assert_eq!(classify("{% extends 'base.html' %}"), ReferenceType::Extend);
        assert_eq!(
            classify("Text before {% extends 'layouts/main.html' %} text after"),
            ReferenceType::Extend
        );
        assert_eq!(
            classify("{% extends 'templates/master.html' %} trailing text"),
            ReferenceType::Extend
        );
    }

    #[test]
    fn test_unknown_reference() {
        assert_eq!(classify("{% block content %}"), ReferenceType::Unknown);
        assert_eq!(classify("{% load custom_tags %}"), ReferenceType::Unknown);
        assert_eq!(classify("{% comment 'this is a comment' %}"), ReferenceType::Unknown);
        assert_eq!(classify("This is just a plain line."), ReferenceType::Unknown);
        assert_eq!(classify("return render(request, 'blog/page.html')"), ReferenceType::Unknown);
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(classify("  {% include 'some_template.html' %}  "), ReferenceType::Include);
        assert_eq!(classify("\t{% extends 'base.html' %}\t"), ReferenceType::Extend);
        assert_eq!(classify("\n{% include 'footer.html' %}\n"), ReferenceType::Include);
    }

    #[test]
    fn test_partial_template_tag() {
        assert_eq!(classify("{% include"), ReferenceType::Unknown);
        assert_eq!(classify("{% extends"), ReferenceType::Unknown);
        assert_eq!(classify("{% include 'some_template.html'"), ReferenceType::Unknown);
        assert_eq!(classify("{% extends 'base.html'"), ReferenceType::Unknown);
    }

    #[test]
    fn test_include_takes_priority_over_extends() {
        assert_eq!(
            classify("{% extends 'base.html' %}{% include 'nav.html' %}"),
            ReferenceType::Include
        );
    }

    #[test]
    fn test_close_marker_from_another_tag() {
        // Opening and closing fragments are matched independently.
        assert_eq!(
            classify("{% include 'x.html' {% endblock %}"),
            ReferenceType::Include
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ReferenceType::Include.to_string(), "include");
        assert_eq!(ReferenceType::Extend.to_string(), "extend");
        assert_eq!(ReferenceType::Unknown.to_string(), "unknown");
    }
}
