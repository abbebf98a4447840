//! Exclusion of collected templates by owning application or path prefix.

use std::collections::HashSet;

use crate::template::TemplateInfo;

/// Exclusions requested by the caller. Names that match nothing are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilterOptions {
    /// Application names whose templates are dropped.
    pub excluded_apps: Option<Vec<String>>,
    /// Template path prefixes to drop.
    ///
    /// This is a plain string prefix test: `"dir2"` also drops `"dir20/x.html"`.
    pub excluded_template_dirs: Option<Vec<String>>,
}

impl TemplateFilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluded_apps(mut self, apps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded_apps = Some(apps.into_iter().map(Into::into).collect());
        self
    }

    pub fn excluded_template_dirs(
        mut self,
        dirs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.excluded_template_dirs = Some(dirs.into_iter().map(Into::into).collect());
        self
    }
}

/// Templates left after filtering, with per-filter removal counts.
#[derive(Debug, Clone, Default)]
pub struct FilteredTemplates {
    pub templates: Vec<TemplateInfo>,
    pub excluded_by_app: usize,
    pub excluded_by_dir: usize,
}

/// Applies the app filter, then the directory filter.
///
/// Global templates are never removed by the app filter.
pub fn filter_templates(
    templates: Vec<TemplateInfo>,
    options: &TemplateFilterOptions,
) -> FilteredTemplates {
    let mut templates = templates;

    let mut excluded_by_app = 0;
    if let Some(apps) = options.excluded_apps.as_ref().filter(|a| !a.is_empty()) {
        let apps: HashSet<&str> = apps.iter().map(String::as_str).collect();
        let before = templates.len();
        templates.retain(|t| {
            t.owning_app
                .as_ref()
                .map_or(true, |app| !apps.contains(app.name.as_str()))
        });
        excluded_by_app = before - templates.len();
    }

    let mut excluded_by_dir = 0;
    if let Some(dirs) = options.excluded_template_dirs.as_ref().filter(|d| !d.is_empty()) {
        let before = templates.len();
        templates.retain(|t| !dirs.iter().any(|d| t.template_path.starts_with(d.as_str())));
        excluded_by_dir = before - templates.len();
    }

    FilteredTemplates {
        templates,
        excluded_by_app,
        excluded_by_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::AppDescriptor;
    use std::sync::Arc;

    fn fixture() -> (TemplateInfo, TemplateInfo, TemplateInfo) {
        let app1 = Arc::new(AppDescriptor::new("app1", "/p/app1"));
        let app2 = Arc::new(AppDescriptor::new("app2", "/p/app2"));
        (
            TemplateInfo::new("dir1/template1.html", "dir1/template1.html", Some(app1)),
            TemplateInfo::new("dir2/template2.html", "dir2/template2.html", Some(app2)),
            TemplateInfo::new("dir3/template3.html", "dir3/template3.html", None),
        )
    }

    fn all() -> Vec<TemplateInfo> {
        let (t1, t2, t3) = fixture();
        vec![t1, t2, t3]
    }

    #[test]
    fn test_filter_templates_excluded_apps() {
        let (t1, t2, t3) = fixture();
        let out = filter_templates(all(), &TemplateFilterOptions::new().excluded_apps(["app1"]));

        assert_eq!(out.templates, vec![t2, t3]);
        assert!(!out.templates.contains(&t1));
        assert_eq!(out.excluded_by_app, 1);
        assert_eq!(out.excluded_by_dir, 0);
    }

    #[test]
    fn test_filter_templates_excluded_dirs() {
        let (t1, t2, t3) = fixture();
        let out = filter_templates(
            all(),
            &TemplateFilterOptions::new().excluded_template_dirs(["dir2"]),
        );

        assert_eq!(out.templates, vec![t1, t3]);
        assert!(!out.templates.contains(&t2));
        assert_eq!(out.excluded_by_dir, 1);
    }

    #[test]
    fn test_filter_templates_excluded_apps_and_dirs() {
        let (_, _, t3) = fixture();
        let out = filter_templates(
            all(),
            &TemplateFilterOptions::new()
                .excluded_apps(["app1"])
                .excluded_template_dirs(["dir2"]),
        );

        assert_eq!(out.templates, vec![t3]);
        assert_eq!(out.excluded_by_app, 1);
        assert_eq!(out.excluded_by_dir, 1);
    }

    #[test]
    fn test_global_templates_survive_any_app_filter() {
        let out = filter_templates(
            all(),
            &TemplateFilterOptions::new().excluded_apps(["app1", "app2", "global", ""]),
        );
        assert_eq!(out.templates.len(), 1);
        assert!(out.templates[0].owning_app.is_none());
    }

    #[test]
    fn test_dir_prefix_is_not_segment_aware() {
        let templates = vec![
            TemplateInfo::new("a", "dir2/a.html", None),
            TemplateInfo::new("b", "dir20/b.html", None),
            TemplateInfo::new("c", "other/dir2/c.html", None),
        ];
        let out = filter_templates(
            templates,
            &TemplateFilterOptions::new().excluded_template_dirs(["dir2"]),
        );
        let left: Vec<_> = out.templates.iter().map(|t| t.template_path.as_str()).collect();
        assert_eq!(left, vec!["other/dir2/c.html"]);
    }

    #[test]
    fn test_unknown_names_are_noops() {
        let out = filter_templates(
            all(),
            &TemplateFilterOptions::new()
                .excluded_apps(["nope"])
                .excluded_template_dirs(["nowhere/"]),
        );
        assert_eq!(out.templates, all());
        assert_eq!(out.excluded_by_app + out.excluded_by_dir, 0);
    }

    #[test]
    fn test_no_options_keeps_everything() {
        let out = filter_templates(all(), &TemplateFilterOptions::default());
        assert_eq!(out.templates.len(), 3);
    }
}
