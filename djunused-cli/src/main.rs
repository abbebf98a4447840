//! djunused CLI - finds Django templates that nothing references.
//!
//! Usage: `djunused [templates] [--excluded-apps APP...] [--excluded-template-dirs DIR...]`
//!
//! Exit codes:
//! - 0: no unused templates
//! - 1: at least one unused template, an unsupported search type, or a fatal error
//! - 2: internal panic

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

use djunused_core::{
    init_structured_logging, load_config, print_plain, Project, TemplateFilterOptions,
    TemplateSearch, MANIFEST_FILE,
};

/// Search types accepted on the command line.
const SUPPORTED_TYPES: &[&str] = &["templates"];

#[derive(Parser, Debug)]
#[command(author, version, about = "Lists all unused template files.")]
pub struct Cli {
    /// What to find: templates (default), views, media
    #[arg(default_value = "templates")]
    unused_type: String,

    /// Project directory containing djunused.toml
    #[arg(long, default_value = ".")]
    project: String,

    /// List of apps to exclude from the search
    #[arg(long, num_args = 0..)]
    excluded_apps: Option<Vec<String>>,

    /// List of template directories to exclude from the search
    #[arg(long, num_args = 0..)]
    excluded_template_dirs: Option<Vec<String>>,

    /// Log progress to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn filter_options(&self) -> TemplateFilterOptions {
        TemplateFilterOptions {
            excluded_apps: self.excluded_apps.clone(),
            excluded_template_dirs: self.excluded_template_dirs.clone(),
        }
    }
}

fn is_supported_type(unused_type: &str) -> bool {
    SUPPORTED_TYPES.contains(&unused_type)
}

fn invalid_type_message(unused_type: &str) -> String {
    format!(
        "{} is not a valid parameter. Valid parameters are templates, views, and media.",
        unused_type
    )
}

/// Reads the manifest in `dir` and resolves it against the absolute directory.
fn load_project(dir: &Path) -> Result<Project> {
    let dir: PathBuf = dir
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", dir.display()))?;

    let config = load_config(&dir)
        .with_context(|| format!("Failed to load {}", dir.join(MANIFEST_FILE).display()))?
        .ok_or_else(|| anyhow!("No {} found in {}", MANIFEST_FILE, dir.display()))?;

    Ok(Project::from_config(config, &dir))
}

/// Runs one invocation and returns the process exit code.
fn run(cli: &Cli) -> Result<i32> {
    if !is_supported_type(&cli.unused_type) {
        eprintln!("{}", invalid_type_message(&cli.unused_type));
        return Ok(1);
    }

    let start = Instant::now();

    let project = load_project(Path::new(&cli.project))?;
    tracing::info!(base_dir = %project.base_dir.display(), apps = project.apps.len(), "project loaded");

    let outcome = TemplateSearch::new(project)
        .with_filter(cli.filter_options())
        .run()
        .context("Template search failed")?;

    print_plain(&outcome.result).context("Failed to write report")?;

    println!();
    println!("Finished in {:.2} seconds.", start.elapsed().as_secs_f64());

    // CI-friendly exit code
    Ok(if outcome.has_unused() { 1 } else { 0 })
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] djunused internal error: {}", info);
        std::process::exit(2);
    }));

    let cli = Cli::parse();

    // JSON to stderr, respects RUST_LOG
    init_structured_logging(cli.verbose);

    let code = run(&cli)?;
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_temp_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir()
            .join("djunused_cli_test")
            .join(format!("{}_{}_{}", name, std::process::id(), id));
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir).ok();
        }
        fs::create_dir_all(&temp_dir).unwrap();
        temp_dir
    }

    // --- argument parsing ---

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["djunused"]).unwrap();
        assert_eq!(cli.unused_type, "templates");
        assert_eq!(cli.project, ".");
        assert!(cli.excluded_apps.is_none());
        assert!(cli.excluded_template_dirs.is_none());
        assert_eq!(cli.filter_options(), TemplateFilterOptions::default());
    }

    #[test]
    fn test_exclusion_flags() {
        let cli = Cli::try_parse_from([
            "djunused",
            "templates",
            "--excluded-apps",
            "blog",
            "shop",
            "--excluded-template-dirs",
            "admin/",
        ])
        .unwrap();

        let options = cli.filter_options();
        assert_eq!(
            options.excluded_apps,
            Some(vec!["blog".to_string(), "shop".to_string()])
        );
        assert_eq!(options.excluded_template_dirs, Some(vec!["admin/".to_string()]));
    }

    #[test]
    fn test_exclusion_flag_without_values() {
        let cli = Cli::try_parse_from(["djunused", "--excluded-apps"]).unwrap();
        assert!(cli.excluded_apps.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_unsupported_type_is_parsed_then_rejected() {
        let cli = Cli::try_parse_from(["djunused", "views"]).unwrap();
        assert!(!is_supported_type(&cli.unused_type));
        assert!(is_supported_type("templates"));
        assert_eq!(
            invalid_type_message("views"),
            "views is not a valid parameter. Valid parameters are templates, views, and media."
        );
    }

    // --- project loading ---

    #[test]
    fn test_load_project_without_manifest() {
        let dir = create_temp_dir("no_manifest");
        let err = load_project(&dir).unwrap_err();
        assert!(err.to_string().contains(MANIFEST_FILE));
    }

    #[test]
    fn test_load_project_missing_dir() {
        let dir = create_temp_dir("gone").join("nope");
        assert!(load_project(&dir).is_err());
    }

    #[test]
    fn test_load_project_resolves_paths() {
        let dir = create_temp_dir("manifest");
        fs::write(
            dir.join(MANIFEST_FILE),
            "[[apps]]\nname = \"blog\"\npath = \"blog\"\n\n[[templates]]\ndirs = [\"templates\"]\n",
        )
        .unwrap();

        let project = load_project(&dir).unwrap();
        let canonical = dir.canonicalize().unwrap();
        assert_eq!(project.base_dir, canonical);
        assert_eq!(project.apps[0].path, canonical.join("blog"));
        assert_eq!(project.backends[0].dirs, vec![canonical.join("templates")]);
    }

    #[test]
    fn test_load_project_malformed_manifest() {
        let dir = create_temp_dir("malformed");
        fs::write(dir.join(MANIFEST_FILE), "apps = 5\n").unwrap();
        assert!(load_project(&dir).is_err());
    }

    // --- exit codes ---

    fn cli_for(dir: &Path, extra: &[&str]) -> Cli {
        let project = dir.to_string_lossy().into_owned();
        let mut args = vec!["djunused"];
        args.extend_from_slice(extra);
        args.extend_from_slice(&["--project", project.as_str()]);
        Cli::try_parse_from(args).unwrap()
    }

    fn write_manifest_project(dir: &Path, base: &str, page: &str) {
        fs::create_dir_all(dir.join("templates")).unwrap();
        fs::create_dir_all(dir.join("blog/templates/blog")).unwrap();
        fs::write(dir.join("templates/base.html"), base).unwrap();
        fs::write(dir.join("blog/templates/blog/page.html"), page).unwrap();
        fs::write(
            dir.join(MANIFEST_FILE),
            "[[apps]]\nname = \"blog\"\npath = \"blog\"\n\n[[templates]]\ndirs = [\"templates\"]\n",
        )
        .unwrap();
    }

    #[test]
    fn test_exit_code_unsupported_type() {
        let dir = create_temp_dir("exit_type");
        assert_eq!(run(&cli_for(&dir, &["media"])).unwrap(), 1);
    }

    #[test]
    fn test_exit_code_unused_found() {
        let dir = create_temp_dir("exit_unused");
        write_manifest_project(&dir, "<html></html>\n", "{% extends 'base.html' %}\n");
        assert_eq!(run(&cli_for(&dir, &[])).unwrap(), 1);
    }

    #[test]
    fn test_exit_code_nothing_unused() {
        let dir = create_temp_dir("exit_clean");
        write_manifest_project(
            &dir,
            "{% include 'blog/page.html' %}\n",
            "{% extends 'base.html' %}\n",
        );
        assert_eq!(run(&cli_for(&dir, &["templates"])).unwrap(), 0);
    }

    #[test]
    fn test_exit_code_excluded_app_clears_unused() {
        let dir = create_temp_dir("exit_excluded");
        write_manifest_project(&dir, "{# base.html #}\n", "orphan\n");
        assert_eq!(run(&cli_for(&dir, &[])).unwrap(), 1);
        assert_eq!(run(&cli_for(&dir, &["--excluded-apps", "blog"])).unwrap(), 0);
    }

    #[test]
    fn test_missing_manifest_is_error() {
        let dir = create_temp_dir("exit_no_manifest");
        assert!(run(&cli_for(&dir, &[])).is_err());
    }
}
