//! Command-line entry point.
//!
//! # Responsibility
//! - Parse flags, load sources, drive the core render and write the page.
//! - Keep policy out: filtering, rendering and degradation rules live in
//!   `folio_core`.

use folio_core::{
    bundled_site_profile, default_log_level, embed_resumes, fetch_animation, init_logging,
    load_site_profile, render_page, Catalog, Category, FilterQuery, HttpVisitSource, PageExtras,
    PageState, Theme, VisitCounter,
};
use log::info;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

const DEFAULT_OUT_PATH: &str = "dist/index.html";

fn usage() -> String {
    format!(
        "folio — render a personal portfolio page into a single HTML file\n\n\
USAGE:\n\
  folio [--projects FILE] [--site FILE] [--out FILE|-]\n\
        [--search TEXT] [--category LABEL]...\n\
        [--light] [--offline]\n\
        [--log-dir DIR] [--log-level LEVEL]\n\n\
OPTIONS:\n\
  --projects FILE    project catalog JSON (default: the bundled catalog)\n\
  --site FILE        site profile JSON (default: the bundled profile)\n\
  --out FILE         output path, `-` writes to stdout (default: {DEFAULT_OUT_PATH})\n\
  --search TEXT      keep projects whose title or stack contains TEXT\n\
  --category LABEL   keep projects in LABEL; repeat to allow several\n\
  --light            render the light color scheme\n\
  --offline          skip the animation and visit-count fetches\n\
  --log-dir DIR      write rolling logs into DIR\n\
  --log-level LEVEL  trace|debug|info|warn|error (default depends on build)\n\
  -h, --help         print this help\n\
  --version          print the version\n\n\
CATEGORIES:\n\
  {}\n",
        category_labels()
    )
}

fn category_labels() -> String {
    Category::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum OutputTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliConfig {
    projects: Option<PathBuf>,
    site: Option<PathBuf>,
    out: OutputTarget,
    search: String,
    categories: BTreeSet<Category>,
    light: bool,
    offline: bool,
    log_dir: Option<PathBuf>,
    log_level: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            projects: None,
            site: None,
            out: OutputTarget::File(PathBuf::from(DEFAULT_OUT_PATH)),
            search: String::new(),
            categories: BTreeSet::new(),
            light: false,
            offline: false,
            log_dir: None,
            log_level: None,
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();

    let mut i = 0usize;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--projects" => {
                i += 1;
                let value = args.get(i).ok_or("--projects requires FILE")?;
                config.projects = Some(PathBuf::from(value));
            }
            "--site" => {
                i += 1;
                let value = args.get(i).ok_or("--site requires FILE")?;
                config.site = Some(PathBuf::from(value));
            }
            "--out" => {
                i += 1;
                let value = args.get(i).ok_or("--out requires FILE or `-`")?;
                config.out = if value == "-" {
                    OutputTarget::Stdout
                } else {
                    OutputTarget::File(PathBuf::from(value))
                };
            }
            "--search" => {
                i += 1;
                let value = args.get(i).ok_or("--search requires TEXT")?;
                config.search = value.clone();
            }
            "--category" => {
                i += 1;
                let value = args.get(i).ok_or("--category requires LABEL")?;
                let category = Category::parse(value).ok_or_else(|| {
                    format!(
                        "unknown category `{value}`; expected one of: {}",
                        category_labels()
                    )
                })?;
                config.categories.insert(category);
            }
            "--light" => config.light = true,
            "--offline" => config.offline = true,
            "--log-dir" => {
                i += 1;
                let value = args.get(i).ok_or("--log-dir requires DIR")?;
                config.log_dir = Some(PathBuf::from(value));
            }
            "--log-level" => {
                i += 1;
                let value = args.get(i).ok_or("--log-level requires LEVEL")?;
                config.log_level = Some(value.clone());
            }
            other => return Err(format!("unknown argument `{other}`\n\n{}", usage())),
        }
        i += 1;
    }

    Ok(config)
}

fn setup_logging(config: &CliConfig) -> Result<(), String> {
    let Some(log_dir) = &config.log_dir else {
        return Ok(());
    };
    let log_dir = if log_dir.is_absolute() {
        log_dir.clone()
    } else {
        std::env::current_dir()
            .map_err(|err| format!("cannot resolve current directory: {err}"))?
            .join(log_dir)
    };
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &log_dir.to_string_lossy())
}

fn run(config: &CliConfig) -> Result<(), String> {
    setup_logging(config)?;

    let profile = match &config.site {
        Some(path) => load_site_profile(path).map_err(|err| err.to_string())?,
        None => bundled_site_profile().clone(),
    };
    let catalog = match &config.projects {
        Some(path) => Catalog::load_from_path(path).map_err(|err| err.to_string())?,
        None => Catalog::bundled().clone(),
    };

    // Resume paths resolve next to the profile that declared them.
    let base_dir = config
        .site
        .as_deref()
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let state = PageState {
        theme: if config.light { Theme::Light } else { Theme::Dark },
        query: FilterQuery {
            search: config.search.clone(),
            categories: config.categories.clone(),
        },
    };

    let mut extras = PageExtras::new();
    extras.resumes = embed_resumes(&profile.resumes, &base_dir);
    if !config.offline {
        if let Some(url) = &profile.services.animation_url {
            extras.animation = fetch_animation(url);
        }
        if let Some(url) = &profile.services.visits_url {
            extras.visits = VisitCounter::new(HttpVisitSource::new(url)).current();
        }
    }

    let html = render_page(&profile, &catalog, &state, &extras);

    match &config.out {
        OutputTarget::Stdout => {
            std::io::stdout()
                .write_all(html.as_bytes())
                .map_err(|err| format!("failed to write page to stdout: {err}"))?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
                }
            }
            std::fs::write(path, &html)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            info!(
                "event=page_write module=cli status=ok path={} bytes={}",
                path.display(),
                html.len()
            );
        }
    }
    Ok(())
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print!("{}", usage());
        return;
    }
    if args.iter().any(|arg| arg == "--version") {
        println!("folio {}", folio_core::core_version());
        return;
    }

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, CliConfig, OutputTarget};
    use folio_core::Category;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults_render_everything_into_dist() {
        let config = parse_args(&[]).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(
            config.out,
            OutputTarget::File(PathBuf::from("dist/index.html"))
        );
        assert!(config.search.is_empty());
        assert!(config.categories.is_empty());
    }

    #[test]
    fn parses_filters_and_theme() {
        let config = parse_args(&args(&[
            "--search",
            "mqtt",
            "--category",
            "EV Systems",
            "--category",
            "Web / AI",
            "--light",
            "--offline",
        ]))
        .unwrap();
        assert_eq!(config.search, "mqtt");
        assert!(config.categories.contains(&Category::EvSystems));
        assert!(config.categories.contains(&Category::WebAi));
        assert!(config.light);
        assert!(config.offline);
    }

    #[test]
    fn repeated_category_flags_deduplicate() {
        let config =
            parse_args(&args(&["--category", "EV Systems", "--category", "EV Systems"])).unwrap();
        assert_eq!(config.categories.len(), 1);
    }

    #[test]
    fn unknown_category_lists_the_valid_labels() {
        let err = parse_args(&args(&["--category", "Space / Lasers"])).unwrap_err();
        assert!(err.contains("unknown category `Space / Lasers`"));
        assert!(err.contains("EV Systems"));
        assert!(err.contains("Web / AI"));
    }

    #[test]
    fn dash_out_selects_stdout() {
        let config = parse_args(&args(&["--out", "-"])).unwrap();
        assert_eq!(config.out, OutputTarget::Stdout);
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        let err = parse_args(&args(&["--search"])).unwrap_err();
        assert!(err.contains("--search requires TEXT"));
    }

    #[test]
    fn unknown_flag_is_rejected_with_usage() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("unknown argument `--frobnicate`"));
        assert!(err.contains("USAGE:"));
    }
}
