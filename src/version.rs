//! Marketing version extraction.
//!
//! Scans project configuration for a semantic version string. Ordered,
//! first-match-wins: `project.yml` MARKETING_VERSION, then any
//! `Info.plist` bundle short version, then a hardcoded default.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Version reported when no project file declares one.
pub const DEFAULT_VERSION: &str = "1.0.0";

static MARKETING_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"MARKETING_VERSION:\s*["']?(\d+\.\d+\.\d+)"#).expect("static regex")
});

static BUNDLE_SHORT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<key>CFBundleShortVersionString</key>\s*<string>(\d+\.\d+\.\d+)</string>")
        .expect("static regex")
});

/// Extract the current marketing version for the app under `ios_path`.
///
/// Pure and read-only; unreadable files are skipped.
pub fn current_version(repo_root: &Path, ios_path: &str) -> String {
    let base = repo_root.join(ios_path);

    if let Some(version) = version_from_project_yml(&base) {
        return version;
    }
    if let Some(version) = version_from_info_plists(&base) {
        return version;
    }

    DEFAULT_VERSION.to_string()
}

fn version_from_project_yml(base: &Path) -> Option<String> {
    let content = std::fs::read_to_string(base.join("project.yml")).ok()?;
    MARKETING_VERSION
        .captures(&content)
        .map(|caps| caps[1].to_string())
}

fn version_from_info_plists(base: &Path) -> Option<String> {
    for entry in WalkDir::new(base)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if entry.file_name() != "Info.plist" {
            continue;
        }
        let path_str = entry.path().to_string_lossy();
        if path_str.contains(".build") || path_str.contains("DerivedData") {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        if let Some(caps) = BUNDLE_SHORT_VERSION.captures(&content) {
            return Some(caps[1].to_string());
        }
    }

    None
}
