//! Context gathering for prompt generation.
//!
//! Collects a bounded-size blob of app source code and any existing store
//! metadata. Everything here is read-only and failure-tolerant: unreadable
//! files are skipped and missing directories yield empty results.

use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Maximum number of source files fed into a prompt.
pub const MAX_SOURCE_FILES: usize = 30;

/// Character budget for the concatenated source blob.
pub const MAX_CONTEXT_CHARS: usize = 50_000;

/// Metadata files probed in the fastlane metadata directory.
const METADATA_FILES: [&str; 3] = ["name.txt", "subtitle.txt", "keywords.txt"];

static SWIFT_SOURCES: LazyLock<GlobMatcher> = LazyLock::new(|| {
    Glob::new("**/*.swift")
        .expect("static glob pattern")
        .compile_matcher()
});

/// Existing App Store metadata read from a fastlane metadata directory.
#[derive(Debug, Clone, Default)]
pub struct StoreMetadata {
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub keywords: Option<String>,
}

impl StoreMetadata {
    /// True when no field was found.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.subtitle.is_none() && self.keywords.is_none()
    }
}

/// Collect app source files under `base`, capped at [`MAX_SOURCE_FILES`].
///
/// Test and build artifacts are excluded by path-substring match, the same
/// patterns Xcode trees use (`Tests`, `build`, `.build`). Traversal order is
/// sorted so repeated runs see the same files.
pub fn collect_source_files(base: &Path) -> Vec<PathBuf> {
    if !base.is_dir() {
        return Vec::new();
    }

    WalkDir::new(base)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let rel = entry.path().strip_prefix(base).unwrap_or(entry.path());
            let rel_str = rel.to_string_lossy();
            if rel_str.contains("Tests") || rel_str.contains("build") {
                return None;
            }
            if SWIFT_SOURCES.is_match(rel) {
                Some(entry.into_path())
            } else {
                None
            }
        })
        .take(MAX_SOURCE_FILES)
        .collect()
}

/// Read and concatenate file contents up to a character budget.
///
/// Each file is prefixed with a `// File:` header. Files that fail to read
/// are skipped; the first file that would overflow the budget stops the
/// concatenation.
pub fn read_concatenated(files: &[PathBuf], max_chars: usize) -> String {
    let mut sections = Vec::new();
    let mut total_chars = 0;

    for path in files {
        let Ok(content) = std::fs::read_to_string(path) else {
            continue;
        };
        let len = content.chars().count();
        if total_chars + len > max_chars {
            break;
        }
        sections.push(format!("// File: {}\n{}\n", path.display(), content));
        total_chars += len;
    }

    sections.join("\n")
}

/// Read existing store metadata, probing candidate directories in order.
///
/// The app-specific fastlane directory wins over the repo-root one; the
/// first directory yielding any non-empty field is used. No directory at
/// all yields an empty record, not an error.
pub fn existing_metadata(repo_root: &Path, ios_path: &str) -> StoreMetadata {
    let candidates = [
        repo_root.join(ios_path).join("fastlane/metadata/en-US"),
        repo_root.join("fastlane/metadata/en-US"),
    ];

    for dir in &candidates {
        if !dir.is_dir() {
            continue;
        }
        let metadata = read_metadata_dir(dir);
        if !metadata.is_empty() {
            return metadata;
        }
    }

    StoreMetadata::default()
}

fn read_metadata_dir(dir: &Path) -> StoreMetadata {
    let mut fields = METADATA_FILES.iter().map(|file| {
        std::fs::read_to_string(dir.join(file))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    });

    StoreMetadata {
        name: fields.next().flatten(),
        subtitle: fields.next().flatten(),
        keywords: fields.next().flatten(),
    }
}
