//! Output path resolution for generated metadata files.
//!
//! The destination is chosen by an ordered fallback chain: the app-specific
//! fastlane directory wins when it exists, otherwise the repo-root one. The
//! final default is the repo-root layout even when nothing exists yet (the
//! writer creates the directories).

use std::path::{Path, PathBuf};

/// Relative metadata directory inside a fastlane root.
const METADATA_SUBDIR: &str = "metadata/en-US";

/// Resolve the destination for a metadata file such as `description.txt`.
pub fn resolve_metadata_path(repo_root: &Path, ios_path: &str, filename: &str) -> PathBuf {
    let candidates = [
        repo_root.join(ios_path).join("fastlane"),
        repo_root.join("fastlane"),
    ];

    for fastlane_root in &candidates {
        if fastlane_root.is_dir() {
            return fastlane_root.join(METADATA_SUBDIR).join(filename);
        }
    }

    repo_root
        .join("fastlane")
        .join(METADATA_SUBDIR)
        .join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn prefers_app_specific_fastlane_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("ios/fastlane")).unwrap();
        std::fs::create_dir_all(temp.path().join("fastlane")).unwrap();

        let path = resolve_metadata_path(temp.path(), "ios", "description.txt");
        assert_eq!(
            path,
            temp.path().join("ios/fastlane/metadata/en-US/description.txt")
        );
    }

    #[test]
    fn falls_back_to_repo_root_fastlane() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("fastlane")).unwrap();

        let path = resolve_metadata_path(temp.path(), "ios", "release_notes.txt");
        assert_eq!(
            path,
            temp.path().join("fastlane/metadata/en-US/release_notes.txt")
        );
    }

    #[test]
    fn defaults_to_repo_root_layout_when_nothing_exists() {
        let temp = TempDir::new().unwrap();

        let path = resolve_metadata_path(temp.path(), "ios", "description.txt");
        assert_eq!(
            path,
            temp.path().join("fastlane/metadata/en-US/description.txt")
        );
    }
}
