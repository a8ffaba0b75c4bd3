//! Git command runner and history gathering for storesmith.
//!
//! Provides a safe wrapper around git commands with captured stdout/stderr
//! and structured error handling, plus the release-history queries the
//! release-notes pipeline needs. All git operations go through this module.

use crate::error::{Result, StoresmithError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Delimiter format for single-line commit records.
const LOG_FORMAT: &str = "--pretty=format:%H|%s|%b|%an|%ad";

/// How many recent commits to list when the tag range cannot be resolved.
const FALLBACK_COMMIT_COUNT: &str = "-50";

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// One commit parsed from the delimited log format.
///
/// All five fields are captured from the log line; the release-notes prompt
/// currently only reads the subject and date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct CommitRecord {
    pub hash: String,
    pub subject: String,
    pub body: String,
    pub author: String,
    pub date: String,
}

impl CommitRecord {
    /// One-line rendering for the release-notes prompt.
    pub fn summary_line(&self) -> String {
        format!("- {} ({})", self.subject, self.date)
    }
}

/// Changed files since a reference, partitioned by path prefix.
#[derive(Debug, Clone, Default)]
pub struct ChangedFiles {
    /// Paths under the iOS source tree.
    pub ios: Vec<String>,
    /// Paths under `backend/`.
    pub backend: Vec<String>,
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(StoresmithError::GitError)` - On non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            StoresmithError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(StoresmithError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// "Not inside a git repository" is reported as a clean user error rather
/// than a git failure, since it means the command was run from the wrong
/// place.
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            StoresmithError::UserError(format!(
                "failed to execute git: {} (is git installed?)",
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(PathBuf::from(&git_output.stdout))
    } else if git_output.stderr.contains("not a git repository") {
        Err(StoresmithError::UserError(
            "not inside a git repository. Run this command from within the app repository."
                .to_string(),
        ))
    } else {
        Err(StoresmithError::UserError(format!(
            "git rev-parse failed: {}",
            if git_output.stderr.is_empty() {
                &git_output.stdout
            } else {
                &git_output.stderr
            }
        )))
    }
}

/// Get the most recent release tag.
///
/// Falls back to the repository's first commit hash truncated to 8
/// characters when no tag exists.
pub fn last_release_tag<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let cwd = cwd.as_ref();

    match run_git(cwd, &["describe", "--tags", "--abbrev=0"]) {
        Ok(output) => Ok(output.stdout),
        Err(_) => {
            let output = run_git(cwd, &["rev-list", "--max-parents=0", "HEAD"])?;
            Ok(output.stdout.chars().take(8).collect())
        }
    }
}

/// List commits between `base` and HEAD.
///
/// If the range cannot be resolved (e.g. the fallback reference is a
/// truncated hash git cannot range over), lists the last 50 commits
/// unconditionally instead. Malformed log lines are dropped.
pub fn commits_since<P: AsRef<Path>>(cwd: P, base: &str) -> Result<Vec<CommitRecord>> {
    let cwd = cwd.as_ref();
    let range = format!("{}..HEAD", base);

    let output = match run_git(cwd, &["log", &range, LOG_FORMAT, "--date=short"]) {
        Ok(output) => output,
        Err(_) => run_git(
            cwd,
            &["log", FALLBACK_COMMIT_COUNT, LOG_FORMAT, "--date=short"],
        )?,
    };

    Ok(output
        .lines()
        .iter()
        .filter_map(|line| parse_commit_line(line))
        .collect())
}

/// Parse one delimited log line into a commit record.
///
/// Returns `None` for lines with fewer than 5 fields (body continuation
/// lines from multi-line commit messages land here and are dropped).
pub fn parse_commit_line(line: &str) -> Option<CommitRecord> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 5 {
        return None;
    }

    Some(CommitRecord {
        hash: parts[0].to_string(),
        subject: parts[1].to_string(),
        body: parts[2].to_string(),
        author: parts[3].to_string(),
        date: parts[4].to_string(),
    })
}

/// List files changed between `base` and HEAD, partitioned by prefix.
///
/// A failed diff yields an empty result rather than an error; the callers
/// treat changed files as best-effort prompt context.
pub fn changed_files_since<P: AsRef<Path>>(cwd: P, base: &str, ios_path: &str) -> ChangedFiles {
    let range = format!("{}..HEAD", base);

    let files = match run_git(cwd.as_ref(), &["diff", "--name-only", &range]) {
        Ok(output) => output.lines().iter().map(|s| s.to_string()).collect(),
        Err(_) => Vec::new(),
    };

    partition_changes(files, ios_path)
}

fn partition_changes(files: Vec<String>, ios_path: &str) -> ChangedFiles {
    let ios_prefix = format!("{}/", ios_path);
    let mut changed = ChangedFiles::default();

    for file in files {
        if file.starts_with(&ios_prefix) {
            changed.ios.push(file);
        } else if file.starts_with("backend/") {
            changed.backend.push(file);
        }
    }

    changed
}
