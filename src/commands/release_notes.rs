//! The `release-notes` command: summarize git history since the last release.

use super::{TextKind, resolved_app};
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::llm::TextGenClient;
use crate::prompt::ReleaseNotesContext;
use crate::{fs, git, output, version};

/// Token cap for release-notes generation.
const MAX_TOKENS: u32 = 500;

/// App Store Connect limit reported alongside the character count.
const CHAR_LIMIT: usize = 4000;

/// Filename written into the fastlane metadata directory.
const OUTPUT_FILENAME: &str = "release_notes.txt";

pub fn cmd_release_notes(args: GenerateArgs) -> Result<()> {
    // Credential check happens before any gathering or side effect.
    let client = TextGenClient::from_env()?;
    let app = resolved_app(&args, TextKind::ReleaseNotes);

    println!("Generating release notes for {}...", app.name);

    let repo_root = git::repo_root(".")?;
    let last_tag = git::last_release_tag(&repo_root)?;
    println!("Last release: {}", last_tag);

    let commits = git::commits_since(&repo_root, &last_tag)?;
    let changed = git::changed_files_since(&repo_root, &last_tag, &app.ios_path);
    let current_version = version::current_version(&repo_root, &app.ios_path);

    let prompt = ReleaseNotesContext {
        app_name: &app.name,
        app_context: &app.context,
        version: &current_version,
        last_tag: &last_tag,
        commits: &commits,
        ios_changes: changed.ios.len(),
        backend_changes: changed.backend.len(),
    }
    .render();

    let notes = client.complete(&prompt, MAX_TOKENS)?;

    println!();
    println!("{}", "=".repeat(50));
    println!("GENERATED RELEASE NOTES:");
    println!("{}", "=".repeat(50));
    println!("{}", notes);
    println!("{}", "=".repeat(50));
    println!(
        "Character count: {} (limit: {})",
        notes.chars().count(),
        CHAR_LIMIT
    );

    let output_path = match args.output {
        Some(path) => path,
        None => output::resolve_metadata_path(&repo_root, &app.ios_path, OUTPUT_FILENAME),
    };

    fs::atomic_write_file(&output_path, &notes)?;
    println!();
    println!("Saved to: {}", output_path.display());

    Ok(())
}
