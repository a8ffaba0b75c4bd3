//! The `description` command: generate App Store copy from source context.

use super::{TextKind, resolved_app};
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::llm::TextGenClient;
use crate::prompt::DescriptionContext;
use crate::{emoji, fs, gather, git, output};

/// Token cap for description generation.
const MAX_TOKENS: u32 = 1000;

/// Filename written into the fastlane metadata directory.
const OUTPUT_FILENAME: &str = "description.txt";

pub fn cmd_description(args: GenerateArgs) -> Result<()> {
    // Credential check happens before any gathering or side effect.
    let client = TextGenClient::from_env()?;
    let app = resolved_app(&args, TextKind::Description);

    println!("Generating App Store description for {}...", app.name);

    let repo_root = git::repo_root(".")?;
    let source_base = repo_root.join(&app.ios_path);
    let files = gather::collect_source_files(&source_base);
    let code_context = gather::read_concatenated(&files, gather::MAX_CONTEXT_CHARS);
    let metadata = gather::existing_metadata(&repo_root, &app.ios_path);

    let prompt = DescriptionContext {
        app_name: &app.name,
        app_context: &app.context,
        metadata: &metadata,
        code_context: &code_context,
    }
    .render();

    let generated = client.complete(&prompt, MAX_TOKENS)?;

    // App Store Connect rejects emoji; strip before anything else sees it.
    let stripped = emoji::strip_emoji(&generated);
    let description = stripped.trim();

    println!();
    println!("{}", "=".repeat(50));
    println!("GENERATED DESCRIPTION:");
    println!("{}", "=".repeat(50));
    println!("{}", description);
    println!("{}", "=".repeat(50));
    println!("Word count: ~{}", description.split_whitespace().count());

    let output_path = match args.output {
        Some(path) => path,
        None => output::resolve_metadata_path(&repo_root, &app.ios_path, OUTPUT_FILENAME),
    };

    fs::atomic_write_file(&output_path, description)?;
    println!();
    println!("Saved to: {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::AppId;
    use crate::error::StoresmithError;
    use crate::llm::API_KEY_VAR;
    use serial_test::serial;

    #[test]
    #[serial]
    fn fails_before_side_effects_without_credential() {
        // SAFETY: guarded by #[serial].
        unsafe { std::env::remove_var(API_KEY_VAR) };

        let args = GenerateArgs {
            app: Some(AppId::Trivit),
            app_name: None,
            app_context: None,
            ios_path: None,
            output: Some(std::env::temp_dir().join("storesmith-never-written.txt")),
        };

        let result = cmd_description(args);
        assert!(matches!(result, Err(StoresmithError::UserError(_))));
        assert!(!std::env::temp_dir().join("storesmith-never-written.txt").exists());
    }
}
