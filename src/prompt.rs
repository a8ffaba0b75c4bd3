//! Prompt composition for the text-generation pipelines.
//!
//! Gathered context is collected into typed structs and rendered into the
//! final instruction prompt in one place, so the commands stay linear.

use crate::gather::StoreMetadata;
use crate::git::CommitRecord;

/// Character cap applied to the source blob when it is embedded in a prompt.
pub const MAX_PROMPT_CODE_CHARS: usize = 30_000;

/// Commit cap for the release-notes prompt.
pub const MAX_PROMPT_COMMITS: usize = 50;

/// Everything the description prompt embeds.
#[derive(Debug)]
pub struct DescriptionContext<'a> {
    pub app_name: &'a str,
    pub app_context: &'a str,
    pub metadata: &'a StoreMetadata,
    pub code_context: &'a str,
}

impl DescriptionContext<'_> {
    /// Render the App Store description prompt.
    pub fn render(&self) -> String {
        let name = self.metadata.name.as_deref().unwrap_or(self.app_name);
        let subtitle = self.metadata.subtitle.as_deref().unwrap_or("Unknown");
        let keywords = self.metadata.keywords.as_deref().unwrap_or("Unknown");
        let code = truncate_chars(self.code_context, MAX_PROMPT_CODE_CHARS);

        format!(
            "You are writing an App Store description for an iOS app.\n\
             Based on the code and context below, write a compelling App Store description.\n\
             \n\
             {context}\n\
             \n\
             Existing metadata:\n\
             - Name: {name}\n\
             - Subtitle: {subtitle}\n\
             - Keywords: {keywords}\n\
             \n\
             Code context (key source files):\n\
             {code}\n\
             \n\
             Write an App Store description that:\n\
             1. Opens with a compelling hook (1-2 sentences)\n\
             2. Lists key features with bullet points or short paragraphs\n\
             3. Highlights what makes this app unique\n\
             4. Is between 200-400 words\n\
             5. DO NOT USE ANY EMOJIS - App Store Connect rejects them\n\
             6. Ends with a call to action\n\
             \n\
             Output ONLY the description text, no additional commentary.",
            context = self.app_context,
        )
    }
}

/// Everything the release-notes prompt embeds.
#[derive(Debug)]
pub struct ReleaseNotesContext<'a> {
    pub app_name: &'a str,
    pub app_context: &'a str,
    pub version: &'a str,
    pub last_tag: &'a str,
    pub commits: &'a [CommitRecord],
    pub ios_changes: usize,
    pub backend_changes: usize,
}

impl ReleaseNotesContext<'_> {
    /// Render the release-notes prompt.
    pub fn render(&self) -> String {
        let commit_text = self
            .commits
            .iter()
            .take(MAX_PROMPT_COMMITS)
            .map(CommitRecord::summary_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are writing App Store release notes for {name} ({context}).\n\
             \n\
             Version: {version}\n\
             Last release tag: {tag}\n\
             \n\
             Commits since last release:\n\
             {commits}\n\
             \n\
             Changed areas:\n\
             - iOS app changes: {ios} files\n\
             - Backend changes: {backend} files\n\
             \n\
             Write release notes that:\n\
             1. Are user-friendly (avoid technical jargon)\n\
             2. Focus on user-visible improvements\n\
             3. Are concise (under 500 characters for App Store limit)\n\
             4. Use bullet points for multiple changes\n\
             5. Start with most impactful changes\n\
             6. Group related changes together\n\
             7. Skip internal/technical changes users don't care about\n\
             8. Use emojis sparingly if at all\n\
             \n\
             If there are no significant user-facing changes, write something like:\n\
             \"Bug fixes and performance improvements.\"\n\
             \n\
             Output ONLY the release notes text, no additional commentary.",
            name = self.app_name,
            context = self.app_context,
            version = self.version,
            tag = self.last_tag,
            commits = commit_text,
            ios = self.ios_changes,
            backend = self.backend_changes,
        )
    }
}

/// Truncate to at most `max` characters, on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}
