//! CLI argument parsing for storesmith.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::apps::AppId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storesmith: release automation toolkit for App Store metadata and icon sets.
///
/// Three independent pipelines, each run to completion in one process:
/// - `description` and `release-notes` gather local context, call the
///   text-generation API once, and write a metadata text file
/// - `icons` procedurally draws the full iOS icon set plus its manifest
#[derive(Parser, Debug)]
#[command(name = "storesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for storesmith.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an App Store description from source code and app context.
    ///
    /// Scans iOS source files and existing store metadata, prompts the
    /// text-generation API, strips emoji, and writes description.txt.
    Description(GenerateArgs),

    /// Generate the app icon set and its Contents.json manifest.
    ///
    /// Draws one themed PNG per unique pixel size in the iOS icon catalog.
    Icons(IconsArgs),

    /// Generate release notes from git history since the last release tag.
    ///
    /// Summarizes commits and changed files through the text-generation API
    /// and writes release_notes.txt.
    ReleaseNotes(GenerateArgs),
}

/// Arguments shared by the `description` and `release-notes` commands.
///
/// Both commands resolve an app configuration the same way: a known `--app`
/// id selects the built-in profile, individual flags override its fields,
/// and omitting `--app` falls back to a generic configuration.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// App identifier selecting a built-in configuration.
    #[arg(long, value_enum)]
    pub app: Option<AppId>,

    /// App display name (overrides the configured name).
    #[arg(long)]
    pub app_name: Option<String>,

    /// Detailed app context for generation (overrides the configured context).
    #[arg(long)]
    pub app_context: Option<String>,

    /// Path to iOS source relative to the repo root (overrides the configured path).
    #[arg(long)]
    pub ios_path: Option<String>,

    /// Output file path (default: the resolved fastlane metadata directory).
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `icons` command.
#[derive(Parser, Debug)]
pub struct IconsArgs {
    /// App identifier for theme selection.
    #[arg(long, value_enum, default_value_t = AppId::Trivit)]
    pub app: AppId,

    /// Output directory (AppIcon.appiconset path).
    #[arg(long)]
    pub output: PathBuf,

    /// Only generate the 1024px preview, not the full set.
    #[arg(long)]
    pub preview_only: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
