//! Command implementations for storesmith.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the app-configuration resolution shared by the
//! two text-generation commands.

mod description;
mod icons;
mod release_notes;

use crate::apps;
use crate::cli::{Command, GenerateArgs};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Description(args) => description::cmd_description(args),
        Command::Icons(args) => icons::cmd_icons(args),
        Command::ReleaseNotes(args) => release_notes::cmd_release_notes(args),
    }
}

/// Which context field a text command wants from the app profile.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TextKind {
    /// Detailed feature rundown.
    Description,
    /// One-line summary.
    ReleaseNotes,
}

/// App configuration after flag overrides are applied.
#[derive(Debug)]
pub(crate) struct ResolvedApp {
    pub name: String,
    pub context: String,
    pub ios_path: String,
}

/// Resolve the effective app configuration for a text command.
///
/// A known `--app` id supplies defaults, each flag overrides its field,
/// and no id at all selects a generic configuration.
pub(crate) fn resolved_app(args: &GenerateArgs, kind: TextKind) -> ResolvedApp {
    match args.app {
        Some(id) => {
            let profile = apps::profile(id);
            let context = match kind {
                TextKind::Description => profile.context,
                TextKind::ReleaseNotes => profile.summary,
            };
            ResolvedApp {
                name: args.app_name.clone().unwrap_or_else(|| profile.name.to_string()),
                context: args
                    .app_context
                    .clone()
                    .unwrap_or_else(|| context.to_string()),
                ios_path: args
                    .ios_path
                    .clone()
                    .unwrap_or_else(|| profile.ios_path.to_string()),
            }
        }
        None => ResolvedApp {
            name: args.app_name.clone().unwrap_or_else(|| "App".to_string()),
            context: args
                .app_context
                .clone()
                .unwrap_or_else(|| "An iOS app".to_string()),
            ios_path: args.ios_path.clone().unwrap_or_else(|| ".".to_string()),
        },
    }
}
