//! Static app registry.
//!
//! Every supported app has one `AppProfile` keyed by its `AppId`. The
//! registry is compile-time data; nothing here is loaded from disk.

use clap::ValueEnum;
use std::fmt;

/// Closed set of app identifiers the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppId {
    Trivit,
    Snow,
    Footprint,
}

impl AppId {
    /// The identifier string as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppId::Trivit => "trivit",
            AppId::Snow => "snow",
            AppId::Footprint => "footprint",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static configuration for one app.
///
/// `context` is the detailed feature rundown used when generating store
/// descriptions; `summary` is the one-line version used for release notes.
#[derive(Debug)]
pub struct AppProfile {
    /// App display name.
    pub name: &'static str,
    /// Detailed context for description generation.
    pub context: &'static str,
    /// Short context for release-notes generation.
    pub summary: &'static str,
    /// Path to the iOS source tree, relative to the repo root.
    pub ios_path: &'static str,
}

/// Look up the profile for a known app id.
pub fn profile(id: AppId) -> &'static AppProfile {
    match id {
        AppId::Trivit => &TRIVIT,
        AppId::Snow => &SNOW,
        AppId::Footprint => &FOOTPRINT,
    }
}

static TRIVIT: AppProfile = AppProfile {
    name: "Trivit",
    context: "\
App: Trivit
Purpose: A beautiful tally counter for iOS
Key features to highlight:
- Simple, intuitive counting with colorful design
- Multiple counters with custom names and colors
- Full-width colored rows for easy visibility
- Haptic feedback on interactions
- Statistics and history tracking
- iCloud sync across devices
- Apple Watch app companion
Category: PRODUCTIVITY",
    summary: "A tally counter app for iOS",
    ios_path: "trivit",
};

static SNOW: AppProfile = AppProfile {
    name: "Powder Chaser",
    context: "\
App: Powder Chaser (Snow Tracker)
Purpose: Track snow conditions at ski resorts worldwide
Key features to highlight:
- Real-time snow conditions at multiple elevations
- Fresh powder vs icy conditions estimation
- Weather forecasts for ski resorts
- Interactive map with resort locations
- Favorites list for quick access
- Multiple regions (Alps, North America, Japan, Scandinavia, etc.)
- Snow quality ratings and recommendations
Category: WEATHER",
    summary: "A ski resort snow tracking app",
    ios_path: "ios",
};

static FOOTPRINT: AppProfile = AppProfile {
    name: "Footprint",
    context: "\
App: Footprint Travel Tracker
Purpose: Track countries and places visited around the world
Key features to highlight:
- World map visualization of visited countries
- State/province tracking for larger countries (US, Canada)
- Travel statistics and achievements
- Beautiful visualizations and animations
- Offline support with sync
- Sign in with Apple for data backup
Category: TRAVEL",
    summary: "A travel tracking app for marking visited countries and places",
    ios_path: "ios",
};
