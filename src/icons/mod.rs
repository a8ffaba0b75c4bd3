//! iOS app icon catalog and manifest.
//!
//! The catalog is the fixed list of (point size, scale) slots an iOS icon
//! set must cover. Several slots resolve to the same pixel size on purpose
//! (e.g. 20pt@2x and 40pt@1x are both 40px); the manifest lists every slot
//! while the generator emits one image per unique pixel size.

pub mod render;

use serde::Serialize;

/// Author string written into the manifest.
const MANIFEST_AUTHOR: &str = "storesmith";

/// Manifest schema version.
const MANIFEST_VERSION: u32 = 1;

/// One (point size, scale) slot in the icon catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSlot {
    /// Nominal size in points. Fractional sizes exist (83.5pt iPad Pro).
    pub points: f32,
    /// Pixel-per-point multiplier.
    pub scale: u32,
}

/// Device-class tag attached to a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
    Universal,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
            Idiom::Universal => "universal",
        }
    }
}

/// The full iOS icon catalog: iPhone, iPad, and App Store slots.
pub const ICON_CATALOG: [IconSlot; 18] = [
    // iPhone
    IconSlot::new(20.0, 2),
    IconSlot::new(20.0, 3),
    IconSlot::new(29.0, 2),
    IconSlot::new(29.0, 3),
    IconSlot::new(40.0, 2),
    IconSlot::new(40.0, 3),
    IconSlot::new(60.0, 2),
    IconSlot::new(60.0, 3),
    // iPad
    IconSlot::new(20.0, 1),
    IconSlot::new(20.0, 2),
    IconSlot::new(29.0, 1),
    IconSlot::new(29.0, 2),
    IconSlot::new(40.0, 1),
    IconSlot::new(40.0, 2),
    IconSlot::new(76.0, 1),
    IconSlot::new(76.0, 2),
    IconSlot::new(83.5, 2),
    // App Store
    IconSlot::new(1024.0, 1),
];

/// Pixel size of the App Store listing icon, also used for previews.
pub const PREVIEW_PIXEL_SIZE: u32 = 1024;

impl IconSlot {
    pub const fn new(points: f32, scale: u32) -> Self {
        Self { points, scale }
    }

    /// Rendered pixel dimension: `round(points * scale)`.
    pub fn pixel_size(&self) -> u32 {
        (self.points * self.scale as f32).round() as u32
    }

    /// Device-class classification.
    ///
    /// Only the combinations below are tagged; everything else (including
    /// the small iPad slots) deliberately falls through to `universal`.
    pub fn idiom(&self) -> Idiom {
        if self.points == 60.0 && (self.scale == 2 || self.scale == 3) {
            Idiom::Iphone
        } else if self.points == 76.0 || self.points == 83.5 {
            Idiom::Ipad
        } else if self.points == 1024.0 {
            Idiom::IosMarketing
        } else {
            Idiom::Universal
        }
    }

    /// Output filename for this slot's pixel size.
    pub fn filename(&self) -> String {
        icon_filename(self.pixel_size())
    }

    /// Manifest scale string, e.g. `2x`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    /// Manifest size string, e.g. `60x60` or `83.5x83.5`.
    pub fn size_label(&self) -> String {
        let points = format_points(self.points);
        format!("{}x{}", points, points)
    }
}

/// Filename for an icon of the given pixel size.
pub fn icon_filename(pixel_size: u32) -> String {
    format!("icon_{}x{}.png", pixel_size, pixel_size)
}

fn format_points(points: f32) -> String {
    if points.fract() == 0.0 {
        format!("{}", points as u32)
    } else {
        format!("{}", points)
    }
}

/// `Contents.json` document for the icon set.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// One manifest entry; the catalog produces one per slot, duplicates included.
#[derive(Debug, Serialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: &'static str,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, Serialize)]
pub struct ManifestInfo {
    pub author: &'static str,
    pub version: u32,
}

/// Build the manifest covering the full catalog.
pub fn manifest() -> Manifest {
    let images = ICON_CATALOG
        .iter()
        .map(|slot| ManifestImage {
            filename: slot.filename(),
            idiom: slot.idiom().as_str(),
            scale: slot.scale_label(),
            size: slot.size_label(),
        })
        .collect();

    Manifest {
        images,
        info: ManifestInfo {
            author: MANIFEST_AUTHOR,
            version: MANIFEST_VERSION,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eighteen_slots() {
        assert_eq!(ICON_CATALOG.len(), 18);
    }

    #[test]
    fn catalog_resolves_to_thirteen_unique_pixel_sizes() {
        let unique: HashSet<u32> = ICON_CATALOG.iter().map(|s| s.pixel_size()).collect();
        assert_eq!(unique.len(), 13);
    }

    #[test]
    fn duplicate_slots_share_a_pixel_size() {
        // 20pt@2x and 40pt@1x both resolve to 40px and must share a file.
        assert_eq!(IconSlot::new(20.0, 2).pixel_size(), 40);
        assert_eq!(IconSlot::new(40.0, 1).pixel_size(), 40);
        assert_eq!(IconSlot::new(20.0, 2).filename(), "icon_40x40.png");
        assert_eq!(IconSlot::new(40.0, 1).filename(), "icon_40x40.png");
    }

    #[test]
    fn fractional_points_round_to_whole_pixels() {
        let slot = IconSlot::new(83.5, 2);
        assert_eq!(slot.pixel_size(), 167);
        assert_eq!(slot.size_label(), "83.5x83.5");
        assert_eq!(slot.filename(), "icon_167x167.png");
    }

    #[test]
    fn iphone_idiom_covers_60pt_at_2x_and_3x() {
        assert_eq!(IconSlot::new(60.0, 2).idiom(), Idiom::Iphone);
        assert_eq!(IconSlot::new(60.0, 3).idiom(), Idiom::Iphone);
    }

    #[test]
    fn ipad_idiom_covers_76pt_and_83_5pt() {
        assert_eq!(IconSlot::new(76.0, 1).idiom(), Idiom::Ipad);
        assert_eq!(IconSlot::new(76.0, 2).idiom(), Idiom::Ipad);
        assert_eq!(IconSlot::new(83.5, 2).idiom(), Idiom::Ipad);
    }

    #[test]
    fn marketing_idiom_covers_1024pt() {
        assert_eq!(IconSlot::new(1024.0, 1).idiom(), Idiom::IosMarketing);
    }

    #[test]
    fn small_ipad_slots_fall_through_to_universal() {
        // The classification table does not cover these; the fall-through
        // is deliberate and must stay.
        assert_eq!(IconSlot::new(20.0, 1).idiom(), Idiom::Universal);
        assert_eq!(IconSlot::new(29.0, 2).idiom(), Idiom::Universal);
        assert_eq!(IconSlot::new(40.0, 3).idiom(), Idiom::Universal);
    }

    #[test]
    fn example_slot_60pt_at_2x() {
        let slot = IconSlot::new(60.0, 2);
        assert_eq!(slot.pixel_size(), 120);
        assert_eq!(slot.filename(), "icon_120x120.png");
        assert_eq!(slot.idiom(), Idiom::Iphone);
    }

    #[test]
    fn manifest_lists_every_catalog_slot() {
        let manifest = manifest();
        assert_eq!(manifest.images.len(), ICON_CATALOG.len());
        assert_eq!(manifest.info.author, "storesmith");
        assert_eq!(manifest.info.version, 1);
    }

    #[test]
    fn manifest_serializes_with_fixed_schema() {
        let json = serde_json::to_value(manifest()).unwrap();

        let images = json["images"].as_array().unwrap();
        assert_eq!(images.len(), 18);

        let store_entry = images
            .iter()
            .find(|img| img["idiom"] == "ios-marketing")
            .unwrap();
        assert_eq!(store_entry["filename"], "icon_1024x1024.png");
        assert_eq!(store_entry["scale"], "1x");
        assert_eq!(store_entry["size"], "1024x1024");

        assert_eq!(json["info"]["author"], "storesmith");
        assert_eq!(json["info"]["version"], 1);
    }
}
