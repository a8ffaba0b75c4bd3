//! The `icons` command: draw the icon set and emit its manifest.

use crate::cli::IconsArgs;
use crate::error::{Result, StoresmithError};
use crate::fs;
use crate::icons::{self, ICON_CATALOG, PREVIEW_PIXEL_SIZE, render};
use image::RgbaImage;
use std::collections::HashSet;
use std::path::Path;

pub fn cmd_icons(args: IconsArgs) -> Result<()> {
    std::fs::create_dir_all(&args.output).map_err(|e| {
        StoresmithError::UserError(format!(
            "failed to create output directory '{}': {}",
            args.output.display(),
            e
        ))
    })?;

    if args.preview_only {
        println!("Generating preview icon for {}...", args.app);
        let img = render::render_icon(args.app, PREVIEW_PIXEL_SIZE);
        let path = args.output.join(icons::icon_filename(PREVIEW_PIXEL_SIZE));
        save_png(&img, &path)?;
        println!("Saved preview to {}", path.display());
        return Ok(());
    }

    println!("Generating icon set for {}...", args.app);

    // The catalog repeats pixel sizes across device classes by design;
    // each unique size is drawn once.
    let mut produced: HashSet<u32> = HashSet::new();
    for slot in &ICON_CATALOG {
        let pixel_size = slot.pixel_size();
        if !produced.insert(pixel_size) {
            continue;
        }

        let img = render::render_icon(args.app, pixel_size);
        let filename = slot.filename();
        save_png(&img, &args.output.join(&filename))?;
        println!("  Generated {}", filename);
    }

    let manifest = icons::manifest();
    let manifest_json = serde_json::to_string_pretty(&manifest).map_err(|e| {
        StoresmithError::UserError(format!("failed to serialize Contents.json: {}", e))
    })?;
    fs::atomic_write_file(args.output.join("Contents.json"), &manifest_json)?;
    println!("  Generated Contents.json");

    println!();
    println!("Icon set saved to {}", args.output.display());
    println!("Total icons: {}", produced.len());

    Ok(())
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|e| {
        StoresmithError::UserError(format!("failed to write '{}': {}", path.display(), e))
    })
}
