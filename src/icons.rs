//! Derives the fixed-size icon variants from a rendered logo.

use crate::config::ICON_VARIANTS;
use crate::manifest;
use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::fs;
use std::path::Path;

/// Produce the three icon variants from `source` into `out_dir`.
///
/// A missing source is not an error: a hint is printed and no files are
/// produced. When the source dimensions already match a variant, its bytes
/// are copied untouched instead of being decoded and re-encoded.
///
/// With `manifest_app` set, a web app manifest naming the PWA variants is
/// written alongside the icons.
pub fn derive_icons(source: &Path, out_dir: &Path, manifest_app: Option<&str>) -> Result<()> {
    if !source.exists() {
        println!(
            "Error: {} not found. Please run logo-gen first.",
            source.display()
        );
        return Ok(());
    }

    let img = image::open(source)
        .with_context(|| format!("Failed to decode {}", source.display()))?;

    println!("Generating icon variants...");
    for variant in ICON_VARIANTS {
        let output_path = out_dir.join(variant.file_name);

        if (variant.width, variant.height) == (img.width(), img.height()) {
            fs::copy(source, &output_path)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        } else {
            let resized = img.resize_exact(variant.width, variant.height, FilterType::Lanczos3);
            resized
                .save(&output_path)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }

        println!("  ✓ Generated {}", output_path.display());
    }

    if let Some(app_name) = manifest_app {
        manifest::write_manifest(out_dir, app_name)?;
    }

    Ok(())
}
