//! Web app manifest data model
//!
//! This module defines the subset of the W3C web app manifest schema needed
//! to declare the generated icon variants, so a site can point its
//! `<link rel="manifest">` at the output directory as-is.

use crate::config::{IconVariant, ICON_VARIANTS, MANIFEST_FILE};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a manifest.webmanifest file
#[derive(Serialize, Debug, Clone)]
pub struct ManifestFile {
    /// Full name of the web application
    pub name: String,

    /// Shortened name shown where space is limited (e.g. under a home
    /// screen icon)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Icon entries for the different target sizes
    pub icons: Vec<IconEntry>,
}

/// Individual icon entry within a web app manifest
#[derive(Serialize, Debug, Clone)]
pub struct IconEntry {
    /// Path of the icon file, relative to the manifest
    pub src: String,

    /// Space-separated sizes the file covers (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the icon file
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Intended purpose (e.g. "any", "maskable", "monochrome")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl ManifestFile {
    /// Creates a new manifest with the specified application name and no
    /// icons
    pub fn new(name: String) -> Self {
        Self {
            name,
            short_name: None,
            icons: Vec::new(),
        }
    }

    pub fn add_icon(&mut self, icon: IconEntry) {
        self.icons.push(icon);
    }
}

impl IconEntry {
    pub fn from_variant(variant: &IconVariant) -> Self {
        Self {
            src: format!("/{}", variant.file_name),
            sizes: format!("{}x{}", variant.width, variant.height),
            mime_type: "image/png".to_string(),
            purpose: Some("any".to_string()),
        }
    }
}

/// Write a manifest.webmanifest next to the generated icons, listing every
/// variant flagged for manifest inclusion.
pub fn write_manifest(out_dir: &Path, app_name: &str) -> Result<()> {
    let mut manifest = ManifestFile::new(app_name.to_string());

    for variant in ICON_VARIANTS.iter().filter(|v| v.in_manifest) {
        manifest.add_icon(IconEntry::from_variant(variant));
    }

    let manifest_path = out_dir.join(MANIFEST_FILE);
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;

    std::fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    println!("  ✓ Generated {}", manifest_path.display());
    Ok(())
}
