use anyhow::Result;
use std::str::FromStr;

/// The two palette entries of the logo.
pub const CYAN: [u8; 3] = [0, 212, 255];
pub const PURPLE: [u8; 3] = [123, 97, 255];

pub const CANVAS_SIZE: u32 = 512;
pub const CUBE_SCALE: f32 = 0.25;
pub const GLOW_WIDTH: f32 = 4.0;

/// Glow stroke layers as (width multiplier, alpha), widest and faintest first.
pub const GLOW_LAYERS: [(f32, u8); 3] = [(4.0, 50), (2.0, 100), (1.0, 255)];

/// Face fill alphas. Fills are far fainter than the outline strokes.
pub const TOP_FILL_ALPHA: u8 = 30;
pub const RIGHT_FILL_ALPHA: u8 = 40;
pub const LEFT_FILL_ALPHA: u8 = 20;

pub const DEFAULT_OUTPUT_DIR: &str = "./public";
pub const LOGO_FILE: &str = "logo.png";
pub const MANIFEST_FILE: &str = "manifest.webmanifest";

/// A single resized icon derived from the rendered logo.
#[derive(Debug, Clone, Copy)]
pub struct IconVariant {
    pub width: u32,
    pub height: u32,
    pub file_name: &'static str,
    /// Whether the variant is listed in the web app manifest. Apple touch
    /// icons are referenced from HTML instead.
    pub in_manifest: bool,
}

pub const ICON_VARIANTS: [IconVariant; 3] = [
    IconVariant {
        width: 192,
        height: 192,
        file_name: "pwa-192x192.png",
        in_manifest: true,
    },
    IconVariant {
        width: 512,
        height: 512,
        file_name: "pwa-512x512.png",
        in_manifest: true,
    },
    IconVariant {
        width: 180,
        height: 180,
        file_name: "apple-touch-icon.png",
        in_manifest: false,
    },
];

/// Everything the renderer needs to produce a logo image. The defaults
/// reproduce the stock logo; the CLI only overrides individual fields.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width and height of the square canvas, in pixels.
    pub canvas_size: u32,
    /// Cube size as a fraction of the canvas size.
    pub cube_scale: f32,
    pub cyan: [u8; 3],
    pub purple: [u8; 3],
    /// Width of the solid core stroke; the glow layers scale off it.
    pub glow_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            cube_scale: CUBE_SCALE,
            cyan: CYAN,
            purple: PURPLE,
            glow_width: GLOW_WIDTH,
        }
    }
}

/// Parse a CSS color string (e.g. "#00d4ff") into an RGB triple.
pub fn parse_css_color(value: &str) -> Result<[u8; 3]> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {value}"))?;

    Ok([
        (color.red * 255.) as u8,
        (color.green * 255.) as u8,
        (color.blue * 255.) as u8,
    ])
}
