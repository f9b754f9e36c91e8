use anyhow::Result;
use clap::Parser;
use logo_gen::config::{self, RenderConfig};
use logo_gen::render;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "logo-gen",
    about = "Render a glowing isometric cube logo as a transparent PNG"
)]
struct Args {
    /// Output directory. Must already exist.
    #[clap(short, long, value_name = "DIR", default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Canvas size in pixels (the canvas is square).
    #[clap(short, long, value_name = "PIXELS", default_value_t = config::CANVAS_SIZE)]
    size: u32,

    /// Color of the top and left faces (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#00d4ff")]
    cyan: String,

    /// Color of the right face (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#7b61ff")]
    purple: String,

    /// Width of the core stroke; the glow halo scales off it.
    #[clap(long, value_name = "PIXELS", default_value_t = config::GLOW_WIDTH)]
    glow_width: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = RenderConfig {
        canvas_size: args.size,
        cyan: config::parse_css_color(&args.cyan)?,
        purple: config::parse_css_color(&args.purple)?,
        glow_width: args.glow_width,
        ..RenderConfig::default()
    };

    render::generate_logo(&config, &args.output)?;
    Ok(())
}
