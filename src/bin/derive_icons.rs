use anyhow::Result;
use clap::Parser;
use logo_gen::config;
use logo_gen::icons;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "derive-icons",
    about = "Derive PWA icon variants from the rendered logo"
)]
struct Args {
    /// Output directory for the icon variants.
    #[clap(short, long, value_name = "DIR", default_value = config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Source logo image. Defaults to logo.png inside the output directory.
    #[clap(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Also write a manifest.webmanifest listing the PWA icon entries
    #[clap(long)]
    manifest: bool,

    /// Application name recorded in the manifest
    #[clap(long, value_name = "NAME", default_value = "App")]
    app_name: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = args
        .input
        .unwrap_or_else(|| args.output.join(config::LOGO_FILE));
    let manifest_app = args.manifest.then_some(args.app_name.as_str());

    icons::derive_icons(&source, &args.output, manifest_app)
}
