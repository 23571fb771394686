use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use raylib::prelude::*;
use showcase::PageConfig;
use showcase::preferences::FileStore;
use tracing::{Level, info, warn};

mod preview;

use crate::preview::Preview;
use crate::preview::layout::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::preview::scene::{LanguageChoice, parse_language};
use crate::preview::slide::Slide;
use crate::preview::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

#[derive(Parser, Debug)]
#[command(name = "showcase-preview", version, about = "Preview the page carousel on a folder of images")]
struct Cli {
    /// Directory whose images become the carousel slides
    image_directory: PathBuf,

    /// Language dropdown entries as tag:Name
    #[arg(long, value_delimiter = ',', value_parser = parse_language, default_value = "en:English,fr:French,de:Deutsch")]
    languages: Vec<LanguageChoice>,

    /// File the language preference is saved to
    #[arg(long, default_value = "preferences.json")]
    preferences: PathBuf,

    /// TOML file overriding the page defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let config = match &cli.config {
        Some(path) => PageConfig::load(path)?,
        None => PageConfig::default(),
    };

    let image_paths = load_sorted_image_paths(&cli.image_directory)
        .with_context(|| format!("Error loading images from {}", cli.image_directory.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Showcase Carousel Preview")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    if slides.is_empty() {
        bail!("No slides were loaded from {}", cli.image_directory.display());
    }
    info!(slides = slides.len(), preferences = %cli.preferences.display(), "starting preview");

    let mut preview = Preview::new(slides, &cli.languages, FileStore::new(cli.preferences), &config);
    preview.run(&mut rl, &thread);
    Ok(())
}
