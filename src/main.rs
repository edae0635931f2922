use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod autoplay;
mod carousel;
mod constants;
mod draw;
mod input;
mod layout;
mod skip_link;
mod slide;
mod texture_loader;
mod transition;
mod view;

use crate::app::{App, Options};
use crate::autoplay::Autoplay;
use crate::carousel::Carousel;
use crate::constants::*;
use crate::slide::SlideRecord;

#[derive(Parser)]
#[command(name = "photo-carousel")]
#[command(about = "Interactive photo carousel with auto-advance, keyboard, swipe and pagination")]
#[command(version)]
struct Cli {
    /// Directory of images to show, sorted by file name
    #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
    directory: Option<PathBuf>,

    /// JSON manifest of slides (source, caption, title, link, alt)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Seconds between automatic slide changes
    #[arg(short, long, default_value_t = DEFAULT_SLIDE_DELAY)]
    delay: f32,

    /// Hold the auto-advance timer while the pointer is over the carousel
    #[arg(long)]
    pause_on_hover: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Fail fast on a bad delay before any window or file work.
    let autoplay = Autoplay::new(cli.delay).context("invalid --delay")?;

    // --- Resolve slide records ---
    let records = if let Some(manifest) = &cli.manifest {
        let mut records = slide::load_manifest(manifest)?;
        if let Some(base) = manifest.parent() {
            slide::resolve_sources(&mut records, base);
        }
        records
    } else {
        let directory = cli
            .directory
            .as_deref()
            .context("an image directory or --manifest is required")?;
        texture_loader::load_sorted_image_paths(directory)?
            .into_iter()
            .map(|path| SlideRecord::from_source(path.to_string_lossy().into_owned()))
            .collect()
    };
    info!(slides = records.len(), "resolved slide records");

    // --- Window & textures ---
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(WINDOW_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Load each slide's texture; a record whose image fails to load is
    // dropped so the slide list and the texture table stay aligned.
    let mut slides = Vec::new();
    let mut textures = Vec::new();
    for record in records {
        match texture_loader::load_texture_with_exif_rotation(
            &mut rl,
            &thread,
            Path::new(&record.source),
        ) {
            Ok(texture) => {
                textures.push(texture);
                slides.push(record);
            }
            Err(e) => warn!("skipping slide {}: {e}", record.source),
        }
    }

    let carousel = Carousel::from_records(slides).context("no slides could be loaded")?;

    let options = Options {
        pause_on_hover: cli.pause_on_hover,
    };
    App::new(carousel, autoplay, options).run(&mut rl, &thread, textures);

    Ok(())
}
