use std::path::PathBuf;

use asset_viewer::config::ViewerConfig;
use asset_viewer::{ImageDisplayer, WindowPlotter};
use clap::Parser;
use iced::Size;

/// Show dataset images by asset id
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Asset identifiers (filename stems, without `.jpg`)
    #[arg(required = true)]
    asset_ids: Vec<String>,

    /// Directory holding the images (overrides the config file)
    #[arg(long)]
    dir: Option<String>,

    /// Panels per row when showing several assets
    #[arg(long)]
    columns: Option<usize>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = Args::parse();

    let mut config = match args.config.or_else(ViewerConfig::default_path) {
        Some(path) => ViewerConfig::load(&path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = args.dir {
        config.images_dir = dir;
    }
    if let Some(columns) = args.columns {
        config.gallery_columns = columns;
    }

    let plotter = WindowPlotter {
        size: Size::new(config.window_width, config.window_height),
        ..WindowPlotter::default()
    };
    let mut displayer = ImageDisplayer::new(config.images_dir.as_str(), plotter);

    if let [asset_id] = args.asset_ids.as_slice() {
        displayer.display(asset_id, None)?;
    } else {
        let outcomes = displayer.display_grid(&args.asset_ids, config.gallery_columns)?;
        let found = outcomes.iter().filter(|o| o.is_rendered()).count();
        println!("📸 Displayed {} of {} assets", found, outcomes.len());
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}
