/// Asset image display
///
/// This module handles:
/// - Resolving an asset identifier to its image file
/// - Reporting missing files on the diagnostic output
/// - Drawing decoded images onto a caller's surface, or onto a fresh figure
///   that is flushed to the screen right away
/// - Laying several assets out in one multi-panel figure

pub mod figure;
pub mod surface;

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::asset::AssetRef;
use crate::ui::window::WindowPlotter;
use figure::Figure;
pub use surface::{Plotter, Surface};

/// Faults that escape a display call.
/// A missing file is not one of them, see [`Outcome::NotFound`].
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The file exists but could not be read or decoded
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Writing the diagnostic line failed
    #[error("failed to write diagnostic: {0}")]
    Io(#[from] io::Error),

    /// The window backend could not present the figure
    #[error("display window failed: {0}")]
    Window(#[from] iced::Error),

    /// No window can be opened from this call
    #[error("display window unavailable: {0}")]
    WindowUnavailable(&'static str),
}

/// How a display call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The image was decoded and drawn
    Rendered(PathBuf),
    /// No file at the computed path; a notice was written
    NotFound(PathBuf),
}

impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Rendered(path) | Outcome::NotFound(path) => path,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered(_))
    }
}

/// Displays dataset images by asset identifier
pub struct ImageDisplayer<P, W = io::Stdout> {
    images_dir: String,
    plotter: P,
    out: W,
}

impl<P: Plotter> ImageDisplayer<P, io::Stdout> {
    /// Diagnostics go to standard output
    pub fn new(images_dir: impl Into<String>, plotter: P) -> Self {
        ImageDisplayer::with_output(images_dir, plotter, io::stdout())
    }
}

impl<P: Plotter, W: Write> ImageDisplayer<P, W> {
    pub fn with_output(images_dir: impl Into<String>, plotter: P, out: W) -> Self {
        ImageDisplayer {
            images_dir: images_dir.into(),
            plotter,
            out,
        }
    }

    pub fn plotter(&self) -> &P {
        &self.plotter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Display the image of `asset_id`.
    ///
    /// With a `surface` the image is drawn onto it and presenting is left to
    /// the caller. Without one a single-panel figure is created and shown
    /// immediately.
    pub fn display(
        &mut self,
        asset_id: impl fmt::Display,
        surface: Option<&mut dyn Surface>,
    ) -> Result<Outcome, DisplayError> {
        let asset = AssetRef::new(self.images_dir.as_str(), asset_id);
        let path = asset.path();

        if !asset.exists() {
            writeln!(self.out, "File not found: {}", path.display())?;
            debug!(asset_id = asset.asset_id(), "asset image missing");
            return Ok(Outcome::NotFound(path));
        }

        let image = image::open(&path).map_err(|source| DisplayError::Decode {
            path: path.clone(),
            source,
        })?;

        debug!(
            asset_id = asset.asset_id(),
            width = image.width(),
            height = image.height(),
            "decoded asset image"
        );

        match surface {
            Some(surface) => {
                surface.draw_image(&image);
                surface.set_axes_visible(false);
            }
            None => {
                let mut figure = Figure::single();
                for panel in figure.panels_mut() {
                    panel.draw_image(&image);
                    panel.set_axes_visible(false);
                }
                self.plotter.show(figure)?;
            }
        }

        Ok(Outcome::Rendered(path))
    }

    /// Display several assets side by side in one figure.
    ///
    /// Each asset gets its own panel, filled row by row. Missing assets
    /// print their notice and leave a blank panel. The figure is flushed
    /// once, after every panel has been drawn, and not at all when none of
    /// the assets was found.
    pub fn display_grid<T: fmt::Display>(
        &mut self,
        asset_ids: &[T],
        columns: usize,
    ) -> Result<Vec<Outcome>, DisplayError> {
        if asset_ids.is_empty() {
            return Ok(Vec::new());
        }

        let columns = columns.clamp(1, asset_ids.len());
        let rows = asset_ids.len().div_ceil(columns);
        let mut figure = Figure::grid(rows, columns);

        let mut outcomes = Vec::with_capacity(asset_ids.len());
        for (asset_id, panel) in asset_ids.iter().zip(figure.panels_mut()) {
            let surface: &mut dyn Surface = panel;
            outcomes.push(self.display(asset_id, Some(surface))?);
        }

        let rendered = outcomes.iter().filter(|o| o.is_rendered()).count();
        if rendered == 0 {
            debug!(total = outcomes.len(), "no asset found, grid not shown");
            return Ok(outcomes);
        }

        info!(rendered, total = outcomes.len(), rows, columns, "showing asset grid");
        self.plotter.show(figure)?;
        Ok(outcomes)
    }
}

/// Display one asset in its own window, or onto `surface` when given.
///
/// Missing files print `File not found: <path>` to stdout and return
/// normally.
pub fn display(
    asset_id: impl fmt::Display,
    images_dir: &str,
    surface: Option<&mut dyn Surface>,
) -> Result<Outcome, DisplayError> {
    ImageDisplayer::new(images_dir, WindowPlotter::default()).display(asset_id, surface)
}
