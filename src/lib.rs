//! Look up dataset images by asset identifier and display them, either in
//! their own window or on a panel of a larger figure.

pub mod asset;
pub mod config;
pub mod display;
pub mod ui;

pub use asset::{AssetRef, DEFAULT_IMAGES_DIR};
pub use display::figure::{Figure, Panel};
pub use display::{display, DisplayError, ImageDisplayer, Outcome, Plotter, Surface};
pub use ui::window::WindowPlotter;
