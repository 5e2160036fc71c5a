use image::DynamicImage;

use super::figure::Figure;
use super::DisplayError;

/// A drawing target an image can be rendered onto, such as one panel of a
/// larger figure. Drawing never presents anything on screen.
pub trait Surface {
    /// Replace the surface's content with `image`
    fn draw_image(&mut self, image: &DynamicImage);

    /// Show or hide the axis frame and ruler ticks
    fn set_axes_visible(&mut self, visible: bool);
}

/// The plotting collaborator that owns the screen.
///
/// `show` is the display flush: it presents a finished figure to the user.
pub trait Plotter {
    fn show(&mut self, figure: Figure) -> Result<(), DisplayError>;
}
