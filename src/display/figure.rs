/// In-memory figures
///
/// A figure is a grid of panels. Panels hold decoded pixels and axis state,
/// nothing is tied to a window until the figure is handed to a `Plotter`.

use image::{DynamicImage, RgbaImage};

use super::surface::Surface;

/// One drawing area of a figure
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Last image drawn onto the panel (None = blank)
    pub image: Option<RgbaImage>,
    /// Axis frame and ticks, on by default like a fresh plot axis
    pub axes_visible: bool,
}

impl Default for Panel {
    fn default() -> Self {
        Panel {
            image: None,
            axes_visible: true,
        }
    }
}

impl Panel {
    pub fn is_blank(&self) -> bool {
        self.image.is_none()
    }

    /// Pixel dimensions of the drawn image
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| img.dimensions())
    }
}

impl Surface for Panel {
    fn draw_image(&mut self, image: &DynamicImage) {
        self.image = Some(image.to_rgba8());
    }

    fn set_axes_visible(&mut self, visible: bool) {
        self.axes_visible = visible;
    }
}

/// Panels laid out row-major in `rows x columns` cells
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    rows: usize,
    columns: usize,
    panels: Vec<Panel>,
}

impl Figure {
    /// A figure with a single panel
    pub fn single() -> Self {
        Figure::grid(1, 1)
    }

    /// A figure with `rows x columns` blank panels (each at least 1)
    pub fn grid(rows: usize, columns: usize) -> Self {
        let rows = rows.max(1);
        let columns = columns.max(1);

        Figure {
            rows,
            columns,
            panels: vec![Panel::default(); rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> std::slice::IterMut<'_, Panel> {
        self.panels.iter_mut()
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// Iterate the panels one row at a time
    pub fn rows_iter(&self) -> std::slice::Chunks<'_, Panel> {
        self.panels.chunks(self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_panel_is_blank_with_axes() {
        let panel = Panel::default();
        assert!(panel.is_blank());
        assert!(panel.axes_visible);
        assert_eq!(panel.dimensions(), None);
    }

    #[test]
    fn test_draw_converts_to_rgba() {
        let mut panel = Panel::default();
        let img = DynamicImage::new_rgb8(3, 2);

        panel.draw_image(&img);
        panel.set_axes_visible(false);

        assert_eq!(panel.dimensions(), Some((3, 2)));
        assert!(!panel.axes_visible);
    }

    #[test]
    fn test_grid_layout() {
        let figure = Figure::grid(2, 3);
        assert_eq!(figure.panels().len(), 6);

        let rows: Vec<usize> = figure.rows_iter().map(|row| row.len()).collect();
        assert_eq!(rows, vec![3, 3]);
    }

    #[test]
    fn test_grid_clamps_zero_dimensions() {
        let figure = Figure::grid(0, 0);
        assert_eq!((figure.rows(), figure.columns()), (1, 1));
        assert_eq!(figure, Figure::single());
    }
}
