/// Axis decorations
/// Draws a frame and ruler ticks over a panel, in image pixel coordinates
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Pixels, Point, Rectangle, Size};

use super::Message;

/// Upper bound on ticks per axis
const MAX_TICKS: usize = 6;

/// Tick length in screen pixels
const TICK_LENGTH: f32 = 5.0;

const AXIS_COLOR: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Axis overlay for one panel
#[derive(Debug, Clone, Copy)]
pub struct Axes {
    /// Image dimensions, None for a blank panel
    pub image_size: Option<(u32, u32)>,
}

impl canvas::Program<Message> for Axes {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let stroke = Stroke::default().with_color(AXIS_COLOR).with_width(1.0);

        let Some((width, height)) = self.image_size else {
            // Blank panel: frame only
            let outline = Path::rectangle(Point::ORIGIN, bounds.size());
            frame.stroke(&outline, stroke);
            return vec![frame.into_geometry()];
        };

        let area = fitted_area(bounds.size(), width, height);
        let scale = area.width / width.max(1) as f32;

        frame.stroke(&Path::rectangle(area.position(), area.size()), stroke);

        let bottom = area.y + area.height;
        for value in tick_values(width, MAX_TICKS) {
            let x = area.x + value as f32 * scale;
            frame.stroke(
                &Path::line(Point::new(x, bottom), Point::new(x, bottom - TICK_LENGTH)),
                stroke,
            );
            frame.fill_text(label(value, Point::new(x + 2.0, bottom - TICK_LENGTH - 12.0)));
        }

        // Image rows grow downwards, same as screen space
        for value in tick_values(height, MAX_TICKS) {
            let y = area.y + value as f32 * scale;
            frame.stroke(
                &Path::line(Point::new(area.x, y), Point::new(area.x + TICK_LENGTH, y)),
                stroke,
            );
            frame.fill_text(label(value, Point::new(area.x + TICK_LENGTH + 2.0, y)));
        }

        vec![frame.into_geometry()]
    }
}

fn label(value: u32, position: Point) -> canvas::Text {
    canvas::Text {
        content: value.to_string(),
        position,
        color: AXIS_COLOR,
        size: Pixels(11.0),
        ..canvas::Text::default()
    }
}

/// Where an image of `width x height` lands when scaled to fit `bounds`
/// while keeping its aspect ratio, centered.
pub fn fitted_area(bounds: Size, width: u32, height: u32) -> Rectangle {
    if width == 0 || height == 0 {
        return Rectangle::new(Point::ORIGIN, bounds);
    }

    let scale = (bounds.width / width as f32).min(bounds.height / height as f32);
    let size = Size::new(width as f32 * scale, height as f32 * scale);
    let origin = Point::new(
        (bounds.width - size.width) / 2.0,
        (bounds.height - size.height) / 2.0,
    );

    Rectangle::new(origin, size)
}

/// Tick positions from 0 to `extent`, stepping by 1, 2 or 5 times a power
/// of ten so that at most `max_ticks` values are produced.
pub fn tick_values(extent: u32, max_ticks: usize) -> Vec<u32> {
    if extent == 0 || max_ticks < 2 {
        return vec![0];
    }

    let raw_step = extent as f64 / (max_ticks - 1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());

    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw_step)
        .unwrap_or(10.0 * magnitude)
        .max(1.0) as u32;

    (0..=extent).step_by(step as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_use_round_steps() {
        assert_eq!(tick_values(100, 6), vec![0, 20, 40, 60, 80, 100]);
        assert_eq!(tick_values(640, 6), vec![0, 200, 400, 600]);
    }

    #[test]
    fn test_ticks_never_exceed_limit() {
        for extent in [1, 7, 33, 250, 1919, 4000] {
            let ticks = tick_values(extent, MAX_TICKS);
            assert!(ticks.len() <= MAX_TICKS, "{extent}: {ticks:?}");
            assert_eq!(ticks[0], 0);
            assert!(*ticks.last().unwrap() <= extent);
        }
    }

    #[test]
    fn test_ticks_degenerate() {
        assert_eq!(tick_values(0, 6), vec![0]);
        assert_eq!(tick_values(50, 1), vec![0]);
    }

    #[test]
    fn test_fitted_area_letterboxes() {
        let area = fitted_area(Size::new(200.0, 100.0), 50, 50);
        assert_eq!(area.size(), Size::new(100.0, 100.0));
        assert_eq!(area.position(), Point::new(50.0, 0.0));
    }

    #[test]
    fn test_fitted_area_empty_image() {
        let bounds = Size::new(30.0, 40.0);
        assert_eq!(fitted_area(bounds, 0, 10).size(), bounds);
    }
}
