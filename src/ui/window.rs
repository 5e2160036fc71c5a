use iced::keyboard::{self, key};
use iced::widget::{canvas, container, image, stack, Column, Row, Space};
use iced::{window, ContentFit, Element, Length, Size, Subscription, Task, Theme};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

use super::axes::Axes;
use super::Message;
use crate::display::figure::{Figure, Panel};
use crate::display::{DisplayError, Plotter};

/// Gap between panels, in logical pixels
const PANEL_SPACING: f32 = 8.0;

/// Set once the process has started its window event loop
static EVENT_LOOP_STARTED: AtomicBool = AtomicBool::new(false);

/// Presents figures in a native window.
///
/// `show` blocks until the user closes the window (Escape also closes it).
/// The window event loop runs on the main thread and at most once per
/// process; later calls return [`DisplayError::WindowUnavailable`].
#[derive(Debug, Clone)]
pub struct WindowPlotter {
    pub title: String,
    pub size: Size,
}

impl Default for WindowPlotter {
    fn default() -> Self {
        WindowPlotter {
            title: "Asset Viewer".to_string(),
            size: Size::new(1024.0, 768.0),
        }
    }
}

impl Plotter for WindowPlotter {
    fn show(&mut self, figure: Figure) -> Result<(), DisplayError> {
        info!(
            rows = figure.rows(),
            columns = figure.columns(),
            "opening figure window"
        );

        claim_event_loop(std::thread::current().name(), &EVENT_LOOP_STARTED)?;

        let window = FigureWindow::new(self.title.clone(), &figure);

        iced::application(FigureWindow::title, FigureWindow::update, FigureWindow::view)
            .subscription(FigureWindow::subscription)
            .theme(FigureWindow::theme)
            .window_size(self.size)
            .centered()
            .run_with(move || (window, Task::none()))?;

        Ok(())
    }
}

/// Take the one event loop this process may run.
/// Only the thread named `main` qualifies; the flag is left alone otherwise.
fn claim_event_loop(thread_name: Option<&str>, started: &AtomicBool) -> Result<(), DisplayError> {
    if thread_name != Some("main") {
        warn!(thread = ?thread_name, "figure window requested off the main thread");
        return Err(DisplayError::WindowUnavailable(
            "windows can only be opened from the main thread",
        ));
    }

    if started.swap(true, Ordering::SeqCst) {
        warn!("figure window requested after the event loop already ran");
        return Err(DisplayError::WindowUnavailable(
            "the window event loop already ran in this process",
        ));
    }

    Ok(())
}

/// What the window needs from one panel
struct PanelView {
    handle: Option<image::Handle>,
    image_size: Option<(u32, u32)>,
    axes_visible: bool,
}

impl From<&Panel> for PanelView {
    fn from(panel: &Panel) -> Self {
        // Upload once; a fresh handle per frame would re-upload the texture
        let handle = panel.image.as_ref().map(|img| {
            let (width, height) = img.dimensions();
            image::Handle::from_rgba(width, height, img.as_raw().clone())
        });

        PanelView {
            handle,
            image_size: panel.dimensions(),
            axes_visible: panel.axes_visible,
        }
    }
}

/// Window state: the figure, flattened for rendering
struct FigureWindow {
    title: String,
    rows: Vec<Vec<PanelView>>,
}

impl FigureWindow {
    fn new(title: String, figure: &Figure) -> Self {
        FigureWindow {
            title,
            rows: figure
                .rows_iter()
                .map(|row| row.iter().map(PanelView::from).collect())
                .collect(),
        }
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Close => window::get_latest().and_then(window::close),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|pressed, _modifiers| match pressed {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::Close),
            _ => None,
        })
    }

    fn view(&self) -> Element<Message> {
        let rows: Vec<Element<Message>> = self
            .rows
            .iter()
            .map(|row| {
                Row::with_children(row.iter().map(panel_view))
                    .spacing(PANEL_SPACING)
                    .height(Length::Fill)
                    .into()
            })
            .collect();

        container(Column::with_children(rows).spacing(PANEL_SPACING))
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn panel_view(panel: &PanelView) -> Element<'_, Message> {
    let picture: Element<Message> = match &panel.handle {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new(Length::Fill, Length::Fill).into(),
    };

    let content: Element<Message> = if panel.axes_visible {
        let axes = canvas(Axes {
            image_size: panel.image_size,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        stack![picture, axes].into()
    } else {
        picture
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Surface;
    use ::image::DynamicImage;

    #[test]
    fn test_panel_view_uploads_drawn_image() {
        let mut panel = Panel::default();
        panel.draw_image(&DynamicImage::new_rgba8(4, 3));
        panel.set_axes_visible(false);

        let view = PanelView::from(&panel);

        assert!(view.handle.is_some());
        assert_eq!(view.image_size, Some((4, 3)));
        assert!(!view.axes_visible);
    }

    #[test]
    fn test_window_flattens_figure() {
        let figure = Figure::grid(2, 3);
        let window = FigureWindow::new("t".to_string(), &figure);

        let widths: Vec<usize> = window.rows.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![3, 3]);
        assert!(window
            .rows
            .iter()
            .flatten()
            .all(|p| p.handle.is_none() && p.axes_visible));
        assert_eq!(window.title(), "t");
    }

    #[test]
    fn test_event_loop_claimed_only_once() {
        let started = AtomicBool::new(false);

        assert!(claim_event_loop(Some("main"), &started).is_ok());
        assert!(matches!(
            claim_event_loop(Some("main"), &started),
            Err(DisplayError::WindowUnavailable(_))
        ));
    }

    #[test]
    fn test_event_loop_refused_off_main_thread() {
        let started = AtomicBool::new(false);

        assert!(matches!(
            claim_event_loop(Some("worker"), &started),
            Err(DisplayError::WindowUnavailable(_))
        ));
        assert!(matches!(
            claim_event_loop(None, &started),
            Err(DisplayError::WindowUnavailable(_))
        ));
        assert!(!started.load(Ordering::SeqCst));
    }

    #[test]
    fn test_show_off_main_thread_returns_error() {
        // Test threads are named after the test, never `main`
        let mut plotter = WindowPlotter::default();

        for _ in 0..2 {
            let result = plotter.show(Figure::single());
            assert!(matches!(result, Err(DisplayError::WindowUnavailable(_))));
        }
    }
}
