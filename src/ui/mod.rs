/// Window rendering of figures (iced)

pub mod axes;
pub mod window;

/// Window events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close the figure window
    Close,
}
