//! Colouring of checker output

use std::sync::OnceLock;

use owo_colors::{OwoColorize, Style, colors::css};

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The document passed (green)
    Success,
    /// A nesting anomaly (amber)
    Anomaly,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().fg::<css::Green>(),
            Self::Anomaly => Style::new().fg::<css::Orange>(),
        }
    }
}

/// Colour is decided once per process, from stdout
fn color_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| supports_color::on(supports_color::Stream::Stdout).is_some())
}

pub fn paint(text: &str, tone: Tone) -> String {
    if color_enabled() {
        text.style(tone.style()).to_string()
    } else {
        text.to_string()
    }
}
