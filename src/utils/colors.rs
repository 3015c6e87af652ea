//! ANSI helpers for terminal output.

use crate::core::gradient::Rgb;
use ansi_term::{Colour, Style};

pub fn colour(c: Rgb) -> Colour {
    Colour::RGB(c.r, c.g, c.b)
}

/// Paint `text` with a true-colour background and foreground.
pub fn paint_cell(text: &str, background: Rgb, foreground: Rgb) -> String {
    Style::new()
        .on(colour(background))
        .fg(colour(foreground))
        .paint(text)
        .to_string()
}
