use crate::classify::StatusColor;
use colored::{Color, Colorize};

/// Sink for rendered result lines.
pub trait Reporter {
    fn emit(&self, message: &str, color: StatusColor);
}

/// Prints each line to stdout in its color.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&self, message: &str, color: StatusColor) {
        println!("{}", message.color(Color::from(color)));
    }
}

impl From<StatusColor> for Color {
    fn from(color: StatusColor) -> Self {
        match color {
            StatusColor::Green => Color::Green,
            StatusColor::Blue => Color::Blue,
            StatusColor::Yellow => Color::Yellow,
            StatusColor::Red => Color::Red,
            StatusColor::Magenta => Color::Magenta,
        }
    }
}
