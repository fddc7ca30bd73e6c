use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Color {
    Blue,
    Orange,
    Gray,
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Blue => write!(formatter, "#1383C6"),
            Color::Orange => write!(formatter, "#E16A2C"),
            Color::Gray => write!(formatter, "#8C8C8C"),
        }
    }
}
