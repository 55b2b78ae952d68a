use serde::{Deserialize, Serialize};

/// Named drawing colors with fixed 8-bit RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Black,
    #[default]
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Orange,
    Purple,
    Brown,
    Gray,
}

impl ColorName {
    /// RGB triplet for the color.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::White => (255, 255, 255),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::Magenta => (255, 0, 255),
            Self::Cyan => (0, 255, 255),
            Self::Orange => (255, 165, 0),
            Self::Purple => (128, 0, 128),
            Self::Brown => (139, 69, 19),
            Self::Gray => (128, 128, 128),
        }
    }
}
