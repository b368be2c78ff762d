/// Overlay text colors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Blue,
    Green,
    Orange,
}

impl Color {
    /// Blue, green, red triple as camera frames store it.
    pub const fn bgr(&self) -> (u8, u8, u8) {
        match self {
            Self::Black => (0, 0, 0),
            Self::Red => (0, 0, 255),
            Self::Blue => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Orange => (0, 165, 255),
        }
    }
}
