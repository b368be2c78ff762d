/// Fixed overlay positions, top to bottom.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq)]
pub enum Anchor {
    Gesture,
    Countdown,
    Computer,
    Result,
    Summary,
    Prompt,
}

impl Anchor {
    /// Pixel coordinates of the text baseline.
    pub const fn position(&self) -> (u32, u32) {
        match self {
            Self::Gesture => (10, 50),
            Self::Countdown => (100, 100),
            Self::Computer => (10, 150),
            Self::Result => (10, 200),
            Self::Summary => (10, 250),
            Self::Prompt => (10, 300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        assert_eq!(Anchor::Gesture.position(), (10, 50));
        assert_eq!(Anchor::Countdown.position(), (100, 100));
        assert_eq!(Anchor::Computer.position(), (10, 150));
        assert_eq!(Anchor::Result.position(), (10, 200));
        assert_eq!(Anchor::Summary.position(), (10, 250));
        assert_eq!(Anchor::Prompt.position(), (10, 300));
    }

    #[test]
    fn order_follows_height() {
        let mut anchors = [
            Anchor::Prompt,
            Anchor::Computer,
            Anchor::Gesture,
            Anchor::Summary,
            Anchor::Result,
            Anchor::Countdown,
        ];
        anchors.sort();
        let heights = anchors.iter().map(|a| a.position().1).collect::<Vec<_>>();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }
}
