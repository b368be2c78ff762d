/// A single RGB image, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    pub const CHANNELS: usize = 3;

    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> anyhow::Result<Self> {
        let expected = width * height * Self::CHANNELS;
        if pixels.len() == expected {
            Ok(Self {
                width,
                height,
                pixels,
            })
        } else {
            Err(anyhow::anyhow!(
                "{}x{} frame needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            ))
        }
    }

    /// All-black frame.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * Self::CHANNELS],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        (x < self.width && y < self.height).then(|| {
            let i = (y * self.width + x) * Self::CHANNELS;
            [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
        })
    }

    /// Flip horizontally so the player sees themselves as in a mirror.
    pub fn mirror(mut self) -> Self {
        let stride = self.width * Self::CHANNELS;
        if stride > 0 {
            for row in self.pixels.chunks_exact_mut(stride) {
                for x in 0..self.width / 2 {
                    let l = x * Self::CHANNELS;
                    let r = (self.width - 1 - x) * Self::CHANNELS;
                    for c in 0..Self::CHANNELS {
                        row.swap(l + c, r + c);
                    }
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Frame {
        // 3x2, pixel value = x
        let pixels = (0..2)
            .flat_map(|_| (0..3u8).flat_map(|x| [x; 3]))
            .collect::<Vec<u8>>();
        Frame::new(3, 2, pixels).unwrap()
    }

    #[test]
    fn rejects_short_buffers() {
        assert!(Frame::new(2, 2, vec![0; 11]).is_err());
        assert!(Frame::new(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn mirror_swaps_columns() {
        let frame = ramp().mirror();
        assert_eq!(frame.pixel(0, 0), Some([2, 2, 2]));
        assert_eq!(frame.pixel(1, 1), Some([1, 1, 1]));
        assert_eq!(frame.pixel(2, 1), Some([0, 0, 0]));
        assert_eq!(frame.pixel(3, 0), None);
    }

    #[test]
    fn mirror_twice_is_identity() {
        assert_eq!(ramp().mirror().mirror(), ramp());
    }
}
