use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Film-grain generator for the overlay surface. The buffer covers the full
/// configured size (never divided by the pixelation factor) and is rewritten
/// from scratch every frame; nothing carries over between ticks.
#[derive(Debug, Clone)]
pub struct NoiseOverlay {
    width: u32,
    height: u32,
    alpha: u8,
    pixels: Vec<u8>,
    rng: StdRng,
}

impl NoiseOverlay {
    pub fn new(width: u32, height: u32, alpha: u8) -> Self {
        Self::with_rng(width, height, alpha, StdRng::from_entropy())
    }

    pub fn seeded(width: u32, height: u32, alpha: u8, seed: u64) -> Self {
        Self::with_rng(width, height, alpha, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: u32, height: u32, alpha: u8, rng: StdRng) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            alpha,
            pixels: vec![0; (width * height * 4) as usize],
            rng,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One generator per live widget: a size or alpha change means this
    /// instance is torn down and a fresh one built in its place.
    pub fn matches(&self, width: u32, height: u32, alpha: u8) -> bool {
        self.width == width.max(1) && self.height == height.max(1) && self.alpha == alpha
    }

    /// Fill the whole buffer with fresh grain: an independent uniform gray
    /// per pixel, alpha fixed at the configured value.
    pub fn regenerate(&mut self) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            let gray = self.rng.gen::<u8>();
            pixel[0] = gray;
            pixel[1] = gray;
            pixel[2] = gray;
            pixel[3] = self.alpha;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pixel_keeps_the_configured_alpha() {
        let mut overlay = NoiseOverlay::seeded(32, 32, 20, 7);
        overlay.regenerate();
        for pixel in overlay.pixels().chunks_exact(4) {
            assert_eq!(pixel[3], 20);
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    #[test]
    fn buffer_covers_the_full_overlay_size() {
        let overlay = NoiseOverlay::seeded(250, 250, 20, 0);
        assert_eq!(overlay.size(), (250, 250));
        assert_eq!(overlay.pixels().len(), 250 * 250 * 4);
    }

    #[test]
    fn each_tick_produces_a_different_frame() {
        let mut overlay = NoiseOverlay::seeded(16, 16, 20, 42);
        overlay.regenerate();
        let first = overlay.pixels().to_vec();
        overlay.regenerate();
        assert_ne!(overlay.pixels(), first.as_slice());
    }

    #[test]
    fn reconfiguration_is_detected() {
        let overlay = NoiseOverlay::seeded(100, 100, 20, 0);
        assert!(overlay.matches(100, 100, 20));
        assert!(!overlay.matches(100, 100, 30));
        assert!(!overlay.matches(120, 100, 20));
    }
}
