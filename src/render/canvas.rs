use anyhow::Context;
use image::Pixel;
use image::Rgba;
use image::RgbaImage;

/// A fixed-size RGBA drawing surface with the handful of primitives the
/// tile compositor needs: opaque fills, alpha-blended fills for shadows,
/// 1px strokes, and image paste. All rects are clipped to the surface.
pub struct Canvas(RgbaImage);

impl Canvas {
    pub fn new(w: u32, h: u32, background: Rgba<u8>) -> Self {
        Self(RgbaImage::from_pixel(w, h, background))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn fill(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
        for (px, py) in self.clip(x, y, w, h) {
            self.0.put_pixel(px, py, color);
        }
    }

    /// alpha-composite color over the existing pixels
    pub fn blend(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
        for (px, py) in self.clip(x, y, w, h) {
            self.0.get_pixel_mut(px, py).blend(&color);
        }
    }

    pub fn stroke(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
        self.fill(x, y, w, 1, color);
        self.fill(x, y + h.saturating_sub(1), w, 1, color);
        self.fill(x, y, 1, h, color);
        self.fill(x + w.saturating_sub(1), y, 1, h, color);
    }

    pub fn paste(&mut self, img: &RgbaImage, x: u32, y: u32) {
        image::imageops::overlay(&mut self.0, img, i64::from(x), i64::from(y));
    }

    pub fn png(&self) -> anyhow::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.0
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode canvas as png")?;
        Ok(buf)
    }

    fn clip(&self, x: u32, y: u32, w: u32, h: u32) -> Vec<(u32, u32)> {
        let x1 = (x + w).min(self.width());
        let y1 = (y + h).min(self.height());
        (y..y1).flat_map(|py| (x..x1).map(move |px| (px, py))).collect()
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.0.get_pixel(x, y)
    }
}
