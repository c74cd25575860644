//! Drawing surface used by every generator.
//!
//! A [`Canvas`] wraps an [`RgbaImage`]. Anything drawn outside the image is
//! clipped silently. Pixels are overwritten, not blended,
//! so a semi-transparent fill replaces whatever was underneath.

use image::{Rgba, RgbaImage};

use crate::color::TRANSPARENT;
use crate::shapes::{
    rasterize_ellipse, rasterize_line, rasterize_polygon, rasterize_rect, rasterize_stroke,
    rasterize_thick_line, PixelSet,
};

/// An RGBA pixel buffer with clipped drawing.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, TRANSPARENT) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Image coordinates for `(x, y)`, if inside.
    fn to_image_coords(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let (ix, iy) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        (ix < self.image.width() && iy < self.image.height()).then_some((ix, iy))
    }

    /// Read a pixel, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        self.to_image_coords(x, y).map(|(ix, iy)| *self.image.get_pixel(ix, iy))
    }

    /// Paint a single pixel.
    pub fn point(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if let Some((ix, iy)) = self.to_image_coords(x, y) {
            self.image.put_pixel(ix, iy, color);
        }
    }

    /// Paint several single pixels.
    pub fn points(&mut self, points: &[(i32, i32)], color: Rgba<u8>) {
        for &(x, y) in points {
            self.point(x, y, color);
        }
    }

    /// Paint every pixel of a rasterized shape.
    pub fn fill_pixels(&mut self, pixels: &PixelSet, color: Rgba<u8>) {
        for &(x, y) in pixels {
            self.point(x, y, color);
        }
    }

    /// One-pixel Bresenham line.
    pub fn line(&mut self, p0: (i32, i32), p1: (i32, i32), color: Rgba<u8>) {
        self.fill_pixels(&rasterize_line(p0, p1), color);
    }

    /// Line with a square pen of the given width.
    pub fn thick_line(&mut self, p0: (i32, i32), p1: (i32, i32), width: i32, color: Rgba<u8>) {
        self.fill_pixels(&rasterize_thick_line(p0, p1, width), color);
    }

    /// Connected line segments through `points`.
    pub fn polyline(&mut self, points: &[(i32, i32)], width: i32, color: Rgba<u8>) {
        for pair in points.windows(2) {
            self.thick_line(pair[0], pair[1], width, color);
        }
    }

    /// Filled rectangle from its top-left corner and size.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
        self.fill_pixels(&rasterize_rect(x, y, w, h), color);
    }

    /// Rectangle outline.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: Rgba<u8>) {
        self.fill_pixels(&rasterize_stroke(x, y, w, h, thickness), color);
    }

    /// Filled ellipse from its centre and radii.
    pub fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba<u8>) {
        self.fill_pixels(&rasterize_ellipse(cx, cy, rx, ry), color);
    }

    /// Filled circle.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
        self.ellipse(cx, cy, r, r, color);
    }

    /// Filled polygon.
    pub fn polygon(&mut self, vertices: &[(i32, i32)], color: Rgba<u8>) {
        self.fill_pixels(&rasterize_polygon(vertices), color);
    }

    /// Paint only the pixels of a shape that are still fully transparent.
    ///
    /// Used for glows and auras that must sit behind what is already drawn.
    pub fn fill_behind(&mut self, pixels: &PixelSet, color: Rgba<u8>) {
        for &(x, y) in pixels {
            if let Some((ix, iy)) = self.to_image_coords(x, y) {
                if self.image.get_pixel(ix, iy).0[3] == 0 {
                    self.image.put_pixel(ix, iy, color);
                }
            }
        }
    }

    /// Ellipse painted behind existing pixels.
    pub fn ellipse_behind(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba<u8>) {
        self.fill_behind(&rasterize_ellipse(cx, cy, rx, ry), color);
    }

    /// Count pixels exactly equal to `color`.
    pub fn count_color(&self, color: Rgba<u8>) -> usize {
        self.image.pixels().filter(|p| **p == color).count()
    }
}
