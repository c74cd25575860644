//! Terrain transition masks
//!
//! Four white alpha masks, one per diamond edge, used to blend one terrain
//! into its neighbour. Each mask covers a 2× tile cell; alpha is 255 on the
//! named edge and falls off with a smoothstep toward the diamond centre.

use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use std::fmt;

use crate::color::TRANSPARENT;

/// Width of one mask cell.
pub const MASK_WIDTH: u32 = 80;
/// Height of one mask cell.
pub const MASK_HEIGHT: u32 = 112;

const CENTER_X: f32 = 40.0;
const CENTER_Y: f32 = 92.0;
const HALF_WIDTH: f32 = 40.0;
const HALF_HEIGHT: f32 = 20.0;
/// Fraction of the edge-to-opposite-edge distance covered by the falloff.
const FALLOFF: f32 = 0.35;

/// Diamond edge a mask fades in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskEdge {
    /// Upper-right edge.
    North,
    /// Lower-right edge.
    East,
    /// Lower-left edge.
    South,
    /// Upper-left edge.
    West,
}

impl MaskEdge {
    /// Atlas order, left to right.
    pub const ALL: [MaskEdge; 4] = [MaskEdge::North, MaskEdge::East, MaskEdge::South, MaskEdge::West];

    pub fn name(self) -> &'static str {
        match self {
            MaskEdge::North => "north",
            MaskEdge::East => "east",
            MaskEdge::South => "south",
            MaskEdge::West => "west",
        }
    }

    /// Column of this mask in the atlas.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Signed position toward this edge: 1 on the edge, -1 on the opposite one.
    fn toward(self, u: f32, v: f32) -> f32 {
        match self {
            MaskEdge::North => u - v,
            MaskEdge::East => u + v,
            MaskEdge::South => v - u,
            MaskEdge::West => -u - v,
        }
    }
}

impl fmt::Display for MaskEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alpha for normalised diamond coordinates (`|u| + |v| <= 1` is inside).
pub fn mask_alpha_uv(edge: MaskEdge, u: f32, v: f32) -> u8 {
    if u.abs() + v.abs() > 1.0 {
        return 0;
    }
    let d = (1.0 - edge.toward(u, v)) / 2.0;
    let t = (d / FALLOFF).clamp(0.0, 1.0);
    let smooth = 3.0 * t * t - 2.0 * t * t * t;
    (255.0 * (1.0 - smooth)).round() as u8
}

/// Pixel of one mask cell, sampled at the pixel centre.
pub fn mask_pixel(edge: MaskEdge, x: u32, y: u32) -> Rgba<u8> {
    let u = (x as f32 + 0.5 - CENTER_X) / HALF_WIDTH;
    let v = (y as f32 + 0.5 - CENTER_Y) / HALF_HEIGHT;
    if u.abs() + v.abs() > 1.0 {
        return TRANSPARENT;
    }
    Rgba([255, 255, 255, mask_alpha_uv(edge, u, v)])
}

/// Render all four masks side by side (320×112).
pub fn render_transition_masks() -> RgbaImage {
    log::debug!("rendering {} transition masks", MaskEdge::ALL.len());
    let width = MASK_WIDTH * MaskEdge::ALL.len() as u32;
    let mut image = RgbaImage::new(width, MASK_HEIGHT);
    let row_len = width as usize * 4;
    image.par_chunks_exact_mut(row_len).enumerate().for_each(|(y, row)| {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let x = x as u32;
            let edge = MaskEdge::ALL[(x / MASK_WIDTH) as usize];
            px.copy_from_slice(&mask_pixel(edge, x % MASK_WIDTH, y as u32).0);
        }
    });
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(render_transition_masks().dimensions(), (320, 112));
    }

    #[test]
    fn test_zero_outside_diamond() {
        let img = render_transition_masks();
        for edge in MaskEdge::ALL {
            let x0 = edge.index() * MASK_WIDTH;
            for y in 0..MASK_HEIGHT {
                for x in 0..MASK_WIDTH {
                    let u = (x as f32 + 0.5 - CENTER_X) / HALF_WIDTH;
                    let v = (y as f32 + 0.5 - CENTER_Y) / HALF_HEIGHT;
                    if u.abs() + v.abs() > 1.0 {
                        assert_eq!(img.get_pixel(x0 + x, y).0[3], 0, "{} ({}, {})", edge, x, y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_full_alpha_on_named_edge() {
        assert_eq!(mask_alpha_uv(MaskEdge::North, 0.5, -0.5), 255);
        assert_eq!(mask_alpha_uv(MaskEdge::East, 0.5, 0.5), 255);
        assert_eq!(mask_alpha_uv(MaskEdge::South, -0.5, 0.5), 255);
        assert_eq!(mask_alpha_uv(MaskEdge::West, -0.5, -0.5), 255);
        // Opposite edge and centre are clear.
        assert_eq!(mask_alpha_uv(MaskEdge::North, -0.5, 0.5), 0);
        assert_eq!(mask_alpha_uv(MaskEdge::North, 0.0, 0.0), 0);
    }

    #[test]
    fn test_alpha_falls_toward_centre() {
        // Pixel walks from each edge midpoint to the centre.
        let walks = [
            (MaskEdge::North, (59, 82), (-2, 1)),
            (MaskEdge::East, (59, 101), (-2, -1)),
            (MaskEdge::South, (20, 101), (2, -1)),
            (MaskEdge::West, (20, 82), (2, 1)),
        ];
        for (edge, (sx, sy), (dx, dy)) in walks {
            let alphas: Vec<u8> = (0..10)
                .map(|k| mask_pixel(edge, (sx + dx * k) as u32, (sy + dy * k) as u32).0[3])
                .collect();
            assert!(alphas[0] >= 240, "{} starts at {}", edge, alphas[0]);
            assert!(alphas.windows(2).all(|w| w[0] >= w[1]), "{}: {:?}", edge, alphas);
            assert_eq!(*alphas.last().unwrap(), 0);
        }
    }

    #[test]
    fn test_masks_are_white() {
        let img = render_transition_masks();
        assert!(img.pixels().filter(|p| p.0[3] > 0).all(|p| p.0[..3] == [255, 255, 255]));
    }
}
