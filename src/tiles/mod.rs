//! Isometric tile atlas
//!
//! Twenty terrain tiles drawn as isometric diamonds, optionally extruded into
//! blocks. The atlas has one column per tile id and one row per animation
//! frame. Every pixel records which face painted it, so animation recoloring
//! never has to guess a pixel's face from its color.

pub mod anim;

use image::{Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb};
use crate::shapes::{rasterize_line, rasterize_polygon, PixelSet};
use crate::spritesheet::render_spritesheet;

/// Width of one tile cell.
pub const TILE_WIDTH: u32 = 40;
/// Height of one tile cell; tall enough for the tallest block.
pub const TILE_HEIGHT: u32 = 56;
/// Animation frames per tile (atlas rows).
pub const TILE_FRAMES: usize = 4;
/// Top-face centre line for a flat tile.
const BASE_CENTER_Y: i32 = 46;
/// Highest allowed extrusion; keeps the top face inside the cell.
pub const MAX_ELEVATION: i32 = 36;

/// Which part of a block a pixel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Right,
}

impl Face {
    /// Face color derived from the tile's base color.
    pub fn shade(self, base: Rgba<u8>) -> Rgba<u8> {
        match self {
            Face::Top => base,
            Face::Left => darken(base, 0.25),
            Face::Right => darken(base, 0.45),
        }
    }
}

/// Tiles whose surface moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileAnimation {
    Water,
    DeepWater,
    Lava,
    Toxic,
    Plasma,
    EnergyField,
}

impl TileAnimation {
    /// Undarkened color of a pixel on an animation frame.
    pub fn color(self, base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
        match self {
            TileAnimation::Water => anim::anim_water(base, x, y, frame),
            TileAnimation::DeepWater => anim::anim_deep_water(base, x, y, frame),
            TileAnimation::Lava => anim::anim_lava(base, x, y, frame),
            TileAnimation::Toxic => anim::anim_toxic(base, x, y, frame),
            TileAnimation::Plasma => anim::anim_plasma(base, x, y, frame),
            TileAnimation::EnergyField => anim::anim_energy_field(base, x, y, frame),
        }
    }
}

/// Surface decoration painted on frame 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePattern {
    Plain,
    /// Noise speckles on the top face: (noise scale, threshold, brighten amount).
    Speckle { scale: u32, threshold: u32, amount: u32 },
    Tufts,
    Ripples,
    Cracks,
    Cobbles,
    Planks,
    Plates,
    Bricks,
    Strata,
    Facets,
}

/// One entry of the tile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDef {
    pub id: usize,
    pub name: &'static str,
    pub base: Rgba<u8>,
    pub elevation: i32,
    pub animation: Option<TileAnimation>,
    pub pattern: TilePattern,
}

impl TileDef {
    const fn new(id: usize, name: &'static str, base: Rgba<u8>, elevation: i32, pattern: TilePattern) -> Self {
        Self { id, name, base, elevation, animation: None, pattern }
    }

    const fn animated(mut self, animation: TileAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }
}

const fn speckle(scale: u32, threshold: u32, amount: u32) -> TilePattern {
    TilePattern::Speckle { scale, threshold, amount }
}

/// Every tile, indexed by id (= atlas column).
pub const TILES: [TileDef; 20] = [
    TileDef::new(0, "grass", rgb(84, 150, 62), 0, TilePattern::Tufts),
    TileDef::new(1, "dirt", rgb(134, 96, 60), 0, speckle(22, 30, 18)),
    TileDef::new(2, "sand", rgb(214, 190, 130), 0, speckle(35, 35, 25)),
    TileDef::new(3, "stone", rgb(128, 128, 134), 0, TilePattern::Cracks),
    TileDef::new(4, "water", rgb(50, 120, 200), 0, TilePattern::Ripples).animated(TileAnimation::Water),
    TileDef::new(5, "deep_water", rgb(28, 64, 140), 0, TilePattern::Ripples).animated(TileAnimation::DeepWater),
    TileDef::new(6, "lava", rgb(200, 60, 24), 0, speckle(25, 30, 40)).animated(TileAnimation::Lava),
    TileDef::new(7, "snow", rgb(226, 232, 240), 0, speckle(30, 40, 60)),
    TileDef::new(8, "ice", rgb(160, 210, 236), 0, TilePattern::Cracks),
    TileDef::new(9, "swamp", rgb(76, 96, 52), 0, speckle(18, 25, 22)),
    TileDef::new(10, "toxic", rgb(100, 190, 40), 0, speckle(20, 30, 35)).animated(TileAnimation::Toxic),
    TileDef::new(11, "cobblestone", rgb(116, 110, 104), 0, TilePattern::Cobbles),
    TileDef::new(12, "wood_floor", rgb(150, 100, 58), 0, TilePattern::Planks),
    TileDef::new(13, "metal_floor", rgb(120, 128, 140), 0, TilePattern::Plates),
    TileDef::new(14, "plasma", rgb(170, 60, 210), 0, speckle(20, 30, 40)).animated(TileAnimation::Plasma),
    TileDef::new(15, "energy_field", rgb(60, 200, 220), 0, TilePattern::Plain).animated(TileAnimation::EnergyField),
    TileDef::new(16, "stone_wall", rgb(140, 138, 146), 20, TilePattern::Bricks),
    TileDef::new(17, "cliff", rgb(120, 96, 72), 28, TilePattern::Strata),
    TileDef::new(18, "brick_wall", rgb(164, 74, 56), 20, TilePattern::Bricks),
    TileDef::new(19, "crystal", rgb(150, 110, 230), 12, TilePattern::Facets),
];

/// Look up a tile by name.
pub fn tile_by_name(name: &str) -> Option<&'static TileDef> {
    TILES.iter().find(|t| t.name == name)
}

/// A tile cell plus the per-pixel face buffer filled while drawing.
struct TileCanvas {
    canvas: Canvas,
    faces: Vec<Option<Face>>,
}

impl TileCanvas {
    fn new() -> Self {
        Self {
            canvas: Canvas::new(TILE_WIDTH, TILE_HEIGHT),
            faces: vec![None; (TILE_WIDTH * TILE_HEIGHT) as usize],
        }
    }

    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= TILE_WIDTH as i32 || y >= TILE_HEIGHT as i32 {
            return None;
        }
        Some((y as u32 * TILE_WIDTH + x as u32) as usize)
    }

    fn face_at(&self, x: i32, y: i32) -> Option<Face> {
        Self::index(x, y).and_then(|i| self.faces[i])
    }

    /// Paint a face region and record ownership.
    fn fill_face(&mut self, pixels: &PixelSet, face: Face, color: Rgba<u8>) {
        for &(x, y) in pixels {
            if let Some(i) = Self::index(x, y) {
                self.faces[i] = Some(face);
                self.canvas.point(x, y, color);
            }
        }
    }

    /// Brighten a pixel of `face`; pixels owned by other faces are left alone.
    fn accent(&mut self, x: i32, y: i32, face: Face, base: Rgba<u8>, amount: f32) {
        if self.face_at(x, y) == Some(face) {
            self.canvas.point(x, y, brighten(face.shade(base), amount));
        }
    }

    fn accent_all(&mut self, pixels: &PixelSet, face: Face, base: Rgba<u8>, amount: f32) {
        for &(x, y) in pixels {
            self.accent(x, y, face, base, amount);
        }
    }

    fn face_pixels(&self, face: Face) -> Vec<(i32, i32)> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| **f == Some(face))
            .map(|(i, _)| ((i as u32 % TILE_WIDTH) as i32, (i as u32 / TILE_WIDTH) as i32))
            .collect()
    }

    /// Repaint every owned pixel from its face and position.
    fn recolor<F>(&mut self, color_of: F)
    where
        F: Fn(u32, u32, Face) -> Rgba<u8>,
    {
        for (i, face) in self.faces.iter().enumerate() {
            if let Some(face) = *face {
                let (x, y) = (i as u32 % TILE_WIDTH, i as u32 / TILE_WIDTH);
                self.canvas.point(x as i32, y as i32, color_of(x, y, face));
            }
        }
    }
}

/// Top-face centre line for an elevation.
pub fn top_center_y(elevation: i32) -> i32 {
    BASE_CENTER_Y - elevation.clamp(0, MAX_ELEVATION)
}

/// Vertices of the top diamond.
fn top_diamond(cy: i32) -> [(i32, i32); 6] {
    [(0, cy), (19, cy - 10), (20, cy - 10), (39, cy), (20, cy + 9), (19, cy + 9)]
}

fn draw_block(tc: &mut TileCanvas, base: Rgba<u8>, elevation: i32) {
    let e = elevation.clamp(0, MAX_ELEVATION);
    let cy = top_center_y(e);
    if e > 0 {
        let left = rasterize_polygon(&[(0, cy), (19, cy + 9), (19, cy + 9 + e), (0, cy + e)]);
        let right = rasterize_polygon(&[(20, cy + 9), (39, cy), (39, cy + e), (20, cy + 9 + e)]);
        tc.fill_face(&left, Face::Left, Face::Left.shade(base));
        tc.fill_face(&right, Face::Right, Face::Right.shade(base));
    }
    tc.fill_face(&rasterize_polygon(&top_diamond(cy)), Face::Top, base);
}

fn draw_pattern(tc: &mut TileCanvas, tile: &TileDef) {
    let base = tile.base;
    let cy = top_center_y(tile.elevation);
    let seed = tile.id as f64 * 7.31;
    match tile.pattern {
        TilePattern::Plain => {}
        TilePattern::Speckle { scale, threshold, amount } => {
            let scale = scale as f64 / 100.0;
            let threshold = threshold as f64 / 100.0;
            for (x, y) in tc.face_pixels(Face::Top) {
                if anim::noise3(x as f64 * scale + 0.5, y as f64 * scale + 0.5, seed) > threshold {
                    tc.accent(x, y, Face::Top, base, amount as f32 / 100.0);
                }
            }
        }
        TilePattern::Tufts => {
            for (x, y) in tc.face_pixels(Face::Top) {
                if anim::noise3(x as f64 * 0.41 + 0.5, y as f64 * 0.53 + 0.5, seed) > 0.3 {
                    tc.accent(x, y, Face::Top, base, 0.2);
                    tc.accent(x, y - 1, Face::Top, base, 0.35);
                }
            }
        }
        TilePattern::Ripples => {
            for (i, &(x, dy)) in [(8, -3), (22, -5), (14, 2), (27, 3)].iter().enumerate() {
                let len = 4 + (i as i32 % 2) * 2;
                tc.accent_all(&rasterize_line((x, cy + dy), (x + len, cy + dy)), Face::Top, base, 0.3);
            }
        }
        TilePattern::Cracks => {
            let crack = [(9, cy - 1), (14, cy + 1), (17, cy), (23, cy + 3)];
            for pair in crack.windows(2) {
                tc.accent_all(&rasterize_line(pair[0], pair[1]), Face::Top, base, 0.25);
            }
            tc.accent_all(&rasterize_line((17, cy), (21, cy - 5)), Face::Top, base, 0.25);
        }
        TilePattern::Cobbles => {
            for (x, y) in tc.face_pixels(Face::Top) {
                let (a, b) = (x + 2 * (y - cy), x - 2 * (y - cy));
                if a.rem_euclid(8) == 0 || b.rem_euclid(8) == 0 {
                    tc.accent(x, y, Face::Top, base, 0.2);
                }
            }
        }
        TilePattern::Planks => {
            for (x, y) in tc.face_pixels(Face::Top) {
                if (x - 2 * (y - cy)).rem_euclid(7) == 0 {
                    tc.accent(x, y, Face::Top, base, 0.18);
                }
            }
        }
        TilePattern::Plates => {
            for (x, y) in tc.face_pixels(Face::Top) {
                let (a, b) = (x + 2 * (y - cy), x - 2 * (y - cy));
                if a.rem_euclid(20) == 0 || b.rem_euclid(20) == 0 {
                    tc.accent(x, y, Face::Top, base, 0.3);
                } else if a.rem_euclid(20) == 3 && b.rem_euclid(20) == 3 {
                    tc.accent(x, y, Face::Top, base, 0.5);
                }
            }
        }
        TilePattern::Bricks => {
            for face in [Face::Left, Face::Right] {
                for (x, y) in tc.face_pixels(face) {
                    let row = (y - cy).div_euclid(5);
                    let mortar_row = (y - cy).rem_euclid(5) == 0;
                    let joint = (x + row * 4).rem_euclid(8) == 0;
                    if mortar_row || joint {
                        tc.accent(x, y, face, base, 0.2);
                    }
                }
            }
            for (x, y) in tc.face_pixels(Face::Top) {
                if (x + 2 * (y - cy)).rem_euclid(10) == 0 {
                    tc.accent(x, y, Face::Top, base, 0.15);
                }
            }
        }
        TilePattern::Strata => {
            for face in [Face::Left, Face::Right] {
                for (x, y) in tc.face_pixels(face) {
                    let wobble = (anim::noise3(x as f64 * 0.3 + 0.5, seed, 0.0) * 2.0).round() as i32;
                    if (y + wobble).rem_euclid(6) == 0 {
                        tc.accent(x, y, face, base, 0.15);
                    }
                }
            }
            for (x, y) in tc.face_pixels(Face::Top) {
                if anim::noise3(x as f64 * 0.3 + 0.5, y as f64 * 0.3 + 0.5, seed) > 0.35 {
                    tc.accent(x, y, Face::Top, base, 0.25);
                }
            }
        }
        TilePattern::Facets => {
            let e = tile.elevation;
            tc.accent_all(&rasterize_line((19, cy - 9), (19, cy + 8)), Face::Top, base, 0.35);
            tc.accent_all(&rasterize_line((5, cy + 3), (5, cy + 3 + e - 2)), Face::Left, base, 0.3);
            tc.accent_all(&rasterize_line((31, cy + 5), (31, cy + 5 + e - 3)), Face::Right, base, 0.25);
            tc.accent_all(&rasterize_line((8, cy - 1), (16, cy - 5)), Face::Top, base, 0.6);
        }
    }
}

/// Render one tile cell for one animation frame.
///
/// Frame 0 is the decorated static tile. Later frames of animated tiles are
/// recolored pixel by pixel through the tile's animation; static tiles repeat
/// frame 0.
pub fn render_tile(tile: &TileDef, frame: usize) -> RgbaImage {
    let mut tc = TileCanvas::new();
    draw_block(&mut tc, tile.base, tile.elevation);
    draw_pattern(&mut tc, tile);

    let frame = frame % TILE_FRAMES;
    if let Some(animation) = tile.animation.filter(|_| frame > 0) {
        tc.recolor(|x, y, face| face.shade(animation.color(tile.base, x, y, frame)));
    }
    tc.canvas.into_image()
}

/// Render the full atlas: 20 columns (tile id) × 4 rows (frame).
pub fn render_tile_atlas() -> RgbaImage {
    log::debug!("rendering tile atlas ({} tiles, {} frames)", TILES.len(), TILE_FRAMES);
    let cells: Vec<RgbaImage> = (0..TILE_FRAMES)
        .flat_map(|frame| TILES.iter().map(move |tile| render_tile(tile, frame)))
        .collect();
    render_spritesheet(&cells, Some(TILES.len() as u32))
}
