//! JSON sidecar describing where each frame lives in a generated sheet.
//!
//! Maps are `BTreeMap`s so the serialized output is byte-stable.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::masks::{MaskEdge, MASK_HEIGHT, MASK_WIDTH};
use crate::spritesheet::{frame_rect, Direction, FRAMES_PER_DIRECTION};
use crate::tiles::{TILES, TILE_FRAMES, TILE_HEIGHT, TILE_WIDTH};

/// Walk cycle playback rate.
pub const WALK_FPS: u32 = 8;
/// Animated tile playback rate.
pub const TILE_FPS: u32 = 4;

/// A frame's position and size within a sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetFrame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SheetFrame {
    fn scaled(x: u32, y: u32, w: u32, h: u32, scale: u32) -> Self {
        Self { x: x * scale, y: y * scale, w: w * scale, h: h * scale }
    }
}

/// Ordered frame list played as one animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetAnimation {
    pub frames: Vec<String>,
    pub fps: u32,
}

/// Per-tile properties in the tile atlas sidecar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileInfo {
    pub id: usize,
    pub elevation: i32,
    pub animated: bool,
}

/// Complete sheet metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetMetadata {
    pub image: String,
    pub size: [u32; 2],
    pub frames: BTreeMap<String, SheetFrame>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub animations: BTreeMap<String, SheetAnimation>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tiles: BTreeMap<String, TileInfo>,
}

impl SheetMetadata {
    fn new(image: &str, width: u32, height: u32, scale: u32) -> Self {
        Self {
            image: image.to_string(),
            size: [width * scale, height * scale],
            frames: BTreeMap::new(),
            animations: BTreeMap::new(),
            tiles: BTreeMap::new(),
        }
    }
}

fn scale_factor(scale: u8) -> u32 {
    scale.max(1) as u32
}

/// Frame key of a character cell, e.g. `left_2`.
pub fn character_frame_key(direction: Direction, frame: usize) -> String {
    format!("{}_{}", direction.name(), frame)
}

/// Metadata for a 4×4 character sheet.
pub fn character_metadata(image: &str, scale: u8) -> SheetMetadata {
    let scale = scale_factor(scale);
    let mut meta = SheetMetadata::new(image, 256, 256, scale);
    for direction in Direction::ALL {
        let mut keys = Vec::with_capacity(FRAMES_PER_DIRECTION);
        for frame in 0..FRAMES_PER_DIRECTION {
            let (x, y, w, h) = frame_rect(direction, frame);
            let key = character_frame_key(direction, frame);
            meta.frames.insert(key.clone(), SheetFrame::scaled(x, y, w, h, scale));
            keys.push(key);
        }
        meta.animations.insert(format!("walk_{}", direction.name()), SheetAnimation { frames: keys, fps: WALK_FPS });
    }
    meta
}

/// Metadata for the tile atlas. Frame keys are `<tile>_<frame>`.
pub fn tile_metadata(image: &str, scale: u8) -> SheetMetadata {
    let scale = scale_factor(scale);
    let columns = TILES.len() as u32;
    let mut meta = SheetMetadata::new(image, columns * TILE_WIDTH, TILE_FRAMES as u32 * TILE_HEIGHT, scale);
    for tile in TILES.iter() {
        let mut keys = Vec::with_capacity(TILE_FRAMES);
        for frame in 0..TILE_FRAMES {
            let key = format!("{}_{}", tile.name, frame);
            let (x, y) = (tile.id as u32 * TILE_WIDTH, frame as u32 * TILE_HEIGHT);
            meta.frames.insert(key.clone(), SheetFrame::scaled(x, y, TILE_WIDTH, TILE_HEIGHT, scale));
            keys.push(key);
        }
        if tile.is_animated() {
            meta.animations.insert(tile.name.to_string(), SheetAnimation { frames: keys, fps: TILE_FPS });
        }
        meta.tiles.insert(
            tile.name.to_string(),
            TileInfo { id: tile.id, elevation: tile.elevation, animated: tile.is_animated() },
        );
    }
    meta
}

/// Metadata for the transition mask strip. Frame keys are edge names.
pub fn mask_metadata(image: &str, scale: u8) -> SheetMetadata {
    let scale = scale_factor(scale);
    let count = MaskEdge::ALL.len() as u32;
    let mut meta = SheetMetadata::new(image, count * MASK_WIDTH, MASK_HEIGHT, scale);
    for edge in MaskEdge::ALL {
        meta.frames.insert(
            edge.name().to_string(),
            SheetFrame::scaled(edge.index() * MASK_WIDTH, 0, MASK_WIDTH, MASK_HEIGHT, scale),
        );
    }
    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_metadata() {
        let meta = character_metadata("wizard.png", 1);
        assert_eq!(meta.size, [256, 256]);
        assert_eq!(meta.frames.len(), 16);
        assert_eq!(meta.frames["right_3"], SheetFrame { x: 192, y: 192, w: 64, h: 64 });
        assert_eq!(meta.animations["walk_up"].frames, vec!["up_0", "up_1", "up_2", "up_3"]);
        assert!(meta.tiles.is_empty());
    }

    #[test]
    fn test_scaled_rects() {
        let meta = character_metadata("wizard.png", 2);
        assert_eq!(meta.size, [512, 512]);
        assert_eq!(meta.frames["down_1"], SheetFrame { x: 128, y: 0, w: 128, h: 128 });
    }

    #[test]
    fn test_tile_metadata() {
        let meta = tile_metadata("tiles.png", 1);
        assert_eq!(meta.size, [800, 224]);
        assert_eq!(meta.frames.len(), 80);
        assert_eq!(meta.frames["crystal_3"], SheetFrame { x: 760, y: 168, w: 40, h: 56 });
        assert_eq!(meta.animations.len(), 6);
        assert!(meta.tiles["lava"].animated);
        assert!(meta.tiles["cliff"].elevation > 0);
    }

    #[test]
    fn test_mask_metadata_serializes_in_key_order() {
        let meta = mask_metadata("transition_masks.png", 1);
        assert_eq!(meta.frames["west"].x, 240);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.find("\"east\"").unwrap() < json.find("\"north\"").unwrap());
        assert!(!json.contains("animations"));
        assert!(!json.contains("tiles"));
    }
}
