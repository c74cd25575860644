//! Library-level contracts of the generated sheets.
//!
//! These check the published layout of each PNG (sizes, cell placement,
//! transparency) and that rendering is a pure function of its inputs.

use image::RgbaImage;
use sha2::{Digest, Sha256};

use spritegen::characters::wizard::{orb_center, orb_color};
use spritegen::characters::{builtin, builtin_characters, CharacterGenerator};
use spritegen::masks::{render_transition_masks, MaskEdge, MASK_WIDTH};
use spritegen::output::{save_png, scale_image};
use spritegen::spritesheet::{frame_rect, Direction, FRAMES_PER_DIRECTION};
use spritegen::tiles::{render_tile_atlas, tile_by_name, Face, TILES, TILE_HEIGHT, TILE_WIDTH};

/// SHA-256 of the encoded PNG bytes.
fn png_digest(image: &RgbaImage) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("digest.png");
    save_png(image, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    Sha256::digest(&bytes).iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn test_every_character_sheet_is_256_square() {
    for generator in builtin_characters() {
        assert_eq!(generator.render_sheet().dimensions(), (256, 256), "{}", generator.name());
    }
}

#[test]
fn test_png_bytes_are_reproducible() {
    let wizard = builtin("wizard").unwrap();
    assert_eq!(png_digest(&wizard.render_sheet()), png_digest(&wizard.render_sheet()));
    assert_eq!(png_digest(&render_tile_atlas()), png_digest(&render_tile_atlas()));
    assert_eq!(png_digest(&render_transition_masks()), png_digest(&render_transition_masks()));
}

#[test]
fn test_wizard_orb_pulses_in_sheet() {
    let sheet = builtin("wizard").unwrap().render_sheet();
    let (ox, oy) = orb_center(Direction::Down);
    for frame in 0..FRAMES_PER_DIRECTION {
        let (x0, y0, _, _) = frame_rect(Direction::Down, frame);
        let pixel = *sheet.get_pixel(x0 + ox as u32, y0 + oy as u32);
        assert_eq!(pixel, orb_color(frame), "frame {}", frame);
    }
    assert_ne!(orb_color(0), orb_color(1));
}

#[test]
fn test_every_cell_is_populated() {
    for generator in builtin_characters() {
        let sheet = generator.render_sheet();
        for dir in Direction::ALL {
            for frame in 0..FRAMES_PER_DIRECTION {
                let (x0, y0, w, h) = frame_rect(dir, frame);
                let opaque = (y0..y0 + h)
                    .flat_map(|y| (x0..x0 + w).map(move |x| (x, y)))
                    .filter(|&(x, y)| sheet.get_pixel(x, y).0[3] > 0)
                    .count();
                assert!(opaque > 150, "{} {} {}", generator.name(), dir, frame);
            }
        }
    }
}

#[test]
fn test_tile_atlas_layout() {
    let atlas = render_tile_atlas();
    assert_eq!(atlas.dimensions(), (TILES.len() as u32 * TILE_WIDTH, 4 * TILE_HEIGHT));

    let lava = tile_by_name("lava").unwrap();
    for frame in 0..4u32 {
        let (x0, y0) = (lava.id as u32 * TILE_WIDTH, frame * TILE_HEIGHT);
        // corners of every cell are outside the diamond
        assert_eq!(atlas.get_pixel(x0, y0).0[3], 0);
        // the bottom vertex of a flat diamond sits on the cell's last row
        assert_eq!(atlas.get_pixel(x0 + 19, y0 + TILE_HEIGHT - 1).0[3], 255);
    }
}

#[test]
fn test_cliff_shows_shaded_side_faces() {
    let atlas = render_tile_atlas();
    let cliff = tile_by_name("cliff").unwrap();
    let x0 = cliff.id as u32 * TILE_WIDTH;
    let cell: Vec<_> = (0..TILE_HEIGHT).flat_map(|y| (x0..x0 + TILE_WIDTH).map(move |x| (x, y))).collect();
    for face in [Face::Left, Face::Right] {
        let shade = face.shade(cliff.base);
        assert!(cell.iter().any(|&(x, y)| *atlas.get_pixel(x, y) == shade), "missing {:?}", face);
    }

    let grass = tile_by_name("grass").unwrap();
    let gx = grass.id as u32 * TILE_WIDTH;
    let left = Face::Left.shade(grass.base);
    assert!((0..TILE_HEIGHT).all(|y| (gx..gx + TILE_WIDTH).all(|x| *atlas.get_pixel(x, y) != left)));
}

#[test]
fn test_masks_are_white_and_fade_from_their_edge() {
    let masks = render_transition_masks();
    assert_eq!(masks.dimensions(), (320, 112));

    for pixel in masks.pixels().filter(|p| p.0[3] > 0) {
        assert_eq!(&pixel.0[..3], &[255, 255, 255]);
    }

    // Midpoint of the north-east edge of the north mask, walking to the centre.
    let north_x = MaskEdge::North.index() * MASK_WIDTH;
    let samples: Vec<u8> = (0..10).map(|i| masks.get_pixel(north_x + 59 - 2 * i, 82 + i).0[3]).collect();
    assert!(samples[0] >= 240, "edge alpha {}", samples[0]);
    assert!(samples.windows(2).all(|w| w[0] >= w[1]), "{:?}", samples);
    assert_eq!(*samples.last().unwrap(), 0);
}

#[test]
fn test_scaled_sheet_keeps_cells_aligned() {
    let sheet = builtin("vampire").unwrap().render_sheet();
    let scaled = scale_image(sheet.clone(), 2);
    assert_eq!(scaled.dimensions(), (512, 512));
    let (x0, y0, _, _) = frame_rect(Direction::Right, 2);
    for (x, y) in [(10u32, 20u32), (32, 32), (50, 60)] {
        assert_eq!(scaled.get_pixel((x0 + x) * 2, (y0 + y) * 2), sheet.get_pixel(x0 + x, y0 + y));
    }
}
