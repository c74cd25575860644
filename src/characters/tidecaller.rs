//! Tidecaller: sea priestess with a coral trident and orbiting water droplets.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb, with_alpha};
use crate::spritesheet::Direction;

const SKIN: Rgba<u8> = rgb(150, 190, 196);
const HAIR: Rgba<u8> = rgb(40, 110, 100);
const ROBE: Rgba<u8> = rgb(30, 110, 140);
const ROBE_FOAM: Rgba<u8> = rgb(200, 236, 240);
const SASH: Rgba<u8> = rgb(240, 160, 120);
const CORAL: Rgba<u8> = rgb(236, 110, 96);
const SHAFT: Rgba<u8> = rgb(210, 196, 160);
const WATER: Rgba<u8> = rgb(90, 180, 250);
const EYE: Rgba<u8> = rgb(220, 255, 255);

const BOB: [i32; 4] = [0, -1, -1, 0];
const HEM_WAVE: [i32; 4] = [0, 1, 0, -1];
/// Droplet positions around the body, one set per frame (dx, dy from centre).
const DROPLETS: [[(i32, i32); 3]; 4] = [
    [(-14, -4), (13, 2), (-6, 14)],
    [(-12, 4), (10, -6), (4, 15)],
    [(-6, 12), (-13, -3), (13, 6)],
    [(6, 13), (-12, -6), (11, -3)],
];

pub fn draw_tidecaller(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let cx = 32;
    let head_y = 21 + bob;
    let top = 29 + bob;
    let s = direction.side();
    let wave = HEM_WAVE[frame];

    // Droplets passing behind the body
    draw_droplets(canvas, cx, 38 + bob, frame, true);

    if s == 0 {
        let back = direction == Direction::Up;
        let staff_x = if back { cx - 12 } else { cx + 12 };
        draw_trident(canvas, staff_x, 10 + bob);

        canvas.polygon(&[(cx - 7, top), (cx + 7, top), (cx + 10, 56), (cx - 10, 56)], ROBE);
        // Foam along the hem rises and falls
        for x in cx - 10..=cx + 10 {
            let crest = ((x + wave * 2).rem_euclid(4) == 0) as i32;
            canvas.line((x, 56 - crest), (x, 57), ROBE_FOAM);
        }
        canvas.rect(cx - 7, top + 10, 15, 2, SASH);
        if !back {
            canvas.line((cx, top + 12), (cx - 2, 55), darken(ROBE, 0.25));
            canvas.polygon(&[(cx - 3, top), (cx + 3, top), (cx, top + 5)], SKIN);
        }
        for side in [-1, 1] {
            let hand = (cx + side * 11, top + 9 - (side == 1 && !back || side == -1 && back) as i32 * 3);
            canvas.thick_line((cx + side * 7, top + 1), hand, 3, darken(ROBE, 0.1));
            canvas.circle(hand.0, hand.1, 1, SKIN);
        }

        canvas.circle(cx, head_y, 6, SKIN);
        if back {
            canvas.circle(cx, head_y, 6, HAIR);
            canvas.polygon(&[(cx - 6, head_y), (cx + 6, head_y), (cx + 4 + wave, top + 10), (cx - 4 + wave, top + 10)], HAIR);
        } else {
            canvas.ellipse(cx, head_y - 4, 7, 3, HAIR);
            canvas.thick_line((cx - 6, head_y - 2), (cx - 7 + wave, top + 6), 2, HAIR);
            canvas.thick_line((cx + 6, head_y - 2), (cx + 7 + wave, top + 6), 2, HAIR);
            canvas.rect(cx - 3, head_y, 2, 2, EYE);
            canvas.rect(cx + 2, head_y, 2, 2, EYE);
            canvas.point(cx, head_y + 4, darken(SKIN, 0.3));
        }
        // Shell circlet
        canvas.points(&[(cx - 2, head_y - 6), (cx, head_y - 7), (cx + 2, head_y - 6)], CORAL);
    } else {
        canvas.polygon(&[(cx - 5, top), (cx + 5, top), (cx + s * 8 + wave, 56), (cx - s * 10 + wave, 56)], ROBE);
        canvas.line((cx - s * 10 + wave, 56), (cx + s * 8 + wave, 56), ROBE_FOAM);
        canvas.line((cx - s * 11 + wave, 57), (cx + s * 9 + wave, 57), ROBE_FOAM);
        canvas.rect(cx - 5, top + 10, 11, 2, SASH);

        let hx = cx + s;
        canvas.circle(hx, head_y, 6, SKIN);
        canvas.ellipse(hx - s * 3, head_y - 1, 5, 6, HAIR);
        canvas.thick_line((hx - s * 4, head_y + 3), (hx - s * (7 + wave), top + 10), 3, HAIR);
        canvas.rect(hx + s * 3 - (s < 0) as i32, head_y, 1, 2, EYE);
        canvas.points(&[(hx, head_y - 7), (hx + s * 2, head_y - 6)], CORAL);

        // Trident held upright in front
        draw_trident(canvas, cx + s * 9, 10 + bob);
        let hand = (cx + s * 9, top + 8);
        canvas.thick_line((cx, top + 2), hand, 3, darken(ROBE, 0.1));
        canvas.circle(hand.0, hand.1, 1, SKIN);
    }

    draw_droplets(canvas, cx, 38 + bob, frame, false);
}

fn draw_trident(canvas: &mut Canvas, x: i32, top: i32) {
    canvas.line((x, top + 4), (x, 57), SHAFT);
    canvas.line((x - 3, top + 4), (x + 3, top + 4), CORAL);
    canvas.line((x - 3, top), (x - 3, top + 4), CORAL);
    canvas.line((x + 3, top), (x + 3, top + 4), CORAL);
    canvas.line((x, top - 2), (x, top + 4), CORAL);
    canvas.point(x, top - 3, brighten(CORAL, 0.4));
}

/// Droplets with dy < 0 are on the far side of the orbit.
fn draw_droplets(canvas: &mut Canvas, cx: i32, cy: i32, frame: usize, far_side: bool) {
    for &(dx, dy) in &DROPLETS[frame] {
        if (dy < 0) != far_side {
            continue;
        }
        let color = if far_side { darken(WATER, 0.2) } else { WATER };
        canvas.circle(cx + dx, cy + dy, 1, color);
        canvas.point(cx + dx, cy + dy - 1, brighten(color, 0.5));
        canvas.ellipse_behind(cx + dx, cy + dy, 2, 2, with_alpha(color, 90));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_droplets_orbit() {
        let near = |frame| {
            let img = render_frame(draw_tidecaller, Direction::Down, frame);
            img.enumerate_pixels().filter(|(_, _, p)| **p == WATER).map(|(x, y, _)| (x, y)).collect::<Vec<_>>()
        };
        assert!(!near(0).is_empty());
        assert_ne!(near(0), near(2));
    }

    #[test]
    fn test_trident_in_every_view() {
        for dir in Direction::ALL {
            let img = render_frame(draw_tidecaller, dir, 3);
            assert!(img.pixels().any(|p| *p == CORAL), "{}", dir);
        }
    }
}
