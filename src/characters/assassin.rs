//! Assassin: hooded cloak, face mask, twin daggers and a trailing scarf.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb};
use crate::spritesheet::Direction;

const CLOAK: Rgba<u8> = rgb(44, 42, 56);
const CLOAK_LIGHT: Rgba<u8> = rgb(70, 66, 88);
const MASK: Rgba<u8> = rgb(30, 28, 34);
const SKIN: Rgba<u8> = rgb(214, 170, 140);
const SCARF: Rgba<u8> = rgb(150, 28, 40);
const LEGS: Rgba<u8> = rgb(36, 34, 44);
const BOOTS: Rgba<u8> = rgb(24, 22, 28);
const BLADE: Rgba<u8> = rgb(200, 206, 216);
const HILT: Rgba<u8> = rgb(120, 90, 40);
const EYES: Rgba<u8> = rgb(240, 220, 120);

const BOB: [i32; 4] = [0, -1, 0, -1];
const STEP: [i32; 4] = [0, 3, 0, -3];
const SCARF_FLUTTER: [i32; 4] = [0, 2, 1, 3];

pub fn draw_assassin(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let step = STEP[frame];
    let cx = 32;
    let head_y = 21 + bob;
    let top = 29 + bob;

    match direction {
        Direction::Down | Direction::Up => {
            let back = direction == Direction::Up;
            // Legs in a low crouching stance
            canvas.thick_line((cx - 3, top + 14), (cx - 6, 56 - step.max(0)), 3, LEGS);
            canvas.thick_line((cx + 3, top + 14), (cx + 6, 56 + step.min(0)), 3, LEGS);
            canvas.rect(cx - 8, 56 - step.max(0), 4, 2, BOOTS);
            canvas.rect(cx + 5, 56 + step.min(0), 4, 2, BOOTS);

            if back {
                draw_scarf_tail(canvas, cx, top, frame, 0);
            }
            canvas.polygon(&[(cx - 7, top), (cx + 7, top), (cx + 9, top + 16), (cx - 9, top + 16)], CLOAK);
            canvas.line((cx, top + 2), (cx, top + 15), if back { darken(CLOAK, 0.3) } else { CLOAK_LIGHT });
            canvas.rect(cx - 7, top + 9, 15, 2, SCARF);

            // Arms held low with reversed daggers
            let sway = step / 3;
            for side in [-1, 1] {
                let hand = (cx + side * 10, top + 12 + side * sway);
                canvas.thick_line((cx + side * 7, top + 2), hand, 3, CLOAK_LIGHT);
                canvas.circle(hand.0, hand.1, 1, SKIN);
                if !back {
                    canvas.line((hand.0, hand.1 + 1), (hand.0 + side * 2, hand.1 + 7), BLADE);
                    canvas.point(hand.0, hand.1 - 1, HILT);
                }
            }

            // Hood
            canvas.circle(cx, head_y, 8, CLOAK);
            canvas.polygon(&[(cx - 8, head_y), (cx + 8, head_y), (cx + 6, top + 3), (cx - 6, top + 3)], CLOAK);
            if back {
                canvas.line((cx, head_y - 7), (cx, top + 2), darken(CLOAK, 0.3));
            } else {
                canvas.ellipse(cx, head_y + 1, 5, 5, darken(CLOAK, 0.5));
                canvas.rect(cx - 4, head_y - 1, 9, 3, SKIN);
                canvas.rect(cx - 4, head_y + 2, 9, 4, MASK);
                canvas.rect(cx - 3, head_y, 2, 1, EYES);
                canvas.rect(cx + 2, head_y, 2, 1, EYES);
                draw_scarf_tail(canvas, cx, top, frame, 0);
            }
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            canvas.thick_line((cx, top + 14), (cx - s * 2 - step, 56), 3, darken(LEGS, 0.2));
            canvas.thick_line((cx, top + 14), (cx + s * 2 + step, 56), 3, LEGS);
            canvas.rect(cx - s * 2 - step - 1, 56, 4, 2, BOOTS);
            canvas.rect(cx + s * 2 + step - 1, 56, 4, 2, BOOTS);

            draw_scarf_tail(canvas, cx, top, frame, s);
            canvas.polygon(&[(cx - 5, top), (cx + 5, top), (cx + s * 6, top + 16), (cx - s * 9, top + 16)], CLOAK);
            canvas.line((cx - s * 4, top + 2), (cx - s * 8, top + 15), darken(CLOAK, 0.3));
            canvas.rect(cx - 5, top + 9, 11, 2, SCARF);

            // Forward arm with the blade held out
            let hand = (cx + s * 9, top + 9 - step.abs() / 3);
            canvas.thick_line((cx, top + 3), hand, 3, CLOAK_LIGHT);
            canvas.circle(hand.0, hand.1, 1, SKIN);
            canvas.line((hand.0 + s, hand.1), (hand.0 + s * 7, hand.1 - 2), BLADE);
            canvas.point(hand.0 + s * 7, hand.1 - 2, brighten(BLADE, 0.5));

            let hx = cx + s;
            canvas.circle(hx, head_y, 7, CLOAK);
            canvas.polygon(&[(hx - s * 7, head_y), (hx - s * 10, head_y - 6), (hx - s * 3, head_y - 6)], CLOAK);
            canvas.ellipse(hx + s * 4, head_y + 1, 3, 4, SKIN);
            canvas.rect(hx + s * 2 - (s < 0) as i32 * 4, head_y + 2, 5, 3, MASK);
            canvas.point(hx + s * 4, head_y, EYES);
            canvas.line((hx + s * 7, head_y - 5), (hx + s * 7, head_y + 5), CLOAK_LIGHT);
        }
    }
}

/// Scarf ends flutter behind the body; `s` is the facing sign (0 front/back).
fn draw_scarf_tail(canvas: &mut Canvas, cx: i32, top: i32, frame: usize, s: i32) {
    let flutter = SCARF_FLUTTER[frame];
    if s == 0 {
        canvas.polygon(&[(cx + 2, top + 1), (cx + 5, top + 1), (cx + 6 + flutter, top + 12), (cx + 3 + flutter, top + 13)], SCARF);
    } else {
        let root = (cx - s * 3, top + 1);
        canvas.thick_line(root, (cx - s * (12 + flutter), top + 3 + flutter), 2, SCARF);
        canvas.point(cx - s * (13 + flutter), top + 4 + flutter, darken(SCARF, 0.3));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_blades_visible_except_from_behind() {
        for dir in [Direction::Down, Direction::Left, Direction::Right] {
            let img = render_frame(draw_assassin, dir, 0);
            assert!(img.pixels().any(|p| *p == BLADE), "{}", dir);
        }
        let back = render_frame(draw_assassin, Direction::Up, 0);
        assert!(!back.pixels().any(|p| *p == BLADE));
    }

    #[test]
    fn test_scarf_trails_behind_profile() {
        let facing_left = render_frame(draw_assassin, Direction::Left, 2);
        let right_half = facing_left
            .enumerate_pixels()
            .filter(|(x, _, p)| **p == SCARF && *x > 40)
            .count();
        assert!(right_half > 0);
    }
}
