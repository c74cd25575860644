//! Soldier: steel helmet, olive fatigues, backpack and a slung rifle.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{darken, rgb};
use crate::spritesheet::Direction;

const SKIN: Rgba<u8> = rgb(220, 176, 136);
const FATIGUES: Rgba<u8> = rgb(92, 104, 62);
const FATIGUES_DARK: Rgba<u8> = rgb(66, 76, 44);
const CAMO: Rgba<u8> = rgb(120, 110, 70);
const HELMET: Rgba<u8> = rgb(78, 88, 56);
const STRAP: Rgba<u8> = rgb(60, 48, 34);
const PACK: Rgba<u8> = rgb(104, 92, 60);
const BOOT: Rgba<u8> = rgb(40, 34, 28);
const RIFLE: Rgba<u8> = rgb(44, 44, 48);
const STOCK: Rgba<u8> = rgb(110, 72, 40);
const EYE: Rgba<u8> = rgb(30, 26, 22);

const BOB: [i32; 4] = [0, -1, 0, -1];
const MARCH: [i32; 4] = [0, 4, 0, -4];
const ARM_SWING: [i32; 4] = [0, 3, 0, -3];

pub fn draw_soldier(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let cx = 32;
    let head_y = 22 + bob;
    let top = 30 + bob;
    let hip = 43 + bob;

    match direction {
        Direction::Down | Direction::Up => {
            let back = direction == Direction::Up;
            let lift = MARCH[frame] / 2;
            for (x, dy) in [(cx - 4, lift.max(0)), (cx + 4, (-lift).max(0))] {
                canvas.rect(x - 2, hip, 5, 13 - dy, FATIGUES_DARK);
                canvas.rect(x - 2, 55 - dy, 5, 3, BOOT);
            }
            canvas.rect(cx - 7, top, 15, hip - top + 1, FATIGUES);
            canvas.points(&[(cx - 4, top + 3), (cx + 3, top + 7), (cx - 2, top + 10), (cx + 5, top + 2)], CAMO);
            canvas.rect(cx - 7, hip - 2, 15, 2, STRAP);

            if back {
                canvas.rect(cx - 6, top + 1, 13, 11, PACK);
                canvas.stroke_rect(cx - 6, top + 1, 13, 11, 1, darken(PACK, 0.3));
                canvas.rect(cx - 5, top + 12, 11, 3, darken(PACK, 0.15));
                canvas.thick_line((cx + 6, top - 2), (cx - 8, top + 14), 2, RIFLE);
                canvas.line((cx - 8, top + 14), (cx - 10, top + 17), STOCK);
            } else {
                canvas.line((cx - 6, top), (cx + 6, hip - 3), STRAP);
                canvas.rect(cx - 5, top + 4, 3, 3, darken(FATIGUES, 0.2));
                canvas.rect(cx + 3, top + 4, 3, 3, darken(FATIGUES, 0.2));
            }

            let swing = ARM_SWING[frame];
            for side in [-1, 1] {
                let hand = (cx + side * 10, top + 12 + side * swing);
                canvas.thick_line((cx + side * 8, top + 1), hand, 3, FATIGUES);
                canvas.circle(hand.0, hand.1, 1, SKIN);
            }

            canvas.circle(cx, head_y, 6, SKIN);
            if !back {
                canvas.rect(cx - 3, head_y, 2, 2, EYE);
                canvas.rect(cx + 2, head_y, 2, 2, EYE);
                canvas.line((cx - 1, head_y + 4), (cx + 1, head_y + 4), darken(SKIN, 0.3));
                canvas.line((cx - 5, head_y + 1), (cx - 3, head_y + 6), STRAP);
                canvas.line((cx + 5, head_y + 1), (cx + 3, head_y + 6), STRAP);
            }
            draw_helmet(canvas, cx, head_y, 0);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            let march = MARCH[frame];
            canvas.thick_line((cx, hip), (cx - s * march, 55), 4, darken(FATIGUES_DARK, 0.2));
            canvas.rect(cx - s * march - 2 + s, 55, 5, 3, BOOT);
            canvas.thick_line((cx, hip), (cx + s * march, 55), 4, FATIGUES_DARK);
            canvas.rect(cx + s * march - 2 + s, 55, 5, 3, BOOT);

            // Pack on the back, torso, then the rifle carried at port arms
            canvas.rect(cx - s * 9 - (s > 0) as i32 * 4, top + 1, 5, 12, PACK);
            canvas.line((cx - s * 9, top + 2), (cx - s * 9, top + 12), darken(PACK, 0.3));
            canvas.rect(cx - 5, top, 11, hip - top + 1, FATIGUES);
            canvas.points(&[(cx - 2, top + 4), (cx + 2, top + 9)], CAMO);
            canvas.rect(cx - 5, hip - 2, 11, 2, STRAP);

            let swing = ARM_SWING[frame];
            let hand = (cx + s * 7, top + 9 + swing / 2);
            canvas.thick_line((cx + s * 2, top + 4), (cx + s * 14, top + 2 + swing / 2), 2, RIFLE);
            canvas.thick_line((cx + s * 2, top + 4), (cx - s * 4, top + 9 + swing / 2), 2, STOCK);
            canvas.thick_line((cx, top + 2), hand, 3, FATIGUES);
            canvas.circle(hand.0, hand.1, 1, SKIN);

            let hx = cx + s;
            canvas.circle(hx, head_y, 6, SKIN);
            canvas.rect(hx + s * 3 - (s < 0) as i32, head_y, 1, 2, EYE);
            canvas.point(hx + s * 6, head_y + 2, darken(SKIN, 0.2));
            canvas.line((hx - s, head_y + 1), (hx + s, head_y + 6), STRAP);
            draw_helmet(canvas, hx, head_y, s);
        }
    }
}

fn draw_helmet(canvas: &mut Canvas, hx: i32, hy: i32, s: i32) {
    canvas.ellipse(hx, hy - 3, 8, 5, HELMET);
    canvas.rect(hx - 8, hy - 3, 17, 2, HELMET);
    canvas.line((hx - 8, hy - 1), (hx + 8, hy - 1), darken(HELMET, 0.35));
    canvas.line((hx - 4 + s * 2, hy - 6), (hx + 1 + s * 2, hy - 7), CAMO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_pack_seen_from_behind_and_sides() {
        for dir in [Direction::Up, Direction::Left, Direction::Right] {
            let img = render_frame(draw_soldier, dir, 0);
            assert!(img.pixels().any(|p| *p == PACK), "{}", dir);
        }
        let front = render_frame(draw_soldier, Direction::Down, 0);
        assert!(!front.pixels().any(|p| *p == PACK));
    }

    #[test]
    fn test_rifle_points_forward() {
        let right = render_frame(draw_soldier, Direction::Right, 0);
        let max_x = right.enumerate_pixels().filter(|(_, _, p)| **p == RIFLE).map(|(x, _, _)| x).max();
        assert!(max_x.unwrap_or(0) >= 44);
    }
}
