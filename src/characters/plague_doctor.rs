//! Plague doctor: beaked mask, wide-brimmed hat, long coat, lantern.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb, with_alpha};
use crate::spritesheet::Direction;

const COAT: Rgba<u8> = rgb(40, 38, 36);
const COAT_EDGE: Rgba<u8> = rgb(66, 62, 58);
const MASK: Rgba<u8> = rgb(206, 194, 168);
const LENS: Rgba<u8> = rgb(180, 40, 30);
const HAT: Rgba<u8> = rgb(28, 26, 26);
const BAND: Rgba<u8> = rgb(110, 84, 50);
const GLOVE: Rgba<u8> = rgb(74, 56, 40);
const BOOT: Rgba<u8> = rgb(30, 26, 24);
const LANTERN: Rgba<u8> = rgb(100, 90, 70);
const FLAME: Rgba<u8> = rgb(255, 196, 80);

const BOB: [i32; 4] = [0, -1, 0, -1];
const STEP: [i32; 4] = [0, 3, 0, -3];
const LANTERN_SWING: [i32; 4] = [0, 1, 0, -1];
const FLICKER: [u8; 4] = [60, 110, 80, 130];

pub fn draw_plague_doctor(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let step = STEP[frame];
    let cx = 32;
    let head_y = 20 + bob;
    let top = 29 + bob;

    match direction {
        Direction::Down | Direction::Up => {
            let back = direction == Direction::Up;
            canvas.rect(cx - 6, 55 - step.max(0), 5, 3, BOOT);
            canvas.rect(cx + 2, 55 + step.min(0), 5, 3, BOOT);

            // Coat flares toward the hem
            canvas.polygon(&[(cx - 7, top), (cx + 7, top), (cx + 11, 55), (cx - 11, 55)], COAT);
            if back {
                canvas.line((cx, top + 12), (cx, 54), darken(COAT, 0.4));
            } else {
                canvas.line((cx, top + 1), (cx, 54), COAT_EDGE);
                canvas.points(&[(cx + 2, top + 4), (cx + 2, top + 8), (cx + 2, top + 12)], BAND);
            }
            canvas.rect(cx - 8, top + 12, 17, 2, BAND);

            let lantern_x = if back { cx + 12 } else { cx - 12 };
            canvas.thick_line((cx - 7, top + 2), (cx - 10, top + 13), 3, COAT_EDGE);
            canvas.thick_line((cx + 7, top + 2), (cx + 10, top + 13), 3, COAT_EDGE);
            canvas.circle(cx - 10, top + 14, 1, GLOVE);
            canvas.circle(cx + 10, top + 14, 1, GLOVE);
            draw_lantern(canvas, lantern_x + LANTERN_SWING[frame], top + 16, frame);

            // Hat brim wider than the shoulders
            canvas.circle(cx, head_y, 6, HAT);
            if !back {
                canvas.ellipse(cx, head_y + 1, 5, 4, MASK);
                canvas.circle(cx - 2, head_y, 1, LENS);
                canvas.circle(cx + 2, head_y, 1, LENS);
                canvas.polygon(&[(cx - 2, head_y + 3), (cx + 2, head_y + 3), (cx, head_y + 10)], MASK);
                canvas.line((cx, head_y + 4), (cx, head_y + 9), darken(MASK, 0.25));
            }
            canvas.ellipse(cx, head_y - 5, 12, 2, HAT);
            canvas.rect(cx - 5, head_y - 12, 11, 7, HAT);
            canvas.rect(cx - 5, head_y - 7, 11, 2, BAND);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            canvas.rect(cx - s * step - 2, 55, 5, 3, darken(BOOT, 0.3));
            canvas.rect(cx + s * step - 2, 55, 5, 3, BOOT);

            canvas.polygon(&[(cx - 5, top), (cx + 5, top), (cx + s * 8, 55), (cx - s * 11, 55)], COAT);
            canvas.line((cx + s * 4, top + 2), (cx + s * 7, 54), COAT_EDGE);
            canvas.rect(cx - 5, top + 12, 11, 2, BAND);

            // Cane hand forward, lantern held out in front
            let hand = (cx + s * 8, top + 12);
            canvas.thick_line((cx, top + 2), hand, 3, COAT_EDGE);
            canvas.circle(hand.0, hand.1, 1, GLOVE);
            draw_lantern(canvas, hand.0 + s * 2 + LANTERN_SWING[frame] * s, hand.1 + 4, frame);

            let hx = cx + s;
            canvas.circle(hx, head_y, 6, HAT);
            canvas.ellipse(hx + s * 3, head_y + 1, 3, 4, MASK);
            // The beak juts well past the hat brim
            canvas.polygon(&[(hx + s * 4, head_y), (hx + s * 4, head_y + 5), (hx + s * 14, head_y + 7)], MASK);
            canvas.line((hx + s * 5, head_y + 4), (hx + s * 13, head_y + 7), darken(MASK, 0.3));
            canvas.circle(hx + s * 4, head_y - 1, 1, LENS);
            canvas.ellipse(hx, head_y - 5, 11, 2, HAT);
            canvas.rect(hx - 5, head_y - 12, 11, 7, HAT);
            canvas.rect(hx - 5, head_y - 7, 11, 2, BAND);
        }
    }
}

/// Small caged lantern hanging from (x, y); the glow flickers per frame.
fn draw_lantern(canvas: &mut Canvas, x: i32, y: i32, frame: usize) {
    canvas.line((x, y - 3), (x, y - 1), LANTERN);
    canvas.rect(x - 2, y, 5, 6, LANTERN);
    canvas.rect(x - 1, y + 1, 3, 4, FLAME);
    canvas.point(x, y + 2, brighten(FLAME, 0.6));
    canvas.ellipse_behind(x, y + 3, 5, 5, with_alpha(FLAME, FLICKER[frame]));
}
