//! Vampire: high-collared cape with a crimson lining, widow's peak, fangs.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb, with_alpha};
use crate::spritesheet::Direction;

const SKIN: Rgba<u8> = rgb(214, 214, 226);
const HAIR: Rgba<u8> = rgb(26, 22, 30);
const CAPE: Rgba<u8> = rgb(30, 24, 36);
const LINING: Rgba<u8> = rgb(150, 16, 30);
const SUIT: Rgba<u8> = rgb(46, 40, 54);
const SHIRT: Rgba<u8> = rgb(230, 226, 220);
const MEDALLION: Rgba<u8> = rgb(214, 176, 64);
const SHOE: Rgba<u8> = rgb(18, 16, 20);
pub const EYES: Rgba<u8> = rgb(230, 30, 40);
const FANG: Rgba<u8> = rgb(250, 250, 250);

const BOB: [i32; 4] = [0, -1, 0, -1];
const STEP: [i32; 4] = [0, 3, 0, -3];
const CAPE_FLARE: [i32; 4] = [0, 2, 1, 3];

pub fn draw_vampire(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let step = STEP[frame];
    let flare = CAPE_FLARE[frame];
    let cx = 32;
    let head_y = 21 + bob;
    let top = 29 + bob;
    let hip = 43 + bob;

    match direction {
        Direction::Down => {
            // Open cape behind, showing the lining
            canvas.polygon(&[(cx - 8, top - 2), (cx + 8, top - 2), (cx + 13 + flare, 56), (cx - 13 - flare, 56)], CAPE);
            canvas.polygon(&[(cx - 7, top), (cx + 7, top), (cx + 11 + flare, 55), (cx - 11 - flare, 55)], LINING);
            draw_legs_front(canvas, cx, hip, step);
            canvas.rect(cx - 6, top, 13, hip - top, SUIT);
            canvas.polygon(&[(cx - 3, top), (cx + 3, top), (cx, top + 8)], SHIRT);
            canvas.circle(cx, top + 9, 1, MEDALLION);
            for side in [-1, 1] {
                canvas.thick_line((cx + side * 7, top + 1), (cx + side * 9, top + 12 - side * step / 3), 3, SUIT);
                canvas.point(cx + side * 9, top + 13 - side * step / 3, SKIN);
            }
            // Collar flares up behind the head
            canvas.polygon(&[(cx - 8, top), (cx - 11, head_y - 4), (cx - 5, top - 3)], LINING);
            canvas.polygon(&[(cx + 8, top), (cx + 11, head_y - 4), (cx + 5, top - 3)], LINING);
            draw_face_front(canvas, cx, head_y, frame);
        }
        Direction::Up => {
            draw_legs_front(canvas, cx, hip, -step);
            canvas.rect(cx - 6, top, 13, hip - top, SUIT);
            canvas.circle(cx, head_y, 6, HAIR);
            canvas.polygon(&[(cx - 9, top - 4), (cx + 9, top - 4), (cx + 13 + flare, 56), (cx - 13 - flare, 56)], CAPE);
            canvas.line((cx, top), (cx - flare, 55), darken(CAPE, 0.4));
            canvas.line((cx - 6, top + 4), (cx - 9 - flare, 54), brighten(CAPE, 0.1));
            canvas.line((cx + 6, top + 4), (cx + 9 + flare, 54), brighten(CAPE, 0.1));
            canvas.rect(cx - 9, top - 6, 19, 3, CAPE);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            // Cape billows behind
            canvas.polygon(
                &[(cx - s * 2, top - 3), (cx - s * 7, top), (cx - s * (14 + flare * 2), 54), (cx - s * 2, 55)],
                CAPE,
            );
            canvas.line((cx - s * 6, top + 2), (cx - s * (13 + flare * 2), 53), LINING);
            canvas.thick_line((cx, hip), (cx - s * step, 55), 3, darken(SUIT, 0.3));
            canvas.rect(cx - s * step - 1, 55, 4, 2, SHOE);
            canvas.thick_line((cx, hip), (cx + s * step, 55), 3, SUIT);
            canvas.rect(cx + s * step - 1 + s, 55, 4, 2, SHOE);
            canvas.rect(cx - 4, top, 9, hip - top, SUIT);
            canvas.line((cx + s * 4, top + 1), (cx + s * 4, top + 7), SHIRT);
            let hand = (cx + s * 3, top + 12);
            canvas.thick_line((cx, top + 2), hand, 3, darken(SUIT, 0.1));
            canvas.point(hand.0, hand.1 + 1, SKIN);

            let hx = cx + s;
            canvas.circle(hx, head_y, 6, SKIN);
            canvas.ellipse(hx - s * 2, head_y - 3, 6, 4, HAIR);
            canvas.polygon(&[(hx + s * 2, head_y - 6), (hx + s * 5, head_y - 4), (hx + s * 2, head_y - 2)], HAIR);
            canvas.point(hx + s * 3, head_y, EYES);
            canvas.point(hx + s * 4, head_y + 4, FANG);
            canvas.point(hx + s * 6, head_y + 1, darken(SKIN, 0.2));
            canvas.polygon(&[(cx - s, top + 1), (cx - s * 3, head_y - 3), (cx - s * 7, top)], LINING);
        }
    }
}

fn draw_legs_front(canvas: &mut Canvas, cx: i32, hip: i32, step: i32) {
    for (x, dy) in [(cx - 3, step.max(0)), (cx + 3, (-step).max(0))] {
        canvas.thick_line((x, hip), (x, 55 - dy), 3, darken(SUIT, 0.2));
        canvas.rect(x - 2, 55 - dy, 4, 2, SHOE);
    }
}

fn draw_face_front(canvas: &mut Canvas, cx: i32, hy: i32, frame: usize) {
    canvas.circle(cx, hy, 6, SKIN);
    // Widow's peak
    canvas.ellipse(cx, hy - 5, 6, 2, HAIR);
    canvas.polygon(&[(cx - 2, hy - 4), (cx + 2, hy - 4), (cx, hy - 1)], HAIR);
    canvas.rect(cx - 3, hy, 2, 1, EYES);
    canvas.rect(cx + 2, hy, 2, 1, EYES);
    // Eyes smoulder on alternate frames
    if frame % 2 == 1 {
        canvas.rect(cx - 4, hy - 1, 4, 3, with_alpha(EYES, 120));
        canvas.rect(cx + 1, hy - 1, 4, 3, with_alpha(EYES, 120));
        canvas.rect(cx - 3, hy, 2, 1, EYES);
        canvas.rect(cx + 2, hy, 2, 1, EYES);
    }
    canvas.line((cx - 2, hy + 3), (cx + 2, hy + 3), darken(SKIN, 0.4));
    canvas.points(&[(cx - 1, hy + 4), (cx + 1, hy + 4)], FANG);
}
