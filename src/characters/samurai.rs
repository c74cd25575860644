//! Samurai: lacquered armor, kabuto with crescent crest, katana at the hip.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb};
use crate::spritesheet::Direction;

const ARMOR: Rgba<u8> = rgb(150, 30, 36);
const LACING: Rgba<u8> = rgb(220, 190, 110);
const UNDER: Rgba<u8> = rgb(36, 36, 46);
const SKIN: Rgba<u8> = rgb(226, 184, 140);
const HAKAMA: Rgba<u8> = rgb(50, 50, 70);
const HELM: Rgba<u8> = rgb(34, 30, 34);
const CREST: Rgba<u8> = rgb(230, 190, 60);
const SAYA: Rgba<u8> = rgb(24, 22, 24);
const TSUKA: Rgba<u8> = rgb(200, 196, 180);
const SANDAL: Rgba<u8> = rgb(140, 110, 70);

const BOB: [i32; 4] = [0, -1, 0, -1];
const STRIDE: [i32; 4] = [0, 3, 0, -3];
const SLEEVE: [i32; 4] = [0, 1, 0, -1];

pub fn draw_samurai(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let cx = 32;
    let head_y = 21 + bob;
    let top = 29 + bob;
    let hip = 41 + bob;
    let s = direction.side();

    // Hakama trousers are wide and pleated
    if s == 0 {
        let stride = STRIDE[frame];
        canvas.polygon(&[(cx - 7, hip), (cx + 7, hip), (cx + 10 + stride, 55), (cx - 10 + stride, 55)], HAKAMA);
        canvas.line((cx + stride / 2, hip + 2), (cx + stride, 55), darken(HAKAMA, 0.3));
        canvas.line((cx - 5, hip + 2), (cx - 7 + stride, 55), darken(HAKAMA, 0.2));
        canvas.line((cx + 5, hip + 2), (cx + 7 + stride, 55), darken(HAKAMA, 0.2));
        canvas.rect(cx - 7, 56, 5, 2, SANDAL);
        canvas.rect(cx + 3, 56, 5, 2, SANDAL);
    } else {
        let stride = STRIDE[frame] * 2;
        canvas.polygon(&[(cx - 5, hip), (cx + 5, hip), (cx + s * 7 + stride * s, 55), (cx - s * 8 - stride * s, 55)], HAKAMA);
        canvas.line((cx, hip + 2), (cx + s * 2, 55), darken(HAKAMA, 0.3));
        canvas.rect(cx + s * 5 + stride * s - 2, 56, 5, 2, SANDAL);
        canvas.rect(cx - s * 6 - stride * s - 2, 56, 5, 2, darken(SANDAL, 0.3));
    }

    // Katana on the left hip; behind the body except facing up
    let katana_behind = direction != Direction::Up;
    if katana_behind {
        draw_katana(canvas, cx, hip, direction);
    }

    // Do (chest plate) and kusazuri (skirt plates)
    let half = if s == 0 { 8 } else { 6 };
    canvas.rect(cx - half, top, half * 2 + 1, hip - top, ARMOR);
    for y in (top + 3..hip).step_by(3) {
        canvas.line((cx - half, y), (cx + half, y), darken(ARMOR, 0.3));
    }
    for x in [cx - half / 2, cx + half / 2] {
        canvas.line((x, top + 1), (x, hip - 1), LACING);
    }
    canvas.rect(cx - half - 1, hip, half * 2 + 3, 4, ARMOR);
    canvas.line((cx - half - 1, hip + 3), (cx + half + 1, hip + 3), LACING);
    canvas.rect(cx - half, hip - 1, half * 2 + 1, 1, UNDER);

    if !katana_behind {
        draw_katana(canvas, cx, hip, direction);
    }

    // Sode shoulder guards and arms
    let sleeve = SLEEVE[frame];
    match direction {
        Direction::Down | Direction::Up => {
            for side in [-1, 1] {
                canvas.rect(cx + side * 9 - 3, top, 6, 7, ARMOR);
                canvas.line((cx + side * 9 - 3, top + 3), (cx + side * 9 + 2, top + 3), LACING);
                let hand = (cx + side * 10, top + 13 + side * sleeve);
                canvas.thick_line((cx + side * 9, top + 6), hand, 3, UNDER);
                canvas.circle(hand.0, hand.1, 1, SKIN);
            }
        }
        Direction::Left | Direction::Right => {
            canvas.rect(cx - 3, top, 7, 8, ARMOR);
            canvas.line((cx - 3, top + 4), (cx + 3, top + 4), LACING);
            // Hand resting on the hilt
            let hand = (cx + s * 4, hip - 1 + sleeve);
            canvas.thick_line((cx, top + 7), hand, 3, UNDER);
            canvas.circle(hand.0, hand.1, 1, SKIN);
        }
    }

    draw_head(canvas, cx + s, head_y, direction, frame);
}

fn draw_katana(canvas: &mut Canvas, cx: i32, hip: i32, direction: Direction) {
    match direction {
        Direction::Down => {
            canvas.thick_line((cx + 9, hip - 3), (cx + 15, hip + 11), 2, SAYA);
            canvas.line((cx + 6, hip - 8), (cx + 9, hip - 3), TSUKA);
        }
        Direction::Up => {
            canvas.thick_line((cx - 9, hip - 3), (cx - 15, hip + 11), 2, SAYA);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            canvas.thick_line((cx + s * 2, hip), (cx - s * 16, hip + 5), 2, SAYA);
            canvas.line((cx + s * 3, hip), (cx + s * 9, hip - 2), TSUKA);
            canvas.point(cx + s * 3, hip, CREST);
        }
    }
}

fn draw_head(canvas: &mut Canvas, hx: i32, hy: i32, direction: Direction, frame: usize) {
    let s = direction.side();
    match direction {
        Direction::Down => {
            canvas.circle(hx, hy, 6, SKIN);
            canvas.rect(hx - 3, hy, 2, 1, UNDER);
            canvas.rect(hx + 2, hy, 2, 1, UNDER);
            // Menpo half-mask
            canvas.rect(hx - 5, hy + 2, 11, 4, darken(ARMOR, 0.2));
            canvas.line((hx - 2, hy + 4), (hx + 2, hy + 4), LACING);
        }
        Direction::Up => {
            canvas.circle(hx, hy, 6, UNDER);
            canvas.rect(hx - 1, hy + 2, 3, 4, UNDER);
        }
        Direction::Left | Direction::Right => {
            canvas.circle(hx, hy, 6, SKIN);
            canvas.rect(hx + s * 4 - (s < 0) as i32, hy, 1, 1, UNDER);
            canvas.polygon(&[(hx, hy + 2), (hx + s * 6, hy + 2), (hx + s * 5, hy + 6), (hx, hy + 6)], darken(ARMOR, 0.2));
            // Topknot
            canvas.circle(hx - s * 3, hy - 7, 2, UNDER);
        }
    }

    // Kabuto bowl and flared neck guard
    canvas.ellipse(hx, hy - 4, 7, 4, HELM);
    canvas.polygon(&[(hx - 7, hy - 2), (hx + 7, hy - 2), (hx + 10, hy + 3), (hx - 10, hy + 3)], HELM);
    if direction == Direction::Down {
        canvas.rect(hx - 6, hy - 2, 13, 1, brighten(HELM, 0.2));
        canvas.ellipse(hx, hy, 5, 1, SKIN);
        canvas.rect(hx - 3, hy, 2, 1, UNDER);
        canvas.rect(hx + 2, hy, 2, 1, UNDER);
    }
    for y in [hy, hy + 2] {
        canvas.line((hx - 9, y), (hx - 7, y), LACING);
        canvas.line((hx + 7, y), (hx + 9, y), LACING);
    }

    // Maedate crest; it glints on the pulse frames
    let glint = if frame % 2 == 1 { brighten(CREST, 0.4) } else { CREST };
    match direction {
        Direction::Down | Direction::Up => {
            canvas.line((hx - 6, hy - 13), (hx - 2, hy - 7), glint);
            canvas.line((hx + 6, hy - 13), (hx + 2, hy - 7), glint);
            canvas.rect(hx - 1, hy - 8, 3, 2, CREST);
        }
        Direction::Left | Direction::Right => {
            canvas.line((hx + s * 4, hy - 7), (hx + s * 7, hy - 13), glint);
            canvas.line((hx + s * 4, hy - 7), (hx + s, hy - 13), glint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_crest_glints_on_odd_frames() {
        let even = render_frame(draw_samurai, Direction::Down, 0);
        let odd = render_frame(draw_samurai, Direction::Down, 1);
        assert!(!even.pixels().any(|p| *p == brighten(CREST, 0.4)));
        assert!(odd.pixels().any(|p| *p == brighten(CREST, 0.4)));
    }

    #[test]
    fn test_katana_drawn_in_every_view() {
        for dir in Direction::ALL {
            let img = render_frame(draw_samurai, dir, 0);
            assert!(img.pixels().any(|p| *p == SAYA), "{}", dir);
        }
    }
}
