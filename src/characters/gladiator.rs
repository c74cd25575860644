//! Gladiator: crested bronze helmet, round shield, short sword, leather skirt.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb};
use crate::spritesheet::Direction;

const SKIN: Rgba<u8> = rgb(196, 140, 100);
const BRONZE: Rgba<u8> = rgb(190, 140, 60);
const CREST: Rgba<u8> = rgb(196, 36, 36);
const LEATHER: Rgba<u8> = rgb(120, 76, 42);
const STRAP: Rgba<u8> = rgb(84, 52, 28);
const SHIELD: Rgba<u8> = rgb(150, 40, 36);
const SHIELD_RIM: Rgba<u8> = rgb(210, 170, 80);
const SWORD: Rgba<u8> = rgb(214, 214, 222);
const SANDAL: Rgba<u8> = rgb(96, 64, 36);

const BOB: [i32; 4] = [0, -1, 0, -1];
const STRIDE: [i32; 4] = [0, 4, 0, -4];
const SWORD_SWING: [i32; 4] = [0, -2, 0, 2];

pub fn draw_gladiator(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let cx = 32;
    let head_y = 21 + bob;
    let top = 29 + bob;
    let hip = 42 + bob;

    match direction {
        Direction::Down => {
            draw_legs_front(canvas, cx, hip, frame);
            draw_torso(canvas, cx, top, hip, false);
            // Shield on the left arm, sword in the right hand
            canvas.thick_line((cx + 7, top + 2), (cx + 11, top + 10), 3, SKIN);
            let tip_y = top + 4 + SWORD_SWING[frame];
            canvas.thick_line((cx + 12, top + 10), (cx + 12, tip_y - 8), 2, SWORD);
            canvas.rect(cx + 10, top + 9, 5, 1, BRONZE);
            draw_shield(canvas, cx - 10, top + 9, 7);
            draw_helmet(canvas, cx, head_y, Direction::Down, frame);
        }
        Direction::Up => {
            draw_legs_front(canvas, cx, hip, frame);
            draw_shield(canvas, cx + 10, top + 9, 7);
            draw_torso(canvas, cx, top, hip, true);
            canvas.thick_line((cx - 7, top + 2), (cx - 11, top + 11), 3, SKIN);
            canvas.thick_line((cx - 12, top + 11), (cx - 12, top + 3 + SWORD_SWING[frame]), 2, darken(SWORD, 0.2));
            draw_helmet(canvas, cx, head_y, Direction::Up, frame);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            let stride = STRIDE[frame];
            canvas.thick_line((cx, hip), (cx - stride * s, 55), 3, darken(SKIN, 0.2));
            canvas.rect(cx - stride * s - 2, 55, 5, 3, darken(SANDAL, 0.2));
            canvas.thick_line((cx, hip), (cx + stride * s, 55), 3, SKIN);
            canvas.rect(cx + stride * s - 2, 55, 5, 3, SANDAL);
            canvas.line((cx + stride * s - 1, 51), (cx + stride * s + 1, 51), STRAP);

            // Sword arm behind, then torso, then the shield in front
            let grip = (cx - s * 6, top + 11 + SWORD_SWING[frame]);
            canvas.thick_line((cx, top + 2), grip, 3, darken(SKIN, 0.15));
            canvas.line(grip, (grip.0 + s * 9, grip.1 - 4), SWORD);
            canvas.polygon(&[(cx - 5, top), (cx + 5, top), (cx + 5, hip), (cx - 5, hip)], LEATHER);
            canvas.rect(cx - 5, top + 6, 11, 2, STRAP);
            draw_skirt(canvas, cx, hip, 6);
            canvas.ellipse(cx + s * 7, top + 10, 2, 8, SHIELD);
            canvas.line((cx + s * 9, top + 2), (cx + s * 9, top + 18), SHIELD_RIM);
            canvas.point(cx + s * 8, top + 10, SHIELD_RIM);
            draw_helmet(canvas, cx + s, head_y, direction, frame);
        }
    }
}

fn draw_legs_front(canvas: &mut Canvas, cx: i32, hip: i32, frame: usize) {
    let lift = STRIDE[frame] / 2;
    for (x, dy) in [(cx - 4, lift.max(0)), (cx + 4, (-lift).max(0))] {
        canvas.thick_line((x, hip), (x, 55 - dy), 3, SKIN);
        canvas.rect(x - 2, 55 - dy, 5, 3, SANDAL);
        canvas.line((x - 1, 51 - dy), (x + 1, 51 - dy), STRAP);
        canvas.line((x - 1, 48 - dy), (x + 1, 48 - dy), STRAP);
    }
}

fn draw_torso(canvas: &mut Canvas, cx: i32, top: i32, hip: i32, back: bool) {
    canvas.polygon(&[(cx - 8, top), (cx + 8, top), (cx + 6, hip), (cx - 6, hip)], SKIN);
    // Leather harness across the chest
    canvas.thick_line((cx - 7, top + 1), (cx + 6, top + 10), 2, STRAP);
    if !back {
        canvas.ellipse(cx - 7, top + 1, 3, 2, BRONZE);
        canvas.line((cx - 2, top + 6), (cx - 2, top + 10), darken(SKIN, 0.2));
        canvas.line((cx + 2, top + 6), (cx + 2, top + 10), darken(SKIN, 0.2));
    }
    canvas.rect(cx - 6, hip - 2, 13, 2, LEATHER);
    draw_skirt(canvas, cx, hip, 8);
}

/// Leather strips hanging from the belt.
fn draw_skirt(canvas: &mut Canvas, cx: i32, hip: i32, half: i32) {
    let mut x = cx - half;
    while x <= cx + half {
        canvas.line((x, hip), (x, hip + 5), LEATHER);
        canvas.point(x, hip + 5, STRAP);
        x += 2;
    }
}

fn draw_shield(canvas: &mut Canvas, x: i32, y: i32, r: i32) {
    canvas.circle(x, y, r, SHIELD_RIM);
    canvas.circle(x, y, r - 1, SHIELD);
    canvas.circle(x, y, 2, SHIELD_RIM);
    canvas.point(x - 1, y - 1, brighten(SHIELD_RIM, 0.5));
}

fn draw_helmet(canvas: &mut Canvas, hx: i32, hy: i32, direction: Direction, frame: usize) {
    let wobble = STRIDE[frame].signum();
    match direction {
        Direction::Down => {
            canvas.circle(hx, hy, 7, BRONZE);
            canvas.rect(hx - 4, hy - 1, 9, 7, darken(SKIN, 0.1));
            canvas.rect(hx - 1, hy - 2, 3, 8, BRONZE);
            canvas.rect(hx - 3, hy, 2, 1, darken(SKIN, 0.7));
            canvas.rect(hx + 2, hy, 2, 1, darken(SKIN, 0.7));
            canvas.rect(hx - 2, hy - 12, 5, 6, CREST);
            canvas.line((hx, hy - 13), (hx + wobble, hy - 12), brighten(CREST, 0.3));
        }
        Direction::Up => {
            canvas.circle(hx, hy, 7, BRONZE);
            canvas.line((hx - 6, hy + 4), (hx + 6, hy + 4), darken(BRONZE, 0.3));
            canvas.rect(hx - 2, hy - 12, 5, 6, CREST);
            canvas.rect(hx - 1, hy - 6, 3, 10, darken(CREST, 0.2));
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            canvas.circle(hx, hy, 7, BRONZE);
            canvas.rect(hx + s * 2 - (s < 0) as i32 * 4, hy - 1, 5, 6, darken(SKIN, 0.1));
            canvas.point(hx + s * 4, hy, darken(SKIN, 0.7));
            canvas.line((hx - s * 7, hy + 3), (hx - s * 4, hy + 6), darken(BRONZE, 0.3));
            // Crest sweeps from the brow over the back of the skull
            canvas.polygon(
                &[(hx + s * 3, hy - 7), (hx + s * 5, hy - 11), (hx - s * 6, hy - 12 + wobble), (hx - s * 9, hy - 4)],
                CREST,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_crest_on_every_view() {
        for dir in Direction::ALL {
            let img = render_frame(draw_gladiator, dir, 1);
            assert!(img.pixels().any(|p| *p == CREST), "{}", dir);
        }
    }

    #[test]
    fn test_shield_side_follows_facing() {
        let front = render_frame(draw_gladiator, Direction::Down, 0);
        let back = render_frame(draw_gladiator, Direction::Up, 0);
        let shield_x = |img: &image::RgbaImage| {
            let xs: Vec<u32> = img.enumerate_pixels().filter(|(_, _, p)| **p == SHIELD).map(|(x, _, _)| x).collect();
            xs.iter().sum::<u32>() / xs.len() as u32
        };
        assert!(shield_x(&front) < 32);
        assert!(shield_x(&back) > 32);
    }
}
