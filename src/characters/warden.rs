//! Warden: heavy plate armor, great helm with a glowing slit, tower shield
//! and a lantern-topped mace.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb, with_alpha};
use crate::spritesheet::Direction;

const PLATE: Rgba<u8> = rgb(140, 146, 156);
const PLATE_DARK: Rgba<u8> = rgb(92, 96, 106);
const RIVET: Rgba<u8> = rgb(196, 200, 210);
const TABARD: Rgba<u8> = rgb(40, 84, 60);
const EMBLEM: Rgba<u8> = rgb(226, 206, 120);
const SHIELD: Rgba<u8> = rgb(70, 76, 88);
const MACE: Rgba<u8> = rgb(60, 56, 52);
pub const SLIT_GLOW: Rgba<u8> = rgb(120, 230, 180);

const BOB: [i32; 4] = [0, 0, -1, 0];
const TRUDGE: [i32; 4] = [0, 2, 0, -2];
const GLOW_ALPHA: [u8; 4] = [70, 120, 90, 140];

pub fn draw_warden(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let trudge = TRUDGE[frame];
    let cx = 32;
    let head_y = 20 + bob;
    let top = 28 + bob;
    let hip = 43 + bob;

    match direction {
        Direction::Down | Direction::Up => {
            let back = direction == Direction::Up;
            // Greaves
            for (x, dy) in [(cx - 5, trudge.max(0)), (cx + 5, (-trudge).max(0))] {
                canvas.rect(x - 3, hip, 7, 14 - dy, PLATE_DARK);
                canvas.rect(x - 3, 55 - dy, 7, 3, darken(PLATE_DARK, 0.3));
                canvas.line((x - 3, hip + 6 - dy), (x + 3, hip + 6 - dy), RIVET);
            }
            // Broad cuirass and tabard
            canvas.rect(cx - 10, top, 21, hip - top + 1, PLATE);
            canvas.rect(cx - 5, top + 4, 11, hip - top + 6, TABARD);
            if !back {
                canvas.polygon(&[(cx, top + 7), (cx + 3, top + 10), (cx, top + 13), (cx - 3, top + 10)], EMBLEM);
            }
            canvas.points(&[(cx - 9, top + 2), (cx + 9, top + 2), (cx - 9, hip - 2), (cx + 9, hip - 2)], RIVET);
            // Pauldrons
            canvas.ellipse(cx - 11, top + 2, 4, 3, PLATE);
            canvas.ellipse(cx + 11, top + 2, 4, 3, PLATE);
            canvas.line((cx - 14, top + 3), (cx - 8, top + 3), PLATE_DARK);
            canvas.line((cx + 8, top + 3), (cx + 14, top + 3), PLATE_DARK);

            let (shield_x, mace_x) = if back { (cx + 12, cx - 13) } else { (cx - 12, cx + 13) };
            draw_mace(canvas, mace_x, top + 12 + trudge / 2, back);
            draw_tower_shield(canvas, shield_x, top + 4, back);
            draw_helm(canvas, cx, head_y, direction, frame);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            canvas.rect(cx - s * trudge * 2 - 3, hip, 7, 14, darken(PLATE_DARK, 0.2));
            canvas.rect(cx + s * trudge * 2 - 3, hip, 7, 14, PLATE_DARK);
            canvas.rect(cx + s * trudge * 2 - 3 + s, 55, 7, 3, darken(PLATE_DARK, 0.3));

            draw_mace(canvas, cx - s * 6, top + 13, true);
            canvas.rect(cx - 7, top, 15, hip - top + 1, PLATE);
            canvas.rect(cx - 3, top + 4, 7, hip - top + 6, TABARD);
            canvas.ellipse(cx, top + 2, 5, 3, PLATE);
            canvas.point(cx, top + 2, RIVET);
            draw_helm(canvas, cx + s, head_y, direction, frame);
            // Shield carried on the leading arm covers the front of the body
            canvas.rect(cx + s * 8 - (s < 0) as i32 * 3, top - 1, 4, 24, SHIELD);
            canvas.line((cx + s * 9, top), (cx + s * 9, top + 21), brighten(SHIELD, 0.25));
            canvas.point(cx + s * 9, top + 10, EMBLEM);
        }
    }
}

fn draw_helm(canvas: &mut Canvas, hx: i32, hy: i32, direction: Direction, frame: usize) {
    canvas.rect(hx - 6, hy - 7, 13, 14, PLATE);
    canvas.rect(hx - 6, hy - 8, 13, 1, PLATE_DARK);
    canvas.line((hx - 6, hy + 6), (hx + 6, hy + 6), PLATE_DARK);
    let glow = with_alpha(SLIT_GLOW, GLOW_ALPHA[frame]);
    match direction {
        Direction::Down => {
            canvas.rect(hx - 5, hy - 2, 11, 3, glow);
            canvas.rect(hx - 4, hy - 1, 9, 1, SLIT_GLOW);
            canvas.line((hx, hy + 1), (hx, hy + 5), PLATE_DARK);
            for y in [hy + 2, hy + 4] {
                canvas.points(&[(hx - 2, y), (hx + 2, y)], PLATE_DARK);
            }
        }
        Direction::Up => {
            canvas.line((hx, hy - 7), (hx, hy + 5), PLATE_DARK);
            canvas.points(&[(hx - 4, hy + 3), (hx + 4, hy + 3)], RIVET);
        }
        Direction::Left | Direction::Right => {
            let s = direction.side();
            let x0 = if s > 0 { hx + 2 } else { hx - 6 };
            canvas.rect(x0, hy - 2, 5, 3, glow);
            canvas.rect(x0 + 1, hy - 1, 4, 1, SLIT_GLOW);
            canvas.point(hx - s * 3, hy + 2, RIVET);
        }
    }
}

fn draw_tower_shield(canvas: &mut Canvas, x: i32, y: i32, back: bool) {
    canvas.rect(x - 4, y, 9, 20, SHIELD);
    canvas.stroke_rect(x - 4, y, 9, 20, 1, brighten(SHIELD, 0.25));
    if back {
        canvas.line((x - 3, y + 6), (x + 3, y + 6), MACE);
        canvas.line((x - 3, y + 13), (x + 3, y + 13), MACE);
    } else {
        canvas.line((x, y + 3), (x, y + 16), EMBLEM);
        canvas.line((x - 2, y + 7), (x + 2, y + 7), EMBLEM);
    }
}

fn draw_mace(canvas: &mut Canvas, x: i32, grip_y: i32, subdued: bool) {
    let head_color = if subdued { darken(MACE, 0.2) } else { MACE };
    canvas.thick_line((x, grip_y), (x, grip_y - 14), 2, darken(MACE, 0.1));
    canvas.circle(x, grip_y - 15, 3, head_color);
    canvas.points(&[(x - 4, grip_y - 15), (x + 4, grip_y - 15), (x, grip_y - 19)], RIVET);
    canvas.circle(x, grip_y + 1, 1, PLATE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_visor_slit_glows_except_from_behind() {
        for dir in [Direction::Down, Direction::Left, Direction::Right] {
            let img = render_frame(draw_warden, dir, 0);
            assert!(img.pixels().any(|p| *p == SLIT_GLOW), "{}", dir);
        }
        let back = render_frame(draw_warden, Direction::Up, 0);
        assert!(!back.pixels().any(|p| *p == SLIT_GLOW));
    }

    #[test]
    fn test_glow_pulses() {
        let a = render_frame(draw_warden, Direction::Down, 0);
        let b = render_frame(draw_warden, Direction::Down, 3);
        let glow = |img: &image::RgbaImage, alpha| img.pixels().filter(|p| p.0[3] == alpha).count();
        assert!(glow(&a, 70) > 0);
        assert!(glow(&b, 140) > 0);
    }
}
