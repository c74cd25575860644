//! Wizard: long robe, beard, star-spangled pointed hat and an orb staff.
//!
//! The staff is planted on the ground, so the orb stays put while the body
//! bobs. The orb pulses: frames 0 and 2 glow, frames 1 and 3 flare bright.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb, with_alpha};
use crate::spritesheet::Direction;

const SKIN: Rgba<u8> = rgb(232, 190, 160);
const ROBE: Rgba<u8> = rgb(58, 66, 150);
const ROBE_TRIM: Rgba<u8> = rgb(214, 178, 70);
const BELT: Rgba<u8> = rgb(110, 70, 40);
const BEARD: Rgba<u8> = rgb(222, 222, 230);
const HAT: Rgba<u8> = rgb(48, 52, 130);
const STAR: Rgba<u8> = rgb(250, 230, 120);
const EYE: Rgba<u8> = rgb(28, 24, 40);
const BOOT: Rgba<u8> = rgb(80, 52, 36);
const STAFF: Rgba<u8> = rgb(120, 82, 46);

/// Orb color on the resting frames.
pub const ORB_GLOW: Rgba<u8> = rgb(120, 80, 220);
/// Orb color on the pulse frames.
pub const ORB_BRIGHT: Rgba<u8> = rgb(180, 140, 255);

const BOB: [i32; 4] = [0, -1, 0, -1];
const FOOT_LIFT: [(i32, i32); 4] = [(0, 0), (2, 0), (0, 0), (0, 2)];
const SLEEVE_SWING: [i32; 4] = [0, 2, 0, -2];
const HEM_SWAY: [i32; 4] = [0, 1, 0, -1];

/// Orb centre inside a 64×64 cell. Independent of the frame.
pub fn orb_center(direction: Direction) -> (i32, i32) {
    match direction {
        Direction::Down => (45, 18),
        Direction::Up => (19, 18),
        Direction::Left => (23, 17),
        Direction::Right => (41, 17),
    }
}

/// Orb color for a frame.
pub fn orb_color(frame: usize) -> Rgba<u8> {
    if frame % 2 == 1 {
        ORB_BRIGHT
    } else {
        ORB_GLOW
    }
}

pub fn draw_wizard(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let bob = BOB[frame];
    let cx = 32;
    match direction {
        Direction::Down => draw_front(canvas, cx, bob, frame),
        Direction::Up => draw_back(canvas, cx, bob, frame),
        Direction::Left | Direction::Right => draw_side(canvas, cx, bob, frame, direction.side()),
    }
    draw_staff(canvas, direction, frame);
}

fn draw_front(canvas: &mut Canvas, cx: i32, bob: i32, frame: usize) {
    let (lift_l, lift_r) = FOOT_LIFT[frame];
    canvas.ellipse(cx - 4, 57 - lift_l, 3, 2, BOOT);
    canvas.ellipse(cx + 4, 57 - lift_r, 3, 2, BOOT);

    // Robe
    let sway = HEM_SWAY[frame];
    let top = 30 + bob;
    canvas.polygon(&[(cx - 7, top), (cx + 7, top), (cx + 11 + sway, 55), (cx - 11 + sway, 55)], ROBE);
    canvas.polygon(&[(cx + 3, top + 2), (cx + 7, top), (cx + 11 + sway, 55), (cx + 5 + sway, 55)], darken(ROBE, 0.2));
    canvas.rect(cx - 11 + sway, 54, 23, 2, ROBE_TRIM);
    canvas.line((cx, top + 12), (cx + sway, 53), ROBE_TRIM);
    canvas.rect(cx - 7, 40 + bob, 15, 2, BELT);
    canvas.rect(cx - 1, 40 + bob, 3, 2, ROBE_TRIM);

    // Sleeves: the left arm swings, the right hand grips the staff
    let swing = SLEEVE_SWING[frame];
    canvas.polygon(&[(cx - 7, top + 1), (cx - 4, top + 3), (cx - 10, top + 13 + swing), (cx - 14, top + 11 + swing)], ROBE);
    canvas.line((cx - 14, top + 11 + swing), (cx - 10, top + 13 + swing), ROBE_TRIM);
    canvas.circle(cx - 12, top + 14 + swing, 2, SKIN);
    canvas.polygon(&[(cx + 7, top + 1), (cx + 4, top + 3), (cx + 10, top + 10), (cx + 13, top + 7)], ROBE);
    canvas.circle(cx + 12, top + 9, 2, SKIN);

    // Head and beard
    let hy = 22 + bob;
    canvas.circle(cx, hy, 6, SKIN);
    canvas.polygon(&[(cx - 6, hy + 1), (cx + 6, hy + 1), (cx + 3, hy + 10), (cx, hy + 14), (cx - 3, hy + 10)], BEARD);
    canvas.line((cx, hy + 5), (cx, hy + 12), darken(BEARD, 0.15));
    canvas.rect(cx - 2, hy + 2, 5, 1, darken(BEARD, 0.1));
    canvas.rect(cx - 3, hy - 1, 2, 2, EYE);
    canvas.rect(cx + 2, hy - 1, 2, 2, EYE);
    canvas.line((cx - 4, hy - 3), (cx - 1, hy - 3), BEARD);
    canvas.line((cx + 1, hy - 3), (cx + 4, hy - 3), BEARD);
    canvas.point(cx, hy + 1, darken(SKIN, 0.2));

    draw_hat(canvas, cx, hy - 5, 0, frame);
}

fn draw_back(canvas: &mut Canvas, cx: i32, bob: i32, frame: usize) {
    let (lift_l, lift_r) = FOOT_LIFT[frame];
    canvas.ellipse(cx - 4, 57 - lift_l, 3, 2, BOOT);
    canvas.ellipse(cx + 4, 57 - lift_r, 3, 2, BOOT);

    let sway = HEM_SWAY[frame];
    let top = 30 + bob;
    canvas.polygon(&[(cx - 7, top), (cx + 7, top), (cx + 11 - sway, 55), (cx - 11 - sway, 55)], ROBE);
    canvas.line((cx, top + 2), (cx - sway, 53), darken(ROBE, 0.3));
    canvas.rect(cx - 11 - sway, 54, 23, 2, ROBE_TRIM);
    canvas.rect(cx - 7, 40 + bob, 15, 2, BELT);

    let swing = SLEEVE_SWING[frame];
    canvas.polygon(&[(cx + 7, top + 1), (cx + 4, top + 3), (cx + 10, top + 13 - swing), (cx + 14, top + 11 - swing)], ROBE);
    canvas.polygon(&[(cx - 7, top + 1), (cx - 4, top + 3), (cx - 10, top + 10), (cx - 13, top + 7)], ROBE);
    canvas.circle(cx - 12, top + 9, 2, SKIN);

    let hy = 22 + bob;
    canvas.circle(cx, hy, 6, BEARD);
    canvas.polygon(&[(cx - 6, hy), (cx + 6, hy), (cx + 4, hy + 8), (cx - 4, hy + 8)], BEARD);
    canvas.line((cx - 2, hy + 2), (cx - 2, hy + 7), darken(BEARD, 0.15));
    canvas.line((cx + 2, hy + 2), (cx + 2, hy + 7), darken(BEARD, 0.15));

    draw_hat(canvas, cx, hy - 5, 0, frame);
}

fn draw_side(canvas: &mut Canvas, cx: i32, bob: i32, frame: usize, s: i32) {
    let step = SLEEVE_SWING[frame] * 2;
    canvas.ellipse(cx - s * step + s, 57, 3, 2, darken(BOOT, 0.3));
    canvas.ellipse(cx + s * step + s, 57, 3, 2, BOOT);

    let sway = HEM_SWAY[frame];
    let top = 30 + bob;
    canvas.polygon(
        &[(cx - 5, top), (cx + 5, top), (cx + s * 8 + 1, 55), (cx - s * (9 + sway), 55)],
        ROBE,
    );
    canvas.line((cx - s * 4, top + 3), (cx - s * (8 + sway), 53), darken(ROBE, 0.25));
    canvas.line((cx - s * (9 + sway), 54), (cx + s * 8, 54), ROBE_TRIM);
    canvas.line((cx - s * (9 + sway), 55), (cx + s * 8 + 1, 55), ROBE_TRIM);
    canvas.rect(cx - 5, 40 + bob, 11, 2, BELT);

    let hy = 22 + bob;
    canvas.circle(cx + s, hy, 6, SKIN);
    canvas.ellipse(cx - s * 3, hy, 4, 5, BEARD);
    canvas.polygon(&[(cx + s * 2, hy + 2), (cx + s * 7, hy + 2), (cx + s * 4, hy + 13), (cx + s, hy + 8)], BEARD);
    canvas.point(cx + s * 7, hy, darken(SKIN, 0.2));
    canvas.rect(cx + s * 4 - (s < 0) as i32, hy - 1, 1, 2, EYE);
    canvas.line((cx + s * 3, hy - 3), (cx + s * 6, hy - 3), BEARD);

    // Sleeve reaching forward to the staff
    canvas.polygon(&[(cx - 3, top + 1), (cx + 3, top + 1), (cx + s * 9, top + 7), (cx + s * 8, top + 10)], brighten(ROBE, 0.1));
    canvas.circle(cx + s * 9, top + 8, 2, SKIN);

    draw_hat(canvas, cx + s, hy - 5, s, frame);
}

/// Brim centred on (x, y); the cone tip leans away from the facing side.
fn draw_hat(canvas: &mut Canvas, x: i32, y: i32, s: i32, frame: usize) {
    let lean = if s == 0 { 4 } else { -s * 7 };
    let flop = HEM_SWAY[frame];
    canvas.polygon(&[(x - 7, y), (x + 7, y), (x + lean / 2, y - 9), (x + lean + flop, y - 15)], HAT);
    canvas.line((x + lean / 2, y - 9), (x + lean + flop, y - 15), darken(HAT, 0.3));
    canvas.ellipse(x, y + 1, 11, 2, HAT);
    canvas.rect(x - 7, y - 2, 15, 2, ROBE_TRIM);
    for &(sx, sy) in &[(-3, -5), (2, -8), (-1, -11)] {
        canvas.point(x + sx + lean / 3, y + sy, STAR);
    }
    canvas.points(&[(x + 3, y - 4), (x + 4, y - 4), (x + 3, y - 5)], STAR);
}

fn draw_staff(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let (ox, oy) = orb_center(direction);
    canvas.thick_line((ox, oy + 3), (ox, 58), 2, STAFF);
    canvas.line((ox - 1, oy + 3), (ox + 2, oy + 3), darken(STAFF, 0.3));
    canvas.points(&[(ox - 2, oy + 1), (ox + 3, oy + 1)], darken(STAFF, 0.2));

    let color = orb_color(frame);
    let halo_radius = if frame % 2 == 1 { 6 } else { 5 };
    canvas.circle(ox, oy, 3, color);
    canvas.ellipse_behind(ox, oy, halo_radius, halo_radius, with_alpha(color, 70));
    canvas.point(ox - 1, oy - 1, brighten(color, 0.6));
    if frame % 2 == 1 {
        canvas.points(&[(ox, oy - 5), (ox + 5, oy), (ox - 5, oy)], with_alpha(ORB_BRIGHT, 160));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::{render_frame, FRAMES_PER_DIRECTION};

    #[test]
    fn test_orb_pulses_on_odd_frames() {
        for dir in Direction::ALL {
            let (ox, oy) = orb_center(dir);
            for frame in 0..FRAMES_PER_DIRECTION {
                let img = render_frame(draw_wizard, dir, frame);
                let expected = if frame % 2 == 1 { ORB_BRIGHT } else { ORB_GLOW };
                assert_eq!(*img.get_pixel(ox as u32, oy as u32), expected, "{} frame {}", dir, frame);
            }
        }
    }

    #[test]
    fn test_orb_color_wraps() {
        assert_eq!(orb_color(0), ORB_GLOW);
        assert_eq!(orb_color(3), ORB_BRIGHT);
        assert_eq!(orb_color(5), ORB_BRIGHT);
    }

    #[test]
    fn test_robe_and_beard_present() {
        let img = render_frame(draw_wizard, Direction::Down, 0);
        assert!(img.pixels().any(|p| *p == ROBE));
        assert!(img.pixels().any(|p| *p == BEARD));
        assert!(img.pixels().any(|p| *p == STAR));
    }
}
