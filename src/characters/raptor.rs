//! Raptor: a feathered bipedal dinosaur with a counterbalancing tail.
//!
//! Unlike the humanoids, the body is held horizontally, so the profile views
//! are long and the front/back views are narrow and tall.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, rgb};
use crate::spritesheet::Direction;

const HIDE: Rgba<u8> = rgb(86, 132, 70);
const BELLY: Rgba<u8> = rgb(196, 190, 130);
const STRIPE: Rgba<u8> = rgb(54, 84, 46);
const FEATHER: Rgba<u8> = rgb(200, 90, 40);
const CLAW: Rgba<u8> = rgb(236, 230, 210);
const EYE: Rgba<u8> = rgb(250, 200, 40);
const PUPIL: Rgba<u8> = rgb(20, 16, 10);
const MOUTH: Rgba<u8> = rgb(110, 40, 40);

const BOB: [i32; 4] = [0, -2, 0, -2];
const STRIDE: [i32; 4] = [0, 5, 0, -5];
const TAIL_SWAY: [i32; 4] = [0, 2, 0, -2];
const JAW: [i32; 4] = [0, 1, 0, 0];

pub fn draw_raptor(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    match direction {
        Direction::Left | Direction::Right => draw_profile(canvas, direction.side(), frame),
        Direction::Down => draw_front(canvas, frame),
        Direction::Up => draw_back(canvas, frame),
    }
}

fn draw_profile(canvas: &mut Canvas, s: i32, frame: usize) {
    let bob = BOB[frame];
    let stride = STRIDE[frame];
    let sway = TAIL_SWAY[frame];
    let cx = 30 - s * 2;
    let body_y = 36 + bob;

    // Far leg first, darker
    draw_leg(canvas, (cx - s * 2, body_y + 3), cx - s * stride, s, darken(HIDE, 0.25));

    // Tail tapers behind the hips
    canvas.polygon(
        &[(cx - s * 4, body_y - 4), (cx - s * 4, body_y + 4), (cx - s * 26, body_y - 6 + sway), (cx - s * 27, body_y - 8 + sway)],
        HIDE,
    );
    canvas.line((cx - s * 6, body_y - 3), (cx - s * 25, body_y - 7 + sway), STRIPE);

    canvas.ellipse(cx, body_y, 10, 6, HIDE);
    canvas.ellipse(cx + s * 2, body_y + 3, 7, 3, BELLY);
    for i in 0..3 {
        let x = cx - s * (5 - i * 4);
        canvas.line((x, body_y - 6), (x - s * 2, body_y - 2), STRIPE);
    }
    canvas.line((cx - s * 8, body_y - 6), (cx + s * 6, body_y - 6), FEATHER);

    // Neck and head
    let neck_base = (cx + s * 8, body_y - 3);
    let head = (cx + s * 13, body_y - 14 + bob / 2);
    canvas.thick_line(neck_base, head, 5, HIDE);
    canvas.ellipse(head.0 + s * 3, head.1, 6, 3, HIDE);
    canvas.polygon(&[(head.0 + s * 4, head.1 + 1), (head.0 + s * 10, head.1 + 1), (head.0 + s * 4, head.1 + 3 + JAW[frame])], HIDE);
    canvas.line((head.0 + s * 5, head.1 + 1 + JAW[frame]), (head.0 + s * 9, head.1 + 1), MOUTH);
    canvas.point(head.0 + s * 2, head.1 - 1, EYE);
    canvas.point(head.0 + s * 3, head.1 - 1, PUPIL);
    canvas.points(&[(head.0 - s * 2, head.1 - 3), (head.0 - s * 3, head.1 - 4), (head.0 - s * 4, head.1 - 3)], FEATHER);

    // Small forelimb with claws
    let arm = (cx + s * 11, body_y + 2);
    canvas.line((cx + s * 8, body_y), arm, darken(HIDE, 0.1));
    canvas.points(&[(arm.0 + s, arm.1 + 1), (arm.0, arm.1 + 1)], CLAW);

    draw_leg(canvas, (cx + s * 2, body_y + 3), cx + s * stride, s, HIDE);
}

/// Digitigrade leg from the hip down to a foot at `foot_x`.
fn draw_leg(canvas: &mut Canvas, hip: (i32, i32), foot_x: i32, s: i32, color: Rgba<u8>) {
    let knee = (hip.0 + s * 3, hip.1 + 7);
    let ankle = (foot_x - s * 2, 54);
    canvas.thick_line(hip, knee, 4, color);
    canvas.thick_line(knee, ankle, 2, color);
    canvas.line(ankle, (foot_x, 57), color);
    canvas.line((foot_x - s, 57), (foot_x + s * 4, 57), color);
    canvas.point(foot_x + s * 5, 57, CLAW);
    canvas.point(ankle.0 + s, ankle.1 + 1, CLAW);
}

fn draw_front(canvas: &mut Canvas, frame: usize) {
    let bob = BOB[frame];
    let cx = 32;
    let lift = STRIDE[frame] / 2;
    for (x, dy) in [(cx - 5, lift.max(0)), (cx + 5, (-lift).max(0))] {
        canvas.thick_line((x, 40 + bob), (x, 55 - dy), 3, HIDE);
        canvas.rect(x - 2, 56 - dy, 5, 2, HIDE);
        canvas.points(&[(x - 2, 58 - dy), (x + 2, 58 - dy)], CLAW);
    }
    canvas.line((cx + TAIL_SWAY[frame], 36 + bob), (cx + TAIL_SWAY[frame] * 3, 30 + bob), HIDE);
    canvas.ellipse(cx, 38 + bob, 8, 8, HIDE);
    canvas.ellipse(cx, 40 + bob, 5, 6, BELLY);
    canvas.points(&[(cx - 6, 40 + bob), (cx + 6, 40 + bob)], CLAW);

    canvas.thick_line((cx, 32 + bob), (cx, 23 + bob), 5, HIDE);
    let hy = 19 + bob;
    canvas.ellipse(cx, hy, 5, 5, HIDE);
    canvas.ellipse(cx, hy + 4, 3, 3, BELLY);
    canvas.line((cx - 2, hy + 5 + JAW[frame]), (cx + 2, hy + 5 + JAW[frame]), MOUTH);
    canvas.points(&[(cx - 4, hy - 1), (cx + 4, hy - 1)], EYE);
    canvas.points(&[(cx - 4, hy), (cx + 4, hy)], PUPIL);
    canvas.rect(cx - 1, hy - 8, 3, 3, FEATHER);
    canvas.point(cx, hy - 9, brighten(FEATHER, 0.3));
}

fn draw_back(canvas: &mut Canvas, frame: usize) {
    let bob = BOB[frame];
    let cx = 32;
    let lift = STRIDE[frame] / 2;
    for (x, dy) in [(cx - 5, (-lift).max(0)), (cx + 5, lift.max(0))] {
        canvas.thick_line((x, 40 + bob), (x, 55 - dy), 3, darken(HIDE, 0.1));
        canvas.rect(x - 2, 56 - dy, 5, 2, darken(HIDE, 0.1));
    }
    let hy = 19 + bob;
    canvas.ellipse(cx, hy, 5, 5, HIDE);
    canvas.thick_line((cx, 32 + bob), (cx, 23 + bob), 5, HIDE);
    canvas.ellipse(cx, 38 + bob, 8, 8, HIDE);
    for y in [33, 37, 41] {
        canvas.line((cx - 6, y + bob), (cx + 6, y + bob), STRIPE);
    }
    // Tail runs toward the viewer
    let sway = TAIL_SWAY[frame];
    canvas.polygon(&[(cx - 4, 42 + bob), (cx + 4, 42 + bob), (cx + sway * 2 + 1, 58), (cx + sway * 2 - 1, 58)], HIDE);
    canvas.line((cx, 42 + bob), (cx + sway * 2, 57), STRIPE);
    canvas.rect(cx - 1, hy - 8, 3, 3, FEATHER);
    canvas.line((cx, 26 + bob), (cx, 44 + bob), FEATHER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_profile_is_wider_than_front() {
        let width = |img: &image::RgbaImage| {
            let xs: Vec<u32> = img.enumerate_pixels().filter(|(_, _, p)| p.0[3] > 0).map(|(x, _, _)| x).collect();
            xs.iter().max().unwrap() - xs.iter().min().unwrap()
        };
        let side = render_frame(draw_raptor, Direction::Right, 0);
        let front = render_frame(draw_raptor, Direction::Down, 0);
        assert!(width(&side) > width(&front) * 2);
    }

    #[test]
    fn test_eyes_hidden_from_behind() {
        let back = render_frame(draw_raptor, Direction::Up, 0);
        assert!(!back.pixels().any(|p| *p == EYE));
    }
}
