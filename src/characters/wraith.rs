//! Wraith: a hovering, legless shroud with a tattered hem and ghostly eyes.
//!
//! The body is semi-transparent. Since pixels overwrite rather than blend,
//! every layer uses the same alpha so overlaps stay uniform.

use image::Rgba;

use crate::canvas::Canvas;
use crate::color::{darken, rgba, with_alpha};
use crate::spritesheet::Direction;

const SHROUD: Rgba<u8> = rgba(70, 80, 110, 210);
const SHROUD_DARK: Rgba<u8> = rgba(44, 50, 74, 210);
const VOID: Rgba<u8> = rgba(10, 10, 18, 240);
const WISP: Rgba<u8> = rgba(150, 200, 230, 110);
const CHAIN: Rgba<u8> = rgba(120, 120, 130, 230);
pub const EYES: Rgba<u8> = rgba(150, 255, 230, 255);

/// Vertical hover offset.
const HOVER: [i32; 4] = [0, -2, -3, -1];
/// Hem tatters ripple sideways.
const RIPPLE: [i32; 4] = [0, 1, 2, 1];

pub fn draw_wraith(canvas: &mut Canvas, direction: Direction, frame: usize) {
    let frame = frame % 4;
    let hover = HOVER[frame];
    let ripple = RIPPLE[frame];
    let s = direction.side();
    let cx = 32 + s;
    let head_y = 18 + hover;
    let top = 26 + hover;
    let hem = 50 + hover;

    // Shadow on the ground shrinks as the wraith rises
    canvas.ellipse(32, 58, 8 + hover, 1, rgba(0, 0, 0, 70));

    // Wisps trailing below the hem
    for (i, dx) in [-6, -1, 4].into_iter().enumerate() {
        let sway = if i % 2 == 0 { ripple } else { -ripple };
        canvas.line((cx + dx, hem), (cx + dx + sway - s * 2, hem + 5), WISP);
    }

    // Shroud body, tapering to a jagged hem
    let lean = -s * 3;
    let mut outline = vec![(cx - 7, top), (cx + 7, top), (cx + 11 + lean, hem)];
    for k in 0..6 {
        let x = cx + 11 + lean - k * 4;
        let tip = if (k as usize + frame) % 2 == 0 { 4 } else { 1 };
        outline.push((x - 2, hem + tip));
        outline.push((x - 4, hem));
    }
    canvas.polygon(&outline, SHROUD);
    canvas.line((cx - s * 3, top + 3), (cx - s * 3 + lean, hem - 1), SHROUD_DARK);

    // Chain draped across the chest
    if direction != Direction::Up {
        let sag = ripple / 2;
        canvas.polyline(&[(cx - 7, top + 4), (cx, top + 9 + sag), (cx + 7, top + 4)], 1, CHAIN);
    }

    // Arms reaching forward
    match direction {
        Direction::Down | Direction::Up => {
            for side in [-1, 1] {
                let claw = (cx + side * 12, top + 10 - ripple);
                canvas.thick_line((cx + side * 6, top + 2), claw, 3, SHROUD);
                canvas.line(claw, (claw.0 + side * 2, claw.1 + 3), darken(SHROUD, 0.5));
            }
        }
        Direction::Left | Direction::Right => {
            let claw = (cx + s * 13, top + 6 - ripple);
            canvas.thick_line((cx, top + 2), claw, 3, SHROUD);
            canvas.points(&[(claw.0 + s, claw.1 + 1), (claw.0 + s * 2, claw.1)], darken(SHROUD, 0.5));
        }
    }

    // Hood with a void where the face should be
    canvas.circle(cx, head_y, 8, SHROUD);
    canvas.polygon(&[(cx - 8, head_y), (cx + 8, head_y), (cx + 7, top + 2), (cx - 7, top + 2)], SHROUD);
    canvas.polygon(&[(cx - 3, head_y - 7), (cx - s * 6 + 3, head_y - 13 - ripple), (cx + 3, head_y - 7)], SHROUD_DARK);
    match direction {
        Direction::Down => {
            canvas.ellipse(cx, head_y + 1, 5, 5, VOID);
            draw_eyes(canvas, &[(cx - 3, head_y), (cx + 2, head_y)], frame);
        }
        Direction::Up => {
            canvas.line((cx, head_y - 6), (cx, top + 1), SHROUD_DARK);
        }
        Direction::Left | Direction::Right => {
            canvas.ellipse(cx + s * 4, head_y + 1, 3, 5, VOID);
            draw_eyes(canvas, &[(cx + s * 4 - (s < 0) as i32, head_y)], frame);
        }
    }
}

fn draw_eyes(canvas: &mut Canvas, eyes: &[(i32, i32)], frame: usize) {
    let halo = with_alpha(EYES, if frame % 2 == 0 { 80 } else { 140 });
    for &(x, y) in eyes {
        canvas.rect(x - 1, y - 1, 4, 3, halo);
    }
    for &(x, y) in eyes {
        canvas.rect(x, y, 2, 1, EYES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::render_frame;

    #[test]
    fn test_body_is_translucent() {
        let img = render_frame(draw_wraith, Direction::Down, 0);
        assert!(img.pixels().any(|p| *p == SHROUD));
        assert!(img.pixels().all(|p| p.0[3] == 0 || p.0[3] >= 70));
    }

    #[test]
    fn test_hovers() {
        let lowest = |frame| {
            let img = render_frame(draw_wraith, Direction::Down, frame);
            img.enumerate_pixels().filter(|(_, _, p)| **p == SHROUD).map(|(_, y, _)| y).max().unwrap()
        };
        assert!(lowest(2) < lowest(0));
    }

    #[test]
    fn test_hem_tatters_alternate() {
        let long_tips = |frame: usize| -> Vec<u32> {
            let img = render_frame(draw_wraith, Direction::Down, frame);
            let row = (50 + HOVER[frame] + 4) as u32;
            (0..img.width()).filter(|&x| *img.get_pixel(x, row) == SHROUD).collect()
        };
        let (even, odd) = (long_tips(0), long_tips(1));
        assert!(!even.is_empty() && !odd.is_empty());
        assert!(even.iter().all(|x| !odd.contains(x)), "{:?} {:?}", even, odd);
    }
}
