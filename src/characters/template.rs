//! Generic humanoid template.
//!
//! One parameterized drawing routine shared by template-driven characters
//! (the built-in spaceman and any `[characters.*]` entries from
//! `spritegen.toml`). The layers are always drawn in the same order:
//! legs, cape, body, arms, head, hat. Facing up, the cape goes on after the
//! body so it covers the back.

use image::Rgba;
use std::fmt;

use crate::canvas::Canvas;
use crate::color::{brighten, darken, lerp_color, rgb};
use crate::spritesheet::Direction;

/// Eye color that counts as "normal"; anything else glows.
pub const DEFAULT_EYE_COLOR: Rgba<u8> = rgb(30, 24, 20);

const BOB: [i32; 4] = [0, -1, 0, -1];
/// Foot lift for the front/back views: (left, right).
const LIFT: [(i32, i32); 4] = [(0, 0), (2, 0), (0, 0), (0, 2)];
/// Horizontal foot travel for the profile views.
const STRIDE: [i32; 4] = [0, 4, 0, -4];
const ARM_SWING: [i32; 4] = [0, 2, 0, -2];
const CAPE_SWAY: [i32; 4] = [0, 1, 2, 1];

/// Headgear variants. `None` in [`CharacterStyle::hat`] means bare-headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HatStyle {
    Pointed,
    Helm,
    Hood,
    Crown,
    Horns,
    Ears,
    Crest,
    Halo,
    Antenna,
    Bandana,
    TopHat,
    Toque,
    Feathered,
    Fin,
}

impl HatStyle {
    pub const ALL: [HatStyle; 14] = [
        HatStyle::Pointed,
        HatStyle::Helm,
        HatStyle::Hood,
        HatStyle::Crown,
        HatStyle::Horns,
        HatStyle::Ears,
        HatStyle::Crest,
        HatStyle::Halo,
        HatStyle::Antenna,
        HatStyle::Bandana,
        HatStyle::TopHat,
        HatStyle::Toque,
        HatStyle::Feathered,
        HatStyle::Fin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HatStyle::Pointed => "pointed",
            HatStyle::Helm => "helm",
            HatStyle::Hood => "hood",
            HatStyle::Crown => "crown",
            HatStyle::Horns => "horns",
            HatStyle::Ears => "ears",
            HatStyle::Crest => "crest",
            HatStyle::Halo => "halo",
            HatStyle::Antenna => "antenna",
            HatStyle::Bandana => "bandana",
            HatStyle::TopHat => "tophat",
            HatStyle::Toque => "toque",
            HatStyle::Feathered => "feathered",
            HatStyle::Fin => "fin",
        }
    }

    /// Look up a hat by name. Unknown names (and "none") give `None`.
    pub fn from_name(name: &str) -> Option<HatStyle> {
        let key = name.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        HatStyle::ALL.iter().copied().find(|h| h.name() == key)
    }
}

impl fmt::Display for HatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named color slots of a template character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterPalette {
    pub skin: Rgba<u8>,
    pub hair: Rgba<u8>,
    pub body: Rgba<u8>,
    pub trim: Rgba<u8>,
    pub legs: Rgba<u8>,
    pub boots: Rgba<u8>,
    pub hat: Rgba<u8>,
    pub hat_trim: Rgba<u8>,
    pub cape: Rgba<u8>,
    pub eyes: Rgba<u8>,
}

impl CharacterPalette {
    /// Slot names accepted by [`CharacterPalette::set`].
    pub const SLOTS: [&'static str; 10] =
        ["skin", "hair", "body", "trim", "legs", "boots", "hat", "hat_trim", "cape", "eyes"];

    /// Override a slot by name. Returns false for an unknown slot.
    pub fn set(&mut self, slot: &str, color: Rgba<u8>) -> bool {
        let target = match slot {
            "skin" => &mut self.skin,
            "hair" => &mut self.hair,
            "body" => &mut self.body,
            "trim" => &mut self.trim,
            "legs" => &mut self.legs,
            "boots" => &mut self.boots,
            "hat" => &mut self.hat,
            "hat_trim" => &mut self.hat_trim,
            "cape" => &mut self.cape,
            "eyes" => &mut self.eyes,
            _ => return false,
        };
        *target = color;
        true
    }
}

impl Default for CharacterPalette {
    fn default() -> Self {
        Self {
            skin: rgb(236, 188, 150),
            hair: rgb(92, 60, 36),
            body: rgb(70, 110, 170),
            trim: rgb(220, 190, 90),
            legs: rgb(60, 56, 70),
            boots: rgb(70, 46, 30),
            hat: rgb(120, 60, 150),
            hat_trim: rgb(230, 200, 80),
            cape: rgb(160, 40, 50),
            eyes: DEFAULT_EYE_COLOR,
        }
    }
}

/// Full style of a template character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterStyle {
    pub palette: CharacterPalette,
    pub hat: Option<HatStyle>,
    pub cape: bool,
}

impl CharacterStyle {
    /// Glowing eyes are implied by a non-default eye color.
    pub fn glowing_eyes(&self) -> bool {
        self.palette.eyes != DEFAULT_EYE_COLOR
    }
}

/// Anchor points of the body for one (direction, frame).
#[derive(Debug, Clone, Copy)]
struct Pose {
    direction: Direction,
    frame: usize,
    /// Body centre line.
    cx: i32,
    /// -1 facing left, 1 facing right, 0 front/back.
    s: i32,
    head_y: i32,
    torso_top: i32,
    hip_y: i32,
    foot_y: i32,
}

impl Pose {
    fn new(direction: Direction, frame: usize) -> Self {
        let frame = frame % 4;
        let bob = BOB[frame];
        Self {
            direction,
            frame,
            cx: 32,
            s: direction.side(),
            head_y: 22 + bob,
            torso_top: 30 + bob,
            hip_y: 43 + bob,
            foot_y: 57,
        }
    }

    /// Centre of the head, shifted forward in profile.
    fn head_center(&self) -> (i32, i32) {
        (self.cx + self.s, self.head_y)
    }

    /// Top of the skull where hats sit.
    fn crown(&self) -> (i32, i32) {
        let (hx, hy) = self.head_center();
        (hx, hy - 7)
    }
}

/// Draw one frame of a template character.
pub fn draw_generic_character(
    canvas: &mut Canvas,
    style: &CharacterStyle,
    direction: Direction,
    frame: usize,
) {
    let pose = Pose::new(direction, frame);
    let pal = &style.palette;

    draw_legs(canvas, &pose, pal);
    if style.cape && direction != Direction::Up {
        draw_cape(canvas, &pose, pal);
    }
    draw_body(canvas, &pose, pal);
    if style.cape && direction == Direction::Up {
        draw_cape(canvas, &pose, pal);
    }
    draw_arms(canvas, &pose, pal);
    draw_head(canvas, &pose, style);
    if let Some(hat) = style.hat {
        draw_hat(canvas, &pose, style, hat);
    }
}

fn draw_legs(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let Pose { cx, s, hip_y, foot_y, frame, .. } = *pose;
    if s == 0 {
        let (lift_l, lift_r) = LIFT[frame];
        for (x, lift) in [(cx - 6, lift_l), (cx + 2, lift_r)] {
            let bottom = foot_y - lift;
            canvas.rect(x, hip_y, 4, bottom - hip_y - 2, pal.legs);
            let boot_x = if x < cx { x - 1 } else { x };
            canvas.rect(boot_x, bottom - 3, 5, 3, pal.boots);
        }
        return;
    }

    let stride = STRIDE[frame];
    let back = darken(pal.legs, 0.25);
    let legs = [(cx - s * stride, back, darken(pal.boots, 0.25)), (cx + s * stride, pal.legs, pal.boots)];
    for (foot_x, leg, boot) in legs {
        canvas.thick_line((cx, hip_y), (foot_x, foot_y - 3), 3, leg);
        canvas.rect(foot_x - 2 + s, foot_y - 2, 5, 3, boot);
    }
}

fn draw_cape(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let Pose { cx, s, torso_top, foot_y, frame, direction, .. } = *pose;
    let sway = CAPE_SWAY[frame];
    let shade = darken(pal.cape, 0.3);
    match direction {
        Direction::Down => {
            canvas.polygon(&[(cx - 8, torso_top + 1), (cx - 12 - sway, foot_y - 4), (cx - 6, foot_y - 6)], shade);
            canvas.polygon(&[(cx + 8, torso_top + 1), (cx + 12 + sway, foot_y - 4), (cx + 6, foot_y - 6)], shade);
        }
        Direction::Up => {
            canvas.polygon(
                &[
                    (cx - 8, torso_top),
                    (cx + 8, torso_top),
                    (cx + 11 + sway, foot_y - 3),
                    (cx - 11 - sway, foot_y - 3),
                ],
                pal.cape,
            );
            canvas.line((cx, torso_top + 3), (cx, foot_y - 5), shade);
            canvas.rect(cx - 8, torso_top, 17, 2, pal.trim);
        }
        Direction::Left | Direction::Right => {
            let back = cx - s * 4;
            canvas.polygon(
                &[
                    (back, torso_top),
                    (cx + s * 2, torso_top),
                    (back - s * (6 + sway * 2), foot_y - 4),
                    (back - s, foot_y - 3),
                ],
                pal.cape,
            );
            canvas.line((back, torso_top + 2), (back - s * (4 + sway * 2), foot_y - 5), shade);
        }
    }
}

fn draw_body(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let Pose { cx, s, torso_top, hip_y, direction, .. } = *pose;
    let shade = darken(pal.body, 0.2);
    if s == 0 {
        canvas.polygon(
            &[(cx - 7, torso_top), (cx + 7, torso_top), (cx + 6, hip_y + 1), (cx - 6, hip_y + 1)],
            pal.body,
        );
        canvas.rect(cx - 6, hip_y - 2, 13, 2, pal.trim);
        if direction == Direction::Down {
            canvas.rect(cx - 3, torso_top, 7, 2, pal.trim);
            canvas.line((cx, torso_top + 2), (cx, hip_y - 3), shade);
        } else {
            canvas.line((cx - 5, torso_top + 3), (cx - 5, hip_y - 3), shade);
            canvas.line((cx + 5, torso_top + 3), (cx + 5, hip_y - 3), shade);
        }
    } else {
        canvas.rect(cx - 5, torso_top, 11, hip_y - torso_top + 2, pal.body);
        canvas.rect(cx - 5, hip_y - 2, 11, 2, pal.trim);
        canvas.line((cx - s * 5, torso_top + 1), (cx - s * 5, hip_y - 3), shade);
    }
}

fn draw_arms(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let Pose { cx, s, torso_top, frame, .. } = *pose;
    let swing = ARM_SWING[frame];
    if s == 0 {
        let arms = [(cx - 9, -1, swing), (cx + 9, 1, -swing)];
        for (x, out, sw) in arms {
            let hand = (x + out, torso_top + 11 + sw);
            canvas.thick_line((x, torso_top + 2), hand, 3, pal.body);
            canvas.rect(x - 1, torso_top + 1, 3, 2, pal.trim);
            canvas.circle(hand.0, hand.1 + 1, 1, pal.skin);
        }
    } else {
        let hand = (cx + s * swing * 2, torso_top + 11);
        canvas.thick_line((cx, torso_top + 2), hand, 3, brighten(pal.body, 0.1));
        canvas.circle(hand.0, hand.1 + 1, 1, pal.skin);
    }
}

fn draw_head(canvas: &mut Canvas, pose: &Pose, style: &CharacterStyle) {
    let pal = &style.palette;
    let (hx, hy) = pose.head_center();
    let s = pose.s;
    match pose.direction {
        Direction::Down => {
            canvas.circle(hx, hy, 7, pal.skin);
            canvas.ellipse(hx, hy - 4, 7, 3, pal.hair);
            draw_face(canvas, pose, style);
        }
        Direction::Up => {
            canvas.circle(hx, hy, 7, pal.hair);
            canvas.line((hx - 3, hy + 2), (hx + 3, hy + 2), darken(pal.hair, 0.2));
        }
        Direction::Left | Direction::Right => {
            canvas.circle(hx, hy, 6, pal.skin);
            canvas.ellipse(hx - s * 2, hy - 2, 6, 5, pal.hair);
            canvas.point(hx + s * 6, hy + 1, darken(pal.skin, 0.15));
            draw_face(canvas, pose, style);
        }
    }
}

/// Eyes and mouth; also used to repaint the face inside a hood.
fn draw_face(canvas: &mut Canvas, pose: &Pose, style: &CharacterStyle) {
    let pal = &style.palette;
    let (hx, hy) = pose.head_center();
    let eyes: Vec<(i32, i32, i32)> = match pose.direction {
        Direction::Down => vec![(hx - 4, hy, 2), (hx + 2, hy, 2)],
        Direction::Left | Direction::Right => vec![(hx + pose.s * 3 - (pose.s < 0) as i32, hy, 1)],
        Direction::Up => return,
    };
    if style.glowing_eyes() {
        let halo = lerp_color(pal.skin, pal.eyes, 0.4);
        for &(x, y, w) in &eyes {
            canvas.rect(x - 1, y - 1, w + 2, 4, halo);
        }
    }
    for &(x, y, w) in &eyes {
        canvas.rect(x, y, w, 2, pal.eyes);
    }
    if pose.direction == Direction::Down {
        canvas.line((hx - 1, hy + 4), (hx + 1, hy + 4), darken(pal.skin, 0.35));
    }
}

fn draw_hat(canvas: &mut Canvas, pose: &Pose, style: &CharacterStyle, hat: HatStyle) {
    match hat {
        HatStyle::Pointed => hat_pointed(canvas, pose, &style.palette),
        HatStyle::Helm => hat_helm(canvas, pose, &style.palette),
        HatStyle::Hood => hat_hood(canvas, pose, style),
        HatStyle::Crown => hat_crown(canvas, pose, &style.palette),
        HatStyle::Horns => hat_horns(canvas, pose, &style.palette),
        HatStyle::Ears => hat_ears(canvas, pose, &style.palette),
        HatStyle::Crest => hat_crest(canvas, pose, &style.palette),
        HatStyle::Halo => hat_halo(canvas, pose, &style.palette),
        HatStyle::Antenna => hat_antenna(canvas, pose, &style.palette),
        HatStyle::Bandana => hat_bandana(canvas, pose, &style.palette),
        HatStyle::TopHat => hat_tophat(canvas, pose, &style.palette),
        HatStyle::Toque => hat_toque(canvas, pose, &style.palette),
        HatStyle::Feathered => hat_feathered(canvas, pose, &style.palette),
        HatStyle::Fin => hat_fin(canvas, pose, &style.palette),
    }
}

fn hat_pointed(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let lean = -pose.s * 5;
    canvas.polygon(&[(x - 7, y + 4), (x + 7, y + 4), (x + lean, y - 13)], pal.hat);
    canvas.line((x + lean, y - 13), (x + 5, y + 3), darken(pal.hat, 0.25));
    canvas.ellipse(x, y + 4, 10, 2, pal.hat);
    canvas.rect(x - 7, y + 2, 15, 2, pal.hat_trim);
}

fn hat_helm(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let (hx, hy) = pose.head_center();
    canvas.ellipse(hx, y + 4, 8, 5, pal.hat);
    canvas.rect(hx - 8, y + 4, 17, 3, pal.hat);
    canvas.line((hx - 8, y + 6), (hx + 8, y + 6), pal.hat_trim);
    match pose.direction {
        Direction::Down => {
            canvas.rect(hx - 1, y + 6, 2, 5, pal.hat);
            canvas.line((x, y - 1), (x, y + 4), brighten(pal.hat, 0.3));
        }
        Direction::Up => {
            canvas.rect(hx - 7, hy - 1, 15, 3, darken(pal.hat, 0.2));
        }
        Direction::Left | Direction::Right => {
            let s = pose.s;
            canvas.rect(hx - s * 7 - (s > 0) as i32 * 3, hy - 2, 4, 6, darken(pal.hat, 0.2));
            canvas.point(hx + s * 5, y + 8, pal.hat_trim);
        }
    }
}

fn hat_hood(canvas: &mut Canvas, pose: &Pose, style: &CharacterStyle) {
    let pal = &style.palette;
    let (hx, hy) = pose.head_center();
    let s = pose.s;
    match pose.direction {
        Direction::Down => {
            canvas.ellipse(hx, hy, 9, 9, pal.hat);
            canvas.polygon(&[(hx - 9, hy + 2), (hx + 9, hy + 2), (hx + 7, hy + 10), (hx - 7, hy + 10)], pal.hat);
            canvas.ellipse(hx, hy + 1, 5, 5, darken(pal.skin, 0.45));
            canvas.ellipse(hx, hy + 2, 4, 4, pal.skin);
            draw_face(canvas, pose, style);
        }
        Direction::Up => {
            canvas.ellipse(hx, hy, 9, 9, pal.hat);
            canvas.polygon(&[(hx - 4, hy + 6), (hx + 4, hy + 6), (hx, hy + 14)], darken(pal.hat, 0.2));
        }
        Direction::Left | Direction::Right => {
            canvas.ellipse(hx - s, hy, 8, 9, pal.hat);
            canvas.polygon(&[(hx - s * 6, hy - 4), (hx - s * 12, hy + 6), (hx - s * 5, hy + 8)], pal.hat);
            canvas.ellipse(hx + s * 3, hy + 1, 3, 5, darken(pal.skin, 0.45));
            canvas.ellipse(hx + s * 4, hy + 2, 2, 4, pal.skin);
            draw_face(canvas, pose, style);
        }
    }
}

fn hat_crown(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let band_y = y;
    canvas.rect(x - 6, band_y, 13, 3, pal.hat_trim);
    for px in [x - 6, x, x + 6] {
        canvas.polygon(&[(px - 2, band_y), (px + 2, band_y), (px, band_y - 4)], pal.hat_trim);
    }
    let gem = if pose.direction == Direction::Up { darken(pal.hat, 0.3) } else { pal.hat };
    canvas.rect(x - 1, band_y + 1, 2, 1, gem);
    canvas.line((x - 6, band_y + 2), (x + 6, band_y + 2), darken(pal.hat_trim, 0.25));
}

fn hat_horns(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let tip = brighten(pal.hat, 0.4);
    if pose.s == 0 {
        for side in [-1, 1] {
            let base = x + side * 5;
            canvas.polygon(&[(base - 2, y + 4), (base + 2, y + 3), (base + side * 6, y - 5)], pal.hat);
            canvas.point(base + side * 6, y - 5, tip);
        }
    } else {
        let s = pose.s;
        canvas.polygon(&[(x - 2, y + 4), (x + 3, y + 3), (x - s * 7, y - 4)], pal.hat);
        canvas.point(x - s * 7, y - 4, tip);
    }
}

fn hat_ears(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let inner = brighten(pal.hat, 0.35);
    if pose.s == 0 {
        for side in [-1, 1] {
            let base = x + side * 5;
            canvas.polygon(&[(base - 3, y + 4), (base + 3, y + 4), (base + side, y - 5)], pal.hat);
            if pose.direction == Direction::Down {
                canvas.line((base, y + 2), (base + side, y - 2), inner);
            }
        }
    } else {
        let s = pose.s;
        canvas.polygon(&[(x - s * 4, y + 4), (x + s, y + 4), (x - s * 3, y - 6)], pal.hat);
        canvas.line((x - s * 2, y + 2), (x - s * 3, y - 3), inner);
    }
}

fn hat_crest(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    if pose.s == 0 {
        canvas.rect(x - 1, y - 5, 3, 9, pal.hat);
        canvas.line((x, y - 5), (x, y + 3), brighten(pal.hat, 0.3));
    } else {
        let s = pose.s;
        canvas.polygon(&[(x + s * 5, y + 1), (x + s * 2, y - 4), (x - s * 6, y - 3), (x - s * 9, y + 3)], pal.hat);
        canvas.line((x + s * 2, y - 3), (x - s * 6, y - 2), pal.hat_trim);
    }
}

fn hat_halo(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let ring_y = y - 5;
    canvas.ellipse(x, ring_y, 7, 2, pal.hat_trim);
    canvas.ellipse(x, ring_y, 5, 1, crate::color::TRANSPARENT);
    canvas.point(x - 6, ring_y, brighten(pal.hat_trim, 0.5));
}

fn hat_antenna(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let (hx, hy) = pose.head_center();
    // Dome helmet with a glass visor
    canvas.ellipse(hx, hy, 9, 9, pal.hat);
    match pose.direction {
        Direction::Down => {
            canvas.ellipse(hx, hy + 1, 6, 4, pal.eyes);
            canvas.rect(hx - 3, hy - 1, 2, 1, brighten(pal.eyes, 0.6));
        }
        Direction::Left | Direction::Right => {
            canvas.ellipse(hx + pose.s * 4, hy + 1, 3, 4, pal.eyes);
            canvas.point(hx + pose.s * 5, hy - 1, brighten(pal.eyes, 0.6));
        }
        Direction::Up => {
            canvas.line((hx - 6, hy + 3), (hx + 6, hy + 3), darken(pal.hat, 0.25));
        }
    }
    let tip = (x - pose.s * 2, y - 8);
    canvas.line((x, y - 1), tip, pal.hat_trim);
    canvas.circle(tip.0, tip.1, 1, pal.hat_trim);
}

fn hat_bandana(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (_, y) = pose.crown();
    let (hx, _) = pose.head_center();
    canvas.rect(hx - 7, y + 2, 15, 3, pal.hat);
    canvas.line((hx - 7, y + 4), (hx + 7, y + 4), darken(pal.hat, 0.3));
    let sway = ARM_SWING[pose.frame];
    match pose.direction {
        Direction::Up => {
            canvas.polygon(&[(hx - 1, y + 3), (hx - 4 + sway, y + 10), (hx, y + 9)], pal.hat);
            canvas.polygon(&[(hx + 1, y + 3), (hx + 4 + sway, y + 10), (hx + 1, y + 9)], pal.hat);
        }
        Direction::Left | Direction::Right => {
            let s = pose.s;
            let knot = hx - s * 7;
            canvas.polygon(&[(knot, y + 2), (knot - s * 6, y + 6 + sway), (knot - s * 4, y + 8)], pal.hat);
            canvas.point(hx + s * 2, y + 3, pal.hat_trim);
        }
        Direction::Down => {
            canvas.points(&[(hx - 4, y + 3), (hx, y + 3), (hx + 4, y + 3)], pal.hat_trim);
        }
    }
}

fn hat_tophat(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    canvas.ellipse(x, y + 3, 10, 2, pal.hat);
    canvas.rect(x - 5, y - 9, 11, 12, pal.hat);
    canvas.rect(x - 5, y - 1, 11, 2, pal.hat_trim);
    canvas.line((x - 4, y - 8), (x - 4, y - 2), brighten(pal.hat, 0.2));
}

fn hat_toque(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    let puff = pal.hat;
    canvas.rect(x - 6, y, 13, 4, puff);
    canvas.circle(x - 4, y - 3, 4, puff);
    canvas.circle(x + 4, y - 3, 4, puff);
    canvas.circle(x, y - 6, 5, puff);
    let crease = darken(puff, 0.15);
    canvas.line((x - 2, y - 3), (x - 2, y + 2), crease);
    canvas.line((x + 2, y - 3), (x + 2, y + 2), crease);
    canvas.line((x - 6, y + 3), (x + 6, y + 3), pal.hat_trim);
}

fn hat_feathered(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    canvas.ellipse(x, y + 3, 9, 2, pal.hat);
    canvas.ellipse(x, y, 6, 4, pal.hat);
    canvas.rect(x - 6, y + 1, 13, 1, pal.hat_trim);
    let back = if pose.s == 0 { 1 } else { -pose.s };
    let sway = CAPE_SWAY[pose.frame];
    canvas.polygon(
        &[(x + back * 3, y - 1), (x + back * (10 + sway), y - 9), (x + back * 6, y - 1)],
        pal.trim,
    );
    canvas.line((x + back * 4, y - 1), (x + back * (9 + sway), y - 8), darken(pal.trim, 0.3));
}

fn hat_fin(canvas: &mut Canvas, pose: &Pose, pal: &CharacterPalette) {
    let (x, y) = pose.crown();
    if pose.s == 0 {
        canvas.polygon(&[(x - 1, y + 4), (x + 1, y + 4), (x, y - 7)], pal.hat);
    } else {
        let s = pose.s;
        canvas.polygon(&[(x + s * 3, y + 3), (x - s * 6, y + 4), (x - s * 4, y - 7)], pal.hat);
        canvas.line((x - s * 4, y - 6), (x, y + 3), brighten(pal.hat, 0.3));
    }
}
