//! Per-pixel animation functions for liquid and energy tiles.
//!
//! Each function maps `(base, x, y, frame)` to the top-face color of that
//! pixel; the caller reapplies the face darkening afterwards. Everything is a
//! pure function of its inputs: sinusoids phase-shifted by frame plus a
//! fixed-seed Perlin field.

use image::Rgba;
use noise::{NoiseFn, Perlin};
use std::f64::consts::FRAC_PI_2;
use std::sync::OnceLock;

use crate::color::{brighten, darken, lerp_color, rgb};

const NOISE_SEED: u32 = 0x5eed;

fn perlin() -> &'static Perlin {
    static FIELD: OnceLock<Perlin> = OnceLock::new();
    FIELD.get_or_init(|| Perlin::new(NOISE_SEED))
}

/// Perlin sample in roughly `[-1, 1]`.
pub(crate) fn noise3(x: f64, y: f64, z: f64) -> f64 {
    perlin().get([x, y, z])
}

fn phase(frame: usize) -> f64 {
    frame as f64 * FRAC_PI_2
}

/// Map `[-1, 1]` to `[0, 1]`.
fn unit(v: f64) -> f32 {
    ((v + 1.0) * 0.5).clamp(0.0, 1.0) as f32
}

pub fn anim_water(base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
    let (x, y) = (x as f64, y as f64);
    let wave = (x * 0.45 + y * 0.9 + phase(frame)).sin();
    let crest = unit(wave);
    if crest > 0.92 {
        brighten(base, 0.45)
    } else {
        lerp_color(darken(base, 0.08), brighten(base, 0.18), crest)
    }
}

pub fn anim_deep_water(base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
    let (x, y) = (x as f64, y as f64);
    let swell = (x * 0.25 + y * 0.5 + phase(frame) * 0.5).sin();
    let depth = noise3(x * 0.13, y * 0.21, frame as f64 * 0.35);
    let t = unit(swell * 0.6 + depth * 0.8);
    lerp_color(darken(base, 0.15), brighten(base, 0.12), t)
}

pub fn anim_lava(base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
    let (x, y) = (x as f64, y as f64);
    // The crust drifts slowly to the right.
    let flow = noise3(x * 0.17 - frame as f64 * 0.6, y * 0.29, 1.5);
    let heat = unit(flow * 1.4 + (y * 0.3 + phase(frame)).sin() * 0.3);
    if heat > 0.8 {
        lerp_color(rgb(255, 200, 60), rgb(255, 250, 180), (heat - 0.8) * 5.0)
    } else if heat < 0.3 {
        darken(base, 0.35)
    } else {
        lerp_color(base, rgb(255, 160, 40), (heat - 0.3) * 2.0)
    }
}

pub fn anim_toxic(base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
    let (fx, fy) = (x as f64, y as f64);
    let slime = noise3(fx * 0.2, fy * 0.3, frame as f64 * 0.4);
    // Bubbles rise and pop on a four-frame cycle.
    let cell = ((x / 6) * 7 + (y / 5) * 3) as usize;
    let bubble = (cell + frame) % 4 == 0 && x % 6 == 2 && y % 5 == 2;
    if bubble {
        brighten(base, 0.6)
    } else {
        lerp_color(darken(base, 0.1), brighten(base, 0.2), unit(slime * 1.5))
    }
}

pub fn anim_plasma(base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
    let (x, y) = (x as f64, y as f64);
    let p = phase(frame);
    let v = (x * 0.3 + p).sin() + (y * 0.4 - p).sin() + ((x + y) * 0.2 + p * 2.0).sin();
    let t = unit(v / 3.0);
    lerp_color(lerp_color(base, rgb(255, 90, 220), 0.3), brighten(base, 0.5), t)
}

pub fn anim_energy_field(base: Rgba<u8>, x: u32, y: u32, frame: usize) -> Rgba<u8> {
    // Scanlines sweep down two pixels per frame.
    let scan = (y as usize + 24 - (frame % 4) * 2) % 6;
    let shimmer = noise3(x as f64 * 0.31, y as f64 * 0.31, frame as f64);
    match scan {
        0 => brighten(base, 0.55),
        1 => brighten(base, 0.25),
        _ => lerp_color(darken(base, 0.1), base, unit(shimmer * 2.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Rgba<u8> = rgb(40, 110, 200);

    #[test]
    fn test_animations_are_deterministic() {
        for f in [anim_water, anim_deep_water, anim_lava, anim_toxic, anim_plasma, anim_energy_field] {
            for (x, y) in [(0, 0), (13, 27), (39, 55)] {
                assert_eq!(f(BASE, x, y, 2), f(BASE, x, y, 2));
            }
        }
    }

    #[test]
    fn test_animations_change_over_frames() {
        for f in [anim_water, anim_deep_water, anim_lava, anim_toxic, anim_plasma, anim_energy_field] {
            let grid = |frame| {
                (0..40u32).flat_map(|x| (0..56u32).map(move |y| (x, y))).map(|(x, y)| f(BASE, x, y, frame)).collect::<Vec<_>>()
            };
            assert_ne!(grid(1), grid(2));
        }
    }

    #[test]
    fn test_alpha_preserved() {
        assert_eq!(anim_water(BASE, 3, 4, 1).0[3], 255);
        assert_eq!(anim_energy_field(BASE, 3, 4, 3).0[3], 255);
    }

    #[test]
    fn test_noise_in_range() {
        for i in 0..50 {
            let v = noise3(i as f64 * 0.37, i as f64 * 0.11, 0.5);
            assert!((-1.5..=1.5).contains(&v));
        }
    }
}
