//! spritegen - Procedural pixel-art generators
//!
//! This library provides:
//! - Hand-authored and template-driven 4×4 character walk sheets
//! - An animated isometric tile atlas
//! - Diamond-edge transition masks
//! - A parallel build layer and CLI that write them as PNG (plus optional
//!   JSON metadata)

pub mod build;
pub mod canvas;
pub mod characters;
pub mod cli;
pub mod color;
pub mod config;
pub mod masks;
pub mod metadata;
pub mod output;
pub mod shapes;
pub mod spritesheet;
pub mod tiles;
