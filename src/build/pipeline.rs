//! Planning and executing single targets.
//!
//! The plan lists every built-in character, then the template characters
//! declared in `spritegen.toml`, then the tile atlas and the mask strip.

use std::path::PathBuf;

use image::RgbaImage;
use thiserror::Error;

use crate::build::{BuildContext, BuildPlan, BuildTarget, TargetKind};
use crate::characters::BUILTIN_NAMES;
use crate::masks::render_transition_masks;
use crate::metadata::{character_metadata, mask_metadata, tile_metadata, SheetMetadata};
use crate::output::{output_path, save_json, save_png, scale_image, sidecar_path, OutputError};
use crate::tiles::render_tile_atlas;

use super::target::{MASKS_STEM, TILES_STEM};

/// Error type for build operations
#[derive(Debug, Error)]
pub enum BuildError {
    /// A requested target matched nothing in the plan
    #[error("unknown target '{0}' (run `spritegen list` to see available targets)")]
    UnknownTarget(String),
    /// Writing a PNG or sidecar failed
    #[error(transparent)]
    Output(#[from] OutputError),
    /// The worker pool could not be created
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Create the full build plan for a context, without filtering.
pub fn create_build_plan(context: &BuildContext) -> BuildPlan {
    let out_dir = context.out_dir();
    let mut plan = BuildPlan::new();

    for name in BUILTIN_NAMES {
        plan.add_target(BuildTarget::character(name, output_path(&out_dir, name, "png")));
    }
    for name in context.config().characters.keys() {
        plan.add_target(BuildTarget::character(name.clone(), output_path(&out_dir, name, "png")));
    }
    plan.add_target(BuildTarget::tiles(output_path(&out_dir, TILES_STEM, "png")));
    plan.add_target(BuildTarget::masks(output_path(&out_dir, MASKS_STEM, "png")));

    plan
}

/// Create the plan and apply the context's target filter.
pub fn create_filtered_plan(context: &BuildContext) -> Result<BuildPlan, BuildError> {
    create_build_plan(context).filter(context.target_filter()).map_err(BuildError::UnknownTarget)
}

/// Render a target at 1× scale.
pub fn render_target(context: &BuildContext, target: &BuildTarget) -> Result<RgbaImage, BuildError> {
    match target.kind {
        TargetKind::Character => {
            let generator =
                context.character(&target.name).ok_or_else(|| BuildError::UnknownTarget(target.id.clone()))?;
            Ok(generator.render_sheet())
        }
        TargetKind::Tiles => Ok(render_tile_atlas()),
        TargetKind::Masks => Ok(render_transition_masks()),
    }
}

/// Sidecar metadata for a target.
pub fn target_metadata(target: &BuildTarget, scale: u8) -> SheetMetadata {
    let image = target.output.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    match target.kind {
        TargetKind::Character => character_metadata(&image, scale),
        TargetKind::Tiles => tile_metadata(&image, scale),
        TargetKind::Masks => mask_metadata(&image, scale),
    }
}

/// Render, scale and write one target. Returns the files written.
pub fn build_target(context: &BuildContext, target: &BuildTarget) -> Result<Vec<PathBuf>, BuildError> {
    let scale = context.scale();
    let image = scale_image(render_target(context, target)?, scale);
    save_png(&image, &target.output)?;
    let mut outputs = vec![target.output.clone()];

    if context.write_metadata() {
        let sidecar = sidecar_path(&target.output);
        save_json(&target_metadata(target, scale), &sidecar)?;
        outputs.push(sidecar);
    }

    Ok(outputs)
}
