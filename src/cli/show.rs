//! Show command implementation (single frame preview)

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::output::{save_png, scale_image};
use crate::spritesheet::{render_frame, Direction, FRAMES_PER_DIRECTION};

use super::{load_context, report_error, ConfigArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Default preview file name, e.g. `wizard_left_2.png`.
fn default_output(character: &str, direction: Direction, frame: usize) -> PathBuf {
    PathBuf::from(format!("{}_{}_{}.png", character, direction, frame % FRAMES_PER_DIRECTION))
}

/// Render one cell of a character sheet to a PNG.
pub fn run_show(
    args: &ConfigArgs,
    character: &str,
    direction: Direction,
    frame: usize,
    output: Option<&Path>,
    scale: Option<u8>,
) -> ExitCode {
    let context = match load_context(args, &CliOverrides::default()) {
        Ok(context) => context,
        Err(code) => return code,
    };

    let Some(generator) = context.character(character) else {
        eprintln!("Error: unknown character '{}'", character);
        eprintln!("Run `spritegen list` to see available characters");
        return ExitCode::from(EXIT_INVALID_ARGS);
    };

    let image = render_frame(|canvas, dir, f| generator.draw(canvas, dir, f), direction, frame);
    let image = scale_image(image, scale.unwrap_or_else(|| context.scale()));

    let path = output.map(Path::to_path_buf).unwrap_or_else(|| default_output(generator.name(), direction, frame));
    match save_png(&image, &path) {
        Ok(()) => {
            println!("Saved {} ({}x{})", path.display(), image.width(), image.height());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => report_error(&e, EXIT_ERROR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_wraps_frame() {
        assert_eq!(default_output("wizard", Direction::Left, 6), PathBuf::from("wizard_left_2.png"));
        assert_eq!(default_output("raptor", Direction::Down, 0), PathBuf::from("raptor_down_0.png"));
    }
}
