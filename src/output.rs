//! PNG output, integer scaling and output path generation

use image::imageops::FilterType;
use image::RgbaImage;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest accepted `--scale` factor.
pub const MAX_SCALE: u8 = 16;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Image encoding error
    #[error("Image error writing {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Metadata serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| OutputError::Io { path: dir.to_path_buf(), source })
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| OutputError::Image { path: path.to_path_buf(), source })?;
    log::info!("wrote {} ({}x{})", path.display(), image.width(), image.height());
    Ok(())
}

/// Write a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    std::fs::write(path, text).map_err(|source| OutputError::Io { path: path.to_path_buf(), source })?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges for pixel art. Factors of 0 and 1 return
/// the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor as u32, h * factor as u32, FilterType::Nearest)
}

/// Path of an output file: `<out_dir>/<stem>.<ext>`.
pub fn output_path(out_dir: &Path, stem: &str, extension: &str) -> PathBuf {
    out_dir.join(format!("{}.{}", stem, extension))
}

/// Metadata sidecar path next to a PNG.
pub fn sidecar_path(png: &Path) -> PathBuf {
    png.with_extension("json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("sprites"), "wizard", "png");
        assert_eq!(path, PathBuf::from("sprites/wizard.png"));
        assert_eq!(sidecar_path(&path), PathBuf::from("sprites/wizard.json"));
    }

    #[test]
    fn test_save_png_basic() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
        image.put_pixel(0, 1, Rgba([0, 0, 255, 255]));
        image.put_pixel(1, 1, Rgba([0, 0, 0, 0]));

        save_png(&image, &path).unwrap();

        // Read it back and verify
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(*loaded.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*loaded.get_pixel(1, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(*loaded.get_pixel(0, 1), Rgba([0, 0, 255, 255]));
        assert_eq!(*loaded.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_save_png_creates_parent_dirs() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dirs/test.png");

        save_png(&RgbaImage::new(1, 1), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_png_into_file_fails() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = save_png(&RgbaImage::new(1, 1), &blocker.join("x.png")).unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn test_save_json_sorted_and_terminated() {
        use std::collections::BTreeMap;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("meta.json");
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);
        save_json(&map, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_scale_image_factor_one_returns_original() {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([255, 255, 0, 255]));

        let scaled = scale_image(image.clone(), 1);
        assert_eq!(scaled, image);
        assert_eq!(scale_image(image.clone(), 0), image);
    }

    #[test]
    fn test_scale_image_factor_two() {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // Red
        image.put_pixel(1, 0, Rgba([0, 255, 0, 255])); // Green
        image.put_pixel(0, 1, Rgba([0, 0, 255, 255])); // Blue
        image.put_pixel(1, 1, Rgba([255, 255, 0, 255])); // Yellow

        let scaled = scale_image(image, 2);
        assert_eq!(scaled.dimensions(), (4, 4));

        // Each original pixel becomes a 2x2 block
        assert_eq!(*scaled.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*scaled.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*scaled.get_pixel(2, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(*scaled.get_pixel(3, 1), Rgba([0, 255, 0, 255]));
        assert_eq!(*scaled.get_pixel(0, 2), Rgba([0, 0, 255, 255]));
        assert_eq!(*scaled.get_pixel(1, 3), Rgba([0, 0, 255, 255]));
        assert_eq!(*scaled.get_pixel(3, 3), Rgba([255, 255, 0, 255]));
    }

    #[test]
    fn test_scale_image_preserves_transparency() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 128]));
        image.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        let scaled = scale_image(image, MAX_SCALE);
        assert_eq!(scaled.dimensions(), (32, 16));
        assert_eq!(*scaled.get_pixel(15, 15), Rgba([255, 0, 0, 128]));
        assert_eq!(*scaled.get_pixel(16, 0), Rgba([0, 0, 0, 0]));
    }
}
