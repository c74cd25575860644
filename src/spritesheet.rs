//! Spritesheet layout - frame descriptors and grid composition
//!
//! Character sheets are 4×4 grids of 64×64 cells: one row per facing
//! direction, one column per walk-cycle frame. Each cell is drawn on its own
//! canvas so shapes that overhang a frame never bleed into a neighbour, then
//! pasted into the sheet.

use image::RgbaImage;
use std::fmt;
use std::str::FromStr;

use crate::canvas::Canvas;
use crate::color::TRANSPARENT;

/// Side length of one character frame in pixels.
pub const FRAME_SIZE: u32 = 64;

/// Walk-cycle frames per direction.
pub const FRAMES_PER_DIRECTION: usize = 4;

/// Facing direction of a character frame. The discriminant is the sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Down = 0,
    Up = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All directions in sheet row order.
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Left, Direction::Right];

    /// Row index in the sheet.
    pub fn row(self) -> u32 {
        self as u32
    }

    /// Lower-case name used in metadata keys.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Horizontal sign for side views: -1 facing left, +1 facing right, 0 otherwise.
    pub fn side(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Down | Direction::Up => 0,
        }
    }

    /// True for the two profile views.
    pub fn is_side(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "down" | "s" | "south" => Ok(Direction::Down),
            "up" | "n" | "north" => Ok(Direction::Up),
            "left" | "w" | "west" => Ok(Direction::Left),
            "right" | "e" | "east" => Ok(Direction::Right),
            other => Err(format!("unknown direction '{}' (expected down, up, left, right)", other)),
        }
    }
}

/// Pixel rectangle `(x, y, w, h)` of a cell inside a character sheet.
pub fn frame_rect(direction: Direction, frame: usize) -> (u32, u32, u32, u32) {
    (frame as u32 * FRAME_SIZE, direction.row() * FRAME_SIZE, FRAME_SIZE, FRAME_SIZE)
}

/// Render one frame cell on an isolated canvas.
pub fn render_frame<F>(draw: F, direction: Direction, frame: usize) -> RgbaImage
where
    F: Fn(&mut Canvas, Direction, usize),
{
    let mut canvas = Canvas::new(FRAME_SIZE, FRAME_SIZE);
    draw(&mut canvas, direction, frame);
    canvas.into_image()
}

/// Render a full 4×4 character sheet.
///
/// `draw` is called once per (direction, frame) cell with a fresh 64×64
/// canvas; the cell ends up at `(frame * 64, direction.row() * 64)`.
///
/// ```
/// use spritegen::spritesheet::{render_character_sheet, Direction};
///
/// let sheet = render_character_sheet(|canvas, dir, frame| {
///     if dir == Direction::Up && frame == 2 {
///         canvas.point(0, 0, image::Rgba([255, 0, 0, 255]));
///     }
/// });
/// assert_eq!(sheet.dimensions(), (256, 256));
/// assert_eq!(sheet.get_pixel(128, 64).0, [255, 0, 0, 255]);
/// ```
pub fn render_character_sheet<F>(draw: F) -> RgbaImage
where
    F: Fn(&mut Canvas, Direction, usize),
{
    let frames: Vec<RgbaImage> = Direction::ALL
        .iter()
        .flat_map(|&dir| (0..FRAMES_PER_DIRECTION).map(move |frame| (dir, frame)))
        .map(|(dir, frame)| render_frame(&draw, dir, frame))
        .collect();
    render_spritesheet(&frames, Some(FRAMES_PER_DIRECTION as u32))
}

/// Render multiple frames into a spritesheet grid.
///
/// Frames fill the grid row-major. Cells are sized to the largest frame and
/// smaller frames sit in the top-left corner of their cell with transparent
/// padding. `cols = None` lays everything out in a single row.
pub fn render_spritesheet(frames: &[RgbaImage], cols: Option<u32>) -> RgbaImage {
    if frames.is_empty() {
        return RgbaImage::from_pixel(1, 1, TRANSPARENT);
    }

    let cell_w = frames.iter().map(|f| f.width()).max().unwrap_or(1);
    let cell_h = frames.iter().map(|f| f.height()).max().unwrap_or(1);

    let count = frames.len() as u32;
    let columns = cols.unwrap_or(count).max(1);
    let rows = count.div_ceil(columns);

    let mut sheet = RgbaImage::from_pixel(columns * cell_w, rows * cell_h, TRANSPARENT);
    for (i, frame) in frames.iter().enumerate() {
        let x = (i as u32 % columns) * cell_w;
        let y = (i as u32 / columns) * cell_h;
        image::imageops::replace(&mut sheet, frame, x as i64, y as i64);
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    #[test]
    fn test_direction_rows_and_names() {
        let rows: Vec<u32> = Direction::ALL.iter().map(|d| d.row()).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!("EAST".parse::<Direction>(), Ok(Direction::Right));
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_side_sign() {
        assert_eq!(Direction::Left.side(), -1);
        assert_eq!(Direction::Right.side(), 1);
        assert_eq!(Direction::Down.side(), 0);
        assert!(!Direction::Up.is_side());
    }

    #[test]
    fn test_frame_rect() {
        assert_eq!(frame_rect(Direction::Down, 0), (0, 0, 64, 64));
        assert_eq!(frame_rect(Direction::Right, 3), (192, 192, 64, 64));
    }

    #[test]
    fn test_cells_are_isolated() {
        // A shape overhanging the cell must not appear in the neighbour.
        let sheet = render_character_sheet(|canvas, dir, frame| {
            if dir == Direction::Down && frame == 0 {
                canvas.rect(60, 60, 20, 20, Rgba([9, 9, 9, 255]));
            }
        });
        assert_eq!(sheet.get_pixel(63, 63).0, [9, 9, 9, 255]);
        assert_eq!(*sheet.get_pixel(64, 63), TRANSPARENT);
        assert_eq!(*sheet.get_pixel(63, 64), TRANSPARENT);
    }

    #[test]
    fn test_cell_placement_by_direction_and_frame() {
        let sheet = render_character_sheet(|canvas, dir, frame| {
            canvas.point(0, 0, Rgba([dir.row() as u8, frame as u8, 7, 255]));
        });
        for dir in Direction::ALL {
            for frame in 0..FRAMES_PER_DIRECTION {
                let (x, y, _, _) = frame_rect(dir, frame);
                assert_eq!(sheet.get_pixel(x, y).0, [dir.row() as u8, frame as u8, 7, 255]);
            }
        }
    }

    #[test]
    fn test_empty_frames() {
        let sheet = render_spritesheet(&[], None);
        assert_eq!(sheet.dimensions(), (1, 1));
    }

    #[test]
    fn test_uneven_grid_pads_with_transparency() {
        let red = Rgba([255, 0, 0, 255]);
        let frames = vec![solid(2, 2, red), solid(2, 2, red), solid(2, 2, red)];
        let sheet = render_spritesheet(&frames, Some(2));
        assert_eq!(sheet.dimensions(), (4, 4));
        assert_eq!(*sheet.get_pixel(0, 2), red);
        assert_eq!(*sheet.get_pixel(2, 2), TRANSPARENT);
    }

    #[test]
    fn test_different_sized_frames_padded() {
        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 255]);
        let sheet = render_spritesheet(&[solid(2, 2, red), solid(4, 4, green)], None);
        assert_eq!(sheet.dimensions(), (8, 4));
        assert_eq!(*sheet.get_pixel(1, 1), red);
        assert_eq!(*sheet.get_pixel(2, 0), TRANSPARENT);
        assert_eq!(*sheet.get_pixel(7, 3), green);
    }
}
