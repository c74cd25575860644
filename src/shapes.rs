//! Shape rasterization primitives for pixel-perfect rendering.
//!
//! Every generator builds its frames out of these primitives. Each function
//! converts a geometric shape into the set of integer pixel coordinates it
//! covers; [`crate::canvas::Canvas`] then offsets, clips and paints them.
//! Nothing here antialiases: a pixel is either covered or not.

use std::collections::HashSet;

/// A set of covered pixel coordinates.
pub type PixelSet = HashSet<(i32, i32)>;

/// Rasterize a line using Bresenham's line algorithm.
///
/// Both endpoints are included.
///
/// # Examples
///
/// ```
/// use spritegen::shapes::rasterize_line;
///
/// let pixels = rasterize_line((0, 0), (3, 3));
/// assert_eq!(pixels.len(), 4);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 3)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> PixelSet {
    let mut pixels = PixelSet::new();
    walk_line(p0, p1, |x, y| {
        pixels.insert((x, y));
    });
    pixels
}

fn walk_line(p0: (i32, i32), p1: (i32, i32), mut visit: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        visit(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Rasterize a line `width` pixels thick.
///
/// The pen is a square of side `width` centred on the Bresenham path (for even
/// widths the extra pixel goes right/down). A width of 0 or less draws nothing.
///
/// ```
/// use spritegen::shapes::rasterize_thick_line;
///
/// let pixels = rasterize_thick_line((0, 0), (4, 0), 3);
/// assert_eq!(pixels.len(), 7 * 3);
/// ```
pub fn rasterize_thick_line(p0: (i32, i32), p1: (i32, i32), width: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if width <= 0 {
        return pixels;
    }
    let lo = -(width - 1) / 2;
    let hi = lo + width - 1;
    walk_line(p0, p1, |x, y| {
        for oy in lo..=hi {
            for ox in lo..=hi {
                pixels.insert((x + ox, y + oy));
            }
        }
    });
    pixels
}

/// Rasterize a filled rectangle with top-left corner (x, y) and size (w, h).
///
/// ```
/// use spritegen::shapes::rasterize_rect;
///
/// let pixels = rasterize_rect(0, 0, 3, 2);
/// assert_eq!(pixels.len(), 6);
/// ```
pub fn rasterize_rect(x: i32, y: i32, w: i32, h: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if w <= 0 || h <= 0 {
        return pixels;
    }
    for py in y..y + h {
        for px in x..x + w {
            pixels.insert((px, py));
        }
    }
    pixels
}

/// Rasterize the outline of a rectangle with the given stroke thickness.
pub fn rasterize_stroke(x: i32, y: i32, w: i32, h: i32, thickness: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if w <= 0 || h <= 0 || thickness <= 0 {
        return pixels;
    }
    for t in 0..thickness.min(h) {
        for px in x..x + w {
            pixels.insert((px, y + t));
            pixels.insert((px, y + h - 1 - t));
        }
    }
    for t in 0..thickness.min(w) {
        for py in y..y + h {
            pixels.insert((x + t, py));
            pixels.insert((x + w - 1 - t, py));
        }
    }
    pixels
}

/// Rasterize a filled ellipse centred at (cx, cy) with radii (rx, ry).
///
/// Uses the midpoint ellipse algorithm and fills each span. A radius of 0
/// degenerates to a line along the other axis; negative radii draw nothing.
///
/// ```
/// use spritegen::shapes::rasterize_ellipse;
///
/// let pixels = rasterize_ellipse(5, 5, 3, 2);
/// assert!(pixels.contains(&(5, 5)));
/// assert!(pixels.contains(&(8, 5)));
/// assert!(!pixels.contains(&(9, 5)));
/// ```
pub fn rasterize_ellipse(cx: i32, cy: i32, rx: i32, ry: i32) -> PixelSet {
    let mut pixels = PixelSet::new();
    if rx < 0 || ry < 0 {
        return pixels;
    }
    if rx == 0 || ry == 0 {
        return rasterize_rect(cx - rx, cy - ry, 2 * rx + 1, 2 * ry + 1);
    }

    let (cx, cy, rx, ry) = (cx as i64, cy as i64, rx as i64, ry as i64);
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;

    let mut span = |x: i64, y: i64| {
        for sx in -x..=x {
            pixels.insert(((cx + sx) as i32, (cy + y) as i32));
            pixels.insert(((cx + sx) as i32, (cy - y) as i32));
        }
    };

    // Region 1: slope magnitude < 1
    let mut x = 0i64;
    let mut y = ry;
    let mut dx = 0i64;
    let mut dy = 2 * rx_sq * y;
    let mut p1 = ry_sq - rx_sq * ry + rx_sq / 4;
    while dx < dy {
        span(x, y);
        x += 1;
        dx += 2 * ry_sq;
        if p1 < 0 {
            p1 += dx + ry_sq;
        } else {
            y -= 1;
            dy -= 2 * rx_sq;
            p1 += dx - dy + ry_sq;
        }
    }

    // Region 2
    let mut p2 = ry_sq * (2 * x + 1) * (2 * x + 1) / 4 + rx_sq * (y - 1) * (y - 1) - rx_sq * ry_sq;
    while y >= 0 {
        span(x, y);
        y -= 1;
        dy -= 2 * rx_sq;
        if p2 > 0 {
            p2 += rx_sq - dy;
        } else {
            x += 1;
            dx += 2 * ry_sq;
            p2 += dx - dy + rx_sq;
        }
    }

    pixels
}

/// Rasterize a filled polygon.
///
/// Interior spans come from an even-odd scanline fill with a half-open edge
/// rule (an edge covers `y_min <= y < y_max`), so vertices shared by two edges
/// are counted once. The outline is then traced with Bresenham lines, which
/// keeps thin slivers and bottom vertices visible.
///
/// ```
/// use spritegen::shapes::rasterize_polygon;
///
/// let diamond = vec![(4, 0), (8, 4), (4, 8), (0, 4)];
/// let pixels = rasterize_polygon(&diamond);
/// for x in 0..=8 {
///     assert!(pixels.contains(&(x, 4)));
/// }
/// assert!(!pixels.contains(&(0, 0)));
/// ```
pub fn rasterize_polygon(vertices: &[(i32, i32)]) -> PixelSet {
    let mut pixels = PixelSet::new();
    match vertices.len() {
        0 => return pixels,
        1 => {
            pixels.insert(vertices[0]);
            return pixels;
        }
        2 => return rasterize_line(vertices[0], vertices[1]),
        _ => {}
    }

    let min_y = vertices.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let max_y = vertices.iter().map(|&(_, y)| y).max().unwrap_or(0);

    let mut crossings: Vec<i32> = Vec::with_capacity(vertices.len());
    for y in min_y..=max_y {
        crossings.clear();
        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            if y1 == y2 {
                continue;
            }
            let (lo, hi) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
            if y >= lo && y < hi {
                let t = (y - y1) as f32 / (y2 - y1) as f32;
                crossings.push((x1 as f32 + t * (x2 - x1) as f32).round() as i32);
            }
        }
        crossings.sort_unstable();
        for pair in crossings.chunks_exact(2) {
            for x in pair[0]..=pair[1] {
                pixels.insert((x, y));
            }
        }
    }

    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        pixels.extend(rasterize_line(a, b));
    }

    pixels
}
