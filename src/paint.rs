//! Raster drawing primitives over [`RgbImage`] buffers.
//!
//! Lines and outlines clip silently: walking stops at the first off-canvas
//! pixel. [`draw_point`] is the exception and panics off-canvas, since a
//! single explicit coordinate is a caller responsibility.

use crate::color::ColorName;
use crate::image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, PI, SQRT_2};

/// Degrees to radians.
const RADIANS: f64 = PI / 180.0;
/// Three quarter-turns, for the trailing square corners.
const PI_3_4: f64 = 3.0 * FRAC_PI_4;

/// Axis-aligned rectangle given by its lower and upper corners (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub lx: i64,
    pub ly: i64,
    pub ux: i64,
    pub uy: i64,
}

impl Rect {
    pub const fn new(lx: i64, ly: i64, ux: i64, uy: i64) -> Self {
        Self { lx, ly, ux, uy }
    }
}

/// Set a single pixel.
///
/// # Panics
/// If `(x, y)` is outside the canvas.
pub fn draw_point(im: &mut RgbImage, x: i64, y: i64, color: ColorName) {
    let (r, g, b) = color.rgb();
    im.set(x, y, r, g, b);
}

/// Walk a line from `(x0, y0)` towards `(x1, y1)` with a unit-length step,
/// stopping at the first off-canvas pixel or once either coordinate passes
/// its endpoint. A zero-length line degenerates to a single point.
pub fn draw_line(im: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: ColorName) {
    let (r, g, b) = color.rgb();
    let mut dx = (x1 - x0) as f64;
    let mut dy = (y1 - y0) as f64;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        if im.is_inside(x0, y0) {
            im.set(x0, y0, r, g, b);
        }
        return;
    }
    dx /= length;
    dy /= length;
    let mut x = x0 as f64;
    let mut y = y0 as f64;
    loop {
        if !im.is_inside(x as i64, y as i64) {
            break;
        }
        im.set(x as i64, y as i64, r, g, b);
        x += dx;
        y += dy;
        if dy > 0.0 {
            if y > y1 as f64 {
                break;
            }
        } else if y < y1 as f64 {
            break;
        }
        if dx > 0.0 {
            if x > x1 as f64 {
                break;
            }
        } else if x < x1 as f64 {
            break;
        }
    }
}

/// Plus-shaped marker: two crossing lines of half-length `half_size`.
pub fn draw_plus(im: &mut RgbImage, x: i64, y: i64, half_size: i64, color: ColorName) {
    draw_line(im, x - half_size, y, x + half_size, y, color);
    draw_line(im, x, y - half_size, x, y + half_size, color);
}

/// Square outline of half-width `half_size` centered on `(x, y)`, rotated by
/// `orientation_deg` degrees.
pub fn draw_square(
    im: &mut RgbImage,
    x: i64,
    y: i64,
    half_size: i64,
    orientation_deg: i64,
    color: ColorName,
) {
    let dr = SQRT_2 * half_size as f64;
    let o = orientation_deg as f64 * RADIANS;
    let corner = |angle: f64| {
        (
            (x as f64 + dr * angle.cos()) as i64,
            (y as f64 + dr * angle.sin()) as i64,
        )
    };
    let (rx0, ry0) = corner(o + FRAC_PI_4);
    let (rx1, ry1) = corner(o - FRAC_PI_4);
    let (rx2, ry2) = corner(o - PI_3_4);
    let (rx3, ry3) = corner(o + PI_3_4);

    draw_line(im, rx0, ry0, rx1, ry1, color);
    draw_line(im, rx1, ry1, rx2, ry2, color);
    draw_line(im, rx2, ry2, rx3, ry3, color);
    draw_line(im, rx3, ry3, rx0, ry0, color);
}

/// Axis-aligned rectangle outline.
pub fn draw_rectangle(im: &mut RgbImage, rectangle: &Rect, color: ColorName) {
    draw_line(im, rectangle.lx, rectangle.ly, rectangle.lx, rectangle.uy, color);
    draw_line(im, rectangle.lx, rectangle.uy, rectangle.ux, rectangle.uy, color);
    draw_line(im, rectangle.ux, rectangle.ly, rectangle.ux, rectangle.uy, color);
    draw_line(im, rectangle.lx, rectangle.ly, rectangle.ux, rectangle.ly, color);
}

/// Circle outline approximated by chords every 5 degrees. Chords with an
/// off-canvas endpoint are skipped entirely.
pub fn draw_circle(im: &mut RgbImage, x: i64, y: i64, radius: f64, color: ColorName) {
    let mut sx = x;
    let mut sy = (y as f64 + radius) as i64;
    for a in (5..=360).step_by(5) {
        let angle = a as f64 * RADIANS;
        let cy = (y as f64 + radius * angle.cos()) as i64;
        let cx = (x as f64 + radius * angle.sin()) as i64;
        if im.is_inside(sx, sy) && im.is_inside(cx, cy) {
            draw_line(im, sx, sy, cx, cy, color);
        }
        sx = cx;
        sy = cy;
    }
}

/// Blend `source` over `dest` with weight `strength`, in `[0, 1]`.
fn blend(dest: u8, source: u8, strength: f32) -> u8 {
    (strength * source as f32 + (1.0 - strength) * dest as f32).clamp(0.0, 255.0) as u8
}

/// Alpha-blend a filled square of width `width` centered on `(x0, y0)` onto
/// the image; `strength` 1.0 paints pure color, 0.0 leaves pixels untouched.
/// Off-canvas pixels are skipped.
pub fn draw_shaded_square(
    im: &mut RgbImage,
    x0: i64,
    y0: i64,
    width: i64,
    strength: f32,
    color: ColorName,
) {
    let (cr, cg, cb) = color.rgb();
    let hw = width / 2;
    for y in (y0 - hw)..=(y0 + hw) {
        for x in (x0 - hw)..=(x0 + hw) {
            if !im.is_inside(x, y) {
                continue;
            }
            let (pr, pg, pb) = im.get(x, y);
            im.set(
                x,
                y,
                blend(pr, cr, strength),
                blend(pg, cg, strength),
                blend(pb, cb, strength),
            );
        }
    }
}

/// Alpha-blend the color onto every pixel where the mask is nonzero.
///
/// # Panics
/// If mask and image dimensions differ.
pub fn draw_shaded(im: &mut RgbImage, mask: &GrayImage, strength: f32, color: ColorName) {
    assert!(
        im.w() == mask.w() && im.h() == mask.h(),
        "image and mask dimensions must match"
    );
    let (cr, cg, cb) = color.rgb();
    for y in 0..im.h() as i64 {
        for x in 0..im.w() as i64 {
            if mask.get(x, y) == 0 {
                continue;
            }
            let (pr, pg, pb) = im.get(x, y);
            im.set(
                x,
                y,
                blend(pr, cr, strength),
                blend(pg, cg, strength),
                blend(pb, cb, strength),
            );
        }
    }
}
