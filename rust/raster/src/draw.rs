// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing primitives for floor-plan rasterization
//!
//! Three sub-algorithms live here: thick line-segment strokes (walls,
//! doors, windows), hatch-tick generation along a wall segment, and
//! column marker stamping at polygon vertices. All coordinate-to-pixel
//! conversion goes through [`to_pixel`] so the truncation policy is in
//! exactly one place.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use nalgebra::{Rotation2, Vector2};

/// Convert a world coordinate to a pixel coordinate.
///
/// Truncates toward zero; every drawing step uses this, never rounding.
pub fn to_pixel(v: f64) -> i32 {
    v.trunc() as i32
}

/// Compute the line segment for a door or window record.
///
/// Which of `width`/`height` is nonzero fixes the axis; `orientation`
/// only picks the sign along that axis (2 = −x, 3 = −y), with any other
/// code falling back to the positive direction. Both extents zero (or
/// both nonzero) yields a degenerate point segment.
pub fn fixture_segment(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    orientation: i32,
) -> ((i32, i32), (i32, i32)) {
    let start = (to_pixel(x), to_pixel(y));

    let end = if width > 0.0 && height == 0.0 {
        match orientation {
            2 => (to_pixel(x - width), to_pixel(y)),
            _ => (to_pixel(x + width), to_pixel(y)),
        }
    } else if height > 0.0 && width == 0.0 {
        match orientation {
            3 => (to_pixel(x), to_pixel(y - height)),
            _ => (to_pixel(x), to_pixel(y + height)),
        }
    } else {
        start
    };

    (start, end)
}

/// Compute hatch tick endpoints along a wall segment.
///
/// Ticks start at the wall's start point and step by `spacing`; a
/// zero-length wall produces none. Each tick is centered on the wall and
/// extends `hatch_len / 2` either way along the wall direction rotated by
/// `angle_deg`. Endpoints are left in world coordinates so the geometry
/// stays testable independent of the canvas.
pub fn hatch_ticks(
    start: (f64, f64),
    end: (f64, f64),
    spacing: f64,
    hatch_len: f64,
    angle_deg: f64,
) -> Vec<((f64, f64), (f64, f64))> {
    let origin = Vector2::new(start.0, start.1);
    let wall = Vector2::new(end.0 - start.0, end.1 - start.1);
    let wall_len = wall.norm();
    if wall_len == 0.0 || spacing <= 0.0 {
        return Vec::new();
    }

    let wall_dir = wall / wall_len;
    let hatch_dir = Rotation2::new(angle_deg.to_radians()) * wall_dir;
    let half = hatch_dir * (hatch_len / 2.0);

    let count = (wall_len / spacing).floor() as usize;
    (0..count)
        .map(|k| {
            let center = origin + wall_dir * (k as f64 * spacing);
            let a = center - half;
            let b = center + half;
            ((a.x, a.y), (b.x, b.y))
        })
        .collect()
}

/// Overlay hatch ticks on a wall segment as thin dark lines.
pub fn draw_hatching_mut(
    canvas: &mut RgbImage,
    pt1: (i32, i32),
    pt2: (i32, i32),
    spacing: f64,
    hatch_len: f64,
    angle_deg: f64,
    color: Rgb<u8>,
) {
    let start = (pt1.0 as f64, pt1.1 as f64);
    let end = (pt2.0 as f64, pt2.1 as f64);
    for (a, b) in hatch_ticks(start, end, spacing, hatch_len, angle_deg) {
        draw_line_segment_mut(
            canvas,
            (to_pixel(a.0) as f32, to_pixel(a.1) as f32),
            (to_pixel(b.0) as f32, to_pixel(b.1) as f32),
            color,
        );
    }
}

/// Draw a line segment with the given stroke thickness.
///
/// Thick strokes are a filled quad (the segment offset by half the
/// thickness along its normal) plus the one-pixel centerline; degenerate
/// quads and thin strokes fall back to a plain line. A zero-length
/// segment renders as a single pixel.
pub fn draw_thick_segment_mut(
    canvas: &mut RgbImage,
    pt1: (i32, i32),
    pt2: (i32, i32),
    thickness: f64,
    color: Rgb<u8>,
) {
    let a = (pt1.0 as f32, pt1.1 as f32);
    let b = (pt2.0 as f32, pt2.1 as f32);

    if pt1 == pt2 {
        // Degenerate fixture: a single pixel, clipped at the borders.
        if pt1.0 >= 0
            && pt1.1 >= 0
            && (pt1.0 as u32) < canvas.width()
            && (pt1.1 as u32) < canvas.height()
        {
            canvas.put_pixel(pt1.0 as u32, pt1.1 as u32, color);
        }
        return;
    }
    if thickness <= 1.5 {
        draw_line_segment_mut(canvas, a, b, color);
        return;
    }

    let p1 = Vector2::new(pt1.0 as f64, pt1.1 as f64);
    let p2 = Vector2::new(pt2.0 as f64, pt2.1 as f64);
    let dir = (p2 - p1).normalize();
    let normal = Vector2::new(-dir.y, dir.x) * (thickness / 2.0);

    let corners = [p1 + normal, p2 + normal, p2 - normal, p1 - normal];
    let mut quad: Vec<Point<i32>> = Vec::with_capacity(4);
    for c in corners {
        let p = Point::new(to_pixel(c.x), to_pixel(c.y));
        if quad.last() != Some(&p) {
            quad.push(p);
        }
    }
    while quad.len() > 1 && quad.first() == quad.last() {
        quad.pop();
    }

    if quad.len() >= 3 {
        draw_polygon_mut(canvas, &quad, color);
    }
    // Centerline keeps thin diagonals continuous after corner truncation.
    draw_line_segment_mut(canvas, a, b, color);
}

/// Stamp a filled square column marker centered on a vertex.
pub fn draw_column_marker_mut(canvas: &mut RgbImage, cx: i32, cy: i32, size: i32, color: Rgb<u8>) {
    if size <= 0 {
        return;
    }
    let half = size / 2;
    let rect = Rect::at(cx - half, cy - half).of_size(size as u32, size as u32);
    draw_filled_rect_mut(canvas, rect, color);
}
