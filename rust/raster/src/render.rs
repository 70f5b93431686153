// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan renderer
//!
//! Paints a decoded [`FloorPlan`] onto a square RGB canvas in a fixed
//! layering order: wall segments with hatching, column markers at every
//! vertex, then doors, then windows. Later layers overlay earlier ones.

use crate::draw::{
    draw_column_marker_mut, draw_hatching_mut, draw_thick_segment_mut, fixture_segment, to_pixel,
};
use crate::style::RenderStyle;
use image::{Rgb, RgbImage};
use planrast_core::{Fixture, FloorPlan};

/// Render a decoded floor plan onto a fresh canvas.
///
/// Polygons that are not renderable (fewer than two vertices, or any
/// non-finite coordinate) are skipped whole; they never contribute
/// pixels and never fail the render.
pub fn render(plan: &FloorPlan, style: &RenderStyle) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(
        style.image_size,
        style.image_size,
        Rgb(style.background),
    );

    for poly in &plan.boundaries {
        if !poly.is_renderable() {
            continue;
        }

        let pts: Vec<(i32, i32)> = poly
            .points
            .iter()
            .map(|p| (to_pixel(p.x), to_pixel(p.y)))
            .collect();

        // Wall segments with hatching, including the closing edge.
        for j in 0..pts.len() {
            let pt1 = pts[j];
            let pt2 = pts[(j + 1) % pts.len()];
            draw_thick_segment_mut(
                &mut canvas,
                pt1,
                pt2,
                style.wall_thickness,
                Rgb(style.wall_color),
            );
            draw_hatching_mut(
                &mut canvas,
                pt1,
                pt2,
                style.hatch_spacing,
                style.hatch_len,
                style.hatch_angle_deg,
                Rgb(style.hatch_color),
            );
        }

        // One structural column per corner.
        for &(cx, cy) in &pts {
            draw_column_marker_mut(&mut canvas, cx, cy, style.column_size, Rgb(style.column_color));
        }
    }

    if let Some(doors) = &plan.doors {
        draw_fixtures(&mut canvas, doors, style.door_thickness, Rgb(style.door_color));
    }
    if let Some(windows) = &plan.windows {
        draw_fixtures(
            &mut canvas,
            windows,
            style.window_thickness,
            Rgb(style.window_color),
        );
    }

    canvas
}

fn draw_fixtures(canvas: &mut RgbImage, fixtures: &[Fixture], thickness: f64, color: Rgb<u8>) {
    for f in fixtures {
        let (pt1, pt2) = fixture_segment(f.x, f.y, f.width, f.height, f.orientation);
        draw_thick_segment_mut(canvas, pt1, pt2, thickness, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planrast_core::{Point2D, Polygon};

    fn square_plan() -> FloorPlan {
        FloorPlan {
            boundaries: vec![Polygon::new(vec![
                Point2D::new(40.0, 40.0),
                Point2D::new(200.0, 40.0),
                Point2D::new(200.0, 200.0),
                Point2D::new(40.0, 200.0),
            ])],
            doors: None,
            windows: None,
        }
    }

    fn count_color(canvas: &RgbImage, color: [u8; 3]) -> usize {
        canvas.pixels().filter(|p| p.0 == color).count()
    }

    #[test]
    fn test_canvas_dimensions() {
        let canvas = render(&square_plan(), &RenderStyle::default());
        assert_eq!(canvas.dimensions(), (256, 256));
    }

    #[test]
    fn test_every_edge_painted() {
        let style = RenderStyle::default();
        let canvas = render(&square_plan(), &style);

        // Midpoint of each of the four edges carries wall ink (the exact
        // pixel may be a hatch tick crossing the stroke).
        for (x, y) in [(120, 40), (200, 120), (120, 200), (40, 120)] {
            assert_ne!(
                canvas.get_pixel(x, y).0,
                style.background,
                "edge midpoint ({x}, {y}) not painted"
            );
        }
    }

    #[test]
    fn test_column_markers_at_vertices() {
        let style = RenderStyle::default();
        let canvas = render(&square_plan(), &style);

        for (x, y) in [(40, 40), (200, 40), (200, 200), (40, 200)] {
            assert_eq!(canvas.get_pixel(x, y).0, style.column_color);
        }
    }

    #[test]
    fn test_hatching_present() {
        let style = RenderStyle::default();
        let canvas = render(&square_plan(), &style);
        assert!(count_color(&canvas, style.hatch_color) > 0);
    }

    #[test]
    fn test_short_polygon_skipped() {
        let plan = FloorPlan {
            boundaries: vec![Polygon::new(vec![Point2D::new(50.0, 50.0)])],
            doors: None,
            windows: None,
        };
        let style = RenderStyle::default();
        let canvas = render(&plan, &style);
        assert_eq!(count_color(&canvas, style.background), 256 * 256);
    }

    #[test]
    fn test_non_finite_polygon_skipped() {
        let plan = FloorPlan {
            boundaries: vec![Polygon::new(vec![
                Point2D::new(50.0, 50.0),
                Point2D::new(f64::NAN, 120.0),
                Point2D::new(120.0, 120.0),
            ])],
            doors: None,
            windows: None,
        };
        let style = RenderStyle::default();
        let canvas = render(&plan, &style);
        assert_eq!(count_color(&canvas, style.background), 256 * 256);
    }

    #[test]
    fn test_skipped_polygon_does_not_block_others() {
        let mut plan = square_plan();
        plan.boundaries.insert(
            0,
            Polygon::new(vec![Point2D::new(f64::INFINITY, 0.0), Point2D::new(1.0, 1.0)]),
        );
        let style = RenderStyle::default();
        let canvas = render(&plan, &style);
        assert!(count_color(&canvas, style.wall_color) > 0);
    }

    #[test]
    fn test_absent_fixtures_paint_nothing() {
        let style = RenderStyle::default();
        let canvas = render(&square_plan(), &style);
        assert_eq!(count_color(&canvas, style.door_color), 0);
        assert_eq!(count_color(&canvas, style.window_color), 0);
    }

    #[test]
    fn test_doors_and_windows_painted() {
        let mut plan = square_plan();
        plan.doors = Some(vec![Fixture {
            id: 1.0,
            x: 100.0,
            y: 40.0,
            width: 30.0,
            height: 0.0,
            orientation: 0,
        }]);
        plan.windows = Some(vec![Fixture {
            id: 1.0,
            x: 200.0,
            y: 100.0,
            width: 0.0,
            height: 30.0,
            orientation: 1,
        }]);

        let style = RenderStyle::default();
        let canvas = render(&plan, &style);

        // Fixtures overlay the walls they sit on.
        assert!(count_color(&canvas, style.door_color) > 0);
        assert!(count_color(&canvas, style.window_color) > 0);
        assert_eq!(canvas.get_pixel(110, 40).0, style.door_color);
        assert_eq!(canvas.get_pixel(200, 110).0, style.window_color);
    }

    #[test]
    fn test_two_point_polygon_renders_one_wall() {
        let plan = FloorPlan {
            boundaries: vec![Polygon::new(vec![
                Point2D::new(20.0, 128.0),
                Point2D::new(220.0, 128.0),
            ])],
            doors: None,
            windows: None,
        };
        let style = RenderStyle::default();
        let canvas = render(&plan, &style);
        assert_eq!(canvas.get_pixel(120, 128).0, style.wall_color);
    }
}
