// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering style configuration

use serde::{Deserialize, Serialize};

/// All styling knobs for floor-plan rasterization, collected in one place
/// so every drawing step pulls from the same documented defaults.
///
/// Colors are RGB triples. Doors and windows are drawn in a fixed color
/// regardless of any per-record data in the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderStyle {
    /// Canvas side length in pixels (the output is always square).
    pub image_size: u32,
    /// Canvas background color.
    pub background: [u8; 3],
    /// Wall segment color.
    pub wall_color: [u8; 3],
    /// Wall stroke thickness in pixels.
    pub wall_thickness: f64,
    /// Hatch tick color.
    pub hatch_color: [u8; 3],
    /// Distance between consecutive hatch ticks along a wall.
    pub hatch_spacing: f64,
    /// Total length of one hatch tick.
    pub hatch_len: f64,
    /// Angle between the wall direction and the hatch ticks, in degrees.
    pub hatch_angle_deg: f64,
    /// Column marker fill color.
    pub column_color: [u8; 3],
    /// Side length of the square column marker, in pixels.
    pub column_size: i32,
    /// Door stroke color.
    pub door_color: [u8; 3],
    /// Door stroke thickness in pixels.
    pub door_thickness: f64,
    /// Window stroke color.
    pub window_color: [u8; 3],
    /// Window stroke thickness in pixels.
    pub window_thickness: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            image_size: 256,
            background: [255, 255, 255],
            wall_color: [132, 132, 132],
            wall_thickness: 3.0,
            hatch_color: [60, 60, 60],
            hatch_spacing: 9.0,
            hatch_len: 5.0,
            hatch_angle_deg: 45.0,
            column_color: [0, 0, 0],
            column_size: 5,
            door_color: [0, 0, 255],
            door_thickness: 4.0,
            window_color: [0, 255, 0],
            window_thickness: 2.0,
        }
    }
}

impl RenderStyle {
    /// Default style at a caller-chosen canvas size.
    pub fn with_size(image_size: u32) -> Self {
        Self {
            image_size,
            ..Self::default()
        }
    }
}
