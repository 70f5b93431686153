// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan rasterization
//!
//! This crate turns a decoded floor plan into a fixed-size PNG suitable
//! as input to a downstream image model:
//! 1. Walls drawn as thick gray strokes with diagonal hatching
//! 2. Black column markers stamped at every boundary vertex
//! 3. Doors (blue) and windows (green) as grid-aligned strokes
//!
//! # Usage
//!
//! ```rust,ignore
//! use planrast_raster::{convert, RenderStyle};
//!
//! convert("plan.json", "plan.png", &RenderStyle::default())?;
//! ```

pub mod draw;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod style;

pub use draw::{fixture_segment, hatch_ticks, to_pixel};
pub use encode::{encode_file, encode_to_vec};
pub use error::{Error, Result};
pub use pipeline::{batch_convert, convert, convert_slice, BatchFailure, BatchReport};
pub use render::render;
pub use style::RenderStyle;
