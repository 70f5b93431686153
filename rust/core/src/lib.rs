// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan container decoding and data model
//!
//! This crate reads the structured floor-plan container (a nested JSON
//! record with a top-level `data` field) and exposes a strongly-typed
//! [`FloorPlan`]: room boundary polygons plus optional door and window
//! fixture records. All duck-typed access to the container lives here;
//! downstream crates only see validated types.
//!
//! # Usage
//!
//! ```rust,ignore
//! use planrast_core::decode_file;
//!
//! let plan = decode_file("apartment_07.json")?;
//! println!("{} rooms, {} doors", plan.boundaries.len(), plan.door_count());
//! ```

pub mod decode;
pub mod error;
pub mod types;

pub use decode::{decode_file, decode_slice};
pub use error::{Error, Result};
pub use types::{Fixture, FixtureKind, FloorPlan, Point2D, Polygon};
