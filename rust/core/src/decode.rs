// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed decoding of the floor-plan container
//!
//! The container is a nested JSON record: a top-level `data` record with a
//! mandatory `rBoundary` field (array of polygons, each an array of
//! `[x, y]` pairs) and optional `doors`/`windows` fields (flat numeric
//! arrays whose rows are 6 values wide). Decoding validates presence and
//! shape up front and hands back a [`FloorPlan`]; nothing downstream ever
//! touches the raw record again.

use crate::error::{Error, Result};
use crate::types::{Fixture, FixtureKind, FloorPlan, Point2D, Polygon};
use serde::Deserialize;
use std::path::Path;

/// Serde model of the raw container. Field names follow the source data,
/// not Rust conventions.
#[derive(Debug, Deserialize)]
struct Container {
    data: DataRecord,
}

#[derive(Debug, Deserialize)]
struct DataRecord {
    #[serde(rename = "rBoundary")]
    r_boundary: Vec<Vec<[f64; 2]>>,
    doors: Option<Vec<f64>>,
    windows: Option<Vec<f64>>,
}

/// Decode a floor-plan container from raw bytes.
///
/// Fails with [`Error::Format`] when the bytes are not the expected nested
/// record or the mandatory boundary field is missing, and with
/// [`Error::FixtureShape`] when a fixture array is not row-aligned.
pub fn decode_slice(bytes: &[u8]) -> Result<FloorPlan> {
    let container: Container = serde_json::from_slice(bytes)?;

    let boundaries = container
        .data
        .r_boundary
        .into_iter()
        .map(|poly| {
            Polygon::new(
                poly.into_iter()
                    .map(|[x, y]| Point2D::new(x, y))
                    .collect(),
            )
        })
        .collect();

    let doors = container
        .data
        .doors
        .map(|raw| reshape_fixtures(FixtureKind::Door, &raw))
        .transpose()?;
    let windows = container
        .data
        .windows
        .map(|raw| reshape_fixtures(FixtureKind::Window, &raw))
        .transpose()?;

    Ok(FloorPlan {
        boundaries,
        doors,
        windows,
    })
}

/// Decode a floor-plan container file.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<FloorPlan> {
    let bytes = std::fs::read(path)?;
    decode_slice(&bytes)
}

/// Reshape a flat numeric array into 6-value fixture rows
/// (id, x, y, width, height, orientation).
fn reshape_fixtures(kind: FixtureKind, raw: &[f64]) -> Result<Vec<Fixture>> {
    if raw.len() % 6 != 0 {
        return Err(Error::FixtureShape {
            kind,
            len: raw.len(),
        });
    }

    Ok(raw
        .chunks_exact(6)
        .map(|row| Fixture {
            id: row[0],
            x: row[1],
            y: row[2],
            width: row[3],
            height: row[4],
            orientation: row[5] as i32,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_container(extra: &str) -> String {
        format!(
            r#"{{"data": {{"rBoundary": [[[10, 10], [50, 10], [50, 50], [10, 50]]]{}}}}}"#,
            extra
        )
    }

    #[test]
    fn test_decode_boundary_only() {
        let plan = decode_slice(square_container("").as_bytes()).unwrap();

        assert_eq!(plan.boundaries.len(), 1);
        assert_eq!(plan.boundaries[0].points.len(), 4);
        assert_eq!(plan.boundaries[0].points[1], Point2D::new(50.0, 10.0));
        assert!(plan.doors.is_none());
        assert!(plan.windows.is_none());
    }

    #[test]
    fn test_decode_fixtures() {
        let json = square_container(
            r#", "doors": [1, 20, 10, 8, 0, 0], "windows": [1, 50, 20, 0, 6, 1, 2, 50, 40, 0, 6, 3]"#,
        );
        let plan = decode_slice(json.as_bytes()).unwrap();

        assert_eq!(plan.door_count(), 1);
        assert_eq!(plan.window_count(), 2);

        let door = plan.doors.unwrap()[0];
        assert_eq!(door.x, 20.0);
        assert_eq!(door.width, 8.0);
        assert_eq!(door.orientation, 0);

        let second = plan.windows.unwrap()[1];
        assert_eq!(second.height, 6.0);
        assert_eq!(second.orientation, 3);
    }

    #[test]
    fn test_missing_boundary_fails() {
        let err = decode_slice(br#"{"data": {"doors": [1, 2, 3, 4, 5, 6]}}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_missing_data_record_fails() {
        let err = decode_slice(br#"{"rBoundary": []}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_not_json_fails() {
        let err = decode_slice(b"MATLAB 5.0 MAT-file").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn test_misaligned_fixture_array_fails() {
        let json = square_container(r#", "doors": [1, 20, 10, 8, 0, 0, 99]"#);
        let err = decode_slice(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::FixtureShape {
                kind: FixtureKind::Door,
                len: 7
            }
        ));
    }

    #[test]
    fn test_empty_fixture_array() {
        let json = square_container(r#", "windows": []"#);
        let plan = decode_slice(json.as_bytes()).unwrap();
        assert_eq!(plan.windows, Some(vec![]));
    }
}
