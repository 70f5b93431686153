// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion pipeline: decode, render, encode
//!
//! Single-file conversion plus parallel batch conversion over a
//! directory. Each batch item runs isolated with its own canvas; one
//! item's failure is captured in the report and never aborts siblings.

use crate::encode::{encode_file, encode_to_vec};
use crate::error::Result;
use crate::render::render;
use crate::style::RenderStyle;
use planrast_core::{decode_file, decode_slice};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File extension of floor-plan container inputs.
pub const CONTAINER_EXT: &str = "json";

/// Convert one container file to a PNG file.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    style: &RenderStyle,
) -> Result<()> {
    let plan = decode_file(input)?;
    let canvas = render(&plan, style);
    encode_file(&canvas, output)
}

/// Convert container bytes to PNG bytes without touching the filesystem.
pub fn convert_slice(bytes: &[u8], style: &RenderStyle) -> Result<Vec<u8>> {
    let plan = decode_slice(bytes)?;
    let canvas = render(&plan, style);
    encode_to_vec(&canvas)
}

/// One failed batch item.
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub input: PathBuf,
    pub error: String,
}

/// Outcome of a batch conversion run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub converted: usize,
    pub failed: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

/// Convert every container file in `input_dir` into `output_dir`.
///
/// Discovery is non-recursive and matches on the `.json` extension; each
/// output keeps its input's stem with a `.png` extension. Files convert
/// independently in parallel. Only the directory scan itself (or creating
/// the output directory) can fail the whole run; per-file errors land in
/// the returned [`BatchReport`].
pub fn batch_convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    style: &RenderStyle,
) -> Result<BatchReport> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(CONTAINER_EXT))
        })
        .collect();
    inputs.sort();

    let results: Vec<std::result::Result<(), BatchFailure>> = inputs
        .par_iter()
        .map(|input| {
            let stem = input
                .file_stem()
                .unwrap_or_else(|| input.as_os_str())
                .to_os_string();
            let mut output = output_dir.join(stem);
            output.set_extension("png");

            convert(input, &output, style).map_err(|e| BatchFailure {
                input: input.clone(),
                error: e.to_string(),
            })
        })
        .collect();

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(()) => report.converted += 1,
            Err(failure) => {
                report.failed += 1;
                report.failures.push(failure);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageReader;

    const SQUARE: &str =
        r#"{"data": {"rBoundary": [[[40, 40], [200, 40], [200, 200], [40, 200]]]}}"#;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plan.json");
        let output = dir.path().join("plan.png");
        std::fs::write(&input, SQUARE).unwrap();

        convert(&input, &output, &RenderStyle::default()).unwrap();

        let img = ImageReader::open(&output).unwrap().decode().unwrap();
        assert_eq!(img.width(), 256);
        assert_eq!(img.height(), 256);

        let rgb = img.to_rgb8();
        let white = rgb.pixels().filter(|p| p.0 == [255, 255, 255]).count();
        let darker = rgb
            .pixels()
            .filter(|p| p.0 != [255, 255, 255])
            .count();
        // Mostly white background with visible boundary ink.
        assert!(white > (256 * 256) * 3 / 4);
        assert!(darker > 100);
        assert_ne!(rgb.get_pixel(120, 40).0, [255, 255, 255]);
    }

    #[test]
    fn test_convert_slice_respects_size() {
        let png = convert_slice(SQUARE.as_bytes(), &RenderStyle::with_size(128)).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), 128);
        assert_eq!(img.height(), 128);
    }

    #[test]
    fn test_batch_mixed_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pngs");
        std::fs::write(dir.path().join("good.json"), SQUARE).unwrap();
        std::fs::write(dir.path().join("bad.json"), "not a container").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let report = batch_convert(dir.path(), &out, &RenderStyle::default()).unwrap();

        assert_eq!(report.converted, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), 2);
        assert_eq!(report.failures[0].input, dir.path().join("bad.json"));
        assert!(out.join("good.png").exists());
        assert!(!out.join("bad.png").exists());
    }

    #[test]
    fn test_batch_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = batch_convert(&missing, dir.path().join("out"), &RenderStyle::default());
        assert!(err.is_err());
    }
}
