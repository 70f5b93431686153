// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canvas serialization to PNG

use crate::error::Result;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Write the canvas to a PNG file.
pub fn encode_file<P: AsRef<Path>>(canvas: &RgbImage, path: P) -> Result<()> {
    canvas.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Encode the canvas to in-memory PNG bytes.
pub fn encode_to_vec(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
