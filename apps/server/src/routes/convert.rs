// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversion endpoint: container upload in, PNG out.

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::Response,
};
use planrast_raster::{convert, RenderStyle};
use serde::Deserialize;

/// Query parameters for the conversion endpoint.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Output canvas side length; falls back to the configured default.
    pub size: Option<u32>,
}

/// Extract file data from multipart request.
async fn extract_file(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default();
        tracing::debug!(field_name = %field_name, "Processing multipart field");

        if field_name == "file" {
            let bytes = field.bytes().await?;
            tracing::debug!(size = bytes.len(), "Extracted file from multipart");
            return Ok(bytes.to_vec());
        }
    }

    tracing::warn!("No 'file' field found in multipart request");
    Err(ApiError::MissingFile)
}

/// POST /api/v1/convert - Convert an uploaded floor-plan container to PNG.
///
/// The upload is persisted into a per-request temporary directory, the
/// pipeline runs on the blocking pool, and the directory is removed when
/// the request finishes, on success and on every failure path.
pub async fn convert_upload(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let data = extract_file(&mut multipart).await?;

    if data.len() > state.config.max_file_size_mb * 1024 * 1024 {
        return Err(ApiError::FileTooLarge {
            max_mb: state.config.max_file_size_mb,
        });
    }

    let image_size = query.size.unwrap_or(state.config.image_size);
    if !(16..=4096).contains(&image_size) {
        return Err(ApiError::InvalidSize(image_size));
    }

    tracing::info!(size = data.len(), image_size, "Converting uploaded container");

    // CPU-bound pipeline on the blocking pool; the TempDir guard cleans
    // the scratch area up whichever way the closure exits.
    let png = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ApiError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("input.json");
        let output = workdir.path().join("output.png");

        std::fs::write(&input, &data)?;
        convert(&input, &output, &RenderStyle::with_size(image_size))?;
        Ok(std::fs::read(&output)?)
    })
    .await??;

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "image/png")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"output.png\"",
        )
        .body(png.into())
        .map_err(|e| ApiError::Conversion(e.to_string()))?;

    Ok(response)
}
