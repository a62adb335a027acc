use crate::convert::still_to_mp4;
use crate::foundation::core::StillClip;
use crate::foundation::error::StillcastError;
use crate::server::error::ApiError;
use axum::body::Bytes;
use axum::extract::Multipart;
use axum::http::header;
use axum::response::{IntoResponse, Response};

/// `POST /convert` — multipart form with `file` (image bytes), `duration`
/// (positive integer seconds) and `fps` (positive integer frames/second).
///
/// Returns the encoded MP4 as a file download, or a phase-named JSON
/// diagnostic on failure.
pub(crate) async fn convert(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut file: Option<Bytes> = None;
    let mut duration: Option<String> = None;
    let mut fps: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StillcastError::ingest(format!("failed to read multipart form: {e}")))?
    {
        match field.name() {
            Some("file") => {
                file = Some(field.bytes().await.map_err(|e| {
                    StillcastError::ingest(format!("failed to read uploaded file: {e}"))
                })?);
            }
            Some("duration") => {
                duration = Some(field.text().await.map_err(|e| {
                    StillcastError::ingest(format!("failed to read 'duration' field: {e}"))
                })?);
            }
            Some("fps") => {
                fps = Some(field.text().await.map_err(|e| {
                    StillcastError::ingest(format!("failed to read 'fps' field: {e}"))
                })?);
            }
            // Unknown parts are ignored.
            _ => {}
        }
    }

    let file =
        file.ok_or_else(|| StillcastError::parameter("missing required form part 'file'"))?;
    let clip = StillClip::new(
        parse_positive_int("duration", duration)?,
        parse_positive_int("fps", fps)?,
    )?;

    tracing::info!(
        upload_bytes = file.len(),
        duration_secs = clip.duration_secs,
        fps = clip.fps.get(),
        "received convert request"
    );

    // Decode + encode are CPU/IO-bound and blocking; keep them off the
    // async reactor.
    let video = tokio::task::spawn_blocking(move || still_to_mp4(&file, clip))
        .await
        .map_err(|e| {
            StillcastError::Other(anyhow::anyhow!("conversion task did not complete: {e}"))
        })??;

    Ok((
        [
            (header::CONTENT_TYPE, "video/mp4"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"output.mp4\"",
            ),
        ],
        video,
    )
        .into_response())
}

fn parse_positive_int(name: &str, raw: Option<String>) -> Result<u32, StillcastError> {
    let raw =
        raw.ok_or_else(|| StillcastError::parameter(format!("missing required field '{name}'")))?;
    raw.trim().parse::<u32>().map_err(|_| {
        StillcastError::parameter(format!("'{name}' must be a positive integer, got '{raw}'"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/server/convert.rs"]
mod tests;
