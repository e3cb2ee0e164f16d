use crate::server::error::DetectError;
use crate::server::types::{AppState, DetectResponse, Upload};
use crate::utils::constants::UPLOAD_FIELD_NAME;
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use bytes::BytesMut;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Instant;

// server status handler
pub async fn server_status_handler() -> Json<Value> {
    Json(json!({"status": "running"}))
}

// placeholder detection: the label has no relation to the image content
pub async fn detect_plant_handler(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DetectResponse>, DetectError> {
    let start_time = Instant::now();
    let mut multipart = multipart?;
    let upload = read_upload(&mut multipart).await?;

    if let Some(store) = &state.store {
        let path = store.persist(&upload).await?;
        tracing::info!(path = %path.display(), "upload persisted");
    }

    state.latency.wait().await;

    let detected_plant = state.labels.pick().to_string();
    tracing::info!(
        %detected_plant,
        bytes = upload.bytes.len(),
        elapsed = ?start_time.elapsed(),
        "detection complete"
    );

    Ok(Json(DetectResponse { detected_plant }))
}

// reads the `file` part in chunks, other parts are skipped
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, DetectError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let read_start = Instant::now();
        let mut buffer = BytesMut::new();

        while let Some(chunk) = field.chunk().await? {
            buffer.extend_from_slice(&chunk);

            if buffer.len() % (5 * 1024 * 1024) < chunk.len() {
                // Log every ~5MB
                tracing::debug!(
                    "Read progress: {} MB in {:?}",
                    buffer.len() / (1024 * 1024),
                    read_start.elapsed()
                );
            }
        }

        tracing::info!(
            file_name = ?file_name,
            "Total upload size: {} bytes, read in {:?}",
            buffer.len(),
            read_start.elapsed()
        );

        return Ok(Upload {
            file_name,
            bytes: buffer.freeze(),
        });
    }

    Err(DetectError::MissingFile)
}
