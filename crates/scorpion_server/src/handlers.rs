//! Request handlers.

use crate::{ApiError, AppState};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use scorpion_error::{ScorpionError, ScorpionErrorKind, StorageError, StorageErrorKind};
use scorpion_generator::GenerationRequest;
use scorpion_storage::{AssetKind, LogicalPath, MediaType, Resolved, validate_block_id};
use serde::Deserialize;
use serde_json::{Value, json};
use std::str::FromStr;

/// Body of `POST /update_prompt`.
///
/// Every field is optional here so a missing one is reported as `400` with a
/// JSON body rather than rejected by the extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePromptRequest {
    block_id: Option<String>,
    asset_type: Option<String>,
    content: Option<String>,
    /// Slide index of a single prompt entry to replace, as a number or numeric string
    image_id: Option<Value>,
}

/// Body of `POST /generate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest {
    block_id: Option<String>,
    /// Assets to regenerate; absent or `null` means all
    targets: Option<Vec<String>>,
    force: Option<bool>,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn image_index(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|&index| index > 0)
}

/// Liveness probe.
pub(crate) async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "ok", "mode": "omega_bridge"})),
    )
}

/// Overwrite a block's script or prompts document, or one prompt entry.
#[tracing::instrument(skip_all)]
pub(crate) async fn update_prompt(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePromptRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;

    let (Some(block_id), Some(asset_type)) =
        (non_empty(request.block_id), non_empty(request.asset_type))
    else {
        return Err(ApiError::bad_request("Missing blockId or assetType"));
    };
    let Some(content) = request.content else {
        return Err(ApiError::bad_request("Missing content"));
    };
    let kind = AssetKind::from_str(&asset_type)
        .map_err(|_| ApiError::bad_request(format!("Unknown assetType: {}", asset_type)))?;

    tracing::info!(block_id = %block_id, asset_type = %kind, "Updating block text");

    let path = match (kind, request.image_id) {
        (_, None) | (_, Some(Value::Null)) => {
            state.store().write_asset(&block_id, kind, &content).await?
        }
        (AssetKind::ImagePrompts, Some(image_id)) => {
            let index = image_index(&image_id).ok_or_else(|| {
                ApiError::bad_request(format!("Invalid imageId: {}", image_id))
            })?;
            if content.trim().is_empty() {
                return Err(ApiError::bad_request("Prompt content must not be empty"));
            }
            state
                .store()
                .write_prompt_entry(&block_id, index, &content)
                .await?
        }
        (AssetKind::Script, Some(_)) => {
            return Err(ApiError::bad_request(
                "imageId only applies to assetType image_prompts",
            ));
        }
    };

    Ok((
        StatusCode::OK,
        Json(json!({"status": "saved", "path": path.display().to_string()})),
    ))
}

/// Run the generator for a block and wait for it to finish.
#[tracing::instrument(skip_all)]
pub(crate) async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = json_body(payload)?;

    let Some(block_id) = non_empty(request.block_id) else {
        return Err(ApiError::bad_request("Missing blockId"));
    };
    validate_block_id(&block_id)?;

    let generation = GenerationRequest::new(block_id)?
        .with_targets(request.targets.unwrap_or_default())
        .with_force(request.force.unwrap_or_default());

    let report = state.generator().generate(&generation).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "log": report.stdout(),
            "targets": generation.targets(),
        })),
    ))
}

/// List every block as `<hour>/block_<id>`.
#[tracing::instrument(skip_all)]
pub(crate) async fn manifest(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let blocks = state.store().list_blocks().await?;
    Ok((StatusCode::OK, Json(json!({ "blocks": blocks }))))
}

/// Serve a block manifest for a block directory, or the bytes of a file.
#[tracing::instrument(skip_all, fields(path = %path))]
pub(crate) async fn fetch_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let logical = LogicalPath::parse(&path)?;

    let resolved = match state.resolver().resolve(&logical).await {
        Ok(resolved) => resolved,
        Err(e) if matches!(e.kind(), ScorpionErrorKind::NotFound(_)) => {
            return Err(ApiError::not_found());
        }
        Err(e) => return Err(e.into()),
    };

    match resolved {
        Resolved::BlockDirectory { path, hour } => {
            let block = state.loader().load(&path, &hour).await?;
            Ok((StatusCode::OK, Json(block)).into_response())
        }
        Resolved::File { path, media_type } => {
            let bytes = tokio::fs::read(&path).await.map_err(|e| {
                ScorpionError::from(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                ))))
            })?;
            let content_type = match media_type {
                Some(_) => MediaType::mime_type(&path),
                None => "application/octet-stream",
            };
            tracing::debug!(file = %path.display(), bytes = bytes.len(), content_type, "Serving file");
            Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
        }
    }
}
