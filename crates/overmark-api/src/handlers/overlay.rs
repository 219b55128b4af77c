//! Logo overlay handler.
//!
//! `POST /overlay-logo`: fetch a base image and a logo, composite the logo
//! onto the base with the requested position/size/opacity, and return the
//! result as base64 in the base image's original format.

use std::sync::Arc;

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use overmark_core::AppError;
use overmark_processing::{codec, LogoOverlay, LogoPosition, LogoSize, OverlayConfig};

use crate::error::{HttpAppError, ValidatedJson};
use crate::services::fetch::fetch_image;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRequest {
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub position: Option<String>,
    pub size: Option<String>,
    pub opacity: Option<f32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayResponse {
    pub success: bool,
    /// Base64-encoded composited image, in the base image's source format.
    pub image: String,
    pub mime_type: String,
    /// Dimensions of the base image, unchanged by the overlay.
    pub size: SizeInfo,
}

#[derive(Debug, Serialize)]
pub struct SizeInfo {
    pub width: u32,
    pub height: u32,
}

#[tracing::instrument(
    skip(state, body),
    fields(operation = "overlay_logo")
)]
pub async fn overlay_logo(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<OverlayRequest>,
) -> Result<Json<OverlayResponse>, HttpAppError> {
    let image_url = body
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let logo_url = body
        .logo_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (image_url, logo_url) = match (image_url, logo_url) {
        (Some(image_url), Some(logo_url)) => (image_url.to_string(), logo_url.to_string()),
        (image_url, logo_url) => {
            let mut missing = Vec::new();
            if image_url.is_none() {
                missing.push("imageUrl");
            }
            if logo_url.is_none() {
                missing.push("logoUrl");
            }
            return Err(HttpAppError::from(AppError::InvalidInput(format!(
                "Missing required fields: {} (imageUrl and logoUrl are required)",
                missing.join(", ")
            ))));
        }
    };

    let position = LogoPosition::parse(
        body.position
            .as_deref()
            .unwrap_or(&state.config.default_position),
    );
    let size = LogoSize::parse(body.size.as_deref().unwrap_or(&state.config.default_size));
    let opacity = body
        .opacity
        .unwrap_or(state.config.default_opacity)
        .clamp(0.0, 1.0);

    tracing::info!(
        image_url = %image_url,
        logo_url = %logo_url,
        position = ?position,
        size = ?size,
        opacity = opacity,
        "Processing overlay request"
    );

    // Both fetches are independent, so issue them concurrently. Either
    // failure short-circuits the request.
    let (image_bytes, logo_bytes) = tokio::try_join!(
        fetch_image(&state.http_client, &image_url, "base image"),
        fetch_image(&state.http_client, &logo_url, "logo"),
    )?;

    let overlay_config = OverlayConfig {
        position,
        size,
        opacity,
    };

    // Decode/resize/composite/encode are CPU-bound; keep them off the reactor.
    let (encoded, mime_type, width, height) = tokio::task::spawn_blocking(
        move || -> Result<(Vec<u8>, &'static str, u32, u32), AppError> {
            let base = codec::decode(&image_bytes)
                .map_err(|e| AppError::Decode(format!("Invalid base image: {}", e)))?;
            let logo = codec::decode(&logo_bytes)
                .map_err(|e| AppError::Decode(format!("Invalid logo image: {}", e)))?;

            let composited = LogoOverlay::apply(&base.image, &logo.image, &overlay_config)
                .map_err(|e| AppError::Composite(e.to_string()))?;

            let encoded = codec::encode(&composited, base.format)
                .map_err(|e| AppError::Composite(format!("Failed to encode composite: {}", e)))?;

            Ok((encoded, base.mime_type(), base.width, base.height))
        },
    )
    .await
    .map_err(|e| AppError::Internal(format!("Failed to process images: {}", e)))??;

    tracing::info!(
        width,
        height,
        mime_type = mime_type,
        output_bytes = encoded.len(),
        "Overlay completed"
    );

    Ok(Json(OverlayResponse {
        success: true,
        image: BASE64.encode(&encoded),
        mime_type: mime_type.to_string(),
        size: SizeInfo { width, height },
    }))
}
