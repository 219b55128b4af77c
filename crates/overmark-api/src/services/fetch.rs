//! Remote image fetch.
//!
//! Downloads image bytes over HTTP(S) with the client's configured timeout.
//! No retries: any network error, timeout, or non-2xx status fails the
//! request immediately.

use overmark_core::AppError;

/// Fetch raw bytes from `url`. `asset` names the asset ("base image" or
/// "logo") so error messages identify which fetch failed.
pub async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
    asset: &str,
) -> Result<Vec<u8>, AppError> {
    let url = url.trim();

    let parsed_url = reqwest::Url::parse(url)
        .map_err(|_| AppError::InvalidInput(format!("Invalid URL format: {}", url)))?;

    // Only allow HTTP/HTTPS
    if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
        return Err(AppError::InvalidInput(
            "Only HTTP and HTTPS URLs are allowed".to_string(),
        ));
    }

    tracing::debug!(url = %url, asset = asset, "Downloading image");

    let response = client.get(parsed_url).send().await.map_err(|e| {
        tracing::error!(error = %e, url = %url, "Failed to download image");
        AppError::Fetch(format!("Failed to fetch {}: {}", asset, e))
    })?;

    if !response.status().is_success() {
        return Err(AppError::Fetch(format!(
            "{} URL returned status code: {}",
            asset,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Fetch(format!("Failed to read {} response body: {}", asset, e)))?;

    Ok(bytes.to_vec())
}
