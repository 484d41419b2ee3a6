use std::path::Path;

use tracing::{debug, info};

use crate::error::FetchError;

/// One-shot download. Any transport failure or 4xx/5xx status is an error;
/// on success the whole body replaces whatever was at `destination`.
pub async fn fetch(url: &str, destination: &Path) -> Result<(), FetchError> {
    debug!("requesting {url}");
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.bytes().await?;
    tokio::fs::write(destination, &body)
        .await
        .map_err(|source| FetchError::Write {
            path: destination.to_path_buf(),
            source,
        })?;
    info!(
        bytes = body.len(),
        "downloaded {url} to {}",
        destination.display()
    );
    Ok(())
}
