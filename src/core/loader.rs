//! Drive loading: manifest fetch into a [`DriveView`].

use panview_core::{Listing, Manifest};

use super::error::FetchError;
use crate::config::SiteConfig;
use crate::models::DriveView;
use crate::utils::fetch_json_cached;

/// Build the view for a drive from its manifest.
///
/// The manifest title wins over the configured drive name.
pub fn drive_view(drive: usize, fallback_title: &str, manifest: &Manifest) -> DriveView {
    DriveView {
        drive,
        title: manifest
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| fallback_title.to_string()),
        listing: Listing::from_manifest(manifest),
    }
}

/// Fetch (or read from session cache) the manifest of drive `drive`.
pub async fn load_drive(config: &SiteConfig, drive: usize) -> Result<DriveView, FetchError> {
    let Some(source) = config.drive(drive) else {
        return Err(FetchError::NetworkError(format!("drive d_{} is not configured", drive)));
    };
    let manifest: Manifest = fetch_json_cached(&source.manifest_url, config.fetch_timeout_ms).await?;
    Ok(drive_view(drive, &source.name, &manifest))
}
