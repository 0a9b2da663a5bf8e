//! HTTP download of release artifacts.

use reqwest::{Client, Response};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::{Error, Result};

/// User agent sent with every download.
pub const USER_AGENT: &str = concat!("setup-perl/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for downloads.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Client)
}

/// Download `url` into a fresh, uniquely named file under `dest_dir`.
///
/// A partially written file is removed before the error is returned.
pub async fn download_tool(client: &Client, url: &str, dest_dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dest_dir).await?;
    let dest = dest_dir.join(Uuid::new_v4().to_string());
    debug!(%url, ?dest, "Downloading tool");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::request(url, e))?;

    if !response.status().is_success() {
        return Err(Error::http_status(url, response.status().as_u16()));
    }

    match write_body(url, response, &dest).await {
        Ok(bytes) => {
            debug!(%url, ?dest, bytes, "Download complete");
            Ok(dest)
        }
        Err(e) => {
            let _ = tokio::fs::remove_file(&dest).await;
            Err(e)
        }
    }
}

async fn write_body(url: &str, mut response: Response, dest: &Path) -> Result<u64> {
    let mut file = tokio::fs::File::create(dest).await?;
    let mut written = 0u64;

    while let Some(chunk) = response.chunk().await.map_err(|e| Error::request(url, e))? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}
