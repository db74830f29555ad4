use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::error::{CheckError, Result};
use crate::tvh_conn::PlaylistSource;

pub const DEFAULT_PLAYLIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Plain unauthenticated GET of a playlist file.
pub struct HttpPlaylistFetcher {
    client: Client,
}

impl HttpPlaylistFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpPlaylistFetcher { client })
    }
}

#[async_trait]
impl PlaylistSource for HttpPlaylistFetcher {
    async fn fetch_playlist(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Status {
                url: url.to_string(),
                status,
            });
        }

        let content = response.text().await?;
        debug!("[?] fetched {} bytes from {}", content.len(), url);
        Ok(content)
    }
}
