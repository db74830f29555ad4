use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{CheckError, Result};
use crate::models::backend_entry::{GridResponse, Mux, Network};
use crate::tvh_conn::TunerBackend;

// large enough for the grid endpoints to return everything in one page
const GRID_LIMIT: u32 = 999_999;

pub struct TvhConn {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl TvhConn {
    /// `server` is `host:port` of the TVHeadend web interface.
    pub fn new(server: &str, username: &str, password: &str, timeout: Duration) -> Result<Self> {
        let base_url = format!("http://{}", server.trim_end_matches('/'));
        info!("[-] TVHeadend API base URL: {}", base_url);
        let client = Client::builder().timeout(timeout).build()?;
        Ok(TvhConn {
            client,
            base_url,
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    fn grid_path(class: &str) -> String {
        format!("/api/mpegts/{}/grid?limit={}", class, GRID_LIMIT)
    }

    async fn get_grid<T: DeserializeOwned>(&self, class: &str) -> Result<Vec<T>> {
        let path = Self::grid_path(class);
        let url = format!("{}{}", self.base_url, path);

        let mut response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            debug!("[?] digest challenge from {}", url);
            let authorization = self.answer_challenge(&response, &path)?;
            response = self
                .client
                .get(&url)
                .header(AUTHORIZATION, authorization)
                .send()
                .await?;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Status { url, status });
        }

        let body = response.text().await?;
        debug!("[?] raw {} grid response: {} bytes", class, body.len());

        let grid: GridResponse<T> = serde_json::from_str(&body)?;
        Ok(grid.entries)
    }

    fn answer_challenge(&self, response: &Response, path: &str) -> Result<String> {
        let challenge = response
            .headers()
            .get_all(WWW_AUTHENTICATE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.trim_start().starts_with("Digest"))
            .ok_or_else(|| CheckError::Auth("server sent no digest challenge".to_string()))?;

        let mut prompt = digest_auth::parse(challenge)?;
        let context =
            digest_auth::AuthContext::new(self.username.as_str(), self.password.as_str(), path);
        Ok(prompt.respond(&context)?.to_header_string())
    }
}

#[async_trait]
impl TunerBackend for TvhConn {
    async fn networks(&self) -> Result<Vec<Network>> {
        let networks: Vec<Network> = self.get_grid("network").await?;
        debug!("[+] backend reports {} networks", networks.len());
        Ok(networks)
    }

    async fn muxes(&self) -> Result<Vec<Mux>> {
        let muxes: Vec<Mux> = self.get_grid("mux").await?;
        debug!("[+] backend reports {} muxes", muxes.len());
        Ok(muxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_path() {
        assert_eq!(
            TvhConn::grid_path("mux"),
            "/api/mpegts/mux/grid?limit=999999"
        );
    }

    #[test]
    fn test_base_url_trims_slash() {
        let conn = TvhConn::new("127.0.0.1:9981/", "admin", "secret", Duration::from_secs(5))
            .unwrap();
        assert_eq!(conn.base_url, "http://127.0.0.1:9981");
    }
}
