use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{CheckError, Result};
use crate::models::backend_entry::{Mux, Network};
use crate::tvh_conn::{PlaylistSource, TunerBackend};

const MOCK_BASE_URL: &str = "http://mock-tvheadend:9981";

/// In-memory stand-in for a TVHeadend server and the web servers hosting
/// its playlists. Clones share state.
#[derive(Clone)]
pub struct MockTvh {
    networks: Arc<Mutex<Vec<Network>>>,
    muxes: Arc<Mutex<Vec<Mux>>>,
    playlists: Arc<Mutex<HashMap<String, String>>>,
    // number of upcoming mux queries that answer 500
    failing_mux_queries: Arc<Mutex<usize>>,
    backend_online: Arc<Mutex<bool>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTvh {
    pub fn new() -> Self {
        MockTvh {
            networks: Arc::new(Mutex::new(Vec::new())),
            muxes: Arc::new(Mutex::new(Vec::new())),
            playlists: Arc::new(Mutex::new(HashMap::new())),
            failing_mux_queries: Arc::new(Mutex::new(0)),
            backend_online: Arc::new(Mutex::new(true)),
        }
    }

    /// Register a network fed by `playlist_url`.
    pub fn add_network(&self, uuid: &str, name: &str, playlist_url: &str) {
        lock(&self.networks).push(Network {
            uuid: uuid.to_string(),
            network_name: Some(name.to_string()),
            url: Some(playlist_url.to_string()),
        });
    }

    pub fn add_mux(&self, network_uuid: &str, name: &str, url: &str) {
        lock(&self.muxes).push(Mux {
            iptv_sname: Some(name.to_string()),
            iptv_url: Some(url.to_string()),
            network_uuid: Some(network_uuid.to_string()),
        });
    }

    /// Serve `content` at `url`; unknown urls answer 404.
    pub fn add_playlist(&self, url: &str, content: &str) {
        lock(&self.playlists).insert(url.to_string(), content.to_string());
    }

    pub fn fail_next_mux_queries(&self, count: usize) {
        *lock(&self.failing_mux_queries) = count;
    }

    pub fn simulate_disconnect(&self) {
        *lock(&self.backend_online) = false;
    }

    pub fn simulate_reconnect(&self) {
        *lock(&self.backend_online) = true;
    }

    fn check_online(&self, path: &str) -> Result<()> {
        if *lock(&self.backend_online) {
            Ok(())
        } else {
            Err(CheckError::Status {
                url: format!("{}{}", MOCK_BASE_URL, path),
                status: StatusCode::SERVICE_UNAVAILABLE,
            })
        }
    }
}

impl Default for MockTvh {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TunerBackend for MockTvh {
    async fn networks(&self) -> Result<Vec<Network>> {
        self.check_online("/api/mpegts/network/grid")?;
        Ok(lock(&self.networks).clone())
    }

    async fn muxes(&self) -> Result<Vec<Mux>> {
        let path = "/api/mpegts/mux/grid";
        self.check_online(path)?;

        let mut failing = lock(&self.failing_mux_queries);
        if *failing > 0 {
            *failing -= 1;
            return Err(CheckError::Status {
                url: format!("{}{}", MOCK_BASE_URL, path),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        drop(failing);

        Ok(lock(&self.muxes).clone())
    }
}

#[async_trait]
impl PlaylistSource for MockTvh {
    async fn fetch_playlist(&self, url: &str) -> Result<String> {
        lock(&self.playlists)
            .get(url)
            .cloned()
            .ok_or_else(|| CheckError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }
}
