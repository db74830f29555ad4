use async_trait::async_trait;

use crate::error::Result;
use crate::models::backend_entry::{Mux, Network};

pub mod mock_tvh;
pub mod playlist_fetch;
pub mod tvh_conn;

/// Read-only view of a TVHeadend server's network and mux grids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TunerBackend: Send + Sync {
    async fn networks(&self) -> Result<Vec<Network>>;
    async fn muxes(&self) -> Result<Vec<Mux>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    async fn fetch_playlist(&self, url: &str) -> Result<String>;
}
