use serde::Deserialize;
use std::collections::HashMap;

pub const PLAYLIST_EXTENSION: &str = ".m3u";

/// Body of every TVHeadend `*/grid` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GridResponse<T> {
    pub entries: Vec<T>,
}

/// A TVHeadend network, the backend's grouping of muxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Network {
    pub uuid: String,
    #[serde(default, rename = "networkname")]
    pub network_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Network {
    pub fn display_name(&self) -> &str {
        self.network_name.as_deref().unwrap_or(&self.uuid)
    }

    /// Playlist URL, if this network is fed from an M3U file.
    pub fn playlist_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| url.ends_with(PLAYLIST_EXTENSION))
    }
}

/// Raw mux record; non-IPTV muxes carry no `iptv_*` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Mux {
    #[serde(default)]
    pub iptv_sname: Option<String>,
    #[serde(default)]
    pub iptv_url: Option<String>,
    #[serde(default)]
    pub network_uuid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEntry {
    pub source_name: String,
    pub url: String,
    pub source_group_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendEntrySet {
    entries: HashMap<String, BackendEntry>,
}

impl BackendEntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the muxes belonging to `network_uuid`, keyed by service name.
    pub fn from_muxes(muxes: &[Mux], network_uuid: &str) -> Self {
        muxes
            .iter()
            .filter(|mux| mux.network_uuid.as_deref() == Some(network_uuid))
            .filter_map(|mux| {
                let source_name = mux.iptv_sname.clone()?;
                Some(BackendEntry {
                    source_name,
                    url: mux.iptv_url.clone().unwrap_or_default(),
                    source_group_id: network_uuid.to_string(),
                })
            })
            .collect()
    }

    pub fn insert(&mut self, entry: BackendEntry) {
        self.entries.insert(entry.source_name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&BackendEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BackendEntry> for BackendEntrySet {
    fn from_iter<I: IntoIterator<Item = BackendEntry>>(iter: I) -> Self {
        let mut set = BackendEntrySet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}
