use std::collections::{BTreeMap, BTreeSet};

use crate::models::backend_entry::BackendEntrySet;
use crate::models::playlist_entry::PlaylistEntrySet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedEntry {
    pub name: String,
    pub playlist_pipe: Option<String>,
    pub backend_url: String,
}

/// Outcome of checking one playlist against one network's muxes.
///
/// `added` maps names to the playlist's pipe line, `removed` maps names to
/// the backend url; both are sorted by name so reports come out stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    pub added: BTreeMap<String, Option<String>>,
    pub removed: BTreeMap<String, String>,
    pub modified: Vec<ModifiedEntry>,
}

impl ComparisonResult {
    pub fn compare(playlist: &PlaylistEntrySet, backend: &BackendEntrySet) -> Self {
        let playlist_names: BTreeSet<&String> = playlist.names().collect();
        let backend_names: BTreeSet<&String> = backend.names().collect();

        let mut result = ComparisonResult::default();

        for name in playlist_names.difference(&backend_names) {
            let pipe = playlist.get(name).and_then(|e| e.pipe_line.clone());
            result.added.insert((*name).clone(), pipe);
        }

        for name in backend_names.difference(&playlist_names) {
            if let Some(entry) = backend.get(name) {
                result.removed.insert((*name).clone(), entry.url.clone());
            }
        }

        for name in playlist_names.intersection(&backend_names) {
            let (Some(ours), Some(theirs)) = (playlist.get(name), backend.get(name)) else {
                continue;
            };
            // a missing pipe line never matches, even an empty url
            if ours.pipe_line.as_deref() != Some(theirs.url.as_str()) {
                result.modified.push(ModifiedEntry {
                    name: (*name).clone(),
                    playlist_pipe: ours.pipe_line.clone(),
                    backend_url: theirs.url.clone(),
                });
            }
        }

        result
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    pub fn is_modified(&self, name: &str) -> bool {
        self.modified.iter().any(|m| m.name == name)
    }
}
