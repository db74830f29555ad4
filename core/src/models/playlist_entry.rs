use std::collections::HashMap;

pub const METADATA_MARKER: &str = "#EXTINF";
pub const PIPE_PREFIX: &str = "pipe://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub name: String,
    pub metadata_line: String,
    pub pipe_line: Option<String>,
}

/// Name-keyed view of one playlist. A repeated name keeps the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistEntrySet {
    entries: HashMap<String, PlaylistEntry>,
}

// where the line scanner currently stands
enum ParseState {
    AwaitingMetadata,
    AwaitingPipe(String),
}

impl PlaylistEntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw M3U text. `#EXTINF` lines open an entry named after the text
    /// following their last comma; the next `pipe://` line becomes its
    /// launch command. Everything else is ignored.
    pub fn parse(content: &str) -> Self {
        let mut set = PlaylistEntrySet::new();
        let mut state = ParseState::AwaitingMetadata;

        // bare '\r' counts as a line break too; the empty pieces are ignored
        for line in content.split(['\r', '\n']) {
            if line.starts_with(METADATA_MARKER) {
                // a malformed #EXTINF leaves the previous state alone
                if let Some(name) = entry_name(line) {
                    set.insert(PlaylistEntry {
                        name: name.clone(),
                        metadata_line: line.to_string(),
                        pipe_line: None,
                    });
                    state = ParseState::AwaitingPipe(name);
                }
            } else if line.starts_with(PIPE_PREFIX) {
                let pending = std::mem::replace(&mut state, ParseState::AwaitingMetadata);
                if let ParseState::AwaitingPipe(name) = pending {
                    if let Some(entry) = set.entries.get_mut(&name) {
                        entry.pipe_line = Some(line.to_string());
                    }
                }
            }
        }

        set
    }

    pub fn insert(&mut self, entry: PlaylistEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&PlaylistEntry> {
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

impl FromIterator<PlaylistEntry> for PlaylistEntrySet {
    fn from_iter<I: IntoIterator<Item = PlaylistEntry>>(iter: I) -> Self {
        let mut set = PlaylistEntrySet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

fn entry_name(metadata_line: &str) -> Option<String> {
    let (_, tail) = metadata_line.rsplit_once(',')?;
    let name = tail.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
