pub mod backend_entry;
pub mod comparison;
pub mod playlist_entry;
pub mod report;
