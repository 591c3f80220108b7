use std::path::PathBuf;

/// Where songs are stored and how the learned flag is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the song file, relative to the working directory by default.
    pub songs_file: PathBuf,

    /// Marker written for a learned song.
    pub learned_marker: char,

    /// Marker written for a song still to learn.
    pub unlearned_marker: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            songs_file: PathBuf::from("songs.csv"),
            learned_marker: 'l',
            unlearned_marker: 'u',
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_songs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.songs_file = path.into();
        self
    }

    /// The marker character to persist for the given flag.
    #[must_use]
    pub const fn marker_for(&self, learned: bool) -> char {
        if learned {
            self.learned_marker
        } else {
            self.unlearned_marker
        }
    }

    /// Whether a stored field is exactly the learned marker.
    ///
    /// Anything else, including the empty string, reads as unlearned.
    #[must_use]
    pub fn is_learned_marker(&self, field: &str) -> bool {
        let mut chars = field.chars();
        chars.next() == Some(self.learned_marker) && chars.next().is_none()
    }
}
