/// A song on the practice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub year: i64,
    pub learned: bool,
}

impl Song {
    /// A new song, not yet learned.
    #[must_use]
    pub fn new(title: impl Into<String>, artist: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            year,
            learned: false,
        }
    }

    #[must_use]
    pub fn learned(mut self) -> Self {
        self.learned = true;
        self
    }
}
